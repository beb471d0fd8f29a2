pub mod confetti;
pub mod event;
pub mod ui;
