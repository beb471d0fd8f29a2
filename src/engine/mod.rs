pub mod app_engine;
pub mod input_handler;
