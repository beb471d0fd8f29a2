use std::io;

use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

mod archive;
mod clipboard;
mod engine;
mod error;
mod error_utils;
mod menu;
mod options;
mod settings;
mod sound;
mod spin;
mod storage;
mod terminal;
mod translations;
mod ui;
mod widget;

use crate::engine::app_engine::build_engine;
use crate::storage::Storage;
use crate::terminal::terminal_manager;

const LOG_FILE: &str = "lunchpick.log";

fn setup_logging() -> Result<(), io::Error> {
    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d} {l} {M} - {m}{n}")))
        .build(LOG_FILE)
        .map_err(|e| error_utils::wrap_error("Failed to build the log appender", e))?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(Root::builder().appender("file").build(LevelFilter::Info))
        .map_err(|e| error_utils::wrap_error("Failed to build the logging config", e))?;

    log4rs::init_config(config)
        .map_err(|e| error_utils::wrap_error("Failed to initialise logging", e))?;
    Ok(())
}

// The terminal audio stream is not Send, so everything stays on one thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), io::Error> {
    setup_logging()?;
    log::info!("Starting up");

    let terminal_manager = terminal_manager::init()?;
    let storage = Storage::at_default_location()?;
    let mut engine = build_engine(terminal_manager, storage);
    engine.start().await
}
