mod cache;
mod client;
mod errors;
mod named;
mod positional;
mod raw;

use crate::{
    cache::shared_cache, client::client, errors::errors, named::named, positional::positional,
    raw::raw,
};
use log::LevelFilter;
use pgbind::Driver;
use std::env;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Run the shared binder scenarios against `driver`.
///
/// Only ASCII text is used, the driver may have any encoding.
pub fn execute_tests<D: Driver>(driver: D) {
    log::info!("Running the binder scenarios for {}", D::NAME);
    positional(&driver);
    named(&driver);
    client(&driver);
    raw(&driver);
    errors(&driver);
    shared_cache(&driver);
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}
