mod as_value;
mod cache;
mod client_query;
mod compiler;
mod composable;
mod driver;
mod encoder;
mod encoding;
mod error;
mod format;
mod params;
mod query;
mod raw_query;
mod scanner;
mod server_query;
mod sql_writer;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use cache::*;
pub use client_query::*;
pub use compiler::*;
pub use composable::*;
pub use driver::*;
pub use encoder::*;
pub use encoding::*;
pub use error::*;
pub use format::*;
pub use params::*;
pub use query::*;
pub use raw_query::*;
pub use scanner::*;
pub use server_query::*;
pub use sql_writer::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
