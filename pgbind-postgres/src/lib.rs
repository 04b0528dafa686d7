mod driver;
mod encoder;
mod sql_writer;
mod types;
mod value_holder;

pub use driver::*;
pub use encoder::*;
pub use sql_writer::*;
pub use types::*;
pub use value_holder::*;
