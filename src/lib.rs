pub mod csv;
pub mod domain;
pub mod encoding;
pub mod error;

pub use crate::csv::{convert, Mode, Report, Warning};
pub use crate::error::{Error, Result};
