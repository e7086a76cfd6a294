pub mod error;
pub mod types;

pub use error::{RecordError, Result};
pub use types::{StatVariation, UnitSystem};
