pub mod config;
pub mod error;
pub mod fields;
pub mod record;

pub use config::{CanonConfig, SelectionMode, UniquenessPolicy};
pub use error::{CanonError, Result};
pub use record::{ContactTable, Record};
