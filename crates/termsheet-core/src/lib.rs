pub mod deal;
pub mod error;
pub mod types;

#[cfg(feature = "economics")]
pub mod economics;

#[cfg(feature = "playbook")]
pub mod playbook;

pub use deal::{DealInput, DealParameters, LiquidationType};
pub use error::TermSheetError;
pub use types::*;

/// Standard result type for all termsheet operations
pub type TermSheetResult<T> = Result<T, TermSheetError>;
