pub mod error;
pub mod tariffs;
pub mod tiered;
pub mod types;

#[cfg(feature = "electricity")]
pub mod electricity;

#[cfg(feature = "water")]
pub mod water;

#[cfg(feature = "gst")]
pub mod gst;

#[cfg(feature = "income_tax")]
pub mod income_tax;

#[cfg(feature = "sip")]
pub mod sip;

pub use error::JanSevaError;
pub use types::*;

/// Standard result type for all janseva operations
pub type JanSevaResult<T> = Result<T, JanSevaError>;
