//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values that flow through
//! the normalize and parse stages. These value objects provide validation at
//! construction time and prevent malformed numbers from being represented.

pub mod calling_code;
pub mod errors;
pub mod phone;

pub use calling_code::CallingCode;
pub use errors::ValidationError;
pub use phone::{NormalizedNumber, ParsedNumber};
