//! Application service layer.
//!
//! Services contain the input policy (length limits, default calling code
//! resolution) and metrics that sit between the MCP handlers and the pure
//! pipeline functions.

mod lookup_service;

pub use lookup_service::{PhoneLookupService, PhoneLookupServiceImpl};
