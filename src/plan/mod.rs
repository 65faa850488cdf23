//! Numbering-plan lookups.
//!
//! The pipeline never touches numbering data directly; it goes through the
//! [`NumberingPlan`] trait so the dataset can be injected and replaced.

mod libphonenumber_plan;
mod region_names;
mod region_table;
mod traits;

pub use libphonenumber_plan::LibPhonenumberPlan;
pub use region_table::{PrefixEntry, RegionEntry, RegionTable};
pub use traits::NumberingPlan;
