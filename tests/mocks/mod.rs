pub mod mock_numbering_plan;

#[allow(unused_imports)]
pub use mock_numbering_plan::{MockNumberingPlan, TEST_CODE, TEST_LENGTH};
