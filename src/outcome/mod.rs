//! Search result records and the listing normalizer.

mod cause_list;
mod normalize;
mod record;

pub use cause_list::{CauseListReport, SampleCase};
pub use normalize::{normalize, SearchOutcome};
pub use record::{CaseDetails, OutcomeRecord};
