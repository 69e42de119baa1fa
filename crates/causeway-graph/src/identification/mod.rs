//! Identification criteria: backdoor and frontdoor checks and the search
//! that turns them into an identification verdict.

pub mod backdoor;
pub mod candidates;
pub mod frontdoor;
pub mod result;
pub mod search;

pub use backdoor::backdoor_criterion;
pub use candidates::{CandidateSource, SizeBound};
pub use frontdoor::frontdoor_criterion;
pub use result::IdentificationResult;
pub use search::{identify_effect, identify_effect_with};
