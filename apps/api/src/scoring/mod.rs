// Scoring: skill matching, the per-component scorers and aggregation.
// Every scorer is a pure function of parsed facts; shared tables are read-only.

pub mod aggregator;
pub mod ats;
pub mod education;
pub mod experience;
pub mod keyword;
pub mod semantic;
pub mod skill_match;
pub mod taxonomy;
pub mod weights;
