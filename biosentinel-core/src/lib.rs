//! Core domain types for the BioSentinel risk engine.
//!
//! Every scoring domain (species observations, satellite areas of interest,
//! uploaded images) follows the same pipeline:
//!
//! 1. a validated feature set is reduced to domain signals,
//! 2. a declarative [`RuleTable`] is evaluated against those signals into a
//!    [`ScoreAccumulator`],
//! 3. the accumulated total is mapped onto a [`RiskTier`], and
//! 4. [`ScoringResult::assemble`] packages total, tier and reasons for the
//!    caller.
//!
//! Weights and totals are fixed-point centi-points ([`Weight`], [`Score`]),
//! so recomputing a result from the same inputs always yields the same
//! total, tier and reason ordering.
//!
//! # Examples
//!
//! ```
//! use biosentinel_core::{Bucket, Reason, RiskTier, Rule, RuleTable, ScoringResult, Weight};
//!
//! let table = RuleTable::new().with_bucket(
//!     Bucket::new("level").with_rule(Rule::new(
//!         Weight::from_centis(150),
//!         |level: &u32| *level > 10,
//!         Reason::Fixed("Level above ten"),
//!     )),
//! );
//!
//! let result = ScoringResult::assemble(table.evaluate(&12), ());
//! assert_eq!(result.tier, RiskTier::AtRisk);
//! assert_eq!(result.reasons, vec!["Level above ten".to_owned()]);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod accumulator;
mod error;
mod result;
pub mod rule;
mod score;
mod scorer;
mod tier;
mod trend;
pub mod validate;

pub use accumulator::ScoreAccumulator;
pub use error::InputError;
pub use result::{ScoringResult, round_to};
pub use rule::{Bucket, Reason, Rule, RuleTable};
pub use score::{Score, Weight};
pub use scorer::RiskScorer;
pub use tier::RiskTier;
pub use trend::trend_ratio;
