//! Declarative rule tables and the loop that evaluates them.
//!
//! A [`RuleTable`] is an ordered list of [`Bucket`]s. Each bucket groups
//! mutually exclusive [`Rule`]s over one signal, most severe first; at most
//! one rule per bucket fires, namely the first whose condition holds.
//! Independent signals live in separate buckets and are checked
//! unconditionally, in declared order.
//!
//! Conditions and reason builders are plain function pointers, so tables
//! are `Send + Sync` and can be shared between concurrent evaluations.
//!
//! # Examples
//! ```
//! use biosentinel_core::{Bucket, Reason, Rule, RuleTable, Weight};
//!
//! let table = RuleTable::new().with_bucket(
//!     Bucket::new("ratio")
//!         .with_rule(Rule::new(
//!             Weight::from_centis(150),
//!             |ratio: &f64| *ratio >= 3.0,
//!             Reason::Computed(|ratio: &f64| format!("Surge ({ratio:.1}x)")),
//!         ))
//!         .with_rule(Rule::new(
//!             Weight::from_centis(120),
//!             |ratio: &f64| *ratio >= 2.0,
//!             Reason::Fixed("Increase"),
//!         )),
//! );
//!
//! let outcome = table.evaluate(&5.0);
//! assert_eq!(outcome.total().centis(), 150);
//! assert_eq!(outcome.reasons(), ["Surge (5.0x)".to_owned()]);
//! ```

use log::debug;

use crate::{ScoreAccumulator, Weight};

/// How a fired rule explains itself.
#[derive(Debug)]
pub enum Reason<S> {
    /// A constant explanation.
    Fixed(&'static str),
    /// An explanation that embeds values computed from the signals.
    Computed(fn(&S) -> String),
}

impl<S> Reason<S> {
    /// Produce the reason text for `signals`.
    #[must_use]
    pub fn render(&self, signals: &S) -> String {
        match self {
            Self::Fixed(text) => (*text).to_owned(),
            Self::Computed(build) => build(signals),
        }
    }
}

/// A condition, the weight it contributes, and the reason it reports.
#[derive(Debug)]
pub struct Rule<S> {
    weight: Weight,
    condition: fn(&S) -> bool,
    reason: Reason<S>,
}

impl<S> Rule<S> {
    /// Build a rule.
    #[must_use]
    pub const fn new(weight: Weight, condition: fn(&S) -> bool, reason: Reason<S>) -> Self {
        Self {
            weight,
            condition,
            reason,
        }
    }

    /// Weight added when the rule fires.
    #[must_use]
    pub const fn weight(&self) -> Weight {
        self.weight
    }

    /// Report whether the rule's condition holds for `signals`.
    #[must_use]
    pub fn applies(&self, signals: &S) -> bool {
        (self.condition)(signals)
    }

    /// Reason text for `signals`.
    #[must_use]
    pub fn reason(&self, signals: &S) -> String {
        self.reason.render(signals)
    }
}

/// Mutually exclusive rules over one signal, most severe first.
#[derive(Debug)]
pub struct Bucket<S> {
    name: &'static str,
    rules: Vec<Rule<S>>,
}

impl<S> Bucket<S> {
    /// Create an empty bucket.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
        }
    }

    /// Append a rule with lower precedence than those already present.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule<S>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Bucket name, used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Rules in precedence order.
    #[must_use]
    pub fn rules(&self) -> &[Rule<S>] {
        &self.rules
    }

    /// Return the first rule whose condition holds.
    #[must_use]
    pub fn first_match(&self, signals: &S) -> Option<&Rule<S>> {
        self.rules.iter().find(|rule| rule.applies(signals))
    }
}

/// Ordered buckets evaluated by one generic loop.
#[derive(Debug)]
pub struct RuleTable<S> {
    buckets: Vec<Bucket<S>>,
}

impl<S> Default for RuleTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RuleTable<S> {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buckets: Vec::new(),
        }
    }

    /// Append a bucket after those already present.
    #[must_use]
    pub fn with_bucket(mut self, bucket: Bucket<S>) -> Self {
        self.buckets.push(bucket);
        self
    }

    /// Buckets in evaluation order.
    #[must_use]
    pub fn buckets(&self) -> &[Bucket<S>] {
        &self.buckets
    }

    /// Evaluate every bucket against `signals`.
    ///
    /// Each bucket contributes the weight and reason of its first matching
    /// rule, or nothing. The returned accumulator lists reasons in firing
    /// order.
    #[must_use]
    pub fn evaluate(&self, signals: &S) -> ScoreAccumulator {
        let mut accumulator = ScoreAccumulator::new();
        for bucket in &self.buckets {
            let Some(rule) = bucket.first_match(signals) else {
                continue;
            };
            let reason = rule.reason(signals);
            debug!(
                "rule fired in bucket {}: +{} ({reason})",
                bucket.name(),
                rule.weight()
            );
            accumulator.record(rule.weight(), reason);
        }
        accumulator
    }
}
