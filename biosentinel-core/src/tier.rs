//! Discrete risk tiers derived from an accumulated score.
//!
//! Breakpoints are left-closed and evaluated from the most severe tier
//! down: `>= 3.0` is `Critical`, `>= 2.0` is `High`, `>= 1.0` is `AtRisk`,
//! anything lower is `Positive`.
//!
//! # Examples
//! ```
//! use biosentinel_core::RiskTier;
//!
//! assert_eq!(RiskTier::classify(0.999), RiskTier::Positive);
//! assert_eq!(RiskTier::classify(1.0), RiskTier::AtRisk);
//! assert_eq!(RiskTier::AtRisk.to_string(), "At Risk");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{InputError, Score};

const CRITICAL_FROM: f64 = 3.0;
const HIGH_FROM: f64 = 2.0;
const AT_RISK_FROM: f64 = 1.0;

/// Ordered severity levels, least severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskTier {
    /// No notable risk signals.
    Positive,
    /// At least one moderate signal.
    #[cfg_attr(feature = "serde", serde(rename = "At Risk"))]
    AtRisk,
    /// Several signals or one strong signal.
    High,
    /// Strong combined evidence of risk.
    Critical,
}

impl RiskTier {
    /// Every tier in ascending order of severity.
    pub const ALL: [Self; 4] = [Self::Positive, Self::AtRisk, Self::High, Self::Critical];

    /// Map a total onto its tier.
    ///
    /// Non-finite totals classify as [`RiskTier::Positive`].
    #[must_use]
    pub fn classify(total: f64) -> Self {
        if total >= CRITICAL_FROM {
            Self::Critical
        } else if total >= HIGH_FROM {
            Self::High
        } else if total >= AT_RISK_FROM {
            Self::AtRisk
        } else {
            Self::Positive
        }
    }

    /// Map a fixed-point total onto its tier.
    #[must_use]
    pub fn from_score(score: Score) -> Self {
        Self::classify(score.as_points())
    }

    /// Return the wire name of the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::AtRisk => "At Risk",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "positive" => Ok(Self::Positive),
            "atrisk" => Ok(Self::AtRisk),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(InputError::UnknownTier { name: s.to_owned() }),
        }
    }
}
