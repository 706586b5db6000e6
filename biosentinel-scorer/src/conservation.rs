//! IUCN Red List categories and the map colours they are drawn with.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// IUCN Red List category reported for an occurrence.
///
/// Parsing never fails: unrecognised or missing statuses become
/// [`IucnCategory::Unknown`].
///
/// # Examples
/// ```
/// use biosentinel_scorer::{ConservationRisk, IucnCategory};
///
/// assert_eq!(IucnCategory::parse("cr"), IucnCategory::CriticallyEndangered);
/// assert_eq!(IucnCategory::parse("Near Threatened").risk(), ConservationRisk::Yellow);
/// assert_eq!(IucnCategory::parse("NE"), IucnCategory::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum IucnCategory {
    /// `EX`.
    Extinct,
    /// `EW`.
    ExtinctInWild,
    /// `CR`.
    CriticallyEndangered,
    /// `EN`.
    Endangered,
    /// `VU`.
    Vulnerable,
    /// `NT`.
    NearThreatened,
    /// `LC`.
    LeastConcern,
    /// `DD`.
    DataDeficient,
    /// Missing or unrecognised.
    #[default]
    Unknown,
}

impl IucnCategory {
    /// Parse a two-letter code or a full category name.
    ///
    /// Matching ignores case, and spaces or hyphens stand in for
    /// underscores.
    #[must_use]
    pub fn parse(status: &str) -> Self {
        let normalised: String = status
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();
        match normalised.as_str() {
            "EX" | "EXTINCT" => Self::Extinct,
            "EW" | "EXTINCT_IN_THE_WILD" | "EXTINCT_IN_WILD" => Self::ExtinctInWild,
            "CR" | "CRITICALLY_ENDANGERED" => Self::CriticallyEndangered,
            "EN" | "ENDANGERED" => Self::Endangered,
            "VU" | "VULNERABLE" => Self::Vulnerable,
            "NT" | "NEAR_THREATENED" => Self::NearThreatened,
            "LC" | "LEAST_CONCERN" => Self::LeastConcern,
            "DD" | "DATA_DEFICIENT" => Self::DataDeficient,
            _ => Self::Unknown,
        }
    }

    /// Two-letter Red List code, or `UNKNOWN`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Extinct => "EX",
            Self::ExtinctInWild => "EW",
            Self::CriticallyEndangered => "CR",
            Self::Endangered => "EN",
            Self::Vulnerable => "VU",
            Self::NearThreatened => "NT",
            Self::LeastConcern => "LC",
            Self::DataDeficient => "DD",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Map colour for this category.
    #[must_use]
    pub const fn risk(self) -> ConservationRisk {
        match self {
            Self::Extinct | Self::ExtinctInWild | Self::CriticallyEndangered => ConservationRisk::Red,
            Self::Endangered => ConservationRisk::Blue,
            Self::Vulnerable | Self::NearThreatened => ConservationRisk::Yellow,
            Self::LeastConcern | Self::DataDeficient | Self::Unknown => ConservationRisk::Green,
        }
    }
}

impl From<String> for IucnCategory {
    fn from(status: String) -> Self {
        Self::parse(&status)
    }
}

impl From<IucnCategory> for &'static str {
    fn from(category: IucnCategory) -> Self {
        category.code()
    }
}

/// Colour band a species is drawn with on the buffer-zone map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConservationRisk {
    /// Critically endangered or extinct.
    Red,
    /// Endangered.
    Blue,
    /// Vulnerable or near threatened.
    Yellow,
    /// Least concern, data deficient or unknown.
    Green,
}

/// Species counts per colour band.
///
/// # Examples
/// ```
/// use biosentinel_scorer::{IucnCategory, RiskBreakdown};
///
/// let breakdown: RiskBreakdown = ["CR", "EN", "LC", "bogus"]
///     .into_iter()
///     .map(|status| IucnCategory::parse(status).risk())
///     .collect();
/// assert_eq!(breakdown.total, 4);
/// assert_eq!(breakdown.green, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    /// Species counted.
    pub total: u32,
    /// Species in the red band.
    pub red: u32,
    /// Species in the blue band.
    pub blue: u32,
    /// Species in the yellow band.
    pub yellow: u32,
    /// Species in the green band.
    pub green: u32,
}

impl RiskBreakdown {
    /// Count one species in `risk`.
    pub const fn record(&mut self, risk: ConservationRisk) {
        let band = match risk {
            ConservationRisk::Red => &mut self.red,
            ConservationRisk::Blue => &mut self.blue,
            ConservationRisk::Yellow => &mut self.yellow,
            ConservationRisk::Green => &mut self.green,
        };
        *band = band.saturating_add(1);
        self.total = self.total.saturating_add(1);
    }
}

impl FromIterator<ConservationRisk> for RiskBreakdown {
    fn from_iter<I: IntoIterator<Item = ConservationRisk>>(iter: I) -> Self {
        let mut breakdown = Self::default();
        for risk in iter {
            breakdown.record(risk);
        }
        breakdown
    }
}
