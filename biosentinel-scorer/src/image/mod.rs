//! Authenticity assessment for uploaded images.
//!
//! The image domain is a binary gate rather than an additive score: an
//! image is rejected when the classifier's top label looks AI-generated or
//! when its pixel statistics look implausibly perfect. The rejection reason
//! is the first match of an ordered precedence list.

#![forbid(unsafe_code)]

mod classifier;
mod pixels;

pub use classifier::{ClassifierHandle, ImageClassifier, Prediction};
pub use pixels::{PixelStatistics, RgbRaster};

use biosentinel_core::{Bucket, InputError, Reason, RiskScorer, Rule, Weight, round_to, validate};
use serde::{Deserialize, Serialize};

const ACCEPTED: &str = "Image accepted: Appears to be a natural photo";

/// Validated inputs for one image.
///
/// # Examples
/// ```
/// use biosentinel_scorer::{ImageFeatures, PixelStatistics, Prediction};
///
/// let pixels = PixelStatistics::new(40.0, 0.1, 180, 0.2).expect("valid statistics");
/// let features = ImageFeatures::from_predictions(
///     &[Prediction::new("human", 0.3), Prediction::new("ai", 0.7)],
///     pixels,
/// )
/// .expect("valid features");
/// assert_eq!(features.ai_label(), "ai");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawImageFeatures")]
pub struct ImageFeatures {
    ai_label: String,
    ai_confidence: f64,
    #[serde(flatten)]
    pixels: PixelStatistics,
}

impl ImageFeatures {
    /// Build features from the classifier's top label.
    ///
    /// # Errors
    /// Returns [`InputError`] when `ai_confidence` is not finite or lies
    /// outside `[0, 1]`.
    pub fn new(
        ai_label: impl Into<String>,
        ai_confidence: f64,
        pixels: PixelStatistics,
    ) -> Result<Self, InputError> {
        Ok(Self {
            ai_label: ai_label.into(),
            ai_confidence: validate::unit_interval("aiConfidence", ai_confidence)?,
            pixels,
        })
    }

    /// Build features from a full prediction list.
    ///
    /// The prediction with the highest confidence wins; on a tie the
    /// earliest one is kept.
    ///
    /// # Errors
    /// Returns [`InputError::EmptyPredictions`] for an empty list and a
    /// range error when any confidence lies outside `[0, 1]`.
    pub fn from_predictions(
        predictions: &[Prediction],
        pixels: PixelStatistics,
    ) -> Result<Self, InputError> {
        let mut top: Option<&Prediction> = None;
        for prediction in predictions {
            validate::unit_interval("confidence", prediction.confidence)?;
            if top.is_none_or(|best| prediction.confidence > best.confidence) {
                top = Some(prediction);
            }
        }
        let best = top.ok_or(InputError::EmptyPredictions)?;
        Self::new(best.label.clone(), best.confidence, pixels)
    }

    /// Label of the top prediction.
    #[must_use]
    pub fn ai_label(&self) -> &str {
        &self.ai_label
    }

    /// Confidence of the top prediction.
    #[must_use]
    pub const fn ai_confidence(&self) -> f64 {
        self.ai_confidence
    }

    /// Pixel statistics of the image.
    #[must_use]
    pub const fn pixels(&self) -> &PixelStatistics {
        &self.pixels
    }

    /// Whether the top label names AI-generated content.
    #[must_use]
    pub fn is_ai(&self) -> bool {
        let label = self.ai_label.to_lowercase();
        label.contains("ai") || label.contains("artificial")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawImageFeatures {
    ai_label: String,
    ai_confidence: f64,
    #[serde(flatten)]
    pixels: PixelStatistics,
}

impl TryFrom<RawImageFeatures> for ImageFeatures {
    type Error = InputError;

    fn try_from(raw: RawImageFeatures) -> Result<Self, Self::Error> {
        Self::new(raw.ai_label, raw.ai_confidence, raw.pixels)
    }
}

/// Decision thresholds for the image gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageThresholds {
    /// AI confidence above which a rejection is reported as certain.
    pub ai_confidence: f64,
    /// Pixel quality above which statistics are suspicious.
    pub pixel_suspicion: f64,
}

impl Default for ImageThresholds {
    fn default() -> Self {
        Self {
            ai_confidence: 0.7,
            pixel_suspicion: 0.95,
        }
    }
}

/// Signals the verdict precedence is evaluated against.
#[derive(Debug, Clone, Copy)]
struct ImageSignals {
    is_ai: bool,
    confident_ai: bool,
    pixel_suspicious: bool,
}

fn verdict_precedence() -> Bucket<ImageSignals> {
    Bucket::new("verdict")
        .with_rule(Rule::new(
            Weight::ZERO,
            |s: &ImageSignals| s.confident_ai,
            Reason::Fixed("Image rejected: AI-generated content detected"),
        ))
        .with_rule(Rule::new(
            Weight::ZERO,
            |s: &ImageSignals| s.pixel_suspicious,
            Reason::Fixed("Image rejected: Suspicious pixel patterns detected"),
        ))
        .with_rule(Rule::new(
            Weight::ZERO,
            |s: &ImageSignals| s.is_ai,
            Reason::Fixed("Image rejected: Possible AI-generated content (low confidence)"),
        ))
}

/// Classifier verdict as reported on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiVerdict {
    /// The top label names AI-generated content.
    #[serde(rename = "AI-Generated")]
    AiGenerated,
    /// The top label names camera or human content.
    #[serde(rename = "Human-Created")]
    HumanCreated,
}

/// Classifier part of an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiDetection {
    /// Verdict derived from the top label.
    pub result: AiVerdict,
    /// Top label.
    pub label: String,
    /// Confidence of the top label.
    pub confidence: f64,
    /// Whether the top label names AI-generated content.
    pub is_ai: bool,
    /// Whether the classifier alone makes the image suspicious.
    pub is_suspicious: bool,
}

/// Pixel part of an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelAnalysis {
    /// Quality score rounded to four decimals.
    pub pixel_quality_score: f64,
    /// Whether the quality score exceeds the suspicion threshold.
    pub is_suspicious: bool,
    /// Grey-level standard deviation rounded to two decimals.
    pub pixel_std: f64,
    /// Edge density rounded to four decimals.
    pub edge_density: f64,
    /// Number of distinct grey levels.
    pub unique_colors: u32,
}

/// Final decision on an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallAssessment {
    /// Whether the image may be used.
    pub is_accepted: bool,
    /// Explanation of the decision.
    pub reason: String,
}

/// Full image assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAssessment {
    /// Classifier findings.
    pub ai_detection: AiDetection,
    /// Pixel statistics findings.
    pub pixel_analysis: PixelAnalysis,
    /// Combined decision.
    pub overall_assessment: OverallAssessment,
}

/// Gate images on classifier and pixel evidence.
///
/// # Examples
/// ```
/// use biosentinel_core::RiskScorer;
/// use biosentinel_scorer::{ImageFeatures, ImageScorer, PixelStatistics};
///
/// let pixels = PixelStatistics::new(10.0, 0.1, 50, 0.1).expect("valid statistics");
/// let features = ImageFeatures::new("ai", 0.92, pixels).expect("valid features");
/// let assessment = ImageScorer::default().score(&features);
/// assert!(!assessment.overall_assessment.is_accepted);
/// assert_eq!(
///     assessment.overall_assessment.reason,
///     "Image rejected: AI-generated content detected"
/// );
/// ```
#[derive(Debug, Default)]
pub struct ImageScorer {
    thresholds: ImageThresholds,
}

impl ImageScorer {
    /// Use custom thresholds.
    #[must_use]
    pub const fn with_thresholds(thresholds: ImageThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use.
    #[must_use]
    pub const fn thresholds(&self) -> ImageThresholds {
        self.thresholds
    }
}

impl RiskScorer for ImageScorer {
    type Features = ImageFeatures;
    type Output = ImageAssessment;

    fn score(&self, features: &ImageFeatures) -> ImageAssessment {
        let quality = features.pixels.quality_score();
        let is_ai = features.is_ai();
        let signals = ImageSignals {
            is_ai,
            confident_ai: is_ai && features.ai_confidence > self.thresholds.ai_confidence,
            pixel_suspicious: quality > self.thresholds.pixel_suspicion,
        };
        let reason = verdict_precedence()
            .first_match(&signals)
            .map_or_else(|| ACCEPTED.to_owned(), |rule| rule.reason(&signals));

        ImageAssessment {
            ai_detection: AiDetection {
                result: if is_ai {
                    AiVerdict::AiGenerated
                } else {
                    AiVerdict::HumanCreated
                },
                label: features.ai_label.clone(),
                confidence: features.ai_confidence,
                is_ai,
                is_suspicious: is_ai,
            },
            pixel_analysis: PixelAnalysis {
                pixel_quality_score: round_to(quality, 4),
                is_suspicious: signals.pixel_suspicious,
                pixel_std: round_to(features.pixels.pixel_std(), 2),
                edge_density: round_to(features.pixels.edge_density(), 4),
                unique_colors: features.pixels.unique_colors(),
            },
            overall_assessment: OverallAssessment {
                is_accepted: !(signals.is_ai || signals.pixel_suspicious),
                reason,
            },
        }
    }
}
