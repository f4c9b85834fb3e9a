use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::InstrumentError;

/// Id of the subscale every item contributes to.
pub const TOTAL: &str = "total";

/// Home-screen grouping of scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleCategory {
    Depression,
    Anxiety,
    Stress,
    SelfEsteem,
    Sleep,
    Wellbeing,
}

impl ScaleCategory {
    pub const ALL: [ScaleCategory; 6] = [
        ScaleCategory::Depression,
        ScaleCategory::Anxiety,
        ScaleCategory::Stress,
        ScaleCategory::SelfEsteem,
        ScaleCategory::Sleep,
        ScaleCategory::Wellbeing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleCategory::Depression => "depression",
            ScaleCategory::Anxiety => "anxiety",
            ScaleCategory::Stress => "stress",
            ScaleCategory::SelfEsteem => "self_esteem",
            ScaleCategory::Sleep => "sleep",
            ScaleCategory::Wellbeing => "wellbeing",
        }
    }
}

impl fmt::Display for ScaleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleCategory {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| InstrumentError::UnknownCategory(s.to_string()))
    }
}

/// One selectable response. Answers refer to options by index; `value` is
/// the point value the index stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub value: u32,
    pub text: String,
}

/// Build an option list from `(value, text)` pairs.
pub fn options(pairs: &[(u32, &str)]) -> Vec<ResponseOption> {
    pairs
        .iter()
        .map(|(value, text)| ResponseOption {
            value: *value,
            text: text.to_string(),
        })
        .collect()
}

/// A questionnaire item. Every item has the same shape; a unidimensional
/// instrument simply leaves `category` empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub text: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub reverse: bool,
}

impl Question {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            category: None,
            reverse: false,
        }
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn in_subscale(mut self, subscale_id: &str) -> Self {
        self.category = Some(subscale_id.to_string());
        self
    }

    /// Whether this item feeds the given subscale. Every item feeds
    /// [`TOTAL`].
    pub fn belongs_to(&self, subscale_id: &str) -> bool {
        subscale_id == TOTAL || self.category.as_deref() == Some(subscale_id)
    }
}

/// Transform from a raw subscale sum onto the reported scale.
///
/// All arithmetic is integer with half-up rounding, so scores are exact
/// and reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Standardization {
    /// The raw sum is reported as is.
    Identity,
    /// `raw * numerator / denominator`, e.g. 5/4 for the Zung index.
    Linear { numerator: u32, denominator: u32 },
    /// `raw / raw_max * 100`.
    PercentOfMax,
}

impl Standardization {
    pub fn apply(&self, raw: u32, raw_max: u32) -> u32 {
        match *self {
            Standardization::Identity => raw,
            Standardization::Linear {
                numerator,
                denominator,
            } => round_div(raw * numerator, denominator),
            Standardization::PercentOfMax => round_div(raw * 100, raw_max),
        }
    }
}

fn round_div(numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (2 * numerator + denominator) / (2 * denominator)
}

/// How urgently a piece of advice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AdvicePriority {
    General,
    Low,
    Medium,
    High,
}

/// A published cut-point range on the standardized score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub min: u32,
    pub max: u32,
    pub level: String,
    pub description: String,
    pub priority: AdvicePriority,
    pub advice: Option<String>,
}

impl SeverityBand {
    pub fn new(min: u32, max: u32, level: &str, description: &str) -> Self {
        Self {
            min,
            max,
            level: level.to_string(),
            description: description.to_string(),
            priority: AdvicePriority::Low,
            advice: None,
        }
    }

    pub fn priority(mut self, priority: AdvicePriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn advice(mut self, text: &str) -> Self {
        self.advice = Some(text.to_string());
        self
    }

    pub fn contains(&self, score: u32) -> bool {
        self.min <= score && score <= self.max
    }
}

/// A named group of items and its severity table.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub bands: Vec<SeverityBand>,
}

impl Subscale {
    pub fn new(id: &str, name: &str, bands: Vec<SeverityBand>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            bands,
        }
    }

    pub fn described(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// First band containing `score`, scanning in declared order.
    pub fn classify(&self, score: u32) -> Option<&SeverityBand> {
        self.bands.iter().find(|b| b.contains(score))
    }
}

/// Item-specific rule that raises a safety flag regardless of the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SafetyCheck {
    /// Zero-based question index.
    pub item_index: usize,
    /// Compared against the item's point value before any reversal.
    pub threshold: u32,
    pub message: String,
}

/// Suggest another scale when the total lands in `min..=max`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FollowUp {
    pub min: u32,
    pub max: u32,
    pub scale_id: String,
    pub message: String,
}

impl FollowUp {
    pub fn applies_to(&self, total: u32) -> bool {
        (self.min..=self.max).contains(&total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Citation {
    pub text: String,
    pub url: Option<String>,
}

impl Citation {
    pub fn new(text: &str, url: Option<&str>) -> Self {
        Self {
            text: text.to_string(),
            url: url.map(str::to_string),
        }
    }
}

/// Everything the engine needs to score one questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDefinition {
    pub id: String,
    pub title: String,
    pub short_title: String,
    pub description: String,
    pub time_frame: String,
    pub category: ScaleCategory,
    pub estimated_minutes: u32,
    pub options: Vec<ResponseOption>,
    pub questions: Vec<Question>,
    /// A reversed item contributes `reverse_anchor - value`.
    pub reverse_anchor: u32,
    pub standardization: Standardization,
    /// Whole-instrument score, fed by every item.
    pub total: Subscale,
    /// Named dimensions, in display order. Empty for unidimensional scales.
    pub subscales: Vec<Subscale>,
    pub safety_check: Option<SafetyCheck>,
    pub follow_up: Option<FollowUp>,
    pub general_advice: Option<String>,
    pub citations: Vec<Citation>,
}

impl ScaleDefinition {
    /// Point value of the option at `index`.
    pub fn option_value(&self, index: u32) -> Option<u32> {
        self.options.get(index as usize).map(|o| o.value)
    }

    pub fn min_value(&self) -> u32 {
        self.options.iter().map(|o| o.value).min().unwrap_or(0)
    }

    pub fn max_value(&self) -> u32 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }

    /// What `value` adds to the item's subscales after reversal.
    pub fn contribution(&self, question: &Question, value: u32) -> u32 {
        if question.reverse {
            self.reverse_anchor.saturating_sub(value)
        } else {
            value
        }
    }

    /// Look up a subscale by id, including [`TOTAL`].
    pub fn subscale(&self, id: &str) -> Option<&Subscale> {
        if id == TOTAL {
            return Some(&self.total);
        }
        self.subscales.iter().find(|s| s.id == id)
    }

    /// The total followed by every named subscale.
    pub fn all_subscales(&self) -> impl Iterator<Item = &Subscale> {
        std::iter::once(&self.total).chain(self.subscales.iter())
    }

    /// Smallest and largest raw sum a subscale can take.
    pub fn raw_range(&self, subscale_id: &str) -> (u32, u32) {
        let (lo, hi) = (self.min_value(), self.max_value());
        self.questions
            .iter()
            .filter(|q| q.belongs_to(subscale_id))
            .fold((0, 0), |(min, max), q| {
                let a = self.contribution(q, lo);
                let b = self.contribution(q, hi);
                (min + a.min(b), max + a.max(b))
            })
    }

    /// Smallest and largest reported (standardized) score of a subscale.
    pub fn score_range(&self, subscale_id: &str) -> (u32, u32) {
        let (raw_min, raw_max) = self.raw_range(subscale_id);
        (
            self.standardization.apply(raw_min, raw_max),
            self.standardization.apply(raw_max, raw_max),
        )
    }

    /// Check the definition for data errors: band gaps or overlaps, a bad
    /// reversal anchor, dangling item categories or an out-of-range safety
    /// rule.
    pub fn validate(&self) -> Vec<DefinitionError> {
        let mut errors = Vec::new();
        let mut push = |subscale_id: Option<&str>, message: String| {
            errors.push(DefinitionError {
                scale_id: self.id.clone(),
                subscale_id: subscale_id.map(str::to_string),
                message,
            });
        };

        if self.options.is_empty() {
            push(None, "no response options".to_string());
        }
        if self.questions.is_empty() {
            push(None, "no questions".to_string());
        }
        if self.total.id != TOTAL {
            push(
                Some(self.total.id.as_str()),
                format!("total subscale must have id '{TOTAL}'"),
            );
        }

        let expected_anchor = self.min_value() + self.max_value();
        if self.questions.iter().any(|q| q.reverse) && self.reverse_anchor != expected_anchor {
            push(
                None,
                format!(
                    "reverse anchor {} does not mirror option values (expected {expected_anchor})",
                    self.reverse_anchor
                ),
            );
        }

        for (index, question) in self.questions.iter().enumerate() {
            if let Some(category) = &question.category
                && category != TOTAL
                && !self.subscales.iter().any(|s| &s.id == category)
            {
                push(
                    Some(category.as_str()),
                    format!("question {} refers to an undeclared subscale", index + 1),
                );
            }
        }

        for subscale in self.all_subscales() {
            let (lo, hi) = self.score_range(&subscale.id);
            for message in band_coverage_errors(&subscale.bands, lo, hi) {
                push(Some(subscale.id.as_str()), message);
            }
        }

        if let Some(check) = &self.safety_check {
            if check.item_index >= self.questions.len() {
                push(
                    None,
                    format!(
                        "safety check refers to question {} of {}",
                        check.item_index + 1,
                        self.questions.len()
                    ),
                );
            }
            if check.threshold > self.max_value() {
                push(
                    None,
                    format!("safety threshold {} can never be reached", check.threshold),
                );
            }
        }

        if let Some(follow_up) = &self.follow_up {
            let (lo, hi) = self.score_range(TOTAL);
            if follow_up.min > follow_up.max || follow_up.min < lo || follow_up.max > hi {
                push(
                    None,
                    format!(
                        "follow-up range {}-{} is outside the scores {lo}-{hi}",
                        follow_up.min, follow_up.max
                    ),
                );
            }
            if follow_up.scale_id == self.id {
                push(None, "follow-up refers to the scale itself".to_string());
            }
        }

        errors
    }
}

fn band_coverage_errors(bands: &[SeverityBand], lo: u32, hi: u32) -> Vec<String> {
    let Some(first) = bands.first() else {
        return vec!["no severity bands".to_string()];
    };

    let mut errors = Vec::new();
    if first.min != lo {
        errors.push(format!("first band starts at {}, scores start at {lo}", first.min));
    }
    for band in bands {
        if band.min > band.max {
            errors.push(format!("band '{}' is empty ({}-{})", band.level, band.min, band.max));
        }
    }
    for pair in bands.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.min != prev.max + 1 {
            errors.push(format!(
                "bands '{}' ({}-{}) and '{}' ({}-{}) are not contiguous",
                prev.level, prev.min, prev.max, next.level, next.min, next.max
            ));
        }
    }
    if let Some(last) = bands.last()
        && last.max != hi
    {
        errors.push(format!("last band ends at {}, scores end at {hi}", last.max));
    }
    errors
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{scale_id}: {message}")]
pub struct DefinitionError {
    pub scale_id: String,
    pub subscale_id: Option<String>,
    pub message: String,
}
