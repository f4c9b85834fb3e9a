//! mindself-instruments
//!
//! Self-assessment scale definitions and the scoring engine. Pure data and
//! pure functions: no I/O, no clock. Each scale declares its options,
//! items, reversal anchor, standardization and cut-point tables; a single
//! generic engine turns an answer sequence into a [`result::ScoreResult`].

pub mod engine;
pub mod error;
pub mod instruments;
pub mod result;
pub mod scoring;
pub mod session;

use std::sync::LazyLock;

use error::InstrumentError;
use result::ScoreResult;
use scoring::{DefinitionError, ScaleCategory, ScaleDefinition};

/// Trait implemented by each supported questionnaire.
pub trait Instrument: Send + Sync {
    /// The static definition the engine scores against.
    fn definition(&self) -> &ScaleDefinition;

    /// Unique identifier (e.g., "phq9", "dass21").
    fn id(&self) -> &str {
        &self.definition().id
    }

    /// Short display name (e.g., "PHQ-9").
    fn name(&self) -> &str {
        &self.definition().short_title
    }

    fn score(&self, answers: &[u32]) -> Result<ScoreResult, InstrumentError> {
        engine::score_definition(self.definition(), answers)
    }

    fn validate_definition(&self) -> Vec<DefinitionError> {
        self.definition().validate()
    }

    /// Format a result as plain markdown, e.g. for sharing or export.
    fn to_summary(&self, result: &ScoreResult) -> String {
        let definition = self.definition();
        let mut output = format!("## {}\n\n", definition.title);
        output.push_str(&format!(
            "**{}**: {} / {} ({})\n",
            result.total.name,
            result.total.standardized,
            result.total.max,
            result.total.band.level,
        ));
        if result.total.raw != result.total.standardized {
            output.push_str(&format!("Raw score: {}\n", result.total.raw));
        }

        if !result.subscales.is_empty() {
            output.push('\n');
            for subscale in &result.subscales {
                output.push_str(&format!(
                    "- {}: {} / {} ({})\n",
                    subscale.name, subscale.standardized, subscale.max, subscale.band.level,
                ));
            }
        }

        if let Some(flag) = &result.safety_flag {
            output.push_str(&format!("\n> {flag}\n"));
        }

        if let Some(follow_up) = &result.follow_up {
            output.push_str(&format!("\nNext step: {}\n", follow_up.message));
        }

        if !result.advice.is_empty() {
            output.push('\n');
            for advice in &result.advice {
                output.push_str(&format!("- {}\n", advice.text));
            }
        }
        output
    }
}

static REGISTRY: LazyLock<Vec<Box<dyn Instrument>>> = LazyLock::new(|| {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::pss10::Pss10),
        Box::new(instruments::sds::Sds),
        Box::new(instruments::sas::Sas),
        Box::new(instruments::rses::Rses),
        Box::new(instruments::who5::Who5),
        Box::new(instruments::psqi::Psqi),
        Box::new(instruments::dass21::Dass21),
    ]
});

/// Return all registered instruments, in display order.
pub fn all_instruments() -> &'static [Box<dyn Instrument>] {
    &REGISTRY
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<&'static dyn Instrument, InstrumentError> {
    all_instruments()
        .iter()
        .find(|i| i.id() == id)
        .map(|i| &**i)
        .ok_or_else(|| InstrumentError::UnknownScale(id.to_string()))
}

/// Look up a scale definition by ID.
pub fn get_scale(id: &str) -> Result<&'static ScaleDefinition, InstrumentError> {
    Ok(get_instrument(id)?.definition())
}

/// Instruments shown under a home-screen category.
pub fn scales_in_category(category: ScaleCategory) -> Vec<&'static dyn Instrument> {
    all_instruments()
        .iter()
        .filter(|i| i.definition().category == category)
        .map(|i| &**i)
        .collect()
}

/// Score an answer sequence for the scale with the given ID.
pub fn score(scale_id: &str, answers: &[u32]) -> Result<ScoreResult, InstrumentError> {
    get_instrument(scale_id)?.score(answers)
}

/// Check every registered definition, returning the first defect found.
/// Follow-ups must name a registered scale.
pub fn validate_registry() -> Result<(), InstrumentError> {
    for instrument in all_instruments() {
        if let Some(error) = instrument.validate_definition().into_iter().next() {
            return Err(error.into());
        }
        if let Some(follow_up) = &instrument.definition().follow_up
            && get_instrument(&follow_up.scale_id).is_err()
        {
            return Err(DefinitionError {
                scale_id: instrument.id().to_string(),
                subscale_id: None,
                message: format!("follow-up refers to unknown scale '{}'", follow_up.scale_id),
            }
            .into());
        }
    }
    Ok(())
}
