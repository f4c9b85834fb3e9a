//! The scoring engine.
//!
//! One generic routine reads the declarative fields of a
//! [`ScaleDefinition`]; nothing here is specific to an instrument.

use crate::error::InstrumentError;
use crate::result::{Advice, ItemScore, RiskAlert, ScoreResult, SubscaleScore};
use crate::scoring::{AdvicePriority, ScaleDefinition, SeverityBand, Subscale};

/// Score a completed answer sequence against a definition.
///
/// `answers[i]` is the option index chosen for question `i`. The only
/// failures are precondition violations; any valid input produces a full
/// result.
pub fn score_definition(
    definition: &ScaleDefinition,
    answers: &[u32],
) -> Result<ScoreResult, InstrumentError> {
    if answers.len() != definition.questions.len() {
        return Err(InstrumentError::InvalidAnswerCount {
            scale_id: definition.id.clone(),
            expected: definition.questions.len(),
            actual: answers.len(),
        });
    }

    let mut items = Vec::with_capacity(answers.len());
    for (index, (question, &answer)) in definition.questions.iter().zip(answers).enumerate() {
        let value =
            definition
                .option_value(answer)
                .ok_or_else(|| InstrumentError::InvalidAnswerValue {
                    scale_id: definition.id.clone(),
                    index,
                    value: answer,
                    option_count: definition.options.len(),
                })?;
        items.push(ItemScore {
            index,
            answer,
            value,
            contribution: definition.contribution(question, value),
            reversed: question.reverse,
        });
    }

    let total = score_subscale(definition, &definition.total, &items);
    let subscales: Vec<SubscaleScore> = definition
        .subscales
        .iter()
        .map(|s| score_subscale(definition, s, &items))
        .collect();

    let safety_flag = definition.safety_check.as_ref().and_then(|check| {
        items
            .get(check.item_index)
            .filter(|item| item.value >= check.threshold)
            .map(|_| check.message.clone())
    });

    let follow_up = definition
        .follow_up
        .as_ref()
        .filter(|f| f.applies_to(total.standardized))
        .cloned();

    let scored: Vec<&SubscaleScore> = std::iter::once(&total).chain(subscales.iter()).collect();
    let advice = collect_advice(definition, &scored);
    let alerts = collect_alerts(&scored);

    Ok(ScoreResult {
        scale_id: definition.id.clone(),
        total,
        subscales,
        items,
        safety_flag,
        follow_up,
        advice,
        alerts,
    })
}

fn score_subscale(
    definition: &ScaleDefinition,
    subscale: &Subscale,
    items: &[ItemScore],
) -> SubscaleScore {
    let raw: u32 = definition
        .questions
        .iter()
        .zip(items)
        .filter(|(q, _)| q.belongs_to(&subscale.id))
        .map(|(_, item)| item.contribution)
        .sum();

    let (_, raw_max) = definition.raw_range(&subscale.id);
    let (min, max) = definition.score_range(&subscale.id);
    let standardized = definition.standardization.apply(raw, raw_max);

    SubscaleScore {
        subscale_id: subscale.id.clone(),
        name: subscale.name.clone(),
        raw,
        standardized,
        min,
        max,
        band: classify_or_fallback(definition, subscale, standardized),
    }
}

/// Band lookup that never fails. A miss is a definition bug: log it and
/// report the last band.
fn classify_or_fallback(
    definition: &ScaleDefinition,
    subscale: &Subscale,
    score: u32,
) -> SeverityBand {
    if let Some(band) = subscale.classify(score) {
        return band.clone();
    }

    tracing::error!(
        scale_id = %definition.id,
        subscale_id = %subscale.id,
        score,
        "no severity band matched; falling back to the last band"
    );

    subscale.bands.last().cloned().unwrap_or_else(|| {
        SeverityBand::new(score, score, "unclassified", "No severity table is defined")
    })
}

fn collect_advice(definition: &ScaleDefinition, scored: &[&SubscaleScore]) -> Vec<Advice> {
    let mut advice: Vec<Advice> = scored
        .iter()
        .filter_map(|s| {
            s.band.advice.as_ref().map(|text| Advice {
                priority: s.band.priority,
                subscale_id: Some(s.subscale_id.clone()),
                text: text.clone(),
            })
        })
        .collect();

    if let Some(text) = &definition.general_advice {
        advice.push(Advice {
            priority: AdvicePriority::General,
            subscale_id: None,
            text: text.clone(),
        });
    }
    advice
}

fn collect_alerts(scored: &[&SubscaleScore]) -> Vec<RiskAlert> {
    scored
        .iter()
        .filter(|s| s.band.priority == AdvicePriority::High)
        .map(|s| RiskAlert {
            subscale_id: s.subscale_id.clone(),
            level: s.band.level.clone(),
            message: format!(
                "{} is in the {} range ({} of {})",
                s.name,
                s.band.level.to_lowercase(),
                s.standardized,
                s.max
            ),
        })
        .collect()
}
