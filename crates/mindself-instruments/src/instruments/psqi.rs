use crate::Instrument;
use crate::scoring::{
    AdvicePriority, Citation, Question, ScaleCategory, ScaleDefinition, SeverityBand,
    Standardization, Subscale, TOTAL, options,
};

/// Sleep-disturbance checklist built from the PSQI item 5 frequency
/// questions. 10 items scored 0-3, total 0-30.
pub struct Psqi;

impl Instrument for Psqi {
    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            let questions = [
                "Cannot get to sleep within 30 minutes",
                "Wake up in the middle of the night or early morning",
                "Have to get up to use the bathroom",
                "Cannot breathe comfortably",
                "Cough or snore loudly",
                "Feel too cold",
                "Feel too hot",
                "Have bad dreams",
                "Have pain",
                "Have trouble staying awake or keeping up energy during the day",
            ];

            ScaleDefinition {
                id: "psqi".to_string(),
                title: "PSQI Sleep Quality".to_string(),
                short_title: "PSQI".to_string(),
                description: "How often have you had trouble sleeping because you...".to_string(),
                time_frame: "During the past month".to_string(),
                category: ScaleCategory::Sleep,
                estimated_minutes: 4,
                options: options(&[
                    (0, "Not during the past month"),
                    (1, "Less than once a week"),
                    (2, "Once or twice a week"),
                    (3, "Three or more times a week"),
                ]),
                questions: questions.iter().map(|q| Question::new(q)).collect(),
                reverse_anchor: 3,
                standardization: Standardization::Identity,
                total: Subscale::new(
                    TOTAL,
                    "Sleep disturbance",
                    vec![
                        SeverityBand::new(0, 5, "Good sleep", "Sleep quality is good")
                            .advice("Your sleep quality is good. Keep it up."),
                        SeverityBand::new(6, 10, "Fair sleep", "Sleep quality could be better")
                            .advice("Your sleep could be better. A regular sleep schedule usually helps."),
                        SeverityBand::new(11, 15, "Poor sleep", "Sleep problems are noticeable")
                            .priority(AdvicePriority::Medium)
                            .advice("Your sleep problems are noticeable. Learning about sleep hygiene is a good first step."),
                        SeverityBand::new(16, 30, "Sleep disturbance", "Sleep problems are marked")
                            .priority(AdvicePriority::High)
                            .advice("You may have a significant sleep problem. Seeing a doctor is strongly recommended."),
                    ],
                ),
                subscales: Vec::new(),
                safety_check: None,
                follow_up: None,
                general_advice: None,
                citations: vec![Citation::new(
                    "Buysse DJ, Reynolds CF, Monk TH, Berman SR, Kupfer DJ. The Pittsburgh Sleep Quality Index: a new instrument for psychiatric practice and research. Psychiatry Res. 1989;28(2):193-213.",
                    None,
                )],
            }
        });
        &DEFINITION
    }
}
