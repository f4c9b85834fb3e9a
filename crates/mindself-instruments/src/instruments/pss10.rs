use crate::Instrument;
use crate::scoring::{
    AdvicePriority, Citation, Question, ScaleCategory, ScaleDefinition, SeverityBand,
    Standardization, Subscale, TOTAL, options,
};

/// PSS-10: Perceived Stress Scale. 10 items scored 0-4, total 0-40.
/// Items 4, 5, 7 and 8 are positively worded and reversed as `4 - v`.
pub struct Pss10;

impl Instrument for Pss10 {
    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            ScaleDefinition {
                id: "pss10".to_string(),
                title: "PSS-10 Perceived Stress Scale".to_string(),
                short_title: "PSS-10".to_string(),
                description: "How often have you felt or thought a certain way?".to_string(),
                time_frame: "In the last month".to_string(),
                category: ScaleCategory::Stress,
                estimated_minutes: 4,
                options: options(&[
                    (0, "Never"),
                    (1, "Almost never"),
                    (2, "Sometimes"),
                    (3, "Fairly often"),
                    (4, "Very often"),
                ]),
                questions: vec![
                    Question::new("Been upset because of something that happened unexpectedly"),
                    Question::new("Felt that you were unable to control the important things in your life"),
                    Question::new("Felt nervous and stressed"),
                    Question::new("Felt confident about your ability to handle your personal problems").reversed(),
                    Question::new("Felt that things were going your way").reversed(),
                    Question::new("Found that you could not cope with all the things that you had to do"),
                    Question::new("Been able to control irritations in your life").reversed(),
                    Question::new("Felt that you were on top of things").reversed(),
                    Question::new("Been angered because of things that happened that were outside of your control"),
                    Question::new("Felt difficulties were piling up so high that you could not overcome them"),
                ],
                reverse_anchor: 4,
                standardization: Standardization::Identity,
                total: Subscale::new(
                    TOTAL,
                    "Perceived stress",
                    vec![
                        SeverityBand::new(0, 13, "Low stress", "Low perceived stress")
                            .advice("Your stress level is low and you appear to be coping well."),
                        SeverityBand::new(14, 26, "Moderate stress", "Moderate perceived stress")
                            .priority(AdvicePriority::Medium)
                            .advice("You are under moderate stress. Protecting sleep, exercise and social support can help."),
                        SeverityBand::new(27, 40, "High stress", "High perceived stress")
                            .priority(AdvicePriority::High)
                            .advice("Your stress level is high. Consider slowing down and reaching out for support."),
                    ],
                ),
                subscales: Vec::new(),
                safety_check: None,
                follow_up: None,
                general_advice: None,
                citations: vec![Citation::new(
                    "Cohen S, Kamarck T, Mermelstein R. A global measure of perceived stress. J Health Soc Behav. 1983;24(4):385-396.",
                    None,
                )],
            }
        });
        &DEFINITION
    }
}
