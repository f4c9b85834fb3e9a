use crate::Instrument;
use crate::scoring::{
    AdvicePriority, Citation, Question, SafetyCheck, ScaleCategory, ScaleDefinition,
    SeverityBand, Standardization, Subscale, TOTAL,
};

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items scored 0-3, total 0-27. Item 9 asks about self-harm.
pub struct Phq9;

impl Instrument for Phq9 {
    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            let questions = [
                "Little interest or pleasure in doing things",
                "Feeling down, depressed, or hopeless",
                "Trouble falling or staying asleep, or sleeping too much",
                "Feeling tired or having little energy",
                "Poor appetite or overeating",
                "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
                "Trouble concentrating on things, such as reading the newspaper or watching television",
                "Moving or speaking so slowly that other people could have noticed, or being so fidgety or restless that you have been moving around a lot more than usual",
                "Thoughts that you would be better off dead, or of hurting yourself in some way",
            ];

            ScaleDefinition {
                id: "phq9".to_string(),
                title: "PHQ-9 Depression Screening".to_string(),
                short_title: "PHQ-9".to_string(),
                description: "How often have you been bothered by the following problems?"
                    .to_string(),
                time_frame: "Over the last 2 weeks".to_string(),
                category: ScaleCategory::Depression,
                estimated_minutes: 3,
                options: super::two_week_frequency(),
                questions: questions.iter().map(|q| Question::new(q)).collect(),
                reverse_anchor: 3,
                standardization: Standardization::Identity,
                total: Subscale::new(
                    TOTAL,
                    "Depression severity",
                    vec![
                        SeverityBand::new(0, 4, "Minimal", "Minimal or no depressive symptoms")
                            .advice("Your mood looks stable. Keep up regular sleep, exercise and time with people you enjoy."),
                        SeverityBand::new(5, 9, "Mild", "Mild depressive symptoms")
                            .advice("You may be experiencing some low mood. Self-help strategies such as behavioural activation, exercise and good sleep habits can help."),
                        SeverityBand::new(10, 14, "Moderate", "Moderate depressive symptoms")
                            .priority(AdvicePriority::Medium)
                            .advice("You may be experiencing moderate depression. Consider booking an assessment with a mental health professional."),
                        SeverityBand::new(15, 19, "Moderately severe", "Moderately severe depressive symptoms")
                            .priority(AdvicePriority::High)
                            .advice("Your symptoms are marked. Please seek help from a doctor or mental health professional soon."),
                        SeverityBand::new(20, 27, "Severe", "Severe depressive symptoms")
                            .priority(AdvicePriority::High)
                            .advice("Your symptoms are severe. Please see a doctor as soon as possible."),
                    ],
                ),
                subscales: Vec::new(),
                safety_check: Some(SafetyCheck {
                    item_index: 8,
                    threshold: 1,
                    message: "Safety note: you reported thoughts of death or self-harm. If you have these thoughts, contact emergency services or a crisis line right away.".to_string(),
                }),
                follow_up: None,
                general_advice: None,
                citations: vec![Citation::new(
                    "Kroenke K, Spitzer RL, Williams JBW. The PHQ-9: validity of a brief depression severity measure. J Gen Intern Med. 2001;16(9):606-613.",
                    None,
                )],
            }
        });
        &DEFINITION
    }
}
