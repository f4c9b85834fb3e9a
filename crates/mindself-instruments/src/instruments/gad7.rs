use crate::Instrument;
use crate::scoring::{
    AdvicePriority, Citation, Question, ScaleCategory, ScaleDefinition, SeverityBand,
    Standardization, Subscale, TOTAL,
};

/// GAD-7: Generalized Anxiety Disorder scale. 7 items scored 0-3, total 0-21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            let questions = [
                "Feeling nervous, anxious, or on edge",
                "Not being able to stop or control worrying",
                "Worrying too much about different things",
                "Trouble relaxing",
                "Being so restless that it is hard to sit still",
                "Becoming easily annoyed or irritable",
                "Feeling afraid, as if something awful might happen",
            ];

            ScaleDefinition {
                id: "gad7".to_string(),
                title: "GAD-7 Anxiety Scale".to_string(),
                short_title: "GAD-7".to_string(),
                description: "How often have you been bothered by the following problems?"
                    .to_string(),
                time_frame: "Over the last 2 weeks".to_string(),
                category: ScaleCategory::Anxiety,
                estimated_minutes: 2,
                options: super::two_week_frequency(),
                questions: questions.iter().map(|q| Question::new(q)).collect(),
                reverse_anchor: 3,
                standardization: Standardization::Identity,
                total: Subscale::new(
                    TOTAL,
                    "Anxiety severity",
                    vec![
                        SeverityBand::new(0, 4, "Minimal", "Minimal anxiety")
                            .advice("You seem relaxed. Keep up a healthy routine."),
                        SeverityBand::new(5, 9, "Mild", "Mild anxiety")
                            .advice("You may have some anxiety. Breathing exercises and mindfulness practice can help."),
                        SeverityBand::new(10, 14, "Moderate", "Moderate anxiety")
                            .priority(AdvicePriority::Medium)
                            .advice("You may be experiencing moderate anxiety. Consider talking to a professional."),
                        SeverityBand::new(15, 21, "Severe", "Severe anxiety")
                            .priority(AdvicePriority::High)
                            .advice("Your anxiety symptoms are severe. Please see a doctor for assessment and treatment soon."),
                    ],
                ),
                subscales: Vec::new(),
                safety_check: None,
                follow_up: None,
                general_advice: None,
                citations: vec![Citation::new(
                    "Spitzer RL, Kroenke K, Williams JBW, Löwe B. A brief measure for assessing generalized anxiety disorder: the GAD-7. Arch Intern Med. 2006;166(10):1092-1097.",
                    None,
                )],
            }
        });
        &DEFINITION
    }
}
