use crate::Instrument;
use crate::scoring::{
    AdvicePriority, Citation, Question, ScaleCategory, ScaleDefinition, SeverityBand,
    Standardization, Subscale, TOTAL, options,
};

/// RSES: Rosenberg Self-Esteem Scale. 10 items scored 1-4, total 10-40.
/// Higher is better; negatively worded items are reversed as `5 - v`.
pub struct Rses;

impl Instrument for Rses {
    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            ScaleDefinition {
                id: "rosenberg".to_string(),
                title: "Rosenberg Self-Esteem Scale".to_string(),
                short_title: "RSES".to_string(),
                description: "How strongly do you agree with each statement about yourself?"
                    .to_string(),
                time_frame: "In general".to_string(),
                category: ScaleCategory::SelfEsteem,
                estimated_minutes: 3,
                options: options(&[
                    (1, "Strongly disagree"),
                    (2, "Disagree"),
                    (3, "Agree"),
                    (4, "Strongly agree"),
                ]),
                questions: vec![
                    Question::new("I feel that I am a person of worth, at least on an equal plane with others"),
                    Question::new("I feel that I have a number of good qualities"),
                    Question::new("All in all, I am inclined to feel that I am a failure").reversed(),
                    Question::new("I am able to do things as well as most other people"),
                    Question::new("I feel I do not have much to be proud of").reversed(),
                    Question::new("I take a positive attitude toward myself"),
                    Question::new("On the whole, I am satisfied with myself"),
                    Question::new("I wish I could have more respect for myself").reversed(),
                    Question::new("I certainly feel useless at times").reversed(),
                    Question::new("At times I think I am no good at all").reversed(),
                ],
                reverse_anchor: 5,
                standardization: Standardization::Identity,
                total: Subscale::new(
                    TOTAL,
                    "Self-esteem",
                    vec![
                        SeverityBand::new(10, 19, "Low self-esteem", "Self-evaluation is low")
                            .priority(AdvicePriority::Medium)
                            .advice("You may be judging yourself harshly. Try noticing and writing down your strengths."),
                        SeverityBand::new(20, 29, "Normal self-esteem", "Self-esteem in the typical range")
                            .advice("Your self-esteem is in the normal range. Paying more attention to your strengths can help."),
                        SeverityBand::new(30, 40, "High self-esteem", "Healthy self-esteem")
                            .advice("You have a healthy level of self-esteem. Keep up a positive view of yourself."),
                    ],
                ),
                subscales: Vec::new(),
                safety_check: None,
                follow_up: None,
                general_advice: None,
                citations: vec![Citation::new(
                    "Rosenberg M. Society and the Adolescent Self-Image. Princeton, NJ: Princeton University Press; 1965.",
                    None,
                )],
            }
        });
        &DEFINITION
    }
}
