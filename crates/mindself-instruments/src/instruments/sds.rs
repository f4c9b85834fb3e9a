use crate::Instrument;
use crate::scoring::{
    AdvicePriority, Citation, Question, SafetyCheck, ScaleCategory, ScaleDefinition,
    SeverityBand, Standardization, Subscale, TOTAL,
};

/// SDS: Zung Self-Rating Depression Scale.
/// 20 items scored 1-4 (raw 20-80); reported as the index `round(raw * 1.25)`,
/// 25-100. Ten positively worded items are reversed as `5 - v`.
pub struct Sds;

impl Instrument for Sds {
    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            ScaleDefinition {
                id: "sds".to_string(),
                title: "SDS Self-Rating Depression Scale".to_string(),
                short_title: "SDS".to_string(),
                description: "How often does each statement apply to you?".to_string(),
                time_frame: "During the past week".to_string(),
                category: ScaleCategory::Depression,
                estimated_minutes: 5,
                options: super::zung_frequency(),
                questions: vec![
                    Question::new("I feel down-hearted and blue"),
                    Question::new("Morning is when I feel the best").reversed(),
                    Question::new("I have crying spells or feel like it"),
                    Question::new("I have trouble sleeping at night"),
                    Question::new("I eat as much as I used to").reversed(),
                    Question::new("I still enjoy being with people I find attractive").reversed(),
                    Question::new("I notice that I am losing weight"),
                    Question::new("I have trouble with constipation"),
                    Question::new("My heart beats faster than usual"),
                    Question::new("I get tired for no reason"),
                    Question::new("My mind is as clear as it used to be").reversed(),
                    Question::new("I find it easy to do the things I used to").reversed(),
                    Question::new("I am restless and can't keep still"),
                    Question::new("I feel hopeful about the future").reversed(),
                    Question::new("I am more irritable than usual"),
                    Question::new("I find it easy to make decisions").reversed(),
                    Question::new("I feel that I am useful and needed").reversed(),
                    Question::new("My life is pretty full").reversed(),
                    Question::new("I feel that others would be better off if I were dead"),
                    Question::new("I still enjoy the things I used to do").reversed(),
                ],
                reverse_anchor: 5,
                standardization: Standardization::Linear {
                    numerator: 5,
                    denominator: 4,
                },
                total: Subscale::new(
                    TOTAL,
                    "Depression index",
                    vec![
                        SeverityBand::new(25, 52, "Normal", "No clear depressive symptoms")
                            .advice("You currently show no clear signs of depression."),
                        SeverityBand::new(53, 62, "Mild depression", "Mild depressive symptoms")
                            .advice("You may have a mild tendency towards depression. Adjusting your daily routine may help."),
                        SeverityBand::new(63, 72, "Moderate depression", "Moderate depressive symptoms")
                            .priority(AdvicePriority::Medium)
                            .advice("You may be experiencing moderate depression. Seeking professional help is strongly recommended."),
                        SeverityBand::new(73, 100, "Severe depression", "Severe depressive symptoms")
                            .priority(AdvicePriority::High)
                            .advice("Your depressive symptoms are severe. Please see a doctor as soon as possible."),
                    ],
                )
                .described("Index score: raw sum multiplied by 1.25"),
                subscales: Vec::new(),
                safety_check: Some(SafetyCheck {
                    item_index: 18,
                    threshold: 3,
                    message: "Safety note: if you are having thoughts of harming yourself, please seek help immediately.".to_string(),
                }),
                follow_up: None,
                general_advice: None,
                citations: vec![Citation::new(
                    "Zung WWK. A self-rating depression scale. Arch Gen Psychiatry. 1965;12:63-70.",
                    None,
                )],
            }
        });
        &DEFINITION
    }
}
