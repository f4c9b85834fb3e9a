use crate::Instrument;
use crate::scoring::{
    AdvicePriority, Citation, Question, ScaleCategory, ScaleDefinition, SeverityBand,
    Standardization, Subscale, TOTAL,
};

/// SAS: Zung Self-Rating Anxiety Scale.
/// 20 items scored 1-4, index `round(raw * 1.25)`; items 5, 9, 13, 17 and 19
/// are reversed as `5 - v`.
pub struct Sas;

impl Instrument for Sas {
    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            ScaleDefinition {
                id: "sas".to_string(),
                title: "SAS Self-Rating Anxiety Scale".to_string(),
                short_title: "SAS".to_string(),
                description: "How often does each statement apply to you?".to_string(),
                time_frame: "During the past week".to_string(),
                category: ScaleCategory::Anxiety,
                estimated_minutes: 5,
                options: super::zung_frequency(),
                questions: vec![
                    Question::new("I feel more nervous and anxious than usual"),
                    Question::new("I feel afraid for no reason at all"),
                    Question::new("I get upset easily or feel panicky"),
                    Question::new("I feel like I'm falling apart and going to pieces"),
                    Question::new("I feel that everything is all right and nothing bad will happen").reversed(),
                    Question::new("My arms and legs shake and tremble"),
                    Question::new("I am bothered by headaches, neck and back pain"),
                    Question::new("I feel weak and get tired easily"),
                    Question::new("I feel calm and can sit still easily").reversed(),
                    Question::new("I can feel my heart beating fast"),
                    Question::new("I am bothered by dizzy spells"),
                    Question::new("I have fainting spells or feel like it"),
                    Question::new("I can breathe in and out easily").reversed(),
                    Question::new("I get numbness and tingling in my fingers and toes"),
                    Question::new("I am bothered by stomach aches or indigestion"),
                    Question::new("I have to empty my bladder often"),
                    Question::new("My hands are usually dry and warm").reversed(),
                    Question::new("My face gets hot and blushes"),
                    Question::new("I fall asleep easily and get a good night's rest").reversed(),
                    Question::new("I have nightmares"),
                ],
                reverse_anchor: 5,
                standardization: Standardization::Linear {
                    numerator: 5,
                    denominator: 4,
                },
                total: Subscale::new(
                    TOTAL,
                    "Anxiety index",
                    vec![
                        SeverityBand::new(25, 49, "Normal", "No clear anxiety symptoms")
                            .advice("You currently show no clear signs of anxiety."),
                        SeverityBand::new(50, 59, "Mild anxiety", "Mild anxiety symptoms")
                            .advice("You may have mild anxiety. Relaxation techniques may help."),
                        SeverityBand::new(60, 69, "Moderate anxiety", "Moderate anxiety symptoms")
                            .priority(AdvicePriority::Medium)
                            .advice("You may be experiencing moderate anxiety. Consider professional counselling."),
                        SeverityBand::new(70, 100, "Severe anxiety", "Severe anxiety symptoms")
                            .priority(AdvicePriority::High)
                            .advice("Your anxiety symptoms are severe. Please see a doctor soon."),
                    ],
                )
                .described("Index score: raw sum multiplied by 1.25"),
                subscales: Vec::new(),
                safety_check: None,
                follow_up: None,
                general_advice: None,
                citations: vec![Citation::new(
                    "Zung WWK. A rating instrument for anxiety disorders. Psychosomatics. 1971;12(6):371-379.",
                    None,
                )],
            }
        });
        &DEFINITION
    }
}
