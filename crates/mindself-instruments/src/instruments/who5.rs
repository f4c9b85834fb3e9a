use crate::Instrument;
use crate::scoring::{
    AdvicePriority, Citation, FollowUp, Question, ScaleCategory, ScaleDefinition, SeverityBand,
    Standardization, Subscale, TOTAL, options,
};

/// WHO-5 Well-Being Index. 5 items scored 0-5 (raw 0-25), reported as a
/// percentage (raw × 4). Higher is better; 28 or below suggests depression.
/// Each item is also reported as its own dimension.
pub struct Who5;

/// Performance of a single item, as a percentage of its maximum.
fn dimension_bands() -> Vec<SeverityBand> {
    vec![
        SeverityBand::new(0, 19, "Poor", "Rarely or never present"),
        SeverityBand::new(20, 39, "Below average", "Present some of the time"),
        SeverityBand::new(40, 59, "Average", "Present about half of the time"),
        SeverityBand::new(60, 79, "Good", "Present most of the time"),
        SeverityBand::new(80, 100, "Excellent", "Present nearly all of the time"),
    ]
}

impl Instrument for Who5 {
    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            let items = [
                ("positive_mood", "Positive mood", "Cheerfulness and good spirits", "I have felt cheerful and in good spirits"),
                ("calmness", "Calmness", "Feeling calm and relaxed", "I have felt calm and relaxed"),
                ("vitality", "Vitality", "Energy and physical vigour", "I have felt active and vigorous"),
                ("rested", "Rest", "Sleep quality and recovery", "I woke up feeling fresh and rested"),
                ("interest", "Interest", "Engagement with daily life", "My daily life has been filled with things that interest me"),
            ];

            ScaleDefinition {
                id: "who5".to_string(),
                title: "WHO-5 Well-Being Index".to_string(),
                short_title: "WHO-5".to_string(),
                description: "Which answer is closest to how you have been feeling?".to_string(),
                time_frame: "Over the last 2 weeks".to_string(),
                category: ScaleCategory::Wellbeing,
                estimated_minutes: 2,
                options: options(&[
                    (0, "At no time"),
                    (1, "Some of the time"),
                    (2, "Less than half of the time"),
                    (3, "More than half of the time"),
                    (4, "Most of the time"),
                    (5, "All of the time"),
                ]),
                questions: items
                    .iter()
                    .map(|(id, _, _, text)| Question::new(text).in_subscale(id))
                    .collect(),
                reverse_anchor: 5,
                standardization: Standardization::PercentOfMax,
                total: Subscale::new(
                    TOTAL,
                    "Well-being",
                    vec![
                        SeverityBand::new(0, 28, "Low well-being", "Well-being is low; likely depression")
                            .priority(AdvicePriority::High)
                            .advice("Your well-being is low. Support from a mental health professional is recommended."),
                        SeverityBand::new(29, 49, "Reduced well-being", "Well-being is below the screening threshold")
                            .priority(AdvicePriority::Medium)
                            .advice("Your well-being is reduced. Try adding enjoyable activities and social contact to your days."),
                        SeverityBand::new(50, 100, "Good well-being", "Well-being is good")
                            .advice("Your well-being is good. Keep up your positive routines."),
                    ],
                )
                .described("Percentage score: raw sum multiplied by 4"),
                subscales: items
                    .iter()
                    .map(|(id, name, description, _)| {
                        Subscale::new(id, name, dimension_bands()).described(description)
                    })
                    .collect(),
                safety_check: None,
                follow_up: Some(FollowUp {
                    min: 0,
                    max: 49,
                    scale_id: "phq9".to_string(),
                    message: "A score below 50 is a reason to screen for depression. Taking the PHQ-9 is recommended.".to_string(),
                }),
                general_advice: None,
                citations: vec![
                    Citation::new(
                        "World Health Organization. Well-being measures in primary health care: the DepCare project. Health for All Update. 1998;5:1-6.",
                        Some("https://www.euro.who.int/__data/assets/pdf_file/0010/134240/Health_for_All_Update_5.pdf"),
                    ),
                    Citation::new(
                        "Topp CW, Østergaard SD, Søndergaard S, Bech P. The WHO-5 Well-Being Index: a systematic review of the literature. Psychother Psychosom. 2015;84(3):167-176.",
                        Some("https://www.karger.com/Article/Abstract/376585"),
                    ),
                ],
            }
        });
        &DEFINITION
    }
}
