use crate::Instrument;
use crate::scoring::{
    AdvicePriority, Citation, Question, ScaleCategory, ScaleDefinition, SeverityBand,
    Standardization, Subscale, TOTAL, options,
};

const DEPRESSION: &str = "depression";
const ANXIETY: &str = "anxiety";
const STRESS: &str = "stress";

/// DASS-21: Depression Anxiety Stress Scales, short form.
/// 21 items scored 0-3, seven per subscale. Subscale sums are doubled to
/// the DASS-42 metric (0-42) before the published cut-points apply.
pub struct Dass21;

impl Instrument for Dass21 {
    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            let items = [
                (STRESS, "I found it hard to wind down"),
                (ANXIETY, "I was aware of dryness of my mouth"),
                (DEPRESSION, "I couldn't seem to experience any positive feeling at all"),
                (ANXIETY, "I experienced breathing difficulty (e.g. excessively rapid breathing, breathlessness in the absence of physical exertion)"),
                (DEPRESSION, "I found it difficult to work up the initiative to do things"),
                (STRESS, "I tended to over-react to situations"),
                (ANXIETY, "I experienced trembling (e.g. in the hands)"),
                (STRESS, "I felt that I was using a lot of nervous energy"),
                (ANXIETY, "I was worried about situations in which I might panic and make a fool of myself"),
                (DEPRESSION, "I felt that I had nothing to look forward to"),
                (STRESS, "I found myself getting agitated"),
                (STRESS, "I found it difficult to relax"),
                (DEPRESSION, "I felt down-hearted and blue"),
                (STRESS, "I was intolerant of anything that kept me from getting on with what I was doing"),
                (ANXIETY, "I felt I was close to panic"),
                (DEPRESSION, "I was unable to become enthusiastic about anything"),
                (DEPRESSION, "I felt I wasn't worth much as a person"),
                (STRESS, "I felt that I was rather touchy"),
                (ANXIETY, "I was aware of the action of my heart in the absence of physical exertion (e.g. sense of heart rate increase, heart missing a beat)"),
                (ANXIETY, "I felt scared without any good reason"),
                (DEPRESSION, "I felt that life was meaningless"),
            ];

            ScaleDefinition {
                id: "dass21".to_string(),
                title: "DASS-21 Depression, Anxiety and Stress Scales".to_string(),
                short_title: "DASS-21".to_string(),
                description: "How much did each statement apply to you?".to_string(),
                time_frame: "Over the past week".to_string(),
                category: ScaleCategory::Stress,
                estimated_minutes: 6,
                options: options(&[
                    (0, "Did not apply to me at all"),
                    (1, "Applied to me to some degree, or some of the time"),
                    (2, "Applied to me to a considerable degree, or a good part of the time"),
                    (3, "Applied to me very much, or most of the time"),
                ]),
                questions: items
                    .iter()
                    .map(|(subscale, text)| Question::new(text).in_subscale(subscale))
                    .collect(),
                reverse_anchor: 3,
                standardization: Standardization::Linear {
                    numerator: 2,
                    denominator: 1,
                },
                total: Subscale::new(
                    TOTAL,
                    "Overall distress",
                    vec![
                        SeverityBand::new(0, 37, "Low distress", "Overall psychological health looks good"),
                        SeverityBand::new(38, 73, "Mild distress", "Some psychological distress; worth keeping an eye on"),
                        SeverityBand::new(74, 109, "Moderate distress", "Moderate psychological distress; professional support is advisable")
                            .priority(AdvicePriority::Medium),
                        SeverityBand::new(110, 126, "Severe distress", "Severe psychological distress; seek professional help soon")
                            .priority(AdvicePriority::High),
                    ],
                )
                .described("Sum of all 21 items, doubled"),
                subscales: vec![
                    Subscale::new(DEPRESSION, "Depression", severity_bands("depression", [9, 13, 20, 27]))
                        .described("Dysphoria, hopelessness, devaluation of life, lack of interest"),
                    Subscale::new(ANXIETY, "Anxiety", severity_bands("anxiety", [7, 9, 14, 19]))
                        .described("Autonomic arousal, situational anxiety, subjective fear"),
                    Subscale::new(STRESS, "Stress", severity_bands("stress", [14, 18, 25, 33]))
                        .described("Difficulty relaxing, nervous arousal, irritability, impatience"),
                ],
                safety_check: None,
                follow_up: None,
                general_advice: Some(
                    "Regular sleep, physical activity and a balanced diet all support mental health."
                        .to_string(),
                ),
                citations: vec![
                    Citation::new(
                        "Lovibond SH, Lovibond PF. Manual for the Depression Anxiety Stress Scales. 2nd ed. Sydney: Psychology Foundation; 1995.",
                        Some("https://www2.psy.unsw.edu.au/groups/dass/"),
                    ),
                    Citation::new(
                        "Antony MM, Bieling PJ, Cox BJ, Enns MW, Swinson RP. Psychometric properties of the 42-item and 21-item versions of the Depression Anxiety Stress Scales in clinical groups and a community sample. Psychol Assess. 1998;10(2):176-181.",
                        Some("https://psycnet.apa.org/record/1998-00593-008"),
                    ),
                    Citation::new(
                        "Henry JD, Crawford JR. The short-form version of the Depression Anxiety Stress Scales (DASS-21): construct validity and normative data in a large non-clinical sample. Br J Clin Psychol. 2005;44(2):227-239.",
                        Some("https://bpspsychub.onlinelibrary.wiley.com/doi/10.1348/014466505X29657"),
                    ),
                ],
            }
        });
        &DEFINITION
    }
}

/// Five DASS bands on the 0-42 metric, given the upper bounds of the first
/// four.
fn severity_bands(construct: &str, upper: [u32; 4]) -> Vec<SeverityBand> {
    let [normal, mild, moderate, severe] = upper;
    vec![
        SeverityBand::new(0, normal, "Normal", "Within the normal range"),
        SeverityBand::new(normal + 1, mild, "Mild", &format!("Mild {construct} symptoms"))
            .advice(&format!("Your {construct} level is mild. Self-care such as exercise, relaxation or meditation may help.")),
        SeverityBand::new(mild + 1, moderate, "Moderate", &format!("Moderate {construct} symptoms"))
            .priority(AdvicePriority::Medium)
            .advice(&format!("Your {construct} level is moderate. Keep an eye on it and consider professional counselling.")),
        SeverityBand::new(moderate + 1, severe, "Severe", &format!("Severe {construct} symptoms"))
            .priority(AdvicePriority::High)
            .advice(&format!("Your {construct} level is high. Please contact a mental health professional soon.")),
        SeverityBand::new(severe + 1, 42, "Extremely severe", &format!("Extremely severe {construct} symptoms"))
            .priority(AdvicePriority::High)
            .advice(&format!("Your {construct} level is very high. Please contact a mental health professional soon.")),
    ]
}
