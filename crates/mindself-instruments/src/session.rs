use crate::engine::score_definition;
use crate::error::InstrumentError;
use crate::result::ScoreResult;
use crate::scoring::{Question, ScaleDefinition};

/// An in-progress questionnaire.
///
/// Owned by whatever front end walks the user through the questions; the
/// engine never holds one. Abandoning a test is just dropping the value.
#[derive(Debug, Clone)]
pub struct Attempt<'a> {
    definition: &'a ScaleDefinition,
    answers: Vec<Option<u32>>,
    step: usize,
}

impl<'a> Attempt<'a> {
    pub fn new(definition: &'a ScaleDefinition) -> Self {
        Self {
            definition,
            answers: vec![None; definition.questions.len()],
            step: 0,
        }
    }

    pub fn definition(&self) -> &'a ScaleDefinition {
        self.definition
    }

    /// Zero-based index of the question being shown.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        self.definition.questions.get(self.step)
    }

    pub fn current_answer(&self) -> Option<u32> {
        self.answers.get(self.step).copied().flatten()
    }

    pub fn answers(&self) -> &[Option<u32>] {
        &self.answers
    }

    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_last(&self) -> bool {
        self.step + 1 >= self.answers.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    /// Position of the current question as a rounded percentage.
    pub fn progress_percent(&self) -> u32 {
        if self.answers.is_empty() {
            return 100;
        }
        let shown = (self.step + 1) as u32;
        let len = self.answers.len() as u32;
        (shown * 200 + len) / (2 * len)
    }

    /// Record `option` for the current question and move to the next one.
    /// On the last question the cursor stays put.
    pub fn answer(&mut self, option: u32) -> Result<(), InstrumentError> {
        if option as usize >= self.definition.options.len() {
            return Err(InstrumentError::InvalidAnswerValue {
                scale_id: self.definition.id.clone(),
                index: self.step,
                value: option,
                option_count: self.definition.options.len(),
            });
        }
        if let Some(slot) = self.answers.get_mut(self.step) {
            *slot = Some(option);
        }
        if !self.is_last() {
            self.step += 1;
        }
        Ok(())
    }

    /// Step back one question. Returns false on the first question.
    pub fn back(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Jump to an already answered question, or to the first unanswered
    /// one.
    pub fn go_to(&mut self, step: usize) -> bool {
        let first_open = self
            .answers
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.answers.len());
        if step >= self.answers.len() || step > first_open {
            return false;
        }
        self.step = step;
        true
    }

    /// Score the attempt. Fails with `InvalidAnswerCount` while questions
    /// remain unanswered.
    pub fn finish(&self) -> Result<ScoreResult, InstrumentError> {
        let answers: Vec<u32> = self.answers.iter().flatten().copied().collect();
        if answers.len() != self.answers.len() {
            return Err(InstrumentError::InvalidAnswerCount {
                scale_id: self.definition.id.clone(),
                expected: self.answers.len(),
                actual: answers.len(),
            });
        }
        score_definition(self.definition, &answers)
    }
}
