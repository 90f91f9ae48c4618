//! Multiple-choice reading quiz.

use cheonja_core::CharacterRecord;
use cheonja_generator::{RandomSource, SeededRandom, random::shuffle};

use crate::QuizError;

/// Maximum number of questions in one quiz.
pub const QUIZ_LENGTH: usize = 20;

/// Options offered per question.
pub const OPTION_COUNT: usize = 4;

/// One answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum QuizOption {
    /// A reading, `"sound / meaning"`.
    #[display("{_0}")]
    Reading(String),
    /// A placeholder used when the quiz has too few distinct readings.
    #[display("오답 {_0}")]
    Filler(usize),
}

/// A question: a glyph and the readings to choose from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    record: CharacterRecord,
    options: Vec<QuizOption>,
    correct: usize,
    chosen: Option<usize>,
}

impl Question {
    fn new<R>(record: &CharacterRecord, quiz_set: &[CharacterRecord], random: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let reading = record.reading();

        let mut others = quiz_set
            .iter()
            .filter(|other| other.id != record.id)
            .map(CharacterRecord::reading)
            .collect::<Vec<_>>();
        shuffle(&mut others, random);

        let mut wrong = Vec::with_capacity(OPTION_COUNT - 1);
        for other in others {
            if wrong.len() == OPTION_COUNT - 1 {
                break;
            }
            if other != reading && !wrong.contains(&other) {
                wrong.push(other);
            }
        }

        let mut options = wrong
            .into_iter()
            .map(QuizOption::Reading)
            .collect::<Vec<_>>();
        while options.len() < OPTION_COUNT - 1 {
            options.push(QuizOption::Filler(options.len() + 1));
        }
        options.push(QuizOption::Reading(reading.clone()));
        shuffle(&mut options, random);

        let correct = options
            .iter()
            .position(|option| matches!(option, QuizOption::Reading(r) if *r == reading))
            .unwrap_or_default();

        Self {
            record: record.clone(),
            options,
            correct,
            chosen: None,
        }
    }

    /// Returns the record being asked.
    #[must_use]
    pub fn record(&self) -> &CharacterRecord {
        &self.record
    }

    /// Returns the answer choices.
    #[must_use]
    pub fn options(&self) -> &[QuizOption] {
        &self.options
    }

    /// Returns the index of the correct option.
    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct
    }

    /// Returns the chosen option, once answered.
    #[must_use]
    pub fn chosen(&self) -> Option<usize> {
        self.chosen
    }

    /// Returns `true` once an option has been chosen.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.chosen.is_some()
    }

    /// Returns whether the chosen option was correct, once answered.
    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.chosen.map(|chosen| chosen == self.correct)
    }
}

/// A quiz over a set of records.
///
/// Up to [`QUIZ_LENGTH`] records with a complete reading are picked in random
/// order. Each question offers [`OPTION_COUNT`] readings: the correct one and
/// distinct readings of other records in the quiz, padded with
/// [`QuizOption::Filler`] when there are not enough.
///
/// # Example
///
/// ```
/// use cheonja_game::QuizSession;
/// use cheonja_generator::{SeededRandom, testing::pool_with_ids};
///
/// let pool = pool_with_ids(1..=8);
/// let mut quiz = QuizSession::new(pool.records(), SeededRandom::from_entropy());
/// assert_eq!(quiz.question_count(), 8);
///
/// let correct = quiz.current().unwrap().correct_option();
/// assert_eq!(quiz.answer(correct), Ok(true));
/// quiz.next().unwrap();
/// assert_eq!(quiz.position(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QuizSession<R = SeededRandom> {
    eligible: Vec<CharacterRecord>,
    questions: Vec<Question>,
    position: usize,
    exited: bool,
    random: R,
}

impl<R> QuizSession<R>
where
    R: RandomSource,
{
    /// Starts a quiz over `records`.
    ///
    /// Records with a blank glyph, sound or meaning are skipped. The quiz is
    /// finished immediately if none remain.
    pub fn new(records: &[CharacterRecord], random: R) -> Self {
        let eligible = records
            .iter()
            .filter(|record| record.has_complete_reading())
            .cloned()
            .collect::<Vec<_>>();
        if eligible.len() < records.len() {
            log::debug!(
                "skipped {} records without a complete reading",
                records.len() - eligible.len()
            );
        }
        let mut quiz = Self {
            eligible,
            questions: vec![],
            position: 0,
            exited: false,
            random,
        };
        quiz.restart();
        quiz
    }

    /// Reshuffles and starts over from the first question.
    pub fn restart(&mut self) {
        let mut picked = self.eligible.clone();
        shuffle(&mut picked, &mut self.random);
        picked.truncate(QUIZ_LENGTH);

        self.questions = picked
            .iter()
            .map(|record| Question::new(record, &picked, &mut self.random))
            .collect();
        self.position = 0;
        self.exited = false;
    }

    /// Returns the question being asked, or `None` once the quiz is over.
    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        if self.exited {
            return None;
        }
        self.questions.get(self.position)
    }

    /// Answers the current question with option `index`.
    ///
    /// Returns whether the answer was correct.
    ///
    /// # Errors
    ///
    /// - [`QuizError::NoQuestion`] if the quiz is over.
    /// - [`QuizError::AlreadyAnswered`] on a second answer.
    /// - [`QuizError::OptionOutOfRange`] for an index outside the options.
    pub fn answer(&mut self, index: usize) -> Result<bool, QuizError> {
        if self.exited {
            return Err(QuizError::NoQuestion);
        }
        let question = self
            .questions
            .get_mut(self.position)
            .ok_or(QuizError::NoQuestion)?;
        if question.is_answered() {
            return Err(QuizError::AlreadyAnswered);
        }
        if index >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                index,
                len: question.options.len(),
            });
        }
        question.chosen = Some(index);
        Ok(index == question.correct)
    }

    /// Moves to the next question.
    ///
    /// Leaving the last question finishes the quiz.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NoQuestion`] if the quiz is already over.
    pub fn next(&mut self) -> Result<(), QuizError> {
        if self.is_finished() {
            return Err(QuizError::NoQuestion);
        }
        self.position += 1;
        Ok(())
    }

    /// Ends the quiz early.
    pub fn exit(&mut self) {
        self.exited = true;
    }

    /// Returns `true` once every question has been passed or the quiz was
    /// exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.exited || self.position >= self.questions.len()
    }

    /// Returns the 0-based index of the current question.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of questions in this round.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Number of correctly answered questions.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.is_correct() == Some(true))
            .count()
    }

    /// Returns `(correct answers, questions)`.
    #[must_use]
    pub fn score(&self) -> (usize, usize) {
        (self.correct_count(), self.question_count())
    }
}
