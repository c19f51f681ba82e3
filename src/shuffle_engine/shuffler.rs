//! Answer-order randomisation that keeps the correct answer correct.
//!
//! The correct option is followed through every swap of a Fisher-Yates pass,
//! so the option text at the new `correct_answer` is the text that was
//! correct before, even when two options share the same wording.
//!
//! Pools reaching this module through generation have already had their
//! correct indices checked by the validator.

use rand::Rng;
use tracing::warn;

use crate::shuffle_engine::{
    models::{Question, QuestionBody, SubQuestion},
    selection::shuffle_tracking,
};

/// Shuffle `options` in place and return where `correct` ended up.
///
/// Zero or one option is a no-op. An out-of-range `correct` is returned
/// unchanged after the shuffle.
pub fn shuffle_options<R: Rng>(options: &mut [String], correct: usize, rng: &mut R) -> usize {
    if options.len() < 2 {
        return correct;
    }
    if correct >= options.len() {
        warn!(correct, options = options.len(), "correct answer index out of range, leaving it as-is");
    }
    shuffle_tracking(options, correct, rng)
}

fn shuffle_sub_question<R: Rng>(sub: &SubQuestion, rng: &mut R) -> SubQuestion {
    let mut shuffled = sub.clone();
    shuffled.correct_answer = shuffle_options(&mut shuffled.options, sub.correct_answer, rng);
    shuffled
}

/// A copy of `question` with its answer order randomised.
///
/// Passage questions keep title and passage verbatim and shuffle each
/// sub-question independently. Free-response questions are copied as-is.
pub fn shuffle_question<R: Rng>(question: &Question, rng: &mut R) -> Question {
    let body = match &question.body {
        QuestionBody::SingleChoice { text, options, correct_answer } => {
            let mut options = options.clone();
            let correct_answer = shuffle_options(&mut options, *correct_answer, rng);
            QuestionBody::SingleChoice { text: text.clone(), options, correct_answer }
        }
        QuestionBody::Passage { format, title, passage, questions } => QuestionBody::Passage {
            format: *format,
            title: title.clone(),
            passage: passage.clone(),
            questions: questions.iter().map(|q| shuffle_sub_question(q, rng)).collect(),
        },
        QuestionBody::FreeResponse { .. } => question.body.clone(),
    };
    Question { id: question.id.clone(), body }
}
