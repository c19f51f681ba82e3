//! Up-front checks that a generation request is achievable.
//!
//! Runs before any selection is drawn so that an impossible request is
//! rejected with a reason (and, for capacity, the achievable maximum).

use std::collections::HashSet;

use crate::shuffle_engine::{
    combinatorics::aligned_capacity,
    error::{GenerationError, Result},
    models::{MasterPool, QuestionBody},
};

/// Check `requested` tests with `per_section_counts` draws against pool sizes.
///
/// On success returns the capacity: the largest batch the index-aligned
/// strategy keeps pairwise distinct.
pub fn validate_counts(
    requested: usize,
    pool_sizes: &[usize],
    per_section_counts: &[usize],
) -> Result<u128> {
    if requested < 1 {
        return Err(GenerationError::InvalidRequest { requested });
    }
    if pool_sizes.is_empty() {
        return Err(GenerationError::EmptyPool);
    }
    if per_section_counts.len() != pool_sizes.len() {
        return Err(GenerationError::SectionCountMismatch {
            expected: pool_sizes.len(),
            actual: per_section_counts.len(),
        });
    }

    for (i, (&pool_size, &k)) in pool_sizes.iter().zip(per_section_counts).enumerate() {
        if k < 1 || k > pool_size {
            return Err(GenerationError::InvalidSectionCount {
                section: i + 1,
                requested: k,
                pool_size,
            });
        }
    }

    let capacity = aligned_capacity(pool_sizes, per_section_counts).unwrap_or(0);
    if requested as u128 > capacity {
        return Err(GenerationError::CapacityExceeded { requested, capacity });
    }
    Ok(capacity)
}

/// Reject sections that list a question id more than once.
pub fn check_unique_ids(pool: &MasterPool) -> Result<()> {
    for (i, section) in pool.sections.iter().enumerate() {
        let mut seen = HashSet::with_capacity(section.questions.len());
        for q in &section.questions {
            if !seen.insert(q.id.as_str()) {
                return Err(GenerationError::DuplicateQuestionId {
                    section: i + 1,
                    question_id: q.id.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Reject single-choice questions and passage items whose correct answer
/// points past their options. An empty option list is left alone.
pub fn check_correct_answers(pool: &MasterPool) -> Result<()> {
    let out_of_range = |section: usize, id: &str, options: &[String], correct: usize| {
        if !options.is_empty() && correct >= options.len() {
            Err(GenerationError::CorrectAnswerOutOfRange {
                section,
                question_id: id.to_string(),
                correct_answer: correct,
                options: options.len(),
            })
        } else {
            Ok(())
        }
    };

    for (i, section) in pool.sections.iter().enumerate() {
        for q in &section.questions {
            match &q.body {
                QuestionBody::SingleChoice { options, correct_answer, .. } => {
                    out_of_range(i + 1, q.id.as_str(), options.as_slice(), *correct_answer)?;
                }
                QuestionBody::Passage { questions, .. } => {
                    for sub in questions {
                        out_of_range(i + 1, sub.id.as_str(), sub.options.as_slice(), sub.correct_answer)?;
                    }
                }
                QuestionBody::FreeResponse { .. } => {}
            }
        }
    }
    Ok(())
}

/// Full pre-generation validation of a pool and its draw counts.
///
/// The pool's own well-formedness is checked first, so no capacity is ever
/// computed from a malformed pool.
pub fn validate_pool(
    pool: &MasterPool,
    requested: usize,
    per_section_counts: &[usize],
) -> Result<u128> {
    check_unique_ids(pool)?;
    check_correct_answers(pool)?;
    validate_counts(requested, &pool.pool_sizes(), per_section_counts)
}
