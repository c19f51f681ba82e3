//! Turns one index selection per section into a [`GeneratedTest`].

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::{Builder, Uuid};

use crate::shuffle_engine::{
    models::{GeneratedTest, MasterPool, SectionSelection},
    shuffler::shuffle_question,
};

/// Hands out sequential labels ("Generated Test 1", "Generated Test 2", ...)
/// that skip names already present in the target collection.
#[derive(Debug, Clone)]
pub struct TestLabeler {
    prefix: String,
    taken: HashSet<String>,
    next: usize,
}

impl TestLabeler {
    pub fn new<I, S>(prefix: impl Into<String>, existing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TestLabeler {
            prefix: prefix.into(),
            taken: existing.into_iter().map(Into::into).collect(),
            next: 1,
        }
    }

    pub fn next_name(&mut self) -> String {
        loop {
            let candidate = format!("{} {}", self.prefix, self.next);
            self.next += 1;
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// Random v4 id drawn from `rng`, so a seeded batch gets reproducible ids.
pub fn new_test_id<R: Rng>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// Build one generated test from `picks` (one index list per section).
///
/// Drawn questions are copied out of the pool; with `shuffle_options` each
/// copy also gets its answers reordered.
pub fn assemble_test<R: Rng>(
    pool: &MasterPool,
    picks: &[Vec<usize>],
    name: String,
    created_at: DateTime<Utc>,
    shuffle_options: bool,
    rng: &mut R,
) -> GeneratedTest {
    let sections: Vec<SectionSelection> = pool
        .sections
        .iter()
        .zip(picks)
        .map(|(section, indices)| SectionSelection {
            section_id: section.id.clone(),
            section_name: section.name.clone(),
            questions: indices
                .iter()
                .map(|&i| {
                    let q = &section.questions[i];
                    if shuffle_options { shuffle_question(q, rng) } else { q.clone() }
                })
                .collect(),
        })
        .collect();

    let question_count = sections.iter().map(|s| s.questions.len()).sum();

    GeneratedTest {
        id: new_test_id(rng),
        name,
        created_at,
        sections,
        question_count,
    }
}
