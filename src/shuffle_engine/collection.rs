//! A project's list of generated tests with its aggregate counters.
//!
//! The engine never persists anything. This is the shape a host store keeps,
//! with counters recomputed on every change so they cannot drift.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shuffle_engine::models::GeneratedTest;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestCollection {
    pub tests: Vec<GeneratedTest>,
    pub test_count: usize,
    pub total_questions: usize,
}

impl TestCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch and refresh the counters.
    pub fn append(&mut self, tests: impl IntoIterator<Item = GeneratedTest>) {
        self.tests.extend(tests);
        self.recount();
    }

    /// Remove one test by id, refreshing the counters if it was present.
    pub fn remove(&mut self, id: &Uuid) -> Option<GeneratedTest> {
        let pos = self.tests.iter().position(|t| &t.id == id)?;
        let removed = self.tests.remove(pos);
        self.recount();
        Some(removed)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tests.iter().map(|t| t.name.as_str())
    }

    fn recount(&mut self) {
        self.test_count = self.tests.len();
        self.total_questions = self.tests.iter().map(|t| t.question_count).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_with(count: usize, name: &str) -> GeneratedTest {
        GeneratedTest {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
            sections: Vec::new(),
            question_count: count,
        }
    }

    #[test]
    fn counters_follow_appends_and_removals() {
        let mut collection = TestCollection::new();
        let first = test_with(5, "Generated Test 1");
        let first_id = first.id;
        collection.append(vec![first, test_with(7, "Generated Test 2")]);
        assert_eq!(collection.test_count, 2);
        assert_eq!(collection.total_questions, 12);

        let removed = collection.remove(&first_id).map(|t| t.name);
        assert_eq!(removed.as_deref(), Some("Generated Test 1"));
        assert_eq!(collection.test_count, 1);
        assert_eq!(collection.total_questions, 7);

        assert!(collection.remove(&first_id).is_none());
        assert_eq!(collection.names().collect::<Vec<_>>(), vec!["Generated Test 2"]);
    }
}
