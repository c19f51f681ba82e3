//! # exam_shuffle_gen
//!
//! Generates several distinct versions of an exam from one master pool of
//! questions.
//!
//! An author keeps a [`MasterPool`] of named sections. Each generated test
//! draws a fixed number of questions per section, never repeats a question
//! within a section, and randomises the answer order of every multiple-choice
//! item while keeping the correct answer marked. Within one batch no two
//! tests share the same questions in the same order.
//!
//! ## How it works
//!
//! 1. Build a [`GenerationRequest`] with the number of tests and the draw size
//!    for each section (optionally a seed).
//! 2. Call [`validate_request`] to learn the capacity, or go straight to
//!    [`generate_tests`], which validates first.
//! 3. The returned [`GenerationOutcome`] holds the tests, ready to hand to a
//!    store (see [`TestCollection`]) or to [`to_export_json`].
//!
//! ## Quick start
//!
//! ```rust
//! use exam_shuffle_gen::{generate_tests, GenerationRequest, MasterPool, Question, Section};
//!
//! let mcq = |id: &str| {
//!     Question::single_choice(id, "Pick one", vec!["a".into(), "b".into(), "c".into()], 0)
//! };
//! let pool = MasterPool::new(vec![
//!     Section::new("grammar", "Grammar", vec![mcq("g1"), mcq("g2"), mcq("g3")]),
//!     Section::new("vocab", "Vocabulary", vec![mcq("v1"), mcq("v2")]),
//! ]);
//!
//! let outcome = generate_tests(&pool, &GenerationRequest::new(2, vec![2, 1]).with_seed(42))
//!     .expect("2 tests fit within capacity 2");
//! assert_eq!(outcome.tests.len(), 2);
//! assert_eq!(outcome.tests[0].question_count, 3);
//! ```

pub mod shuffle_engine;

pub use shuffle_engine::{
    generate_for_collection, generate_tests, n_pk, to_export_json, validate_request, ErrorKind,
    ErrorReport, GeneratedTest, GenerationError, GenerationOptions, GenerationOutcome,
    GenerationRequest, MasterPool, PassageFormat, Question, QuestionBody, Section,
    SectionSelection, Shortfall, SubQuestion, TestCollection,
};
