//! Shuffled-test generation engine — validation, selection, option shuffling
//! and assembly of generated tests.
//!
//! ## Module overview
//!
//! | Module          | Purpose |
//! |-----------------|---------|
//! | `models`        | Pool, question, request and generated-test types |
//! | `error`         | Error taxonomy returned by validation and generation |
//! | `combinatorics` | nPk and the index-aligned capacity |
//! | `validator`     | Up-front count, capacity and id checks |
//! | `selection`     | Per-section selection streams (enumerated or sampled) |
//! | `shuffler`      | Correctness-preserving answer shuffling |
//! | `assembler`     | Labels, ids and per-test assembly |
//! | `collection`    | A project's test list with aggregate counters |
//! | `export`        | JSON shape consumed by the document/export layer |
//! | `generator`     | Entry points `validate_request()` / `generate_tests()` |

pub mod assembler;
pub mod collection;
pub mod combinatorics;
pub mod error;
pub mod export;
pub mod generator;
pub mod models;
pub mod selection;
pub mod shuffler;
pub mod validator;

pub use collection::TestCollection;
pub use combinatorics::n_pk;
pub use error::{ErrorKind, ErrorReport, GenerationError, Result};
pub use export::to_export_json;
pub use generator::{generate_for_collection, generate_tests, validate_request};
pub use models::{
    GeneratedTest, GenerationOptions, GenerationOutcome, GenerationRequest, MasterPool,
    PassageFormat, Question, QuestionBody, Section, SectionSelection, Shortfall, SubQuestion,
};
