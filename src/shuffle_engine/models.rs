use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shuffle_engine::error::{GenerationError, Result};

/// Opaque question identity, unique within one section.
pub type QuestionId = String;

/// Opaque section identity.
pub type SectionId = String;

/// Ordered question ids of one selection. Two selections with the same
/// signature are the same draw.
pub type Signature = Vec<QuestionId>;

// ---------------------------------------------------------------------------
// Question pool entries
// ---------------------------------------------------------------------------

/// How a passage-based question presents its shared text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassageFormat {
    Reading,
    FillInTheBlank,
}

/// A single-choice item nested inside a passage question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubQuestion {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
}

/// Type-specific payload of a pool entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionBody {
    SingleChoice {
        text: String,
        options: Vec<String>,
        /// Index into `options`.
        correct_answer: usize,
    },
    /// A shared passage followed by its own single-choice items.
    Passage {
        format: PassageFormat,
        title: String,
        passage: String,
        questions: Vec<SubQuestion>,
    },
    /// Open answer; never shuffled.
    FreeResponse {
        prompt: String,
        reference_answer: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(flatten)]
    pub body: QuestionBody,
}

impl Question {
    pub fn single_choice(
        id: impl Into<String>, text: impl Into<String>,
        options: Vec<String>, correct_answer: usize,
    ) -> Self {
        Question {
            id: id.into(),
            body: QuestionBody::SingleChoice { text: text.into(), options, correct_answer },
        }
    }

    pub fn passage(
        id: impl Into<String>, format: PassageFormat,
        title: impl Into<String>, passage: impl Into<String>,
        questions: Vec<SubQuestion>,
    ) -> Self {
        Question {
            id: id.into(),
            body: QuestionBody::Passage {
                format,
                title: title.into(),
                passage: passage.into(),
                questions,
            },
        }
    }

    pub fn free_response(
        id: impl Into<String>, prompt: impl Into<String>, reference_answer: impl Into<String>,
    ) -> Self {
        Question {
            id: id.into(),
            body: QuestionBody::FreeResponse {
                prompt: prompt.into(),
                reference_answer: reference_answer.into(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Master pool
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub name: String,
    pub questions: Vec<Question>,
}

impl Section {
    pub fn new(id: impl Into<String>, name: impl Into<String>, questions: Vec<Question>) -> Self {
        Section { id: id.into(), name: name.into(), questions }
    }
}

/// The author's full, unshuffled set of sections. Generation only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterPool {
    pub sections: Vec<Section>,
}

impl MasterPool {
    pub fn new(sections: Vec<Section>) -> Self {
        MasterPool { sections }
    }

    /// Question count per section, in section order.
    pub fn pool_sizes(&self) -> Vec<usize> {
        self.sections.iter().map(|s| s.questions.len()).collect()
    }
}

// ---------------------------------------------------------------------------
// Generation request / configuration
// ---------------------------------------------------------------------------

/// Tunables for one generation call. Every field has a default so a request
/// can be deserialised from a partial JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Sections whose nPk exceeds this are sampled instead of enumerated.
    pub enumeration_limit: u128,
    /// Sampling fallback budget is `requested_count * attempt_multiplier` draws.
    pub attempt_multiplier: usize,
    /// Label prefix; tests are named "<prefix> 1", "<prefix> 2", ...
    pub name_prefix: String,
    /// Randomise answer order inside every drawn question.
    pub shuffle_options: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            enumeration_limit: 1_000_000,
            attempt_multiplier: 20,
            name_prefix: "Generated Test".to_string(),
            shuffle_options: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Number of generated tests wanted.
    pub requested_count: usize,
    /// Draw size per section, aligned with the pool's section order.
    pub per_section_counts: Vec<usize>,
    /// `Some(seed)` makes the whole batch reproducible.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub options: GenerationOptions,
}

impl GenerationRequest {
    /// Defaults: entropy RNG, default options.
    pub fn new(requested_count: usize, per_section_counts: Vec<usize>) -> Self {
        GenerationRequest {
            requested_count,
            per_section_counts,
            rng_seed: None,
            options: GenerationOptions::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }
}

// ---------------------------------------------------------------------------
// Generated tests
// ---------------------------------------------------------------------------

/// The questions drawn from one section for one generated test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSelection {
    pub section_id: SectionId,
    pub section_name: String,
    pub questions: Vec<Question>,
}

impl SectionSelection {
    pub fn signature(&self) -> Signature {
        self.questions.iter().map(|q| q.id.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedTest {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub sections: Vec<SectionSelection>,
    /// Sum of all selection sizes.
    pub question_count: usize,
}

impl GeneratedTest {
    /// Per-section signatures, in section order.
    pub fn signature(&self) -> Vec<Signature> {
        self.sections.iter().map(SectionSelection::signature).collect()
    }
}

/// Reported when the sampling fallback ran out of attempts before producing
/// every requested test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub requested: usize,
    pub produced: usize,
    pub attempts: usize,
}

impl Shortfall {
    pub fn to_error(&self) -> GenerationError {
        GenerationError::GenerationShortfall {
            requested: self.requested,
            produced: self.produced,
            attempts: self.attempts,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub tests: Vec<GeneratedTest>,
    /// Ceiling reported by validation.
    pub capacity: u128,
    pub shortfall: Option<Shortfall>,
}

impl GenerationOutcome {
    pub fn is_complete(&self) -> bool {
        self.shortfall.is_none()
    }

    /// All requested tests, or the shortfall as an error for callers that
    /// do not accept partial batches.
    pub fn into_complete(self) -> Result<Vec<GeneratedTest>> {
        match self.shortfall {
            Some(shortfall) => Err(shortfall.to_error()),
            None => Ok(self.tests),
        }
    }
}
