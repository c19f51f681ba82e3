use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::shuffle_engine::{
    assembler::{assemble_test, TestLabeler},
    collection::TestCollection,
    error::Result,
    models::{GenerationOutcome, GenerationRequest, MasterPool, Shortfall},
    selection::{AttemptBudget, SelectionStream},
    validator,
};

/// Check a request against the pool without generating anything.
///
/// Returns the capacity (largest achievable batch) on success.
pub fn validate_request(pool: &MasterPool, request: &GenerationRequest) -> Result<u128> {
    validator::validate_pool(pool, request.requested_count, &request.per_section_counts)
}

/// Generate a batch of pairwise-distinct tests from `pool`.
///
/// The pool is only read; every generated test owns copies of its questions.
pub fn generate_tests(pool: &MasterPool, request: &GenerationRequest) -> Result<GenerationOutcome> {
    run(pool, request, std::iter::empty::<&str>())
}

/// Like [`generate_tests`], but names the new tests so they do not collide
/// with names already in `collection`. The collection itself is not touched.
pub fn generate_for_collection(
    pool: &MasterPool,
    request: &GenerationRequest,
    collection: &TestCollection,
) -> Result<GenerationOutcome> {
    run(pool, request, collection.names())
}

fn run<'a>(
    pool: &MasterPool,
    request: &GenerationRequest,
    existing_names: impl Iterator<Item = &'a str>,
) -> Result<GenerationOutcome> {
    let capacity = validate_request(pool, request)?;
    let requested = request.requested_count;
    let opts = &request.options;

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let mut streams: Vec<SelectionStream> = pool
        .sections
        .iter()
        .zip(&request.per_section_counts)
        .map(|(section, &draw)| {
            let stream = SelectionStream::new(&mut rng, section.questions.len(), draw, opts.enumeration_limit);
            debug!(section = %section.id, strategy = ?stream.strategy(), "selection stream ready");
            stream
        })
        .collect();

    let mut budget = AttemptBudget::new(requested.saturating_mul(opts.attempt_multiplier));
    let mut labeler = TestLabeler::new(opts.name_prefix.clone(), existing_names);
    let created_at = Utc::now();
    let mut tests = Vec::with_capacity(requested.min(1024));

    'batch: for _ in 0..requested {
        let mut picks = Vec::with_capacity(streams.len());
        for stream in &mut streams {
            match stream.next_selection(&mut rng, &mut budget) {
                Some(pick) => picks.push(pick),
                None => break 'batch,
            }
        }
        let name = labeler.next_name();
        tests.push(assemble_test(pool, &picks, name, created_at, opts.shuffle_options, &mut rng));
    }

    let shortfall = (tests.len() < requested).then(|| Shortfall {
        requested,
        produced: tests.len(),
        attempts: budget.used(),
    });

    match &shortfall {
        Some(s) => warn!(
            requested = s.requested,
            produced = s.produced,
            attempts = s.attempts,
            "attempt budget exhausted before all tests were generated"
        ),
        None => info!(
            tests = tests.len(),
            sections = pool.sections.len(),
            capacity = %capacity,
            "generated shuffled tests"
        ),
    }

    Ok(GenerationOutcome { tests, capacity, shortfall })
}
