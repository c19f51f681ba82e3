//! Generate a small batch of shuffled tests and print them.
//!
//! Run with: `cargo run --example shuffle`
//!
//! Shows the capacity check, a rejected over-sized request, and the export
//! JSON of the first generated test.

use exam_shuffle_gen::{
    generate_tests, to_export_json, validate_request, GenerationRequest, MasterPool,
    PassageFormat, Question, QuestionBody, Section, SubQuestion,
};

fn mcq(id: &str, text: &str, options: &[&str], correct: usize) -> Question {
    Question::single_choice(id, text, options.iter().map(|s| s.to_string()).collect(), correct)
}

fn pool() -> MasterPool {
    let grammar = Section::new("grammar", "Grammar", vec![
        mcq("g1", "She ___ coffee every morning.", &["drinks", "drink", "drinking"], 0),
        mcq("g2", "They ___ in Rome since 2019.", &["have lived", "lived", "live"], 0),
        mcq("g3", "If I ___ you, I would apologise.", &["were", "am", "be"], 0),
        mcq("g4", "He asked where I ___.", &["lived", "live", "living"], 0),
        mcq("g5", "The report ___ by Friday.", &["will be finished", "finishes", "finished"], 0),
    ]);
    let reading = Section::new("reading", "Reading", vec![
        Question::passage("r1", PassageFormat::Reading, "The Lighthouse",
            "The keeper climbed the stairs each night to light the lamp.",
            vec![SubQuestion {
                id: "r1-1".into(),
                text: "What did the keeper do each night?".into(),
                options: vec!["Lit the lamp".into(), "Went fishing".into(), "Slept".into()],
                correct_answer: 0,
            }]),
        mcq("r2", "A synonym of 'rapid' is", &["quick", "slow", "late"], 0),
        mcq("r3", "An antonym of 'ancient' is", &["modern", "old", "aged"], 0),
        Question::free_response("r4", "Summarise the passage in one sentence.", "A keeper lights a lamp nightly."),
    ]);
    MasterPool::new(vec![grammar, reading])
}

fn main() {
    let pool = pool();

    let too_many = GenerationRequest::new(50, vec![3, 2]);
    if let Err(err) = validate_request(&pool, &too_many) {
        let report = err.report();
        println!("Rejected: {} (max {:?})", report.message, report.max_achievable);
    }

    let request = GenerationRequest::new(4, vec![3, 2]).with_seed(2024);
    let outcome = match generate_tests(&pool, &request) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("generation failed: {err}");
            return;
        }
    };
    println!("Capacity: {}\n", outcome.capacity);

    for test in &outcome.tests {
        println!("== {} ({} questions)", test.name, test.question_count);
        for section in &test.sections {
            println!("  [{}]", section.section_name);
            for q in &section.questions {
                match &q.body {
                    QuestionBody::SingleChoice { text, options, correct_answer } => {
                        println!("    {}: {} -> {:?} (answer {})", q.id, text, options, correct_answer);
                    }
                    QuestionBody::Passage { title, questions, .. } => {
                        println!("    {}: passage '{}' with {} item(s)", q.id, title, questions.len());
                    }
                    QuestionBody::FreeResponse { prompt, .. } => {
                        println!("    {}: {}", q.id, prompt);
                    }
                }
            }
        }
    }

    if let Some(first) = outcome.tests.first() {
        match serde_json::to_string_pretty(&to_export_json(first)) {
            Ok(json) => println!("\nExport of {}:\n{json}", first.name),
            Err(err) => eprintln!("export failed: {err}"),
        }
    }
}
