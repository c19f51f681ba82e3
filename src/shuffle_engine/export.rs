use serde_json::{json, Value};

use crate::shuffle_engine::models::{
    GeneratedTest, PassageFormat, Question, QuestionBody, SectionSelection, SubQuestion,
};

/// Type tag the document layer switches on.
fn type_tag(body: &QuestionBody) -> &'static str {
    match body {
        QuestionBody::SingleChoice { .. } => "mcq",
        QuestionBody::Passage { format: PassageFormat::Reading, .. }        => "reading",
        QuestionBody::Passage { format: PassageFormat::FillInTheBlank, .. } => "fill-in-the-blank",
        QuestionBody::FreeResponse { .. } => "writing",
    }
}

fn sub_question(sub: &SubQuestion) -> Value {
    json!({
        "id": sub.id,
        "text": sub.text,
        "options": sub.options,
        "correctAnswer": sub.correct_answer
    })
}

fn question(q: &Question) -> Value {
    let kind = type_tag(&q.body);
    match &q.body {
        QuestionBody::SingleChoice { text, options, correct_answer } => json!({
            "id": q.id,
            "type": kind,
            "text": text,
            "options": options,
            "correctAnswer": correct_answer
        }),
        QuestionBody::Passage { title, passage, questions, .. } => json!({
            "id": q.id,
            "type": kind,
            "title": title,
            "text": passage,
            "questions": questions.iter().map(sub_question).collect::<Vec<_>>()
        }),
        QuestionBody::FreeResponse { prompt, reference_answer } => json!({
            "id": q.id,
            "type": kind,
            "text": prompt,
            "answer": reference_answer
        }),
    }
}

fn section(s: &SectionSelection) -> Value {
    json!({
        "id": s.section_id,
        "sectionName": s.section_name,
        "questions": s.questions.iter().map(question).collect::<Vec<_>>()
    })
}

/// Map a `GeneratedTest` to the JSON object the document/export layer reads.
///
/// Keys and nesting here are a contract with that layer; `createdDate` is the
/// UTC calendar date only.
pub fn to_export_json(test: &GeneratedTest) -> Value {
    json!({
        "id": test.id.to_string(),
        "name": test.name,
        "createdDate": test.created_at.format("%Y-%m-%d").to_string(),
        "questionCount": test.question_count,
        "sections": test.sections.iter().map(section).collect::<Vec<_>>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn export_keeps_document_schema() {
        let sub = SubQuestion {
            id: "r1-1".into(),
            text: "Main idea?".into(),
            options: vec!["A".into(), "B".into()],
            correct_answer: 1,
        };
        let test = GeneratedTest {
            id: Uuid::nil(),
            name: "Generated Test 1".into(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
            sections: vec![SectionSelection {
                section_id: "s1".into(),
                section_name: "Reading".into(),
                questions: vec![
                    Question::passage("r1", PassageFormat::Reading, "Title", "Passage body", vec![sub]),
                    Question::free_response("w1", "Write a letter.", "Sample letter"),
                ],
            }],
            question_count: 2,
        };

        let v = to_export_json(&test);
        assert_eq!(v["createdDate"], "2026-03-14");
        assert_eq!(v["questionCount"], 2);
        assert_eq!(v["sections"][0]["sectionName"], "Reading");
        let reading = &v["sections"][0]["questions"][0];
        assert_eq!(reading["type"], "reading");
        assert_eq!(reading["text"], "Passage body");
        assert_eq!(reading["questions"][0]["correctAnswer"], 1);
        assert_eq!(v["sections"][0]["questions"][1]["type"], "writing");
    }
}
