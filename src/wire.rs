//! JSON envelopes for the trivia HTTP client.
//!
//! Renders engine results into the response bodies the web client expects
//! (`success`, `questions`, `total_questions`, …) and parses the two request
//! bodies that carry more than a path parameter: quiz draws and question
//! creation. Framing, routing and CORS stay with the HTTP layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};

use crate::trivia_engine::{
    error::TriviaError,
    models::{
        CategoryId, CreatedQuestion, NewQuestion, Question, QuestionId, QuestionListing,
        QuizOutcome, QuizRequest,
    },
};

/// HTTP status plus JSON body.
pub type Response = (u16, Value);

/// Accept either a JSON number or a string holding one. The web client
/// submits form values as strings.
fn number_or_numeric_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(d)? {
        None => Ok(None),
        Some(Raw::Int(v)) => Ok(Some(v)),
        Some(Raw::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Default, Deserialize)]
struct QuizCategoryBody {
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct QuizBody {
    #[serde(default)]
    previous_questions: Option<Vec<u32>>,
    #[serde(default)]
    quiz_category: Option<QuizCategoryBody>,
}

/// Body of `POST /questions`: either a search or a creation.
#[derive(Debug, Default, Deserialize)]
struct QuestionsBody {
    #[serde(default, rename = "searchTerm")]
    search_term: Option<String>,
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    difficulty: Option<i64>,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    category: Option<i64>,
}

/// What a `POST /questions` body asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionsPost {
    Search(String),
    Create(NewQuestion),
}

/// Parse a quiz draw body. Missing keys are left as `None` so the service
/// classifies them; malformed JSON is a bad request.
pub fn parse_quiz_request(body: &Value) -> Result<QuizRequest, TriviaError> {
    let parsed: QuizBody = serde_json::from_value(body.clone())
        .map_err(|e| TriviaError::bad_request(format!("malformed quiz body: {e}")))?;

    let category = match parsed.quiz_category.and_then(|c| c.id) {
        None => None,
        Some(id) => Some(
            u32::try_from(id)
                .map(CategoryId)
                .map_err(|_| TriviaError::bad_request(format!("quiz category {id} is invalid")))?,
        ),
    };

    Ok(QuizRequest {
        category,
        previous_questions: parsed
            .previous_questions
            .map(|ids| ids.into_iter().map(QuestionId).collect()),
        rng_seed: None,
    })
}

/// Parse a `POST /questions` body. A non-empty `searchTerm` turns the request
/// into a search; anything else is a creation attempt.
pub fn parse_questions_post(body: &Value) -> Result<QuestionsPost, TriviaError> {
    let parsed: QuestionsBody = serde_json::from_value(body.clone())
        .map_err(|e| TriviaError::unprocessable(format!("malformed question body: {e}")))?;

    match parsed.search_term.filter(|t| !t.is_empty()) {
        Some(term) => Ok(QuestionsPost::Search(term)),
        None => Ok(QuestionsPost::Create(NewQuestion {
            question: parsed.question,
            answer: parsed.answer,
            difficulty: parsed.difficulty,
            category: parsed.category,
        })),
    }
}

pub fn question_json(q: &Question) -> Value {
    json!(q)
}

fn questions_json(questions: &[Question]) -> Value {
    json!(questions)
}

/// Category map keyed by the stringified id, ordered by id.
pub fn categories_map_json(categories: &BTreeMap<CategoryId, String>) -> Value {
    json!(categories)
}

pub fn listing_response(listing: &QuestionListing) -> Response {
    let mut body = json!({
        "success":         true,
        "questions":       questions_json(&listing.page.questions),
        "total_questions": listing.page.total_count,
    });
    if let Some(categories) = &listing.categories {
        body["categories"] = categories_map_json(categories);
    }
    if let Some(current) = &listing.current_category {
        body["current_category"] = Value::String(current.clone());
    }
    (200, body)
}

pub fn categories_response(categories: &BTreeMap<CategoryId, String>) -> Response {
    (200, json!({ "success": true, "categories": categories_map_json(categories) }))
}

pub fn created_response(created: &CreatedQuestion) -> Response {
    (
        201,
        json!({
            "success":         true,
            "created":         created.id.0,
            "questions":       questions_json(&created.page.questions),
            "total_questions": created.page.total_count,
        }),
    )
}

pub fn deleted_response() -> Response {
    (200, json!({ "success": true, "message": "Question deleted successfully" }))
}

/// An exhausted pool renders `"question": null`; the client ends the quiz on it.
pub fn quiz_response(outcome: &QuizOutcome) -> Response {
    let question = match outcome {
        QuizOutcome::Question(q) => question_json(q),
        QuizOutcome::Exhausted => Value::Null,
    };
    (200, json!({ "success": true, "question": question }))
}

pub fn error_response(err: &TriviaError) -> Response {
    let kind = err.kind();
    (
        kind.status(),
        json!({
            "success": false,
            "error":   kind.status(),
            "message": kind.message(),
        }),
    )
}

/// Collapse a service result into a response.
pub fn respond<T>(result: Result<T, TriviaError>, render: impl FnOnce(&T) -> Response) -> Response {
    match result {
        Ok(value) => render(&value),
        Err(err) => error_response(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trivia_engine::models::Page;

    fn sample() -> Question {
        Question {
            id: QuestionId(12),
            question: "Which trophy have Al Ahly won in the 2020 club world cup?".to_string(),
            answer: "Bronze Medal".to_string(),
            difficulty: 2,
            category: CategoryId(6),
        }
    }

    #[test]
    fn quiz_body_with_both_keys() {
        let req = parse_quiz_request(&json!({
            "previous_questions": [2, 11, 15],
            "quiz_category": { "id": 0 }
        }))
        .unwrap();
        assert_eq!(req.category, Some(CategoryId(0)));
        assert_eq!(
            req.previous_questions,
            Some(vec![QuestionId(2), QuestionId(11), QuestionId(15)])
        );
    }

    #[test]
    fn quiz_body_without_category_leaves_it_missing() {
        let req = parse_quiz_request(&json!({ "previous_questions": [2, 11, 15] })).unwrap();
        assert_eq!(req.category, None);
        assert!(req.previous_questions.is_some());
    }

    #[test]
    fn quiz_category_id_may_be_a_string() {
        let req = parse_quiz_request(&json!({
            "previous_questions": [],
            "quiz_category": { "id": "6", "type": "Sports" }
        }))
        .unwrap();
        assert_eq!(req.category, Some(CategoryId(6)));
    }

    #[test]
    fn malformed_quiz_body_is_bad_request() {
        let err = parse_quiz_request(&json!({ "previous_questions": "nope" })).unwrap_err();
        assert_eq!(err.kind().status(), 400);
    }

    #[test]
    fn search_term_selects_search() {
        let post = parse_questions_post(&json!({ "searchTerm": "won" })).unwrap();
        assert_eq!(post, QuestionsPost::Search("won".to_string()));
    }

    #[test]
    fn create_body_accepts_string_category() {
        let post = parse_questions_post(&json!({
            "question": "Q?",
            "answer": "A",
            "difficulty": 2,
            "category": "6"
        }))
        .unwrap();
        assert_eq!(post, QuestionsPost::Create(NewQuestion::new("Q?", "A", 2, 6)));
    }

    #[test]
    fn empty_body_is_a_create_with_nothing_set() {
        let post = parse_questions_post(&json!({})).unwrap();
        assert_eq!(post, QuestionsPost::Create(NewQuestion::default()));
    }

    #[test]
    fn listing_envelope_shape() {
        let mut categories = BTreeMap::new();
        categories.insert(CategoryId(6), "Sports".to_string());
        let listing = QuestionListing {
            page: Page { questions: vec![sample()], total_count: 1, page_number: 1 },
            categories: Some(categories),
            current_category: None,
        };
        let (status, body) = listing_response(&listing);
        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["total_questions"], 1);
        assert_eq!(body["questions"][0]["answer"], "Bronze Medal");
        assert_eq!(body["categories"]["6"], "Sports");
        assert!(body.get("current_category").is_none());
    }

    #[test]
    fn exhausted_quiz_renders_null_question() {
        let (status, body) = quiz_response(&QuizOutcome::Exhausted);
        assert_eq!(status, 200);
        assert!(body["question"].is_null());

        let (_, body) = quiz_response(&QuizOutcome::Question(sample()));
        assert_eq!(body["question"]["id"], 12);
    }

    #[test]
    fn question_renders_every_wire_field() {
        assert_eq!(
            question_json(&sample()),
            json!({
                "id": 12,
                "question": "Which trophy have Al Ahly won in the 2020 club world cup?",
                "answer": "Bronze Medal",
                "difficulty": 2,
                "category": 6
            })
        );
    }

    #[test]
    fn categories_map_keys_are_stringified_ids_in_order() {
        let categories: BTreeMap<CategoryId, String> =
            [(CategoryId(10), "Music"), (CategoryId(2), "Art")]
                .into_iter()
                .map(|(id, name)| (id, name.to_string()))
                .collect();
        let (_, body) = categories_response(&categories);
        let keys: Vec<&String> = body["categories"].as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(body["categories"]["2"], "Art");
        assert_eq!(body["categories"]["10"], "Music");
    }

    #[test]
    fn error_envelope_uses_public_message() {
        let (status, body) = error_response(&TriviaError::not_found("page 10000 is empty"));
        assert_eq!(status, 404);
        assert_eq!(body, json!({ "success": false, "error": 404, "message": "resource not found" }));
    }
}
