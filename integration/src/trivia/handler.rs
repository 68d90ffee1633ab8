use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use trivia_engine::{
    wire::{self, QuestionsPost, Response},
    CategoryId, InMemoryStore, ListRequest, QuestionId, TriviaService,
};

// ---------------------------------------------------------------------------
// Shared state: the engine plus its store, both behind Arc
// ---------------------------------------------------------------------------

pub type Trivia = TriviaService<InMemoryStore, InMemoryStore>;

pub fn new_service(store: Arc<InMemoryStore>) -> Trivia {
    let config = trivia_engine::EngineConfig::from_env().unwrap_or_default();
    TriviaService::new(store.clone(), store, config)
}

type Reply = (StatusCode, Json<Value>);

fn reply((status, body): Response) -> Reply {
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(body),
    )
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

// ---------------------------------------------------------------------------
// GET /categories
// ---------------------------------------------------------------------------

pub async fn get_categories(State(service): State<Trivia>) -> Reply {
    reply(wire::respond(service.categories(), wire::categories_response))
}

// ---------------------------------------------------------------------------
// GET /questions?page=N
// ---------------------------------------------------------------------------

pub async fn get_questions(
    State(service): State<Trivia>,
    Query(params): Query<PageQuery>,
) -> Reply {
    let request = ListRequest { page: params.page, ..Default::default() };
    reply(wire::respond(service.list_questions(&request), wire::listing_response))
}

// ---------------------------------------------------------------------------
// GET /categories/:id/questions?page=N
// ---------------------------------------------------------------------------

pub async fn get_category_questions(
    State(service): State<Trivia>,
    Path(category_id): Path<u32>,
    Query(params): Query<PageQuery>,
) -> Reply {
    let request = ListRequest {
        page: params.page,
        category: Some(CategoryId(category_id)),
        ..Default::default()
    };
    reply(wire::respond(service.list_questions(&request), wire::listing_response))
}

// ---------------------------------------------------------------------------
// POST /questions   body: { searchTerm } | { question, answer, difficulty, category }
// ---------------------------------------------------------------------------

pub async fn post_question(
    State(service): State<Trivia>,
    Query(params): Query<PageQuery>,
    Json(body): Json<Value>,
) -> Reply {
    match wire::parse_questions_post(&body) {
        Ok(QuestionsPost::Search(term)) => {
            let request = ListRequest {
                page: params.page,
                search_term: Some(term),
                ..Default::default()
            };
            reply(wire::respond(service.list_questions(&request), wire::listing_response))
        }
        Ok(QuestionsPost::Create(new)) => reply(wire::respond(
            service.create_question_listing(new, params.page),
            wire::created_response,
        )),
        Err(err) => reply(wire::error_response(&err)),
    }
}

// ---------------------------------------------------------------------------
// DELETE /questions/:id
// ---------------------------------------------------------------------------

pub async fn delete_question(
    State(service): State<Trivia>,
    Path(question_id): Path<u32>,
) -> Reply {
    reply(wire::respond(
        service.delete_question(QuestionId(question_id)),
        |_| wire::deleted_response(),
    ))
}

// ---------------------------------------------------------------------------
// POST /quizzes   body: { previous_questions, quiz_category: { id } }
// ---------------------------------------------------------------------------

pub async fn post_quiz(State(service): State<Trivia>, Json(body): Json<Value>) -> Reply {
    let result = wire::parse_quiz_request(&body).and_then(|req| service.next_quiz_question(&req));
    reply(wire::respond(result, wire::quiz_response))
}
