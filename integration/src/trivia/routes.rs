use axum::{routing::{delete, get, post}, Router};
use super::handler::{
    delete_question, get_categories, get_category_questions, get_questions, post_question,
    post_quiz, Trivia,
};

pub fn router(service: Trivia) -> Router {
    Router::new()
        .route("/categories",                 get(get_categories))
        .route("/categories/:id/questions",   get(get_category_questions))
        .route("/questions",                  get(get_questions).post(post_question))
        .route("/questions/:id",              delete(delete_question))
        .route("/quizzes",                    post(post_quiz))
        .with_state(service)
}
