//! # trivia_engine
//!
//! Question retrieval and quiz selection for a trivia service.
//!
//! The crate stores nothing itself. Questions and categories live behind the
//! [`QuestionStore`] and [`CategoryCatalog`] traits; [`TriviaService`] reads
//! them fresh on every call and applies the engine rules on top:
//!
//! - **Listing**: The full collection, a case-insensitive text search, or a
//!   single category, sliced into fixed-size pages. An empty pool or a page
//!   past the end is `NotFound`; an unknown category is `BadRequest`.
//! - **Creation / deletion**: All four content fields are required; missing
//!   or invalid input is `Unprocessable` and nothing is written.
//! - **Quiz mode**: One random question the caller has not seen yet, or an
//!   explicit [`QuizOutcome::Exhausted`] once the pool is used up. The caller
//!   carries the list of asked ids between calls.
//!
//! The [`wire`] module renders results and errors into the JSON envelopes the
//! web client expects.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use trivia_engine::{
//!     Category, EngineConfig, InMemoryStore, ListRequest, NewQuestion, QuizOutcome,
//!     QuizRequest, TriviaService,
//! };
//!
//! let store = Arc::new(InMemoryStore::with_categories([
//!     Category::new(1, "Science"),
//!     Category::new(6, "Sports"),
//! ]));
//! let service = TriviaService::new(store.clone(), store, EngineConfig::default());
//!
//! let id = service
//!     .create_question(NewQuestion::new("Which team won the 2020 bronze?", "Al Ahly", 2, 6))
//!     .unwrap();
//!
//! let listing = service.list_questions(&ListRequest::search("won")).unwrap();
//! assert_eq!(listing.page.total_count, 1);
//!
//! // Quiz over all categories (id 0), nothing asked yet.
//! let outcome = service.next_quiz_question(&QuizRequest::new(0, [])).unwrap();
//! assert_eq!(outcome.question().map(|q| q.id), Some(id));
//!
//! // Once it has been asked, the pool is exhausted.
//! let outcome = service.next_quiz_question(&QuizRequest::new(0, [id.0])).unwrap();
//! assert_eq!(outcome, QuizOutcome::Exhausted);
//! ```

pub mod trivia_engine;
pub mod wire;

// Convenience re-exports so callers can use `trivia_engine::TriviaService`
// directly without reaching into the engine module.
pub use trivia_engine::{
    Category, CategoryCatalog, CategoryId, ConfigError, CreatedQuestion, EngineConfig, ErrorKind,
    InMemoryStore, ListRequest, NewQuestion, Page, Question, QuestionId, QuestionListing,
    QuestionStore, QuizOutcome, QuizRequest, StoreError, TriviaError, TriviaResult,
    TriviaService,
};
