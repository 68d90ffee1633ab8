//! Core engine: question retrieval, pagination, and quiz selection.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: questions, categories, pages, quiz requests and outcomes |
//! | `error`     | `TriviaError` taxonomy and the collaborator-side `StoreError` |
//! | `config`    | `EngineConfig` (page size, all-categories sentinel, difficulty range) |
//! | `store`     | `QuestionStore` / `CategoryCatalog` contracts and `InMemoryStore` |
//! | `paginator` | Fixed-size page slicing |
//! | `resolver`  | Search / category / full-listing pool resolution |
//! | `selector`  | Non-repeating uniform random quiz draw |
//! | `service`   | `TriviaService`, the façade handlers call into |

pub mod config;
pub mod error;
pub mod models;
pub mod paginator;
pub mod resolver;
pub mod selector;
pub mod service;
pub mod store;

pub use config::{ConfigError, EngineConfig};
pub use error::{ErrorKind, StoreError, TriviaError, TriviaResult};
pub use models::{
    Category, CategoryId, CreatedQuestion, ListRequest, NewQuestion, Page, Question,
    QuestionDraft, QuestionId, QuestionListing, QuizOutcome, QuizRequest,
};
pub use service::TriviaService;
pub use store::{CategoryCatalog, InMemoryStore, QuestionStore};
