//! Search / filter resolution.
//!
//! Decides, per request, which slice of the question collection an operation
//! works on, and classifies the ways that can fail:
//!
//! | Input                     | Pool                                   | Failure |
//! |---------------------------|----------------------------------------|---------|
//! | non-empty search term     | case-insensitive text matches          | no match → `NotFound` |
//! | category id               | questions in that category             | unknown id → `BadRequest` |
//! | neither                   | whole collection                       | empty → `NotFound` |
//!
//! Store read failures are reported as `Internal`.

use std::collections::BTreeMap;

use crate::trivia_engine::{
    error::{TriviaError, TriviaResult},
    models::{Category, CategoryId, Question},
    store::{CategoryCatalog, QuestionStore},
};

/// How a pool was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolSource {
    Search(String),
    Category(Category),
    All,
}

/// The eligible pool for one request, ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub source: PoolSource,
    pub questions: Vec<Question>,
}

impl Pool {
    pub fn total_count(&self) -> usize {
        self.questions.len()
    }
}

pub struct Resolver<'a, S, C> {
    store: &'a S,
    catalog: &'a C,
}

impl<'a, S, C> Resolver<'a, S, C>
where
    S: QuestionStore,
    C: CategoryCatalog,
{
    pub fn new(store: &'a S, catalog: &'a C) -> Self {
        Resolver { store, catalog }
    }

    /// Resolve the pool for a listing request. Search wins over category.
    pub fn resolve(
        &self,
        search_term: Option<&str>,
        category: Option<CategoryId>,
    ) -> TriviaResult<Pool> {
        match (search_term.filter(|t| !t.is_empty()), category) {
            (Some(term), _) => self.search(term),
            (None, Some(id)) => self.by_category(id),
            (None, None) => self.everything(),
        }
    }

    pub fn search(&self, term: &str) -> TriviaResult<Pool> {
        let questions = self.store.search_by_text(term).map_err(TriviaError::internal)?;
        if questions.is_empty() {
            return Err(TriviaError::not_found(format!("no question matches '{term}'")));
        }
        Ok(Pool { source: PoolSource::Search(term.to_string()), questions })
    }

    /// Category pool. The category must exist; an existing category with no
    /// questions yields an empty pool, not an error.
    pub fn by_category(&self, id: CategoryId) -> TriviaResult<Pool> {
        let category = self.require_category(id)?;
        let questions = self.store.filter_by_category(id).map_err(TriviaError::internal)?;
        Ok(Pool { source: PoolSource::Category(category), questions })
    }

    pub fn everything(&self) -> TriviaResult<Pool> {
        let pool = self.whole_collection()?;
        if pool.questions.is_empty() {
            return Err(TriviaError::not_found("question collection is empty"));
        }
        Ok(pool)
    }

    /// Whole collection, empty allowed. Quiz mode uses this so an empty
    /// collection surfaces as exhaustion rather than an error.
    pub fn whole_collection(&self) -> TriviaResult<Pool> {
        let questions = self.store.all().map_err(TriviaError::internal)?;
        Ok(Pool { source: PoolSource::All, questions })
    }

    pub fn require_category(&self, id: CategoryId) -> TriviaResult<Category> {
        self.catalog
            .get_by_id(id)
            .map_err(TriviaError::internal)?
            .ok_or_else(|| TriviaError::bad_request(format!("category {id} does not exist")))
    }

    /// Category id → display name, ordered by id. An empty catalog is `NotFound`.
    pub fn categories(&self) -> TriviaResult<BTreeMap<CategoryId, String>> {
        let categories = self.catalog.all().map_err(TriviaError::internal)?;
        if categories.is_empty() {
            return Err(TriviaError::not_found("category catalog is empty"));
        }
        Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
    }
}
