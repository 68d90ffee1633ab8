//! Collaborator contracts for question and category storage, plus an
//! in-memory implementation of both.
//!
//! Every read returns questions ordered by ascending id. The engine relies on
//! that ordering for stable pagination and never re-sorts.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::trivia_engine::{
    error::StoreError,
    models::{Category, CategoryId, Question, QuestionDraft, QuestionId},
};

pub type StoreResult<T> = Result<T, StoreError>;

pub trait QuestionStore {
    /// Persist a validated draft and return its newly assigned id.
    fn insert(&self, draft: QuestionDraft) -> StoreResult<QuestionId>;
    /// Returns `false` when no question had that id.
    fn delete_by_id(&self, id: QuestionId) -> StoreResult<bool>;
    fn all(&self) -> StoreResult<Vec<Question>>;
    fn filter_by_category(&self, category: CategoryId) -> StoreResult<Vec<Question>>;
    /// Case-insensitive substring match on the question text.
    fn search_by_text(&self, term: &str) -> StoreResult<Vec<Question>>;
}

pub trait CategoryCatalog {
    /// All categories ordered by id.
    fn all(&self) -> StoreResult<Vec<Category>>;
    fn get_by_id(&self, id: CategoryId) -> StoreResult<Option<Category>>;
}

#[derive(Debug, Default)]
struct Tables {
    questions: BTreeMap<QuestionId, Question>,
    categories: BTreeMap<CategoryId, Category>,
    next_id: u32,
}

/// Thread-safe in-memory store backing both collaborator traits.
///
/// Ids start at 1 and are never reused, even after deletes.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with categories.
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let store = Self::new();
        if let Ok(mut tables) = store.tables.write() {
            for c in categories {
                tables.categories.insert(c.id, c);
            }
        }
        store
    }

    /// Register or replace a category. Catalog upkeep lives outside the
    /// engine; this exists for seeding.
    pub fn put_category(&self, category: Category) -> StoreResult<()> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        tables.categories.insert(category.id, category);
        Ok(())
    }

    pub fn len(&self) -> StoreResult<usize> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.questions.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        self.len().map(|n| n == 0)
    }

    fn read_questions<F>(&self, keep: F) -> StoreResult<Vec<Question>>
    where
        F: Fn(&Question) -> bool,
    {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.questions.values().filter(|q| keep(q)).cloned().collect())
    }
}

impl QuestionStore for InMemoryStore {
    fn insert(&self, draft: QuestionDraft) -> StoreResult<QuestionId> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        tables.next_id = tables
            .next_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Backend("question id space exhausted".to_string()))?;
        let id = QuestionId(tables.next_id);
        tables.questions.insert(id, draft.into_question(id));
        Ok(id)
    }

    fn delete_by_id(&self, id: QuestionId) -> StoreResult<bool> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.questions.remove(&id).is_some())
    }

    fn all(&self) -> StoreResult<Vec<Question>> {
        self.read_questions(|_| true)
    }

    fn filter_by_category(&self, category: CategoryId) -> StoreResult<Vec<Question>> {
        self.read_questions(|q| q.category == category)
    }

    fn search_by_text(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        self.read_questions(|q| q.question.to_lowercase().contains(&needle))
    }
}

impl CategoryCatalog for InMemoryStore {
    fn all(&self) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.categories.values().cloned().collect())
    }

    fn get_by_id(&self, id: CategoryId) -> StoreResult<Option<Category>> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.categories.get(&id).cloned())
    }
}
