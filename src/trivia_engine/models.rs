use std::collections::BTreeMap;
use std::fmt;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Store-assigned question id. Monotonic, so it doubles as the ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Stored records
// ---------------------------------------------------------------------------

/// Serializes to the wire shape: `id`, `question`, `answer`, `difficulty`, `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub difficulty: u8,
    pub category: CategoryId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    /// Display label, e.g. "Science".
    pub kind: String,
}

impl Category {
    pub fn new(id: u32, kind: impl Into<String>) -> Self {
        Category { id: CategoryId(id), kind: kind.into() }
    }
}

/// A validated question that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: String,
    pub answer: String,
    pub difficulty: u8,
    pub category: CategoryId,
}

impl QuestionDraft {
    /// Attach a store-assigned id.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Creation input exactly as the caller supplied it. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

impl NewQuestion {
    /// Convenience constructor with every field present.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        difficulty: i64,
        category: i64,
    ) -> Self {
        NewQuestion {
            question: Some(question.into()),
            answer: Some(answer.into()),
            difficulty: Some(difficulty),
            category: Some(category),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
    /// 1-based page number; `None` means the first page.
    pub page: Option<i64>,
    pub search_term: Option<String>,
    pub category: Option<CategoryId>,
}

impl ListRequest {
    /// Plain listing of the given page.
    pub fn page(page: i64) -> Self {
        ListRequest { page: Some(page), ..Default::default() }
    }

    pub fn search(term: impl Into<String>) -> Self {
        ListRequest { search_term: Some(term.into()), ..Default::default() }
    }

    pub fn category(id: u32) -> Self {
        ListRequest { category: Some(CategoryId(id)), ..Default::default() }
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }
}

/// One page of a resolved pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub questions: Vec<Question>,
    /// Size of the pool before pagination.
    pub total_count: usize,
    /// The 1-based page number actually served, after normalisation.
    pub page_number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListing {
    pub page: Page,
    /// Category mapping, attached to plain listings only.
    pub categories: Option<BTreeMap<CategoryId, String>>,
    /// Display name of the category a category-scoped listing was filtered by.
    pub current_category: Option<String>,
}

/// Result of a create call that also returns the refreshed listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedQuestion {
    pub id: QuestionId,
    pub page: Page,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizRequest {
    /// `None` is a bad request. The all-categories sentinel selects everything.
    pub category: Option<CategoryId>,
    /// `None` is a bad request; an empty list starts a new session.
    pub previous_questions: Option<Vec<QuestionId>>,
    /// Fixed seed for reproducible selection; entropy when absent.
    pub rng_seed: Option<u64>,
}

impl QuizRequest {
    pub fn new(category: u32, previous: impl IntoIterator<Item = u32>) -> Self {
        QuizRequest {
            category: Some(CategoryId(category)),
            previous_questions: Some(previous.into_iter().map(QuestionId).collect()),
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// Outcome of a quiz draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Question(Question),
    /// Every question in the pool has already been asked.
    Exhausted,
}

impl QuizOutcome {
    pub fn question(&self) -> Option<&Question> {
        match self {
            QuizOutcome::Question(q) => Some(q),
            QuizOutcome::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, QuizOutcome::Exhausted)
    }
}
