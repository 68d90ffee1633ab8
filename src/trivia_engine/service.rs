//! The operations exposed to the request-handling layer.
//!
//! [`TriviaService`] owns nothing but its injected collaborators and the
//! engine config; every call reads fresh from the store.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::trivia_engine::{
    config::EngineConfig,
    error::{TriviaError, TriviaResult},
    models::{
        CategoryId, CreatedQuestion, ListRequest, NewQuestion, Page, QuestionDraft, QuestionId,
        QuestionListing, QuizOutcome, QuizRequest,
    },
    paginator::{normalize_page, paginate},
    resolver::{Pool, PoolSource, Resolver},
    selector,
    store::{CategoryCatalog, QuestionStore},
};

pub struct TriviaService<S, C> {
    store: Arc<S>,
    catalog: Arc<C>,
    config: EngineConfig,
}

impl<S, C> Clone for TriviaService<S, C> {
    fn clone(&self) -> Self {
        TriviaService {
            store: Arc::clone(&self.store),
            catalog: Arc::clone(&self.catalog),
            config: self.config.clone(),
        }
    }
}

impl<S, C> TriviaService<S, C>
where
    S: QuestionStore,
    C: CategoryCatalog,
{
    pub fn new(store: Arc<S>, catalog: Arc<C>, config: EngineConfig) -> Self {
        TriviaService { store, catalog, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn resolver(&self) -> Resolver<'_, S, C> {
        Resolver::new(self.store.as_ref(), self.catalog.as_ref())
    }

    /// List, search, or filter questions and return one page.
    ///
    /// Fails with `NotFound` when the pool or the requested page is empty and
    /// with `BadRequest` when the category does not exist.
    pub fn list_questions(&self, request: &ListRequest) -> TriviaResult<QuestionListing> {
        debug!(
            page = ?request.page,
            search_term = ?request.search_term,
            category = ?request.category,
            "listing questions"
        );
        let resolver = self.resolver();
        let pool = resolver
            .resolve(request.search_term.as_deref(), request.category)
            .map_err(log_failure("list_questions"))?;

        let (categories, current_category) = match &pool.source {
            PoolSource::All => {
                let categories = resolver.categories().map_err(log_failure("list_questions"))?;
                (Some(categories), None)
            }
            PoolSource::Category(category) => (None, Some(category.kind.clone())),
            PoolSource::Search(_) => (None, None),
        };

        let page = self.page_of(&pool, request.page).map_err(log_failure("list_questions"))?;
        Ok(QuestionListing { page, categories, current_category })
    }

    fn page_of(&self, pool: &Pool, page: Option<i64>) -> TriviaResult<Page> {
        let page_number = normalize_page(page);
        let questions = paginate(&pool.questions, page_number, self.config.page_size);
        if questions.is_empty() {
            return Err(TriviaError::not_found(format!(
                "page {page_number} is empty ({} questions in pool)",
                pool.total_count()
            )));
        }
        Ok(Page { questions, total_count: pool.total_count(), page_number })
    }

    /// Validate and insert a new question, returning its id.
    pub fn create_question(&self, new: NewQuestion) -> TriviaResult<QuestionId> {
        let draft = self.validate(new).map_err(log_failure("create_question"))?;
        let id = self.store.insert(draft).map_err(|e| {
            warn!(error = %e, "question insert failed");
            TriviaError::unprocessable(format!("insert failed: {e}"))
        })?;
        info!(question_id = %id, "question created");
        Ok(id)
    }

    /// Create, then return the id along with the requested page of the full listing.
    ///
    /// Once the insert succeeds the call succeeds. A page past the end comes
    /// back empty, and a failed listing read is logged and yields an empty page.
    pub fn create_question_listing(
        &self,
        new: NewQuestion,
        page: Option<i64>,
    ) -> TriviaResult<CreatedQuestion> {
        let id = self.create_question(new)?;
        let page_number = normalize_page(page);
        let page = match self.resolver().whole_collection() {
            Ok(pool) => Page {
                questions: paginate(&pool.questions, page_number, self.config.page_size),
                total_count: pool.total_count(),
                page_number,
            },
            Err(err) => {
                warn!(question_id = %id, error = %err, "listing after create failed");
                Page { questions: Vec::new(), total_count: 0, page_number }
            }
        };
        Ok(CreatedQuestion { id, page })
    }

    fn validate(&self, new: NewQuestion) -> TriviaResult<QuestionDraft> {
        let question = required_text(new.question, "question")?;
        let answer = required_text(new.answer, "answer")?;

        let difficulty = new
            .difficulty
            .ok_or_else(|| TriviaError::unprocessable("difficulty is required"))?;
        let max = self.config.max_difficulty;
        let difficulty = u8::try_from(difficulty)
            .ok()
            .filter(|d| (1..=max).contains(d))
            .ok_or_else(|| {
                TriviaError::unprocessable(format!("difficulty {difficulty} is outside 1..={max}"))
            })?;

        let category = new
            .category
            .ok_or_else(|| TriviaError::unprocessable("category is required"))?;
        let category = u32::try_from(category)
            .map(CategoryId)
            .map_err(|_| TriviaError::unprocessable(format!("category {category} is invalid")))?;
        let known = self.catalog.get_by_id(category).map_err(TriviaError::internal)?;
        if known.is_none() {
            return Err(TriviaError::unprocessable(format!("category {category} does not exist")));
        }

        Ok(QuestionDraft { question, answer, difficulty, category })
    }

    /// Delete by id. A missing id is `NotFound`; a store failure is `Unprocessable`.
    pub fn delete_question(&self, id: QuestionId) -> TriviaResult<()> {
        let found = self.store.delete_by_id(id).map_err(|e| {
            warn!(question_id = %id, error = %e, "question delete failed");
            TriviaError::unprocessable(format!("delete failed: {e}"))
        })?;
        if !found {
            let err = TriviaError::not_found(format!("question {id} does not exist"));
            warn!(question_id = %id, "delete of unknown question");
            return Err(err);
        }
        info!(question_id = %id, "question deleted");
        Ok(())
    }

    /// Serve the next un-asked question for a quiz session.
    pub fn next_quiz_question(&self, request: &QuizRequest) -> TriviaResult<QuizOutcome> {
        let (category, previous) = match (request.category, request.previous_questions.as_ref()) {
            (Some(c), Some(p)) => (c, p),
            _ => {
                let err = TriviaError::bad_request("quiz_category and previous_questions are required");
                warn!(error = %err, "quiz request rejected");
                return Err(err);
            }
        };
        debug!(category = %category, asked = previous.len(), "drawing quiz question");

        let resolver = self.resolver();
        let pool = if self.config.is_all_categories(category) {
            resolver.whole_collection()
        } else {
            resolver.by_category(category)
        }
        .map_err(log_failure("next_quiz_question"))?;

        let asked: HashSet<QuestionId> = previous.iter().copied().collect();
        let mut rng: StdRng = match request.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };

        let outcome = selector::next_question(&pool.questions, &asked, &mut rng);
        match &outcome {
            QuizOutcome::Question(q) => debug!(question_id = %q.id, "quiz question selected"),
            QuizOutcome::Exhausted => {
                info!(category = %category, pool = pool.total_count(), "quiz pool exhausted")
            }
        }
        Ok(outcome)
    }

    /// Category id → display name, ordered by id.
    pub fn categories(&self) -> TriviaResult<BTreeMap<CategoryId, String>> {
        self.resolver().categories().map_err(log_failure("categories"))
    }
}

fn required_text(value: Option<String>, field: &str) -> TriviaResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(TriviaError::unprocessable(format!("{field} must not be blank"))),
        None => Err(TriviaError::unprocessable(format!("{field} is required"))),
    }
}

/// Log a classified failure once before handing it back to the caller.
fn log_failure(operation: &'static str) -> impl Fn(TriviaError) -> TriviaError {
    move |err| {
        warn!(operation, kind = ?err.kind(), error = %err, "request failed");
        err
    }
}
