use std::collections::HashSet;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::trivia_engine::models::{Question, QuestionId, QuizOutcome};

/// Questions in `pool` whose id is not in `asked`, in pool order.
pub fn eligible<'a>(pool: &'a [Question], asked: &HashSet<QuestionId>) -> Vec<&'a Question> {
    pool.iter().filter(|q| !asked.contains(&q.id)).collect()
}

/// Pick one un-asked question uniformly at random.
///
/// The eligible subset is computed before sampling, so the draw never repeats
/// an asked id and always terminates. An empty subset is reported as
/// [`QuizOutcome::Exhausted`].
pub fn next_question<R: Rng + ?Sized>(
    pool: &[Question],
    asked: &HashSet<QuestionId>,
    rng: &mut R,
) -> QuizOutcome {
    match eligible(pool, asked).choose(rng) {
        Some(q) => QuizOutcome::Question((*q).clone()),
        None => QuizOutcome::Exhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::trivia_engine::models::CategoryId;

    fn q(id: u32, category: u32) -> Question {
        Question {
            id: QuestionId(id),
            question: format!("Question {id}?"),
            answer: format!("Answer {id}"),
            difficulty: 1,
            category: CategoryId(category),
        }
    }

    fn asked(ids: &[u32]) -> HashSet<QuestionId> {
        ids.iter().copied().map(QuestionId).collect()
    }

    #[test]
    fn single_remaining_question_is_chosen_deterministically() {
        let pool = vec![q(1, 6), q(2, 6), q(3, 6)];
        for seed in 0..50u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = next_question(&pool, &asked(&[1, 2]), &mut rng);
            assert_eq!(outcome.question().map(|q| q.id), Some(QuestionId(3)), "seed={seed}");
        }
    }

    #[test]
    fn fully_asked_pool_is_exhausted() {
        let pool = vec![q(1, 6), q(2, 6), q(3, 6)];
        let mut rng = StdRng::seed_from_u64(7);
        assert!(next_question(&pool, &asked(&[1, 2, 3]), &mut rng).is_exhausted());
        // Superset of the pool, including ids from elsewhere.
        assert!(next_question(&pool, &asked(&[1, 2, 3, 40, 41]), &mut rng).is_exhausted());
    }

    #[test]
    fn empty_pool_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(next_question(&[], &HashSet::new(), &mut rng).is_exhausted());
    }

    #[test]
    fn never_returns_an_asked_id() {
        let pool: Vec<Question> = (1..=8).map(|id| q(id, 1)).collect();
        let already = asked(&[2, 4, 6, 8]);
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..500 {
            let outcome = next_question(&pool, &already, &mut rng);
            let id = outcome.question().map(|q| q.id).expect("pool is not exhausted");
            assert!(!already.contains(&id), "returned asked id {id}");
        }
    }

    #[test]
    fn every_eligible_id_is_reachable() {
        let pool: Vec<Question> = (1..=5).map(|id| q(id, 1)).collect();
        let already = asked(&[3]);
        let mut rng = StdRng::seed_from_u64(99);
        let mut counts: HashMap<QuestionId, usize> = HashMap::new();
        let trials = 4000;
        for _ in 0..trials {
            if let QuizOutcome::Question(q) = next_question(&pool, &already, &mut rng) {
                *counts.entry(q.id).or_default() += 1;
            }
        }
        assert_eq!(counts.len(), 4, "expected all four eligible ids, got {counts:?}");
        // Uniform expectation is 1000 each; allow a wide margin.
        for (id, n) in &counts {
            assert!((700..=1300).contains(n), "id {id} drawn {n} times out of {trials}");
        }
    }

    #[test]
    fn session_walk_visits_every_question_once() {
        let pool: Vec<Question> = (1..=6).map(|id| q(id, 2)).collect();
        let mut seen = HashSet::new();
        let mut rng = StdRng::seed_from_u64(5);
        while let QuizOutcome::Question(q) = next_question(&pool, &seen, &mut rng) {
            assert!(seen.insert(q.id), "question {} served twice", q.id);
        }
        assert_eq!(seen.len(), pool.len());
    }
}
