//! End-to-end walk through the trivia engine.
//!
//! Run with: `cargo run --example demo` (set `RUST_LOG=trivia_engine=debug`
//! to see the engine's own log lines).
//!
//! 1. **Seeding**: An in-memory store gets a small catalog and a handful of
//!    questions through `create_question`, so validation runs on every insert.
//! 2. **Listing & search**: The first page, a text search, and a category
//!    listing, each rendered through the `wire` envelopes.
//! 3. **Quiz session**: Draws from one category until the engine reports
//!    `Exhausted`, feeding every served id back as `previous_questions`.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use trivia_engine::{
    wire, Category, EngineConfig, InMemoryStore, ListRequest, NewQuestion, QuizOutcome,
    QuizRequest, TriviaService,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("bad configuration: {err}");
            return;
        }
    };

    let store = Arc::new(InMemoryStore::with_categories([
        Category::new(1, "Science"),
        Category::new(2, "Art"),
        Category::new(3, "Geography"),
        Category::new(4, "History"),
        Category::new(5, "Entertainment"),
        Category::new(6, "Sports"),
    ]));
    let service = TriviaService::new(store.clone(), store, config);

    let seed = [
        ("What is the heaviest organ in the human body?", "The Liver", 4, 1),
        ("Who discovered penicillin?", "Alexander Fleming", 3, 1),
        ("Which Dutch graphic artist is known for impossible constructions?", "Escher", 1, 2),
        ("What is the largest lake in Africa?", "Lake Victoria", 2, 3),
        ("Which trophy have Al Ahly won in FIFA club world cup 2020?", "Bronze Medal", 2, 6),
        ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
        ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, 6),
    ];
    for (question, answer, difficulty, category) in seed {
        if let Err(err) = service.create_question(NewQuestion::new(question, answer, difficulty, category)) {
            eprintln!("seeding failed: {err}");
            return;
        }
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Listing, search and category views");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let views = [
        ("GET /questions", ListRequest::default()),
        ("POST /questions {searchTerm: won}", ListRequest::search("won")),
        ("GET /categories/6/questions", ListRequest::category(6)),
        ("GET /questions?page=2", ListRequest::page(2)),
        ("GET /categories/1000/questions", ListRequest::category(1000)),
    ];
    for (label, request) in views {
        let (status, body) = wire::respond(service.list_questions(&request), wire::listing_response);
        println!("\n  {label} → {status}");
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Quiz session: Sports");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let mut asked: Vec<u32> = Vec::new();
    loop {
        match service.next_quiz_question(&QuizRequest::new(6, asked.clone())) {
            Ok(QuizOutcome::Question(q)) => {
                println!("  Q{}: {}  →  {}", asked.len() + 1, q.question, q.answer);
                asked.push(q.id.0);
            }
            Ok(QuizOutcome::Exhausted) => {
                println!("  No questions left after {} rounds.", asked.len());
                break;
            }
            Err(err) => {
                println!("  quiz failed: {err}");
                break;
            }
        }
    }
}
