use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use quiz_deck::{Config, Quiz, logging};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file (if present)
    dotenv().ok();
    let config = Config::parse();

    let _guard = match logging::init(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let quiz = match Quiz::from_config(&config) {
        Ok(quiz) => quiz,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Starting quiz with {} questions", quiz.bank().len());

    if let Err(e) = quiz.run().await {
        tracing::error!("Quiz exited with error: {}", e);
        eprintln!("Error running quiz: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
