pub mod config;
pub mod console; // Interactive prompt + sample batch
pub mod language_model; // Preferred/fallback model loading
pub mod models;
pub mod pipeline;

use std::io;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::language_model::{LanguageModel, ModelError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Language model error: {0}")]
    Model(#[from] ModelError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Application state built once at startup and read-only afterwards.
#[derive(Debug)]
pub struct App {
    pub model: LanguageModel,
}

impl App {
    /// Load the language model, announcing a fallback on `out`.
    pub fn start<W: io::Write>(out: &mut W) -> Result<Self, AppError> {
        let model = language_model::load_with_fallback(
            &config::models_dir(),
            config::PREFERRED_MODEL,
            config::FALLBACK_MODEL,
            out,
        )?;
        Ok(Self { model })
    }
}

pub fn run() -> Result<(), AppError> {
    // Logs go to stderr; stdout carries the prompt and results.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let app = App::start(&mut out)?;
    tracing::info!(model = %app.model.name, "Ready");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    console::run_interactive(&mut input, &mut out)?;
    console::run_batch(&console::SAMPLE_NOTES, &mut out)?;

    Ok(())
}
