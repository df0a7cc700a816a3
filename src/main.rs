use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use cloze_quiz::{config, QuestionSource, Quiz, QuizConfig, TimerConfig};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL of the JSON question feed
    #[arg(short, long, default_value = config::DEFAULT_QUESTIONS_URL, conflicts_with = "questions")]
    url: String,

    /// JSON file to load the questions from instead of the feed
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Seconds allowed per question
    #[arg(short, long, default_value_t = config::DEFAULT_TIMER_SECONDS,
          value_parser = clap::value_parser!(u32).range(1..))]
    seconds: u32,

    /// Write diagnostics to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Level for the diagnostics log
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

impl Args {
    fn quiz_config(&self) -> QuizConfig {
        let source = match &self.questions {
            Some(path) => QuestionSource::File(path.clone()),
            None => QuestionSource::Url(self.url.clone()),
        };
        QuizConfig {
            source,
            timer: TimerConfig::new(self.seconds),
        }
    }
}

fn init_logging(args: &Args) -> Result<()> {
    // The terminal belongs to the UI, so logs only go to a file.
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = args.quiz_config();
    tracing::info!(source = %config.source, seconds = config.timer.duration_seconds, "starting quiz");

    Quiz::new(config)
        .run()
        .await
        .context("Error running quiz")?;

    Ok(())
}
