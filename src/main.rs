use std::io;

use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use log::warn;

mod config;
mod error;
mod gemini;
mod generator;
mod input;
mod lexicon;
mod logger;
mod mailer;
mod report;

use config::Config;
use gemini::GeminiClient;
use generator::DictionaryGenerator;
use mailer::EmailService;

#[derive(Parser)]
#[command(
    name = "task_lexicon",
    version,
    about = "Generate a logistics lexicon for a task and email it"
)]
struct Args {
    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();
    logger::init(args.verbose);

    let config = Config::load(&args.config)?;

    let task = input::collect(&mut io::stdin().lock())?;

    let mailer = EmailService::new(config.email)?;
    let generator = DictionaryGenerator::new(Box::new(GeminiClient::new(config.generation)?));

    let html = generator.generate(&task).await?;

    let subject = format!("Task Lexicon: {}", task.name);
    if let Err(err) = mailer.send(&task.recipient, &subject, &html) {
        warn!("Failed to send email: {err}");
        eprintln!("Failed to send email: {err}");
    }

    println!(
        "{}",
        "Dictionary content generated successfully.".green()
    );
    Ok(())
}
