//! `animagen` -- command-line front end for the animation generation
//! service.
//!
//! Submits a natural-language prompt, polls until the rendered video is
//! ready, and prints the result. Stands in for the browser front end: one
//! generate call per invocation, blocking until a terminal outcome.
//!
//! # Environment variables
//!
//! | Variable       | Required | Default                 | Description                  |
//! |----------------|----------|-------------------------|------------------------------|
//! | `API_BASE_URL` | no       | `http://localhost:3000` | Generation service base URL  |

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use animagen_client::api::GeneratorApi;
use animagen_client::config::ClientConfig;
use animagen_client::generate::generate;
use animagen_client::progress::ProgressReporter;
use animagen_core::request::Quality;
use animagen_core::styles::{DEFAULT_STYLE, EXAMPLE_PROMPTS, STYLES};

#[derive(Debug, Parser)]
#[command(
    name = "animagen",
    about = "Generate mathematical animations from natural-language prompts"
)]
struct Cli {
    /// What to animate, e.g. "Show how the Pythagorean theorem works".
    prompt: Option<String>,

    /// Visual style (see --list-styles).
    #[arg(long, default_value = DEFAULT_STYLE)]
    style: String,

    /// Render quality: low, medium, or high. Higher quality takes longer.
    #[arg(long, default_value = "low")]
    quality: Quality,

    /// Skip the service's NLU pipeline (intent classification and skill
    /// matching).
    #[arg(long)]
    no_nlu: bool,

    /// Print the generated animation source after the status line.
    #[arg(long)]
    show_code: bool,

    /// List the supported visual styles and exit.
    #[arg(long)]
    list_styles: bool,

    /// Show example prompts and exit.
    #[arg(long)]
    examples: bool,
}

/// Progress reporter that logs each update as a percentage.
struct LogProgress;

impl ProgressReporter for LogProgress {
    fn report(&self, fraction: f64, message: &str) {
        let percent = (fraction * 100.0).round() as u32;
        tracing::info!(percent, "{message}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "animagen=info,animagen_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if cli.list_styles {
        for style in STYLES {
            println!("{:<12} {}", style.name, style.description);
        }
        return Ok(());
    }

    if cli.examples {
        for example in EXAMPLE_PROMPTS {
            println!(
                "animagen \"{}\" --style {} --quality {}",
                example.prompt, example.style, example.quality
            );
        }
        return Ok(());
    }

    let prompt = cli
        .prompt
        .ok_or_else(|| anyhow::anyhow!("A prompt is required (try --examples)"))?;

    let config = ClientConfig::from_env();
    tracing::info!(api_base = config.api_base(), "Using generation service");

    let api = GeneratorApi::new(&config);
    let outcome = generate(
        &api,
        &config,
        &prompt,
        &cli.style,
        cli.quality,
        !cli.no_nlu,
        &LogProgress,
    )
    .await;

    println!("{}", outcome.status_message);
    if let Some(url) = &outcome.video_url {
        println!("Video: {url}");
    }
    if cli.show_code && !outcome.code.is_empty() {
        println!("\n{}", outcome.code);
    }

    if !outcome.succeeded {
        std::process::exit(1);
    }
    Ok(())
}
