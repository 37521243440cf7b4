use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use log::{debug, info, warn};
use showcase_ai::GeminiProvider;
use showcase_core::{
    content::deployment_steps, DeploymentStep, IdeaSession, IdeaWorkflow, ShowcaseConfig,
    SubmitOutcome, TextGenerator,
};
use showcase_web::{DiagnosticLog, ShowcaseServer};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Model name (overrides SHOWCASE_MODEL)
    #[arg(short, long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an app idea for a theme
    Idea {
        /// Theme to build the idea around
        topic: String,
    },

    /// Read themes from stdin, one per line, without waiting between them
    Interactive,

    /// Print the four-step deployment guide
    Guide {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the landing page and API
    Serve {
        /// Port to listen on (overrides SHOWCASE_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Reject new generations while one is pending
        #[arg(long)]
        guard: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenv().ok();

    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let mut config = ShowcaseConfig::from_env();
    if let Some(model) = &cli.model {
        config = config.with_model(model.clone());
    }

    match cli.command {
        Commands::Idea { topic } => {
            let session = build_session(&config, None)?;
            match session.submit(&topic).await {
                SubmitOutcome::Settled(text) => println!("{}", text),
                SubmitOutcome::Ignored => bail!("Topic must not be empty"),
                SubmitOutcome::Busy => bail!("A generation is already in progress"),
            }
        }
        Commands::Interactive => {
            let session = Arc::new(build_session(&config, None)?);
            run_interactive(session).await?;
        }
        Commands::Guide { json } => {
            let steps = deployment_steps();
            if json {
                println!("{}", serde_json::to_string_pretty(&steps)?);
            } else {
                print!("{}", render_guide(&steps));
            }
        }
        Commands::Serve { port, guard } => {
            if guard {
                config = config.with_in_flight_guard(true);
            }
            let port = port.unwrap_or(config.port);

            let provider = GeminiProvider::new(&config).context("Failed to create Gemini client")?;
            check_provider(&provider).await;

            let diagnostics = DiagnosticLog::new();
            let session = build_session(&config, Some(diagnostics.clone()))?;

            info!("Serving on port {}", port);
            ShowcaseServer::new(Arc::new(session), diagnostics)
                .start(port)
                .await
                .map_err(|e| anyhow!("Server error: {}", e))?;
        }
    }

    Ok(())
}

fn build_session(config: &ShowcaseConfig, diagnostics: Option<DiagnosticLog>) -> Result<IdeaSession> {
    if !config.has_api_key() {
        warn!("API_KEY is not set; generations will fail");
    }

    info!("Initializing Gemini provider with model {}", config.model);
    let provider = GeminiProvider::new(config).context("Failed to create Gemini client")?;

    let mut workflow = IdeaWorkflow::new(provider, config.model.clone());
    if let Some(log) = diagnostics {
        workflow = workflow.with_observer(Arc::new(log));
    }

    Ok(IdeaSession::new(workflow).with_in_flight_guard(config.in_flight_guard))
}

/// Log whether the provider answers. Never fatal: generations fall back anyway.
async fn check_provider(provider: &dyn TextGenerator) -> bool {
    match provider.health_check().await {
        Ok(true) => {
            info!("Provider {} is reachable", provider.name());
            true
        }
        Ok(false) => {
            warn!("Provider {} rejected the health check; check API_KEY and model", provider.name());
            false
        }
        Err(e) => {
            warn!("Provider {} health check failed: {}", provider.name(), e);
            false
        }
    }
}

async fn run_interactive(session: Arc<IdeaSession>) -> Result<()> {
    eprintln!("Enter a theme per line (Ctrl-D to finish).");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = JoinSet::new();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            debug!("Skipping empty line");
            continue;
        }

        let session = Arc::clone(&session);
        pending.spawn(async move {
            let outcome = session.submit(&line).await;
            (line, outcome)
        });
    }

    while let Some(joined) = pending.join_next().await {
        let (topic, outcome) = joined.context("Generation task panicked")?;
        if let SubmitOutcome::Settled(text) = outcome {
            println!("== {}\n{}\n", topic, text);
        }
    }

    Ok(())
}

fn render_guide(steps: &[DeploymentStep]) -> String {
    let mut out = String::new();
    for (idx, step) in steps.iter().enumerate() {
        out.push_str(&format!("{}. {}\n   {}\n", idx + 1, step.title, step.description));
        if let Some(command) = &step.command {
            out.push_str(&format!("   $ {}\n", command));
        }
    }
    out
}
