//! pokedex CLI - look up creatures by name or id.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pokedex::{
    Config, InputField, LookupController, MemoryInput, MemoryRegion, OutputFormat, OutputRegion,
    PokeApiClient, PokedexError, Query, SubmitOutcome,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(version)]
#[command(about = "Look up creatures on PokeAPI by name or id")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a single identifier and print the result
    Lookup {
        /// Name or numeric id, embedded verbatim in the request URL
        identifier: String,

        /// Output format (overrides [display] format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Interactive form: each line read from stdin is one submission
    Form {
        /// Output format (overrides [display] format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Validate configuration file
    Validate,

    /// Show example configuration
    Example,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Html,
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

fn print_example_config() {
    let example = r#"# pokedex configuration file

[api]
# Supports ${ENV_VAR} expansion
base_url = "https://pokeapi.co/api/v2"
timeout_secs = 30
# user_agent = "pokedex/0.1.0"

[display]
# html | text | json
format = "html"
"#;
    println!("{example}");
}

struct Form {
    controller: LookupController,
    output: Arc<MemoryRegion>,
    input: Arc<MemoryInput>,
}

fn build_form(config: &Config, format: Option<FormatArg>) -> Result<Form> {
    let client = PokeApiClient::from_config(config).context("Failed to create API client")?;
    let base_url = client.base_url().to_string();
    let output = Arc::new(MemoryRegion::new());
    let input = Arc::new(MemoryInput::new());

    let format = format.map(OutputFormat::from).unwrap_or(config.display.format);
    let controller =
        LookupController::new(Arc::new(client), output.clone(), input.clone(), base_url)
            .with_format(format);

    Ok(Form {
        controller,
        output,
        input,
    })
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let load_config = || {
        Config::load(cli.config.as_deref())
            .with_context(|| format!("Failed to load config from {:?}", cli.config))
    };

    match cli.command {
        Commands::Example => {
            print_example_config();
        }

        Commands::Validate => {
            let config = load_config()?;
            config.validate().context("Invalid configuration")?;

            info!("Configuration is valid");
            info!("  Base URL: {}", config.resolve_base_url());
            info!("  Timeout: {}s", config.api.timeout_secs);
            info!("  Format: {:?}", config.display.format);
        }

        Commands::Lookup { identifier, format } => {
            let query = Query::parse(&identifier)?;
            let config = load_config()?;
            let form = build_form(&config, format)?;

            form.controller.submit(query.as_str()).await;
            println!("{}", form.output.contents());
            if form.controller.display_state().await.is_errored() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Form { format } => {
            let config = load_config()?;
            let form = build_form(&config, format)?;
            info!("Enter a name or id per line; Ctrl-D to quit");

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines
                .next_line()
                .await
                .map_err(|e| PokedexError::io("reading stdin", e))?
            {
                form.input.set_value(line);
                match form.controller.submit_form().await {
                    SubmitOutcome::Ignored | SubmitOutcome::Superseded => continue,
                    SubmitOutcome::Rendered | SubmitOutcome::Failed(_) => {
                        println!("{}\n", form.output.contents());
                    }
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
