//! mirabilis CLI
//!
//! Command-line interface for mirabilis - a curated Einstein archive of
//! works, essays, letters, papers, and quotes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mirabilis_core::{Config, ContentLibrary, StoreCell};

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "mirabilis")]
#[command(about = "mirabilis - a curated Einstein archive")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse major works
    Works {
        #[command(subcommand)]
        command: BrowseCommands,
    },
    /// Browse essays
    Essays {
        #[command(subcommand)]
        command: BrowseCommands,
    },
    /// Browse letters
    Letters {
        #[command(subcommand)]
        command: BrowseCommands,
    },
    /// Browse papers
    Papers {
        #[command(subcommand)]
        command: BrowseCommands,
    },
    /// Manage collected quotes
    Quote {
        #[command(subcommand)]
        command: QuoteCommands,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Show archive status
    Status,
}

#[derive(Subcommand, Clone)]
enum BrowseCommands {
    /// List all entries
    #[command(alias = "ls")]
    List,
    /// Show a single entry
    Show {
        /// Entry identifier
        id: String,
    },
}

#[derive(Subcommand)]
enum QuoteCommands {
    /// Add a quote
    #[command(alias = "add")]
    Create {
        /// The quote text
        text: String,
        /// Who said or wrote it
        #[arg(short, long, default_value = "Albert Einstein")]
        by: String,
        /// Category (e.g. science, life)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List quotes
    #[command(alias = "ls")]
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show a quote
    Show {
        /// Quote ID (full UUID or prefix)
        id: String,
    },
    /// Show a random quote
    Random,
    /// Delete a quote
    #[command(alias = "rm")]
    Delete {
        /// Quote ID (full UUID or prefix)
        id: String,
    },
    /// Count collected quotes
    Count,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, content_dir, allow_schema_reset)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the library or the store
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    let config = Config::load()?;
    let library = match &config.content_dir {
        Some(dir) => ContentLibrary::from_dir(dir),
        None => ContentLibrary::bundled(),
    };
    // Opened lazily: content commands never touch the quote database
    let store = StoreCell::new(config.quotes_db_path(), config.reset_policy());

    match cli.command {
        Commands::Works { command } => match command {
            BrowseCommands::List => commands::works::list(&library, &output).await,
            BrowseCommands::Show { id } => commands::works::show(&library, &id, &output).await,
        },
        Commands::Essays { command } => match command {
            BrowseCommands::List => commands::essays::list(&library, &output).await,
            BrowseCommands::Show { id } => commands::essays::show(&library, &id, &output).await,
        },
        Commands::Letters { command } => match command {
            BrowseCommands::List => commands::letters::list(&library, &output).await,
            BrowseCommands::Show { id } => commands::letters::show(&library, &id, &output).await,
        },
        Commands::Papers { command } => match command {
            BrowseCommands::List => commands::papers::list(&library, &output).await,
            BrowseCommands::Show { id } => commands::papers::show(&library, &id, &output).await,
        },
        Commands::Quote { command } => handle_quote_command(command, &store, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
        Commands::Status => commands::status::show(&config, &library, &store, &output).await,
    }
}

fn handle_quote_command(command: QuoteCommands, store: &StoreCell, output: &Output) -> Result<()> {
    let store = store.get_or_open()?;

    match command {
        QuoteCommands::Create { text, by, category } => {
            commands::quote::create(&store, text, by, category, output)
        }
        QuoteCommands::List { category } => commands::quote::list(&store, category, output),
        QuoteCommands::Show { id } => commands::quote::show(&store, id, output),
        QuoteCommands::Random => commands::quote::random(&store, output),
        QuoteCommands::Delete { id } => commands::quote::delete(&store, id, output),
        QuoteCommands::Count => commands::quote::count(&store, output),
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

fn init_tracing() {
    // Log to stderr so command output stays clean; level via RUST_LOG
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
