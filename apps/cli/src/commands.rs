//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use jobposting_core::{BuildOptions, StructuredDataBuilder, problems};
use jobposting_shared::{
    AppConfig, JobPostingError, OutputFormat, init_config, load_config, load_job_from,
};
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Render job postings as schema.org JSON-LD structured data.
#[derive(Parser)]
#[command(
    name = "jobposting",
    version,
    about = "Render job records as JobPosting structured data for search engines.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Structured-data output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum FormatArg {
    /// `<script type="application/ld+json">` element.
    Script,
    /// Bare JSON-LD document.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Script => OutputFormat::Script,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Render a job record (.toml or .json) as structured data on stdout.
    Render {
        /// Path to the job record.
        file: PathBuf,

        /// Output format (defaults to the configured format).
        #[arg(short, long)]
        format: Option<FormatArg>,

        /// Validate enum fields, URLs and salary before rendering.
        #[arg(long)]
        strict: bool,
    },

    /// Check a job record and report every problem found.
    Validate {
        /// Path to the job record.
        file: PathBuf,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
///
/// Logs go to stderr; stdout is reserved for the rendered document.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "jobposting=warn",
        1 => "jobposting=debug",
        _ => "jobposting=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render {
            file,
            format,
            strict,
        } => cmd_render(&file, format, strict),
        Command::Validate { file } => cmd_validate(&file),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

/// Merge CLI flags over the loaded config.
fn resolve(
    config: &AppConfig,
    format: Option<FormatArg>,
    strict: bool,
) -> (BuildOptions, OutputFormat) {
    let mut options = BuildOptions::from(config);
    options.strict |= strict;
    let format = format.map(OutputFormat::from).unwrap_or(config.output.format);
    (options, format)
}

fn cmd_render(file: &Path, format: Option<FormatArg>, strict: bool) -> Result<()> {
    let config = load_config()?;
    let (options, format) = resolve(&config, format, strict);

    let job = load_job_from(file)?;
    info!(
        path = %file.display(),
        id = %job.id,
        ?format,
        strict = options.strict,
        "rendering job"
    );

    let output = StructuredDataBuilder::new(options).render(&job, format)?;
    println!("{output}");
    Ok(())
}

fn cmd_validate(file: &Path) -> Result<()> {
    let job = load_job_from(file)?;
    let found = problems(&job);
    debug!(path = %file.display(), problems = found.len(), "validated job record");

    print!("{}", validation_report(file, &found));
    if found.is_empty() {
        return Ok(());
    }
    Err(eyre!("{} problem(s) found in {}", found.len(), file.display()))
}

/// One line per problem, or a single `ok` line for a clean record.
fn validation_report(file: &Path, found: &[JobPostingError]) -> String {
    if found.is_empty() {
        return format!("{}: ok\n", file.display());
    }
    found
        .iter()
        .map(|problem| format!("{}: {problem}\n", file.display()))
        .collect()
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
