//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use quizgen_application::RunPipelineInput;
use std::path::PathBuf;

/// Output format for `quizgen generate`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array (the HTTP response body)
    #[default]
    Json,
    /// Numbered questions for reading in a terminal
    Text,
}

/// CLI arguments for quizgen
#[derive(Parser, Debug)]
#[command(name = "quizgen")]
#[command(author, version, about = "Country quiz generator - ten questions per request")]
#[command(long_about = r#"
quizgen turns a category and 3-5 countries into ten multiple-choice questions
whose answer options are those countries, each with an illustrative image.

Questions come from Gemini (GEMINI_API_KEY), images from Pexels
(PEXELS_API_KEY). Without a Pexels key questions are returned without images.

Configuration files are loaded from (in priority order):
1. QUIZGEN_* environment variables (e.g. QUIZGEN_SERVER__BIND)
2. --config <path>     Explicit config file
3. ./quizgen.toml      Project-level config
4. ~/.config/quizgen/config.toml   Global config

Example:
  quizgen serve --bind 0.0.0.0:3000
  quizgen generate --category Capitals --country France --country Japan --country Brazil
  quizgen generate -c Landmarks --country Italy,Egypt,Peru --output text
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and effective values, then exit
    #[arg(long, global = true)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The subcommand to run; `serve` when none is given
    pub fn effective_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Serve(ServeArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve(ServeArgs),
    /// Generate one batch of questions and print it
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeArgs {
    /// Address to listen on (overrides server.bind)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Quiz category, e.g. "Capitals"
    #[arg(short, long)]
    pub category: String,

    /// Country used as an answer option (3-5, repeat or comma-separate)
    #[arg(long = "country", value_name = "COUNTRY", value_delimiter = ',', required = true)]
    pub countries: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub output: OutputFormat,
}

impl GenerateArgs {
    pub fn to_input(&self) -> RunPipelineInput {
        RunPipelineInput::new(self.category.clone(), self.countries.clone())
    }
}
