//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};

/// Schemadoc CLI - JSON Schema documentation for language models
///
/// Renders JSON Schema documents (JSON or YAML) as compact, readable
/// documentation suited for prompts.
#[derive(Parser, Debug)]
#[command(
    name = "schemadoc",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SCHEMADOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for structured results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a schema file with a documentation theme
    Render(RenderArgs),

    /// Show the extracted field tree of a schema file
    Inspect(InspectArgs),

    /// List the available themes
    Themes,

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Extraction flags shared by `render` and `inspect`
#[derive(Parser, Debug, Default, Clone)]
pub struct ExtractArgs {
    /// Maximum nesting depth to expand
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Include schema default values
    #[arg(long)]
    pub include_defaults: bool,

    /// Source adapter (defaults to the file extension: yaml/yml or json)
    #[arg(long, value_name = "NAME")]
    pub adapter: Option<String>,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Path to the schema file (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Theme to render with (standard, expanded, condensed, json)
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Spaces per nesting level
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,

    #[command(flatten)]
    pub extract: ExtractArgs,

    /// Print a placeholder instead of failing when the schema cannot be described
    #[arg(long)]
    pub safe: bool,

    /// Output file path (stdout if not specified)
    #[arg(long = "save-to", value_name = "PATH")]
    pub output_file: Option<PathBuf>,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Path to the schema file (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    #[command(flatten)]
    pub extract: ExtractArgs,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stderr().is_terminal()
    }
}

impl ExtractArgs {
    /// Adapter name for `path`: the explicit flag, else the file extension
    pub fn adapter_for(&self, path: &Path) -> String {
        if let Some(adapter) = &self.adapter {
            return adapter.clone();
        }
        let is_yaml = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.eq_ignore_ascii_case("yaml") || s.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);
        if is_yaml { "yaml" } else { "json" }.to_string()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            output: OutputFormat::Human,
            no_color: false,
            command: Commands::Themes,
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli { quiet: true, ..cli };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_render_arguments() {
        let cli = Cli::parse_from([
            "schemadoc",
            "render",
            "user.yaml",
            "--theme",
            "condensed",
            "--max-depth",
            "2",
            "--indent",
            "4",
            "--safe",
        ]);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.theme.as_deref(), Some("condensed"));
                assert_eq!(args.extract.max_depth, Some(2));
                assert_eq!(args.indent, Some(4));
                assert!(args.safe);
                assert!(!args.extract.include_defaults);
                assert_eq!(args.extract.adapter_for(&args.schema), "yaml");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_adapter_selection() {
        let args = ExtractArgs::default();
        assert_eq!(args.adapter_for(Path::new("schema.json")), "json");
        assert_eq!(args.adapter_for(Path::new("schema.YML")), "yaml");
        assert_eq!(args.adapter_for(Path::new("schema")), "json");

        let explicit = ExtractArgs {
            adapter: Some("yaml".into()),
            ..Default::default()
        };
        assert_eq!(explicit.adapter_for(Path::new("schema.json")), "yaml");
    }
}
