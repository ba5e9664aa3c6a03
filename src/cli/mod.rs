//! CLI module for tagcall
//!
//! ## Commands
//!
//! - `tags [--family html|svg]` - List the tag vocabulary in installation order
//! - `reference` - Print a Markdown reference table of the vocabulary
//! - `resolve <NAME>` - Dry-run one dispatch against a recording engine
//!
//! A dispatch failure is rendered through `miette` and exits with status 1.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tagcall_core::lang::registry::TagFamily;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Process exit status of a subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// A failed subcommand: the rendered report printed to stderr, and the status to exit with.
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Exit status 1.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Tag vocabulary and call dispatch inspector
#[derive(Parser, Debug)]
#[command(name = "tagcall")]
#[command(version = VERSION)]
#[command(about = "Tag vocabulary and call dispatch inspector", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the tag vocabulary
    Tags {
        /// Only list one family
        #[arg(long, value_enum)]
        family: Option<FamilyArg>,
    },

    /// Print a Markdown reference table of the vocabulary
    Reference,

    /// Dry-run one dispatch and print the resulting engine call
    Resolve {
        /// Name to call (tag, alias, component simple name, `_as_node` spelling)
        #[arg(value_name = "NAME")]
        name: String,
        /// Calling scope, `::`-separated (default: root)
        #[arg(long, value_name = "PATH", default_value = "")]
        scope: String,
        /// Adopt a rendering component (repeatable)
        #[arg(long = "component", value_name = "PATH")]
        components: Vec<String>,
        /// Declare a type without the render capability (repeatable)
        #[arg(long = "plain", value_name = "PATH")]
        plain: Vec<String>,
        /// Positional parameter as JSON; anything that is not JSON is taken as a string (repeatable)
        #[arg(long = "param", value_name = "JSON")]
        params: Vec<String>,
        /// Supply a nested-content block
        #[arg(long)]
        block: bool,
        /// Call the binding on exactly `--scope` (the `Scope::Name(...)` form)
        #[arg(long)]
        qualified: bool,
        /// Disable the deprecated `_as_node` spellings
        #[arg(long)]
        no_legacy_as_node: bool,
        /// Retry missed lookups in the root scope
        #[arg(long)]
        root_fallback: bool,
    },
}

/// Tag family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FamilyArg {
    Html,
    Svg,
}

impl From<FamilyArg> for TagFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Html => TagFamily::Html,
            FamilyArg::Svg => TagFamily::Svg,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Parse arguments, run the subcommand, and exit with its status.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Tags { family } => commands::list_tags(family.map(TagFamily::from)),
        Command::Reference => commands::print_reference(),
        Command::Resolve {
            name,
            scope,
            components,
            plain,
            params,
            block,
            qualified,
            no_legacy_as_node,
            root_fallback,
        } => commands::resolve(&commands::ResolveOptions {
            name,
            scope,
            components,
            plain,
            params,
            block,
            qualified,
            legacy_as_node: !no_legacy_as_node,
            root_fallback,
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================
