//! czmono - CLI entry point.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use git2::Repository;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use czmono::config::Options;
use czmono::flow::{DialoguerPrompter, ScopeChoices, run_flow};
use czmono::git::{GitIndexChangeSource, changed_paths_or_empty, commit_index, write_message_file};
use czmono::message::assemble;
use czmono::packages::{affected_packages, discover_packages};

/// Write a conventional commit for the staged changes of a multi-package repository.
#[derive(Parser, Debug)]
#[command(name = "czmono")]
#[command(about = "Interactive conventional-commit prompt for multi-package repositories")]
#[command(version)]
struct Cli {
    /// Print the message instead of committing
    #[arg(long)]
    dry_run: bool,

    /// Write the message to this file instead of committing (for git hooks)
    #[arg(long, value_name = "PATH", conflicts_with = "dry_run")]
    message_file: Option<PathBuf>,

    /// Maximum width of the `type(scope): subject` header
    #[arg(long, value_name = "N")]
    max_header_width: Option<usize>,

    /// Wrap body, breaking-change, and issues sections at this width
    #[arg(long, value_name = "N")]
    max_line_width: Option<usize>,

    /// Keep the first letter of the subject as typed
    #[arg(long)]
    disable_subject_lower_case: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', value_name = "DIR", default_value = ".")]
    dir: PathBuf,
}

impl Cli {
    /// Layer command-line flags over options read from the environment.
    fn apply(&self, mut options: Options) -> Options {
        if let Some(width) = self.max_header_width {
            options.max_header_width = width;
        }
        if let Some(width) = self.max_line_width {
            options.max_line_width = width;
        }
        if self.disable_subject_lower_case {
            options.disable_subject_lower_case = true;
        }
        options
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = cli.apply(Options::from_env());
    debug!(?options, "Resolved options");

    let repo = Repository::discover(&cli.dir)
        .context("Not a git repository. Run czmono from within a git repository.")?;
    let root = repo
        .workdir()
        .context("Bare repositories have no working tree to commit from")?
        .to_path_buf();

    let choices = scope_choices(&repo, &root)?;

    let mut prompter = DialoguerPrompter::new();
    let answers = run_flow(&mut prompter, &options, &choices).context("Commit prompt aborted")?;
    let message = assemble(&answers, &options);

    if cli.dry_run {
        eprintln!("\n--- Dry Run Output ---\n");
        print_message(&mut std::io::stdout().lock(), &message)
            .context("Failed to print commit message")?;
    } else if let Some(path) = &cli.message_file {
        write_message_file(path, &message).context("Failed to write commit message")?;
        println!("✓ Wrote commit message to {}", path.display());
    } else {
        let oid = commit_index(&repo, &message).context("Failed to commit")?;
        let short = oid.to_string();
        println!("✓ Committed {}", &short[..short.len().min(7)]);
    }

    Ok(())
}

/// Print only the message on `out`, so `--dry-run > FILE` yields a usable message file.
fn print_message(out: &mut impl Write, message: &str) -> std::io::Result<()> {
    writeln!(out, "{}", message)
}

/// All workspace packages, with those touched by the staged changes preselected.
fn scope_choices(repo: &Repository, root: &Path) -> Result<ScopeChoices> {
    let packages = discover_packages(root).context("Failed to discover workspace packages")?;

    let source = GitIndexChangeSource::new(repo);
    let changed_paths = changed_paths_or_empty(&source);
    let changed = affected_packages(&changed_paths, &packages, root);
    debug!(?changed, "Packages affected by staged changes");

    Ok(ScopeChoices {
        all: packages.into_iter().map(|p| p.name).collect(),
        changed,
    })
}

/// Log to stderr so prompts and the printed message stay clean.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "czmono=debug" } else { "czmono=warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_options() {
        let cli = Cli::try_parse_from([
            "czmono",
            "--max-header-width",
            "72",
            "--max-line-width",
            "80",
            "--disable-subject-lower-case",
        ])
        .unwrap();

        let options = cli.apply(Options::default());
        assert_eq!(options.max_header_width, 72);
        assert_eq!(options.max_line_width, 80);
        assert!(options.disable_subject_lower_case);
    }

    #[test]
    fn test_absent_flags_keep_options() {
        let cli = Cli::try_parse_from(["czmono"]).unwrap();
        let base = Options {
            max_header_width: 60,
            default_issues: Some("fix #1".to_string()),
            ..Options::default()
        };

        assert_eq!(cli.apply(base.clone()), base);
        assert_eq!(cli.dir, PathBuf::from("."));
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_dry_run_conflicts_with_message_file() {
        let result = Cli::try_parse_from(["czmono", "--dry-run", "--message-file", "MSG"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_printed_message_has_no_banner() {
        let mut out = Vec::new();
        print_message(&mut out, "fix(core): fix the thing").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "fix(core): fix the thing\n");
    }

    #[test]
    fn test_directory_flag() {
        let cli = Cli::try_parse_from(["czmono", "-C", "some/repo", "--verbose"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("some/repo"));
        assert!(cli.verbose);
    }
}
