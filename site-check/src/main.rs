//! Build-time check of a documentation site's navigation.
//!
//! Loads the site configuration, scans the docs directory, and fails when a
//! sidebar or navbar entry points somewhere it should not.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use navtree::{FsStore, LoadError, SiteConfig, ValidationReport, validate};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Debug, Parser)]
#[command(name = "site-check", version, about = "Validate sidebars and navbar of a docs site")]
struct Cli {
    /// Site configuration file (JSON).
    config: PathBuf,

    /// Directory holding the authored documents.
    #[arg(long, default_value = "docs")]
    docs: PathBuf,

    /// Log loading progress.
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<ValidationReport, LoadError> {
    let config = SiteConfig::from_path(&cli.config)?;
    let store = FsStore::scan(&cli.docs)?;
    info!(
        "checking {} sidebar(s) against {} document(s) in {}",
        config.sidebars.len(),
        store.len(),
        store.root().display()
    );
    Ok(validate(&config, &store))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Error: {}", e);
    }

    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };

    // Warnings were already logged while validating.
    for diagnostic in report.errors() {
        error!("{}", diagnostic.error);
    }

    let errors = report.errors().count();
    let warnings = report.warnings().count();
    info!("{} error(s), {} warning(s)", errors, warnings);

    if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn cli(dir: &TempDir) -> Cli {
        Cli {
            config: dir.path().join("site.json"),
            docs: dir.path().join("docs"),
            verbose: false,
        }
    }

    #[test]
    fn test_run_reports_dangling_reference() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/intro.md"), "").unwrap();
        fs::write(
            dir.path().join("site.json"),
            r#"{ "sidebars": { "main": ["intro", "missing"] } }"#,
        )
        .unwrap();

        let report = run(&cli(&dir)).unwrap();
        assert_eq!(report.errors().count(), 1);
    }

    #[test]
    fn test_run_fails_to_load_missing_config() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        assert!(matches!(run(&cli(&dir)), Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_cli_parses_arguments() {
        let cli = Cli::parse_from(["site-check", "site.json", "--docs", "content", "-v"]);
        assert_eq!(cli.config, PathBuf::from("site.json"));
        assert_eq!(cli.docs, PathBuf::from("content"));
        assert!(cli.verbose);

        let cli = Cli::parse_from(["site-check", "site.json"]);
        assert_eq!(cli.docs, PathBuf::from("docs"));
    }
}
