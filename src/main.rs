use std::path::{Path, PathBuf};

use clap::Parser;

use rt_lint::cli::{Cli, ColorChoice};
use rt_lint::config::{self, Config};
use rt_lint::engine::{LintEngine, RunReport};
use rt_lint::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, SummaryFormatter, TextFormatter,
};
use rt_lint::rules::RuleRegistry;
use rt_lint::scanner::{DirectoryScanner, FileScanner, SkipFilter};
use rt_lint::suppress::FileSuppressions;
use rt_lint::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

/// Default suppression table file name, looked up in the project root.
const SUPPRESS_FILE_NAME: &str = ".rt-lint-suppress";

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> rt_lint::Result<i32> {
    // 1. Load configuration
    let config = config::load(cli.config.as_deref(), &cli.root, cli.no_config)?;

    // 2. Build the rule registry and validate the family filter before any
    //    file is touched
    let registry = RuleRegistry::from_config(&config.rules)?;
    let suppressions = load_suppressions(cli.suppress_file.as_deref(), &cli.root)?;
    let engine = LintEngine::new(&registry, &suppressions).with_family_filter(cli.rule.clone())?;

    // 3. Gather files; an empty set means the roots or arguments are wrong,
    //    which is a configuration error, not a clean run
    let files = gather_files(cli, &config)?;
    if files.is_empty() {
        return Err(rt_lint::RtLintError::Config(
            "No source files found under the configured roots".to_string(),
        ));
    }

    // 4. Run checks (parallel per file)
    let report = engine.run(&files, &cli.root);

    // 5. Report
    if cli.quiet {
        println!("{} violation(s)", report.stats.total_violations);
    } else {
        let output = format_output(cli, &report)?;
        print!("{output}");
    }

    if report.has_violations() {
        Ok(EXIT_VIOLATIONS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_suppressions(explicit: Option<&Path>, root: &Path) -> rt_lint::Result<FileSuppressions> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(rt_lint::RtLintError::Config(format!(
                "Suppression file not found: {}",
                path.display()
            )));
        }
        return FileSuppressions::load(path);
    }

    let default_path = root.join(SUPPRESS_FILE_NAME);
    if default_path.exists() {
        return FileSuppressions::load(&default_path);
    }

    Ok(FileSuppressions::empty())
}

fn gather_files(cli: &Cli, config: &Config) -> rt_lint::Result<Vec<PathBuf>> {
    if !cli.files.is_empty() {
        return Ok(cli.files.clone());
    }

    let filter = SkipFilter::from_config(&config.scan)?;
    let scanner = DirectoryScanner::new(filter);

    let mut all_files = Vec::new();
    for root in &config.scan.roots {
        let dir = cli.root.join(root);
        if !dir.is_dir() {
            continue;
        }
        all_files.extend(scanner.scan(&dir)?);
    }
    Ok(all_files)
}

fn format_output(cli: &Cli, report: &RunReport) -> rt_lint::Result<String> {
    if cli.summary {
        return SummaryFormatter.format(report);
    }

    match cli.format {
        OutputFormat::Text => {
            TextFormatter::new(color_choice_to_mode(cli.color)).format(report)
        }
        OutputFormat::Json => JsonFormatter.format(report),
    }
}
