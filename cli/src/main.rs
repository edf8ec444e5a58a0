mod summary;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workhours_core::repository::calendar_file::DEFAULT_OUTPUT_DIR;
use workhours_core::service::assembler::DEFAULT_LATEST_FILES;
use workhours_core::{
    normalize_flags, parse_languages, parse_latest_files, FileCalendarRepository,
    FileYearRecordRepository, GenerateCalendarsUseCase, RunConfig, SkipDays,
};

// Flags are written `-name value`; normalize_flags turns them into `--name=value` for clap.
#[derive(Parser)]
#[command(name = "workhours", version)]
#[command(about = "Generate localized work hours calendars (.ics) from yearly JSON records", long_about = None)]
struct Cli {
    /// Folder with one JSON work hours file per year
    #[arg(long = "inputFolder", value_name = "DIR")]
    input_folder: PathBuf,

    /// Weekdays to leave out, 0 (Sunday) to 6 (Saturday)
    #[arg(long = "skipDays", value_name = "DAYS", default_value = "0,6")]
    skip_days: SkipDays,

    /// Where the calendars are written; a relative path is resolved from the current working directory
    #[arg(long = "outputFolder", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_folder: PathBuf,

    /// How many of the most recent year files to include
    #[arg(long = "latestFiles", value_name = "N", default_value_t = DEFAULT_LATEST_FILES, value_parser = parse_latest_files)]
    latest_files: usize,

    /// Language codes to generate, e.g. "en,sv" (default: all)
    #[arg(long = "languages", value_name = "CODES")]
    languages: Option<String>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workhours=info,workhours_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = RunConfig::new(cli.input_folder);
    config.output_folder = cli.output_folder;
    config.skip_days = cli.skip_days;
    config.latest_files = cli.latest_files;
    if let Some(codes) = &cli.languages {
        config.languages = parse_languages(codes)?;
    }

    info!(
        input = %config.input_folder.display(),
        output = %config.output_folder.display(),
        skip_days = %config.skip_days,
        "Generating work hours calendars"
    );

    let records = FileYearRecordRepository::new(&config.input_folder)?;
    let writer = FileCalendarRepository::new(Some(config.output_folder.clone()));
    let report = GenerateCalendarsUseCase::new(&records, &writer)
        .run(&config)
        .with_context(|| format!("Could not generate calendars from {}", config.input_folder.display()))?;

    summary::show_summary(&report);
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse_from(normalize_flags(std::env::args())) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(normalize_flags(args.iter().map(|s| s.to_string())))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["workhours", "-inputFolder", "./output/work_hours/"]).unwrap();
        assert_eq!(cli.input_folder, PathBuf::from("./output/work_hours/"));
        assert_eq!(cli.skip_days, SkipDays::default());
        assert_eq!(cli.output_folder, PathBuf::from("output/calendars"));
        assert_eq!(cli.latest_files, 2);
        assert!(cli.languages.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "workhours",
            "-skipDays",
            "5,6",
            "-inputFolder",
            "in",
            "-latestFiles",
            "3",
            "-languages",
            "sv",
            "-outputFolder",
            "out",
        ])
        .unwrap();
        assert_eq!(cli.skip_days.numbers(), vec![5, 6]);
        assert_eq!(cli.latest_files, 3);
        assert_eq!(cli.languages.as_deref(), Some("sv"));
        assert_eq!(cli.output_folder, PathBuf::from("out"));
    }

    #[test]
    fn test_missing_input_folder_is_error() {
        let err = parse(&["workhours", "-skipDays", "0,6"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(parse(&["workhours", "-inputFolder", "in", "-skipDays", "8"]).is_err());
        assert!(parse(&["workhours", "-inputFolder", "in", "-latestFiles", "0"]).is_err());
        assert!(parse(&["workhours", "-inputFolder", "in", "-bogus", "1"]).is_err());
    }

    #[test]
    fn test_output_folder_help_names_working_directory() {
        use clap::CommandFactory;
        let cmd = Cli::command();
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_long() == Some("outputFolder"))
            .unwrap();
        let help = arg.get_help().unwrap().to_string();
        assert!(help.contains("current working directory"));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
