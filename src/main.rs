//! CLI entry point for generate-structure

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use structure_generator::{GenerateReport, WriteOutcome, generate, preview};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "generate-structure")]
#[command(about = "Append a project's directory tree, with Python docstrings, to its docs")]
#[command(version)]
struct Args {
    /// Project root to document
    project_root: PathBuf,

    /// Print the section to stdout instead of writing the output file
    #[arg(long = "stdout")]
    stdout: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            // Misuse only prints the usage; the exit status stays 0.
            _ => {
                let _ = e.print();
                return;
            }
        },
    };

    setup_logging(args.verbose);

    let result = if args.stdout {
        preview(&args.project_root).map(|text| print!("{}", text))
    } else {
        generate(&args.project_root).map(|report| report_success(&report))
    };

    if let Err(e) = result {
        eprintln!("generate-structure: {}", e);
        process::exit(1);
    }
}

fn report_success(report: &GenerateReport) {
    let path = report.output_path.display();
    match report.outcome {
        WriteOutcome::Created => println!("Created {} with the project architecture", path),
        WriteOutcome::Appended => println!("Appended the project architecture to {}", path),
    }
    println!(
        "{} directories, {} files",
        report.dir_count, report.file_count
    );
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG directives take precedence over -v
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(env_filter)
        .try_init()
        .unwrap_or_else(|e| {
            eprintln!("generate-structure: failed to set up logging: {}", e);
        });
}
