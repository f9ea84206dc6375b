//! Extension Builder CLI

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use extbuilder::models::{Report, Severity};
use extbuilder::project::defaults::default_project;
use extbuilder::report::{generate_report, ExportFormat};
use extbuilder::{highlight, loader};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "extbuilder")]
#[command(about = "Author and analyze browser extension projects", long_about = None)]
#[command(version)]
struct Cli {
    /// Log rule-set progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a project directory or snapshot file
    Analyze {
        /// Project directory or .json snapshot
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with status 1 when the report contains errors
        #[arg(long)]
        strict: bool,
    },

    /// Write the starter project to a directory
    Init {
        /// Target directory
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print a JSON file as colorized HTML spans
    Highlight {
        /// JSON file to classify
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
    Html,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "extbuilder=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze { input, format, output, strict } => {
            let report = match extbuilder::analyze_path(&input) {
                Ok(report) => report,
                Err(e) => {
                    eprintln!("{}", "❌ Analysis failed!".red().bold());
                    eprintln!("{}", format!("Error: {:#}", e).red());
                    std::process::exit(1);
                }
            };

            if let Err(e) = emit_report(&report, format, output.as_deref()) {
                eprintln!("{}", "❌ Failed to write report!".red().bold());
                eprintln!("{}", format!("Error: {:#}", e).red());
                std::process::exit(1);
            }

            if strict && report.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Init { output } => {
            let result = default_project()
                .map_err(anyhow::Error::from)
                .and_then(|project| loader::write_to_directory(&project, &output));
            match result {
                Ok(()) => {
                    println!("{}", "✅ Project created!".green().bold());
                    println!("  - Output: {}", output.display());
                }
                Err(e) => {
                    eprintln!("{}", "❌ Failed to create project!".red().bold());
                    eprintln!("{}", format!("Error: {:#}", e).red());
                    std::process::exit(1);
                }
            }
        }

        Commands::Highlight { input } => match std::fs::read_to_string(&input) {
            Ok(text) => println!("{}", highlight::highlight_json(&text)),
            Err(e) => {
                eprintln!("{}", format!("Error: failed to read {}: {}", input.display(), e).red());
                std::process::exit(1);
            }
        },
    }
}

fn emit_report(report: &Report, format: OutputFormat, output: Option<&Path>) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => generate_report(report, ExportFormat::Json)?,
        OutputFormat::Markdown => generate_report(report, ExportFormat::Markdown)?,
        OutputFormat::Html => generate_report(report, ExportFormat::Html)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("  - Report: {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "📊 Analysis Results".bold().blue()));
    out.push_str(&format!("{}\n\n", "=".repeat(50).blue()));

    for (category, findings) in report.sections() {
        if findings.is_empty() {
            continue;
        }
        out.push_str(&format!("{}\n", category.heading().bold()));
        for finding in findings {
            let label = match finding.severity {
                Severity::Good => "✅ GOOD".green(),
                Severity::Warning => "⚠️  WARNING".yellow(),
                Severity::Error => "🛑 ERROR".red(),
            };
            out.push_str(&format!("{} {}\n", label, finding.title));
            out.push_str(&format!("  {}\n", finding.description.dimmed()));
        }
        out.push('\n');
    }

    for failure in &report.failures {
        out.push_str(&format!("{}\n", format!("❌ {}", failure).red()));
    }

    out.push_str(&format!(
        "{} passed, {} warnings, {} errors\n",
        report.count(Severity::Good),
        report.count(Severity::Warning),
        report.count(Severity::Error)
    ));
    out
}
