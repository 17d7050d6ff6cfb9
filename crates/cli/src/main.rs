use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use metrica_core::{MissingArtifact, OutputFormat, Pipeline, PipelineConfig};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

mod echo;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extract articles from a list of URLs and score them for sentiment and readability
#[derive(Parser, Debug)]
#[command(name = "metrica")]
#[command(author = "Metrica Contributors")]
#[command(version)]
#[command(about = "Extract articles and compute text metrics", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Input CSV with URL_ID and URL columns
    #[arg(short, long, global = true, default_value = "Input.csv", value_name = "FILE")]
    input: PathBuf,

    /// Report file
    #[arg(short, long, global = true, default_value = "output.csv", value_name = "FILE")]
    output: PathBuf,

    /// Report format (csv, json)
    #[arg(short, long, global = true, default_value = "csv", value_name = "FORMAT")]
    format: OutputFormat,

    /// Directory for extracted article text
    #[arg(long, global = true, default_value = "Extracted_Text", value_name = "DIR")]
    articles_dir: PathBuf,

    /// Directory with positive-words.txt and negative-words.txt
    #[arg(long, global = true, default_value = "MasterDictionary", value_name = "DIR")]
    dictionary_dir: PathBuf,

    /// Directory with the stop-word lists
    #[arg(long, global = true, default_value = "StopWords", value_name = "DIR")]
    stopwords_dir: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, global = true, value_name = "UA")]
    user_agent: Option<String>,

    /// Fail when an article has no extracted text
    #[arg(long, global = true)]
    strict: bool,

    /// Match stop words regardless of case
    #[arg(long, global = true)]
    fold_stopwords: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Extract every article, then analyze them (default)
    Run,
    /// Fetch and save article text only
    Extract,
    /// Compute metrics from previously extracted text
    Analyze,
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Args {
    fn pipeline_config(&self) -> PipelineConfig {
        let mut builder = PipelineConfig::builder()
            .input(&self.input)
            .output(&self.output)
            .format(self.format)
            .pretty(self.pretty)
            .articles_dir(&self.articles_dir)
            .dictionary_dir(&self.dictionary_dir)
            .stopwords_dir(&self.stopwords_dir)
            .fold_stopwords(self.fold_stopwords)
            .timeout(self.timeout)
            .missing(if self.strict { MissingArtifact::Fail } else { MissingArtifact::Skip });

        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        builder.build()
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,metrica_core={},metrica={}", level, level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn extract(pipeline: &Pipeline, verbose: bool) -> anyhow::Result<()> {
    let config = pipeline.config();
    if verbose {
        print_inputs(config);
        echo::print_step(1, 1, "Extracting articles");
    }

    let started = Instant::now();
    let report = pipeline.extract().await.context("Extraction failed")?;

    echo::print_extraction_summary(&report);
    if verbose {
        echo::print_timing("Extraction", started.elapsed());
    }
    echo::print_success(&format!(
        "Articles written to {}",
        config.articles_dir.display().bright_white()
    ));

    Ok(())
}

fn analyze(pipeline: &Pipeline, verbose: bool) -> anyhow::Result<()> {
    let config = pipeline.config();
    if verbose {
        print_inputs(config);
        echo::print_step(1, 1, "Analyzing articles");
    }

    let started = Instant::now();
    let report = pipeline.analyze().context("Analysis failed")?;

    echo::print_analysis_summary(&report, &config.output);
    if verbose {
        echo::print_timing("Analysis", started.elapsed());
    }
    echo::print_success(&format!("Report written to {}", config.output.display().bright_white()));

    Ok(())
}

async fn run(pipeline: &Pipeline, verbose: bool) -> anyhow::Result<()> {
    let config = pipeline.config();
    if verbose {
        print_inputs(config);
    }

    let started = Instant::now();
    let summary = pipeline.run().await.context("Pipeline failed")?;

    echo::print_extraction_summary(&summary.extraction);
    echo::print_analysis_summary(&summary.analysis, &config.output);
    if verbose {
        echo::print_timing("Total", started.elapsed());
    }
    echo::print_success(&format!("Report written to {}", config.output.display().bright_white()));

    Ok(())
}

fn print_inputs(config: &PipelineConfig) {
    eprintln!("  {} {}", "Input:".dimmed(), config.input.display().bright_white());
    eprintln!("  {} {}", "Articles:".dimmed(), config.articles_dir.display().bright_white());
    eprintln!(
        "  {} {}",
        "Format:".dimmed(),
        format!("{:?}", config.format).bright_white()
    );
    eprintln!();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Run);

    if let Command::Completions { shell } = command {
        clap_complete::generate(shell, &mut Args::command(), "metrica", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    init_tracing(args.verbose);

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let pipeline = Pipeline::new(args.pipeline_config());
    tracing::debug!(command = ?command, config = ?pipeline.config(), "Starting");
    let result = match command {
        Command::Extract => extract(&pipeline, args.verbose).await,
        Command::Analyze => analyze(&pipeline, args.verbose),
        _ => run(&pipeline, args.verbose).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            echo::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
