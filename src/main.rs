use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use doc_similarity::{
    compare_paths, compare_texts,
    report::{default_file_name, ComparisonReport, ReportFormat},
    DocumentSet, ExtractionPolicy, SimilarityConfig, SimilarityError,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "doc-similarity", about = "Pairwise document similarity on six lexical metrics")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Json, global = true)]
    format: ReportFormat,

    /// Write the report here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Pair worker threads (default: logical CPUs)
    #[arg(short, long, global = true)]
    workers: Option<usize>,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Compare unreadable documents as empty text instead of aborting
    #[arg(long, default_value_t = false, global = true)]
    degrade_on_error: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compare files (PDF or UTF-8 text)
    Files {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Compare texts given on the command line
    Texts {
        #[arg(required = true)]
        texts: Vec<String>,
        /// Label for each text, in order (default: Doc_1, Doc_2, ...)
        #[arg(short, long)]
        label: Vec<String>,
    },
}

fn main() -> ExitCode {
    // ログは stderr、stdout はレポート専用
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("doc_similarity=info")))
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "comparison failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<SimilarityConfig, SimilarityError> {
    let mut config = match &args.config {
        Some(path) => SimilarityConfig::from_json_file(path)?,
        None => SimilarityConfig::default(),
    };
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }
    if args.degrade_on_error {
        config = config.with_extraction_policy(ExtractionPolicy::Degrade);
    }
    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> Result<(), SimilarityError> {
    let config = load_config(&args)?;
    let report = match &args.command {
        Command::Files { paths } => {
            let (documents, table) = compare_paths(paths.as_slice(), &config)?;
            if !documents.degraded().is_empty() {
                warn!(documents = ?documents.degraded(), "some documents were compared as empty text");
            }
            ComparisonReport::new(documents.labels(), table)
        }
        Command::Texts { texts, label } => {
            let labels = (!label.is_empty()).then_some(label.as_slice());
            let table = compare_texts(texts.as_slice(), labels, &config)?;
            let file_names = match labels {
                Some(labels) => labels.to_vec(),
                None => DocumentSet::from_texts(texts.as_slice()).labels(),
            };
            ComparisonReport::new(file_names, table)
        }
    };

    let output = match (&args.output, args.format.is_binary()) {
        (Some(path), _) => Some(path.clone()),
        // CBOR は端末に流さない
        (None, true) => Some(PathBuf::from(default_file_name(args.format))),
        (None, false) => None,
    };
    match output {
        Some(path) => {
            report.write(args.format, io::BufWriter::new(fs::File::create(&path)?))?;
            info!(path = %path.display(), format = args.format.extension(), "report written");
        }
        None => report.write(args.format, io::stdout().lock())?,
    }
    Ok(())
}
