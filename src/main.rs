mod config;
mod error;
mod logging;
mod metadata;
mod model;
mod pipeline;
mod report;
mod session;
mod sink;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use crate::config::{AppConfig, LogConfig};
use crate::error::AppError;
use crate::metadata::{EnvMetadata, MetadataSource, ProvidedMetadata};
use crate::model::dimensions::TestKind;
use crate::pipeline::ScoringProfile;
use crate::pipeline::stage1_parse::RawSubmission;
use crate::report::text::{TextDocumentRenderer, render_last_result};
use crate::session::{Collaborators, Session, Submission};
use crate::sink::{LogFormat, LogSink, open_sink};

#[derive(Debug, Parser)]
#[command(
    name = "tpatbi-score",
    version,
    about = "Convert TPA/TBI sub-test scores into composite scores, IELTS estimates and CEFR categories"
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct CommonArgs {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for rendered result documents
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Append-only result log
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[arg(long, global = true)]
    session_id: Option<Uuid>,

    #[arg(long, global = true)]
    user_agent: Option<String>,

    #[arg(long, global = true)]
    ip: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Aptitude test: verbal, numerical and figural raw scores (0-100)
    Tpa {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        verbal: String,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        numerical: String,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        figural: String,
    },
    /// English test: listening, structure and reading raw scores
    Tbi {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        listening: String,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        structure: String,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        reading: String,
    },
    /// Process `KIND<TAB>name<TAB>a<TAB>b<TAB>c` lines in one session
    Batch {
        #[arg(long)]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct RunConfig {
    organization: String,
    out_dir: PathBuf,
    log: Option<LogConfig>,
}

fn main() {
    logging::init_logging();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = resolve_config(&cli.common)?;
    let renderer = TextDocumentRenderer::new(config.organization.clone());
    let mut sink = match &config.log {
        Some(log) => open_sink(Some(log.path.clone()), log.format),
        None => open_sink(None, LogFormat::Tsv),
    };
    let metadata = metadata_source(&cli.common);
    let profile = ScoringProfile::default_v1();
    let mut session = match cli.common.session_id {
        Some(id) => Session::with_id(id, profile),
        None => Session::new(profile),
    };
    tracing::debug!("session {}", session.id());

    let raw = match cli.command {
        Command::Tpa {
            name,
            verbal,
            numerical,
            figural,
        } => RawSubmission::new(
            TestKind::Tpa,
            name,
            [verbal.as_str(), numerical.as_str(), figural.as_str()],
        ),
        Command::Tbi {
            name,
            listening,
            structure,
            reading,
        } => RawSubmission::new(
            TestKind::Tbi,
            name,
            [listening.as_str(), structure.as_str(), reading.as_str()],
        ),
        Command::Batch { input } => {
            return run_batch(
                &input,
                &config,
                &mut session,
                &renderer,
                sink.as_mut(),
                metadata.as_ref(),
            );
        }
    };

    let collaborators = Collaborators {
        renderer: &renderer,
        sink: sink.as_mut(),
        metadata: metadata.as_ref(),
    };
    let submission = session.submit(&raw, collaborators)?;
    write_document(&config.out_dir, submission, None)?;
    print_submission(submission);

    Ok(())
}

fn resolve_config(args: &CommonArgs) -> Result<RunConfig, AppError> {
    let file = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let log = match (&args.log, file.log) {
        (Some(path), file_log) => Some(LogConfig {
            path: path.clone(),
            format: args
                .log_format
                .or(file_log.map(|l| l.format))
                .unwrap_or(LogFormat::Tsv),
        }),
        (None, Some(mut file_log)) => {
            if let Some(format) = args.log_format {
                file_log.format = format;
            }
            Some(file_log)
        }
        (None, None) => None,
    };

    Ok(RunConfig {
        organization: file.organization,
        out_dir: args.out.clone().unwrap_or(file.out_dir),
        log,
    })
}

fn metadata_source(args: &CommonArgs) -> Box<dyn MetadataSource> {
    if args.user_agent.is_some() || args.ip.is_some() {
        Box::new(ProvidedMetadata {
            user_agent: args.user_agent.clone(),
            ip: args.ip.clone(),
        })
    } else {
        Box::new(EnvMetadata::process())
    }
}

fn document_path(out_dir: &Path, kind: TestKind, index: Option<usize>) -> PathBuf {
    let stem = format!("hasil_perhitungan_{}", kind.code().to_ascii_lowercase());
    match index {
        Some(i) => out_dir.join(format!("{stem}_{i}.txt")),
        None => out_dir.join(format!("{stem}.txt")),
    }
}

fn write_document(
    out_dir: &Path,
    submission: &Submission,
    index: Option<usize>,
) -> Result<(), AppError> {
    let Some(document) = &submission.document else {
        return Ok(());
    };
    let path = document_path(out_dir, submission.record.test_kind, index);
    let output_err = |source| AppError::Output {
        path: path.clone(),
        source,
    };
    std::fs::create_dir_all(out_dir).map_err(output_err)?;
    std::fs::write(&path, document).map_err(output_err)?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

fn print_submission(submission: &Submission) {
    print!("{}", render_last_result(&submission.record));
    if submission.logged {
        println!("Hasil konversi tersimpan.");
    }
    for warning in &submission.warnings {
        println!("Peringatan: {}", warning);
    }
}

fn parse_batch_line(line_no: usize, line: &str) -> Result<RawSubmission, AppError> {
    let batch_err = |message: String| AppError::Batch {
        line: line_no,
        message,
    };
    let fields = line.split('\t').collect::<Vec<_>>();
    if fields.len() != 5 {
        return Err(batch_err(format!(
            "expected 5 tab-separated fields, found {}",
            fields.len()
        )));
    }
    let kind = fields[0]
        .parse::<TestKind>()
        .map_err(|e| batch_err(e.to_string()))?;
    Ok(RawSubmission::new(
        kind,
        fields[1].trim(),
        [fields[2], fields[3], fields[4]],
    ))
}

fn run_batch(
    input: &Path,
    config: &RunConfig,
    session: &mut Session,
    renderer: &TextDocumentRenderer,
    sink: &mut dyn LogSink,
    metadata: &dyn MetadataSource,
) -> Result<(), AppError> {
    let text = std::fs::read_to_string(input).map_err(|source| AppError::Input {
        path: input.to_path_buf(),
        source,
    })?;

    let mut accepted = 0usize;
    let mut rejected = 0usize;
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let raw = match parse_batch_line(line_no, line) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!("{}", err);
                rejected += 1;
                continue;
            }
        };
        let collaborators = Collaborators {
            renderer,
            sink: &mut *sink,
            metadata,
        };
        match session.submit(&raw, collaborators) {
            Ok(submission) => {
                write_document(&config.out_dir, submission, Some(line_no))?;
                accepted += 1;
            }
            Err(err) => {
                tracing::error!("line {}: {}", line_no, err);
                rejected += 1;
            }
        }
    }

    tracing::info!("batch done: {} accepted, {} rejected", accepted, rejected);
    if let Some(last) = session.last() {
        print_submission(last);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
