//! CLI entry point for adesval.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup and
//! exit codes. All business logic lives in the `adesval-app` crate.

use adesval_app::{
    ExplainOutput, ValidateInput, format_catalog, format_summary, is_policy_rejection,
    run_explain, run_validate, serialize_report, summary_exit_code,
};
use adesval_policy::Overrides;
use adesval_types::ValidationReport;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const EXIT_RUNTIME_ERROR: i32 = 1;
const EXIT_POLICY_REJECTED: i32 = 4;

#[derive(Parser, Debug)]
#[command(
    name = "adesval",
    version,
    about = "Chain-of-checks validation for AdES signatures"
)]
struct Cli {
    /// Log filter (e.g. `debug`, `adesval_domain=trace`). Defaults to `RUST_LOG`, then `warn`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate every signature in an evidence file and write the JSON report.
    Validate {
        /// Evidence (diagnostic data) JSON.
        #[arg(long)]
        evidence: Utf8PathBuf,

        /// Constraint policy TOML. Without it the default profile applies.
        #[arg(long)]
        policy: Option<Utf8PathBuf>,

        /// Override profile (strict|lenient|basic).
        #[arg(long)]
        profile: Option<String>,

        /// RFC 3339 validation time; defaults to the evidence's own, then now.
        #[arg(long, value_parser = parse_time)]
        validation_time: Option<OffsetDateTime>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/adesval/report.json")]
        report_out: Utf8PathBuf,
    },

    /// Explain a check id or message tag.
    Explain {
        /// The check id (e.g. "cv.signature_intact") or tag (e.g. "cv.signature_intact.ans").
        identifier: String,
    },

    /// List every check grouped by building block.
    Checks,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match cli.cmd {
        Commands::Validate {
            evidence,
            policy,
            profile,
            validation_time,
            report_out,
        } => cmd_validate(&evidence, policy.as_deref(), profile, validation_time, &report_out),
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::Checks => {
            print!("{}", format_catalog());
            Ok(())
        }
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).map_err(|_| ()),
        None => EnvFilter::try_from_default_env().map_err(|_| ()),
    }
    .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn parse_time(value: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|e| format!("expected RFC 3339 time: {e}"))
}

fn cmd_validate(
    evidence: &Utf8Path,
    policy: Option<&Utf8Path>,
    profile: Option<String>,
    validation_time: Option<OffsetDateTime>,
    report_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        tracing::debug!(%evidence, policy = ?policy, "reading inputs");
        let evidence_json = std::fs::read_to_string(evidence)
            .with_context(|| format!("read evidence: {}", evidence))?;
        let policy_text = match policy {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("read policy: {}", path))?,
            None => String::new(),
        };

        let output = run_validate(ValidateInput {
            evidence_json: &evidence_json,
            policy_text: &policy_text,
            overrides: Overrides { profile },
            validation_time,
        })?;

        write_report_file(report_out, &output.report).context("write report json")?;
        print!("{}", format_summary(&output.report));

        Ok(summary_exit_code(&output.report.summary))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) if is_policy_rejection(&err) => {
            eprintln!("adesval: policy rejected: {err:#}");
            std::process::exit(EXIT_POLICY_REJECTED);
        }
        Err(err) => {
            eprintln!("adesval error: {err:#}");
            std::process::exit(EXIT_RUNTIME_ERROR);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &ValidationReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", adesval_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
        } => {
            eprint!(
                "{}",
                adesval_app::format_not_found(&identifier, &available_check_ids)
            );
            std::process::exit(EXIT_RUNTIME_ERROR);
        }
    }
}
