//! `verdante run` — simulate a run and issue its receipt.

use std::time::Duration;

use tracing::info;
use verdante_core::{CompareMode, ReportingRegime, Scope};
use verdante_runner::{Receipt, RunRequest, Runner, RunnerConfig};

use crate::report;

pub struct RunOptions {
    pub job: Option<String>,
    pub compare: CompareMode,
    pub regime: Option<ReportingRegime>,
    pub tick_ms: u64,
    pub duration_ms: u64,
    pub receipt: Option<String>,
    pub format: String,
}

pub async fn run(file: &str, project_id: Option<&str>, opts: RunOptions) -> anyhow::Result<()> {
    let doc = super::load_document(file)?;
    let project = doc.project(project_id)?;

    let request = RunRequest {
        project,
        defaults: &doc.defaults,
        scope: Scope::from_job_id(opts.job.as_deref()),
        mode: opts.compare,
        regime: opts.regime.unwrap_or(project.reporting_regime),
    };
    let runner = Runner::new(RunnerConfig {
        duration: Duration::from_millis(opts.duration_ms),
        tick: Duration::from_millis(opts.tick_ms),
    });

    let text = opts.format != "json";
    let outcome = runner
        .run(&request, |p| {
            if text {
                eprintln!("[{:>3}%] {}", p.percent, p.message);
            }
        })
        .await?;
    let receipt = Receipt::issue(project, &outcome)?;

    if let Some(path) = &opts.receipt {
        std::fs::write(path, receipt.to_json_string()?)?;
        info!(path = %path, receipt = %receipt.payload.receipt_id, "wrote receipt");
    }

    if text {
        println!("{}", report::format_receipt(&outcome, &receipt));
    } else {
        println!("{}", receipt.to_json_string()?);
    }

    Ok(())
}
