//! Run receipts — an audit-style summary of a simulated run.
//!
//! The receipt carries the project's worst-case totals next to the
//! simulated actuals, plus a SHA-256 digest of its own payload so a
//! stored receipt can be checked for edits.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use verdante_core::{Estimates, Project, ReportingRegime, round2};

use crate::error::RunResult;
use crate::rng::hash32;
use crate::simulate::RunOutcome;

pub const RECEIPT_TYPE: &str = "VerdanteDemoReceipt";
pub const RECEIPT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualTotals {
    pub cost_usd: f64,
    pub co2_kg: f64,
    pub peak_power_kw: f64,
    pub time_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub job_id: String,
    pub job_name: String,
    pub provider: String,
    pub region: String,
    pub window: String,
    pub cost_usd: f64,
    pub co2_kg: f64,
    pub time_hours: f64,
    pub peak_power_kw: f64,
}

/// Receipt body covered by the integrity digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub version: u32,
    pub receipt_id: String,
    #[serde(rename = "issuedAtISO")]
    pub issued_at: String,
    pub project: ProjectRef,
    pub regime: ReportingRegime,
    pub scope: String,
    pub max_totals: Estimates,
    pub actual_totals: ActualTotals,
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(flatten)]
    pub payload: ReceiptPayload,
    /// Hex SHA-256 of the serialized payload.
    pub integrity: String,
}

fn digest(payload: &ReceiptPayload) -> RunResult<String> {
    let bytes = serde_json::to_vec(payload)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

impl Receipt {
    /// Issue a receipt for a completed run of `project`.
    pub fn issue(project: &Project, outcome: &RunOutcome) -> RunResult<Self> {
        let record = &outcome.record;

        let mut totals = ActualTotals::default();
        for job in &record.jobs {
            totals.cost_usd += job.actual_cost_usd;
            totals.co2_kg += job.actual_co2_kg;
            totals.time_hours += job.actual_time_hours;
            totals.peak_power_kw = totals.peak_power_kw.max(job.actual_power_kw);
        }
        let actual_totals = ActualTotals {
            cost_usd: round2(totals.cost_usd),
            co2_kg: round2(totals.co2_kg),
            peak_power_kw: round2(totals.peak_power_kw),
            time_hours: round2(totals.time_hours),
        };

        let line_items = record
            .jobs
            .iter()
            .map(|j| LineItem {
                job_id: j.job_id.clone(),
                job_name: project
                    .job(&j.job_id)
                    .map(|job| job.name.clone())
                    .unwrap_or_else(|| j.job_id.clone()),
                provider: j.provider.clone(),
                region: j.region.clone(),
                window: j.time_window_label.clone(),
                cost_usd: j.actual_cost_usd,
                co2_kg: j.actual_co2_kg,
                time_hours: j.actual_time_hours,
                peak_power_kw: j.actual_power_kw,
            })
            .collect();

        let payload = ReceiptPayload {
            kind: RECEIPT_TYPE.to_string(),
            version: RECEIPT_VERSION,
            receipt_id: format!("rcpt_{:x}", hash32(&format!("{}{}", record.id, project.id))),
            issued_at: record.issued_at.clone(),
            project: ProjectRef {
                id: project.id.clone(),
                name: project.name.clone(),
            },
            regime: record.regime,
            scope: outcome.scope.as_str().to_string(),
            max_totals: outcome.estimates.totals.clone(),
            actual_totals,
            line_items,
        };
        let integrity = digest(&payload)?;
        Ok(Receipt { payload, integrity })
    }

    /// Recompute the digest and compare it with the stored one.
    pub fn verify(&self) -> RunResult<bool> {
        Ok(digest(&self.payload)? == self.integrity)
    }

    pub fn to_json_string(&self) -> RunResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
