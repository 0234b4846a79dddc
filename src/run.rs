// src/run.rs
use anyhow::Result;
use reqwest::Client;
use std::path::Path;
use tracing::{info, warn};

use crate::fetch::{self, urls::Group};
use crate::process::{self, Frame};

/// Columns the combined table is expected to carry. Checked after
/// concatenation for warning purposes only; absences never block output.
pub static REQUIRED_COLUMNS: &[&str] = &[
    "date",
    "fake_merged",
    "fake_merged_initiation",
    "fake_merged_rt",
    "fake_grinberg_initiation",
    "fake_grinberg_rt",
    "fake_grinberg_rb_initiation",
    "fake_grinberg_rb_rt",
    "fake_newsguard_initiation",
    "fake_newsguard_rt",
    "not_fake_shopping",
    "not_fake_shopping_initiation",
    "not_fake_shopping_rt",
    "not_fake_sports",
    "not_fake_sports_initiation",
    "not_fake_sports_rt",
    "n",
    "stat",
    "nusers",
    "group",
    "post_treatment",
    "treatment_group",
];

/// Fetch every part of every group in order, concatenate whatever parsed,
/// and write the combined table to `out_path`.
///
/// Parts are fetched one at a time; a part that fails to download or parse
/// contributes nothing and the run moves on. A run in which no part at all
/// was usable writes no file and still returns `Ok`.
pub async fn run(client: &Client, base: &str, groups: &[Group], out_path: &Path) -> Result<()> {
    let mut frames: Vec<Frame> = Vec::new();

    for group in groups {
        for url in fetch::urls::part_urls(base, group)? {
            let Some(body) = fetch::parts::fetch_part(client, &url).await else {
                continue;
            };
            match process::parse_frame(&body) {
                Ok(frame) => {
                    info!(%url, rows = frame.rows.len(), "loaded part");
                    frames.push(frame);
                }
                Err(err) => warn!(%url, error = %err, "skipping unparseable part"),
            }
        }
    }

    if frames.is_empty() {
        warn!("no data files were successfully loaded");
        return Ok(());
    }

    let combined = process::concat(&frames);

    let missing = process::missing_columns(&combined, REQUIRED_COLUMNS);
    if !missing.is_empty() {
        warn!(?missing, "combined table is missing expected columns");
    }

    process::write_frame(&combined, out_path)?;
    info!(rows = combined.rows.len(), path = %out_path.display(), "wrote combined table");
    Ok(())
}
