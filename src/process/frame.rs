// src/process/frame.rs
use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

/// One parsed CSV fragment: a header row plus data rows. Cells stay as
/// text; no typed conversion happens anywhere in the pipeline.
#[derive(Debug, Default)]
pub struct Frame {
    pub columns: Vec<String>,
    /// Each data row, one `String` per column in `columns` order.
    pub rows: Vec<Vec<String>>,
}

/// Parse comma-separated text with a header row into a `Frame`.
///
/// An empty body or a record whose field count disagrees with the header
/// is an error; the caller skips the whole fragment.
pub fn parse_frame(text: &str) -> Result<Frame> {
    let mut rdr = ReaderBuilder::new().from_reader(text.as_bytes());
    let columns: Vec<String> = rdr
        .headers()
        .context("reading CSV header row")?
        .iter()
        .map(|s| s.to_string())
        .collect();
    if columns.is_empty() || (columns.len() == 1 && columns[0].is_empty()) {
        bail!("empty CSV body");
    }

    let mut rows = Vec::with_capacity(64);
    for (idx, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("CSV parse error at record {}", idx))?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }
    Ok(Frame { columns, rows })
}

/// Concatenate fragments row-wise, preserving the given order.
///
/// The combined column set is the union of all fragment columns in
/// first-seen order; rows from fragments that lack a column get an empty
/// cell there.
pub fn concat(frames: &[Frame]) -> Frame {
    let mut columns: Vec<String> = Vec::new();
    for frame in frames {
        for col in &frame.columns {
            if !columns.contains(col) {
                columns.push(col.clone());
            }
        }
    }

    let mut rows = Vec::with_capacity(frames.iter().map(|f| f.rows.len()).sum());
    for frame in frames {
        // position of each combined column within this fragment
        let slots: Vec<Option<usize>> = columns
            .iter()
            .map(|col| frame.columns.iter().position(|c| c == col))
            .collect();
        for row in &frame.rows {
            rows.push(
                slots
                    .iter()
                    .map(|slot| slot.map(|i| row[i].clone()).unwrap_or_default())
                    .collect(),
            );
        }
    }

    Frame { columns, rows }
}

/// Names from `required` that are absent from `frame`, in `required` order.
pub fn missing_columns<'a>(frame: &Frame, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|name| !frame.columns.iter().any(|c| c == name))
        .collect()
}

/// Write `frame` as comma-separated text with a header row and no index
/// column, replacing any existing file at `path`.
pub fn write_frame(frame: &Frame, path: &Path) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(&frame.columns)
        .context("writing header row")?;
    for row in &frame.rows {
        wtr.write_record(row).context("writing data row")?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}
