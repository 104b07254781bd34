use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use super::filter::FilteredView;
use super::model::{Metric, Record};
use super::trend::{Trend, TrendPoint};

/// Normalized view of one company, as written to JSON.
#[derive(Debug, Serialize)]
pub struct CompanySnapshot<'a> {
    pub name: &'a str,
    pub industry: &'a str,
    pub current_price: Metric,
    pub pe: Metric,
    pub roe: Metric,
    /// Returns in period order (1Y..10Y); `null` value when unparseable.
    pub returns: Vec<TrendPoint>,
}

impl<'a> CompanySnapshot<'a> {
    pub fn new(view: &FilteredView<'a>, record: &'a Record) -> Self {
        let returns = Trend::new(&view.table.schema, record).points().collect();
        Self {
            name: &record.name,
            industry: &record.industry,
            current_price: record.current_price,
            pe: record.pe,
            roe: record.roe,
            returns,
        }
    }
}

/// Write the filtered companies to `path`. Dispatch by extension.
///
/// * `.csv`  – one header row followed by the raw cells of each company
/// * `.json` – array of [`CompanySnapshot`]
///
/// Returns the number of companies written.
pub fn export_view(path: &Path, view: &FilteredView<'_>) -> Result<usize> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => export_csv(path, view),
        "json" => export_json(path, view),
        other => bail!("Unsupported export extension: .{other}"),
    }?;
    log::info!("exported {} companies to {}", view.len(), path.display());
    Ok(view.len())
}

fn export_csv(path: &Path, view: &FilteredView<'_>) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer
        .write_record(view.table.headers())
        .context("writing CSV header")?;
    for record in view.records() {
        writer
            .write_record(&record.cells)
            .with_context(|| format!("writing row for {}", record.name))?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn export_json(path: &Path, view: &FilteredView<'_>) -> Result<()> {
    let snapshots: Vec<_> = view
        .records()
        .map(|r| CompanySnapshot::new(view, r))
        .collect();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_json(file, &snapshots)
}

fn write_json<W: Write>(out: W, snapshots: &[CompanySnapshot<'_>]) -> Result<()> {
    let mut writer = BufWriter::new(out);
    serde_json::to_writer_pretty(&mut writer, snapshots).context("writing JSON")?;
    writer.flush().context("flushing JSON")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::data::filter::{filtered_indices, FilterCriteria};
    use crate::data::loader::load_table;
    use crate::data::loader::tests::{write_csv, SAMPLE};

    #[test]
    fn csv_export_round_trips_through_loader_layout() {
        let src = write_csv(SAMPLE);
        let table = load_table(src.path()).unwrap();
        let idx = filtered_indices(&table, &FilterCriteria::default());
        let view = FilteredView::new(&table, &idx);

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("filtered.CSV");
        assert_eq!(export_view(&out, &view).unwrap(), 1);

        let text = std::fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("Name,Industry,Current Price,PE"));
        assert_eq!(lines.next().unwrap(), "A,Tech,100,12,15,5,10,n/a,20,25");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn json_export_uses_null_for_gaps() {
        let src = write_csv(SAMPLE);
        let table = load_table(src.path()).unwrap();
        let idx = filtered_indices(&table, &FilterCriteria::default());
        let view = FilteredView::new(&table, &idx);

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("filtered.json");
        export_view(&out, &view).unwrap();

        let parsed: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(parsed[0]["name"], json!("A"));
        assert_eq!(parsed[0]["pe"], json!(12.0));
        assert_eq!(parsed[0]["returns"][2], json!({"label": "5Y", "value": null}));
        assert_eq!(parsed[0]["returns"][4]["value"], json!(25.0));
    }

    #[test]
    fn json_returns_keep_period_order() {
        let src = write_csv(SAMPLE);
        let table = load_table(src.path()).unwrap();
        let idx = filtered_indices(&table, &FilterCriteria::default());
        let view = FilteredView::new(&table, &idx);
        let snapshot = CompanySnapshot::new(&view, &table.records[idx[0]]);

        let json = serde_json::to_value(&snapshot).unwrap();
        let labels: Vec<_> = json["returns"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["label"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(labels, vec!["1Y", "3Y", "5Y", "7Y", "10Y"]);
    }

    /// Accepts nothing, so buffered output only fails once flushed.
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "no space left"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn json_flush_failure_is_reported() {
        let src = write_csv(SAMPLE);
        let table = load_table(src.path()).unwrap();
        let idx = filtered_indices(&table, &FilterCriteria::default());
        let view = FilteredView::new(&table, &idx);
        let snapshots: Vec<_> = view.records().map(|r| CompanySnapshot::new(&view, r)).collect();

        let err = write_json(FullDisk, &snapshots).unwrap_err();
        assert!(format!("{err:#}").contains("flushing JSON"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let src = write_csv(SAMPLE);
        let table = load_table(src.path()).unwrap();
        let view = FilteredView::new(&table, &[]);
        let dir = tempfile::tempdir().unwrap();
        let err = export_view(&dir.path().join("out.xlsx"), &view).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }
}
