//! Estimate export: CSV sheets, plain-text reports and JSON backups.
//!
//! CSV columns follow [`EXPORT_PROVIDERS`](crate::config::EXPORT_PROVIDERS)
//! so that sheets from different estimates line up. Files are written to a
//! temp file in the destination directory and renamed into place, so an
//! interrupted export never leaves a partial file behind.

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fmt::Write as _;
use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::config::EXPORT_PROVIDERS;
use crate::error::Result;
use crate::models::Estimate;
use crate::money::Money;

/// `estimate-<id>.<ext>`
pub fn file_name(estimate: &Estimate, ext: &str) -> String {
    format!("estimate-{}.{}", estimate.id, ext)
}

/// Render an estimate as CSV: one row per service, a column per provider,
/// and a closing `Total` row carrying the primary-provider total.
///
/// Providers a category does not price are written as `0.00`.
pub fn to_csv(estimate: &Estimate) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    let mut header = vec!["Service".to_string()];
    header.extend(EXPORT_PROVIDERS.iter().map(|p| p.as_str().to_string()));
    wtr.write_record(&header)?;

    for service in &estimate.services {
        let costs = service.costs();
        let mut row = vec![service.category().as_str().to_string()];
        for provider in EXPORT_PROVIDERS {
            row.push(costs.get(provider).unwrap_or(Money::ZERO).to_string());
        }
        wtr.write_record(&row)?;
    }

    let mut total_row = vec!["Total".to_string(), estimate.total_cost().to_string()];
    total_row.resize(EXPORT_PROVIDERS.len() + 1, String::new());
    wtr.write_record(&total_row)?;

    let bytes = wtr
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Render a printable summary: name, total, then each service's provider costs.
///
/// Every service line lists all [`EXPORT_PROVIDERS`], `$0.00` where the
/// category has no price for a provider.
pub fn to_report(estimate: &Estimate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", estimate.name);
    let _ = writeln!(out, "Total: ${}", estimate.total_cost());
    for service in &estimate.services {
        let costs = service.costs();
        let line: Vec<String> = EXPORT_PROVIDERS
            .iter()
            .map(|p| format!("{}: ${}", p, costs.get(*p).unwrap_or(Money::ZERO)))
            .collect();
        let _ = writeln!(out, "{}: {}", service.category(), line.join("  "));
    }
    out
}

/// Write the CSV export into `dir`, returning the file path.
pub fn write_csv(estimate: &Estimate, dir: &Path) -> Result<PathBuf> {
    let dest = dir.join(file_name(estimate, "csv"));
    write_atomic(&dest, to_csv(estimate)?.as_bytes())?;
    tracing::info!(estimate_id = %estimate.id, path = %dest.display(), "exported estimate CSV");
    Ok(dest)
}

/// Write the text report into `dir`, returning the file path.
pub fn write_report(estimate: &Estimate, dir: &Path) -> Result<PathBuf> {
    let dest = dir.join(file_name(estimate, "txt"));
    write_atomic(&dest, to_report(estimate).as_bytes())?;
    tracing::info!(estimate_id = %estimate.id, path = %dest.display(), "exported estimate report");
    Ok(dest)
}

/// Save estimates as a JSON array; gzip-compressed when `path` ends in `.gz`.
pub fn write_backup(estimates: &[Estimate], path: &Path) -> Result<()> {
    let json = serde_json::to_vec(estimates)?;
    let bytes = if is_gzip(path) {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&json)?;
        encoder.finish()?
    } else {
        json
    };
    write_atomic(path, &bytes)?;
    tracing::info!(count = estimates.len(), path = %path.display(), "wrote estimate backup");
    Ok(())
}

/// Load estimates written by [`write_backup`] (handles `.gz` transparently).
///
/// Totals are recomputed from each estimate's breakdowns on load.
pub fn read_backup(path: &Path) -> Result<Vec<Estimate>> {
    let file = fs::File::open(path)?;
    let mut contents = String::new();
    if is_gzip(path) {
        let mut reader = BufReader::new(GzDecoder::new(BufReader::new(file)));
        reader.read_to_string(&mut contents)?;
    } else {
        BufReader::new(file).read_to_string(&mut contents)?;
    }

    serde_json::from_str(&contents).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "estimate backup is not valid JSON");
        e.into()
    })
}

fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("gz")
}

fn write_atomic(dest: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}
