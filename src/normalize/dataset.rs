// src/normalize/dataset.rs

use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;

/// One cell of a loaded table.
///
/// `Number` is what an unpreserved field becomes when it parses as a finite
/// `f64`; rendering it back through `Display` is what strips leading zeros
/// (`"007"` → `7` → `"7"`). Text-preserved columns never take this path.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Missing,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Decode a raw field. `force_text` pins the value verbatim.
    pub fn decode(raw: &str, force_text: bool) -> Cell {
        if raw.is_empty() {
            return Cell::Missing;
        }
        if force_text {
            return Cell::Text(raw.to_string());
        }
        // f64 parsing rejects surrounding whitespace, so " 5" stays text.
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Cell::Number(n),
            _ => Cell::Text(raw.to_string()),
        }
    }

    /// Serialized form of the cell. `Missing` is the empty field.
    pub fn render(&self) -> String {
        match self {
            Cell::Missing => String::new(),
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
        }
    }

    /// True for the two forms the fill pass replaces: a missing value or the
    /// exact empty string. Whitespace-only text is not blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Missing => true,
            Cell::Text(s) => s.is_empty(),
            Cell::Number(_) => false,
        }
    }
}

/// An in-memory table: header names shared by all rows, rows positional.
/// The strict reader guarantees every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Load `path`, decoding columns named in `text_columns` strictly as
    /// text. Ragged rows and column-less files are errors.
    pub fn from_csv_path(path: &Path, text_columns: &[String]) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .with_context(|| format!("opening {}", path.display()))?;

        let headers: Vec<String> = rdr
            .headers()
            .with_context(|| format!("reading header of {}", path.display()))?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.is_empty() {
            bail!("no columns to parse from {}", path.display());
        }

        // Per-position text forcing; duplicate header names all match.
        let forced: Vec<bool> = headers
            .iter()
            .map(|h| text_columns.iter().any(|c| c == h))
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result
                .with_context(|| format!("CSV parse error in {} at record {}", path.display(), idx))?;
            let row: Vec<Cell> = record
                .iter()
                .zip(&forced)
                .map(|(raw, &force_text)| Cell::decode(raw, force_text))
                .collect();
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Write the table to `path`: header first, rows in order, minimal
    /// quoting, `\n` terminator. Output depends only on the table contents,
    /// so repeated writes are byte-identical.
    pub fn write_csv_path(&self, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("creating {}", path.display()))?;

        wtr.write_record(&self.headers)
            .with_context(|| format!("writing header to {}", path.display()))?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(Cell::render))
                .with_context(|| format!("writing row to {}", path.display()))?;
        }
        wtr.flush()
            .with_context(|| format!("flushing {}", path.display()))?;
        Ok(())
    }
}
