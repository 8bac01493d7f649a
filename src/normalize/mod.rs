// src/normalize/mod.rs

pub mod dataset;
pub mod fill;

use std::path::{Path, PathBuf};

use anyhow::Result;

pub use dataset::{Cell, Dataset};
pub use fill::{fill_blanks, NULL_TOKEN};

/// Columns whose values must never be reinterpreted as numbers.
static DEFAULT_TEXT_COLUMNS: &[&str] = &["Manufacturer Part Number"];

/// Suffix inserted before the extension of each output file.
static DEFAULT_SUFFIX: &str = "_cleaned";

/// Per-file settings for the normalizer.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Column names decoded strictly as text. A name absent from a given
    /// file is simply inert.
    pub text_columns: Vec<String>,
    pub suffix: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            text_columns: DEFAULT_TEXT_COLUMNS.iter().map(|s| s.to_string()).collect(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// Normalize a single file: load, fill blanks, write to the derived sibling
/// path. Returns the output path.
#[tracing::instrument(level = "debug", skip(path, opts), fields(path = %path.display()))]
pub fn normalize_file(path: &Path, opts: &NormalizeOptions) -> Result<PathBuf> {
    let mut ds = Dataset::from_csv_path(path, &opts.text_columns)?;
    fill_blanks(&mut ds);

    let out = cleaned_path(path, &opts.suffix);
    ds.write_csv_path(&out)?;
    Ok(out)
}

/// Insert `suffix` before the extension: `parts.csv` → `parts_cleaned.csv`.
/// An extensionless name just gets the suffix appended.
fn cleaned_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => path.with_file_name(format!("{}{}.{}", stem, suffix, ext)),
        None => path.with_file_name(format!("{}{}", stem, suffix)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;

    #[test]
    fn cleaned_path_inserts_suffix_before_extension() {
        assert_eq!(
            cleaned_path(Path::new("data/parts.csv"), "_cleaned"),
            PathBuf::from("data/parts_cleaned.csv")
        );
        assert_eq!(
            cleaned_path(Path::new("noext"), "_cleaned"),
            PathBuf::from("noext_cleaned")
        );
    }

    #[test]
    fn fills_blanks_and_keeps_part_numbers() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("parts.csv");
        fs::write(&src, "Manufacturer Part Number,Qty\n007,\n,5\n")?;

        let out = normalize_file(&src, &NormalizeOptions::default())?;
        assert_eq!(out, dir.path().join("parts_cleaned.csv"));
        assert_eq!(
            fs::read_to_string(&out)?,
            "Manufacturer Part Number,Qty\n007,NULL\nNULL,5\n"
        );
        Ok(())
    }

    #[test]
    fn repeated_runs_are_byte_identical() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("parts.csv");
        fs::write(&src, "Manufacturer Part Number,Qty\n00042,\n0099,3.50\n")?;

        let opts = NormalizeOptions::default();
        let out = normalize_file(&src, &opts)?;
        let first = fs::read(&out)?;
        let out2 = normalize_file(&src, &opts)?;
        assert_eq!(out, out2);
        assert_eq!(first, fs::read(&out2)?);
        Ok(())
    }

    #[test]
    fn leading_zeros_survive_in_preserved_column() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("parts.csv");
        fs::write(&src, "Manufacturer Part Number,Qty\n00042,1\n")?;

        let out = normalize_file(&src, &NormalizeOptions::default())?;
        let body = fs::read_to_string(&out)?;
        assert!(body.contains("00042"));
        assert!(!body.contains("\n42,"));
        Ok(())
    }

    #[test]
    fn whitespace_only_cells_pass_through() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("pad.csv");
        fs::write(&src, "A,B\n , \n")?;

        let out = normalize_file(&src, &NormalizeOptions::default())?;
        assert_eq!(fs::read_to_string(&out)?, "A,B\n , \n");
        Ok(())
    }

    #[test]
    fn row_and_column_counts_are_preserved() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("wide.csv");
        fs::write(&src, "C,B,A\n1,,3\n,,\n4,5,6\n")?;

        let out = normalize_file(&src, &NormalizeOptions::default())?;
        let body = fs::read_to_string(&out)?;
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "C,B,A");
        assert!(lines.iter().all(|l| l.split(',').count() == 3));
        assert_eq!(lines[2], "NULL,NULL,NULL");
        Ok(())
    }
}
