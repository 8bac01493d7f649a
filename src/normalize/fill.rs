// src/normalize/fill.rs

use super::dataset::{Cell, Dataset};

/// Replacement token for blank cells.
pub const NULL_TOKEN: &str = "NULL";

/// Replace every blank cell (missing value or exact empty string) with the
/// literal `NULL`. Everything else, whitespace-only strings included, passes
/// through untouched.
pub fn fill_blanks(dataset: &mut Dataset) {
    for row in &mut dataset.rows {
        for cell in row.iter_mut() {
            if cell.is_blank() {
                *cell = Cell::Text(NULL_TOKEN.to_string());
            }
        }
    }
}
