// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tabular summaries.

use std::path::Path;

use ccd_io::Query;
use comfy_table::{presets::UTF8_FULL, Table};

/// Counts for one loaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub file: String,
    pub queries: usize,
    pub colliding: usize,
}

impl FileSummary {
    pub fn new<T>(file: &Path, queries: &[Query<T>]) -> Self {
        Self {
            file: file.display().to_string(),
            queries: queries.len(),
            colliding: queries.iter().filter(|q| q.ground_truth()).count(),
        }
    }

    pub const fn non_colliding(&self) -> usize {
        self.queries - self.colliding
    }
}

pub fn summary_table(rows: &[FileSummary]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["file", "queries", "colliding", "non-colliding"]);
    for row in rows {
        table.add_row(vec![
            row.file.clone(),
            row.queries.to_string(),
            row.colliding.to_string(),
            row.non_colliding().to_string(),
        ]);
    }
    if rows.len() > 1 {
        let queries: usize = rows.iter().map(|r| r.queries).sum();
        let colliding: usize = rows.iter().map(|r| r.colliding).sum();
        table.add_row(vec![
            "total".to_owned(),
            queries.to_string(),
            colliding.to_string(),
            (queries - colliding).to_string(),
        ]);
    }
    table
}
