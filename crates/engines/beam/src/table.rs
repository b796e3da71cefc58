//! Reading and writing positional value tables.
//!
//! Two on-disk formats are understood:
//! - text: 810 whitespace-separated numbers in `[type][row][col]` order
//! - JSON: `{"valueMatrix": [[[...9], ...9], ...10]}`
//!
//! Files ending in `.json` are read as JSON, anything else as text.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shogi_core::{BOARD_SIZE, PieceType, ShogiError, ValueTable};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to access value table {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("entry {index} is not a number: '{token}'")]
    Parse { index: usize, token: String },

    #[error("value matrix must be 10x9x9, found {found}")]
    Dimensions { found: String },

    #[error("invalid JSON value table: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Shape(#[from] ShogiError),
}

pub type Result<T> = std::result::Result<T, TableError>;

const PIECE_TYPES: usize = PieceType::COUNT;
const SIDE: usize = BOARD_SIZE as usize;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableFile {
    value_matrix: Vec<Vec<Vec<f32>>>,
}

/// Parse the whitespace-separated text format.
pub fn parse_text(text: &str) -> Result<ValueTable> {
    let values = text
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f32>().map_err(|_| TableError::Parse {
                index,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<f32>>>()?;
    Ok(ValueTable::from_values(values)?)
}

/// Parse the JSON format.
pub fn parse_json(text: &str) -> Result<ValueTable> {
    let file: TableFile = serde_json::from_str(text)?;
    let m = file.value_matrix;

    let well_formed = m.len() == PIECE_TYPES
        && m.iter()
            .all(|rows| rows.len() == SIDE && rows.iter().all(|cols| cols.len() == SIDE));
    if !well_formed {
        let rows = m.first().map_or(0, Vec::len);
        let cols = m.first().and_then(|r| r.first()).map_or(0, Vec::len);
        return Err(TableError::Dimensions {
            found: format!("{}x{rows}x{cols}", m.len()),
        });
    }
    Ok(ValueTable::from_values(m.into_iter().flatten().flatten().collect())?)
}

/// Load a table from disk, choosing the format by extension.
pub fn load(path: &Path) -> Result<ValueTable> {
    let text = fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = if is_json(path) {
        parse_json(&text)?
    } else {
        parse_text(&text)?
    };
    info!(path = %path.display(), "loaded value table");
    Ok(table)
}

/// Text format, one piece type per line.
pub fn to_text(table: &ValueTable) -> String {
    table
        .as_slice()
        .chunks(SIDE * SIDE)
        .map(|chunk| {
            chunk
                .iter()
                .map(f32::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn to_json(table: &ValueTable) -> Result<String> {
    let value_matrix = table
        .as_slice()
        .chunks(SIDE * SIDE)
        .map(|plane| plane.chunks(SIDE).map(<[f32]>::to_vec).collect())
        .collect();
    Ok(serde_json::to_string(&TableFile { value_matrix })?)
}

/// Write a table to disk, choosing the format by extension.
pub fn save(table: &ValueTable, path: &Path) -> Result<()> {
    let text = if is_json(path) {
        to_json(table)?
    } else {
        to_text(table)
    };
    fs::write(path, text).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
