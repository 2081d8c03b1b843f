//! CSV hall-call script loader.
//!
//! # CSV format
//!
//! One row per hall call, replayed in file order:
//!
//! ```csv
//! floor,direction
//! 3,up
//! 5,down
//! 7,up
//! ```
//!
//! **`direction`** must be `up` or `down` (case-insensitive).  Parsing is
//! strict: any other value, or a floor that is not a `u8`, fails the whole
//! load with a [`FleetError::Parse`] naming the offending value.  Floors are
//! *not* range-checked here — whether a floor exists is the fleet's call at
//! dispatch time, and a script may legitimately target buildings of
//! different heights.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Direction, HallCall};

use crate::{FleetError, FleetResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CallRecord {
    floor:     u8,
    direction: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a hall-call script from a CSV file.
pub fn load_calls_csv(path: &Path) -> FleetResult<Vec<HallCall>> {
    let file = std::fs::File::open(path).map_err(FleetError::Io)?;
    load_calls_reader(file)
}

/// Like [`load_calls_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or inline scripts.
pub fn load_calls_reader<R: Read>(reader: R) -> FleetResult<Vec<HallCall>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut calls = Vec::new();

    for result in csv_reader.deserialize::<CallRecord>() {
        let row = result.map_err(|e| FleetError::Parse(e.to_string()))?;
        let direction = Direction::parse(&row.direction).ok_or_else(|| {
            FleetError::Parse(format!(
                "invalid direction {:?}: expected \"up\" or \"down\"",
                row.direction
            ))
        })?;
        calls.push(HallCall::new(row.floor, direction));
    }

    Ok(calls)
}
