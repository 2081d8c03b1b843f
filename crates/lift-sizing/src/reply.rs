//! Strict parser for a remote advisor's reply.
//!
//! # Reply contract
//!
//! A remote advisor answers with a single line of the form
//!
//! ```text
//! Tuple: (20, 20, 2)
//! ```
//!
//! i.e. a `Tuple:` marker followed by a parenthesized triple of integers —
//! capacity per car, expected peak occupants, car count.  Surrounding prose
//! before or after the marker line is tolerated (remote services are
//! chatty); everything about the triple itself is not: the marker must be
//! present, the arity must be exactly three, every field must be a plain
//! non-negative integer in range, and capacity and car count must be
//! positive.  The reply is parsed, never evaluated.

use std::io::Read;

use lift_core::FleetPlan;

use crate::{SizingError, SizingResult};

const MARKER: &str = "Tuple:";

/// Parse an advisor reply into a [`FleetPlan`].
pub fn parse_reply(text: &str) -> SizingResult<FleetPlan> {
    let after_marker = text
        .split_once(MARKER)
        .ok_or_else(|| SizingError::Parse(format!("reply has no {MARKER:?} marker")))?
        .1;

    let open = after_marker
        .find('(')
        .ok_or_else(|| SizingError::Parse("no opening parenthesis after marker".into()))?;
    let close = after_marker[open..]
        .find(')')
        .ok_or_else(|| SizingError::Parse("unterminated triple".into()))?;
    let body = &after_marker[open + 1..open + close];

    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(SizingError::Parse(format!(
            "expected 3 fields in {body:?}, got {}",
            fields.len()
        )));
    }

    let plan = FleetPlan {
        capacity:      parse_field(fields[0], "capacity")?,
        expected_peak: parse_field(fields[1], "expected peak")?,
        car_count:     parse_field(fields[2], "car count")?,
    };

    if !plan.is_valid() {
        return Err(SizingError::Parse(format!(
            "triple out of contract (capacity and car count must be positive): {plan}"
        )));
    }
    Ok(plan)
}

/// Like [`parse_reply`] but reads the reply text from any `Read` source.
pub fn read_reply<R: Read>(mut reader: R) -> SizingResult<FleetPlan> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_reply(&text)
}

fn parse_field<T: std::str::FromStr>(s: &str, what: &str) -> SizingResult<T> {
    s.parse::<T>()
        .map_err(|_| SizingError::Parse(format!("invalid {what} {s:?}: expected an integer")))
}
