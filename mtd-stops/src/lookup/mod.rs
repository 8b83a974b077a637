//! The three user-facing lookups.
//!
//! Each lookup makes one API call, prints a fixed-width table to the given
//! writer, and returns what it found. API failures never propagate: they
//! are printed as a one-line diagnostic and the lookup returns an empty
//! result. Only failures writing the output are returned as errors.

mod departures;
mod nearby;
mod search;

use std::io::{self, Write};

use tracing::warn;

use crate::mtd::MtdError;

pub use departures::{DEPARTURE_DISPLAY_LIMIT, HEADSIGN_WIDTH, departures, render_departures};
pub use nearby::{DEFAULT_NEARBY_COUNT, nearby_stops, render_nearby};
pub use search::{SEARCH_DISPLAY_LIMIT, filter_by_name, render_matches, search_stops};

/// Print a diagnostic for a failed API call.
fn report_failure<W: Write>(out: &mut W, lookup: &str, err: &MtdError) -> io::Result<()> {
    warn!(lookup, error = %err, "lookup failed, returning no results");
    writeln!(out, "Error: {err}")
}

/// Resolve an API result into items, printing a diagnostic on failure.
fn or_report<T, W: Write>(
    result: Result<Vec<T>, MtdError>,
    out: &mut W,
    lookup: &str,
) -> io::Result<Option<Vec<T>>> {
    match result {
        Ok(items) => Ok(Some(items)),
        Err(err) => {
            report_failure(out, lookup, &err)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_is_reported_with_status() {
        let mut out = Vec::new();
        let result: Result<Vec<()>, _> = Err(MtdError::Status { status: 502 });

        let items = or_report(result, &mut out, "test").unwrap();

        assert!(items.is_none());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: API returned status 502\n"
        );
    }

    #[test]
    fn success_prints_nothing() {
        let mut out: Vec<u8> = Vec::new();
        let items = or_report(Ok(vec![1, 2]), &mut out, "test").unwrap();

        assert_eq!(items, Some(vec![1, 2]));
        assert!(out.is_empty());
    }
}
