//! Stop search by name.
//!
//! The API offers no search endpoint, so this is a two-stage pipeline:
//! fetch the whole roster, then filter it here. Swapping in a server-side
//! search only needs to replace the fetch stage.

use std::io::{self, Write};

use crate::mtd::{MtdClient, Stop};

use super::or_report;

/// Maximum number of matches printed.
pub const SEARCH_DISPLAY_LIMIT: usize = 25;

/// Search stops by name and print the matches.
///
/// Returns every match, even those beyond the display limit.
pub async fn search_stops<W: Write>(
    client: &MtdClient,
    query: &str,
    out: &mut W,
) -> io::Result<Vec<Stop>> {
    let Some(roster) = or_report(client.all_stops().await, out, "search")? else {
        return Ok(Vec::new());
    };

    let matches = filter_by_name(roster, query);
    render_matches(out, query, &matches)?;
    Ok(matches)
}

/// Keep stops whose name contains `query`, ignoring case. Order is preserved.
pub fn filter_by_name(stops: Vec<Stop>, query: &str) -> Vec<Stop> {
    let needle = query.to_lowercase();
    stops
        .into_iter()
        .filter(|s| s.stop_name.to_lowercase().contains(&needle))
        .collect()
}

/// Print the match table, truncated to [`SEARCH_DISPLAY_LIMIT`] rows.
pub fn render_matches<W: Write>(out: &mut W, query: &str, matches: &[Stop]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Stops matching '{}' ({} found):", query, matches.len())?;
    writeln!(out)?;
    writeln!(out, "{:<20} Name", "ID")?;
    writeln!(out, "{}", "-".repeat(60))?;

    for stop in matches.iter().take(SEARCH_DISPLAY_LIMIT) {
        writeln!(out, "{:<20} {}", stop.stop_id, stop.stop_name)?;
    }

    if matches.len() > SEARCH_DISPLAY_LIMIT {
        writeln!(out)?;
        writeln!(
            out,
            "... and {} more matches",
            matches.len() - SEARCH_DISPLAY_LIMIT
        )?;
    }

    Ok(())
}
