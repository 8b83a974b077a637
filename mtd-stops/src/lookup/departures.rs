//! Upcoming departures from a stop.

use std::io::{self, Write};

use crate::mtd::{Departure, MtdClient, PREVIEW_MINUTES};

use super::or_report;

/// Maximum number of departures printed.
pub const DEPARTURE_DISPLAY_LIMIT: usize = 15;

/// Headsigns longer than this are cut to fit the column.
pub const HEADSIGN_WIDTH: usize = 24;

/// Fetch departures for `stop_id` and print them.
///
/// Returns every departure, even those beyond the display limit.
pub async fn departures<W: Write>(
    client: &MtdClient,
    stop_id: &str,
    out: &mut W,
) -> io::Result<Vec<Departure>> {
    let result = client.departures_by_stop(stop_id).await;
    let Some(departures) = or_report(result, out, "departures")? else {
        return Ok(Vec::new());
    };

    render_departures(out, stop_id, &departures)?;
    Ok(departures)
}

/// Print the departures table, truncated to [`DEPARTURE_DISPLAY_LIMIT`] rows.
pub fn render_departures<W: Write>(
    out: &mut W,
    stop_id: &str,
    departures: &[Departure],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Departures from {stop_id} (next {PREVIEW_MINUTES} min):")?;
    writeln!(out)?;
    writeln!(out, "{:<8} {:<25} {:<10} Color", "Route", "Headsign", "Minutes")?;
    writeln!(out, "{}", "-".repeat(60))?;

    for dep in departures.iter().take(DEPARTURE_DISPLAY_LIMIT) {
        let headsign: String = dep.headsign.chars().take(HEADSIGN_WIDTH).collect();
        let mins = dep
            .expected_mins
            .map_or_else(|| "?".to_string(), |m| m.to_string());
        writeln!(
            out,
            "{:<8} {:<25} {:<10} #{}",
            dep.route_short_name, headsign, mins, dep.route_color
        )?;
    }

    if departures.len() > DEPARTURE_DISPLAY_LIMIT {
        writeln!(out)?;
        writeln!(
            out,
            "... and {} more departures",
            departures.len() - DEPARTURE_DISPLAY_LIMIT
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn departure(route: &str, headsign: &str, mins: Option<i64>) -> Departure {
        Departure {
            route_short_name: route.to_string(),
            route_color: "5a1d5a".to_string(),
            headsign: headsign.to_string(),
            expected_mins: mins,
        }
    }

    fn rendered(departures: &[Departure]) -> String {
        let mut out = Vec::new();
        render_departures(&mut out, "IT:1", departures).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn rows(text: &str) -> Vec<&str> {
        text.lines().skip(5).filter(|l| !l.is_empty()).collect()
    }

    #[test]
    fn row_layout() {
        let text = rendered(&[departure("22", "22S Illini", Some(4))]);

        assert!(text.contains("Departures from IT:1 (next 60 min):"));
        assert_eq!(
            rows(&text),
            [format!("{:<8} {:<25} {:<10} #5a1d5a", "22", "22S Illini", "4")]
        );
    }

    #[test]
    fn missing_minutes_shows_question_mark() {
        let text = rendered(&[departure("5", "5E Green Express", None)]);
        let row = rows(&text)[0];

        assert!(row.starts_with("5        5E Green Express          ?          #"));
    }

    #[test]
    fn long_headsign_is_truncated() {
        let text = rendered(&[departure(
            "220N",
            "220N Illini Limited to Parkland College",
            Some(12),
        )]);
        let row = rows(&text)[0];

        assert!(row.contains("220N Illini Limited to P "));
        assert!(!row.contains("Pa"));
    }

    #[test]
    fn suffix_only_when_truncated() {
        let fifteen: Vec<_> = (0..15).map(|i| departure("1", "Yellow", Some(i))).collect();
        let text = rendered(&fifteen);
        assert_eq!(rows(&text).len(), 15);
        assert!(!text.contains("more departures"));

        let twenty: Vec<_> = (0..20).map(|i| departure("1", "Yellow", Some(i))).collect();
        let text = rendered(&twenty);
        assert_eq!(
            text.lines().filter(|l| l.starts_with("1 ")).count(),
            DEPARTURE_DISPLAY_LIMIT
        );
        assert!(text.ends_with("... and 5 more departures\n"));
    }
}
