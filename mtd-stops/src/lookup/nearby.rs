//! Stops near a coordinate.

use std::io::{self, Write};

use crate::mtd::{MtdClient, Stop};

use super::or_report;

/// Number of stops requested when the caller doesn't say.
pub const DEFAULT_NEARBY_COUNT: u32 = 10;

/// Find up to `count` stops near `(lat, lon)` and print them.
pub async fn nearby_stops<W: Write>(
    client: &MtdClient,
    lat: f64,
    lon: f64,
    count: u32,
    out: &mut W,
) -> io::Result<Vec<Stop>> {
    let result = client.stops_by_lat_lon(lat, lon, count).await;
    let Some(stops) = or_report(result, out, "nearby")? else {
        return Ok(Vec::new());
    };

    render_nearby(out, lat, lon, count, &stops)?;
    Ok(stops)
}

/// Print the nearby-stops table, in the order the API returned them.
pub fn render_nearby<W: Write>(
    out: &mut W,
    lat: f64,
    lon: f64,
    count: u32,
    stops: &[Stop],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Stops near ({lat:?}, {lon:?}):")?;
    writeln!(out)?;
    writeln!(out, "{:<20} {:<40} Distance", "ID", "Name")?;
    writeln!(out, "{}", "-".repeat(70))?;

    for stop in stops.iter().take(count as usize) {
        let distance = match stop.distance {
            Some(d) => format!("{d:?} mi"),
            None => "N/A".to_string(),
        };
        writeln!(out, "{:<20} {:<40} {}", stop.stop_id, stop.stop_name, distance)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(id: &str, name: &str, distance: Option<f64>) -> Stop {
        Stop {
            stop_id: id.to_string(),
            stop_name: name.to_string(),
            distance,
        }
    }

    fn rendered(count: u32, stops: &[Stop]) -> String {
        let mut out = Vec::new();
        render_nearby(&mut out, 40.1106, -88.2284, count, stops).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn header_shows_coordinates() {
        let text = rendered(10, &[]);
        assert!(text.contains("Stops near (40.1106, -88.2284):"));
        assert!(text.contains(&"-".repeat(70)));
    }

    #[test]
    fn distance_or_placeholder() {
        let stops = [
            stop("GRN4TH:1", "Green St @ 4th", Some(0.25)),
            stop("IT:1", "Illinois Terminal", None),
        ];
        let text = rendered(10, &stops);
        let rows: Vec<_> = text.lines().skip(5).collect();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("GRN4TH:1 "));
        assert!(rows[0].ends_with(" 0.25 mi"));
        assert!(rows[1].starts_with("IT:1 "));
        assert!(rows[1].ends_with(" N/A"));
    }

    #[test]
    fn whole_numbers_keep_decimal_point() {
        let mut out = Vec::new();
        let stops = [stop("IT:1", "Illinois Terminal", Some(120.0))];
        render_nearby(&mut out, 40.0, -88.0, 10, &stops).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Stops near (40.0, -88.0):"));
        assert!(text.lines().last().unwrap().ends_with(" 120.0 mi"));
    }

    #[test]
    fn rows_capped_at_count() {
        let stops: Vec<_> = (0..5)
            .map(|i| stop(&format!("S:{i}"), "Stop", Some(i as f64)))
            .collect();
        let text = rendered(3, &stops);

        assert_eq!(text.lines().filter(|l| l.starts_with("S:")).count(), 3);
    }
}
