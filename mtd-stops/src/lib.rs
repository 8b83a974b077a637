//! CUMTD stop finder.
//!
//! A small command-line client for the Champaign-Urbana Mass Transit
//! District developer API: look up stop IDs by name or location, and
//! show upcoming departures for a stop.

pub mod lookup;
pub mod mtd;
