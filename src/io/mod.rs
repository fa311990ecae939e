pub mod gapstats;
pub mod report;
