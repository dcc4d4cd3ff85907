//! Formatting helpers for plain-text period reports.

/// Format a week count with one decimal place (e.g. `10.0` → `"10.0"`).
pub fn format_weeks(weeks: f64) -> String {
    format!("{weeks:.1}")
}

/// Format a date as `DD.MM.YYYY`.
pub fn format_dmy(year: u16, month: u8, day: u8) -> String {
    format!("{day:02}.{month:02}.{year:04}")
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_iso(year: u16, month: u8, day: u8) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}
