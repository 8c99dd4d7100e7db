//! Formatting helpers for presenting benchmark values.

/// Placeholder for values that cannot be displayed.
pub const INVALID: &str = "—";

/// `32.0` renders as `"32 GB"`, `15.5` as `"15.5 GB"`.
pub fn format_ram(gb: f64) -> String {
    if gb.is_finite() {
        format!("{gb} GB")
    } else {
        INVALID.to_string()
    }
}

pub fn format_performance(tokens_per_second: f64) -> String {
    if tokens_per_second.is_finite() {
        format!("{tokens_per_second:.1}")
    } else {
        INVALID.to_string()
    }
}

/// Two-tier speed marker shown before the throughput.
pub fn speed_marker(tokens_per_second: f64) -> &'static str {
    if tokens_per_second >= 100.0 {
        "⚡⚡"
    } else if tokens_per_second >= 50.0 {
        "⚡"
    } else {
        ""
    }
}

/// Largest duration, in seconds, accepted as a time value.
pub const MAX_TIME_SECONDS: f64 = u32::MAX as f64;

/// Parses a stored duration in seconds. Negative, non-finite and implausibly large values
/// are rejected, and `-0` comes back as `0`.
pub fn parse_time_seconds(raw: &str) -> Option<f64> {
    let seconds = raw.trim().parse::<f64>().ok()?;
    (0.0..=MAX_TIME_SECONDS)
        .contains(&seconds)
        .then_some(seconds + 0.0)
}

/// Rounds the stored seconds-per-1k-tokens text, e.g. `"9.51"` becomes `"10 s"`.
pub fn format_time_seconds(raw: &str) -> String {
    match parse_time_seconds(raw) {
        Some(seconds) => format!("{} s", seconds.round()),
        None => INVALID.to_string(),
    }
}

/// Colour band of a throughput cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceBand {
    /// Below 10 tokens/s.
    A,
    /// 10 to 20 tokens/s.
    B,
    /// 20 to 30 tokens/s.
    C,
    /// 30 tokens/s and above.
    D,
}

impl PerformanceBand {
    pub fn of(tokens_per_second: f64) -> Self {
        if tokens_per_second < 10.0 {
            Self::A
        } else if tokens_per_second < 20.0 {
            Self::B
        } else if tokens_per_second < 30.0 {
            Self::C
        } else {
            Self::D
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::A => "band band-a",
            Self::B => "band band-b",
            Self::C => "band band-c",
            Self::D => "band band-d",
        }
    }
}
