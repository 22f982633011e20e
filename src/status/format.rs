// Per-field value formatters. Each one either produces a display string or
// asks the caller to show the raw value unchanged.

use crate::models::FieldValue;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Result of one formatter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatted {
    Value(String),
    /// The value could not be interpreted; display it as-is.
    UseRawFallback,
}

pub type Formatter = fn(&FieldValue) -> Formatted;

/// Raw value, unchanged.
pub fn passthrough(value: &FieldValue) -> Formatted {
    Formatted::Value(value.to_string())
}

/// "5" -> "5%". No numeric reinterpretation.
pub fn percent(value: &FieldValue) -> Formatted {
    Formatted::Value(format!("{}%", value))
}

/// "800" -> "800 MHz". No numeric reinterpretation.
pub fn megahertz(value: &FieldValue) -> Formatted {
    Formatted::Value(format!("{} MHz", value))
}

/// Byte count -> megabytes with two decimals, e.g. "2097152" -> "2.00 MB".
pub fn megabytes(value: &FieldValue) -> Formatted {
    match value.as_integer() {
        Some(bytes) => Formatted::Value(format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)),
        None => Formatted::UseRawFallback,
    }
}

/// Components of a device uptime string, kept as the device wrote them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uptime<'a> {
    pub days: Option<&'a str>,
    pub hours: &'a str,
    pub minutes: &'a str,
    pub seconds: &'a str,
}

/// Parse "<days>d<HH>:<MM>:<SS>" or "<HH>:<MM>:<SS>". Every component must be
/// a non-empty run of ASCII digits.
pub fn parse_uptime(raw: &str) -> Option<Uptime<'_>> {
    let (days, clock) = if raw.contains('d') {
        let mut parts = raw.split('d');
        let days = parts.next()?;
        let clock = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        (Some(days), clock)
    } else {
        (None, raw)
    };

    let mut parts = clock.split(':');
    let (hours, minutes, seconds) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !days.is_none_or(all_digits) || ![hours, minutes, seconds].into_iter().all(all_digits) {
        return None;
    }

    Some(Uptime {
        days,
        hours,
        minutes,
        seconds,
    })
}

/// "2d03:04:05" -> "2天 03小时 04分钟 05秒"; the day token is omitted when
/// the device reports no days.
pub fn uptime(value: &FieldValue) -> Formatted {
    let raw = value.to_string();
    let Some(up) = parse_uptime(&raw) else {
        return Formatted::UseRawFallback;
    };
    let clock = format!("{}小时 {}分钟 {}秒", up.hours, up.minutes, up.seconds);
    Formatted::Value(match up.days {
        Some(days) => format!("{}天 {}", days, clock),
        None => clock,
    })
}
