//! Conversions from numbers to the text shown inside table cells.

use core::cmp::Ordering;

/// The image assets shipped with the page shell.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Icon {
    Cross,
    Check,
    /// Placeholder for values that don't apply yet
    Bar,
    Star,
}

impl Icon {
    /// Cross for a positive count, check for zero and bar for negative (blank) values.
    pub fn for_count(count: i64) -> Self {
        match count.cmp(&0) {
            Ordering::Greater => Self::Cross,
            Ordering::Equal => Self::Check,
            Ordering::Less => Self::Bar,
        }
    }
}

impl core::fmt::Display for Icon {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::Cross => write!(f, r#"<img src="img_cross.png" height="15px">"#),
            Self::Check => write!(f, r#"<img src="img_check.png" height="21px">"#),
            Self::Bar => write!(f, r#"<img src="img_bar.png" height="21px">"#),
            Self::Star => write!(f, r#"<img src="img_star.png" height="21px">"#),
        }
    }
}

/// Roman numeral for `n`. Zero and negative numbers have no Roman form and are returned as
/// decimal.
pub fn format_roman(mut n: i64) -> String {
    if n <= 0 {
        return n.to_string();
    }

    const WEIGHTS: [(&str, i64); 13] = [
        ("M", 1000),
        ("CM", 900),
        ("D", 500),
        ("CD", 400),
        ("C", 100),
        ("XC", 90),
        ("L", 50),
        ("XL", 40),
        ("X", 10),
        ("IX", 9),
        ("V", 5),
        ("IV", 4),
        ("I", 1),
    ];

    let mut roman = String::new();
    for (letters, value) in WEIGHTS {
        while n >= value {
            roman.push_str(letters);
            n -= value;
        }
    }
    roman
}

/// Left pads `n` with zeroes up to `digits`. Longer numbers are left untouched.
pub fn zero_fill(n: u64, digits: usize) -> String {
    format!("{n:0digits$}")
}

/// Formats a duration in milliseconds as `H:MM:SS`.
///
/// Hours and minutes are left out while they are zero, and a unit is only padded once a more
/// significant one has been written, so 61 seconds become `1:01`. With `show_ms` the hundredths
/// of a second are appended as subscript.
pub fn format_duration(ms: f64, show_ms: bool) -> String {
    if ms.is_nan() {
        return "0".to_string();
    }
    if ms < 0.0 {
        return format!("-{}", format_duration(-ms, show_ms));
    }

    // Saturates for absurdly large values
    let total_ms = ms as u64;
    let total_secs = total_ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = total_secs % 60;

    let mut output = String::new();
    let mut pad = false;

    if hours > 0 {
        output += &format!("{hours}:");
        pad = true;
    }

    if hours > 0 || minutes > 0 {
        output += &zero_fill(minutes, if pad { 2 } else { 0 });
        output.push(':');
        pad = true;
    }

    output += &zero_fill(seconds, if pad { 2 } else { 0 });

    if show_ms {
        // 10ms precision
        output += &format!("<sub>&nbsp;{}</sub>", zero_fill((total_ms % 1000) / 10, 2));
    }

    output
}

/// Formats a time difference. Negative values mean "not applicable" and become a lone `-`.
pub fn format_time_diff(diff: f64, show_ms: bool) -> String {
    if diff < 0.0 {
        return "-".to_string();
    }

    let sign = if diff > 0.0 { "+" } else { "" };
    format!("{sign}{}", format_duration(diff.abs(), show_ms))
}

/// `+n` for positive numbers, `-n` for negative ones and a bare `0`.
pub fn format_signed(n: i64) -> String {
    match n.cmp(&0) {
        Ordering::Equal => "0".to_string(),
        Ordering::Greater => format!("+{n}"),
        Ordering::Less => n.to_string(),
    }
}

/// Formats a hit count for display.
///
/// The magnitude is written in decimal or as Roman numeral. The sign is only written when
/// `force_signed` is set, zero never gets one.
pub fn format_count(n: i64, force_signed: bool, use_roman: bool) -> String {
    let prefix = if force_signed {
        format_signed(n)
            .chars()
            .next()
            .filter(|c| *c == '+' || *c == '-')
    } else {
        None
    };

    let magnitude = n.saturating_abs();
    let number = if use_roman {
        format_roman(magnitude)
    } else {
        magnitude.to_string()
    };

    match prefix {
        Some(sign) => format!("{sign}{number}"),
        None => number,
    }
}

/// A span the live update script can find by `id`.
pub fn span(id: &str, class: &str, content: &str) -> String {
    format!(r#"<span id="{id}" class="{class}">{content}</span>"#)
}

/// Number of set flags.
pub fn count_true(flags: &[bool]) -> usize {
    flags.iter().filter(|flag| **flag).count()
}
