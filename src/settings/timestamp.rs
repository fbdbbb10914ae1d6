//! Custom date/time pattern rendering.
//!
//! Patterns use the `yyyyMMddHHmmss` style specifiers that build settings
//! have always stored, rendered with English month and day names:
//!
//! | Specifier | Output |
//! |---|---|
//! | `y` / `yy` / `yyy+` | year mod 100 / year mod 100 padded / year padded to width |
//! | `M` / `MM` / `MMM` / `MMMM` | month / padded / `Mar` / `March` |
//! | `d` / `dd` / `ddd` / `dddd` | day / padded / `Tue` / `Tuesday` |
//! | `H` / `HH`, `h` / `hh` | 24-hour, 12-hour |
//! | `m` / `mm`, `s` / `ss` | minute, second |
//! | `f`..`fffffff` | fraction of a second, fixed width |
//! | `F`..`FFFFFFF` | fraction with trailing zeros trimmed |
//! | `t` / `tt` | `A` / `AM` |
//! | `'text'`, `"text"`, `\c` | literal |
//!
//! `%` is ignored and every other character is copied through. When an `F`
//! run renders nothing, a `.` directly before it is dropped as well.
//!
//! A pattern of exactly one character is a standard format and expands to
//! its invariant-culture custom pattern: `d` is `MM/dd/yyyy`, `s` is the
//! sortable `yyyy-MM-ddTHH:mm:ss`, and so on (see [`standard_pattern`]).
//! Use `%d` for the bare day number.

use chrono::{Datelike, NaiveDateTime, Timelike};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Maximum fraction digits.
const MAX_FRACTION_DIGITS: usize = 7;

/// Invariant-culture expansion of a single-character standard format.
///
/// Returns None for characters that are not standard format specifiers.
pub fn standard_pattern(specifier: char) -> Option<&'static str> {
    let pattern = match specifier {
        'd' => "MM/dd/yyyy",
        'D' => "dddd, dd MMMM yyyy",
        'f' => "dddd, dd MMMM yyyy HH:mm",
        'F' => "dddd, dd MMMM yyyy HH:mm:ss",
        'g' => "MM/dd/yyyy HH:mm",
        'G' => "MM/dd/yyyy HH:mm:ss",
        'm' | 'M' => "MMMM dd",
        'o' | 'O' => "yyyy'-'MM'-'dd'T'HH':'mm':'ss'.'fffffff",
        'r' | 'R' => "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'",
        's' => "yyyy'-'MM'-'dd'T'HH':'mm':'ss",
        't' => "HH:mm",
        'T' => "HH:mm:ss",
        'u' => "yyyy'-'MM'-'dd HH':'mm':'ss'Z'",
        'y' | 'Y' => "yyyy MMMM",
        _ => return None,
    };
    Some(pattern)
}

/// Renders `when` using a date/time pattern. Never fails.
pub fn format_timestamp(pattern: &str, when: &NaiveDateTime) -> String {
    let mut single = pattern.chars();
    let expanded = match (single.next(), single.next()) {
        (Some(c), None) => standard_pattern(c),
        _ => None,
    };

    format_custom(expanded.unwrap_or(pattern), when)
}

fn format_custom(pattern: &str, when: &NaiveDateTime) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        match c {
            '\'' | '"' => {
                // Quoted literal runs to the matching quote or end of pattern
                i += 1;
                while i < chars.len() && chars[i] != c {
                    out.push(chars[i]);
                    i += 1;
                }
                i += 1;
                continue;
            }
            '\\' => {
                if let Some(next) = chars.get(i + 1) {
                    out.push(*next);
                }
                i += 2;
                continue;
            }
            '%' => {
                i += 1;
                continue;
            }
            _ => {}
        }

        let run = chars[i..].iter().take_while(|&&x| x == c).count();
        i += run;

        match c {
            'y' => {
                let year = when.year();
                match run {
                    1 => out.push_str(&(year % 100).to_string()),
                    2 => out.push_str(&format!("{:02}", year % 100)),
                    n => out.push_str(&format!("{:0width$}", year, width = n)),
                }
            }
            'M' => {
                let month = when.month();
                let name = MONTH_NAMES[month as usize - 1];
                match run {
                    1 => out.push_str(&month.to_string()),
                    2 => out.push_str(&format!("{:02}", month)),
                    3 => out.push_str(&name[..3]),
                    _ => out.push_str(name),
                }
            }
            'd' => {
                let day = when.day();
                let name = DAY_NAMES[when.weekday().num_days_from_monday() as usize];
                match run {
                    1 => out.push_str(&day.to_string()),
                    2 => out.push_str(&format!("{:02}", day)),
                    3 => out.push_str(&name[..3]),
                    _ => out.push_str(name),
                }
            }
            'H' => push_number(&mut out, when.hour(), run),
            'h' => {
                let hour = match when.hour() % 12 {
                    0 => 12,
                    h => h,
                };
                push_number(&mut out, hour, run);
            }
            'm' => push_number(&mut out, when.minute(), run),
            's' => push_number(&mut out, when.second(), run),
            'f' | 'F' => {
                let digits = fraction_digits(when, run.min(MAX_FRACTION_DIGITS));
                if c == 'F' {
                    let trimmed = digits.trim_end_matches('0');
                    if trimmed.is_empty() && out.ends_with('.') {
                        out.pop();
                    }
                    out.push_str(trimmed);
                } else {
                    out.push_str(&digits);
                }
            }
            't' => {
                let designator = if when.hour() < 12 { "AM" } else { "PM" };
                if run == 1 {
                    out.push_str(&designator[..1]);
                } else {
                    out.push_str(designator);
                }
            }
            other => {
                for _ in 0..run {
                    out.push(other);
                }
            }
        }
    }

    out
}

/// One-digit specifier prints the plain value; two or more pads to two digits.
fn push_number(out: &mut String, value: u32, run: usize) {
    if run == 1 {
        out.push_str(&value.to_string());
    } else {
        out.push_str(&format!("{:02}", value));
    }
}

/// First `n` digits of the sub-second part.
fn fraction_digits(when: &NaiveDateTime, n: usize) -> String {
    // Leap-second nanos can exceed 1e9; clamp to the last representable digit
    let nanos = when.nanosecond().min(999_999_999);
    let nine = format!("{:09}", nanos);
    nine[..n].to_string()
}
