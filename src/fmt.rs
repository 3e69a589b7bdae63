//! Shared formatting utilities for sizes and percentage deltas

/// Decimal units above bytes, each 1000x the previous
const UNITS: [&str; 6] = ["kB", "MB", "GB", "TB", "PB", "EB"];

/// Arrow appended to a delta when the size grew
pub const ARROW_UP: &str = "↑";

/// Arrow appended to a delta when the size shrank
pub const ARROW_DOWN: &str = "↓";

/// Format bytes as a human-readable decimal size string
///
/// Values below 1000 are printed as plain bytes. Larger values use SI units
/// with one fractional digit, rounded half-up, and a trailing `.0` dropped.
///
/// # Examples
///
/// ```
/// use pkg_size_report::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1000), "1 kB");
/// assert_eq!(format_bytes(1500), "1.5 kB");
/// assert_eq!(format_bytes(2_345_678), "2.3 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{} B", bytes);
    }

    let mut scale: u64 = 1000;
    let mut unit = 0;
    while unit + 1 < UNITS.len() && bytes >= scale * 1000 {
        scale *= 1000;
        unit += 1;
    }

    let scale = u128::from(scale);
    let tenths = (u128::from(bytes) * 10 + scale / 2) / scale;
    let whole = tenths / 10;
    let fraction = tenths % 10;

    if fraction == 0 {
        format!("{} {}", whole, UNITS[unit])
    } else {
        format!("{}.{} {}", whole, fraction, UNITS[unit])
    }
}

/// Direction glyph for a size transition
///
/// Empty when either side is missing or both sides are equal.
pub fn change_symbol(from: Option<u64>, to: Option<u64>) -> &'static str {
    match (from, to) {
        (Some(from), Some(to)) if to > from => ARROW_UP,
        (Some(from), Some(to)) if to < from => ARROW_DOWN,
        _ => "",
    }
}

/// Fraction digits that decide a half-up rounding at the finest tier (4 places)
const DECIDING_DIGITS: u32 = 5;

/// Format a fractional change as a percentage with at most 3 significant digits
///
/// The magnitude is rounded half-up to 4 decimal places below 0.001, to 3
/// below 0.01 and to 2 otherwise before rendering, so tiny changes stay
/// visible. Rounding works on the shortest decimal form of `fraction`, so
/// `0.145` rounds to `15%`.
///
/// # Examples
///
/// ```
/// use pkg_size_report::fmt::percent;
///
/// assert_eq!(percent(0.5), "50%");
/// assert_eq!(percent(-0.1), "10%");
/// assert_eq!(percent(0.0056), "0.6%");
/// assert_eq!(percent(0.00012), "0.01%");
/// ```
pub fn percent(fraction: f64) -> String {
    let magnitude = fraction.abs();
    if magnitude.is_infinite() {
        return "∞%".to_string();
    }
    if magnitude.is_nan() {
        return "0%".to_string();
    }

    // Display never uses exponent notation for f64
    let text = magnitude.to_string();
    let (integer, fraction_digits) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let scale = 10u128.pow(DECIDING_DIGITS);
    let integer = integer.parse::<u64>().map_or(u128::from(u64::MAX), u128::from);
    let fraction_value = fraction_digits
        .chars()
        .chain(std::iter::repeat('0'))
        .take(DECIDING_DIGITS as usize)
        .fold(0u128, |acc, digit| {
            acc * 10 + u128::from(digit.to_digit(10).unwrap_or(0))
        });

    ratio_percent(integer * scale + fraction_value, scale)
}

/// Percentage change from `from` to `to` followed by a direction arrow
///
/// Returns an empty string when nothing changed. The percentage is computed
/// from the exact ratio of the two sizes.
///
/// # Examples
///
/// ```
/// use pkg_size_report::fmt::delta;
///
/// assert_eq!(delta(1000, 1500), "50%↑");
/// assert_eq!(delta(10_000, 9_000), "10%↓");
/// assert_eq!(delta(200, 229), "15%↑");
/// assert_eq!(delta(42, 42), "");
/// ```
pub fn delta(from: u64, to: u64) -> String {
    if from == to {
        return String::new();
    }

    let rendered = if from == 0 {
        "∞%".to_string()
    } else {
        ratio_percent(u128::from(from.abs_diff(to)), u128::from(from))
    };

    format!("{}{}", rendered, change_symbol(Some(from), Some(to)))
}

/// Render `numerator / denominator` as a percentage
///
/// The ratio is rounded half-up to the tier's decimal places, then to 3
/// significant digits (half-up), all in integer arithmetic.
fn ratio_percent(numerator: u128, denominator: u128) -> String {
    let places: u32 = if numerator * 1000 < denominator {
        4
    } else if numerator * 100 < denominator {
        3
    } else {
        2
    };

    // Percent value is `rounded / 10^(places - 2)`
    let rounded = round_half_up(numerator * 10u128.pow(places), denominator);
    let scale = places - 2;

    let digits = rounded.checked_ilog10().map_or(1, |log| log + 1);
    let significant = if digits > 3 {
        let unit = 10u128.pow(digits - 3);
        round_half_up(rounded, unit) * unit
    } else {
        rounded
    };

    format!("{}%", format_decimal(significant, scale))
}

fn round_half_up(numerator: u128, denominator: u128) -> u128 {
    (2 * numerator + denominator) / (2 * denominator)
}

/// Render `value / 10^scale` with en-US grouping and no trailing fraction zeros
fn format_decimal(value: u128, scale: u32) -> String {
    let unit = 10u128.pow(scale);
    let integer = group_thousands(&(value / unit).to_string());
    let fraction = format!("{:0width$}", value % unit, width = scale as usize);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        integer
    } else {
        format!("{}.{}", integer, fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
