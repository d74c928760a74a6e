/// Size formatting utilities — human-readable byte counts.
///
/// Byte counts are exact integers all the way through. Rounding is done in
/// integer arithmetic on the exact quotient, half to even, so the output
/// never depends on floating point.

const KB: u128 = 1024;
const MB: u128 = KB * 1024;
const GB: u128 = MB * 1024;

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Uses binary units (KB = 1024) but switches unit at 1000 of the smaller
/// one, so a value never shows four integer digits below GB:
///
/// - `byte`/`bytes` below 1 000, shown as is.
/// - `KB` below 1 000 KB, no decimals.
/// - `MB` below 1 000 MB, one decimal.
/// - `GB` from there on, two decimals.
pub fn format_readable(bytes: u128) -> String {
    if bytes < 1_000 {
        let unit = if bytes > 1 { "bytes" } else { "byte" };
        format!("{bytes} {unit}")
    } else if bytes < 1_000 * KB {
        format!("{} KB", fixed_point(bytes, KB, 0))
    } else if bytes < 1_000 * MB {
        format!("{} MB", fixed_point(bytes, MB, 1))
    } else {
        format!("{} GB", fixed_point(bytes, GB, 2))
    }
}

/// Render `bytes / unit` with `decimals` fractional digits.
fn fixed_point(bytes: u128, unit: u128, decimals: u32) -> String {
    let scale = 10u128.pow(decimals);
    let scaled = round_half_even(bytes, unit, scale);
    if decimals == 0 {
        return scaled.to_string();
    }
    format!(
        "{}.{:0width$}",
        scaled / scale,
        scaled % scale,
        width = decimals as usize
    )
}

/// `bytes * scale / unit`, rounded to the nearest integer, ties to even.
///
/// Splits off the whole part first so `bytes * scale` cannot overflow.
fn round_half_even(bytes: u128, unit: u128, scale: u128) -> u128 {
    let whole = (bytes / unit) * scale;
    let frac = (bytes % unit) * scale;
    let mut scaled = whole + frac / unit;
    let rem = frac % unit;
    if rem * 2 > unit || (rem * 2 == unit && scaled % 2 == 1) {
        scaled += 1;
    }
    scaled
}

/// Format a count with thousand separators.
pub fn format_count(count: u128) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
