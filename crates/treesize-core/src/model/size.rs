/// Human-readable byte counts for the rendered tree and log summaries.
///
/// Sizes are carried as `u64` bytes everywhere; floating point only appears
/// here, at the display boundary.

/// One gibibyte, the threshold at which the renderer flags an entry as large.
pub const GIB: u64 = 1 << 30;

/// Binary unit ladder. Labels use the short forms people expect from disk tools.
const UNITS: [(&str, u64, usize); 4] = [
    ("TB", 1 << 40, 2),
    ("GB", 1 << 30, 2),
    ("MB", 1 << 20, 1),
    ("KB", 1 << 10, 1),
];

/// Format a byte count with the largest unit that keeps the value ≥ 1.
///
/// KB and MB carry one decimal place, GB and TB carry two.
pub fn format_size(bytes: u64) -> String {
    for (label, scale, precision) in UNITS {
        if bytes >= scale {
            let value = bytes as f64 / scale as f64;
            return format!("{value:.precision$} {label}");
        }
    }
    format!("{bytes} B")
}

/// Format a count with thousands separators (`1234567` → `1,234,567`).
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(10), "10 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_scaled_units() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1.0 MB");
        assert_eq!(format_size(GIB), "1.00 GB");
        assert_eq!(format_size(1_099_511_627_776), "1.00 TB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
