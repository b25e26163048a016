//! Human-readable byte counts for the console report.

const UNITS: &[&str] = &["bytes", "KB", "MB", "GB"];

/// Format a byte count using the largest unit that keeps the value at or
/// above 1, with one decimal place for every unit above bytes.
///
/// ```
/// # use pdfshrink::format_size;
/// assert_eq!(format_size(512), "512 bytes");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(2 * 1024 * 1024), "2.0 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    // 1023.96 KB would print as "1024.0 KB"
    if unit_index > 0 && unit_index < UNITS.len() - 1 && (size * 10.0).round() / 10.0 >= 1024.0 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Like [`format_size`], but for a signed saving; a file that grew is shown
/// with a leading minus.
pub fn format_saved(saved: i64) -> String {
    if saved < 0 {
        format!("-{}", format_size(saved.unsigned_abs()))
    } else {
        format_size(saved.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_bytes_below_one_kilobyte() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(1), "1 bytes");
        assert_eq!(format_size(1023), "1023 bytes");
    }

    #[test]
    fn unit_boundaries() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GB");
    }

    #[test]
    fn gigabytes_is_the_largest_unit() {
        assert_eq!(format_size(2048 * 1024 * 1024 * 1024), "2048.0 GB");
    }

    #[test]
    fn chosen_unit_keeps_value_in_range() {
        let edges = [1024u64, 5_000, 1_048_575, 1_048_576, 734_003_200, (1 << 30) - 1, 3 << 30];
        for bytes in edges {
            let rendered = format_size(bytes);
            let (value, unit) = rendered.split_once(' ').unwrap();
            let value: f64 = value.parse().unwrap();
            assert_ne!(unit, "bytes");
            assert!((1.0..1024.0).contains(&value), "{rendered}");
        }
    }

    #[test]
    fn rounding_up_moves_to_next_unit() {
        assert_eq!(format_size(1_048_575), "1.0 MB");
        assert_eq!(format_size((1 << 30) - 1), "1.0 GB");
        assert_eq!(format_size(1_048_000), "1023.4 KB");
    }

    #[test]
    fn negative_saving_has_minus_sign() {
        assert_eq!(format_saved(-2048), "-2.0 KB");
        assert_eq!(format_saved(0), "0 bytes");
        assert_eq!(format_saved(1_048_576), "1.0 MB");
    }
}
