//! Display formatting shared by the course and plan views.

/// Formats a VND price with thousands separators ("1.500.000đ").
pub fn format_price(price: f64) -> String {
    let whole = price.max(0.0).round() as u64;
    if whole == 0 {
        return "0đ".to_string();
    }
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out.push('đ');
    out
}

/// Formats a lesson duration given in minutes.
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} phút", minutes);
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest > 0 {
        format!("{}h {}m", hours, rest)
    } else {
        format!("{} giờ", hours)
    }
}

/// Formats a resource size given in kilobytes.
pub fn format_file_size(kb: u64) -> String {
    if kb < 1024 {
        format!("{} KB", kb)
    } else {
        format!("{:.1} MB", kb as f64 / 1024.0)
    }
}

/// mm:ss countdown used by the mock payment modal.
pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_groups_thousands() {
        assert_eq!(format_price(0.0), "0đ");
        assert_eq!(format_price(999.0), "999đ");
        assert_eq!(format_price(1500000.0), "1.500.000đ");
    }

    #[test]
    fn duration_switches_units_at_an_hour() {
        assert_eq!(format_duration(45), "45 phút");
        assert_eq!(format_duration(60), "1 giờ");
        assert_eq!(format_duration(95), "1h 35m");
    }

    #[test]
    fn countdown_pads_seconds() {
        assert_eq!(format_countdown(120), "2:00");
        assert_eq!(format_countdown(65), "1:05");
        assert_eq!(format_countdown(9), "0:09");
    }
}
