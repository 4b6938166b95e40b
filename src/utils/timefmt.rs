/// `m:ss`, minutes unbounded. Anything not a finite, non-negative number of
/// seconds shows as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(60.0), "1:00");
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(245.5), "4:05");
        assert_eq!(format_time(3725.0), "62:05");
    }

    #[test]
    fn unknown_lengths_show_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }
}
