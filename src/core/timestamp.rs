/*
 * Captures the timestamp that names an export's output file. It is taken
 * once, before any traversal, and passed along as a plain string.
 */
use time::OffsetDateTime;
use time::macros::format_description;

pub type Result<T> = std::result::Result<T, time::error::Format>;

/// Formats `moment` as `YYYYMMDD_HHMMSS`.
pub fn format_export_timestamp(moment: OffsetDateTime) -> Result<String> {
    moment.format(format_description!(
        "[year][month][day]_[hour][minute][second]"
    ))
}

/*
 * Formats the current local time. The local offset can be unavailable (the
 * `time` crate refuses to query it in some multi-threaded processes); UTC is
 * used in that case.
 */
pub fn capture_export_timestamp() -> Result<String> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|e| {
        log::warn!("Timestamp: Local offset unavailable ({e}), using UTC.");
        OffsetDateTime::now_utc()
    });
    format_export_timestamp(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_format_pads_every_field() {
        let moment = datetime!(2024-03-05 07:08:09 UTC);
        assert_eq!(format_export_timestamp(moment).unwrap(), "20240305_070809");
    }

    #[test]
    fn test_format_uses_24_hour_clock() {
        let moment = datetime!(2023-12-31 23:59:58 +02:00);
        assert_eq!(format_export_timestamp(moment).unwrap(), "20231231_235958");
    }

    #[test]
    fn test_capture_has_expected_shape() {
        let stamp = capture_export_timestamp().unwrap();
        assert_eq!(stamp.len(), 15);
        let (date, rest) = stamp.split_at(8);
        assert!(date.chars().all(|c| c.is_ascii_digit()));
        assert!(rest.starts_with('_'));
        assert!(rest[1..].chars().all(|c| c.is_ascii_digit()));
    }
}
