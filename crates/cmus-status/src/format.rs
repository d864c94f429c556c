use crate::protocol::{FormattedDisplay, RawMetadata};

pub fn format_metadata(meta: &RawMetadata) -> FormattedDisplay {
    FormattedDisplay {
        song: format!("{} - {}", meta.artist, meta.title),
        time: format!(
            "{}/{}",
            fmt_seconds(meta.position),
            fmt_seconds(meta.duration)
        ),
        album: format!("[{}] {}", meta.date, meta.album),
        percent: progress_percent(meta.position, meta.duration),
    }
}

/// `641` → `"10m41s"`. Minutes wrap every hour; there is no hours field.
pub fn fmt_seconds(secs: u64) -> String {
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    format!("{:02}m{:02}s", m, s)
}

pub fn progress_percent(position: u64, duration: u64) -> f64 {
    if position == 0 || duration == 0 {
        return 0.0;
    }
    position as f64 / duration as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_seconds() {
        assert_eq!(fmt_seconds(0), "00m00s");
        assert_eq!(fmt_seconds(641), "10m41s");
        assert_eq!(fmt_seconds(829), "13m49s");
        assert_eq!(fmt_seconds(3599), "59m59s");
    }

    #[test]
    fn test_fmt_seconds_wraps_at_hour() {
        assert_eq!(fmt_seconds(3600), "00m00s");
        assert_eq!(fmt_seconds(5400), "30m00s");
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 790), 0.0);
        assert_eq!(progress_percent(10, 0), 0.0);
        assert_eq!(progress_percent(829, 829), 100.0);
        assert!((progress_percent(641, 829) - 77.322_074_788_902_3).abs() < 1e-9);
    }

    #[test]
    fn test_format_empty_metadata() {
        let formatted = format_metadata(&RawMetadata::default());
        assert_eq!(formatted.song, " - ");
        assert_eq!(formatted.time, "00m00s/00m00s");
        assert_eq!(formatted.album, "[] ");
        assert_eq!(formatted.percent, 0.0);
    }
}
