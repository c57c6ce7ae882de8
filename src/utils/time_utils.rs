use chrono::{DateTime, Local};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

    pub fn epoch_sec_to_local(epoch_sec: i64) -> String {
        // Used for display purposes
        let Some(dt) = DateTime::from_timestamp(epoch_sec, 0) else {
            return "-".to_string();
        };
        dt.with_timezone(&Local)
            .format(Self::STANDARD_TIME_FORMAT)
            .to_string()
    }

    pub fn local_now_as_timestamp_ms() -> i64 {
        let now_local = Local::now();
        now_local.timestamp_millis()
    }

    pub fn format_duration(ms: i64) -> String {
        let secs = ms / 1000;
        if secs < 60 {
            return format!("{}s", secs);
        }
        let mins = secs / 60;
        if mins < 60 {
            return format!("{}m {}s", mins, secs % 60);
        }
        let hours = mins / 60;
        if hours < 24 {
            return format!("{}h {}m", hours, mins % 60);
        }
        let days = hours / 24;
        format!("{}d {}h", days, hours % 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_buckets() {
        assert_eq!(TimeUtils::format_duration(12_000), "12s");
        assert_eq!(
            TimeUtils::format_duration(TimeUtils::MS_IN_MIN * 5 + 3_000),
            "5m 3s"
        );
        assert_eq!(TimeUtils::format_duration(TimeUtils::MS_IN_H * 2), "2h 0m");
        assert_eq!(
            TimeUtils::format_duration(TimeUtils::MS_IN_D * 3 + TimeUtils::MS_IN_H * 7),
            "3d 7h"
        );
    }

    #[test]
    fn bad_timestamp_renders_dash() {
        assert_eq!(TimeUtils::epoch_sec_to_local(i64::MAX), "-");
    }
}
