mod format;
mod time_utils;

pub use format::{format_hashrate, format_micro, truncate_middle};
pub use time_utils::TimeUtils;
