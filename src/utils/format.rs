use crate::config::{COIN_SYMBOL, MICRO_PER_COIN};

/// Human readable hash rate with SI scaling. Negative inputs keep their
/// sign; the stores pass daemon values through untouched.
pub fn format_hashrate(rate: f64) -> String {
    let magnitude = rate.abs();
    let (scaled, unit) = if magnitude >= 1e12 {
        (rate / 1e12, "TH/s")
    } else if magnitude >= 1e9 {
        (rate / 1e9, "GH/s")
    } else if magnitude >= 1e6 {
        (rate / 1e6, "MH/s")
    } else if magnitude >= 1e3 {
        (rate / 1e3, "kH/s")
    } else {
        (rate, "H/s")
    };
    if unit == "H/s" {
        format!("{:.0} {}", scaled, unit)
    } else {
        format!("{:.2} {}", scaled, unit)
    }
}

/// Micro units to a coin amount string, trailing zeros trimmed.
pub fn format_micro(amount: u64) -> String {
    let whole = amount / MICRO_PER_COIN;
    let frac = amount % MICRO_PER_COIN;
    if frac == 0 {
        return format!("{} {}", whole, COIN_SYMBOL);
    }
    let frac_str = format!("{:06}", frac);
    let trimmed = frac_str.trim_end_matches('0');
    format!("{}.{} {}", whole, trimmed, COIN_SYMBOL)
}

/// Shorten long identifiers for table cells, keeping both ends.
pub fn truncate_middle(s: &str, max: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max || max < 5 {
        return s.to_string();
    }
    let keep = (max - 1) / 2;
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{}…{}", head, tail)
}
