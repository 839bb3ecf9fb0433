// Central constants for the economy and relationship rules.
pub const STARTING_BALANCE: i64 = 10_000_000;
pub const DAILY_GRANT: i64 = 50_000;
pub const AFFECTION_GRANT: i64 = 50;
/// Upper bound for a single `oaddcash` credit.
pub const MAX_CASH_GRANT: i64 = 1_000_000_000_000;

// Cooldown windows, in seconds.
pub const DAILY_WINDOW_SECS: i64 = 24 * 60 * 60;
pub const AFFECTION_WINDOW_SECS: i64 = 60 * 60;

// Embed colours.
pub const COLOR_LOVE: u32 = 0xFF1493;
pub const COLOR_PHOTO: u32 = 0xFF69B4;
pub const COLOR_SUCCESS: u32 = 0x00FF00;
pub const COLOR_ERROR: u32 = 0xFF0000;
pub const COLOR_INFO: u32 = 0x5865F2;

/// Format an amount with thousands separators, e.g. `50000` -> `50,000`.
pub fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
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
    use super::format_money;

    #[test]
    fn money_gets_thousands_separators() {
        assert_eq!(format_money(0), "0");
        assert_eq!(format_money(999), "999");
        assert_eq!(format_money(50_000), "50,000");
        assert_eq!(format_money(10_000_000), "10,000,000");
        assert_eq!(format_money(-1_234), "-1,234");
    }
}
