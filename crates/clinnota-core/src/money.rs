//! BRL formatting helpers

/// Render an amount in cents as `R$ 29,90`
pub fn format_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}R$ {},{:02}", cents / 100, cents % 100)
}

/// Monthly price of a yearly subscription, rounded half-up to the cent
pub const fn monthly_equivalent_cents(yearly_cents: i64) -> i64 {
    (yearly_cents + 6) / 12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(2990), "R$ 29,90");
        assert_eq!(format_brl(199_900), "R$ 1999,00");
        assert_eq!(format_brl(5), "R$ 0,05");
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(-150), "-R$ 1,50");
    }

    #[test]
    fn test_monthly_equivalent() {
        // 299,00 / 12 = 24,9166..
        assert_eq!(monthly_equivalent_cents(29900), 2492);
        // 799,00 / 12 = 66,5833..
        assert_eq!(monthly_equivalent_cents(79900), 6658);
        assert_eq!(monthly_equivalent_cents(1200), 100);
    }
}
