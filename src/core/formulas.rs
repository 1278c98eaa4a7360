//! Pure calculations behind every derived product field.
//!
//! The entity store, seed data and the CLI views all go through these
//! functions; nothing else computes stock, conversions or margins.

/// Stock physically available: `initial - (stock_out + pending)`, floored at zero.
pub fn real_stock(initial: u32, stock_out: u32, pending: u32) -> u32 {
    initial.saturating_sub(stock_out.saturating_add(pending))
}

/// Stock balance without the zero floor. Negative when oversold or overcommitted.
pub fn net_stock(initial: u32, stock_out: u32, pending: u32) -> i64 {
    i64::from(initial) - i64::from(stock_out) - i64::from(pending)
}

/// Converts a source-currency amount using `rate`, rounding half away from zero.
pub fn to_target_currency(source_amount: f64, rate: f64) -> i64 {
    (source_amount * rate).round() as i64
}

/// Profit margin in whole percent. A zero cost price yields 0 rather than
/// an infinite or undefined margin. Out-of-range results saturate.
pub fn margin(selling_price: i64, cost_price: i64) -> i64 {
    if cost_price == 0 {
        return 0;
    }
    let cost = cost_price as f64;
    let ratio = (selling_price as f64 - cost) / cost;
    (ratio * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_stock_subtracts_out_and_pending() {
        assert_eq!(real_stock(100, 20, 5), 75);
        assert_eq!(real_stock(80, 10, 3), 67);
        assert_eq!(real_stock(10, 10, 0), 0);
    }

    #[test]
    fn test_real_stock_never_negative() {
        assert_eq!(real_stock(10, 20, 5), 0);
        assert_eq!(real_stock(0, 0, 1), 0);
        assert_eq!(real_stock(5, u32::MAX, u32::MAX), 0);
    }

    #[test]
    fn test_net_stock_keeps_shortfall() {
        assert_eq!(net_stock(10, 20, 5), -15);
        assert_eq!(net_stock(100, 20, 5), 75);
        assert_eq!(net_stock(0, u32::MAX, 0), -i64::from(u32::MAX));
    }

    #[test]
    fn test_to_target_currency() {
        assert_eq!(to_target_currency(8.5, 1850.0), 15725);
        assert_eq!(to_target_currency(15.0, 1850.0), 27750);
        assert_eq!(to_target_currency(0.0, 1850.0), 0);
        // 0.5 rounds away from zero
        assert_eq!(to_target_currency(2.5, 1.0), 3);
        assert_eq!(to_target_currency(1.25, 2.0), 3);
    }

    #[test]
    fn test_margin() {
        assert_eq!(margin(35000, 18500), 89);
        assert_eq!(margin(60000, 27750), 116);
        assert_eq!(margin(28000, 11100), 152);
        assert_eq!(margin(10000, 10000), 0);
    }

    #[test]
    fn test_margin_can_be_negative() {
        assert_eq!(margin(5000, 10000), -50);
        assert_eq!(margin(0, 10000), -100);
    }

    #[test]
    fn test_margin_zero_cost_is_zero() {
        assert_eq!(margin(35000, 0), 0);
        assert_eq!(margin(0, 0), 0);
        assert_eq!(margin(-100, 0), 0);
    }

    #[test]
    fn test_margin_extreme_prices_saturate() {
        assert_eq!(margin(i64::MIN, 1), i64::MIN);
        assert_eq!(margin(i64::MAX, 1), i64::MAX);
        assert_eq!(margin(i64::MAX, -1), i64::MIN);
        assert_eq!(margin(1, i64::MIN), -100);
    }
}
