//! Basis-point fee arithmetic shared by stake withdrawal, reward claims,
//! and commission burns.

/// Denominator for basis-point rates: 10_000 bps == 100%.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Returns the fee owed on `amount` at `fee_bps`, rounded down.
///
/// The computation is split around the denominator so the intermediate
/// product cannot overflow for amounts near `i128::MAX`.
pub fn fee_for(amount: i128, fee_bps: u32) -> i128 {
    let bps = i128::from(fee_bps);
    let whole = amount / BPS_DENOMINATOR;
    let rest = amount % BPS_DENOMINATOR;
    whole
        .saturating_mul(bps)
        .saturating_add(rest * bps / BPS_DENOMINATOR)
}

/// Returns `amount` net of the fee at `fee_bps`.
pub fn net_of_fee(amount: i128, fee_bps: u32) -> i128 {
    amount - fee_for(amount, fee_bps)
}

#[cfg(test)]
mod tests {
    use super::{fee_for, net_of_fee};

    #[test]
    fn fee_rounds_down() {
        // 5% of 20 is exactly 1; 5% of 19 rounds down to 0.
        assert_eq!(fee_for(20, 500), 1);
        assert_eq!(fee_for(19, 500), 0);
        assert_eq!(fee_for(100, 500), 5);
        assert_eq!(fee_for(1_000, 500), 50);
    }

    #[test]
    fn fee_and_net_partition_amount() {
        for amount in [0i128, 1, 19, 20, 80, 100, 9_999, 10_000, 123_457] {
            for bps in [0u32, 1, 500, 9_999, 10_000] {
                assert_eq!(fee_for(amount, bps) + net_of_fee(amount, bps), amount);
            }
        }
    }

    #[test]
    fn zero_rate_charges_nothing() {
        assert_eq!(fee_for(1_000_000, 0), 0);
        assert_eq!(net_of_fee(1_000_000, 0), 1_000_000);
    }

    #[test]
    fn full_rate_consumes_everything() {
        assert_eq!(fee_for(1_000_000, 10_000), 1_000_000);
        assert_eq!(net_of_fee(1_000_000, 10_000), 0);
    }

    #[test]
    fn burn_scenario_matches_reference_data() {
        // Withdrawing 80 with a 5% burn fee leaves 76 for the recipient.
        assert_eq!(net_of_fee(80, 500), 76);
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let near_max = i128::MAX - 3;
        let fee = fee_for(near_max, 500);
        assert!(fee > 0 && fee < near_max);
        assert_eq!(fee + net_of_fee(near_max, 500), near_max);
    }
}
