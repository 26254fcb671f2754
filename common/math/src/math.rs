#![no_std]

use common_constants::{BPS, MIN_RATE_IMPROVEMENT_BPS};

multiversx_sc::imports!();

/// Fixed-term loan arithmetic. Everything truncates toward zero; callers
/// over-provide by the rounding margin.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `amount * bps / 10_000`, floor.
    fn bps_portion(&self, amount: &BigUint, bps: &BigUint) -> BigUint {
        amount * bps / BigUint::from(BPS)
    }

    /// Simple interest accrued on `balance` between two accrual points:
    /// `balance * rate * elapsed / (BPS * duration)`, floor.
    ///
    /// `rate` covers the full `duration`, so a loan held to maturity owes
    /// exactly `balance * rate / BPS` (up to truncation of partial accruals).
    fn prorated_interest(
        &self,
        balance: &BigUint,
        rate: &BigUint,
        elapsed_seconds: u64,
        duration_seconds: u64,
    ) -> BigUint {
        if duration_seconds == 0 {
            return BigUint::zero();
        }
        balance * rate * BigUint::from(elapsed_seconds)
            / (BigUint::from(BPS) * BigUint::from(duration_seconds))
    }

    /// Highest new rate a refinance may carry against `old_rate`:
    /// `old_rate * (BPS - 500) / BPS`, floor (5% relative improvement).
    fn max_refinanced_rate(&self, old_rate: &BigUint) -> BigUint {
        old_rate * &BigUint::from(BPS - MIN_RATE_IMPROVEMENT_BPS) / BigUint::from(BPS)
    }
}
