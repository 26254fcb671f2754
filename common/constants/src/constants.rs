#![no_std]

/// Basis points denominator, also the interest-rate denominator:
/// an `interest_rate` of 1_000 is 10.00% over the full loan duration.
pub const BPS: u64 = 10_000;

/// Smallest expressible nonzero rate, 0.01%.
pub const MIN_INTEREST_RATE: u64 = 1;
/// 10_000% — generous ceiling, anything above is a client bug.
pub const MAX_INTEREST_RATE: u64 = 1_000_000;

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

pub const MIN_LOAN_DURATION: u64 = 3_600; // 1 hour
pub const MAX_LOAN_DURATION: u64 = 94_608_000; // 3 years

/// A loan cannot be refinanced within this window of its start.
pub const REFINANCE_LOCKOUT_SECONDS: u64 = 2 * SECONDS_PER_DAY;

/// A refinance must improve the rate by at least this much, relative:
/// new_rate <= old_rate * (BPS - 500) / BPS.
pub const MIN_RATE_IMPROVEMENT_BPS: u64 = 500;

/// Registry batch endpoints refuse more entries than this per call.
pub const MAX_BATCH_ELEMENTS: usize = 50;

/// Affiliates can take at most half of the protocol fee.
pub const MAX_AFFILIATE_SPLIT_BPS: u64 = 5_000;

/// Per-type cap enforced by the fee controller (10%).
pub const MAX_FEE_BPS: u64 = 1_000;

/// Signature domain tags. Baked into every terms digest so signatures
/// cannot be replayed across protocols or versions.
pub const SIGNING_DOMAIN_NAME: &[u8] = b"covenant-origination";
pub const SIGNING_DOMAIN_VERSION: &[u8] = b"1";

/// Domain tag for ledger collateral-use permits, distinct from loan terms.
pub const PERMIT_DOMAIN_NAME: &[u8] = b"covenant-collateral-permit";

/// Expected return value of a contract signer's `isValidSignature`.
pub const SIGNATURE_MAGIC_VALUE: &[u8] = &[0x16, 0x26, 0xba, 0x7e];
