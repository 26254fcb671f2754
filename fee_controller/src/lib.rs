#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::MAX_FEE_BPS;
use common_errors::ERROR_FEE_TOO_LARGE;
use common_structs::{FeeSchedule, FeeType};

/// Basis-point fee schedule for the origination protocol. The ledger reads
/// the whole schedule once per operation; values are capped per type so a
/// misconfigured schedule cannot confiscate principal.
#[multiversx_sc::contract]
pub trait FeeController {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setFeeBps)]
    fn set_fee_bps(&self, fee_type: FeeType, bps: BigUint) {
        require!(bps <= BigUint::from(MAX_FEE_BPS), ERROR_FEE_TOO_LARGE);
        self.fee_set_event(&fee_type, &bps);
        self.fee_bps(&fee_type).set(bps);
    }

    #[view(getFeeBps)]
    fn get_fee_bps(&self, fee_type: FeeType) -> BigUint {
        self.fee_bps(&fee_type).get()
    }

    /// One read for all fee values so a single loan operation cannot span
    /// two schedules.
    #[view(getFeeSchedule)]
    fn get_fee_schedule(&self) -> FeeSchedule<Self::Api> {
        FeeSchedule {
            lender_origination_bps: self.fee_bps(&FeeType::LenderOrigination).get(),
            borrower_origination_bps: self.fee_bps(&FeeType::BorrowerOrigination).get(),
            lender_interest_bps: self.fee_bps(&FeeType::LenderInterest).get(),
            lender_principal_bps: self.fee_bps(&FeeType::LenderPrincipal).get(),
        }
    }

    #[storage_mapper("fee_bps")]
    fn fee_bps(&self, fee_type: &FeeType) -> SingleValueMapper<BigUint>;

    #[event("fee_set")]
    fn fee_set_event(&self, #[indexed] fee_type: &FeeType, #[indexed] bps: &BigUint);
}
