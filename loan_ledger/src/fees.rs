use common_errors::ERROR_NOTHING_TO_WITHDRAW;
use common_proxies::proxy_fee_controller;
use common_structs::{AffiliateSplit, FeeSchedule};

use crate::storage;

multiversx_sc::imports!();

/// Fee revenue is bookkept as withdrawable balances rather than pushed with
/// each loan operation, so a misbehaving receiver can never block a loan.
#[multiversx_sc::module]
pub trait FeesModule:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    /// Reads the whole fee schedule in one call at the start of an
    /// operation.
    fn fetch_fee_schedule(&self) -> FeeSchedule<Self::Api> {
        self.tx()
            .to(self.fee_controller_address().get())
            .typed(proxy_fee_controller::FeeControllerProxy)
            .fee_schedule()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// Splits a collected fee between the protocol balance and, when the
    /// loan carries a registered code, the affiliate balance. Floor on the
    /// affiliate share; the protocol keeps the remainder.
    fn credit_fees(
        &self,
        token: &TokenIdentifier,
        amount: &BigUint,
        affiliate: &Option<AffiliateSplit<Self::Api>>,
    ) {
        if amount == &BigUint::zero() {
            return;
        }
        let (affiliate_address, affiliate_amount) = match affiliate {
            Some(split) => (
                split.affiliate.clone(),
                self.bps_portion(amount, &split.split_bps),
            ),
            None => (ManagedAddress::zero(), BigUint::zero()),
        };
        let protocol_amount = amount - &affiliate_amount;

        if affiliate_amount > BigUint::zero() {
            self.affiliate_fees(&affiliate_address, token)
                .update(|balance| *balance += &affiliate_amount);
        }
        self.protocol_fees(token)
            .update(|balance| *balance += &protocol_amount);

        self.fees_accrued_event(token, &protocol_amount, &affiliate_address, &affiliate_amount);
    }

    #[only_owner]
    #[endpoint(withdrawProtocolFees)]
    fn withdraw_protocol_fees(&self, token: TokenIdentifier) {
        let amount = self.protocol_fees(&token).take();
        require!(amount > BigUint::zero(), ERROR_NOTHING_TO_WITHDRAW);

        let caller = self.blockchain().get_caller();
        self.fees_withdrawn_event(&caller, &token, &amount);
        self.tx().to(&caller).single_esdt(&token, 0, &amount).transfer();
    }

    #[endpoint(withdrawAffiliateFees)]
    fn withdraw_affiliate_fees(&self, token: TokenIdentifier) {
        let caller = self.blockchain().get_caller();
        let amount = self.affiliate_fees(&caller, &token).take();
        require!(amount > BigUint::zero(), ERROR_NOTHING_TO_WITHDRAW);

        self.fees_withdrawn_event(&caller, &token, &amount);
        self.tx().to(&caller).single_esdt(&token, 0, &amount).transfer();
    }
}
