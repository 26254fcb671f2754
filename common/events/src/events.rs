#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("loan_started")]
    fn loan_started_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] lender: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        terms: &LoanTerms<Self::Api>,
    );

    #[event("loan_repaid")]
    fn loan_repaid_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] interest_paid: &BigUint,
    );

    #[event("loan_claimed")]
    fn loan_claimed_event(&self, #[indexed] loan_id: u64, #[indexed] lender: &ManagedAddress);

    /// Old loan closed and replaced in place; custody never moved.
    #[event("loan_rolled_over")]
    fn loan_rolled_over_event(
        &self,
        #[indexed] old_loan_id: u64,
        #[indexed] new_loan_id: u64,
        #[indexed] interest_due: &BigUint,
    );

    #[event("loan_refinanced")]
    fn loan_refinanced_event(
        &self,
        #[indexed] old_loan_id: u64,
        #[indexed] new_loan_id: u64,
        #[indexed] new_lender: &ManagedAddress,
    );

    #[event("nonce_used")]
    fn nonce_used_event(
        &self,
        #[indexed] signer: &ManagedAddress,
        #[indexed] nonce: u64,
        #[indexed] uses: u64,
    );

    #[event("counterparty_approval")]
    fn counterparty_approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] operator: &ManagedAddress,
        #[indexed] approved: bool,
    );

    #[event("currency_allowance_set")]
    fn currency_allowance_set_event(
        &self,
        #[indexed] currency: &TokenIdentifier,
        #[indexed] enabled: bool,
        #[indexed] min_principal: &BigUint,
    );

    #[event("collateral_allowance_set")]
    fn collateral_allowance_set_event(
        &self,
        #[indexed] collateral: &TokenIdentifier,
        #[indexed] allowed: bool,
    );

    #[event("verifier_allowance_set")]
    fn verifier_allowance_set_event(
        &self,
        #[indexed] verifier: &ManagedAddress,
        #[indexed] allowed: bool,
    );

    #[event("affiliate_split_set")]
    fn affiliate_split_set_event(
        &self,
        #[indexed] code: &ManagedByteArray<Self::Api, 32>,
        #[indexed] affiliate: &ManagedAddress,
        #[indexed] split_bps: &BigUint,
    );

    #[event("funds_deposited")]
    fn funds_deposited_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("funds_withdrawn")]
    fn funds_withdrawn_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("collateral_deposited")]
    fn collateral_deposited_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] nonce: u64,
        #[indexed] authorized: bool,
    );

    #[event("collateral_authorization_set")]
    fn collateral_authorization_set_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] nonce: u64,
        #[indexed] authorized: bool,
    );

    #[event("collateral_withdrawn")]
    fn collateral_withdrawn_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] nonce: u64,
    );

    #[event("collateral_permit_used")]
    fn collateral_permit_used_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] nonce: u64,
        #[indexed] permit_nonce: u64,
    );

    #[event("fees_accrued")]
    fn fees_accrued_event(
        &self,
        #[indexed] token: &TokenIdentifier,
        #[indexed] protocol_amount: &BigUint,
        #[indexed] affiliate: &ManagedAddress,
        #[indexed] affiliate_amount: &BigUint,
    );

    #[event("fees_withdrawn")]
    fn fees_withdrawn_event(
        &self,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] amount: &BigUint,
    );
}
