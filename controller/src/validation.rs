use common_constants::{
    MAX_INTEREST_RATE, MAX_LOAN_DURATION, MIN_INTEREST_RATE, MIN_LOAN_DURATION,
};
use common_errors::*;
use common_structs::{AffiliateSplit, LoanTerms, SigningSide};

multiversx_sc::imports!();

/// Who may act, who must sign, and whether the terms themselves are
/// acceptable. Everything here is read-only; the first failed check aborts
/// the transaction before any value has moved.
#[multiversx_sc::module]
pub trait ValidationModule: crate::storage::Storage {
    /// Blocks nested engine entries while a borrower callback is running.
    fn reentrancy_guard(&self) {
        require!(!self.origination_ongoing().get(), ERROR_REENTRANCY);
    }

    /// Resolves which side the caller acts for and who therefore must have
    /// signed. A caller approved by both parties acts for the borrower.
    ///
    /// Returns (caller acts for the lender side, expected signer, needed
    /// signing side).
    fn resolve_counterparties(
        &self,
        caller: &ManagedAddress,
        lender: &ManagedAddress,
        borrower: &ManagedAddress,
    ) -> (bool, ManagedAddress, SigningSide) {
        let acts_for_borrower =
            caller == borrower || self.approvals(borrower, caller).get();
        let acts_for_lender = caller == lender || self.approvals(lender, caller).get();
        require!(
            acts_for_borrower || acts_for_lender,
            ERROR_CALLER_NOT_PARTICIPANT
        );

        if acts_for_borrower {
            (false, lender.clone(), SigningSide::Lender)
        } else {
            (true, borrower.clone(), SigningSide::Borrower)
        }
    }

    fn require_declared_side(&self, declared: SigningSide, needed: SigningSide) {
        require!(declared == needed, ERROR_SIDE_MISMATCH);
    }

    /// The caller must not be, or be approved by, the party whose signature
    /// it presents: a stale mutual approval cannot turn into self-dealing.
    fn require_not_own_signature(&self, caller: &ManagedAddress, signer: &ManagedAddress) {
        require!(
            caller != signer && !self.approvals(signer, caller).get(),
            ERROR_APPROVED_OWN_LOAN
        );
    }

    /// Bounds and registry checks on the terms. Registry errors carry the
    /// offending token for diagnosability.
    fn validate_terms(&self, terms: &LoanTerms<Self::Api>) {
        require!(
            terms.interest_rate >= BigUint::from(MIN_INTEREST_RATE)
                && terms.interest_rate <= BigUint::from(MAX_INTEREST_RATE),
            ERROR_INTEREST_RATE
        );
        require!(
            terms.duration_seconds >= MIN_LOAN_DURATION
                && terms.duration_seconds <= MAX_LOAN_DURATION,
            ERROR_LOAN_DURATION
        );

        let currency_mapper = self.currency_config(&terms.payable_currency);
        require!(
            !currency_mapper.is_empty() && currency_mapper.get().enabled,
            "Currency not allowed: {}",
            (&terms.payable_currency)
        );
        require!(
            terms.principal >= currency_mapper.get().min_principal,
            ERROR_PRINCIPAL_TOO_LOW
        );
        require!(
            self.collateral_allowed(&terms.collateral_token).get(),
            "Collateral not allowed: {}",
            (&terms.collateral_token)
        );
    }

    /// Deadline bounds the signature, checked only on counter-signed paths.
    fn require_signature_not_expired(&self, terms: &LoanTerms<Self::Api>) {
        require!(
            terms.deadline >= self.blockchain().get_block_timestamp(),
            ERROR_SIGNATURE_EXPIRED
        );
    }

    /// Registered split for the terms' affiliate code, if any. An unknown
    /// code is simply ignored; fee routing is operator policy, not a terms
    /// invariant.
    fn resolve_affiliate(
        &self,
        terms: &LoanTerms<Self::Api>,
    ) -> Option<AffiliateSplit<Self::Api>> {
        if !terms.has_affiliate_code() {
            return None;
        }
        let mapper = self.affiliate_splits(&terms.affiliate_code);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }
}
