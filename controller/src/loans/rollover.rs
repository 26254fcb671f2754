use common_errors::*;
use common_proxies::proxy_ledger;
use common_structs::{Loan, LoanTerms, SignatureProperties, SigningSide};

use crate::{nonce, signature, storage, validation};

multiversx_sc::imports!();

/// Refinance-in-place with borrower consent: close the active loan, settle
/// the old lender, open the replacement against the same collateral. The
/// counterparty signature is validated exactly as at origination, so an old
/// lender staying on still needs the borrower's fresh signature (and vice
/// versa).
#[multiversx_sc::module]
pub trait RolloverModule:
    storage::Storage
    + validation::ValidationModule
    + signature::SignatureModule
    + nonce::NonceModule
    + common_events::EventsModule
{
    #[allow(clippy::too_many_arguments)]
    fn process_rollover(
        &self,
        old_loan_id: u64,
        terms: LoanTerms<Self::Api>,
        properties: SignatureProperties,
        side: SigningSide,
        signature: ManagedBuffer,
        extra_data: ManagedBuffer,
        lender: ManagedAddress,
    ) -> u64 {
        self.reentrancy_guard();

        let ledger = self.ledger_address().get();
        let old_loan: Loan<Self::Api> = self
            .tx()
            .to(&ledger)
            .typed(proxy_ledger::LoanLedgerProxy)
            .get_loan(old_loan_id)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(old_loan.is_active(), ERROR_INVALID_STATE);

        let caller = self.blockchain().get_caller();
        let borrower = old_loan.borrower.clone();

        let (caller_is_lender_side, signer, needed_side) =
            self.resolve_counterparties(&caller, &lender, &borrower);
        self.require_declared_side(side, needed_side);
        self.require_not_own_signature(&caller, &signer);

        // The replacement pledges the same collateral in the same currency.
        require!(
            terms.same_collateral(&old_loan.terms),
            ERROR_ROLLOVER_COLLATERAL_MISMATCH
        );
        require!(
            terms.same_currency(&old_loan.terms),
            ERROR_ROLLOVER_CURRENCY_MISMATCH
        );

        self.validate_terms(&terms);
        self.require_signature_not_expired(&terms);

        let digest = self.compute_loan_terms_digest(&terms, &properties, side);
        self.validate_counterparty_signature(&signer, &digest, &signature, &extra_data);
        self.use_nonce(&signer, &properties);

        let affiliate = self.resolve_affiliate(&terms);
        let payments = self.call_value().all_esdt_transfers().clone_value();
        let (new_loan_id, _interest_due) = self
            .tx()
            .to(&ledger)
            .typed(proxy_ledger::LoanLedgerProxy)
            .settle_and_reopen(
                old_loan_id,
                terms,
                lender,
                affiliate,
                caller_is_lender_side,
                false,
            )
            .payment(payments)
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();

        new_loan_id
    }
}
