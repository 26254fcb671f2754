use common_constants::{MIN_INTEREST_RATE, REFINANCE_LOCKOUT_SECONDS};
use common_errors::*;
use common_proxies::proxy_ledger;
use common_structs::{Loan, LoanTerms};

use crate::{storage, validation};

multiversx_sc::imports!();

/// Lender-to-lender competition for an active loan: no borrower signature,
/// no nonce, but a hard lockout window and a mandatory relative rate
/// improvement. The borrower can only come out ahead; surplus payouts are a
/// rollover concept and never happen here (principal is capped at the
/// outstanding balance).
#[multiversx_sc::module]
pub trait RefinanceModule:
    storage::Storage
    + validation::ValidationModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    fn process_refinance(&self, old_loan_id: u64, terms: LoanTerms<Self::Api>) -> u64 {
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
        require!(caller != old_loan.lender, ERROR_SAME_LENDER);

        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= old_loan.start_timestamp + REFINANCE_LOCKOUT_SECONDS,
            ERROR_TOO_EARLY
        );

        // Rate must improve by the relative threshold; a loan already at the
        // protocol minimum cannot be refinanced on rate at all.
        require!(
            old_loan.terms.interest_rate > BigUint::from(MIN_INTEREST_RATE),
            ERROR_INTEREST_RATE
        );
        require!(
            terms.interest_rate <= self.max_refinanced_rate(&old_loan.terms.interest_rate),
            ERROR_INTEREST_RATE
        );

        // Maturity may only move out, never in.
        require!(
            now + terms.duration_seconds >= old_loan.due_timestamp(),
            ERROR_LOAN_DURATION
        );

        require!(
            terms.same_collateral(&old_loan.terms),
            ERROR_COLLATERAL_MISMATCH
        );
        require!(terms.same_currency(&old_loan.terms), ERROR_CURRENCY_MISMATCH);
        require!(
            terms.principal <= old_loan.balance,
            ERROR_PRINCIPAL_INCREASE
        );

        // Registries and bounds are re-checked now, not cached from the
        // original origination.
        self.validate_terms(&terms);

        let affiliate = self.resolve_affiliate(&terms);
        let payments = self.call_value().all_esdt_transfers().clone_value();
        let (new_loan_id, _interest_due) = self
            .tx()
            .to(&ledger)
            .typed(proxy_ledger::LoanLedgerProxy)
            .settle_and_reopen(old_loan_id, terms, caller, affiliate, true, true)
            .payment(payments)
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();

        new_loan_id
    }
}
