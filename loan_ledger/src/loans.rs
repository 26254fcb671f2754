use common_errors::*;
use common_structs::{AffiliateSplit, Loan, LoanState, LoanTerms};

use crate::{escrow, fees, storage};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Authoritative loan bookkeeping: records, accrual, custody, note minting,
/// and every money leg of originate / settle-and-reopen / repay / claim.
///
/// The controller validates; this module moves value. Loan-mutating
/// endpoints reject any caller but the registered controller.
#[multiversx_sc::module]
pub trait LoanOperationsModule:
    storage::Storage
    + escrow::EscrowModule
    + fees::FeesModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Opens a new loan from validated terms.
    ///
    /// Payment conventions, enforced here:
    /// - lender-side caller attaches exactly principal + lender origination
    ///   fee in the payable currency; the collateral must already sit in
    ///   escrow, authorized, owned by the borrower;
    /// - borrower-side caller attaches exactly the collateral token; the
    ///   funding leg is drawn from the lender's escrowed balance.
    #[payable("*")]
    #[endpoint(originate)]
    fn originate(
        &self,
        terms: LoanTerms<Self::Api>,
        lender: ManagedAddress,
        borrower: ManagedAddress,
        affiliate: Option<AffiliateSplit<Self::Api>>,
        caller_is_lender_side: bool,
    ) -> u64 {
        self.require_controller();

        let schedule = self.fetch_fee_schedule();
        let lender_fee = self.bps_portion(&terms.principal, &schedule.lender_origination_bps);
        let borrower_fee = self.bps_portion(&terms.principal, &schedule.borrower_origination_bps);
        let lender_leg = &terms.principal + &lender_fee;

        let (attached_funds, collateral_attached) = self.inspect_attached_payments(&terms);

        if caller_is_lender_side {
            require!(attached_funds == lender_leg, ERROR_INVALID_PAYMENT);
            require!(!collateral_attached, ERROR_INVALID_PAYMENT);
            self.consume_escrowed_collateral(
                &terms.collateral_token,
                terms.collateral_nonce,
                &borrower,
            );
        } else {
            require!(attached_funds == BigUint::zero(), ERROR_INVALID_PAYMENT);
            if !collateral_attached {
                // Approved operators calling for the borrower do not hold
                // the collateral; it must already sit in escrow.
                self.consume_escrowed_collateral(
                    &terms.collateral_token,
                    terms.collateral_nonce,
                    &borrower,
                );
            }
            self.debit_funds_escrow(&lender, &terms.payable_currency, &lender_leg);
        }

        let currency = terms.payable_currency.clone();
        let borrower_payout = &terms.principal - &borrower_fee;

        let loan_id = self.open_loan(terms, lender, borrower.clone(), affiliate.clone());

        self.credit_fees(&currency, &(lender_fee + borrower_fee), &affiliate);
        if borrower_payout > BigUint::zero() {
            self.tx()
                .to(&borrower)
                .single_esdt(&currency, 0, &borrower_payout)
                .transfer();
        }

        loan_id
    }

    /// Closes an active loan and opens its replacement in one step. The
    /// collateral lock moves from the old id to the new one; the token
    /// itself never leaves custody.
    #[payable("*")]
    #[endpoint(settleAndReopen)]
    fn settle_and_reopen(
        &self,
        old_loan_id: u64,
        new_terms: LoanTerms<Self::Api>,
        new_lender: ManagedAddress,
        affiliate: Option<AffiliateSplit<Self::Api>>,
        caller_is_lender_side: bool,
        is_refinance: bool,
    ) -> MultiValue2<u64, BigUint> {
        self.require_controller();

        let loans_mapper = self.loans(old_loan_id);
        require!(!loans_mapper.is_empty(), ERROR_LOAN_NOT_FOUND);
        let mut old_loan = loans_mapper.get();
        require!(old_loan.is_active(), ERROR_INVALID_STATE);

        let now = self.blockchain().get_block_timestamp();
        let schedule = self.fetch_fee_schedule();

        let interest_due = self.loan_interest_due(&old_loan, now);
        let interest_fee = self.bps_portion(&interest_due, &schedule.lender_interest_bps);
        let principal_fee = self.bps_portion(&old_loan.balance, &schedule.lender_principal_bps);
        let settled_due = &old_loan.balance + &interest_due;
        let old_lender_payoff = &settled_due - &interest_fee - &principal_fee;

        let lender_fee = self.bps_portion(&new_terms.principal, &schedule.lender_origination_bps);
        let borrower_fee = if is_refinance {
            BigUint::zero()
        } else {
            self.bps_portion(&new_terms.principal, &schedule.borrower_origination_bps)
        };
        let lender_leg = &new_terms.principal + &lender_fee;

        let (attached_funds, collateral_attached) = self.inspect_attached_payments(&new_terms);
        require!(!collateral_attached, ERROR_INVALID_PAYMENT);

        // Borrower leg relative to what closing the old loan requires.
        let borrower_owes = &settled_due + &borrower_fee;
        let mut borrower_surplus = BigUint::zero();
        let mut borrower_shortfall = BigUint::zero();
        if new_terms.principal >= borrower_owes {
            borrower_surplus = &new_terms.principal - &borrower_owes;
        } else {
            borrower_shortfall = &borrower_owes - &new_terms.principal;
        }

        if caller_is_lender_side {
            require!(attached_funds == lender_leg, ERROR_INVALID_PAYMENT);
            self.debit_funds_escrow(
                &old_loan.borrower,
                &new_terms.payable_currency,
                &borrower_shortfall,
            );
        } else {
            require!(attached_funds == borrower_shortfall, ERROR_INVALID_PAYMENT);
            self.debit_funds_escrow(&new_lender, &new_terms.payable_currency, &lender_leg);
        }

        // Close the old loan: repaid in full, interest recorded.
        old_loan.state = LoanState::Repaid;
        old_loan.balance = BigUint::zero();
        old_loan.interest_paid += &interest_due;
        old_loan.last_accrual_timestamp = now;
        let old_affiliate = old_loan.affiliate.clone();
        let old_lender = old_loan.lender.clone();
        let borrower = old_loan.borrower.clone();
        let currency = new_terms.payable_currency.clone();
        loans_mapper.set(&old_loan);
        self.loan_repaid_event(old_loan_id, &interest_due);

        let new_loan_id = self.open_loan(new_terms, new_lender.clone(), borrower.clone(), affiliate.clone());

        // Repayment-time fees follow the old loan's affiliate code, the new
        // origination fees follow the new one.
        self.credit_fees(&currency, &(interest_fee + principal_fee), &old_affiliate);
        self.credit_fees(&currency, &(lender_fee + borrower_fee), &affiliate);

        if old_lender_payoff > BigUint::zero() {
            self.tx()
                .to(&old_lender)
                .single_esdt(&currency, 0, &old_lender_payoff)
                .transfer();
        }
        if borrower_surplus > BigUint::zero() {
            self.tx()
                .to(&borrower)
                .single_esdt(&currency, 0, &borrower_surplus)
                .transfer();
        }

        if is_refinance {
            self.loan_refinanced_event(old_loan_id, new_loan_id, &new_lender);
        } else {
            self.loan_rolled_over_event(old_loan_id, new_loan_id, &interest_due);
        }

        (new_loan_id, interest_due).into()
    }

    /// Full repayment by anyone holding the borrower's debt. Excess over the
    /// amount due is refunded to the caller; the collateral goes back to the
    /// borrower.
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(&self, loan_id: u64) {
        let loans_mapper = self.loans(loan_id);
        require!(!loans_mapper.is_empty(), ERROR_LOAN_NOT_FOUND);
        let mut loan = loans_mapper.get();
        require!(loan.is_active(), ERROR_INVALID_STATE);

        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == loan.terms.payable_currency && payment.token_nonce == 0,
            ERROR_INVALID_PAYMENT
        );

        let now = self.blockchain().get_block_timestamp();
        let schedule = self.fetch_fee_schedule();
        let interest_due = self.loan_interest_due(&loan, now);
        let total_due = &loan.balance + &interest_due;
        require!(payment.amount >= total_due, ERROR_REPAYMENT_TOO_SMALL);

        let interest_fee = self.bps_portion(&interest_due, &schedule.lender_interest_bps);
        let principal_fee = self.bps_portion(&loan.balance, &schedule.lender_principal_bps);
        let lender_payoff = &total_due - &interest_fee - &principal_fee;

        let caller = self.blockchain().get_caller();
        let refund = &payment.amount - &total_due;
        let currency = loan.terms.payable_currency.clone();

        loan.state = LoanState::Repaid;
        loan.balance = BigUint::zero();
        loan.interest_paid += &interest_due;
        loan.last_accrual_timestamp = now;
        loans_mapper.set(&loan);

        self.collateral_locked(&loan.terms.collateral_token, loan.terms.collateral_nonce)
            .clear();

        self.credit_fees(&currency, &(interest_fee + principal_fee), &loan.affiliate);

        if lender_payoff > BigUint::zero() {
            self.tx()
                .to(&loan.lender)
                .single_esdt(&currency, 0, &lender_payoff)
                .transfer();
        }
        if refund > BigUint::zero() {
            self.tx().to(&caller).single_esdt(&currency, 0, &refund).transfer();
        }
        self.tx()
            .to(&loan.borrower)
            .single_esdt(
                &loan.terms.collateral_token,
                loan.terms.collateral_nonce,
                &BigUint::from(1u64),
            )
            .transfer();

        self.loan_repaid_event(loan_id, &interest_due);
    }

    /// After maturity the lender may seize the collateral instead of being
    /// repaid. Terminal: the debt is written off with the loan.
    #[endpoint(claim)]
    fn claim(&self, loan_id: u64) {
        let loans_mapper = self.loans(loan_id);
        require!(!loans_mapper.is_empty(), ERROR_LOAN_NOT_FOUND);
        let mut loan = loans_mapper.get();
        require!(loan.is_active(), ERROR_INVALID_STATE);

        let caller = self.blockchain().get_caller();
        require!(caller == loan.lender, ERROR_ONLY_LENDER);

        let now = self.blockchain().get_block_timestamp();
        require!(now >= loan.due_timestamp(), ERROR_LOAN_NOT_DUE);

        loan.state = LoanState::Defaulted;
        loan.balance = BigUint::zero();
        loans_mapper.set(&loan);

        self.collateral_locked(&loan.terms.collateral_token, loan.terms.collateral_nonce)
            .clear();
        self.tx()
            .to(&loan.lender)
            .single_esdt(
                &loan.terms.collateral_token,
                loan.terms.collateral_nonce,
                &BigUint::from(1u64),
            )
            .transfer();

        self.loan_claimed_event(loan_id, &loan.lender);
    }

    // --- Internals ---

    fn require_controller(&self) {
        require!(
            self.blockchain().get_caller() == self.controller_address().get(),
            ERROR_ONLY_CONTROLLER
        );
    }

    /// Splits the attached payments into the funding leg and the collateral
    /// leg; anything else aborts.
    fn inspect_attached_payments(&self, terms: &LoanTerms<Self::Api>) -> (BigUint, bool) {
        let payments = self.call_value().all_esdt_transfers();
        let mut attached_funds = BigUint::zero();
        let mut collateral_attached = false;
        for payment in payments.iter() {
            if payment.token_identifier == terms.payable_currency && payment.token_nonce == 0 {
                attached_funds += &payment.amount;
            } else if payment.token_identifier == terms.collateral_token
                && payment.token_nonce == terms.collateral_nonce
                && payment.amount == BigUint::from(1u64)
            {
                collateral_attached = true;
            } else {
                sc_panic!(ERROR_INVALID_PAYMENT);
            }
        }
        (attached_funds, collateral_attached)
    }

    /// Simple interest accrued since the last accrual point, floor.
    fn loan_interest_due(&self, loan: &Loan<Self::Api>, now: u64) -> BigUint {
        let elapsed = now - loan.last_accrual_timestamp;
        self.prorated_interest(
            &loan.balance,
            &loan.terms.interest_rate,
            elapsed,
            loan.terms.duration_seconds,
        )
    }

    /// Writes the new Active record, locks the collateral under the new id
    /// and mints both note NFTs.
    fn open_loan(
        &self,
        terms: LoanTerms<Self::Api>,
        lender: ManagedAddress,
        borrower: ManagedAddress,
        affiliate: Option<AffiliateSplit<Self::Api>>,
    ) -> u64 {
        let loan_id = self.last_loan_id().get() + 1;
        self.last_loan_id().set(loan_id);

        let now = self.blockchain().get_block_timestamp();
        let loan = Loan {
            id: loan_id,
            state: LoanState::Active,
            balance: terms.principal.clone(),
            start_timestamp: now,
            last_accrual_timestamp: now,
            interest_paid: BigUint::zero(),
            lender: lender.clone(),
            borrower: borrower.clone(),
            affiliate,
            terms,
        };

        self.collateral_locked(&loan.terms.collateral_token, loan.terms.collateral_nonce)
            .set(loan_id);

        self.borrower_note()
            .nft_create_and_send::<u64>(&borrower, BigUint::from(1u64), &loan_id);
        self.lender_note()
            .nft_create_and_send::<u64>(&lender, BigUint::from(1u64), &loan_id);

        self.loan_started_event(loan_id, &lender, &borrower, &loan.terms);
        self.loans(loan_id).set(&loan);

        loan_id
    }
}
