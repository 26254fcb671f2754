use common_errors::ERROR_LOAN_NOT_FOUND;
use common_structs::Loan;

use crate::{loans, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage
    + loans::LoanOperationsModule
    + crate::escrow::EscrowModule
    + crate::fees::FeesModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    #[view(getLoan)]
    fn get_loan(&self, loan_id: u64) -> Loan<Self::Api> {
        let mapper = self.loans(loan_id);
        require!(!mapper.is_empty(), ERROR_LOAN_NOT_FOUND);
        mapper.get()
    }

    /// Interest accrued on the outstanding balance up to the current block
    /// timestamp. Zero for closed loans.
    #[view(getInterestDue)]
    fn get_interest_due(&self, loan_id: u64) -> BigUint {
        let loan = self.get_loan(loan_id);
        if !loan.is_active() {
            return BigUint::zero();
        }
        let now = self.blockchain().get_block_timestamp();
        self.loan_interest_due(&loan, now)
    }

    /// Everything a repayment must attach right now: balance plus accrued
    /// interest.
    #[view(getTotalDue)]
    fn get_total_due(&self, loan_id: u64) -> BigUint {
        let loan = self.get_loan(loan_id);
        if !loan.is_active() {
            return BigUint::zero();
        }
        let now = self.blockchain().get_block_timestamp();
        &loan.balance + &self.loan_interest_due(&loan, now)
    }
}
