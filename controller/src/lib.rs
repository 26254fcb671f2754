#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod config;
pub mod loans;
pub mod nonce;
pub mod signature;
pub mod storage;
pub mod validation;
pub mod views;

pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

/// Origination controller: validates counter-signed loan terms, consumes
/// nonces, dispatches predicate verifiers and drives the loan ledger.
///
/// Holds no funds and no loan state of its own; everything it validates is
/// executed by the ledger inside the same transaction.
#[multiversx_sc::contract]
pub trait Controller:
    config::ConfigModule
    + signature::SignatureModule
    + nonce::NonceModule
    + validation::ValidationModule
    + loans::initiate::InitiateModule
    + loans::rollover::RolloverModule
    + loans::refinance::RefinanceModule
    + storage::Storage
    + views::ViewsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    #[init]
    fn init(&self, ledger_address: &ManagedAddress) {
        self.ledger_address().set(ledger_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Originates a loan from counter-signed terms.
    ///
    /// # Arguments
    /// - `terms`: the loan terms both parties agreed to off-chain.
    /// - `properties`: signature nonce and use budget.
    /// - `side`: which party the signature represents.
    /// - `signature` / `extra_data`: the counterparty signature, plus
    ///   appended data for contract signers.
    /// - `lender` / `borrower`: the counterparties; the caller must be one
    ///   of them or approved by one.
    ///
    /// # Payment
    /// - borrower side calls attach the collateral token; lender side calls
    ///   attach principal plus the lender origination fee.
    #[payable("*")]
    #[endpoint(initializeLoan)]
    fn initialize_loan(
        &self,
        terms: LoanTerms<Self::Api>,
        properties: SignatureProperties,
        side: SigningSide,
        signature: ManagedBuffer,
        extra_data: ManagedBuffer,
        lender: ManagedAddress,
        borrower: BorrowerSpec<Self::Api>,
    ) -> u64 {
        self.process_initialize(
            terms, properties, side, signature, extra_data, lender, borrower, None, None,
        )
    }

    /// Origination conditioned on collateral contents: the signature commits
    /// to a predicate array and every allow-listed verifier must be
    /// satisfied before funding.
    #[payable("*")]
    #[endpoint(initializeLoanWithItems)]
    fn initialize_loan_with_items(
        &self,
        terms: LoanTerms<Self::Api>,
        properties: SignatureProperties,
        side: SigningSide,
        signature: ManagedBuffer,
        extra_data: ManagedBuffer,
        lender: ManagedAddress,
        borrower: BorrowerSpec<Self::Api>,
        predicates: ManagedVec<ItemsPredicate<Self::Api>>,
    ) -> u64 {
        self.process_initialize(
            terms,
            properties,
            side,
            signature,
            extra_data,
            lender,
            borrower,
            Some(predicates),
            None,
        )
    }

    /// Lender-side origination over escrowed collateral that has not been
    /// pre-authorized: the borrower's signed permit is consumed first,
    /// replacing the separate authorization transaction.
    #[payable("*")]
    #[endpoint(initializeLoanWithCollateralPermit)]
    fn initialize_loan_with_collateral_permit(
        &self,
        terms: LoanTerms<Self::Api>,
        properties: SignatureProperties,
        side: SigningSide,
        signature: ManagedBuffer,
        extra_data: ManagedBuffer,
        lender: ManagedAddress,
        borrower: BorrowerSpec<Self::Api>,
        permit_nonce: u64,
        permit_deadline: u64,
        permit_signature: ManagedBuffer,
    ) -> u64 {
        self.process_initialize(
            terms,
            properties,
            side,
            signature,
            extra_data,
            lender,
            borrower,
            None,
            Some((permit_nonce, permit_deadline, permit_signature)),
        )
    }

    /// Atomically closes an active loan and opens a replacement against the
    /// same collateral, counter-signed like any origination. Principal, rate
    /// and lender may all change; custody never moves.
    #[payable("*")]
    #[endpoint(rolloverLoan)]
    fn rollover_loan(
        &self,
        old_loan_id: u64,
        terms: LoanTerms<Self::Api>,
        properties: SignatureProperties,
        side: SigningSide,
        signature: ManagedBuffer,
        extra_data: ManagedBuffer,
        lender: ManagedAddress,
    ) -> u64 {
        self.process_rollover(
            old_loan_id, terms, properties, side, signature, extra_data, lender,
        )
    }

    /// Unilateral lender takeover of an active loan under the improvement
    /// and timing constraints. The caller is the new lender and attaches
    /// principal plus the lender origination fee.
    #[payable("*")]
    #[endpoint(refinanceLoan)]
    fn refinance_loan(&self, old_loan_id: u64, terms: LoanTerms<Self::Api>) -> u64 {
        self.process_refinance(old_loan_id, terms)
    }

    /// Lets `operator` originate and roll over loans on the caller's
    /// behalf.
    #[endpoint(approve)]
    fn approve(&self, operator: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(caller != operator, ERROR_SELF_APPROVE);
        self.approvals(&caller, &operator).set(true);
        self.counterparty_approval_event(&caller, &operator, true);
    }

    #[endpoint(revokeApproval)]
    fn revoke_approval(&self, operator: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.approvals(&caller, &operator).clear();
        self.counterparty_approval_event(&caller, &operator, false);
    }

    /// Invalidates one of the caller's own signature nonces, killing any
    /// outstanding signed offers that use it.
    #[endpoint(cancelNonce)]
    fn cancel_nonce(&self, nonce: u64) {
        let caller = self.blockchain().get_caller();
        self.exhaust_own_nonce(&caller, nonce);
    }
}
