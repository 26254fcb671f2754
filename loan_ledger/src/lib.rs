#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod escrow;
pub mod fees;
pub mod loans;
pub mod permit;
pub mod storage;
pub mod view;

pub use common_errors::*;
pub use common_structs::*;

/// Canonical loan ledger: owns loan records, escrow, collateral custody,
/// note collections and fee balances. The origination controller is the
/// only caller allowed to open or replace loans; escrow, repayment, claim
/// and fee withdrawal are public.
#[multiversx_sc::contract]
pub trait LoanLedger:
    storage::Storage
    + escrow::EscrowModule
    + fees::FeesModule
    + loans::LoanOperationsModule
    + permit::PermitModule
    + view::ViewModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::default_issue_callbacks::DefaultIssueCallbacksModule
{
    #[init]
    fn init(&self, fee_controller_address: &ManagedAddress) {
        self.fee_controller_address().set(fee_controller_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Wires the controller in after both contracts are deployed.
    #[only_owner]
    #[endpoint(setController)]
    fn set_controller(&self, controller: ManagedAddress) {
        self.controller_address().set(controller);
    }

    /// Issues the borrower-side note collection.
    #[only_owner]
    #[payable("EGLD")]
    #[endpoint(registerBorrowerNote)]
    fn register_borrower_note(&self, token_name: ManagedBuffer, ticker: ManagedBuffer) {
        let payment_amount = self.call_value().egld();
        self.borrower_note().issue_and_set_all_roles(
            EsdtTokenType::NonFungible,
            payment_amount.clone_value(),
            token_name,
            ticker,
            0,
            None,
        );
    }

    /// Issues the lender-side note collection.
    #[only_owner]
    #[payable("EGLD")]
    #[endpoint(registerLenderNote)]
    fn register_lender_note(&self, token_name: ManagedBuffer, ticker: ManagedBuffer) {
        let payment_amount = self.call_value().egld();
        self.lender_note().issue_and_set_all_roles(
            EsdtTokenType::NonFungible,
            payment_amount.clone_value(),
            token_name,
            ticker,
            0,
            None,
        );
    }
}
