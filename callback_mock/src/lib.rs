#![no_std]

multiversx_sc::imports!();

use common_proxies::proxy_controller;
use common_structs::{BorrowerSpec, LoanTerms, SignatureProperties, SigningSide};

/// Smart-contract borrower for callback tests. The callback data selects the
/// behavior: accept silently, fail, or attempt to re-enter the controller
/// while the origination window is still open.
#[multiversx_sc::contract]
pub trait CallbackMock {
    #[init]
    fn init(&self, controller_address: ManagedAddress) {
        self.controller_address().set(controller_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Opens a loan with this contract as the borrower, pledging a
    /// collateral token it holds. The controller sees this contract as the
    /// caller, so the borrower-side callback rules apply.
    #[endpoint(initiateLoan)]
    fn initiate_loan(
        &self,
        terms: LoanTerms<Self::Api>,
        properties: SignatureProperties,
        side: SigningSide,
        signature: ManagedBuffer,
        extra_data: ManagedBuffer,
        lender: ManagedAddress,
        callback_data: ManagedBuffer,
    ) -> u64 {
        let own_address = self.blockchain().get_sc_address();
        let collateral_token = terms.collateral_token.clone();
        let collateral_nonce = terms.collateral_nonce;
        self.tx()
            .to(self.controller_address().get())
            .typed(proxy_controller::ControllerProxy)
            .initialize_loan(
                terms,
                properties,
                side,
                signature,
                extra_data,
                lender,
                BorrowerSpec {
                    address: own_address,
                    callback_data,
                },
            )
            .single_esdt(&collateral_token, collateral_nonce, &BigUint::from(1u64))
            .returns(ReturnsResult)
            .sync_call()
    }

    #[endpoint(onLoanOriginated)]
    fn on_loan_originated(&self, loan_id: u64, data: ManagedBuffer) {
        if data == ManagedBuffer::from(b"fail") {
            sc_panic!("callback failed");
        }
        if data == ManagedBuffer::from(b"reenter-initialize") {
            self.attempt_nested_initialize();
        }
        if data == ManagedBuffer::from(b"reenter-refinance") {
            self.attempt_nested_refinance(loan_id);
        }
        self.last_callback_loan_id().set(loan_id);
    }

    /// A nested origination attempt. The controller's guard must reject it
    /// before looking at any of these values.
    fn attempt_nested_initialize(&self) {
        let own_address = self.blockchain().get_sc_address();
        let terms = self.dummy_terms();
        let borrower = BorrowerSpec {
            address: own_address.clone(),
            callback_data: ManagedBuffer::new(),
        };
        self.tx()
            .to(self.controller_address().get())
            .typed(proxy_controller::ControllerProxy)
            .initialize_loan(
                terms,
                SignatureProperties { nonce: 0, max_uses: 1 },
                SigningSide::Lender,
                ManagedBuffer::new(),
                ManagedBuffer::new(),
                own_address,
                borrower,
            )
            .returns(ReturnsResult)
            .sync_call();
    }

    fn attempt_nested_refinance(&self, loan_id: u64) {
        self.tx()
            .to(self.controller_address().get())
            .typed(proxy_controller::ControllerProxy)
            .refinance_loan(loan_id, self.dummy_terms())
            .returns(ReturnsResult)
            .sync_call();
    }

    fn dummy_terms(&self) -> LoanTerms<Self::Api> {
        LoanTerms {
            duration_seconds: 3_600,
            principal: BigUint::from(1u64),
            interest_rate: BigUint::from(1u64),
            collateral_token: TokenIdentifier::from("DUMMY-123456"),
            collateral_nonce: 1,
            payable_currency: TokenIdentifier::from("DUMMY-654321"),
            deadline: 0,
            affiliate_code: ManagedByteArray::default(),
        }
    }

    #[view(getLastCallbackLoanId)]
    #[storage_mapper("last_callback_loan_id")]
    fn last_callback_loan_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("controller_address")]
    fn controller_address(&self) -> SingleValueMapper<ManagedAddress>;
}
