use common_errors::*;

use crate::storage;

multiversx_sc::imports!();

/// Escrow for the party that is not sending the transaction: lenders
/// pre-deposit funds, borrowers pre-deposit collateral. Balances stay
/// withdrawable until an origination consumes them.
#[multiversx_sc::module]
pub trait EscrowModule: storage::Storage + common_events::EventsModule {
    #[payable("*")]
    #[endpoint(depositFunds)]
    fn deposit_funds(&self) {
        let caller = self.blockchain().get_caller();
        self.deposit_funds_into(&caller);
    }

    /// Same as `depositFunds`, credited to another account. Lets anyone top
    /// up a contract counterparty that cannot send deposits itself.
    #[payable("*")]
    #[endpoint(depositFundsFor)]
    fn deposit_funds_for(&self, beneficiary: ManagedAddress) {
        self.deposit_funds_into(&beneficiary);
    }

    fn deposit_funds_into(&self, beneficiary: &ManagedAddress) {
        let payments = self.call_value().all_esdt_transfers();
        require!(!payments.is_empty(), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        for payment in payments.iter() {
            require!(payment.token_nonce == 0, ERROR_INVALID_PAYMENT);
            require!(
                payment.amount > BigUint::zero(),
                ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
            );
            self.funds_escrow(beneficiary, &payment.token_identifier)
                .update(|balance| *balance += &payment.amount);
            self.funds_deposited_event(beneficiary, &payment.token_identifier, &payment.amount);
        }
    }

    #[endpoint(withdrawFunds)]
    fn withdraw_funds(&self, token: TokenIdentifier, amount: BigUint) {
        require!(
            amount > BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
        let caller = self.blockchain().get_caller();
        let mapper = self.funds_escrow(&caller, &token);
        let balance = mapper.get();
        require!(balance >= amount, ERROR_INSUFFICIENT_ESCROW);
        mapper.set(&balance - &amount);

        self.funds_withdrawn_event(&caller, &token, &amount);
        self.tx().to(&caller).single_esdt(&token, 0, &amount).transfer();
    }

    /// Escrows an attached collateral token. With `authorize` set, the
    /// controller may pledge it on the depositor's behalf right away;
    /// otherwise a later `setCollateralAuthorization` (or a signed permit)
    /// is needed.
    #[payable("*")]
    #[endpoint(depositCollateral)]
    fn deposit_collateral(&self, authorize: bool) {
        let payment = self.call_value().single_esdt();
        require!(payment.token_nonce != 0, ERROR_INVALID_PAYMENT);
        require!(
            payment.amount == BigUint::from(1u64),
            ERROR_INVALID_PAYMENT
        );

        let caller = self.blockchain().get_caller();
        self.collateral_owner(&payment.token_identifier, payment.token_nonce)
            .set(&caller);
        self.collateral_authorized(&payment.token_identifier, payment.token_nonce)
            .set(authorize);

        self.collateral_deposited_event(
            &caller,
            &payment.token_identifier,
            payment.token_nonce,
            authorize,
        );
    }

    #[endpoint(withdrawCollateral)]
    fn withdraw_collateral(&self, token: TokenIdentifier, nonce: u64) {
        let caller = self.blockchain().get_caller();
        let owner_mapper = self.collateral_owner(&token, nonce);
        require!(!owner_mapper.is_empty(), ERROR_COLLATERAL_NOT_IN_ESCROW);
        require!(owner_mapper.get() == caller, ERROR_NOT_COLLATERAL_OWNER);

        owner_mapper.clear();
        self.collateral_authorized(&token, nonce).clear();

        self.collateral_withdrawn_event(&caller, &token, nonce);
        self.tx()
            .to(&caller)
            .single_esdt(&token, nonce, &BigUint::from(1u64))
            .transfer();
    }

    #[endpoint(setCollateralAuthorization)]
    fn set_collateral_authorization(&self, token: TokenIdentifier, nonce: u64, authorized: bool) {
        let caller = self.blockchain().get_caller();
        let owner_mapper = self.collateral_owner(&token, nonce);
        require!(!owner_mapper.is_empty(), ERROR_COLLATERAL_NOT_IN_ESCROW);
        require!(owner_mapper.get() == caller, ERROR_NOT_COLLATERAL_OWNER);

        self.collateral_authorized(&token, nonce).set(authorized);
        self.collateral_authorization_set_event(&caller, &token, nonce, authorized);
    }

    /// Consumes an escrowed collateral for a new loan: ownership and
    /// authorization records are cleared, the token stays in custody.
    fn consume_escrowed_collateral(
        &self,
        token: &TokenIdentifier,
        nonce: u64,
        expected_owner: &ManagedAddress,
    ) {
        let owner_mapper = self.collateral_owner(token, nonce);
        require!(!owner_mapper.is_empty(), ERROR_COLLATERAL_NOT_IN_ESCROW);
        require!(
            &owner_mapper.get() == expected_owner,
            ERROR_COLLATERAL_NOT_IN_ESCROW
        );
        require!(
            self.collateral_authorized(token, nonce).get(),
            ERROR_COLLATERAL_NOT_AUTHORIZED
        );
        owner_mapper.clear();
        self.collateral_authorized(token, nonce).clear();
    }

    /// Debits an absent party's escrowed funds for one leg of a loan
    /// operation.
    fn debit_funds_escrow(
        &self,
        account: &ManagedAddress,
        token: &TokenIdentifier,
        amount: &BigUint,
    ) {
        if amount == &BigUint::zero() {
            return;
        }
        let mapper = self.funds_escrow(account, token);
        let balance = mapper.get();
        require!(&balance >= amount, ERROR_INSUFFICIENT_ESCROW);
        mapper.set(&balance - amount);
    }
}
