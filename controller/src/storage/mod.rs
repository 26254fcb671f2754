use common_structs::{AffiliateSplit, CurrencyConfig};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// The loan ledger this controller opens and replaces loans on.
    #[view(getLedgerAddress)]
    #[storage_mapper("ledger_address")]
    fn ledger_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Addresses allowed to mutate the registries. Granted by the owner.
    #[view(getRegistryManagers)]
    #[storage_mapper("registry_managers")]
    fn registry_managers(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Per-currency allowance and minimum principal.
    #[storage_mapper("currency_config")]
    fn currency_config(&self, token: &TokenIdentifier) -> SingleValueMapper<CurrencyConfig<Self::Api>>;

    /// Enumeration index over enabled currencies.
    #[view(getAllowedCurrencies)]
    #[storage_mapper("allowed_currencies")]
    fn allowed_currencies(&self) -> UnorderedSetMapper<TokenIdentifier>;

    #[storage_mapper("collateral_allowed")]
    fn collateral_allowed(&self, token: &TokenIdentifier) -> SingleValueMapper<bool>;

    #[view(getAllowedCollaterals)]
    #[storage_mapper("allowed_collaterals")]
    fn allowed_collaterals(&self) -> UnorderedSetMapper<TokenIdentifier>;

    #[storage_mapper("verifier_allowed")]
    fn verifier_allowed(&self, verifier: &ManagedAddress) -> SingleValueMapper<bool>;

    #[view(getAllowedVerifiers)]
    #[storage_mapper("allowed_verifiers")]
    fn allowed_verifiers(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// "owner approved operator to act on owner's behalf", per pair.
    #[storage_mapper("approvals")]
    fn approvals(
        &self,
        owner: &ManagedAddress,
        operator: &ManagedAddress,
    ) -> SingleValueMapper<bool>;

    /// First nonce still usable by a signer. Advances past every exhausted
    /// nonce and never moves backwards.
    #[view(getNonceFloor)]
    #[storage_mapper("nonce_floor")]
    fn nonce_floor(&self, signer: &ManagedAddress) -> SingleValueMapper<u64>;

    /// Consumption count of one (signer, nonce) pair.
    #[view(getNonceUses)]
    #[storage_mapper("nonce_uses")]
    fn nonce_uses(&self, signer: &ManagedAddress, nonce: u64) -> SingleValueMapper<u64>;

    /// Registered affiliate splits by 32-byte code.
    #[storage_mapper("affiliate_splits")]
    fn affiliate_splits(
        &self,
        code: &ManagedByteArray<Self::Api, 32>,
    ) -> SingleValueMapper<AffiliateSplit<Self::Api>>;

    // Reentrancy guard around the borrower callback window.
    #[view(isOriginationOngoing)]
    #[storage_mapper("origination_ongoing")]
    fn origination_ongoing(&self) -> SingleValueMapper<bool>;
}
