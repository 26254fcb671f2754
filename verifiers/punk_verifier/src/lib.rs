#![no_std]

multiversx_sc::imports!();

use common_errors::{
    ERROR_INVALID_COLLATERAL_ID, ERROR_INVALID_PREDICATE_DATA, ERROR_NO_PREDICATES,
};
use common_proxies::{proxy_punk_market, proxy_vault};
use common_structs::SignatureItem;

/// Verifier for punks held through the legacy marketplace: the market's
/// custodian record must point at the vault for every required punk index.
/// The bundle inventory is not consulted, only the market's books.
#[multiversx_sc::contract]
pub trait PunkVerifier {
    #[init]
    fn init(&self, vault_address: ManagedAddress, punk_market_address: ManagedAddress) {
        self.vault_address().set(vault_address);
        self.punk_market_address().set(punk_market_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[view(verify)]
    fn verify(
        &self,
        _caller: ManagedAddress,
        _signer: ManagedAddress,
        collateral_token: TokenIdentifier,
        collateral_nonce: u64,
        data: ManagedBuffer,
    ) -> bool {
        let items: ManagedVec<Self::Api, SignatureItem<Self::Api>> =
            match ManagedVec::top_decode(data) {
                Ok(items) => items,
                Err(_) => sc_panic!(ERROR_INVALID_PREDICATE_DATA),
            };
        require!(!items.is_empty(), ERROR_NO_PREDICATES);

        let vault = self.vault_address().get();
        let bundle_token: TokenIdentifier = self
            .tx()
            .to(&vault)
            .typed(proxy_vault::VaultProxy)
            .bundle_token_id()
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(collateral_token == bundle_token, ERROR_INVALID_COLLATERAL_ID);
        let exists: bool = self
            .tx()
            .to(&vault)
            .typed(proxy_vault::VaultProxy)
            .bundle_exists(collateral_nonce)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(exists, ERROR_INVALID_COLLATERAL_ID);

        let market = self.punk_market_address().get();
        for item in items.iter() {
            if let Some(message) = item.structural_error() {
                sc_panic!(message);
            }
            let custodian: ManagedAddress = self
                .tx()
                .to(&market)
                .typed(proxy_punk_market::PunkMarketProxy)
                .custodian_of(item.token_nonce)
                .returns(ReturnsResult)
                .sync_call_readonly();
            if custodian != vault {
                return false;
            }
        }
        true
    }

    #[view(getVaultAddress)]
    #[storage_mapper("vault_address")]
    fn vault_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPunkMarketAddress)]
    #[storage_mapper("punk_market_address")]
    fn punk_market_address(&self) -> SingleValueMapper<ManagedAddress>;
}
