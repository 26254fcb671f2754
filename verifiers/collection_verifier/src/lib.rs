#![no_std]

multiversx_sc::imports!();

use common_errors::{
    ERROR_INVALID_COLLATERAL_ID, ERROR_INVALID_PREDICATE_DATA, ERROR_NO_PREDICATES,
};
use common_proxies::proxy_vault;
use common_structs::SignatureItem;

/// Collection-wide offer verifier: any token of the named collection
/// satisfies the item, whether pledged bare or held inside a bundle.
/// Membership only; amounts are not compared.
#[multiversx_sc::contract]
pub trait CollectionVerifier {
    #[init]
    fn init(&self, vault_address: ManagedAddress) {
        self.vault_address().set(vault_address);
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
        let is_bundle = collateral_token == bundle_token;
        if is_bundle {
            let exists: bool = self
                .tx()
                .to(&vault)
                .typed(proxy_vault::VaultProxy)
                .bundle_exists(collateral_nonce)
                .returns(ReturnsResult)
                .sync_call_readonly();
            require!(exists, ERROR_INVALID_COLLATERAL_ID);
        }

        for item in items.iter() {
            if let Some(message) = item.structural_error() {
                sc_panic!(message);
            }
            if !is_bundle {
                if item.asset != collateral_token {
                    return false;
                }
                continue;
            }
            let held: BigUint = self
                .tx()
                .to(&vault)
                .typed(proxy_vault::VaultProxy)
                .bundle_asset_balance(collateral_nonce, &item.asset)
                .returns(ReturnsResult)
                .sync_call_readonly();
            if held == BigUint::zero() {
                return false;
            }
        }
        true
    }

    #[view(getVaultAddress)]
    #[storage_mapper("vault_address")]
    fn vault_address(&self) -> SingleValueMapper<ManagedAddress>;
}
