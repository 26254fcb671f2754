#![no_std]

multiversx_sc::imports!();

use common_errors::{
    ERROR_INVALID_COLLATERAL_ID, ERROR_INVALID_PREDICATE_DATA, ERROR_NO_PREDICATES,
};
use common_proxies::proxy_vault;
use common_structs::SignatureItem;

/// Generic multi-item predicate verifier over bundle vaults. Answers whether
/// a bundle's inventory satisfies every encoded item requirement. Stateless
/// beyond the vault wiring; never mutates anything.
#[multiversx_sc::contract]
pub trait ItemsVerifier {
    #[init]
    fn init(&self, vault_address: ManagedAddress) {
        self.vault_address().set(vault_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// True iff every item is satisfied by the bundle's current contents.
    /// Reverts on structurally invalid input; returns false for unmet items.
    #[view(verify)]
    fn verify(
        &self,
        _caller: ManagedAddress,
        _signer: ManagedAddress,
        collateral_token: TokenIdentifier,
        collateral_nonce: u64,
        data: ManagedBuffer,
    ) -> bool {
        let items = self.decode_items(&data);
        require!(!items.is_empty(), ERROR_NO_PREDICATES);

        let vault = self.vault_address().get();
        self.require_known_bundle(&vault, &collateral_token, collateral_nonce);

        for item in items.iter() {
            if let Some(message) = item.structural_error() {
                sc_panic!(message);
            }
            let held = if item.any_id_allowed {
                self.tx()
                    .to(&vault)
                    .typed(proxy_vault::VaultProxy)
                    .bundle_asset_balance(collateral_nonce, &item.asset)
                    .returns(ReturnsResult)
                    .sync_call_readonly()
            } else {
                self.tx()
                    .to(&vault)
                    .typed(proxy_vault::VaultProxy)
                    .bundle_item_balance(collateral_nonce, &item.asset, item.token_nonce)
                    .returns(ReturnsResult)
                    .sync_call_readonly()
            };
            if held < item.required_amount() {
                return false;
            }
        }
        true
    }

    fn decode_items(&self, data: &ManagedBuffer) -> ManagedVec<Self::Api, SignatureItem<Self::Api>> {
        match ManagedVec::top_decode(data.clone()) {
            Ok(items) => items,
            Err(_) => sc_panic!(ERROR_INVALID_PREDICATE_DATA),
        }
    }

    /// The collateral must be a bundle this vault actually issued; anything
    /// else cannot map back to an inventory and is rejected outright.
    fn require_known_bundle(
        &self,
        vault: &ManagedAddress,
        collateral_token: &TokenIdentifier,
        collateral_nonce: u64,
    ) {
        let bundle_token: TokenIdentifier = self
            .tx()
            .to(vault)
            .typed(proxy_vault::VaultProxy)
            .bundle_token_id()
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(collateral_token == &bundle_token, ERROR_INVALID_COLLATERAL_ID);

        let exists: bool = self
            .tx()
            .to(vault)
            .typed(proxy_vault::VaultProxy)
            .bundle_exists(collateral_nonce)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(exists, ERROR_INVALID_COLLATERAL_ID);
    }

    #[view(getVaultAddress)]
    #[storage_mapper("vault_address")]
    fn vault_address(&self) -> SingleValueMapper<ManagedAddress>;
}
