#![no_std]

multiversx_sc::imports!();

use common_errors::{ERROR_INVALID_PREDICATE_DATA, ERROR_NO_PREDICATES};
use common_structs::SignatureItem;

/// Predicate verifier for bare (non-bundled) collateral: the pledged token
/// itself must match the item requirement. Pure data comparison, no custody
/// lookups.
#[multiversx_sc::contract]
pub trait UnvaultedVerifier {
    #[init]
    fn init(&self) {}

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

        for item in items.iter() {
            if let Some(message) = item.structural_error() {
                sc_panic!(message);
            }
            if item.asset != collateral_token {
                return false;
            }
            if !item.any_id_allowed && item.token_nonce != collateral_nonce {
                return false;
            }
        }
        true
    }
}
