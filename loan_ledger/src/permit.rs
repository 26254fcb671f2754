use common_constants::PERMIT_DOMAIN_NAME;
use common_errors::*;

use crate::{escrow, storage};

multiversx_sc::imports!();

/// Signed collateral-use permits: the owner of an escrowed collateral signs
/// an authorization off-chain and the counterparty consumes it atomically
/// with origination, replacing the separate authorization transaction.
#[multiversx_sc::module]
pub trait PermitModule:
    storage::Storage + escrow::EscrowModule + common_events::EventsModule
{
    /// Digest the collateral owner signs. Bound to this ledger instance and
    /// to the controller the authorization is granted to.
    #[view(getCollateralPermitDigest)]
    fn collateral_permit_digest(
        &self,
        owner: ManagedAddress,
        token: TokenIdentifier,
        nonce: u64,
        permit_nonce: u64,
        deadline: u64,
    ) -> ManagedByteArray<Self::Api, 32> {
        let mut encoded = ManagedBuffer::new_from_bytes(PERMIT_DOMAIN_NAME);
        encoded.append(self.blockchain().get_sc_address().as_managed_buffer());
        encoded.append(self.controller_address().get().as_managed_buffer());
        encoded.append(owner.as_managed_buffer());
        encoded.append(token.as_managed_buffer());
        let _ = nonce.dep_encode(&mut encoded);
        let _ = permit_nonce.dep_encode(&mut encoded);
        let _ = deadline.dep_encode(&mut encoded);
        self.crypto().keccak256(&encoded)
    }

    /// Called by the controller on the permit origination path. Validates
    /// and burns the permit, then flips the escrowed collateral to
    /// authorized. Failures here surface to the origination caller as this
    /// contract's own errors.
    #[endpoint(consumeCollateralPermit)]
    fn consume_collateral_permit(
        &self,
        owner: ManagedAddress,
        token: TokenIdentifier,
        nonce: u64,
        permit_nonce: u64,
        deadline: u64,
        signature: ManagedBuffer,
    ) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.controller_address().get(),
            ERROR_ONLY_CONTROLLER
        );

        let now = self.blockchain().get_block_timestamp();
        require!(deadline >= now, ERROR_PERMIT_EXPIRED);
        require!(
            !self.used_permit_nonces(&owner).contains(&permit_nonce),
            ERROR_PERMIT_NONCE_USED
        );

        let owner_mapper = self.collateral_owner(&token, nonce);
        require!(!owner_mapper.is_empty(), ERROR_COLLATERAL_NOT_IN_ESCROW);
        require!(owner_mapper.get() == owner, ERROR_COLLATERAL_NOT_IN_ESCROW);

        let digest = self.collateral_permit_digest(
            owner.clone(),
            token.clone(),
            nonce,
            permit_nonce,
            deadline,
        );
        self.crypto().verify_ed25519(
            owner.as_managed_buffer(),
            digest.as_managed_buffer(),
            &signature,
        );

        self.used_permit_nonces(&owner).insert(permit_nonce);
        self.collateral_authorized(&token, nonce).set(true);
        self.collateral_permit_used_event(&owner, &token, nonce, permit_nonce);
    }
}
