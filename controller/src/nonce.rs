use common_errors::{ERROR_MAX_USES_ZERO, ERROR_NONCE_BELOW_FLOOR, ERROR_NONCE_EXHAUSTED};
use common_structs::SignatureProperties;

multiversx_sc::imports!();

/// Replay defense for signed terms. Each (signer, nonce) pair carries a use
/// budget declared in the signature itself; exhausting the budget advances
/// the signer's floor past the nonce, killing it permanently even out of
/// order. This is orthogonal to the ledger's loan-state checks.
#[multiversx_sc::module]
pub trait NonceModule: crate::storage::Storage + common_events::EventsModule {
    /// Consumes one use. Must stay the last irreversible validation step
    /// before value movement so a rejected transaction never burns a use.
    fn use_nonce(&self, signer: &ManagedAddress, properties: &SignatureProperties) {
        require!(properties.max_uses >= 1, ERROR_MAX_USES_ZERO);

        let floor = self.nonce_floor(signer).get();
        require!(properties.nonce >= floor, ERROR_NONCE_BELOW_FLOOR);

        let uses_mapper = self.nonce_uses(signer, properties.nonce);
        let uses = uses_mapper.get();
        require!(uses < properties.max_uses, ERROR_NONCE_EXHAUSTED);

        let new_uses = uses + 1;
        if new_uses >= properties.max_uses {
            // Exhausted: reclaim the counter and advance the floor.
            uses_mapper.clear();
            self.nonce_floor(signer).set(properties.nonce + 1);
        } else {
            uses_mapper.set(new_uses);
        }
        self.nonce_used_event(signer, properties.nonce, new_uses);
    }

    /// A signer may burn one of its own nonces to invalidate outstanding
    /// signed offers without waiting for them to expire.
    fn exhaust_own_nonce(&self, signer: &ManagedAddress, nonce: u64) {
        let floor = self.nonce_floor(signer).get();
        require!(nonce >= floor, ERROR_NONCE_BELOW_FLOOR);
        self.nonce_uses(signer, nonce).set(u64::MAX);
        self.nonce_used_event(signer, nonce, u64::MAX);
    }
}
