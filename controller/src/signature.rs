use common_constants::{SIGNATURE_MAGIC_VALUE, SIGNING_DOMAIN_NAME, SIGNING_DOMAIN_VERSION};
use common_errors::ERROR_INVALID_SIGNATURE;
use common_proxies::proxy_contract_signer;
use common_structs::{ItemsPredicate, LoanTerms, SignatureProperties, SigningSide};

multiversx_sc::imports!();

/// Typed-data digests over loan terms and their validation against either
/// kind of signer.
///
/// A user-account signer is checked with ed25519 against its address bytes.
/// A contract signer is asked to validate the digest itself and must return
/// the magic value; the appended extra data travels with the signature and
/// contracts are free to ignore it.
#[multiversx_sc::module]
pub trait SignatureModule: crate::storage::Storage {
    /// Domain separator binding signatures to this protocol, version and
    /// deployed controller instance.
    fn signing_domain_separator(&self) -> ManagedByteArray<Self::Api, 32> {
        let mut encoded = ManagedBuffer::new_from_bytes(SIGNING_DOMAIN_NAME);
        encoded.append(&ManagedBuffer::new_from_bytes(SIGNING_DOMAIN_VERSION));
        encoded.append(self.blockchain().get_sc_address().as_managed_buffer());
        self.crypto().keccak256(&encoded)
    }

    /// keccak256(domain ‖ struct-hash(terms, sig properties, side)).
    fn compute_loan_terms_digest(
        &self,
        terms: &LoanTerms<Self::Api>,
        properties: &SignatureProperties,
        side: SigningSide,
    ) -> ManagedByteArray<Self::Api, 32> {
        self.finish_digest(self.struct_encoding(terms, properties, side))
    }

    /// Items-path digest: the predicate array is hashed into the signed
    /// struct, so a signature commits to the exact requirements.
    fn compute_items_terms_digest(
        &self,
        terms: &LoanTerms<Self::Api>,
        properties: &SignatureProperties,
        side: SigningSide,
        predicates: &ManagedVec<ItemsPredicate<Self::Api>>,
    ) -> ManagedByteArray<Self::Api, 32> {
        let mut predicates_encoded = ManagedBuffer::new();
        let _ = predicates.dep_encode(&mut predicates_encoded);
        let predicates_hash = self.crypto().keccak256(&predicates_encoded);

        let mut encoded = self.struct_encoding(terms, properties, side);
        encoded.append(predicates_hash.as_managed_buffer());
        self.finish_digest(encoded)
    }

    fn struct_encoding(
        &self,
        terms: &LoanTerms<Self::Api>,
        properties: &SignatureProperties,
        side: SigningSide,
    ) -> ManagedBuffer {
        let mut encoded = ManagedBuffer::new();
        let _ = terms.dep_encode(&mut encoded);
        let _ = properties.dep_encode(&mut encoded);
        let _ = side.dep_encode(&mut encoded);
        encoded
    }

    fn finish_digest(&self, struct_encoding: ManagedBuffer) -> ManagedByteArray<Self::Api, 32> {
        let struct_hash = self.crypto().keccak256(&struct_encoding);
        let mut encoded = ManagedBuffer::new();
        encoded.append(self.signing_domain_separator().as_managed_buffer());
        encoded.append(struct_hash.as_managed_buffer());
        self.crypto().keccak256(&encoded)
    }

    fn validate_counterparty_signature(
        &self,
        signer: &ManagedAddress,
        digest: &ManagedByteArray<Self::Api, 32>,
        signature: &ManagedBuffer,
        extra_data: &ManagedBuffer,
    ) {
        if self.blockchain().is_smart_contract(signer) {
            let mut payload = signature.clone();
            payload.append(extra_data);
            let result: ManagedBuffer = self
                .tx()
                .to(signer)
                .typed(proxy_contract_signer::ContractSignerProxy)
                .is_valid_signature(digest, payload)
                .returns(ReturnsResult)
                .sync_call_readonly();
            require!(
                result == ManagedBuffer::new_from_bytes(SIGNATURE_MAGIC_VALUE),
                ERROR_INVALID_SIGNATURE
            );
        } else {
            // Addresses are ed25519 public keys; a bad signature aborts the
            // transaction inside the crypto hook.
            self.crypto().verify_ed25519(
                signer.as_managed_buffer(),
                digest.as_managed_buffer(),
                signature,
            );
        }
    }
}
