#![no_std]

multiversx_sc::imports!();

use common_constants::SIGNATURE_MAGIC_VALUE;

/// Contract counterparty signer. Accepts or rejects digests wholesale, and
/// can demand that the validation payload ends with a specific extra-data
/// suffix, mirroring contracts that carry context in the appended data.
#[multiversx_sc::contract]
pub trait SignerMock {
    #[init]
    fn init(&self, accept: bool, required_extra_data: ManagedBuffer) {
        self.accept().set(accept);
        self.required_extra_data().set(required_extra_data);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[view(isValidSignature)]
    fn is_valid_signature(
        &self,
        _digest: ManagedByteArray<Self::Api, 32>,
        payload: ManagedBuffer,
    ) -> ManagedBuffer {
        if !self.accept().get() {
            return ManagedBuffer::new();
        }
        let required = self.required_extra_data().get();
        if !required.is_empty() && !self.ends_with(&payload, &required) {
            return ManagedBuffer::new();
        }
        ManagedBuffer::from(SIGNATURE_MAGIC_VALUE)
    }

    fn ends_with(&self, payload: &ManagedBuffer, suffix: &ManagedBuffer) -> bool {
        if payload.len() < suffix.len() {
            return false;
        }
        match payload.copy_slice(payload.len() - suffix.len(), suffix.len()) {
            Some(tail) => &tail == suffix,
            None => false,
        }
    }

    #[storage_mapper("accept")]
    fn accept(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("required_extra_data")]
    fn required_extra_data(&self) -> SingleValueMapper<ManagedBuffer>;
}
