#![no_std]

multiversx_sc::imports!();

/// Legacy punk marketplace stand-in: tracks which address holds custody of
/// each punk index. The punk verifier reads this instead of vault inventory.
#[multiversx_sc::contract]
pub trait PunkMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setCustodian)]
    fn set_custodian(&self, punk_index: u64, custodian: ManagedAddress) {
        self.custodian(punk_index).set(custodian);
    }

    #[view(getCustodianOf)]
    fn get_custodian_of(&self, punk_index: u64) -> ManagedAddress {
        self.custodian(punk_index).get()
    }

    #[storage_mapper("custodian")]
    fn custodian(&self, punk_index: u64) -> SingleValueMapper<ManagedAddress>;
}
