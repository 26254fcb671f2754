use common_constants::MAX_BATCH_ELEMENTS;
use common_errors::*;
use common_structs::{is_valid_split_bps, AffiliateSplit, CurrencyConfig};

multiversx_sc::imports!();

/// Origination configuration: the three allow-lists (payable currencies,
/// collateral tokens, predicate verifiers) plus affiliate splits.
///
/// The owner grants the manager role; only managers mutate the registries.
/// Batch endpoints take parallel arrays, emit one event per entry and cap
/// the batch size.
#[multiversx_sc::module]
pub trait ConfigModule: crate::storage::Storage + common_events::EventsModule {
    #[only_owner]
    #[endpoint(addRegistryManager)]
    fn add_registry_manager(&self, manager: ManagedAddress) {
        require!(!manager.is_zero(), ERROR_ZERO_ADDRESS);
        self.registry_managers().insert(manager);
    }

    #[only_owner]
    #[endpoint(removeRegistryManager)]
    fn remove_registry_manager(&self, manager: ManagedAddress) {
        self.registry_managers().swap_remove(&manager);
    }

    #[endpoint(setAllowedCurrencies)]
    fn set_allowed_currencies(
        &self,
        tokens: ManagedVec<TokenIdentifier>,
        configs: ManagedVec<CurrencyConfig<Self::Api>>,
    ) {
        self.require_manager();
        self.validate_batch(tokens.len(), configs.len());

        for index in 0..tokens.len() {
            let token: TokenIdentifier = tokens.get(index).clone();
            let mut config: CurrencyConfig<Self::Api> = configs.get(index).clone();
            require!(
                token.is_valid_esdt_identifier(),
                ERROR_INVALID_TOKEN_IDENTIFIER
            );
            if !config.enabled {
                // Disabling a currency resets its minimum.
                config.min_principal = BigUint::zero();
                self.allowed_currencies().swap_remove(&token);
            } else {
                self.allowed_currencies().insert(token.clone());
            }
            self.currency_allowance_set_event(&token, config.enabled, &config.min_principal);
            self.currency_config(&token).set(config);
        }
    }

    #[endpoint(setAllowedCollaterals)]
    fn set_allowed_collaterals(
        &self,
        tokens: ManagedVec<TokenIdentifier>,
        alloweds: ManagedVec<bool>,
    ) {
        self.require_manager();
        self.validate_batch(tokens.len(), alloweds.len());

        for index in 0..tokens.len() {
            let token: TokenIdentifier = tokens.get(index).clone();
            let allowed = alloweds.get(index);
            require!(
                token.is_valid_esdt_identifier(),
                ERROR_INVALID_TOKEN_IDENTIFIER
            );
            if allowed {
                self.allowed_collaterals().insert(token.clone());
            } else {
                self.allowed_collaterals().swap_remove(&token);
            }
            self.collateral_allowance_set_event(&token, allowed);
            self.collateral_allowed(&token).set(allowed);
        }
    }

    #[endpoint(setAllowedVerifiers)]
    fn set_allowed_verifiers(
        &self,
        addresses: ManagedVec<ManagedAddress>,
        alloweds: ManagedVec<bool>,
    ) {
        self.require_manager();
        self.validate_batch(addresses.len(), alloweds.len());

        for index in 0..addresses.len() {
            let address: ManagedAddress = addresses.get(index).clone();
            let allowed = alloweds.get(index);
            require!(!address.is_zero(), ERROR_ZERO_ADDRESS);
            if allowed {
                self.allowed_verifiers().insert(address.clone());
            } else {
                self.allowed_verifiers().swap_remove(&address);
            }
            self.verifier_allowance_set_event(&address, allowed);
            self.verifier_allowed(&address).set(allowed);
        }
    }

    #[endpoint(setAffiliateSplits)]
    fn set_affiliate_splits(
        &self,
        codes: ManagedVec<ManagedByteArray<Self::Api, 32>>,
        splits: ManagedVec<AffiliateSplit<Self::Api>>,
    ) {
        self.require_manager();
        self.validate_batch(codes.len(), splits.len());

        for index in 0..codes.len() {
            let code: ManagedByteArray<Self::Api, 32> = codes.get(index).clone();
            let split: AffiliateSplit<Self::Api> = splits.get(index).clone();
            require!(
                code != ManagedByteArray::default(),
                ERROR_ZERO_AFFILIATE_CODE
            );
            require!(!split.affiliate.is_zero(), ERROR_ZERO_ADDRESS);
            require!(
                is_valid_split_bps(&split.split_bps),
                ERROR_AFFILIATE_SPLIT_TOO_HIGH
            );
            self.affiliate_split_set_event(&code, &split.affiliate, &split.split_bps);
            self.affiliate_splits(&code).set(split);
        }
    }

    fn require_manager(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.registry_managers().contains(&caller), ERROR_NOT_MANAGER);
    }

    fn validate_batch(&self, keys: usize, values: usize) {
        require!(keys > 0, ERROR_ZERO_ARRAY_ELEMENTS);
        require!(keys <= MAX_BATCH_ELEMENTS, ERROR_ARRAY_TOO_MANY_ELEMENTS);
        require!(keys == values, ERROR_BATCH_LENGTH_MISMATCH);
    }
}
