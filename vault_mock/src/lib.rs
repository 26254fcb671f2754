#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO;

/// Bundle custody container: wraps a basket of ESDT assets behind a single
/// bundle NFT. The bundle NFT is what gets pledged as loan collateral;
/// predicate verifiers query the inventory views.
#[multiversx_sc::contract]
pub trait VaultMock:
    multiversx_sc_modules::default_issue_callbacks::DefaultIssueCallbacksModule
{
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[payable("EGLD")]
    #[endpoint(registerBundleToken)]
    fn register_bundle_token(&self, token_name: ManagedBuffer, ticker: ManagedBuffer) {
        let payment_amount = self.call_value().egld();
        self.bundle_token().issue_and_set_all_roles(
            EsdtTokenType::NonFungible,
            payment_amount.clone_value(),
            token_name,
            ticker,
            0,
            None,
        );
    }

    /// Locks the attached assets and mints a bundle NFT to the caller.
    #[payable("*")]
    #[endpoint(createBundle)]
    fn create_bundle(&self) -> u64 {
        let payments = self.call_value().all_esdt_transfers();
        require!(!payments.is_empty(), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let caller = self.blockchain().get_caller();
        let item_count = payments.len() as u32;
        let bundle = self.bundle_token().nft_create_and_send::<u32>(
            &caller,
            BigUint::from(1u64),
            &item_count,
        );

        for payment in payments.iter() {
            self.bundle_item_balance(
                bundle.token_nonce,
                &payment.token_identifier,
                payment.token_nonce,
            )
            .update(|balance| *balance += &payment.amount);
            self.bundle_assets(bundle.token_nonce)
                .insert((payment.token_identifier.clone(), payment.token_nonce));
        }
        self.bundles().insert(bundle.token_nonce);

        bundle.token_nonce
    }

    /// Burns an attached bundle NFT and releases its contents to the caller.
    #[payable("*")]
    #[endpoint(unbundle)]
    fn unbundle(&self) {
        let payment = self.call_value().single_esdt();
        self.bundle_token()
            .require_same_token(&payment.token_identifier);
        require!(
            payment.amount == BigUint::from(1u64),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        let caller = self.blockchain().get_caller();
        let bundle_nonce = payment.token_nonce;

        let mut transfers: ManagedVec<EsdtTokenPayment<Self::Api>> = ManagedVec::new();
        for (token, token_nonce) in self.bundle_assets(bundle_nonce).iter() {
            let amount = self.bundle_item_balance(bundle_nonce, &token, token_nonce).take();
            transfers.push(EsdtTokenPayment::new(token, token_nonce, amount));
        }
        self.bundle_assets(bundle_nonce).clear();
        self.bundles().swap_remove(&bundle_nonce);
        self.bundle_token().nft_burn(bundle_nonce, &BigUint::from(1u64));

        if !transfers.is_empty() {
            self.tx().to(&caller).payment(transfers).transfer();
        }
    }

    #[view(getBundleTokenId)]
    fn get_bundle_token_id(&self) -> TokenIdentifier {
        self.bundle_token().get_token_id()
    }

    #[view(bundleExists)]
    fn bundle_exists(&self, bundle_nonce: u64) -> bool {
        self.bundles().contains(&bundle_nonce)
    }

    #[view(getBundleItemBalance)]
    fn get_bundle_item_balance(
        &self,
        bundle_nonce: u64,
        token: &TokenIdentifier,
        token_nonce: u64,
    ) -> BigUint {
        self.bundle_item_balance(bundle_nonce, token, token_nonce).get()
    }

    /// Cumulative balance of an asset across every token nonce the bundle
    /// holds; the wildcard form of predicate items reads this.
    #[view(getBundleAssetBalance)]
    fn get_bundle_asset_balance(&self, bundle_nonce: u64, token: &TokenIdentifier) -> BigUint {
        let mut total = BigUint::zero();
        for (held_token, held_nonce) in self.bundle_assets(bundle_nonce).iter() {
            if &held_token == token {
                total += self.bundle_item_balance(bundle_nonce, &held_token, held_nonce).get();
            }
        }
        total
    }

    #[storage_mapper("bundle_token")]
    fn bundle_token(&self) -> NonFungibleTokenMapper<Self::Api>;

    #[storage_mapper("bundles")]
    fn bundles(&self) -> UnorderedSetMapper<u64>;

    #[storage_mapper("bundle_assets")]
    fn bundle_assets(
        &self,
        bundle_nonce: u64,
    ) -> UnorderedSetMapper<(TokenIdentifier<Self::Api>, u64)>;

    #[storage_mapper("bundle_item_balance")]
    fn bundle_item_balance(
        &self,
        bundle_nonce: u64,
        token: &TokenIdentifier,
        token_nonce: u64,
    ) -> SingleValueMapper<BigUint>;
}
