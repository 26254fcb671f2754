#![allow(dead_code)]

use crate::{constants::*, proxys::*};

use common_structs::{
    AffiliateSplit, BorrowerSpec, CurrencyConfig, ItemsPredicate, LoanTerms, SignatureItem,
    SignatureProperties, SigningSide,
};
use ed25519_dalek::{Signer, SigningKey};
use multiversx_sc::{
    codec::TopEncode,
    types::{
        Address, BigUint, EsdtLocalRole, EsdtTokenPayment, ManagedAddress, ManagedBuffer,
        ManagedByteArray, ManagedVec, TestTokenIdentifier, TokenIdentifier,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, ReturnsNewManagedAddress, ReturnsResult},
    ScenarioTxRun, ScenarioTxWhitebox, ScenarioWorld,
};

use loan_ledger::storage::Storage as LedgerStorage;
use vault_mock::VaultMock;

pub static NFT_ROLES: &[EsdtLocalRole] = &[EsdtLocalRole::NftCreate, EsdtLocalRole::NftBurn];

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(CONTROLLER_PATH, controller::ContractBuilder);
    blockchain.register_contract(LEDGER_PATH, loan_ledger::ContractBuilder);
    blockchain.register_contract(FEE_CONTROLLER_PATH, fee_controller::ContractBuilder);
    blockchain.register_contract(ITEMS_VERIFIER_PATH, items_verifier::ContractBuilder);
    blockchain.register_contract(UNVAULTED_VERIFIER_PATH, unvaulted_verifier::ContractBuilder);
    blockchain.register_contract(COLLECTION_VERIFIER_PATH, collection_verifier::ContractBuilder);
    blockchain.register_contract(PUNK_VERIFIER_PATH, punk_verifier::ContractBuilder);
    blockchain.register_contract(VAULT_MOCK_PATH, vault_mock::ContractBuilder);
    blockchain.register_contract(PUNK_MOCK_PATH, punk_mock::ContractBuilder);
    blockchain.register_contract(CALLBACK_MOCK_PATH, callback_mock::ContractBuilder);
    blockchain.register_contract(SIGNER_MOCK_PATH, signer_mock::ContractBuilder);

    blockchain
}

/// Deterministic ed25519 identities for parties that must produce real
/// signatures: the account address is the verifying key, exactly as on
/// chain.
pub fn signing_key(seed: u8) -> SigningKey {
    SigningKey::from_bytes(&[seed; 32])
}

pub fn key_address(key: &SigningKey) -> Address {
    Address::from(key.verifying_key().to_bytes())
}

pub struct OriginationTestState {
    pub world: ScenarioWorld,
    pub controller_sc: ManagedAddress<StaticApi>,
    pub ledger_sc: ManagedAddress<StaticApi>,
    pub fee_controller_sc: ManagedAddress<StaticApi>,
    pub items_verifier_sc: ManagedAddress<StaticApi>,
    pub unvaulted_verifier_sc: ManagedAddress<StaticApi>,
    pub collection_verifier_sc: ManagedAddress<StaticApi>,
    pub punk_verifier_sc: ManagedAddress<StaticApi>,
    pub vault_sc: ManagedAddress<StaticApi>,
    pub punk_market_sc: ManagedAddress<StaticApi>,
    pub borrower_key: SigningKey,
    pub lender_key: SigningKey,
    pub second_lender_key: SigningKey,
    pub borrower: Address,
    pub lender: Address,
    pub second_lender: Address,
}

impl OriginationTestState {
    pub fn new() -> Self {
        let mut world = world();
        world.current_block().block_timestamp(0);

        world.account(OWNER_ADDRESS).nonce(1);
        world.account(OPERATOR_ADDRESS).nonce(1);
        world.account(STRANGER_ADDRESS).nonce(1);

        let fee_controller_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_fee_controller::FeeControllerProxy)
            .init()
            .code(FEE_CONTROLLER_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let ledger_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_ledger::LoanLedgerProxy)
            .init(&fee_controller_sc)
            .code(LEDGER_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let controller_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_controller::ControllerProxy)
            .init(&ledger_sc)
            .code(CONTROLLER_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&ledger_sc)
            .typed(proxy_ledger::LoanLedgerProxy)
            .set_controller(&controller_sc)
            .run();

        // Note collections: roles + token ids seeded directly, the issue
        // flow is not under test.
        world.set_esdt_local_roles(ledger_sc.clone(), BORROWER_NOTE_TOKEN.as_bytes(), NFT_ROLES);
        world.set_esdt_local_roles(ledger_sc.clone(), LENDER_NOTE_TOKEN.as_bytes(), NFT_ROLES);
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ledger_sc.clone())
            .whitebox(loan_ledger::contract_obj, |sc| {
                sc.borrower_note()
                    .set_token_id(BORROWER_NOTE_TOKEN.to_token_identifier());
                sc.lender_note()
                    .set_token_id(LENDER_NOTE_TOKEN.to_token_identifier());
            });

        let vault_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_vault::VaultProxy)
            .init()
            .code(VAULT_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();
        world.set_esdt_local_roles(vault_sc.clone(), BUNDLE_TOKEN.as_bytes(), NFT_ROLES);
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(vault_sc.clone())
            .whitebox(vault_mock::contract_obj, |sc| {
                sc.bundle_token()
                    .set_token_id(BUNDLE_TOKEN.to_token_identifier());
            });

        let punk_market_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_punk_market::PunkMarketProxy)
            .init()
            .code(PUNK_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let items_verifier_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_verifier::PredicateVerifierProxy)
            .init_with_vault(&vault_sc)
            .code(ITEMS_VERIFIER_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();
        let unvaulted_verifier_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_verifier::PredicateVerifierProxy)
            .init()
            .code(UNVAULTED_VERIFIER_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();
        let collection_verifier_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_verifier::PredicateVerifierProxy)
            .init_with_vault(&vault_sc)
            .code(COLLECTION_VERIFIER_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();
        let punk_verifier_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_verifier::PredicateVerifierProxy)
            .init_with_punk_market(&vault_sc, &punk_market_sc)
            .code(PUNK_VERIFIER_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let borrower_key = signing_key(1);
        let lender_key = signing_key(2);
        let second_lender_key = signing_key(3);
        let borrower = key_address(&borrower_key);
        let lender = key_address(&lender_key);
        let second_lender = key_address(&second_lender_key);

        world
            .account(borrower.clone())
            .nonce(1)
            .esdt_balance(USDC_TOKEN, BigUint::from(INITIAL_FUNDS))
            .esdt_nft_balance(COLLATERAL_TOKEN, 1, BigUint::from(1u64), ())
            .esdt_nft_balance(COLLATERAL_TOKEN, 2, BigUint::from(1u64), ())
            .esdt_nft_balance(OTHER_COLLATERAL_TOKEN, 1, BigUint::from(1u64), ())
            .esdt_nft_balance(ITEM_TOKEN, 1, BigUint::from(5u64), ())
            .esdt_nft_balance(ITEM_TOKEN, 2, BigUint::from(3u64), ());
        world
            .account(lender.clone())
            .nonce(1)
            .esdt_balance(USDC_TOKEN, BigUint::from(INITIAL_FUNDS))
            .esdt_balance(WEGLD_TOKEN, BigUint::from(INITIAL_FUNDS));
        world
            .account(second_lender.clone())
            .nonce(1)
            .esdt_balance(USDC_TOKEN, BigUint::from(INITIAL_FUNDS));

        let mut state = Self {
            world,
            controller_sc,
            ledger_sc,
            fee_controller_sc,
            items_verifier_sc,
            unvaulted_verifier_sc,
            collection_verifier_sc,
            punk_verifier_sc,
            vault_sc,
            punk_market_sc,
            borrower_key,
            lender_key,
            second_lender_key,
            borrower,
            lender,
            second_lender,
        };
        state.setup_registries();
        state
    }

    fn setup_registries(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .add_registry_manager(OWNER_ADDRESS.to_managed_address())
            .run();

        let mut currencies: ManagedVec<StaticApi, _> = ManagedVec::new();
        currencies.push(USDC_TOKEN.to_token_identifier());
        let mut configs: ManagedVec<StaticApi, CurrencyConfig<StaticApi>> = ManagedVec::new();
        configs.push(CurrencyConfig {
            enabled: true,
            min_principal: BigUint::from(MIN_PRINCIPAL),
        });
        self.set_allowed_currencies(currencies, configs, None);

        let mut collaterals: ManagedVec<StaticApi, _> = ManagedVec::new();
        collaterals.push(COLLATERAL_TOKEN.to_token_identifier());
        collaterals.push(BUNDLE_TOKEN.to_token_identifier());
        let mut alloweds: ManagedVec<StaticApi, bool> = ManagedVec::new();
        alloweds.push(true);
        alloweds.push(true);
        self.set_allowed_collaterals(collaterals, alloweds, None);

        let mut verifiers: ManagedVec<StaticApi, _> = ManagedVec::new();
        verifiers.push(self.items_verifier_sc.clone());
        verifiers.push(self.unvaulted_verifier_sc.clone());
        verifiers.push(self.collection_verifier_sc.clone());
        verifiers.push(self.punk_verifier_sc.clone());
        let mut verifier_flags: ManagedVec<StaticApi, bool> = ManagedVec::new();
        for _ in 0..4 {
            verifier_flags.push(true);
        }
        self.set_allowed_verifiers(verifiers, verifier_flags, None);
    }

    // --- Configuration helpers ---

    pub fn set_allowed_currencies(
        &mut self,
        tokens: ManagedVec<StaticApi, TokenIdentifier<StaticApi>>,
        configs: ManagedVec<StaticApi, CurrencyConfig<StaticApi>>,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .set_allowed_currencies(tokens, configs);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn set_allowed_collaterals(
        &mut self,
        tokens: ManagedVec<StaticApi, TokenIdentifier<StaticApi>>,
        alloweds: ManagedVec<StaticApi, bool>,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .set_allowed_collaterals(tokens, alloweds);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn set_allowed_verifiers(
        &mut self,
        addresses: ManagedVec<StaticApi, ManagedAddress<StaticApi>>,
        alloweds: ManagedVec<StaticApi, bool>,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .set_allowed_verifiers(addresses, alloweds);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn set_fee(&mut self, fee_type: common_structs::FeeType, bps: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.fee_controller_sc)
            .typed(proxy_fee_controller::FeeControllerProxy)
            .set_fee_bps(fee_type, BigUint::from(bps))
            .run();
    }

    pub fn set_affiliate_split(&mut self, code: [u8; 32], affiliate: &Address, split_bps: u64) {
        let mut codes: ManagedVec<StaticApi, ManagedByteArray<StaticApi, 32>> = ManagedVec::new();
        codes.push(ManagedByteArray::from(&code));
        let mut splits: ManagedVec<StaticApi, AffiliateSplit<StaticApi>> = ManagedVec::new();
        splits.push(AffiliateSplit {
            affiliate: ManagedAddress::from_address(affiliate),
            split_bps: BigUint::from(split_bps),
        });
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .set_affiliate_splits(codes, splits)
            .run();
    }

    // --- Terms & signatures ---

    pub fn default_terms(&self) -> LoanTerms<StaticApi> {
        LoanTerms {
            duration_seconds: DEFAULT_DURATION,
            principal: BigUint::from(DEFAULT_PRINCIPAL),
            interest_rate: BigUint::from(DEFAULT_RATE),
            collateral_token: COLLATERAL_TOKEN.to_token_identifier(),
            collateral_nonce: 1,
            payable_currency: USDC_TOKEN.to_token_identifier(),
            deadline: FAR_DEADLINE,
            affiliate_code: ManagedByteArray::default(),
        }
    }

    pub fn default_properties(&self) -> SignatureProperties {
        SignatureProperties {
            nonce: 0,
            max_uses: 1,
        }
    }

    pub fn sign_loan_terms(
        &mut self,
        key: &SigningKey,
        terms: &LoanTerms<StaticApi>,
        properties: SignatureProperties,
        side: SigningSide,
    ) -> ManagedBuffer<StaticApi> {
        let digest: ManagedByteArray<StaticApi, 32> = self
            .world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .loan_terms_digest(terms.clone(), properties, side)
            .returns(ReturnsResult)
            .run();
        let signature = key.sign(&digest.to_byte_array());
        ManagedBuffer::from(&signature.to_bytes()[..])
    }

    pub fn sign_items_terms(
        &mut self,
        key: &SigningKey,
        terms: &LoanTerms<StaticApi>,
        properties: SignatureProperties,
        side: SigningSide,
        predicates: &ManagedVec<StaticApi, ItemsPredicate<StaticApi>>,
    ) -> ManagedBuffer<StaticApi> {
        let digest: ManagedByteArray<StaticApi, 32> = self
            .world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .items_loan_terms_digest(terms.clone(), properties, side, predicates.clone())
            .returns(ReturnsResult)
            .run();
        let signature = key.sign(&digest.to_byte_array());
        ManagedBuffer::from(&signature.to_bytes()[..])
    }

    pub fn sign_collateral_permit(
        &mut self,
        key: &SigningKey,
        owner: &Address,
        token: TokenIdentifier<StaticApi>,
        nonce: u64,
        permit_nonce: u64,
        deadline: u64,
    ) -> ManagedBuffer<StaticApi> {
        let digest: ManagedByteArray<StaticApi, 32> = self
            .world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_ledger::LoanLedgerProxy)
            .collateral_permit_digest(
                ManagedAddress::from_address(owner),
                token,
                nonce,
                permit_nonce,
                deadline,
            )
            .returns(ReturnsResult)
            .run();
        let signature = key.sign(&digest.to_byte_array());
        ManagedBuffer::from(&signature.to_bytes()[..])
    }

    // --- Escrow helpers ---

    pub fn deposit_funds(&mut self, from: &Address, amount: u128) {
        self.world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_ledger::LoanLedgerProxy)
            .deposit_funds()
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(amount))
            .run();
    }

    pub fn deposit_funds_for(&mut self, from: &Address, beneficiary: &ManagedAddress<StaticApi>, amount: u128) {
        self.world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_ledger::LoanLedgerProxy)
            .deposit_funds_for(beneficiary)
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(amount))
            .run();
    }

    pub fn deposit_collateral(
        &mut self,
        from: &Address,
        token: TestTokenIdentifier,
        nonce: u64,
        authorize: bool,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_ledger::LoanLedgerProxy)
            .deposit_collateral(authorize)
            .single_esdt(&token.to_token_identifier(), nonce, &BigUint::from(1u64))
            .run();
    }

    // --- Origination helpers ---

    /// Borrower-side origination: the borrower sends the collateral along,
    /// the lender's leg comes out of escrow.
    pub fn initialize_as_borrower(
        &mut self,
        terms: &LoanTerms<StaticApi>,
        properties: SignatureProperties,
        lender_signature: ManagedBuffer<StaticApi>,
        error_message: Option<&[u8]>,
    ) -> u64 {
        let borrower_spec = BorrowerSpec {
            address: ManagedAddress::from_address(&self.borrower),
            callback_data: ManagedBuffer::new(),
        };
        let collateral_amount = BigUint::from(1u64);
        let call = self
            .world
            .tx()
            .from(&self.borrower)
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .initialize_loan(
                terms.clone(),
                properties,
                SigningSide::Lender,
                lender_signature,
                ManagedBuffer::new(),
                ManagedAddress::from_address(&self.lender),
                borrower_spec,
            )
            .single_esdt(
                &terms.collateral_token,
                terms.collateral_nonce,
                &collateral_amount,
            );
        match error_message {
            Some(message) => {
                call.returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                    .run();
                0
            },
            None => call.returns(ReturnsResult).run(),
        }
    }

    /// Lender-side origination: the lender attaches principal plus its
    /// origination fee, the collateral must already sit authorized in
    /// escrow.
    pub fn initialize_as_lender(
        &mut self,
        terms: &LoanTerms<StaticApi>,
        properties: SignatureProperties,
        borrower_signature: ManagedBuffer<StaticApi>,
        attached_amount: u128,
        error_message: Option<&[u8]>,
    ) -> u64 {
        let borrower_spec = BorrowerSpec {
            address: ManagedAddress::from_address(&self.borrower),
            callback_data: ManagedBuffer::new(),
        };
        let usdc_token = USDC_TOKEN.to_token_identifier();
        let attached = BigUint::from(attached_amount);
        let call = self
            .world
            .tx()
            .from(&self.lender)
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .initialize_loan(
                terms.clone(),
                properties,
                SigningSide::Borrower,
                borrower_signature,
                ManagedBuffer::new(),
                ManagedAddress::from_address(&self.lender),
                borrower_spec,
            )
            .single_esdt(
                &usdc_token,
                0,
                &attached,
            );
        match error_message {
            Some(message) => {
                call.returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                    .run();
                0
            },
            None => call.returns(ReturnsResult).run(),
        }
    }

    // --- Ledger queries ---

    pub fn get_loan(&mut self, loan_id: u64) -> common_structs::Loan<StaticApi> {
        self.world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_ledger::LoanLedgerProxy)
            .get_loan(loan_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_interest_due(&mut self, loan_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_ledger::LoanLedgerProxy)
            .get_interest_due(loan_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_funds_escrow(&mut self, account: &Address) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_ledger::LoanLedgerProxy)
            .funds_escrow(
                ManagedAddress::from_address(account),
                USDC_TOKEN.to_token_identifier(),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_protocol_fees(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_ledger::LoanLedgerProxy)
            .protocol_fees(USDC_TOKEN.to_token_identifier())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_affiliate_fees(&mut self, affiliate: &Address) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_ledger::LoanLedgerProxy)
            .affiliate_fees(
                ManagedAddress::from_address(affiliate),
                USDC_TOKEN.to_token_identifier(),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_nonce_floor(&mut self, signer: &Address) -> u64 {
        self.world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .nonce_floor(ManagedAddress::from_address(signer))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_nonce_uses(&mut self, signer: &Address, nonce: u64) -> u64 {
        self.world
            .query()
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .nonce_uses(ManagedAddress::from_address(signer), nonce)
            .returns(ReturnsResult)
            .run()
    }

    // --- Rollover / refinance helpers ---

    #[allow(clippy::too_many_arguments)]
    pub fn rollover_as_borrower(
        &mut self,
        old_loan_id: u64,
        terms: &LoanTerms<StaticApi>,
        properties: SignatureProperties,
        lender_signature: ManagedBuffer<StaticApi>,
        lender: &Address,
        shortfall: u128,
        error_message: Option<&[u8]>,
    ) -> u64 {
        let mut payments: ManagedVec<StaticApi, EsdtTokenPayment<StaticApi>> = ManagedVec::new();
        if shortfall > 0 {
            payments.push(EsdtTokenPayment::new(
                USDC_TOKEN.to_token_identifier(),
                0,
                BigUint::from(shortfall),
            ));
        }
        let call = self
            .world
            .tx()
            .from(&self.borrower)
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .rollover_loan(
                old_loan_id,
                terms.clone(),
                properties,
                SigningSide::Lender,
                lender_signature,
                ManagedBuffer::new(),
                ManagedAddress::from_address(lender),
            )
            .payment(payments);
        match error_message {
            Some(message) => {
                call.returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                    .run();
                0
            },
            None => call.returns(ReturnsResult).run(),
        }
    }

    pub fn refinance(
        &mut self,
        from: &Address,
        old_loan_id: u64,
        terms: &LoanTerms<StaticApi>,
        attached_amount: u128,
        error_message: Option<&[u8]>,
    ) -> u64 {
        let mut payments: ManagedVec<StaticApi, EsdtTokenPayment<StaticApi>> = ManagedVec::new();
        if attached_amount > 0 {
            payments.push(EsdtTokenPayment::new(
                USDC_TOKEN.to_token_identifier(),
                0,
                BigUint::from(attached_amount),
            ));
        }
        let call = self
            .world
            .tx()
            .from(from)
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .refinance_loan(old_loan_id, terms.clone())
            .payment(payments);
        match error_message {
            Some(message) => {
                call.returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                    .run();
                0
            },
            None => call.returns(ReturnsResult).run(),
        }
    }

    // --- Items helpers ---

    pub fn encode_items(
        &self,
        items: &[SignatureItem<StaticApi>],
    ) -> ManagedBuffer<StaticApi> {
        let mut vec: ManagedVec<StaticApi, SignatureItem<StaticApi>> = ManagedVec::new();
        for item in items {
            vec.push(item.clone());
        }
        let mut encoded = ManagedBuffer::new();
        vec.top_encode(&mut encoded).unwrap();
        encoded
    }

    /// Creates a bundle out of the borrower's item tokens and returns its
    /// nonce.
    pub fn create_borrower_bundle(&mut self, items: &[(u64, u64)]) -> u64 {
        let mut payments: ManagedVec<StaticApi, EsdtTokenPayment<StaticApi>> = ManagedVec::new();
        for (nonce, amount) in items {
            payments.push(EsdtTokenPayment::new(
                ITEM_TOKEN.to_token_identifier(),
                *nonce,
                BigUint::from(*amount),
            ));
        }
        self.world
            .tx()
            .from(&self.borrower)
            .to(&self.vault_sc)
            .typed(proxy_vault::VaultProxy)
            .create_bundle()
            .payment(payments)
            .returns(ReturnsResult)
            .run()
    }


    // --- Items / permit / mock helpers ---

    /// Borrower-side items origination, attaching the terms' collateral.
    pub fn initialize_with_items_as_borrower(
        &mut self,
        terms: &LoanTerms<StaticApi>,
        properties: SignatureProperties,
        lender_signature: ManagedBuffer<StaticApi>,
        predicates: ManagedVec<StaticApi, ItemsPredicate<StaticApi>>,
        error_message: Option<&[u8]>,
    ) -> u64 {
        let borrower_spec = BorrowerSpec {
            address: ManagedAddress::from_address(&self.borrower),
            callback_data: ManagedBuffer::new(),
        };
        let collateral_amount = BigUint::from(1u64);
        let call = self
            .world
            .tx()
            .from(&self.borrower)
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .initialize_loan_with_items(
                terms.clone(),
                properties,
                SigningSide::Lender,
                lender_signature,
                ManagedBuffer::new(),
                ManagedAddress::from_address(&self.lender),
                borrower_spec,
                predicates,
            )
            .single_esdt(
                &terms.collateral_token,
                terms.collateral_nonce,
                &collateral_amount,
            );
        match error_message {
            Some(message) => {
                call.returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                    .run();
                0
            },
            None => call.returns(ReturnsResult).run(),
        }
    }

    /// Lender-side origination consuming a borrower-signed collateral
    /// permit.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_with_permit_as_lender(
        &mut self,
        terms: &LoanTerms<StaticApi>,
        properties: SignatureProperties,
        borrower_signature: ManagedBuffer<StaticApi>,
        attached_amount: u128,
        permit_nonce: u64,
        permit_deadline: u64,
        permit_signature: ManagedBuffer<StaticApi>,
        error_message: Option<&[u8]>,
    ) -> u64 {
        let borrower_spec = BorrowerSpec {
            address: ManagedAddress::from_address(&self.borrower),
            callback_data: ManagedBuffer::new(),
        };
        let usdc_token = USDC_TOKEN.to_token_identifier();
        let attached = BigUint::from(attached_amount);
        let call = self
            .world
            .tx()
            .from(&self.lender)
            .to(&self.controller_sc)
            .typed(proxy_controller::ControllerProxy)
            .initialize_loan_with_collateral_permit(
                terms.clone(),
                properties,
                SigningSide::Borrower,
                borrower_signature,
                ManagedBuffer::new(),
                ManagedAddress::from_address(&self.lender),
                borrower_spec,
                permit_nonce,
                permit_deadline,
                permit_signature,
            )
            .single_esdt(
                &usdc_token,
                0,
                &attached,
            );
        match error_message {
            Some(message) => {
                call.returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                    .run();
                0
            },
            None => call.returns(ReturnsResult).run(),
        }
    }

    pub fn deploy_callback_mock(&mut self) -> ManagedAddress<StaticApi> {
        let callback_sc = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_loan_callback::LoanCallbackProxy)
            .init(&self.controller_sc)
            .code(CALLBACK_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();
        // The contract borrower holds its own collateral token.
        self.world.set_nft_balance_all_properties(
            callback_sc.clone(),
            COLLATERAL_TOKEN.as_bytes(),
            2,
            BigUint::from(1u64),
            ManagedBuffer::<StaticApi>::new(),
            0,
            None::<ManagedAddress<StaticApi>>,
            None,
            None,
            &[],
        );
        callback_sc
    }

    pub fn deploy_signer_mock(
        &mut self,
        accept: bool,
        required_extra_data: &[u8],
    ) -> ManagedAddress<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_contract_signer::ContractSignerProxy)
            .init(accept, ManagedBuffer::from(required_extra_data))
            .code(SIGNER_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run()
    }

    pub fn repay_loan(&mut self, from: &Address, loan_id: u64, amount: u128) {
        self.world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_ledger::LoanLedgerProxy)
            .repay(loan_id)
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(amount))
            .run();
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }
}
