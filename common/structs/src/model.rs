#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{
    ERROR_INVALID_WILDCARD, ERROR_ITEM_MISSING_ADDRESS, ERROR_NO_AMOUNT,
};

/// Which counterparty a signature represents. Baked into the signed digest
/// so a lender signature can never be consumed as a borrower signature.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SigningSide {
    Borrower,
    Lender,
}

/// Immutable loan terms, hashed into counterparty signatures.
///
/// `interest_rate` is in basis points over the full loan duration:
/// 1_000 = 10.00%. `deadline` bounds the signature, not the loan.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone, PartialEq)]
pub struct LoanTerms<M: ManagedTypeApi> {
    pub duration_seconds: u64,
    pub principal: BigUint<M>,
    pub interest_rate: BigUint<M>,
    pub collateral_token: TokenIdentifier<M>,
    pub collateral_nonce: u64,
    pub payable_currency: TokenIdentifier<M>,
    pub deadline: u64,
    pub affiliate_code: ManagedByteArray<M, 32>,
}

impl<M: ManagedTypeApi> LoanTerms<M> {
    pub fn has_affiliate_code(&self) -> bool {
        self.affiliate_code != ManagedByteArray::default()
    }

    pub fn same_collateral(&self, other: &LoanTerms<M>) -> bool {
        self.collateral_token == other.collateral_token
            && self.collateral_nonce == other.collateral_nonce
    }

    pub fn same_currency(&self, other: &LoanTerms<M>) -> bool {
        self.payable_currency == other.payable_currency
    }
}

/// Replay bounds of one signature: a (signer, nonce) pair may be consumed
/// up to `max_uses` times.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone, Copy)]
pub struct SignatureProperties {
    pub nonce: u64,
    pub max_uses: u64,
}

/// Borrower identity plus opaque data for the post-origination callback.
/// An empty `callback_data` means no callback.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone)]
pub struct BorrowerSpec<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    pub callback_data: ManagedBuffer<M>,
}

#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone, Copy, PartialEq, Eq, Debug,
    ManagedVecItem,
)]
pub enum CollateralCategory {
    NonFungible,
    SemiFungible,
    Fungible,
}

/// One collateral requirement inside an items predicate.
/// `token_nonce` is ignored for fungible items; `any_id_allowed` widens a
/// non-fungible requirement to the whole collection.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone, ManagedVecItem)]
pub struct SignatureItem<M: ManagedTypeApi> {
    pub collateral_type: CollateralCategory,
    pub asset: TokenIdentifier<M>,
    pub token_nonce: u64,
    pub amount: BigUint<M>,
    pub any_id_allowed: bool,
}

impl<M: ManagedTypeApi> SignatureItem<M> {
    /// Structural fault in the item itself, independent of any collateral
    /// state. `None` means the item is well-formed.
    pub fn structural_error(&self) -> Option<&'static [u8]> {
        if self.asset.as_managed_buffer().is_empty() {
            return Some(ERROR_ITEM_MISSING_ADDRESS);
        }
        match self.collateral_type {
            CollateralCategory::NonFungible => {
                if self.any_id_allowed && self.amount == BigUint::zero() {
                    return Some(ERROR_NO_AMOUNT);
                }
            },
            CollateralCategory::SemiFungible | CollateralCategory::Fungible => {
                if self.any_id_allowed {
                    return Some(ERROR_INVALID_WILDCARD);
                }
                if self.amount == BigUint::zero() {
                    return Some(ERROR_NO_AMOUNT);
                }
            },
        }
        None
    }

    /// Required amount with the non-fungible default of 1.
    pub fn required_amount(&self) -> BigUint<M> {
        if self.amount == BigUint::zero() {
            BigUint::from(1u64)
        } else {
            self.amount.clone()
        }
    }
}

/// A pluggable collateral requirement: allow-listed verifier address plus
/// opaque encoded data the verifier knows how to decode.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone, ManagedVecItem)]
pub struct ItemsPredicate<M: ManagedTypeApi> {
    pub verifier: ManagedAddress<M>,
    pub data: ManagedBuffer<M>,
}

#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum LoanState {
    Created,
    Active,
    Repaid,
    Defaulted,
}

/// Fee revenue share for a registered affiliate code.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone, ManagedVecItem)]
pub struct AffiliateSplit<M: ManagedTypeApi> {
    pub affiliate: ManagedAddress<M>,
    pub split_bps: BigUint<M>,
}

/// Canonical loan record, owned exclusively by the ledger.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone)]
pub struct Loan<M: ManagedTypeApi> {
    pub id: u64,
    pub terms: LoanTerms<M>,
    pub state: LoanState,
    pub balance: BigUint<M>,
    pub start_timestamp: u64,
    pub last_accrual_timestamp: u64,
    pub interest_paid: BigUint<M>,
    pub lender: ManagedAddress<M>,
    pub borrower: ManagedAddress<M>,
    pub affiliate: Option<AffiliateSplit<M>>,
}

impl<M: ManagedTypeApi> Loan<M> {
    pub fn is_active(&self) -> bool {
        self.state == LoanState::Active
    }

    pub fn due_timestamp(&self) -> u64 {
        self.start_timestamp + self.terms.duration_seconds
    }
}

/// Allow-list entry for a payable currency. Disabling resets the minimum.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone, ManagedVecItem)]
pub struct CurrencyConfig<M: ManagedTypeApi> {
    pub enabled: bool,
    pub min_principal: BigUint<M>,
}

#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum FeeType {
    LenderOrigination,
    BorrowerOrigination,
    LenderInterest,
    LenderPrincipal,
}

/// All fee values captured in one read so a single operation cannot span
/// two schedules.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone)]
pub struct FeeSchedule<M: ManagedTypeApi> {
    pub lender_origination_bps: BigUint<M>,
    pub borrower_origination_bps: BigUint<M>,
    pub lender_interest_bps: BigUint<M>,
    pub lender_principal_bps: BigUint<M>,
}

impl<M: ManagedTypeApi> FeeSchedule<M> {
    pub fn zero() -> Self {
        FeeSchedule {
            lender_origination_bps: BigUint::zero(),
            borrower_origination_bps: BigUint::zero(),
            lender_interest_bps: BigUint::zero(),
            lender_principal_bps: BigUint::zero(),
        }
    }
}

/// Upper bound sanity for split values, kept next to the type so the
/// controller and tests agree on it.
pub fn is_valid_split_bps<M: ManagedTypeApi>(split: &BigUint<M>) -> bool {
    split <= &BigUint::from(common_constants::MAX_AFFILIATE_SPLIT_BPS)
}
