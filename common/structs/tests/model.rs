use common_errors::{ERROR_INVALID_WILDCARD, ERROR_ITEM_MISSING_ADDRESS, ERROR_NO_AMOUNT};
use common_structs::{
    AffiliateSplit, CollateralCategory, Loan, LoanState, LoanTerms, SignatureItem,
    is_valid_split_bps,
};
use multiversx_sc::types::{
    BigUint, ManagedAddress, ManagedBuffer, ManagedByteArray, TokenIdentifier,
};
use multiversx_sc_scenario::api::StaticApi;

fn terms(affiliate_code: [u8; 32]) -> LoanTerms<StaticApi> {
    LoanTerms {
        duration_seconds: 360_000,
        principal: BigUint::from(100u64),
        interest_rate: BigUint::from(1_000u64),
        collateral_token: TokenIdentifier::from("NFT-123456"),
        collateral_nonce: 1,
        payable_currency: TokenIdentifier::from("USDC-123456"),
        deadline: 1_000,
        affiliate_code: ManagedByteArray::from(&affiliate_code),
    }
}

#[test]
fn affiliate_code_zero_means_none() {
    assert!(!terms([0u8; 32]).has_affiliate_code());
    let mut code = [0u8; 32];
    code[31] = 7;
    assert!(terms(code).has_affiliate_code());
}

#[test]
fn collateral_and_currency_comparisons() {
    let a = terms([0u8; 32]);
    let mut b = a.clone();
    assert!(a.same_collateral(&b));
    assert!(a.same_currency(&b));
    b.collateral_nonce = 2;
    assert!(!a.same_collateral(&b));
    b = a.clone();
    b.payable_currency = TokenIdentifier::from("WEGLD-123456");
    assert!(!a.same_currency(&b));
}

#[test]
fn loan_maturity_and_state() {
    let loan: Loan<StaticApi> = Loan {
        id: 1,
        terms: terms([0u8; 32]),
        state: LoanState::Active,
        balance: BigUint::from(100u64),
        start_timestamp: 50,
        last_accrual_timestamp: 50,
        interest_paid: BigUint::zero(),
        lender: ManagedAddress::zero(),
        borrower: ManagedAddress::zero(),
        affiliate: None,
    };
    assert!(loan.is_active());
    assert_eq!(loan.due_timestamp(), 360_050);
}

fn item(
    collateral_type: CollateralCategory,
    asset: &str,
    amount: u64,
    any_id_allowed: bool,
) -> SignatureItem<StaticApi> {
    SignatureItem {
        collateral_type,
        asset: TokenIdentifier::from(asset),
        token_nonce: 1,
        amount: BigUint::from(amount),
        any_id_allowed,
    }
}

#[test]
fn item_structural_validation() {
    let mut missing = item(CollateralCategory::NonFungible, "NFT-123456", 1, false);
    missing.asset = TokenIdentifier::from(ManagedBuffer::new());
    assert_eq!(missing.structural_error(), Some(ERROR_ITEM_MISSING_ADDRESS));

    let sft_zero = item(CollateralCategory::SemiFungible, "SFT-123456", 0, false);
    assert_eq!(sft_zero.structural_error(), Some(ERROR_NO_AMOUNT));

    let fungible_zero = item(CollateralCategory::Fungible, "USDC-123456", 0, false);
    assert_eq!(fungible_zero.structural_error(), Some(ERROR_NO_AMOUNT));

    let sft_wildcard = item(CollateralCategory::SemiFungible, "SFT-123456", 5, true);
    assert_eq!(sft_wildcard.structural_error(), Some(ERROR_INVALID_WILDCARD));

    let nft_wildcard_zero = item(CollateralCategory::NonFungible, "NFT-123456", 0, true);
    assert_eq!(nft_wildcard_zero.structural_error(), Some(ERROR_NO_AMOUNT));

    let ok = item(CollateralCategory::NonFungible, "NFT-123456", 0, false);
    assert_eq!(ok.structural_error(), None);
    assert_eq!(ok.required_amount(), BigUint::from(1u64));
}

#[test]
fn split_bounds() {
    let ok: AffiliateSplit<StaticApi> = AffiliateSplit {
        affiliate: ManagedAddress::zero(),
        split_bps: BigUint::from(5_000u64),
    };
    assert!(is_valid_split_bps(&ok.split_bps));
    assert!(!is_valid_split_bps::<StaticApi>(&BigUint::from(5_001u64)));
}
