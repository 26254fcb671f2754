use common_structs::{LoanState, SigningSide};
use controller::ERROR_REENTRANCY;
use multiversx_sc::types::{BigUint, ManagedBuffer};
use multiversx_sc_scenario::{
    imports::{ExpectMessage, ReturnsResult},
    ScenarioTxRun,
};

pub mod setup;
use constants::*;
use proxys::*;
use setup::*;

/// Drives an origination through the contract borrower. The mock holds
/// collateral nonce 2 of the default collection.
fn initiate_through_contract_borrower(
    state: &mut OriginationTestState,
    callback_sc: &multiversx_sc::types::ManagedAddress<multiversx_sc_scenario::api::StaticApi>,
    callback_data: &[u8],
    error_message: Option<&[u8]>,
) {
    let lender_key = state.lender_key.clone();
    let mut terms = state.default_terms();
    terms.collateral_nonce = 2;
    let properties = state.default_properties();
    let signature = state.sign_loan_terms(&lender_key, &terms, properties, SigningSide::Lender);

    let call = state
        .world
        .tx()
        .from(STRANGER_ADDRESS)
        .to(callback_sc)
        .typed(proxy_loan_callback::LoanCallbackProxy)
        .initiate_loan(
            terms,
            properties,
            SigningSide::Lender,
            signature,
            ManagedBuffer::new(),
            multiversx_sc::types::ManagedAddress::from_address(&state.lender),
            ManagedBuffer::from(callback_data),
        );
    match error_message {
        Some(message) => {
            call.returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run();
        },
        None => {
            call.returns(ReturnsResult).run();
        },
    }
}

/// A smart-contract borrower opts into the post-origination hook and gets
/// called with the loan id inside the same transaction.
#[test]
fn borrower_callback_fires_on_borrower_side_calls() {
    let mut state = OriginationTestState::new();
    let callback_sc = state.deploy_callback_mock();
    state.deposit_funds(&state.lender.clone(), DEFAULT_PRINCIPAL);

    initiate_through_contract_borrower(&mut state, &callback_sc, b"ok", None);

    let observed: u64 = state
        .world
        .query()
        .to(&callback_sc)
        .typed(proxy_loan_callback::LoanCallbackProxy)
        .last_callback_loan_id()
        .returns(ReturnsResult)
        .run();
    assert_eq!(observed, 1);
    assert_eq!(state.get_loan(1).state, LoanState::Active);
    // The contract borrower's payout landed in its escrow-free balance.
    state
        .world
        .check_account(callback_sc)
        .esdt_balance(USDC_TOKEN, BigUint::from(DEFAULT_PRINCIPAL));
}

/// Empty callback data means no hook, even for a contract borrower.
#[test]
fn no_callback_without_data() {
    let mut state = OriginationTestState::new();
    let callback_sc = state.deploy_callback_mock();
    state.deposit_funds(&state.lender.clone(), DEFAULT_PRINCIPAL);

    initiate_through_contract_borrower(&mut state, &callback_sc, b"", None);

    let observed: u64 = state
        .world
        .query()
        .to(&callback_sc)
        .typed(proxy_loan_callback::LoanCallbackProxy)
        .last_callback_loan_id()
        .returns(ReturnsResult)
        .run();
    assert_eq!(observed, 0);
}

/// Re-entering `initializeLoan` from inside the callback dies on the guard,
/// not on argument validation, and takes the whole origination with it.
#[test]
fn callback_reentrancy_is_blocked() {
    let mut state = OriginationTestState::new();
    let callback_sc = state.deploy_callback_mock();
    state.deposit_funds(&state.lender.clone(), DEFAULT_PRINCIPAL);

    initiate_through_contract_borrower(
        &mut state,
        &callback_sc,
        b"reenter-initialize",
        Some(ERROR_REENTRANCY),
    );

    // Nothing persisted: the guarded transaction reverted wholesale.
    let last_loan_id: u64 = state
        .world
        .query()
        .to(&state.ledger_sc)
        .typed(proxy_ledger::LoanLedgerProxy)
        .last_loan_id()
        .returns(ReturnsResult)
        .run();
    assert_eq!(last_loan_id, 0);
}

/// Nested refinance attempts are blocked by the same guard regardless of
/// target loan.
#[test]
fn callback_nested_refinance_is_blocked() {
    let mut state = OriginationTestState::new();
    let callback_sc = state.deploy_callback_mock();
    state.deposit_funds(&state.lender.clone(), DEFAULT_PRINCIPAL);

    initiate_through_contract_borrower(
        &mut state,
        &callback_sc,
        b"reenter-refinance",
        Some(ERROR_REENTRANCY),
    );
}

/// A panicking callback fails the origination atomically.
#[test]
fn failing_callback_reverts_origination() {
    let mut state = OriginationTestState::new();
    let callback_sc = state.deploy_callback_mock();
    state.deposit_funds(&state.lender.clone(), DEFAULT_PRINCIPAL);

    initiate_through_contract_borrower(&mut state, &callback_sc, b"fail", Some(b"callback failed"));

    assert_eq!(
        state.get_funds_escrow(&state.lender.clone()),
        BigUint::from(DEFAULT_PRINCIPAL)
    );
}
