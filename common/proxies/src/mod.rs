#![no_std]

pub mod proxy_contract_signer;
pub mod proxy_controller;
pub mod proxy_fee_controller;
pub mod proxy_ledger;
pub mod proxy_loan_callback;
pub mod proxy_punk_market;
pub mod proxy_vault;
pub mod proxy_verifier;
