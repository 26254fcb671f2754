#![no_std]

// Authorization

pub static ERROR_CALLER_NOT_PARTICIPANT: &[u8] =
    b"Caller is not a loan participant or approved by one.";

pub static ERROR_SELF_APPROVE: &[u8] = b"Cannot approve self.";

pub static ERROR_APPROVED_OWN_LOAN: &[u8] = b"Caller cannot countersign its own loan.";

pub static ERROR_SIDE_MISMATCH: &[u8] = b"Signature side does not match the counterparty.";

pub static ERROR_NOT_MANAGER: &[u8] = b"Caller is not a registry manager.";

pub static ERROR_ONLY_CONTROLLER: &[u8] = b"Caller is not the origination controller.";

pub static ERROR_ONLY_LENDER: &[u8] = b"Caller is not the lender of this loan.";

// Signature / replay

pub static ERROR_INVALID_SIGNATURE: &[u8] = b"Invalid signature.";

pub static ERROR_SIGNATURE_EXPIRED: &[u8] = b"Signature is expired.";

pub static ERROR_NONCE_BELOW_FLOOR: &[u8] = b"Nonce is below the signer's floor.";

pub static ERROR_NONCE_EXHAUSTED: &[u8] = b"Nonce has no uses left.";

pub static ERROR_MAX_USES_ZERO: &[u8] = b"Signature must allow at least one use.";

pub static ERROR_PERMIT_EXPIRED: &[u8] = b"Collateral permit is expired.";

pub static ERROR_PERMIT_NONCE_USED: &[u8] = b"Collateral permit nonce already used.";

// Terms validation

pub static ERROR_INTEREST_RATE: &[u8] = b"Interest rate out of bounds.";

pub static ERROR_LOAN_DURATION: &[u8] = b"Loan duration out of bounds.";

pub static ERROR_PRINCIPAL_TOO_LOW: &[u8] = b"Principal below the currency minimum.";

pub static ERROR_PRINCIPAL_INCREASE: &[u8] =
    b"Refinance principal cannot exceed the outstanding balance.";

pub static ERROR_SAME_LENDER: &[u8] = b"Refinancing lender equals the current lender.";

pub static ERROR_TOO_EARLY: &[u8] = b"Refinance lockout window has not elapsed.";

pub static ERROR_ROLLOVER_COLLATERAL_MISMATCH: &[u8] =
    b"Rollover terms name different collateral.";

pub static ERROR_ROLLOVER_CURRENCY_MISMATCH: &[u8] = b"Rollover terms name a different currency.";

pub static ERROR_COLLATERAL_MISMATCH: &[u8] = b"Refinance terms name different collateral.";

pub static ERROR_CURRENCY_MISMATCH: &[u8] = b"Refinance terms name a different currency.";

// Registries

pub static ERROR_ZERO_ARRAY_ELEMENTS: &[u8] = b"Batch input is empty.";

pub static ERROR_ARRAY_TOO_MANY_ELEMENTS: &[u8] = b"Batch input exceeds the element cap.";

pub static ERROR_BATCH_LENGTH_MISMATCH: &[u8] = b"Batch input arrays differ in length.";

pub static ERROR_ZERO_ADDRESS: &[u8] = b"Address is zero.";

pub static ERROR_INVALID_TOKEN_IDENTIFIER: &[u8] = b"Invalid token identifier.";

pub static ERROR_ZERO_AFFILIATE_CODE: &[u8] = b"Affiliate code is zero.";

pub static ERROR_AFFILIATE_SPLIT_TOO_HIGH: &[u8] = b"Affiliate split exceeds the cap.";

pub static ERROR_INVALID_VERIFIER: &[u8] = b"Predicate verifier not allow-listed.";

// Predicates

pub static ERROR_PREDICATES_EMPTY: &[u8] = b"Predicates array is empty.";

pub static ERROR_PREDICATE_FAILED: &[u8] = b"Predicate not satisfied by the collateral.";

pub static ERROR_NO_PREDICATES: &[u8] = b"Predicate data holds no items.";

pub static ERROR_INVALID_PREDICATE_DATA: &[u8] = b"Invalid predicate data.";

pub static ERROR_ITEM_MISSING_ADDRESS: &[u8] = b"Predicate item is missing its asset.";

pub static ERROR_NO_AMOUNT: &[u8] = b"Predicate item amount must be positive.";

pub static ERROR_INVALID_WILDCARD: &[u8] =
    b"Wildcard is only meaningful for non-fungible items.";

pub static ERROR_INVALID_COLLATERAL_ID: &[u8] =
    b"Collateral does not map back to a known container.";

// Loan state

pub static ERROR_INVALID_STATE: &[u8] = b"Loan is not active.";

pub static ERROR_LOAN_NOT_FOUND: &[u8] = b"Loan not found.";

pub static ERROR_LOAN_NOT_DUE: &[u8] = b"Loan has not reached maturity.";

// Payments / escrow

pub static ERROR_INVALID_PAYMENT: &[u8] = b"Attached payment does not match the required leg.";

pub static ERROR_INSUFFICIENT_ESCROW: &[u8] = b"Escrowed funds are insufficient.";

pub static ERROR_COLLATERAL_NOT_IN_ESCROW: &[u8] = b"Collateral is not in escrow.";

pub static ERROR_COLLATERAL_NOT_AUTHORIZED: &[u8] =
    b"Collateral is not authorized for origination.";

pub static ERROR_NOT_COLLATERAL_OWNER: &[u8] = b"Caller does not own this escrowed collateral.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_REPAYMENT_TOO_SMALL: &[u8] = b"Repayment does not cover the amount due.";

pub static ERROR_NOTHING_TO_WITHDRAW: &[u8] = b"Nothing to withdraw.";

// Fees

pub static ERROR_FEE_TOO_LARGE: &[u8] = b"Fee exceeds the per-type cap.";

// Reentrancy

pub static ERROR_REENTRANCY: &[u8] = b"Origination re-entered during a callback.";
