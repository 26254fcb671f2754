use common_errors::*;
use common_proxies::{proxy_ledger, proxy_loan_callback, proxy_verifier};
use common_structs::{
    BorrowerSpec, ItemsPredicate, LoanTerms, SignatureProperties, SigningSide,
};

use crate::{nonce, signature, storage, validation};

multiversx_sc::imports!();

/// The shared origination path. All three public entry points (plain,
/// items-predicate, collateral-permit) land in `process_initialize`; the
/// validation order is fixed so that nonce consumption is the last
/// irreversible step before the ledger moves value.
#[multiversx_sc::module]
pub trait InitiateModule:
    storage::Storage
    + validation::ValidationModule
    + signature::SignatureModule
    + nonce::NonceModule
    + common_events::EventsModule
{
    #[allow(clippy::too_many_arguments)]
    fn process_initialize(
        &self,
        terms: LoanTerms<Self::Api>,
        properties: SignatureProperties,
        side: SigningSide,
        signature: ManagedBuffer,
        extra_data: ManagedBuffer,
        lender: ManagedAddress,
        borrower_spec: BorrowerSpec<Self::Api>,
        predicates: Option<ManagedVec<ItemsPredicate<Self::Api>>>,
        permit: Option<(u64, u64, ManagedBuffer)>,
    ) -> u64 {
        self.reentrancy_guard();

        let caller = self.blockchain().get_caller();
        let borrower = borrower_spec.address.clone();

        let (caller_is_lender_side, signer, needed_side) =
            self.resolve_counterparties(&caller, &lender, &borrower);
        self.require_declared_side(side, needed_side);
        self.require_not_own_signature(&caller, &signer);

        self.validate_terms(&terms);
        self.require_signature_not_expired(&terms);

        let digest = match &predicates {
            Some(predicates) => {
                self.compute_items_terms_digest(&terms, &properties, side, predicates)
            },
            None => self.compute_loan_terms_digest(&terms, &properties, side),
        };
        self.validate_counterparty_signature(&signer, &digest, &signature, &extra_data);
        self.use_nonce(&signer, &properties);

        if let Some(predicates) = &predicates {
            self.verify_predicates(&caller, &signer, &terms, predicates);
        }

        let ledger = self.ledger_address().get();
        if let Some((permit_nonce, permit_deadline, permit_signature)) = permit {
            // The ledger validates and burns the permit; its errors surface
            // to this caller unchanged.
            self.tx()
                .to(&ledger)
                .typed(proxy_ledger::LoanLedgerProxy)
                .consume_collateral_permit(
                    borrower.clone(),
                    terms.collateral_token.clone(),
                    terms.collateral_nonce,
                    permit_nonce,
                    permit_deadline,
                    permit_signature,
                )
                .sync_call();
        }

        let affiliate = self.resolve_affiliate(&terms);
        let payments = self.call_value().all_esdt_transfers().clone_value();
        let loan_id: u64 = self
            .tx()
            .to(&ledger)
            .typed(proxy_ledger::LoanLedgerProxy)
            .originate(
                terms,
                lender.clone(),
                borrower.clone(),
                affiliate,
                caller_is_lender_side,
            )
            .payment(payments)
            .returns(ReturnsResult)
            .sync_call();

        // Compose hook for contract borrowers. Never fired on lender-side
        // calls; a nested engine entry from inside fails the whole
        // transaction.
        if !borrower_spec.callback_data.is_empty()
            && self.blockchain().is_smart_contract(&borrower)
            && !caller_is_lender_side
        {
            self.origination_ongoing().set(true);
            self.tx()
                .to(&borrower)
                .typed(proxy_loan_callback::LoanCallbackProxy)
                .on_loan_originated(loan_id, borrower_spec.callback_data)
                .sync_call();
            self.origination_ongoing().set(false);
        }

        loan_id
    }

    /// Conditional-offer check: every predicate must name an allow-listed
    /// verifier and every verifier must be satisfied.
    fn verify_predicates(
        &self,
        caller: &ManagedAddress,
        signer: &ManagedAddress,
        terms: &LoanTerms<Self::Api>,
        predicates: &ManagedVec<ItemsPredicate<Self::Api>>,
    ) {
        require!(!predicates.is_empty(), ERROR_PREDICATES_EMPTY);

        for predicate in predicates.iter() {
            require!(
                self.verifier_allowed(&predicate.verifier).get(),
                ERROR_INVALID_VERIFIER
            );
            let satisfied: bool = self
                .tx()
                .to(&predicate.verifier)
                .typed(proxy_verifier::PredicateVerifierProxy)
                .verify(
                    caller,
                    signer,
                    &terms.collateral_token,
                    terms.collateral_nonce,
                    &predicate.data,
                )
                .returns(ReturnsResult)
                .sync_call_readonly();
            require!(satisfied, ERROR_PREDICATE_FAILED);
        }
    }
}
