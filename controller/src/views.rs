use common_structs::{
    AffiliateSplit, CurrencyConfig, ItemsPredicate, LoanTerms, SignatureProperties, SigningSide,
};

use crate::{signature, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule: storage::Storage + signature::SignatureModule {
    /// The digest a counterparty signs for a plain origination or rollover.
    /// Clients sign exactly this; tests do too.
    #[view(getLoanTermsDigest)]
    fn get_loan_terms_digest(
        &self,
        terms: LoanTerms<Self::Api>,
        properties: SignatureProperties,
        side: SigningSide,
    ) -> ManagedByteArray<Self::Api, 32> {
        self.compute_loan_terms_digest(&terms, &properties, side)
    }

    /// The digest for an items-predicate origination: commits to the
    /// predicate array as well.
    #[view(getItemsLoanTermsDigest)]
    fn get_items_loan_terms_digest(
        &self,
        terms: LoanTerms<Self::Api>,
        properties: SignatureProperties,
        side: SigningSide,
        predicates: ManagedVec<ItemsPredicate<Self::Api>>,
    ) -> ManagedByteArray<Self::Api, 32> {
        self.compute_items_terms_digest(&terms, &properties, side, &predicates)
    }

    #[view(isApproved)]
    fn is_approved(&self, owner: ManagedAddress, operator: ManagedAddress) -> bool {
        self.approvals(&owner, &operator).get()
    }

    #[view(getCurrencyConfig)]
    fn get_currency_config(&self, token: TokenIdentifier) -> CurrencyConfig<Self::Api> {
        let mapper = self.currency_config(&token);
        if mapper.is_empty() {
            return CurrencyConfig {
                enabled: false,
                min_principal: BigUint::zero(),
            };
        }
        mapper.get()
    }

    #[view(isCollateralAllowed)]
    fn is_collateral_allowed(&self, token: TokenIdentifier) -> bool {
        self.collateral_allowed(&token).get()
    }

    #[view(isVerifierAllowed)]
    fn is_verifier_allowed(&self, verifier: ManagedAddress) -> bool {
        self.verifier_allowed(&verifier).get()
    }

    #[view(getAffiliateSplit)]
    fn get_affiliate_split(
        &self,
        code: ManagedByteArray<Self::Api, 32>,
    ) -> Option<AffiliateSplit<Self::Api>> {
        let mapper = self.affiliate_splits(&code);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }
}
