// Hand-maintained proxy for the origination controller. Keep in sync with
// controller/src/lib.rs.

#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

use common_structs::{
    AffiliateSplit, BorrowerSpec, CurrencyConfig, ItemsPredicate, LoanTerms,
    SignatureProperties, SigningSide,
};

pub struct ControllerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ControllerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ControllerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ControllerProxyMethods { wrapped_tx: tx }
    }
}

pub struct ControllerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> ControllerProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        ledger_address: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&ledger_address)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> ControllerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn initialize_loan<
        Arg0: ProxyArg<LoanTerms<Env::Api>>,
        Arg1: ProxyArg<SignatureProperties>,
        Arg2: ProxyArg<SigningSide>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg4: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg5: ProxyArg<ManagedAddress<Env::Api>>,
        Arg6: ProxyArg<BorrowerSpec<Env::Api>>,
    >(
        self,
        terms: Arg0,
        properties: Arg1,
        side: Arg2,
        signature: Arg3,
        extra_data: Arg4,
        lender: Arg5,
        borrower: Arg6,
    ) -> TxTypedCall<Env, From, To, (), Gas, u64> {
        self.wrapped_tx
            .raw_call("initializeLoan")
            .argument(&terms)
            .argument(&properties)
            .argument(&side)
            .argument(&signature)
            .argument(&extra_data)
            .argument(&lender)
            .argument(&borrower)
            .original_result()
    }

    pub fn initialize_loan_with_items<
        Arg0: ProxyArg<LoanTerms<Env::Api>>,
        Arg1: ProxyArg<SignatureProperties>,
        Arg2: ProxyArg<SigningSide>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg4: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg5: ProxyArg<ManagedAddress<Env::Api>>,
        Arg6: ProxyArg<BorrowerSpec<Env::Api>>,
        Arg7: ProxyArg<ManagedVec<Env::Api, ItemsPredicate<Env::Api>>>,
    >(
        self,
        terms: Arg0,
        properties: Arg1,
        side: Arg2,
        signature: Arg3,
        extra_data: Arg4,
        lender: Arg5,
        borrower: Arg6,
        predicates: Arg7,
    ) -> TxTypedCall<Env, From, To, (), Gas, u64> {
        self.wrapped_tx
            .raw_call("initializeLoanWithItems")
            .argument(&terms)
            .argument(&properties)
            .argument(&side)
            .argument(&signature)
            .argument(&extra_data)
            .argument(&lender)
            .argument(&borrower)
            .argument(&predicates)
            .original_result()
    }

    pub fn initialize_loan_with_collateral_permit<
        Arg0: ProxyArg<LoanTerms<Env::Api>>,
        Arg1: ProxyArg<SignatureProperties>,
        Arg2: ProxyArg<SigningSide>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg4: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg5: ProxyArg<ManagedAddress<Env::Api>>,
        Arg6: ProxyArg<BorrowerSpec<Env::Api>>,
        Arg7: ProxyArg<u64>,
        Arg8: ProxyArg<u64>,
        Arg9: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        terms: Arg0,
        properties: Arg1,
        side: Arg2,
        signature: Arg3,
        extra_data: Arg4,
        lender: Arg5,
        borrower: Arg6,
        permit_nonce: Arg7,
        permit_deadline: Arg8,
        permit_signature: Arg9,
    ) -> TxTypedCall<Env, From, To, (), Gas, u64> {
        self.wrapped_tx
            .raw_call("initializeLoanWithCollateralPermit")
            .argument(&terms)
            .argument(&properties)
            .argument(&side)
            .argument(&signature)
            .argument(&extra_data)
            .argument(&lender)
            .argument(&borrower)
            .argument(&permit_nonce)
            .argument(&permit_deadline)
            .argument(&permit_signature)
            .original_result()
    }

    pub fn rollover_loan<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<LoanTerms<Env::Api>>,
        Arg2: ProxyArg<SignatureProperties>,
        Arg3: ProxyArg<SigningSide>,
        Arg4: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg5: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg6: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        old_loan_id: Arg0,
        terms: Arg1,
        properties: Arg2,
        side: Arg3,
        signature: Arg4,
        extra_data: Arg5,
        lender: Arg6,
    ) -> TxTypedCall<Env, From, To, (), Gas, u64> {
        self.wrapped_tx
            .raw_call("rolloverLoan")
            .argument(&old_loan_id)
            .argument(&terms)
            .argument(&properties)
            .argument(&side)
            .argument(&signature)
            .argument(&extra_data)
            .argument(&lender)
            .original_result()
    }

    pub fn refinance_loan<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<LoanTerms<Env::Api>>,
    >(
        self,
        old_loan_id: Arg0,
        terms: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, u64> {
        self.wrapped_tx
            .raw_call("refinanceLoan")
            .argument(&old_loan_id)
            .argument(&terms)
            .original_result()
    }

    pub fn approve<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        operator: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("approve")
            .argument(&operator)
            .original_result()
    }

    pub fn revoke_approval<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        operator: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("revokeApproval")
            .argument(&operator)
            .original_result()
    }

    pub fn cancel_nonce<
        Arg0: ProxyArg<u64>,
    >(
        self,
        nonce: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cancelNonce")
            .argument(&nonce)
            .original_result()
    }

    pub fn add_registry_manager<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        manager: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addRegistryManager")
            .argument(&manager)
            .original_result()
    }

    pub fn remove_registry_manager<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        manager: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeRegistryManager")
            .argument(&manager)
            .original_result()
    }

    pub fn set_allowed_currencies<
        Arg0: ProxyArg<ManagedVec<Env::Api, TokenIdentifier<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, CurrencyConfig<Env::Api>>>,
    >(
        self,
        tokens: Arg0,
        configs: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setAllowedCurrencies")
            .argument(&tokens)
            .argument(&configs)
            .original_result()
    }

    pub fn set_allowed_collaterals<
        Arg0: ProxyArg<ManagedVec<Env::Api, TokenIdentifier<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, bool>>,
    >(
        self,
        tokens: Arg0,
        alloweds: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setAllowedCollaterals")
            .argument(&tokens)
            .argument(&alloweds)
            .original_result()
    }

    pub fn set_allowed_verifiers<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, bool>>,
    >(
        self,
        addresses: Arg0,
        alloweds: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setAllowedVerifiers")
            .argument(&addresses)
            .argument(&alloweds)
            .original_result()
    }

    pub fn set_affiliate_splits<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedByteArray<Env::Api, 32>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, AffiliateSplit<Env::Api>>>,
    >(
        self,
        codes: Arg0,
        splits: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setAffiliateSplits")
            .argument(&codes)
            .argument(&splits)
            .original_result()
    }

    pub fn loan_terms_digest<
        Arg0: ProxyArg<LoanTerms<Env::Api>>,
        Arg1: ProxyArg<SignatureProperties>,
        Arg2: ProxyArg<SigningSide>,
    >(
        self,
        terms: Arg0,
        properties: Arg1,
        side: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLoanTermsDigest")
            .argument(&terms)
            .argument(&properties)
            .argument(&side)
            .original_result()
    }

    pub fn items_loan_terms_digest<
        Arg0: ProxyArg<LoanTerms<Env::Api>>,
        Arg1: ProxyArg<SignatureProperties>,
        Arg2: ProxyArg<SigningSide>,
        Arg3: ProxyArg<ManagedVec<Env::Api, ItemsPredicate<Env::Api>>>,
    >(
        self,
        terms: Arg0,
        properties: Arg1,
        side: Arg2,
        predicates: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getItemsLoanTermsDigest")
            .argument(&terms)
            .argument(&properties)
            .argument(&side)
            .argument(&predicates)
            .original_result()
    }

    pub fn is_approved<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        owner: Arg0,
        operator: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isApproved")
            .argument(&owner)
            .argument(&operator)
            .original_result()
    }

    pub fn nonce_floor<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        signer: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNonceFloor")
            .argument(&signer)
            .original_result()
    }

    pub fn nonce_uses<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        signer: Arg0,
        nonce: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNonceUses")
            .argument(&signer)
            .argument(&nonce)
            .original_result()
    }

    pub fn currency_config<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, CurrencyConfig<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrencyConfig")
            .argument(&token)
            .original_result()
    }

    pub fn is_collateral_allowed<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isCollateralAllowed")
            .argument(&token)
            .original_result()
    }

    pub fn is_verifier_allowed<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        verifier: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isVerifierAllowed")
            .argument(&verifier)
            .original_result()
    }

    pub fn affiliate_split<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
    >(
        self,
        code: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Option<AffiliateSplit<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAffiliateSplit")
            .argument(&code)
            .original_result()
    }
}
