// Hand-maintained proxy for the loan ledger contract. Keep in sync with
// loan_ledger/src/lib.rs.

#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

use common_structs::{AffiliateSplit, Loan, LoanTerms};

pub struct LoanLedgerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for LoanLedgerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = LoanLedgerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        LoanLedgerProxyMethods { wrapped_tx: tx }
    }
}

pub struct LoanLedgerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> LoanLedgerProxyMethods<Env, From, (), Gas>
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
        fee_controller_address: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&fee_controller_address)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> LoanLedgerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_controller<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        controller: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setController")
            .argument(&controller)
            .original_result()
    }

    pub fn deposit_funds(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("depositFunds")
            .original_result()
    }

    pub fn deposit_funds_for<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        beneficiary: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("depositFundsFor")
            .argument(&beneficiary)
            .original_result()
    }

    pub fn withdraw_funds<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        token: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawFunds")
            .argument(&token)
            .argument(&amount)
            .original_result()
    }

    pub fn deposit_collateral<
        Arg0: ProxyArg<bool>,
    >(
        self,
        authorize: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("depositCollateral")
            .argument(&authorize)
            .original_result()
    }

    pub fn withdraw_collateral<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        token: Arg0,
        nonce: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawCollateral")
            .argument(&token)
            .argument(&nonce)
            .original_result()
    }

    pub fn set_collateral_authorization<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<bool>,
    >(
        self,
        token: Arg0,
        nonce: Arg1,
        authorized: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setCollateralAuthorization")
            .argument(&token)
            .argument(&nonce)
            .argument(&authorized)
            .original_result()
    }

    pub fn consume_collateral_permit<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<u64>,
        Arg5: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        owner: Arg0,
        token: Arg1,
        nonce: Arg2,
        permit_nonce: Arg3,
        deadline: Arg4,
        signature: Arg5,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("consumeCollateralPermit")
            .argument(&owner)
            .argument(&token)
            .argument(&nonce)
            .argument(&permit_nonce)
            .argument(&deadline)
            .argument(&signature)
            .original_result()
    }

    pub fn originate<
        Arg0: ProxyArg<LoanTerms<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<Option<AffiliateSplit<Env::Api>>>,
        Arg4: ProxyArg<bool>,
    >(
        self,
        terms: Arg0,
        lender: Arg1,
        borrower: Arg2,
        affiliate: Arg3,
        caller_is_lender_side: Arg4,
    ) -> TxTypedCall<Env, From, To, (), Gas, u64> {
        self.wrapped_tx
            .raw_call("originate")
            .argument(&terms)
            .argument(&lender)
            .argument(&borrower)
            .argument(&affiliate)
            .argument(&caller_is_lender_side)
            .original_result()
    }

    pub fn settle_and_reopen<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<LoanTerms<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<Option<AffiliateSplit<Env::Api>>>,
        Arg4: ProxyArg<bool>,
        Arg5: ProxyArg<bool>,
    >(
        self,
        old_loan_id: Arg0,
        new_terms: Arg1,
        new_lender: Arg2,
        affiliate: Arg3,
        caller_is_lender_side: Arg4,
        is_refinance: Arg5,
    ) -> TxTypedCall<Env, From, To, (), Gas, MultiValue2<u64, BigUint<Env::Api>>> {
        self.wrapped_tx
            .raw_call("settleAndReopen")
            .argument(&old_loan_id)
            .argument(&new_terms)
            .argument(&new_lender)
            .argument(&affiliate)
            .argument(&caller_is_lender_side)
            .argument(&is_refinance)
            .original_result()
    }

    pub fn repay<
        Arg0: ProxyArg<u64>,
    >(
        self,
        loan_id: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("repay")
            .argument(&loan_id)
            .original_result()
    }

    pub fn claim<
        Arg0: ProxyArg<u64>,
    >(
        self,
        loan_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claim")
            .argument(&loan_id)
            .original_result()
    }

    pub fn register_borrower_note<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        token_name: Arg0,
        ticker: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("registerBorrowerNote")
            .argument(&token_name)
            .argument(&ticker)
            .original_result()
    }

    pub fn register_lender_note<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        token_name: Arg0,
        ticker: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("registerLenderNote")
            .argument(&token_name)
            .argument(&ticker)
            .original_result()
    }

    pub fn withdraw_protocol_fees<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawProtocolFees")
            .argument(&token)
            .original_result()
    }

    pub fn withdraw_affiliate_fees<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawAffiliateFees")
            .argument(&token)
            .original_result()
    }

    pub fn get_loan<
        Arg0: ProxyArg<u64>,
    >(
        self,
        loan_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Loan<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLoan")
            .argument(&loan_id)
            .original_result()
    }

    pub fn get_interest_due<
        Arg0: ProxyArg<u64>,
    >(
        self,
        loan_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getInterestDue")
            .argument(&loan_id)
            .original_result()
    }

    pub fn last_loan_id(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLastLoanId")
            .original_result()
    }

    pub fn funds_escrow<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        account: Arg0,
        token: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFundsEscrow")
            .argument(&account)
            .argument(&token)
            .original_result()
    }

    pub fn collateral_owner<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        token: Arg0,
        nonce: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCollateralOwner")
            .argument(&token)
            .argument(&nonce)
            .original_result()
    }

    pub fn protocol_fees<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProtocolFees")
            .argument(&token)
            .original_result()
    }

    pub fn affiliate_fees<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        affiliate: Arg0,
        token: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAffiliateFees")
            .argument(&affiliate)
            .argument(&token)
            .original_result()
    }

    pub fn collateral_permit_digest<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        owner: Arg0,
        token: Arg1,
        nonce: Arg2,
        permit_nonce: Arg3,
        deadline: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCollateralPermitDigest")
            .argument(&owner)
            .argument(&token)
            .argument(&nonce)
            .argument(&permit_nonce)
            .argument(&deadline)
            .original_result()
    }
}
