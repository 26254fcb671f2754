// Proxy for the borrower-side origination callback. A smart-contract
// borrower opts in by passing non-empty callback data in its BorrowerSpec.

#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

pub struct LoanCallbackProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for LoanCallbackProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = LoanCallbackProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        LoanCallbackProxyMethods { wrapped_tx: tx }
    }
}

pub struct LoanCallbackProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> LoanCallbackProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    /// callback_mock deploy shape.
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        controller_address: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&controller_address)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> LoanCallbackProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn initiate_loan<
        Arg0: ProxyArg<common_structs::LoanTerms<Env::Api>>,
        Arg1: ProxyArg<common_structs::SignatureProperties>,
        Arg2: ProxyArg<common_structs::SigningSide>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg4: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg5: ProxyArg<ManagedAddress<Env::Api>>,
        Arg6: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        terms: Arg0,
        properties: Arg1,
        side: Arg2,
        signature: Arg3,
        extra_data: Arg4,
        lender: Arg5,
        callback_data: Arg6,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("initiateLoan")
            .argument(&terms)
            .argument(&properties)
            .argument(&side)
            .argument(&signature)
            .argument(&extra_data)
            .argument(&lender)
            .argument(&callback_data)
            .original_result()
    }

    pub fn last_callback_loan_id(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLastCallbackLoanId")
            .original_result()
    }

    pub fn on_loan_originated<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        loan_id: Arg0,
        data: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("onLoanOriginated")
            .argument(&loan_id)
            .argument(&data)
            .original_result()
    }
}
