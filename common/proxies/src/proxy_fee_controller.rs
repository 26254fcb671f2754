// Hand-maintained proxy for the fee controller contract.

#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

use common_structs::{FeeSchedule, FeeType};

pub struct FeeControllerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FeeControllerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FeeControllerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FeeControllerProxyMethods { wrapped_tx: tx }
    }
}

pub struct FeeControllerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> FeeControllerProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(
        self,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> FeeControllerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_fee_bps<
        Arg0: ProxyArg<FeeType>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        fee_type: Arg0,
        bps: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setFeeBps")
            .argument(&fee_type)
            .argument(&bps)
            .original_result()
    }

    pub fn get_fee_bps<
        Arg0: ProxyArg<FeeType>,
    >(
        self,
        fee_type: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFeeBps")
            .argument(&fee_type)
            .original_result()
    }

    pub fn fee_schedule(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, FeeSchedule<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFeeSchedule")
            .original_result()
    }
}
