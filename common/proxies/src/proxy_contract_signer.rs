// Proxy for the contract-signer validation entry point. Any contract acting
// as a counterparty signer must expose this ABI and return the magic value.

#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

pub struct ContractSignerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ContractSignerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ContractSignerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ContractSignerProxyMethods { wrapped_tx: tx }
    }
}

pub struct ContractSignerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> ContractSignerProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    /// signer_mock deploy shape: accept flag + required extra data suffix.
    pub fn init<
        Arg0: ProxyArg<bool>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        accept: Arg0,
        required_extra_data: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&accept)
            .argument(&required_extra_data)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> ContractSignerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn is_valid_signature<
        Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        digest: Arg0,
        payload: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isValidSignature")
            .argument(&digest)
            .argument(&payload)
            .original_result()
    }
}
