// Shared proxy for every predicate verifier: dispatch is by allow-listed
// address, all variants expose the same `verify` ABI. Deploy-time inits
// differ per variant and are included here as well.

#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

pub struct PredicateVerifierProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for PredicateVerifierProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = PredicateVerifierProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        PredicateVerifierProxyMethods { wrapped_tx: tx }
    }
}

pub struct PredicateVerifierProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> PredicateVerifierProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    /// items_verifier / collection_verifier deploy shape.
    pub fn init_with_vault<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        vault_address: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&vault_address)
            .original_result()
    }

    /// unvaulted_verifier deploy shape.
    pub fn init(
        self,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }

    /// punk_verifier deploy shape.
    pub fn init_with_punk_market<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        vault_address: Arg0,
        punk_market_address: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&vault_address)
            .argument(&punk_market_address)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> PredicateVerifierProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn verify<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        caller: Arg0,
        signer: Arg1,
        collateral_token: Arg2,
        collateral_nonce: Arg3,
        data: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("verify")
            .argument(&caller)
            .argument(&signer)
            .argument(&collateral_token)
            .argument(&collateral_nonce)
            .argument(&data)
            .original_result()
    }
}
