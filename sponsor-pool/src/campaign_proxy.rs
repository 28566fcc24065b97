use multiversx_sc::proxy_imports::*;

pub struct CampaignProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CampaignProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CampaignProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CampaignProxyMethods { wrapped_tx: tx }
    }
}

pub struct CampaignProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> CampaignProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn funding_state(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<BigUint<Env::Api>, BigUint<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFundingState")
            .original_result()
    }

    /// Payable in EGLD.
    pub fn receive_sponsorship(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("receiveSponsorship")
            .original_result()
    }
}
