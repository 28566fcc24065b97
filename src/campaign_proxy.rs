use multiversx_sc::proxy_imports::*;

use crate::types::Contributor;

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

impl<Env, From, Gas> CampaignProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        funding_goal: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&funding_goal)
            .original_result()
    }
}

impl<Env, From, To, Gas> CampaignProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> CampaignProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn deposit<Arg0: ProxyArg<OptionalValue<ManagedBuffer<Env::Api>>>>(
        self,
        display_name: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("deposit")
            .argument(&display_name)
            .original_result()
    }

    pub fn withdraw<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdraw")
            .argument(&amount)
            .original_result()
    }

    pub fn notify_sponsor<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        sponsor_pool: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("notifySponsor")
            .argument(&sponsor_pool)
            .original_result()
    }

    pub fn receive_sponsorship(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("receiveSponsorship")
            .original_result()
    }

    pub fn transfer_to_distribution<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        registry: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferToDistribution")
            .argument(&registry)
            .original_result()
    }

    pub fn reset<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        funding_goal: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("reset")
            .argument(&funding_goal)
            .original_result()
    }

    pub fn check_self_contribution(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("checkSelfContribution")
            .original_result()
    }

    pub fn status(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStatus")
            .original_result()
    }

    pub fn funding_goal(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFundingGoal")
            .original_result()
    }

    pub fn funding_state(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<BigUint<Env::Api>, BigUint<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFundingState")
            .original_result()
    }

    pub fn contribution<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        contributor: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContribution")
            .argument(&contributor)
            .original_result()
    }

    pub fn contributors(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Contributor<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContributors")
            .original_result()
    }

    pub fn last_contributor(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLastContributor")
            .original_result()
    }

    pub fn sponsorship_received(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSponsorshipReceived")
            .original_result()
    }

    pub fn campaign_info(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue4<BigUint<Env::Api>, BigUint<Env::Api>, ManagedBuffer<Env::Api>, u64>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCampaignInfo")
            .original_result()
    }
}
