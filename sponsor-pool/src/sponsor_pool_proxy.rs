use multiversx_sc::proxy_imports::*;

pub struct SponsorPoolProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for SponsorPoolProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = SponsorPoolProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        SponsorPoolProxyMethods { wrapped_tx: tx }
    }
}

pub struct SponsorPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> SponsorPoolProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    /// Payable in EGLD: the attached value is the pool's initial balance.
    pub fn init<
        Arg0: ProxyArg<OptionalValue<u64>>,
        Arg1: ProxyArg<OptionalValue<bool>>,
    >(
        self,
        percent: Arg0,
        total_coverage: Arg1,
    ) -> TxTypedDeploy<Env, From, (), Gas, ()> {
        self.wrapped_tx
            .raw_deploy()
            .argument(&percent)
            .argument(&total_coverage)
            .original_result()
    }
}

impl<Env, From, To, Gas> SponsorPoolProxyMethods<Env, From, To, Gas>
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

impl<Env, From, To, Gas> SponsorPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn request_funds(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("requestFunds")
            .original_result()
    }

    pub fn set_percent<Arg0: ProxyArg<u64>>(
        self,
        percent: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setPercent")
            .argument(&percent)
            .original_result()
    }

    pub fn set_total_coverage<Arg0: ProxyArg<bool>>(
        self,
        total_coverage: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setTotalCoverage")
            .argument(&total_coverage)
            .original_result()
    }

    pub fn add_to_whitelist<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        campaign: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addToWhitelist")
            .argument(&campaign)
            .original_result()
    }

    pub fn remove_from_whitelist<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        campaign: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeFromWhitelist")
            .argument(&campaign)
            .original_result()
    }

    pub fn deposit(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx.raw_call("deposit").original_result()
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

    pub fn percent(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPercent")
            .original_result()
    }

    pub fn is_total_coverage(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isTotalCoverage")
            .original_result()
    }

    pub fn is_whitelisted<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        campaign: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isWhitelisted")
            .argument(&campaign)
            .original_result()
    }

    pub fn whitelist(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWhitelist")
            .original_result()
    }

    pub fn balance(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBalance")
            .original_result()
    }

    pub fn total_sponsored(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalSponsored")
            .original_result()
    }

    pub fn sponsored_amount<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        campaign: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSponsoredAmount")
            .argument(&campaign)
            .original_result()
    }
}
