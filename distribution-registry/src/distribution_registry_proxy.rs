use multiversx_sc::proxy_imports::*;

pub struct DistributionRegistryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DistributionRegistryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DistributionRegistryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DistributionRegistryProxyMethods { wrapped_tx: tx }
    }
}

pub struct DistributionRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> DistributionRegistryProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> DistributionRegistryProxyMethods<Env, From, To, Gas>
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

impl<Env, From, To, Gas> DistributionRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn transfer_funds<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        manager: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("transferFunds")
            .argument(&manager)
            .original_result()
    }

    pub fn add_beneficiary<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<u64>>(
        self,
        beneficiary: Arg0,
        percent: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addBeneficiary")
            .argument(&beneficiary)
            .argument(&percent)
            .original_result()
    }

    pub fn update_percentage_of_beneficiary<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        beneficiary: Arg0,
        percent: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updatePercentageOfBeneficiary")
            .argument(&beneficiary)
            .argument(&percent)
            .original_result()
    }

    pub fn withdraw_benefits<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        manager: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawBenefits")
            .argument(&manager)
            .original_result()
    }

    pub fn check_self_percentage<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        manager: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("checkSelfPercentage")
            .argument(&manager)
            .original_result()
    }

    pub fn check_self_amount(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("checkSelfAmount")
            .original_result()
    }

    pub fn check_self_paid_beneficiaries(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("checkSelfPaidBeneficiaries")
            .original_result()
    }

    pub fn amount<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        manager: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAmount")
            .argument(&manager)
            .original_result()
    }

    pub fn total_percentage<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        manager: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalPercentage")
            .argument(&manager)
            .original_result()
    }

    pub fn beneficiaries<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        manager: Arg0,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, MultiValue2<ManagedAddress<Env::Api>, u64>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBeneficiaries")
            .argument(&manager)
            .original_result()
    }

    pub fn is_paid<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        manager: Arg0,
        beneficiary: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isPaid")
            .argument(&manager)
            .argument(&beneficiary)
            .original_result()
    }

    pub fn undistributed<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        manager: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getUndistributed")
            .argument(&manager)
            .original_result()
    }
}
