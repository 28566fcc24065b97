#![no_std]

multiversx_sc::imports!();

pub mod distribution_registry_proxy;

use access_control::errors::{
    ERR_ALREADY_PAID, ERR_BENEFICIARY_EXISTS, ERR_NOT_MANAGER, ERR_NO_SHARE,
    ERR_UNKNOWN_BENEFICIARY,
};

// ============================================================
// Contract
// ============================================================

/// Holds funds pushed by campaigns, keyed by each campaign's manager,
/// and pays every registered beneficiary its percentage exactly once.
///
/// The recorded amount and the running percentage total are never
/// reduced by payouts, so each payout depends only on the beneficiary's
/// own share and not on who withdrew before. Truncation dust and
/// unclaimed shares stay in the registry.
#[multiversx_sc::contract]
pub trait DistributionRegistry: access_control::guards::GuardsModule {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: transferFunds
    // Campaign contracts only. Repeated pushes for the same
    // manager add up.
    // ========================================================

    #[endpoint(transferFunds)]
    #[payable("EGLD")]
    fn transfer_funds(&self, manager: ManagedAddress) {
        let campaign = self.require_caller_is_contract();
        let payment_amount = self.call_value().egld_value().clone_value();
        self.require_non_zero_amount(&payment_amount);

        self.amount(&manager)
            .update(|amount| *amount += &payment_amount);

        self.funds_received_event(&manager, &campaign, &payment_amount);
    }

    // ========================================================
    // MANAGER: beneficiaries
    // ========================================================

    #[endpoint(addBeneficiary)]
    fn add_beneficiary(&self, beneficiary: ManagedAddress, percent: u64) {
        let manager = self.require_caller_is_manager();
        self.require_valid_percentage(percent);
        require!(
            !self.paid_beneficiaries(&manager).contains(&beneficiary),
            ERR_ALREADY_PAID
        );
        require!(
            self.beneficiary_share(&manager, &beneficiary).get() == 0,
            ERR_BENEFICIARY_EXISTS
        );

        let new_total = self.total_percentage(&manager).get() + percent;
        self.require_percentage_total_within_bounds(new_total);

        self.beneficiary_share(&manager, &beneficiary).set(percent);
        self.beneficiaries(&manager).insert(beneficiary.clone());
        self.total_percentage(&manager).set(new_total);

        self.beneficiary_added_event(&manager, &beneficiary, percent);
    }

    /// Replaces a share: the old percentage leaves the running total
    /// before the new one is validated and added.
    #[endpoint(updatePercentageOfBeneficiary)]
    fn update_percentage_of_beneficiary(&self, beneficiary: ManagedAddress, percent: u64) {
        let manager = self.require_caller_is_manager();
        self.require_valid_percentage(percent);
        require!(
            !self.paid_beneficiaries(&manager).contains(&beneficiary),
            ERR_ALREADY_PAID
        );

        let old_percent = self.beneficiary_share(&manager, &beneficiary).get();
        require!(old_percent > 0, ERR_UNKNOWN_BENEFICIARY);

        let new_total = self.total_percentage(&manager).get() - old_percent + percent;
        self.require_percentage_total_within_bounds(new_total);

        self.beneficiary_share(&manager, &beneficiary).set(percent);
        self.total_percentage(&manager).set(new_total);

        self.beneficiary_updated_event(&manager, &beneficiary, percent);
    }

    // ========================================================
    // ENDPOINT: withdrawBenefits
    // Anyone with a share pulls it once.
    // ========================================================

    #[endpoint(withdrawBenefits)]
    fn withdraw_benefits(&self, manager: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(
            !self.paid_beneficiaries(&manager).contains(&caller),
            ERR_ALREADY_PAID
        );

        let percent = self.beneficiary_share(&manager, &caller).get();
        require!(percent > 0, ERR_NO_SHARE);

        let payout = self.percentage_of(&self.amount(&manager).get(), percent);
        self.paid_beneficiaries(&manager).insert(caller.clone());
        self.distributed(&manager)
            .update(|distributed| *distributed += &payout);

        if payout > 0u64 {
            self.send().direct_egld(&caller, &payout);
        }
        self.benefits_withdrawn_event(&manager, &caller, &payout);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// A manager is an address that has received funds from a campaign.
    fn require_caller_is_manager(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.amount(&caller).get() > 0u64, ERR_NOT_MANAGER);
        caller
    }

    // ========================================================
    // VIEWS — caller-scoped
    // ========================================================

    #[view(checkSelfPercentage)]
    fn check_self_percentage(&self, manager: &ManagedAddress) -> u64 {
        let caller = self.blockchain().get_caller();
        self.beneficiary_share(manager, &caller).get()
    }

    #[view(checkSelfAmount)]
    fn check_self_amount(&self) -> BigUint {
        let manager = self.require_caller_is_manager();
        self.amount(&manager).get()
    }

    #[view(checkSelfPaidBeneficiaries)]
    fn check_self_paid_beneficiaries(&self) -> MultiValueEncoded<ManagedAddress> {
        let manager = self.require_caller_is_manager();
        let mut result = MultiValueEncoded::new();
        for beneficiary in self.paid_beneficiaries(&manager).iter() {
            result.push(beneficiary);
        }
        result
    }

    // ========================================================
    // VIEWS — public
    // ========================================================

    #[view(getAmount)]
    fn get_amount(&self, manager: &ManagedAddress) -> BigUint {
        self.amount(manager).get()
    }

    #[view(getTotalPercentage)]
    fn get_total_percentage(&self, manager: &ManagedAddress) -> u64 {
        self.total_percentage(manager).get()
    }

    #[view(getBeneficiaries)]
    fn get_beneficiaries(
        &self,
        manager: &ManagedAddress,
    ) -> MultiValueEncoded<MultiValue2<ManagedAddress, u64>> {
        let mut result = MultiValueEncoded::new();
        for beneficiary in self.beneficiaries(manager).iter() {
            let percent = self.beneficiary_share(manager, &beneficiary).get();
            result.push((beneficiary, percent).into());
        }
        result
    }

    #[view(isPaid)]
    fn is_paid(&self, manager: &ManagedAddress, beneficiary: &ManagedAddress) -> bool {
        self.paid_beneficiaries(manager).contains(beneficiary)
    }

    /// Unclaimed shares plus truncation dust.
    #[view(getUndistributed)]
    fn get_undistributed(&self, manager: &ManagedAddress) -> BigUint {
        self.amount(manager).get() - self.distributed(manager).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("fundsReceived")]
    fn funds_received_event(
        &self,
        #[indexed] manager: &ManagedAddress,
        #[indexed] campaign: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("beneficiaryAdded")]
    fn beneficiary_added_event(
        &self,
        #[indexed] manager: &ManagedAddress,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] percent: u64,
    );

    #[event("beneficiaryUpdated")]
    fn beneficiary_updated_event(
        &self,
        #[indexed] manager: &ManagedAddress,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] percent: u64,
    );

    #[event("benefitsWithdrawn")]
    fn benefits_withdrawn_event(
        &self,
        #[indexed] manager: &ManagedAddress,
        #[indexed] beneficiary: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Funds per manager ──

    #[storage_mapper("amount")]
    fn amount(&self, manager: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("distributed")]
    fn distributed(&self, manager: &ManagedAddress) -> SingleValueMapper<BigUint>;

    // ── Shares ──

    #[storage_mapper("beneficiaryShare")]
    fn beneficiary_share(
        &self,
        manager: &ManagedAddress,
        beneficiary: &ManagedAddress,
    ) -> SingleValueMapper<u64>;

    #[storage_mapper("beneficiaries")]
    fn beneficiaries(&self, manager: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("totalPercentage")]
    fn total_percentage(&self, manager: &ManagedAddress) -> SingleValueMapper<u64>;

    /// Append-only, in payout order.
    #[storage_mapper("paidBeneficiaries")]
    fn paid_beneficiaries(&self, manager: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;
}
