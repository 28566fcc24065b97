#![no_std]

multiversx_sc::imports!();

pub mod campaign_proxy;
pub mod sponsor_pool_proxy;

use access_control::errors::{
    ERR_CAMPAIGN_BELOW_GOAL, ERR_CAMPAIGN_NOT_CONTRACT, ERR_INSUFFICIENT_POOL_BALANCE,
    ERR_NOT_WHITELISTED, ERR_ZERO_SPONSORSHIP,
};

// ============================================================
// Constants
// ============================================================

/// Matching percentage used when none is given at deploy time
pub const DEFAULT_PERCENT: u64 = 20;

// ============================================================
// Contract
// ============================================================

/// Owner-funded pool that tops up whitelisted campaigns which have
/// reached their goal. The match is a percentage of either the
/// campaign's goal or, with total coverage on, its current balance.
#[multiversx_sc::contract]
pub trait SponsorPool: access_control::guards::GuardsModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    #[payable("EGLD")]
    fn init(&self, percent: OptionalValue<u64>, total_coverage: OptionalValue<bool>) {
        let percent = percent.into_option().unwrap_or(DEFAULT_PERCENT);
        self.require_valid_percentage(percent);
        self.percent().set(percent);
        self.total_coverage()
            .set(total_coverage.into_option().unwrap_or_default());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: requestFunds
    // Called by a campaign contract from its notifySponsor.
    // The campaign's goal and balance are read back from the
    // campaign's own storage, never taken as arguments.
    // ========================================================

    #[endpoint(requestFunds)]
    fn request_funds(&self) {
        let campaign = self.require_caller_is_contract();
        require!(self.whitelist().contains(&campaign), ERR_NOT_WHITELISTED);

        let (funding_goal, campaign_balance) = self
            .tx()
            .to(&campaign)
            .typed(campaign_proxy::CampaignProxy)
            .funding_state()
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();
        require!(campaign_balance >= funding_goal, ERR_CAMPAIGN_BELOW_GOAL);

        let sponsorship = self.compute_sponsorship(&campaign_balance, &funding_goal);
        require!(sponsorship > 0u64, ERR_ZERO_SPONSORSHIP);
        require!(
            sponsorship <= self.pool_balance(),
            ERR_INSUFFICIENT_POOL_BALANCE
        );

        self.total_sponsored().update(|total| *total += &sponsorship);
        self.sponsored_amount(&campaign)
            .update(|total| *total += &sponsorship);

        self.tx()
            .to(&campaign)
            .typed(campaign_proxy::CampaignProxy)
            .receive_sponsorship()
            .egld(&sponsorship)
            .sync_call();

        self.sponsorship_event(&campaign, &sponsorship);
    }

    // ========================================================
    // OWNER: configuration
    // ========================================================

    #[only_owner]
    #[endpoint(setPercent)]
    fn set_percent(&self, percent: u64) {
        self.require_valid_percentage(percent);
        self.percent().set(percent);
        self.percent_changed_event(percent);
    }

    #[only_owner]
    #[endpoint(setTotalCoverage)]
    fn set_total_coverage(&self, total_coverage: bool) {
        self.total_coverage().set(total_coverage);
        self.coverage_changed_event(total_coverage);
    }

    #[only_owner]
    #[endpoint(addToWhitelist)]
    fn add_to_whitelist(&self, campaign: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&campaign),
            ERR_CAMPAIGN_NOT_CONTRACT
        );
        if self.whitelist().insert(campaign.clone()) {
            self.whitelist_added_event(&campaign);
        }
    }

    #[only_owner]
    #[endpoint(removeFromWhitelist)]
    fn remove_from_whitelist(&self, campaign: ManagedAddress) {
        if self.whitelist().swap_remove(&campaign) {
            self.whitelist_removed_event(&campaign);
        }
    }

    // ========================================================
    // OWNER: funds
    // ========================================================

    #[only_owner]
    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let payment_amount = self.call_value().egld_value().clone_value();
        self.require_non_zero_amount(&payment_amount);
        self.pool_deposit_event(&payment_amount, &self.pool_balance());
    }

    #[only_owner]
    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        self.require_non_zero_amount(&amount);
        require!(amount <= self.pool_balance(), ERR_INSUFFICIENT_POOL_BALANCE);

        let owner = self.blockchain().get_caller();
        self.send().direct_egld(&owner, &amount);
        self.pool_withdraw_event(&amount, &self.pool_balance());
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn compute_sponsorship(&self, campaign_balance: &BigUint, funding_goal: &BigUint) -> BigUint {
        let basis = if self.total_coverage().get() {
            campaign_balance
        } else {
            funding_goal
        };
        self.percentage_of(basis, self.percent().get())
    }

    fn pool_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getPercent)]
    fn get_percent(&self) -> u64 {
        self.percent().get()
    }

    #[view(isTotalCoverage)]
    fn is_total_coverage(&self) -> bool {
        self.total_coverage().get()
    }

    #[view(isWhitelisted)]
    fn is_whitelisted(&self, campaign: &ManagedAddress) -> bool {
        self.whitelist().contains(campaign)
    }

    #[view(getWhitelist)]
    fn get_whitelist(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for campaign in self.whitelist().iter() {
            result.push(campaign);
        }
        result
    }

    #[view(getBalance)]
    fn get_balance(&self) -> BigUint {
        self.pool_balance()
    }

    #[view(getTotalSponsored)]
    fn get_total_sponsored(&self) -> BigUint {
        self.total_sponsored().get()
    }

    #[view(getSponsoredAmount)]
    fn get_sponsored_amount(&self, campaign: &ManagedAddress) -> BigUint {
        self.sponsored_amount(campaign).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("sponsorship")]
    fn sponsorship_event(&self, #[indexed] campaign: &ManagedAddress, amount: &BigUint);

    #[event("percentChanged")]
    fn percent_changed_event(&self, #[indexed] percent: u64);

    #[event("coverageChanged")]
    fn coverage_changed_event(&self, #[indexed] total_coverage: bool);

    #[event("whitelistAdded")]
    fn whitelist_added_event(&self, #[indexed] campaign: &ManagedAddress);

    #[event("whitelistRemoved")]
    fn whitelist_removed_event(&self, #[indexed] campaign: &ManagedAddress);

    #[event("poolDeposit")]
    fn pool_deposit_event(&self, #[indexed] amount: &BigUint, balance: &BigUint);

    #[event("poolWithdraw")]
    fn pool_withdraw_event(&self, #[indexed] amount: &BigUint, balance: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("percent")]
    fn percent(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("totalCoverage")]
    fn total_coverage(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("whitelist")]
    fn whitelist(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Reporting ──

    #[storage_mapper("totalSponsored")]
    fn total_sponsored(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("sponsoredAmount")]
    fn sponsored_amount(&self, campaign: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
