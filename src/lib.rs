#![no_std]

multiversx_sc::imports!();

pub mod campaign_proxy;
pub mod distribution_registry_proxy;
pub mod sponsor_pool_proxy;
pub mod types;

use access_control::errors::{
    ERR_ALREADY_FUNDED, ERR_BALANCE_NOT_EMPTY, ERR_BELOW_GOAL, ERR_EXCEEDS_CONTRIBUTION,
    ERR_NOTHING_TO_TRANSFER, ERR_NOT_ACTIVE_SPONSOR, ERR_NOT_FUNDED, ERR_NOT_LAST_CONTRIBUTOR,
    ERR_NOT_PREFUNDED, ERR_NOT_UNFUNDED, ERR_SPONSOR_NOT_DELIVERED,
};
use types::{CampaignStatus, Contributor};

// ============================================================
// Contract
// ============================================================

/// Collects EGLD deposits toward a funding goal.
///
/// Lifecycle: `Unfunded` while deposits come in, `Prefunded` once the
/// balance covers the goal, `Funded` after the sponsor pool tops it up.
/// The owner then pushes the balance to the distribution registry and
/// may reset the campaign for another cycle.
#[multiversx_sc::contract]
pub trait Campaign: access_control::guards::GuardsModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, funding_goal: BigUint) {
        self.require_non_zero_amount(&funding_goal);
        self.funding_goal().set(&funding_goal);
        self.status().set(CampaignStatus::Unfunded);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Open only while Unfunded. Reaching the goal locks the
    // campaign into Prefunded.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self, display_name: OptionalValue<ManagedBuffer>) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();
        self.require_non_zero_amount(&payment_amount);
        require!(
            self.status().get() == CampaignStatus::Unfunded,
            ERR_NOT_UNFUNDED
        );

        // First deposit from this identity in the current cycle
        if self.known_contributors().insert(caller.clone()) {
            let display_name = display_name
                .into_option()
                .unwrap_or_else(ManagedBuffer::new);
            self.contributors().push(&Contributor {
                address: caller.clone(),
                display_name,
            });
        }

        self.contribution(&caller)
            .update(|contribution| *contribution += &payment_amount);
        self.last_contributor().set(&caller);

        self.deposit_event(&caller, &payment_amount);

        let balance = self.held_balance();
        if balance >= self.funding_goal().get() {
            self.status().set(CampaignStatus::Prefunded);
            self.prefunded_event(&caller, &balance);
        }
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Unfunded: any contributor, up to their contribution.
    // Prefunded: last contributor only, never below the goal.
    // Funded: closed.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_non_zero_amount(&amount);

        match self.status().get() {
            CampaignStatus::Unfunded => {}
            CampaignStatus::Prefunded => {
                require!(
                    caller == self.last_contributor().get(),
                    ERR_NOT_LAST_CONTRIBUTOR
                );
                require!(
                    self.held_balance() >= &self.funding_goal().get() + &amount,
                    ERR_BELOW_GOAL
                );
            }
            CampaignStatus::Funded => sc_panic!(ERR_ALREADY_FUNDED),
        }

        require!(
            amount <= self.contribution(&caller).get(),
            ERR_EXCEEDS_CONTRIBUTION
        );

        self.contribution(&caller)
            .update(|contribution| *contribution -= &amount);

        self.send().direct_egld(&caller, &amount);
        self.withdraw_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: notifySponsor
    // Asks the sponsor pool for a matching top-up. The pool pays
    // back into receiveSponsorship within the same call; if it
    // does not, the whole operation reverts.
    // ========================================================

    #[only_owner]
    #[endpoint(notifySponsor)]
    fn notify_sponsor(&self, sponsor_pool: ManagedAddress) {
        require!(
            self.status().get() == CampaignStatus::Prefunded,
            ERR_NOT_PREFUNDED
        );

        self.sponsor_request().set(&sponsor_pool);
        self.tx()
            .to(&sponsor_pool)
            .typed(sponsor_pool_proxy::SponsorPoolProxy)
            .request_funds()
            .sync_call();
        self.sponsor_request().clear();

        require!(
            self.status().get() == CampaignStatus::Funded,
            ERR_SPONSOR_NOT_DELIVERED
        );

        self.sponsor_notified_event(&sponsor_pool, &self.sponsorship_received().get());
    }

    // ========================================================
    // ENDPOINT: receiveSponsorship
    // Only the pool named in an in-flight notifySponsor may pay
    // in here, so every sponsorship traces back to the owner.
    // ========================================================

    #[endpoint(receiveSponsorship)]
    #[payable("EGLD")]
    fn receive_sponsorship(&self) {
        let caller = self.blockchain().get_caller();
        let sponsor_request = self.sponsor_request();
        require!(
            !sponsor_request.is_empty() && sponsor_request.get() == caller,
            ERR_NOT_ACTIVE_SPONSOR
        );
        require!(
            self.status().get() == CampaignStatus::Prefunded,
            ERR_NOT_PREFUNDED
        );

        let amount = self.call_value().egld_value().clone_value();
        self.sponsorship_received()
            .update(|received| *received += &amount);
        self.status().set(CampaignStatus::Funded);

        self.sponsorship_received_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: transferToDistribution
    // Pushes the entire balance to the registry under the
    // owner's address. Contributions are settled with it; the
    // contributor list stays until reset.
    // ========================================================

    #[only_owner]
    #[endpoint(transferToDistribution)]
    fn transfer_to_distribution(&self, registry: ManagedAddress) {
        require!(
            self.status().get() == CampaignStatus::Funded,
            ERR_NOT_FUNDED
        );
        let balance = self.held_balance();
        require!(balance > 0u64, ERR_NOTHING_TO_TRANSFER);

        for contributor in self.contributors().iter() {
            self.contribution(&contributor.address).clear();
        }

        let manager = self.blockchain().get_owner_address();
        self.tx()
            .to(&registry)
            .typed(distribution_registry_proxy::DistributionRegistryProxy)
            .transfer_funds(&manager)
            .egld(&balance)
            .sync_call();

        self.funds_transferred_event(&registry, &manager, &balance);
    }

    // ========================================================
    // ENDPOINT: reset
    // Starts a new cycle once the funds have left the contract.
    // ========================================================

    #[only_owner]
    #[endpoint(reset)]
    fn reset(&self, funding_goal: BigUint) {
        self.require_non_zero_amount(&funding_goal);
        require!(
            self.status().get() == CampaignStatus::Funded,
            ERR_NOT_FUNDED
        );
        require!(self.held_balance() == 0u64, ERR_BALANCE_NOT_EMPTY);

        for contributor in self.contributors().iter() {
            self.contribution(&contributor.address).clear();
        }
        self.contributors().clear();
        self.known_contributors().clear();
        self.last_contributor().clear();
        self.sponsorship_received().clear();

        self.funding_goal().set(&funding_goal);
        self.status().set(CampaignStatus::Unfunded);

        self.campaign_reset_event(&funding_goal);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn held_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(checkSelfContribution)]
    fn check_self_contribution(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.contribution(&caller).get()
    }

    #[view(getStatus)]
    fn get_status(&self) -> ManagedBuffer {
        ManagedBuffer::from(self.status().get().name())
    }

    #[view(getFundingGoal)]
    fn get_funding_goal(&self) -> BigUint {
        self.funding_goal().get()
    }

    /// Goal and held balance, read by the sponsor pool to validate a
    /// matching request.
    #[view(getFundingState)]
    fn get_funding_state(&self) -> MultiValue2<BigUint, BigUint> {
        (self.funding_goal().get(), self.held_balance()).into()
    }

    #[view(getContribution)]
    fn get_contribution(&self, contributor: &ManagedAddress) -> BigUint {
        self.contribution(contributor).get()
    }

    #[view(getContributors)]
    fn get_contributors(&self) -> MultiValueEncoded<Contributor<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for contributor in self.contributors().iter() {
            result.push(contributor);
        }
        result
    }

    #[view(getLastContributor)]
    fn get_last_contributor(&self) -> OptionalValue<ManagedAddress> {
        if self.last_contributor().is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.last_contributor().get())
        }
    }

    #[view(getSponsorshipReceived)]
    fn get_sponsorship_received(&self) -> BigUint {
        self.sponsorship_received().get()
    }

    #[view(getCampaignInfo)]
    fn get_campaign_info(&self) -> MultiValue4<BigUint, BigUint, ManagedBuffer, u64> {
        let goal = self.funding_goal().get();
        let balance = self.held_balance();
        let status = self.get_status();
        let contributor_count = self.contributors().len() as u64;
        (goal, balance, status, contributor_count).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("deposit")]
    fn deposit_event(&self, #[indexed] contributor: &ManagedAddress, amount: &BigUint);

    #[event("withdraw")]
    fn withdraw_event(&self, #[indexed] contributor: &ManagedAddress, amount: &BigUint);

    #[event("prefunded")]
    fn prefunded_event(&self, #[indexed] last_contributor: &ManagedAddress, balance: &BigUint);

    #[event("sponsorNotified")]
    fn sponsor_notified_event(&self, #[indexed] sponsor_pool: &ManagedAddress, amount: &BigUint);

    #[event("sponsorshipReceived")]
    fn sponsorship_received_event(&self, #[indexed] sponsor_pool: &ManagedAddress, amount: &BigUint);

    #[event("fundsTransferred")]
    fn funds_transferred_event(
        &self,
        #[indexed] registry: &ManagedAddress,
        #[indexed] manager: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("campaignReset")]
    fn campaign_reset_event(&self, funding_goal: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("fundingGoal")]
    fn funding_goal(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("status")]
    fn status(&self) -> SingleValueMapper<CampaignStatus>;

    // ── Contributors ──

    #[storage_mapper("contributors")]
    fn contributors(&self) -> VecMapper<Contributor<Self::Api>>;

    #[storage_mapper("knownContributors")]
    fn known_contributors(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("contribution")]
    fn contribution(&self, contributor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("lastContributor")]
    fn last_contributor(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Sponsorship ──

    /// Pool address while a notifySponsor call is in flight, empty otherwise.
    #[storage_mapper("sponsorRequest")]
    fn sponsor_request(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("sponsorshipReceived")]
    fn sponsorship_received(&self) -> SingleValueMapper<BigUint>;
}
