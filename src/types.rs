multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Campaign Status — funding cycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum CampaignStatus {
    /// Collecting deposits. Any contributor may withdraw.
    Unfunded,
    /// Balance reached the goal. Only the last contributor may withdraw
    /// the excess; the owner may ask the sponsor to top up.
    Prefunded,
    /// Sponsorship received. No withdrawals until the owner resets.
    Funded,
}

impl CampaignStatus {
    pub fn name(&self) -> &'static str {
        match self {
            CampaignStatus::Unfunded => "Unfunded",
            CampaignStatus::Prefunded => "Prefunded",
            CampaignStatus::Funded => "Funded",
        }
    }
}

// ============================================================
// Contributor — recorded once per identity per cycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Contributor<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    pub display_name: ManagedBuffer<M>,
}
