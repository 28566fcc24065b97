multiversx_sc::imports!();

use crate::errors::{
    ERR_CALLER_NOT_CONTRACT, ERR_INVALID_PERCENTAGE, ERR_PERCENTAGE_OVERFLOW, ERR_ZERO_AMOUNT,
};
use crate::PERCENT_DENOMINATOR;

/// Caller and argument checks shared by the campaign, the sponsor pool
/// and the distribution registry. Each guard runs at the top of an
/// endpoint and aborts the whole transaction on failure.
#[multiversx_sc::module]
pub trait GuardsModule {
    /// Only contracts may act as campaigns. Plain user accounts are
    /// rejected, and the contract address is returned for further checks.
    fn require_caller_is_contract(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(
            self.blockchain().is_smart_contract(&caller),
            ERR_CALLER_NOT_CONTRACT
        );
        caller
    }

    fn require_non_zero_amount(&self, amount: &BigUint) {
        require!(*amount > 0u64, ERR_ZERO_AMOUNT);
    }

    fn require_valid_percentage(&self, percent: u64) {
        require!(
            percent > 0 && percent <= PERCENT_DENOMINATOR,
            ERR_INVALID_PERCENTAGE
        );
    }

    fn require_percentage_total_within_bounds(&self, total: u64) {
        require!(total <= PERCENT_DENOMINATOR, ERR_PERCENTAGE_OVERFLOW);
    }

    /// `percent` of `amount`, truncated.
    fn percentage_of(&self, amount: &BigUint, percent: u64) -> BigUint {
        (amount * percent) / PERCENT_DENOMINATOR
    }
}
