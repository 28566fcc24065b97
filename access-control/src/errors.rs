// ============================================================
// Authorization
// ============================================================

pub const ERR_CALLER_NOT_CONTRACT: &str = "Caller is not a contract";
pub const ERR_NOT_WHITELISTED: &str = "Campaign is not whitelisted";
pub const ERR_NOT_MANAGER: &str = "Only managers with received funds";
pub const ERR_NOT_ACTIVE_SPONSOR: &str = "Sponsorship was not requested by this campaign";
pub const ERR_NOT_LAST_CONTRIBUTOR: &str = "Only the last contributor can withdraw";

// ============================================================
// State
// ============================================================

pub const ERR_NOT_UNFUNDED: &str = "Campaign is not accepting deposits";
pub const ERR_NOT_PREFUNDED: &str = "Campaign has not reached its goal";
pub const ERR_NOT_FUNDED: &str = "Campaign is not funded";
pub const ERR_ALREADY_FUNDED: &str = "Campaign is already funded";
pub const ERR_SPONSOR_NOT_DELIVERED: &str = "Sponsor did not deliver funds";

// ============================================================
// Validation
// ============================================================

pub const ERR_ZERO_AMOUNT: &str = "Amount must be greater than zero";
pub const ERR_INVALID_PERCENTAGE: &str = "Percentage must be between 1 and 100";
pub const ERR_PERCENTAGE_OVERFLOW: &str = "Total percentage exceeds 100";
pub const ERR_BENEFICIARY_EXISTS: &str = "Beneficiary already registered";
pub const ERR_UNKNOWN_BENEFICIARY: &str = "Beneficiary has no share";
pub const ERR_NO_SHARE: &str = "No share for this manager";
pub const ERR_CAMPAIGN_NOT_CONTRACT: &str = "Campaign must be a contract";
pub const ERR_ZERO_SPONSORSHIP: &str = "Sponsorship amount is zero";

// ============================================================
// Insufficient funds
// ============================================================

pub const ERR_EXCEEDS_CONTRIBUTION: &str = "Amount exceeds contribution";
pub const ERR_BELOW_GOAL: &str = "Withdrawal would drop balance below goal";
pub const ERR_CAMPAIGN_BELOW_GOAL: &str = "Campaign balance below its goal";
pub const ERR_INSUFFICIENT_POOL_BALANCE: &str = "Insufficient pool balance";
pub const ERR_BALANCE_NOT_EMPTY: &str = "Balance must be zero to reset";
pub const ERR_NOTHING_TO_TRANSFER: &str = "Nothing to transfer";

// ============================================================
// Already paid
// ============================================================

pub const ERR_ALREADY_PAID: &str = "Beneficiary already paid";
