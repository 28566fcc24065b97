use access_control::errors::{
    ERR_ALREADY_PAID, ERR_BENEFICIARY_EXISTS, ERR_CALLER_NOT_CONTRACT, ERR_INVALID_PERCENTAGE,
    ERR_NOT_MANAGER, ERR_NO_SHARE, ERR_PERCENTAGE_OVERFLOW, ERR_UNKNOWN_BENEFICIARY,
    ERR_ZERO_AMOUNT,
};
use distribution_registry::distribution_registry_proxy;
use multiversx_sc_scenario::imports::*;

const OWNER: TestAddress = TestAddress::new("owner");
const MANAGER: TestAddress = TestAddress::new("manager");
const OTHER_MANAGER: TestAddress = TestAddress::new("other-manager");
const BENEFICIARY_1: TestAddress = TestAddress::new("beneficiary-1");
const BENEFICIARY_2: TestAddress = TestAddress::new("beneficiary-2");
const BENEFICIARY_3: TestAddress = TestAddress::new("beneficiary-3");

/// Stands in for a campaign contract pushing its balance.
const CAMPAIGN: TestSCAddress = TestSCAddress::new("campaign");
const REGISTRY_ADDRESS: TestSCAddress = TestSCAddress::new("distribution-registry");
const REGISTRY_CODE_PATH: MxscPath = MxscPath::new("output/distribution-registry.mxsc.json");

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(REGISTRY_CODE_PATH, distribution_registry::ContractBuilder);
    blockchain
}

struct RegistryTestState {
    world: ScenarioWorld,
}

impl RegistryTestState {
    fn new() -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1);
        world.account(MANAGER).nonce(1).balance(5_000u64);
        world.account(OTHER_MANAGER).nonce(1);
        world.account(BENEFICIARY_1).nonce(1);
        world.account(BENEFICIARY_2).nonce(1);
        world.account(BENEFICIARY_3).nonce(1);
        world
            .account(CAMPAIGN)
            .nonce(1)
            .balance(10_000u64)
            .code(REGISTRY_CODE_PATH);

        world
            .tx()
            .from(OWNER)
            .typed(distribution_registry_proxy::DistributionRegistryProxy)
            .init()
            .code(REGISTRY_CODE_PATH)
            .new_address(REGISTRY_ADDRESS)
            .run();

        Self { world }
    }

    fn push_funds(&mut self, manager: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(CAMPAIGN)
            .to(REGISTRY_ADDRESS)
            .typed(distribution_registry_proxy::DistributionRegistryProxy)
            .transfer_funds(manager)
            .egld(amount)
            .run();
    }

    fn add_beneficiary(&mut self, manager: TestAddress, beneficiary: TestAddress, percent: u64) {
        self.world
            .tx()
            .from(manager)
            .to(REGISTRY_ADDRESS)
            .typed(distribution_registry_proxy::DistributionRegistryProxy)
            .add_beneficiary(beneficiary, percent)
            .run();
    }

    fn withdraw_benefits(&mut self, beneficiary: TestAddress, manager: TestAddress) {
        self.world
            .tx()
            .from(beneficiary)
            .to(REGISTRY_ADDRESS)
            .typed(distribution_registry_proxy::DistributionRegistryProxy)
            .withdraw_benefits(manager)
            .run();
    }

    fn check_total_percentage(&mut self, manager: TestAddress, expected: u64) {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(distribution_registry_proxy::DistributionRegistryProxy)
            .total_percentage(manager)
            .returns(ExpectValue(expected))
            .run();
    }

    fn check_amount(&mut self, manager: TestAddress, expected: u64) {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(distribution_registry_proxy::DistributionRegistryProxy)
            .amount(manager)
            .returns(ExpectValue(expected))
            .run();
    }

    fn check_undistributed(&mut self, manager: TestAddress, expected: u64) {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(distribution_registry_proxy::DistributionRegistryProxy)
            .undistributed(manager)
            .returns(ExpectValue(expected))
            .run();
    }

    fn check_is_paid(&mut self, manager: TestAddress, beneficiary: TestAddress, expected: bool) {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(distribution_registry_proxy::DistributionRegistryProxy)
            .is_paid(manager, beneficiary)
            .returns(ExpectValue(expected))
            .run();
    }
}

#[test]
fn beneficiaries_are_paid_their_share_once() {
    let mut state = RegistryTestState::new();
    state.push_funds(MANAGER, 1_000);
    state.check_amount(MANAGER, 1_000);

    state.add_beneficiary(MANAGER, BENEFICIARY_1, 30);
    state.add_beneficiary(MANAGER, BENEFICIARY_2, 40);
    state.check_total_percentage(MANAGER, 70);

    state
        .world
        .tx()
        .from(MANAGER)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .add_beneficiary(BENEFICIARY_3, 40u64)
        .returns(ExpectError(4, ERR_PERCENTAGE_OVERFLOW))
        .run();
    state.check_total_percentage(MANAGER, 70);

    state.withdraw_benefits(BENEFICIARY_1, MANAGER);
    state.world.check_account(BENEFICIARY_1).balance(300u64);
    state.check_is_paid(MANAGER, BENEFICIARY_1, true);

    state
        .world
        .tx()
        .from(BENEFICIARY_1)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .withdraw_benefits(MANAGER)
        .returns(ExpectError(4, ERR_ALREADY_PAID))
        .run();

    state.world.check_account(BENEFICIARY_1).balance(300u64);
    state.world.check_account(REGISTRY_ADDRESS).balance(700u64);
    state.check_amount(MANAGER, 1_000);
    state.check_total_percentage(MANAGER, 70);
}

#[test]
fn payout_does_not_depend_on_withdrawal_order() {
    let mut state = RegistryTestState::new();
    state.push_funds(MANAGER, 1_000);
    state.add_beneficiary(MANAGER, BENEFICIARY_1, 33);
    state.add_beneficiary(MANAGER, BENEFICIARY_2, 33);
    state.add_beneficiary(MANAGER, BENEFICIARY_3, 34);

    state.withdraw_benefits(BENEFICIARY_3, MANAGER);
    state.withdraw_benefits(BENEFICIARY_2, MANAGER);
    state.withdraw_benefits(BENEFICIARY_1, MANAGER);

    state.world.check_account(BENEFICIARY_1).balance(330u64);
    state.world.check_account(BENEFICIARY_2).balance(330u64);
    state.world.check_account(BENEFICIARY_3).balance(340u64);
    state.check_undistributed(MANAGER, 0);
    state.check_total_percentage(MANAGER, 100);
}

#[test]
fn truncation_dust_stays_in_registry() {
    let mut state = RegistryTestState::new();
    state.push_funds(MANAGER, 1_001);
    state.add_beneficiary(MANAGER, BENEFICIARY_1, 50);
    state.add_beneficiary(MANAGER, BENEFICIARY_2, 50);

    state.withdraw_benefits(BENEFICIARY_1, MANAGER);
    state.withdraw_benefits(BENEFICIARY_2, MANAGER);

    state.world.check_account(BENEFICIARY_1).balance(500u64);
    state.world.check_account(BENEFICIARY_2).balance(500u64);
    state.check_undistributed(MANAGER, 1);
    state.world.check_account(REGISTRY_ADDRESS).balance(1u64);
}

#[test]
fn only_contracts_can_push_funds() {
    let mut state = RegistryTestState::new();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .transfer_funds(MANAGER)
        .egld(1_000u64)
        .returns(ExpectError(4, ERR_CALLER_NOT_CONTRACT))
        .run();

    state
        .world
        .tx()
        .from(CAMPAIGN)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .transfer_funds(MANAGER)
        .returns(ExpectError(4, ERR_ZERO_AMOUNT))
        .run();

    state.check_amount(MANAGER, 0);
    state.world.check_account(MANAGER).balance(5_000u64);
}

#[test]
fn repeated_pushes_accumulate() {
    let mut state = RegistryTestState::new();
    state.push_funds(MANAGER, 1_000);
    state.add_beneficiary(MANAGER, BENEFICIARY_1, 50);
    state.withdraw_benefits(BENEFICIARY_1, MANAGER);
    state.world.check_account(BENEFICIARY_1).balance(500u64);

    state.push_funds(MANAGER, 1_000);
    state.check_amount(MANAGER, 2_000);

    state.add_beneficiary(MANAGER, BENEFICIARY_2, 50);
    state.withdraw_benefits(BENEFICIARY_2, MANAGER);
    state.world.check_account(BENEFICIARY_2).balance(1_000u64);

    state
        .world
        .tx()
        .from(BENEFICIARY_1)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .withdraw_benefits(MANAGER)
        .returns(ExpectError(4, ERR_ALREADY_PAID))
        .run();

    state.check_undistributed(MANAGER, 500);
    state.world.check_account(REGISTRY_ADDRESS).balance(500u64);
}

#[test]
fn beneficiary_changes_require_manager() {
    let mut state = RegistryTestState::new();
    state.push_funds(MANAGER, 1_000);

    state
        .world
        .tx()
        .from(OTHER_MANAGER)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .add_beneficiary(BENEFICIARY_1, 10u64)
        .returns(ExpectError(4, ERR_NOT_MANAGER))
        .run();

    state
        .world
        .tx()
        .from(OTHER_MANAGER)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .check_self_amount()
        .returns(ExpectError(4, ERR_NOT_MANAGER))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .check_self_amount()
        .returns(ExpectValue(1_000u64))
        .run();

    state.check_total_percentage(OTHER_MANAGER, 0);
}

#[test]
fn add_beneficiary_validates_percentage() {
    let mut state = RegistryTestState::new();
    state.push_funds(MANAGER, 1_000);

    for percent in [0u64, 101u64] {
        state
            .world
            .tx()
            .from(MANAGER)
            .to(REGISTRY_ADDRESS)
            .typed(distribution_registry_proxy::DistributionRegistryProxy)
            .add_beneficiary(BENEFICIARY_1, percent)
            .returns(ExpectError(4, ERR_INVALID_PERCENTAGE))
            .run();
    }

    state.add_beneficiary(MANAGER, BENEFICIARY_1, 100);
    state.check_total_percentage(MANAGER, 100);

    state
        .world
        .tx()
        .from(MANAGER)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .add_beneficiary(BENEFICIARY_1, 10u64)
        .returns(ExpectError(4, ERR_BENEFICIARY_EXISTS))
        .run();
    state.check_total_percentage(MANAGER, 100);
}

#[test]
fn update_replaces_share_instead_of_adding() {
    let mut state = RegistryTestState::new();
    state.push_funds(MANAGER, 1_000);
    state.add_beneficiary(MANAGER, BENEFICIARY_1, 30);
    state.add_beneficiary(MANAGER, BENEFICIARY_2, 40);

    state
        .world
        .tx()
        .from(MANAGER)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .update_percentage_of_beneficiary(BENEFICIARY_1, 60u64)
        .run();
    state.check_total_percentage(MANAGER, 100);

    state
        .world
        .tx()
        .from(MANAGER)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .update_percentage_of_beneficiary(BENEFICIARY_2, 41u64)
        .returns(ExpectError(4, ERR_PERCENTAGE_OVERFLOW))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .update_percentage_of_beneficiary(BENEFICIARY_3, 10u64)
        .returns(ExpectError(4, ERR_UNKNOWN_BENEFICIARY))
        .run();

    state.check_total_percentage(MANAGER, 100);

    state
        .world
        .tx()
        .from(BENEFICIARY_1)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .check_self_percentage(MANAGER)
        .returns(ExpectValue(60u64))
        .run();
}

#[test]
fn paid_beneficiary_cannot_be_updated() {
    let mut state = RegistryTestState::new();
    state.push_funds(MANAGER, 1_000);
    state.add_beneficiary(MANAGER, BENEFICIARY_1, 30);
    state.withdraw_benefits(BENEFICIARY_1, MANAGER);

    state
        .world
        .tx()
        .from(MANAGER)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .update_percentage_of_beneficiary(BENEFICIARY_1, 20u64)
        .returns(ExpectError(4, ERR_ALREADY_PAID))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .add_beneficiary(BENEFICIARY_1, 20u64)
        .returns(ExpectError(4, ERR_ALREADY_PAID))
        .run();

    state.check_total_percentage(MANAGER, 30);

    let paid = state
        .world
        .tx()
        .from(MANAGER)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .check_self_paid_beneficiaries()
        .returns(ReturnsResultUnmanaged)
        .run();
    assert_eq!(paid.into_vec(), vec![BENEFICIARY_1.to_address()]);
}

#[test]
fn withdraw_requires_share_for_that_manager() {
    let mut state = RegistryTestState::new();
    state.push_funds(MANAGER, 1_000);
    state.push_funds(OTHER_MANAGER, 2_000);
    state.add_beneficiary(MANAGER, BENEFICIARY_1, 50);
    state.add_beneficiary(OTHER_MANAGER, BENEFICIARY_2, 50);

    state
        .world
        .tx()
        .from(BENEFICIARY_1)
        .to(REGISTRY_ADDRESS)
        .typed(distribution_registry_proxy::DistributionRegistryProxy)
        .withdraw_benefits(OTHER_MANAGER)
        .returns(ExpectError(4, ERR_NO_SHARE))
        .run();

    state.withdraw_benefits(BENEFICIARY_2, OTHER_MANAGER);
    state.world.check_account(BENEFICIARY_2).balance(1_000u64);
    state.check_is_paid(MANAGER, BENEFICIARY_2, false);
    state.check_is_paid(OTHER_MANAGER, BENEFICIARY_2, true);
    state.check_undistributed(MANAGER, 1_000);
}
