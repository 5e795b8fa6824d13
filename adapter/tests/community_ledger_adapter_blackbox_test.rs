use multiversx_sc_scenario::imports::*;

use community_ledger::community_ledger_proxy::CommunityLedgerProxy;
use community_ledger::errors::*;
use community_ledger::types::{ProposalCategory, ProposalStatus, VoteOption};
use community_ledger_adapter::community_ledger_adapter_proxy::CommunityLedgerAdapterProxy;
use community_ledger_adapter::{
    ERR_IMPLEMENTATION_NOT_SET, ERR_NOT_A_CONTRACT, ERR_ONLY_OWNER, ERR_ZERO_IMPLEMENTATION,
};

const ADAPTER_CODE_PATH: MxscPath = MxscPath::new("output/community-ledger-adapter.mxsc.json");
const LEDGER_CODE_PATH: MxscPath = MxscPath::new("../output/community-ledger.mxsc.json");

const ADAPTER: TestSCAddress = TestSCAddress::new("adapter");
const LEDGER: TestSCAddress = TestSCAddress::new("ledger");
const NEXT_LEDGER: TestSCAddress = TestSCAddress::new("next-ledger");

const MANAGER: TestAddress = TestAddress::new("manager");
const OUTSIDER: TestAddress = TestAddress::new("outsider");
const PAYEE: TestAddress = TestAddress::new("payee");

const RESIDENT_NAMES: [&str; 10] = [
    "resident-01",
    "resident-02",
    "resident-03",
    "resident-04",
    "resident-05",
    "resident-06",
    "resident-07",
    "resident-08",
    "resident-09",
    "resident-10",
];
const RESIDENCES: [u32; 10] = [1101, 1102, 1103, 1104, 1201, 1202, 1203, 1204, 1301, 1302];

const QUOTA: u64 = 50;
const STARTING_BALANCE: u64 = 1_000_000;

// 2026-10-15T00:00:00Z
const OCTOBER: u64 = 1_792_022_400;

const TITLE: &[u8] = b"Test Proposal";

fn resident(index: usize) -> TestAddress<'static> {
    TestAddress::new(RESIDENT_NAMES[index])
}

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(ADAPTER_CODE_PATH, community_ledger_adapter::ContractBuilder);
    blockchain.register_contract(LEDGER_CODE_PATH, community_ledger::ContractBuilder);
    blockchain
}

struct AdapterTestState {
    world: ScenarioWorld,
}

impl AdapterTestState {
    /// Adapter and ledger deployed by the same manager, not yet wired.
    fn new() -> Self {
        let mut world = world();

        world.account(MANAGER).nonce(1).balance(STARTING_BALANCE);
        world.account(OUTSIDER).nonce(1).balance(STARTING_BALANCE);
        world.account(PAYEE).nonce(1);
        for index in 0..RESIDENT_NAMES.len() {
            world
                .account(resident(index))
                .nonce(1)
                .balance(STARTING_BALANCE);
        }
        world.current_block().block_timestamp(OCTOBER);

        world
            .tx()
            .from(MANAGER)
            .typed(CommunityLedgerAdapterProxy)
            .init()
            .code(ADAPTER_CODE_PATH)
            .new_address(ADAPTER)
            .run();

        let mut state = Self { world };
        state.deploy_ledger(LEDGER);
        state
    }

    /// Deploys a ledger that trusts the adapter.
    fn deploy_ledger(&mut self, address: TestSCAddress) {
        self.world
            .tx()
            .from(MANAGER)
            .typed(CommunityLedgerProxy)
            .init(QUOTA)
            .code(LEDGER_CODE_PATH)
            .new_address(address)
            .run();
        self.world
            .tx()
            .from(MANAGER)
            .to(address)
            .typed(CommunityLedgerProxy)
            .set_adapter(ADAPTER)
            .run();
    }

    fn set_implementation(&mut self, implementation: TestSCAddress) {
        self.world
            .tx()
            .from(MANAGER)
            .to(ADAPTER)
            .typed(CommunityLedgerAdapterProxy)
            .set_implementation(implementation)
            .run();
    }

    fn wired() -> Self {
        let mut state = Self::new();
        state.set_implementation(LEDGER);
        state
    }

    fn add_resident(&mut self, index: usize) {
        self.world
            .tx()
            .from(MANAGER)
            .to(ADAPTER)
            .typed(CommunityLedgerAdapterProxy)
            .add_resident(resident(index), RESIDENCES[index])
            .run();
    }

    fn pay_quota(&mut self, index: usize) {
        self.world
            .tx()
            .from(resident(index))
            .to(ADAPTER)
            .typed(CommunityLedgerAdapterProxy)
            .pay_quota(RESIDENCES[index])
            .egld(QUOTA)
            .run();
    }

    fn create_proposal(&mut self, category: ProposalCategory, amount: u64, responsible: TestAddress) {
        self.world
            .tx()
            .from(MANAGER)
            .to(ADAPTER)
            .typed(CommunityLedgerAdapterProxy)
            .create_proposal(TITLE, b"This is a test proposal".as_slice(), category, amount, responsible)
            .run();
    }

    fn ledger_is_resident(&mut self, ledger: TestSCAddress, address: TestAddress) -> bool {
        self.world
            .query()
            .to(ledger)
            .typed(CommunityLedgerProxy)
            .is_resident(address)
            .returns(ReturnsResult)
            .run()
    }

    fn ledger_status(&mut self) -> ProposalStatus {
        let proposal = self
            .world
            .query()
            .to(LEDGER)
            .typed(CommunityLedgerProxy)
            .get_proposal(TITLE)
            .returns(ReturnsResult)
            .run();
        proposal.status
    }
}

// ============================================================
// Implementation reference
// ============================================================

#[test]
fn owner_sets_the_implementation() {
    let mut state = AdapterTestState::new();

    let before = state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .get_impl_address()
        .returns(ReturnsResult)
        .run();
    assert!(before.into_option().is_none());

    state.set_implementation(LEDGER);

    let after = state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .get_impl_address()
        .returns(ReturnsResult)
        .run();
    assert_eq!(after.into_option(), Some(LEDGER.to_managed_address()));

    state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .get_owner()
        .returns(ExpectValue(MANAGER))
        .run();
}

#[test]
fn set_implementation_guards() {
    let mut state = AdapterTestState::new();

    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .set_implementation(LEDGER)
        .returns(ExpectError(4, ERR_ONLY_OWNER))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .set_implementation(ManagedAddress::<StaticApi>::zero())
        .returns(ExpectError(4, ERR_ZERO_IMPLEMENTATION))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .set_implementation(OUTSIDER)
        .returns(ExpectError(4, ERR_NOT_A_CONTRACT))
        .run();
}

#[test]
fn calls_fail_until_an_implementation_is_set() {
    let mut state = AdapterTestState::new();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .add_resident(resident(0), 1201u32)
        .returns(ExpectError(4, ERR_IMPLEMENTATION_NOT_SET))
        .run();

    state
        .world
        .tx()
        .from(resident(0))
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .pay_quota(1201u32)
        .egld(QUOTA)
        .returns(ExpectError(4, ERR_IMPLEMENTATION_NOT_SET))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .create_proposal(
            TITLE,
            b"".as_slice(),
            ProposalCategory::Decision,
            0u64,
            ManagedAddress::<StaticApi>::zero(),
        )
        .returns(ExpectError(4, ERR_IMPLEMENTATION_NOT_SET))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .set_manager(OUTSIDER)
        .returns(ExpectError(4, ERR_IMPLEMENTATION_NOT_SET))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .remove_resident(resident(0))
        .returns(ExpectError(4, ERR_IMPLEMENTATION_NOT_SET))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .set_counselor(resident(0), true)
        .returns(ExpectError(4, ERR_IMPLEMENTATION_NOT_SET))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .edit_proposal(
            TITLE,
            b"".as_slice(),
            0u64,
            ManagedAddress::<StaticApi>::zero(),
        )
        .returns(ExpectError(4, ERR_IMPLEMENTATION_NOT_SET))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .remove_proposal(TITLE)
        .returns(ExpectError(4, ERR_IMPLEMENTATION_NOT_SET))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .open_vote(TITLE)
        .returns(ExpectError(4, ERR_IMPLEMENTATION_NOT_SET))
        .run();

    state
        .world
        .tx()
        .from(resident(0))
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .vote(TITLE, VoteOption::Yes)
        .returns(ExpectError(4, ERR_IMPLEMENTATION_NOT_SET))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .close_vote(TITLE)
        .returns(ExpectError(4, ERR_IMPLEMENTATION_NOT_SET))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .transfer(TITLE, 100u64)
        .returns(ExpectError(4, ERR_IMPLEMENTATION_NOT_SET))
        .run();

    // Nothing reached the ledger and no value moved
    assert!(!state.ledger_is_resident(LEDGER, resident(0)));
    state
        .world
        .query()
        .to(LEDGER)
        .typed(CommunityLedgerProxy)
        .get_manager()
        .returns(ExpectValue(MANAGER))
        .run();
    state
        .world
        .query()
        .to(LEDGER)
        .typed(CommunityLedgerProxy)
        .is_proposal(TITLE)
        .returns(ExpectValue(false))
        .run();
    state
        .world
        .check_account(resident(0))
        .balance(STARTING_BALANCE);
    state.world.check_account(LEDGER).balance(0u64);
}

// ============================================================
// Relayed membership calls
// ============================================================

#[test]
fn relays_resident_management() {
    let mut state = AdapterTestState::wired();

    state.add_resident(4);
    assert!(state.ledger_is_resident(LEDGER, resident(4)));

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .set_counselor(resident(4), true)
        .run();
    state
        .world
        .query()
        .to(LEDGER)
        .typed(CommunityLedgerProxy)
        .is_counselor(resident(4))
        .returns(ExpectValue(true))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .set_counselor(resident(4), false)
        .run();
    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .remove_resident(resident(4))
        .run();
    assert!(!state.ledger_is_resident(LEDGER, resident(4)));
}

#[test]
fn relays_the_original_caller_identity() {
    let mut state = AdapterTestState::wired();

    // The ledger sees the outsider, not the adapter
    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .add_resident(OUTSIDER, 1201u32)
        .returns(ExpectMessage(ERR_ONLY_MANAGER_OR_COUNSELOR))
        .run();

    state
        .world
        .tx()
        .from(OUTSIDER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .set_manager(OUTSIDER)
        .returns(ExpectMessage(ERR_ONLY_MANAGER))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .set_manager(OUTSIDER)
        .run();
    state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .get_manager()
        .returns(ExpectValue(OUTSIDER))
        .run();

    // The adapter's own owner is unaffected
    state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .get_owner()
        .returns(ExpectValue(MANAGER))
        .run();
}

#[test]
fn ledger_must_trust_the_adapter() {
    let mut state = AdapterTestState::new();

    state
        .world
        .tx()
        .from(MANAGER)
        .typed(CommunityLedgerProxy)
        .init(QUOTA)
        .code(LEDGER_CODE_PATH)
        .new_address(NEXT_LEDGER)
        .run();
    state.set_implementation(NEXT_LEDGER);

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .add_resident(resident(0), 1201u32)
        .returns(ExpectMessage(ERR_UNTRUSTED_FORWARDER))
        .run();
    assert!(!state.ledger_is_resident(NEXT_LEDGER, resident(0)));
}

// ============================================================
// Relayed governance and treasury
// ============================================================

#[test]
fn relays_proposal_lifecycle_and_payout() {
    let mut state = AdapterTestState::wired();
    state.create_proposal(ProposalCategory::Spending, 100, PAYEE);

    for index in 0..RESIDENT_NAMES.len() {
        state.add_resident(index);
        state.pay_quota(index);
    }
    state.world.check_account(ADAPTER).balance(0u64);
    state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .get_treasury_balance()
        .returns(ExpectValue(10 * QUOTA))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .open_vote(TITLE)
        .run();
    assert_eq!(state.ledger_status(), ProposalStatus::Voting);

    for index in 0..RESIDENT_NAMES.len() {
        state
            .world
            .tx()
            .from(resident(index))
            .to(ADAPTER)
            .typed(CommunityLedgerAdapterProxy)
            .vote(TITLE, VoteOption::Yes)
            .run();
    }
    state
        .world
        .tx()
        .from(resident(0))
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .vote(TITLE, VoteOption::Yes)
        .returns(ExpectMessage(ERR_ALREADY_VOTED))
        .run();
    state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .get_votes(TITLE)
        .returns(ExpectValue(10u64))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .close_vote(TITLE)
        .run();
    assert_eq!(state.ledger_status(), ProposalStatus::Approved);

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .transfer(TITLE, 100u64)
        .run();
    state.world.check_account(PAYEE).balance(100u64);
    state
        .world
        .check_account(LEDGER)
        .balance(10 * QUOTA - 100);

    let proposal = state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .get_proposal(TITLE)
        .returns(ReturnsResult)
        .run();
    assert_eq!(proposal.status, ProposalStatus::Executed);

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .transfer(TITLE, 100u64)
        .returns(ExpectMessage(ERR_NOT_APPROVED))
        .run();
}

#[test]
fn relays_edit_and_removal() {
    let mut state = AdapterTestState::wired();
    state.create_proposal(ProposalCategory::Spending, 100, PAYEE);

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .edit_proposal(
            TITLE,
            b"".as_slice(),
            250u64,
            ManagedAddress::<StaticApi>::zero(),
        )
        .run();
    let proposal = state
        .world
        .query()
        .to(LEDGER)
        .typed(CommunityLedgerProxy)
        .get_proposal(TITLE)
        .returns(ReturnsResult)
        .run();
    assert_eq!(proposal.amount, BigUint::from(250u64));
    assert_eq!(proposal.responsible, PAYEE.to_managed_address());

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .remove_proposal(TITLE)
        .run();
    state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .is_proposal(TITLE)
        .returns(ExpectValue(false))
        .run();
}

#[test]
fn read_through_views() {
    let mut state = AdapterTestState::wired();
    state.add_resident(0);
    state.pay_quota(0);

    state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .is_residence(1201u32)
        .returns(ExpectValue(true))
        .run();
    state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .is_resident(resident(0))
        .returns(ExpectValue(true))
        .run();
    state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .is_counselor(resident(0))
        .returns(ExpectValue(false))
        .run();
    state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .is_quota_paid(RESIDENCES[0])
        .returns(ExpectValue(true))
        .run();
    state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .get_monthly_quota()
        .returns(ExpectValue(QUOTA))
        .run();
    state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .get_manager()
        .returns(ExpectValue(MANAGER))
        .run();
}

// ============================================================
// Swapping the implementation
// ============================================================

#[test]
fn swapped_implementation_starts_from_its_own_state() {
    let mut state = AdapterTestState::wired();
    state.add_resident(0);

    state.deploy_ledger(NEXT_LEDGER);
    state.set_implementation(NEXT_LEDGER);

    // Nothing was migrated
    state
        .world
        .query()
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .is_resident(resident(0))
        .returns(ExpectValue(false))
        .run();
    assert!(state.ledger_is_resident(LEDGER, resident(0)));

    // The unit is free in the new ledger
    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER)
        .typed(CommunityLedgerAdapterProxy)
        .add_resident(resident(1), RESIDENCES[0])
        .run();
    assert!(state.ledger_is_resident(NEXT_LEDGER, resident(1)));
    assert!(!state.ledger_is_resident(LEDGER, resident(1)));
}
