#![no_std]

multiversx_sc::imports!();

pub mod community_ledger_adapter_proxy;

use community_ledger::types::{Proposal, ProposalCategory, VoteOption};
use community_ledger::community_ledger_proxy::CommunityLedgerProxy;

// ============================================================
// Errors
// ============================================================

pub const ERR_ONLY_OWNER: &str = "Only the owner can set the implementation";
pub const ERR_ZERO_IMPLEMENTATION: &str = "Implementation cannot be the zero address";
pub const ERR_NOT_A_CONTRACT: &str = "Implementation must be a smart contract";
pub const ERR_IMPLEMENTATION_NOT_SET: &str = "Implementation not set";

// ============================================================
// Contract
// Stable entry point in front of a replaceable ledger. Holds no
// community state: every call is relayed to the current ledger,
// which sees the adapter's caller as `on_behalf_of`. The adapter is
// managed by its owner, independently of the ledger's manager.
// ============================================================

#[multiversx_sc::contract]
pub trait CommunityLedgerAdapter {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setImplementation
    // Swaps the backing ledger. Nothing is migrated: callers see the
    // state of whichever ledger is current.
    // ========================================================

    #[endpoint(setImplementation)]
    fn set_implementation(&self, implementation: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            ERR_ONLY_OWNER
        );
        require!(!implementation.is_zero(), ERR_ZERO_IMPLEMENTATION);
        require!(
            self.blockchain().is_smart_contract(&implementation),
            ERR_NOT_A_CONTRACT
        );

        self.implementation().set(&implementation);
        self.implementation_changed_event(&caller, &implementation);
    }

    // ========================================================
    // Relayed endpoints
    // The caller goes last, as the ledger's optional `on_behalf_of`.
    // ========================================================

    #[endpoint(setManager)]
    fn set_manager(&self, new_manager: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .set_manager(new_manager)
            .argument(&caller)
            .sync_call();
    }

    #[endpoint(addResident)]
    fn add_resident(&self, resident: ManagedAddress, residence: u32) {
        let caller = self.blockchain().get_caller();
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .add_resident(resident, residence)
            .argument(&caller)
            .sync_call();
    }

    #[endpoint(removeResident)]
    fn remove_resident(&self, resident: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .remove_resident(resident)
            .argument(&caller)
            .sync_call();
    }

    #[endpoint(setCounselor)]
    fn set_counselor(&self, resident: ManagedAddress, is_counselor: bool) {
        let caller = self.blockchain().get_caller();
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .set_counselor(resident, is_counselor)
            .argument(&caller)
            .sync_call();
    }

    /// Forwards the attached EGLD unchanged.
    #[endpoint(payQuota)]
    #[payable("EGLD")]
    fn pay_quota(&self, residence: u32) {
        let payment = self.call_value().egld_value().clone_value();
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .pay_quota(residence)
            .egld(payment)
            .sync_call();
    }

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        category: ProposalCategory,
        amount: BigUint,
        responsible: ManagedAddress,
    ) {
        let caller = self.blockchain().get_caller();
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .create_proposal(title, description, category, amount, responsible)
            .argument(&caller)
            .sync_call();
    }

    #[endpoint(editProposal)]
    fn edit_proposal(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        amount: BigUint,
        responsible: ManagedAddress,
    ) {
        let caller = self.blockchain().get_caller();
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .edit_proposal(title, description, amount, responsible)
            .argument(&caller)
            .sync_call();
    }

    #[endpoint(removeProposal)]
    fn remove_proposal(&self, title: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .remove_proposal(title)
            .argument(&caller)
            .sync_call();
    }

    #[endpoint(openVote)]
    fn open_vote(&self, title: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .open_vote(title)
            .argument(&caller)
            .sync_call();
    }

    #[endpoint(vote)]
    fn vote(&self, title: ManagedBuffer, option: VoteOption) {
        let caller = self.blockchain().get_caller();
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .vote(title, option)
            .argument(&caller)
            .sync_call();
    }

    #[endpoint(closeVote)]
    fn close_vote(&self, title: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .close_vote(title)
            .argument(&caller)
            .sync_call();
    }

    #[endpoint(transfer)]
    fn transfer(&self, title: ManagedBuffer, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .transfer(title, amount)
            .argument(&caller)
            .sync_call();
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_implementation(&self) -> ManagedAddress {
        let implementation = self.implementation();
        require!(!implementation.is_empty(), ERR_IMPLEMENTATION_NOT_SET);
        implementation.get()
    }

    // ========================================================
    // VIEWS: own state
    // ========================================================

    #[view(getImplAddress)]
    fn get_impl_address(&self) -> OptionalValue<ManagedAddress> {
        if self.implementation().is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.implementation().get())
        }
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.blockchain().get_owner_address()
    }

    // ========================================================
    // VIEWS: read through to the current ledger
    // ========================================================

    #[view(getManager)]
    fn get_manager(&self) -> ManagedAddress {
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .get_manager()
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(isResidence)]
    fn is_residence(&self, residence: u32) -> bool {
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .is_residence(residence)
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(isResident)]
    fn is_resident(&self, address: ManagedAddress) -> bool {
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .is_resident(address)
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(isCounselor)]
    fn is_counselor(&self, address: ManagedAddress) -> bool {
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .is_counselor(address)
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(getMonthlyQuota)]
    fn get_monthly_quota(&self) -> BigUint {
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .get_monthly_quota()
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(isQuotaPaid)]
    fn is_quota_paid(&self, residence: u32) -> bool {
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .is_quota_paid(residence)
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(isProposal)]
    fn is_proposal(&self, title: ManagedBuffer) -> bool {
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .is_proposal(title)
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(getProposal)]
    fn get_proposal(&self, title: ManagedBuffer) -> Proposal<Self::Api> {
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .get_proposal(title)
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(getVotes)]
    fn get_votes(&self, title: ManagedBuffer) -> u64 {
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .get_votes(title)
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(getTreasuryBalance)]
    fn get_treasury_balance(&self) -> BigUint {
        self.tx()
            .to(self.require_implementation())
            .typed(CommunityLedgerProxy)
            .get_treasury_balance()
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("implementationChanged")]
    fn implementation_changed_event(
        &self,
        #[indexed] changed_by: &ManagedAddress,
        #[indexed] implementation: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("implementation")]
    fn implementation(&self) -> SingleValueMapper<ManagedAddress>;
}
