#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod calendar;
pub mod community_ledger_proxy;
pub mod dues;
pub mod errors;
pub mod events;
pub mod proposals;
pub mod residences;
pub mod storage;
pub mod treasury;
pub mod types;

// ============================================================
// Contract
// Residence registry, dues, proposals and the treasury they fund.
// Each concern lives in its own module; all share one storage.
// ============================================================

#[multiversx_sc::contract]
pub trait CommunityLedger:
    storage::StorageModule
    + events::EventsModule
    + access::AccessModule
    + residences::ResidencesModule
    + dues::DuesModule
    + proposals::ProposalsModule
    + treasury::TreasuryModule
{
    /// The deployer becomes manager. The residence registry is fixed here
    /// and never changes afterwards.
    #[init]
    fn init(&self, monthly_quota: BigUint) {
        let deployer = self.blockchain().get_caller();
        self.manager().set(&deployer);
        self.monthly_quota().set(&monthly_quota);
        self.treasury_balance().set(BigUint::zero());
        self.seed_residences();
    }

    #[upgrade]
    fn upgrade(&self) {}
}
