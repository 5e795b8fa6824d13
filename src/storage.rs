multiversx_sc::imports!();

use crate::types::{Proposal, Resident, VoteOption};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Roles ──

    #[storage_mapper("manager")]
    fn manager(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("trustedAdapter")]
    fn trusted_adapter(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Residence registry ──

    #[storage_mapper("residences")]
    fn residences(&self) -> UnorderedSetMapper<u32>;

    #[storage_mapper("residenceOccupant")]
    fn residence_occupant(&self, residence: u32) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("residents")]
    fn residents(&self, address: &ManagedAddress) -> SingleValueMapper<Resident>;

    // ── Dues ──

    #[storage_mapper("monthlyQuota")]
    fn monthly_quota(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("lastPayment")]
    fn last_payment(&self, residence: u32) -> SingleValueMapper<u64>;

    // ── Treasury ──

    #[storage_mapper("treasuryBalance")]
    fn treasury_balance(&self) -> SingleValueMapper<BigUint>;

    // ── Proposals ──

    #[storage_mapper("proposals")]
    fn proposals(&self, title: &ManagedBuffer) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalTitles")]
    fn proposal_titles(&self) -> UnorderedSetMapper<ManagedBuffer>;

    #[storage_mapper("votes")]
    fn votes(&self, title: &ManagedBuffer, voter: &ManagedAddress) -> SingleValueMapper<VoteOption>;
}
