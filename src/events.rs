multiversx_sc::imports!();

use crate::types::{ProposalCategory, ProposalStatus, VoteOption};

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Membership ──

    #[event("residentAdded")]
    fn resident_added_event(
        &self,
        #[indexed] resident: &ManagedAddress,
        #[indexed] residence: u32,
        added_by: &ManagedAddress,
    );

    #[event("residentRemoved")]
    fn resident_removed_event(&self, #[indexed] resident: &ManagedAddress, #[indexed] residence: u32);

    #[event("counselorSet")]
    fn counselor_set_event(&self, #[indexed] resident: &ManagedAddress, #[indexed] is_counselor: bool);

    #[event("managerChanged")]
    fn manager_changed_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] manager: &ManagedAddress,
    );

    #[event("adapterSet")]
    fn adapter_set_event(&self, #[indexed] adapter: &ManagedAddress);

    // ── Dues ──

    #[event("quotaPaid")]
    fn quota_paid_event(&self, #[indexed] residence: u32, #[indexed] month: u64, amount: &BigUint);

    #[event("quotaChanged")]
    fn quota_changed_event(&self, #[indexed] title: &ManagedBuffer, quota: &BigUint);

    // ── Proposals ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] title: &ManagedBuffer,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] category: ProposalCategory,
        amount: &BigUint,
    );

    #[event("proposalEdited")]
    fn proposal_edited_event(&self, #[indexed] title: &ManagedBuffer, amount: &BigUint);

    #[event("proposalRemoved")]
    fn proposal_removed_event(&self, #[indexed] title: &ManagedBuffer);

    #[event("voteOpened")]
    fn vote_opened_event(&self, #[indexed] title: &ManagedBuffer);

    #[event("voted")]
    fn voted_event(
        &self,
        #[indexed] title: &ManagedBuffer,
        #[indexed] voter: &ManagedAddress,
        option: VoteOption,
    );

    #[event("voteClosed")]
    fn vote_closed_event(
        &self,
        #[indexed] title: &ManagedBuffer,
        #[indexed] status: ProposalStatus,
        total_votes: u64,
    );

    // ── Treasury ──

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] title: &ManagedBuffer,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );
}
