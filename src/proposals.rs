multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{Proposal, ProposalCategory, ProposalStatus, VoteOption};

/// Minimum number of cast votes (any option) before a vote can be closed.
pub const QUORUM: u64 = 10;

#[multiversx_sc::module]
pub trait ProposalsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access::AccessModule
    + crate::dues::DuesModule
{
    // ========================================================
    // ENDPOINT: createProposal
    // Manager or any resident. Starts Pending with empty tallies.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        category: ProposalCategory,
        amount: BigUint,
        responsible: ManagedAddress,
        on_behalf_of: OptionalValue<ManagedAddress>,
    ) {
        let caller = self.effective_caller(on_behalf_of);
        self.require_manager_or_resident(&caller);
        require!(!title.is_empty(), ERR_EMPTY_TITLE);
        require!(self.proposals(&title).is_empty(), ERR_PROPOSAL_EXISTS);
        self.require_valid_terms(category, &amount, &responsible);

        let proposal = Proposal {
            title: title.clone(),
            description,
            category,
            amount,
            responsible,
            status: ProposalStatus::Pending,
            yes_votes: 0,
            no_votes: 0,
            abstain_votes: 0,
            created_at: self.blockchain().get_block_timestamp(),
        };

        self.proposals(&title).set(&proposal);
        self.proposal_titles().insert(title.clone());

        self.proposal_created_event(&title, &caller, category, &proposal.amount);
    }

    // ========================================================
    // ENDPOINT: editProposal
    // Partial update while Pending: an empty description, a zero
    // amount or a zero responsible leaves that field unchanged.
    // ========================================================

    #[endpoint(editProposal)]
    fn edit_proposal(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        amount: BigUint,
        responsible: ManagedAddress,
        on_behalf_of: OptionalValue<ManagedAddress>,
    ) {
        let caller = self.effective_caller(on_behalf_of);
        self.require_manager(&caller);

        let mut proposal = self.require_proposal(&title);
        require!(
            proposal.status == ProposalStatus::Pending,
            ERR_ONLY_PENDING_EDITED
        );

        if !description.is_empty() {
            proposal.description = description;
        }
        if amount > 0u64 {
            proposal.amount = amount;
        }
        if !responsible.is_zero() {
            proposal.responsible = responsible;
        }
        self.require_valid_terms(proposal.category, &proposal.amount, &proposal.responsible);

        self.proposals(&title).set(&proposal);
        self.proposal_edited_event(&title, &proposal.amount);
    }

    #[endpoint(removeProposal)]
    fn remove_proposal(&self, title: ManagedBuffer, on_behalf_of: OptionalValue<ManagedAddress>) {
        let caller = self.effective_caller(on_behalf_of);
        self.require_manager(&caller);

        let proposal = self.require_proposal(&title);
        require!(
            proposal.status == ProposalStatus::Pending,
            ERR_ONLY_PENDING_REMOVED
        );

        self.proposals(&title).clear();
        self.proposal_titles().swap_remove(&title);

        self.proposal_removed_event(&title);
    }

    #[endpoint(openVote)]
    fn open_vote(&self, title: ManagedBuffer, on_behalf_of: OptionalValue<ManagedAddress>) {
        let caller = self.effective_caller(on_behalf_of);
        self.require_manager(&caller);

        let mut proposal = self.require_proposal(&title);
        require!(proposal.status == ProposalStatus::Pending, ERR_NOT_PENDING);

        proposal.status = ProposalStatus::Voting;
        self.proposals(&title).set(&proposal);

        self.vote_opened_event(&title);
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per address per proposal, never overwritten. Residents
    // must have paid the current month; the manager is exempt.
    // ========================================================

    #[endpoint(vote)]
    fn vote(
        &self,
        title: ManagedBuffer,
        option: VoteOption,
        on_behalf_of: OptionalValue<ManagedAddress>,
    ) {
        let caller = self.effective_caller(on_behalf_of);
        self.require_manager_or_resident(&caller);

        let mut proposal = self.require_proposal(&title);
        require!(proposal.status == ProposalStatus::Voting, ERR_VOTE_NOT_OPEN);
        require!(option != VoteOption::Empty, ERR_EMPTY_OPTION);
        require!(self.votes(&title, &caller).is_empty(), ERR_ALREADY_VOTED);
        require!(self.has_voting_rights(&caller), ERR_QUOTA_UNPAID);

        self.votes(&title, &caller).set(option);
        proposal.tally(option);
        self.proposals(&title).set(&proposal);

        self.voted_event(&title, &caller, option);
    }

    // ========================================================
    // ENDPOINT: closeVote
    // Voting -> Approved (yes > no) or Rejected. Approval applies the
    // category's effect in the same transaction.
    // ========================================================

    #[endpoint(closeVote)]
    fn close_vote(&self, title: ManagedBuffer, on_behalf_of: OptionalValue<ManagedAddress>) {
        let caller = self.effective_caller(on_behalf_of);
        self.require_manager(&caller);

        let mut proposal = self.require_proposal(&title);
        require!(proposal.status == ProposalStatus::Voting, ERR_VOTE_NOT_OPEN);

        let total_votes = proposal.total_votes();
        require!(total_votes >= QUORUM, ERR_NOT_ENOUGH_VOTES);

        if proposal.is_approved() {
            proposal.status = ProposalStatus::Approved;
            match proposal.category {
                ProposalCategory::ChangeManager => self.change_manager(&proposal.responsible),
                ProposalCategory::ChangeQuota => self.change_quota(&title, &proposal.amount),
                // Spending waits for an explicit transfer.
                ProposalCategory::Spending | ProposalCategory::Decision => {}
            }
        } else {
            proposal.status = ProposalStatus::Rejected;
        }
        self.proposals(&title).set(&proposal);

        self.vote_closed_event(&title, proposal.status, total_votes);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_proposal(&self, title: &ManagedBuffer) -> Proposal<Self::Api> {
        let proposal = self.proposals(title);
        require!(!proposal.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        proposal.get()
    }

    fn require_valid_terms(
        &self,
        category: ProposalCategory,
        amount: &BigUint,
        responsible: &ManagedAddress,
    ) {
        require!(
            category.accepts_amount() || *amount == 0u64,
            ERR_INVALID_CATEGORY
        );
        require!(
            !category.requires_responsible() || !responsible.is_zero(),
            ERR_INVALID_RESPONSIBLE
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isProposal)]
    fn is_proposal(&self, title: &ManagedBuffer) -> bool {
        !self.proposals(title).is_empty()
    }

    #[view(getProposal)]
    fn get_proposal(&self, title: &ManagedBuffer) -> Proposal<Self::Api> {
        self.require_proposal(title)
    }

    #[view(getProposals)]
    fn get_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for title in self.proposal_titles().iter() {
            result.push(self.proposals(&title).get());
        }
        result
    }

    /// Number of votes cast so far, abstentions included.
    #[view(getVotes)]
    fn get_votes(&self, title: &ManagedBuffer) -> u64 {
        self.require_proposal(title).total_votes()
    }

    /// `Empty` when `voter` has not voted on `title`.
    #[view(getVote)]
    fn get_vote(&self, title: &ManagedBuffer, voter: &ManagedAddress) -> VoteOption {
        self.votes(title, voter).get()
    }

    #[view(hasVoted)]
    fn has_voted(&self, title: &ManagedBuffer, voter: &ManagedAddress) -> bool {
        !self.votes(title, voter).is_empty()
    }

    #[view(getQuorum)]
    fn get_quorum(&self) -> u64 {
        QUORUM
    }
}
