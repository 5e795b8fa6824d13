multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Created, still editable and removable. Votes not accepted yet.
    Pending,
    /// Opened by the manager. Residents with paid dues can vote.
    Voting,
    /// Quorum met and yes > no. Terminal except for Spending.
    Approved,
    /// Quorum met and yes <= no. Terminal.
    Rejected,
    /// Spending funds sent to the responsible. Terminal.
    Executed,
}

// ============================================================
// Proposal Category — fixed domain policy
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalCategory {
    Decision,
    Spending,
    ChangeQuota,
    ChangeManager,
}

impl ProposalCategory {
    /// Decision and ChangeManager proposals never carry a value.
    pub fn accepts_amount(&self) -> bool {
        matches!(self, ProposalCategory::Spending | ProposalCategory::ChangeQuota)
    }

    /// Spending pays the responsible, ChangeManager promotes it.
    pub fn requires_responsible(&self) -> bool {
        matches!(self, ProposalCategory::Spending | ProposalCategory::ChangeManager)
    }
}

// ============================================================
// Vote Option — Empty is the "not voted" storage default
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteOption {
    Empty,
    Yes,
    No,
    Abstain,
}

// ============================================================
// Proposal — the core governance record, keyed by title
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub category: ProposalCategory,
    /// Ceiling for Spending, new quota for ChangeQuota, zero otherwise
    pub amount: BigUint<M>,
    /// Payee for Spending, new manager for ChangeManager
    pub responsible: ManagedAddress<M>,
    pub status: ProposalStatus,
    pub yes_votes: u64,
    pub no_votes: u64,
    pub abstain_votes: u64,
    pub created_at: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn total_votes(&self) -> u64 {
        self.yes_votes + self.no_votes + self.abstain_votes
    }

    pub fn tally(&mut self, option: VoteOption) {
        match option {
            VoteOption::Yes => self.yes_votes += 1,
            VoteOption::No => self.no_votes += 1,
            VoteOption::Abstain => self.abstain_votes += 1,
            VoteOption::Empty => {}
        }
    }

    /// Abstentions count toward quorum but not toward the outcome.
    pub fn is_approved(&self) -> bool {
        self.yes_votes > self.no_votes
    }
}

// ============================================================
// Resident — an identity linked to exactly one residence
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Resident {
    pub residence: u32,
    pub is_counselor: bool,
}
