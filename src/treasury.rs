multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{ProposalCategory, ProposalStatus};

#[multiversx_sc::module]
pub trait TreasuryModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::access::AccessModule
{
    // ========================================================
    // ENDPOINT: transfer
    // Pays out an approved spending proposal, once. The proposal amount
    // is a ceiling: smaller non-zero draws are allowed but still close it.
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(
        &self,
        title: ManagedBuffer,
        amount: BigUint,
        on_behalf_of: OptionalValue<ManagedAddress>,
    ) {
        let caller = self.effective_caller(on_behalf_of);
        self.require_manager(&caller);
        require!(!self.proposals(&title).is_empty(), ERR_PROPOSAL_NOT_FOUND);

        let mut proposal = self.proposals(&title).get();
        require!(
            proposal.status == ProposalStatus::Approved,
            ERR_NOT_APPROVED
        );
        require!(
            proposal.category == ProposalCategory::Spending,
            ERR_NOT_SPENDING
        );
        require!(amount > 0u64, ERR_ZERO_TRANSFER);
        require!(amount <= proposal.amount, ERR_AMOUNT_EXCEEDS_PROPOSAL);
        require!(
            self.treasury_balance().get() >= amount,
            ERR_INSUFFICIENT_BALANCE
        );

        proposal.status = ProposalStatus::Executed;
        self.proposals(&title).set(&proposal);
        self.treasury_balance().update(|balance| *balance -= &amount);

        self.send().direct_egld(&proposal.responsible, &amount);
        self.transfer_event(&title, &proposal.responsible, &amount);
    }

    #[view(getTreasuryBalance)]
    fn get_treasury_balance(&self) -> BigUint {
        self.treasury_balance().get()
    }
}
