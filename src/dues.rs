multiversx_sc::imports!();

use crate::calendar;
use crate::errors::*;

#[multiversx_sc::module]
pub trait DuesModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::access::AccessModule
{
    // ========================================================
    // ENDPOINT: payQuota
    // One payment per residence per calendar month. Anything above the
    // quota is kept by the treasury.
    // ========================================================

    #[endpoint(payQuota)]
    #[payable("EGLD")]
    fn pay_quota(&self, residence: u32) {
        let payment = self.call_value().egld_value().clone_value();

        require!(self.residences().contains(&residence), ERR_RESIDENCE_NOT_FOUND);
        require!(
            payment >= self.monthly_quota().get(),
            ERR_INSUFFICIENT_AMOUNT
        );

        let month = self.current_month();
        require!(self.last_payment(residence).get() != month, ERR_ALREADY_PAID);

        self.last_payment(residence).set(month);
        self.treasury_balance().update(|balance| *balance += &payment);

        self.quota_paid_event(residence, month, &payment);
    }

    /// The manager votes without dues; residents need the current month paid.
    fn has_voting_rights(&self, voter: &ManagedAddress) -> bool {
        if self.is_manager(voter) {
            return true;
        }
        let resident = self.residents(voter);
        !resident.is_empty() && self.is_quota_paid(resident.get().residence)
    }

    fn change_quota(&self, title: &ManagedBuffer, quota: &BigUint) {
        self.monthly_quota().set(quota);
        self.quota_changed_event(title, quota);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMonthlyQuota)]
    fn get_monthly_quota(&self) -> BigUint {
        self.monthly_quota().get()
    }

    /// Month of the latest payment, 0 if the residence never paid.
    #[view(getLastPayment)]
    fn get_last_payment(&self, residence: u32) -> u64 {
        self.last_payment(residence).get()
    }

    #[view(isQuotaPaid)]
    fn is_quota_paid(&self, residence: u32) -> bool {
        self.last_payment(residence).get() == self.current_month()
    }

    #[view(getCurrentMonth)]
    fn current_month(&self) -> u64 {
        calendar::epoch_month(self.blockchain().get_block_timestamp())
    }
}
