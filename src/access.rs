multiversx_sc::imports!();

use crate::errors::*;

// ============================================================
// Access control
// Manager > Counselor > Resident > Outsider. Every identity-checked
// endpoint resolves its effective caller first, then applies one guard.
// ============================================================

#[multiversx_sc::module]
pub trait AccessModule: crate::storage::StorageModule + crate::events::EventsModule {
    /// Administrative path for replacing the manager outside of a vote.
    #[endpoint(setManager)]
    fn set_manager(&self, new_manager: ManagedAddress, on_behalf_of: OptionalValue<ManagedAddress>) {
        let caller = self.effective_caller(on_behalf_of);
        self.require_manager(&caller);
        self.change_manager(&new_manager);
    }

    /// Registers the adapter allowed to relay calls on behalf of its own callers.
    #[endpoint(setAdapter)]
    fn set_adapter(&self, adapter: ManagedAddress, on_behalf_of: OptionalValue<ManagedAddress>) {
        let caller = self.effective_caller(on_behalf_of);
        self.require_manager(&caller);
        require!(!adapter.is_zero(), ERR_ZERO_ADAPTER);

        self.trusted_adapter().set(&adapter);
        self.adapter_set_event(&adapter);
    }

    // ========================================================
    // INTERNAL: caller resolution
    // A relayed call names its originator in `on_behalf_of`. Only the
    // trusted adapter may do so; everyone else acts as themselves.
    // ========================================================

    fn effective_caller(&self, on_behalf_of: OptionalValue<ManagedAddress>) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        match on_behalf_of {
            OptionalValue::None => caller,
            OptionalValue::Some(originator) => {
                let adapter = self.trusted_adapter();
                require!(
                    !adapter.is_empty() && adapter.get() == caller,
                    ERR_UNTRUSTED_FORWARDER
                );
                originator
            }
        }
    }

    fn change_manager(&self, new_manager: &ManagedAddress) {
        require!(!new_manager.is_zero(), ERR_ZERO_MANAGER);

        let previous = self.manager().get();
        self.manager().set(new_manager);
        self.manager_changed_event(&previous, new_manager);
    }

    // ========================================================
    // INTERNAL: guards
    // ========================================================

    fn require_manager(&self, caller: &ManagedAddress) {
        require!(self.is_manager(caller), ERR_ONLY_MANAGER);
    }

    fn require_manager_or_counselor(&self, caller: &ManagedAddress) {
        require!(
            self.is_manager(caller) || self.is_counselor(caller),
            ERR_ONLY_MANAGER_OR_COUNSELOR
        );
    }

    fn require_manager_or_resident(&self, caller: &ManagedAddress) {
        require!(
            self.is_manager(caller) || self.is_resident(caller),
            ERR_ONLY_MANAGER_OR_RESIDENT
        );
    }

    fn is_manager(&self, address: &ManagedAddress) -> bool {
        &self.manager().get() == address
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getManager)]
    fn get_manager(&self) -> ManagedAddress {
        self.manager().get()
    }

    #[view(getAdapter)]
    fn get_adapter(&self) -> OptionalValue<ManagedAddress> {
        if self.trusted_adapter().is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.trusted_adapter().get())
        }
    }

    #[view(isResident)]
    fn is_resident(&self, address: &ManagedAddress) -> bool {
        !self.residents(address).is_empty()
    }

    #[view(isCounselor)]
    fn is_counselor(&self, address: &ManagedAddress) -> bool {
        let resident = self.residents(address);
        !resident.is_empty() && resident.get().is_counselor
    }
}
