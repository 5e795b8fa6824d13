multiversx_sc::imports!();

use crate::errors::*;
use crate::types::Resident;

// Residence codes are `tower * 1000 + floor * 100 + unit`, e.g. 1201.
const TOWERS: u32 = 3;
const FLOORS_PER_TOWER: u32 = 5;
const UNITS_PER_FLOOR: u32 = 4;

#[multiversx_sc::module]
pub trait ResidencesModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::access::AccessModule
{
    /// Seeds the fixed registry. Called once from `init`.
    fn seed_residences(&self) {
        let mut residences = self.residences();
        for tower in 1..=TOWERS {
            for floor in 1..=FLOORS_PER_TOWER {
                for unit in 1..=UNITS_PER_FLOOR {
                    residences.insert(tower * 1_000 + floor * 100 + unit);
                }
            }
        }
    }

    // ========================================================
    // ENDPOINT: addResident
    // Links an address to a vacant residence. One residence per
    // address and one address per residence.
    // ========================================================

    #[endpoint(addResident)]
    fn add_resident(
        &self,
        resident: ManagedAddress,
        residence: u32,
        on_behalf_of: OptionalValue<ManagedAddress>,
    ) {
        let caller = self.effective_caller(on_behalf_of);
        self.require_manager_or_counselor(&caller);
        require!(self.residences().contains(&residence), ERR_RESIDENCE_NOT_FOUND);
        require!(!resident.is_zero(), ERR_ZERO_RESIDENT);
        require!(
            self.residence_occupant(residence).is_empty(),
            ERR_RESIDENCE_OCCUPIED
        );
        require!(self.residents(&resident).is_empty(), ERR_ALREADY_RESIDENT);

        self.residents(&resident).set(Resident {
            residence,
            is_counselor: false,
        });
        self.residence_occupant(residence).set(&resident);

        self.resident_added_event(&resident, residence, &caller);
    }

    // ========================================================
    // ENDPOINT: removeResident
    // Counselors must be demoted first.
    // ========================================================

    #[endpoint(removeResident)]
    fn remove_resident(&self, resident: ManagedAddress, on_behalf_of: OptionalValue<ManagedAddress>) {
        let caller = self.effective_caller(on_behalf_of);
        self.require_manager(&caller);
        require!(self.is_resident(&resident), ERR_RESIDENT_NOT_FOUND);

        let record = self.residents(&resident).get();
        require!(!record.is_counselor, ERR_RESIDENT_IS_COUNSELOR);

        self.residents(&resident).clear();
        self.residence_occupant(record.residence).clear();

        self.resident_removed_event(&resident, record.residence);
    }

    #[endpoint(setCounselor)]
    fn set_counselor(
        &self,
        resident: ManagedAddress,
        is_counselor: bool,
        on_behalf_of: OptionalValue<ManagedAddress>,
    ) {
        let caller = self.effective_caller(on_behalf_of);
        self.require_manager(&caller);
        require!(!resident.is_zero(), ERR_ZERO_RESIDENT);
        require!(self.is_resident(&resident), ERR_COUNSELOR_NOT_RESIDENT);

        self.residents(&resident)
            .update(|record| record.is_counselor = is_counselor);

        self.counselor_set_event(&resident, is_counselor);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isResidence)]
    fn is_residence(&self, residence: u32) -> bool {
        self.residences().contains(&residence)
    }

    #[view(getResidences)]
    fn get_residences(&self) -> MultiValueEncoded<u32> {
        let mut result = MultiValueEncoded::new();
        for residence in self.residences().iter() {
            result.push(residence);
        }
        result
    }

    /// Residence of `address`, or nothing if it is not a resident.
    #[view(getResidence)]
    fn get_residence(&self, address: &ManagedAddress) -> OptionalValue<u32> {
        let resident = self.residents(address);
        if resident.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(resident.get().residence)
        }
    }

    #[view(getResidenceOccupant)]
    fn get_residence_occupant(&self, residence: u32) -> OptionalValue<ManagedAddress> {
        let occupant = self.residence_occupant(residence);
        if occupant.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(occupant.get())
        }
    }
}
