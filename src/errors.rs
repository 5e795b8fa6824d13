// Reason strings surfaced to callers. Grouped by failure kind; the strings
// themselves are part of the public interface and must stay stable.

// ── Unauthorized ──

pub const ERR_ONLY_MANAGER: &str = "Only manager can call this function";
pub const ERR_ONLY_MANAGER_OR_COUNSELOR: &str = "Only manager or counselor can call this function";
pub const ERR_ONLY_MANAGER_OR_RESIDENT: &str = "Only manager or resident can call this function";
pub const ERR_UNTRUSTED_FORWARDER: &str = "Only the trusted adapter can act on behalf of another caller";

// ── NotFound ──

pub const ERR_RESIDENCE_NOT_FOUND: &str = "Residence does not exist";
pub const ERR_RESIDENT_NOT_FOUND: &str = "Resident does not exist";
pub const ERR_COUNSELOR_NOT_RESIDENT: &str = "The counselor must be a resident";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";

// ── AlreadyExists ──

pub const ERR_PROPOSAL_EXISTS: &str = "Proposal already exists";
pub const ERR_RESIDENCE_OCCUPIED: &str = "Residence is already occupied";
pub const ERR_ALREADY_RESIDENT: &str = "Address is already a resident";

// ── AlreadyDone ──

pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_ALREADY_PAID: &str = "Already paid this month";

// ── InvalidArgument ──

pub const ERR_ZERO_RESIDENT: &str = "Resident cannot be the zero address";
pub const ERR_ZERO_MANAGER: &str = "Manager cannot be the zero address";
pub const ERR_ZERO_ADAPTER: &str = "Adapter cannot be the zero address";
pub const ERR_EMPTY_TITLE: &str = "Title cannot be empty";
pub const ERR_INVALID_CATEGORY: &str = "Invalid category";
pub const ERR_INVALID_RESPONSIBLE: &str = "Invalid responsible";
pub const ERR_EMPTY_OPTION: &str = "Option cannot be empty";
pub const ERR_INSUFFICIENT_AMOUNT: &str = "Insufficient amount";
pub const ERR_AMOUNT_EXCEEDS_PROPOSAL: &str = "Amount exceeds proposal amount";
pub const ERR_ZERO_TRANSFER: &str = "Transfer amount must be greater than zero";

// ── InvalidState ──

pub const ERR_NOT_PENDING: &str = "Proposal is not pending";
pub const ERR_ONLY_PENDING_EDITED: &str = "Only pending proposals can be edited";
pub const ERR_ONLY_PENDING_REMOVED: &str = "Only pending proposals can be removed";
pub const ERR_VOTE_NOT_OPEN: &str = "Vote is not open";
pub const ERR_NOT_APPROVED: &str = "Proposal is not approved";
pub const ERR_NOT_SPENDING: &str = "Not a spending proposal";

// ── InvariantViolation ──

pub const ERR_RESIDENT_IS_COUNSELOR: &str = "Resident is a counselor";

// ── PreconditionFailed ──

pub const ERR_QUOTA_UNPAID: &str = "Resident has not paid the quota this month";
pub const ERR_NOT_ENOUGH_VOTES: &str = "Not enough votes";
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient balance";
