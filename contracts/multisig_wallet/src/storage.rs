//! Storage keys and helpers for the Multisig Wallet contract

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::error::WalletError;
use crate::types::{OwnerRecord, Proposal, WalletConfig};

// ~5s per ledger: one day is 17_280 ledgers.
const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const RECORD_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Storage keys for the wallet contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Boolean flag indicating contract initialization
    Initialized,
    /// Administrator address (instance storage)
    Administrator,
    /// Wallet configuration (instance storage)
    Config,
    /// Membership and sequence counter of a principal (persistent storage)
    Owner(Address),
    /// Proposal keyed by creator and sequence number (persistent storage)
    Proposal(Address, u64),
    /// Addresses that voted on a proposal (persistent storage)
    ProposalVoters(Address, u64),
}

/// Keep the contract instance alive
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn set_record<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    let persistent = env.storage().persistent();
    persistent.set(key, value);
    persistent.extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

// ============================================================================
// Initialization Helpers
// ============================================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<DataKey, bool>(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

/// Fail with `NotInitialized` unless `initialize` has run
pub fn require_initialized(env: &Env) -> Result<(), WalletError> {
    if !is_initialized(env) {
        return Err(WalletError::NotInitialized);
    }
    Ok(())
}

// ============================================================================
// Administrator & Configuration Helpers
// ============================================================================

pub fn get_administrator(env: &Env) -> Result<Address, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Administrator)
        .ok_or(WalletError::NotInitialized)
}

pub fn set_administrator(env: &Env, administrator: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Administrator, administrator);
}

/// Fail with `Unauthorized` unless `caller` is the stored administrator
pub fn require_administrator(env: &Env, caller: &Address) -> Result<(), WalletError> {
    if get_administrator(env)? != *caller {
        return Err(WalletError::Unauthorized);
    }
    Ok(())
}

pub fn get_config(env: &Env) -> Result<WalletConfig, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(WalletError::NotInitialized)
}

pub fn set_config(env: &Env, config: &WalletConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ============================================================================
// Owner Registry
// ============================================================================

/// Owner record for `address`; principals never registered read as
/// non-owners with no proposals.
pub fn get_owner(env: &Env, address: &Address) -> OwnerRecord {
    env.storage()
        .persistent()
        .get(&DataKey::Owner(address.clone()))
        .unwrap_or_default()
}

pub fn set_owner(env: &Env, address: &Address, record: &OwnerRecord) {
    set_record(env, &DataKey::Owner(address.clone()), record);
}

pub fn is_owner(env: &Env, address: &Address) -> bool {
    get_owner(env, address).is_owner
}

/// Fail with `Unauthorized` unless `address` is a current owner
pub fn require_owner(env: &Env, address: &Address) -> Result<(), WalletError> {
    if !is_owner(env, address) {
        return Err(WalletError::Unauthorized);
    }
    Ok(())
}

/// Flip the membership flag. Returns false when nothing changed.
///
/// The sequence counter is left untouched so re-adding an owner never
/// reopens sequence numbers it already used.
pub fn set_membership(env: &Env, address: &Address, is_owner: bool) -> bool {
    let mut record = get_owner(env, address);
    if record.is_owner == is_owner {
        return false;
    }
    record.is_owner = is_owner;
    set_owner(env, address, &record);
    true
}

// ============================================================================
// Proposal Store
// ============================================================================

/// Reserve the next sequence number for `creator`.
///
/// Numbers start at 1 and grow by exactly one per call.
pub fn allocate_sequence(env: &Env, creator: &Address) -> Result<u64, WalletError> {
    let mut record = get_owner(env, creator);
    let next = record
        .sequence
        .checked_add(1)
        .ok_or(WalletError::ArithmeticOverflow)?;
    record.sequence = next;
    set_owner(env, creator, &record);
    Ok(next)
}

pub fn get_proposal(env: &Env, creator: &Address, sequence: u64) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(creator.clone(), sequence))
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.creator.clone(), proposal.sequence);
    set_record(env, &key, proposal);
}

pub fn get_voters(env: &Env, creator: &Address, sequence: u64) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::ProposalVoters(creator.clone(), sequence))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_voters(env: &Env, creator: &Address, sequence: u64, voters: &Vec<Address>) {
    set_record(
        env,
        &DataKey::ProposalVoters(creator.clone(), sequence),
        voters,
    );
}

pub fn has_voted(env: &Env, creator: &Address, sequence: u64, voter: &Address) -> bool {
    get_voters(env, creator, sequence).contains(voter)
}
