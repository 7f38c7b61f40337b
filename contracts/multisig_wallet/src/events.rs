//! Audit events. Every effectful call appends exactly one event.

use soroban_sdk::{contractevent, Address, Env};

use crate::types::{Proposal, ProposalStatus};

#[contractevent(topics = ["MultisigWallet", "INIT"])]
pub struct WalletInitialized {
    pub administrator: Address,
    pub token: Address,
    pub vote_threshold: u32,
    pub owner_count: u32,
}

/// Lifecycle notification carrying the proposal tuple and its new status
#[contractevent(topics = ["MultisigWallet", "PROPOSAL"])]
pub struct ProposalUpdated {
    pub creator: Address,
    pub sequence: u64,
    pub recipient: Address,
    pub amount: i128,
    pub status: ProposalStatus,
}

#[contractevent(topics = ["MultisigWallet", "ADMIN_SET"])]
pub struct AdministratorChanged {
    pub previous: Address,
    pub new: Address,
}

#[contractevent(topics = ["MultisigWallet", "THRESH_SET"])]
pub struct VoteThresholdChanged {
    pub old: u32,
    pub new: u32,
}

#[contractevent(topics = ["MultisigWallet", "OWNER_ADD"])]
pub struct OwnerAdded {
    pub owner: Address,
}

#[contractevent(topics = ["MultisigWallet", "OWNER_REM"])]
pub struct OwnerRemoved {
    pub owner: Address,
}

#[contractevent(topics = ["MultisigWallet", "DEPOSIT"])]
pub struct Deposited {
    pub from: Address,
    pub amount: i128,
}

pub fn emit_initialized(
    env: &Env,
    administrator: &Address,
    token: &Address,
    vote_threshold: u32,
    owner_count: u32,
) {
    WalletInitialized {
        administrator: administrator.clone(),
        token: token.clone(),
        vote_threshold,
        owner_count,
    }
    .publish(env);
}

pub fn emit_proposal_updated(env: &Env, proposal: &Proposal) {
    ProposalUpdated {
        creator: proposal.creator.clone(),
        sequence: proposal.sequence,
        recipient: proposal.recipient.clone(),
        amount: proposal.amount,
        status: proposal.status,
    }
    .publish(env);
}

pub fn emit_administrator_changed(env: &Env, previous: &Address, new: &Address) {
    AdministratorChanged {
        previous: previous.clone(),
        new: new.clone(),
    }
    .publish(env);
}

pub fn emit_vote_threshold_changed(env: &Env, old: u32, new: u32) {
    VoteThresholdChanged { old, new }.publish(env);
}

pub fn emit_owner_added(env: &Env, owner: &Address) {
    OwnerAdded {
        owner: owner.clone(),
    }
    .publish(env);
}

pub fn emit_owner_removed(env: &Env, owner: &Address) {
    OwnerRemoved {
        owner: owner.clone(),
    }
    .publish(env);
}

pub fn emit_deposited(env: &Env, from: &Address, amount: i128) {
    Deposited {
        from: from.clone(),
        amount,
    }
    .publish(env);
}
