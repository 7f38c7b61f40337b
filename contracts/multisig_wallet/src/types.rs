//! Data types for the Multisig Wallet contract

use soroban_sdk::{contracttype, Address};

/// Lifecycle of a transfer proposal. Transitions only move forward.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProposalStatus {
    /// No record is stored under the key (never written to storage)
    NonExistent = 0,
    /// Created and collecting votes
    Initiated = 1,
    /// Vote threshold reached, awaiting execution by the creator
    Passed = 2,
    /// Funds released; terminal
    Executed = 3,
}

/// Membership and proposal counter for a principal.
///
/// `sequence` is the highest sequence number this principal has allocated
/// and survives membership changes.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OwnerRecord {
    pub is_owner: bool,
    pub sequence: u64,
}

/// A recorded intent to move `amount` of the wallet token to `recipient`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Owner who created the proposal (first half of the key)
    pub creator: Address,
    /// Per-creator sequence number (second half of the key)
    pub sequence: u64,
    /// Destination of the funds
    pub recipient: Address,
    /// Amount in the token's native unit
    pub amount: i128,
    /// Number of distinct owners that voted
    pub vote_count: u32,
    pub status: ProposalStatus,
    /// Ledger timestamp at creation
    pub created_at: u64,
    /// Ledger timestamp at execution
    pub executed_at: Option<u64>,
}

impl Proposal {
    /// True when the caller-supplied transfer data matches the stored record
    pub fn matches(&self, recipient: &Address, amount: i128) -> bool {
        self.recipient == *recipient && self.amount == amount
    }
}

/// Wallet configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletConfig {
    /// Token contract holding the pooled balance
    pub token: Address,
    /// Minimum number of votes needed to pass a proposal
    pub vote_threshold: u32,
}
