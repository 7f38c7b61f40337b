//! Error types for the Multisig Wallet contract

use soroban_sdk::contracterror;

/// Wallet contract errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller lacks the administrator role, ownership, or proposal authorship
    Unauthorized = 3,
    /// No proposal at this key, or it is no longer open for voting
    ProposalNotFound = 4,
    /// Creators cannot vote on their own proposals
    SelfVoteForbidden = 5,
    /// Supplied recipient or amount differs from the stored proposal
    DataMismatch = 6,
    /// Wallet balance cannot cover the transfer
    InsufficientFunds = 7,
    /// Proposal is not in the Passed state
    NotPassed = 8,
    /// Voter has already voted on this proposal
    AlreadyVoted = 9,
    /// Amount must not be negative (deposits must be positive)
    InvalidAmount = 10,
    /// Counter overflowed
    ArithmeticOverflow = 11,
    /// Token contract rejected the transfer
    TransferFailed = 12,
}
