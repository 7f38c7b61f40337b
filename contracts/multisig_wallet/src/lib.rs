#![no_std]

//! # Multisig Wallet
//!
//! A Soroban smart contract holding a pooled token balance on behalf of a set
//! of owners. Funds leave the wallet only through proposals that collect a
//! minimum number of votes from distinct owners.
//!
//! ## Roles
//! - Administrator: manages the owner set and the vote threshold, cannot move funds
//! - Owners: create proposals and vote on each other's proposals
//!
//! ## Proposal lifecycle
//! `Initiated --[votes reach threshold]--> Passed --[creator executes]--> Executed`
//!
//! Proposals are keyed by `(creator, sequence)`, where `sequence` is a
//! per-creator counter allocated at creation. Callers restate the recipient
//! and amount on every vote and execution; a mismatch is rejected.
//!
//! ## Security
//! - Each owner can vote once per proposal; creators cannot vote on their own
//! - Status is written as `Executed` before the token transfer is issued
//! - Every failure returns an error and the host reverts all writes

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

mod error;
mod events;
mod ledger;
mod storage;
mod types;

pub use error::WalletError;
pub use types::{OwnerRecord, Proposal, ProposalStatus, WalletConfig};

#[contract]
pub struct MultisigWallet;

#[contractimpl]
impl MultisigWallet {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the wallet
    ///
    /// # Arguments
    /// * `administrator` - Address allowed to manage owners and the threshold
    /// * `token` - Token contract holding the pooled balance
    /// * `vote_threshold` - Votes required to pass a proposal
    /// * `owners` - Initial owner set (duplicates are ignored)
    ///
    /// # Errors
    /// * `AlreadyInitialized` - Contract has already been initialized
    pub fn initialize(
        env: Env,
        administrator: Address,
        token: Address,
        vote_threshold: u32,
        owners: Vec<Address>,
    ) -> Result<(), WalletError> {
        if storage::is_initialized(&env) {
            return Err(WalletError::AlreadyInitialized);
        }

        administrator.require_auth();

        storage::set_administrator(&env, &administrator);
        storage::set_config(
            &env,
            &WalletConfig {
                token: token.clone(),
                vote_threshold,
            },
        );

        let mut owner_count = 0u32;
        for owner in owners.iter() {
            if storage::set_membership(&env, &owner, true) {
                owner_count += 1;
            }
        }

        storage::set_initialized(&env);
        storage::extend_instance_ttl(&env);

        events::emit_initialized(&env, &administrator, &token, vote_threshold, owner_count);

        Ok(())
    }

    // ========================================================================
    // Administration
    // ========================================================================

    /// Hand the administrator role to `new_administrator`
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `Unauthorized` - Caller is not the administrator
    pub fn set_administrator(
        env: Env,
        caller: Address,
        new_administrator: Address,
    ) -> Result<(), WalletError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        storage::require_administrator(&env, &caller)?;

        storage::set_administrator(&env, &new_administrator);
        storage::extend_instance_ttl(&env);

        events::emit_administrator_changed(&env, &caller, &new_administrator);
        Ok(())
    }

    /// Replace the global vote threshold
    ///
    /// Any value is accepted. A threshold of 0 passes a proposal on its
    /// first vote, so administrators are expected to pick a sane value.
    /// Proposals already `Passed` are not re-evaluated.
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `Unauthorized` - Caller is not the administrator
    pub fn set_vote_threshold(
        env: Env,
        caller: Address,
        vote_threshold: u32,
    ) -> Result<(), WalletError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        storage::require_administrator(&env, &caller)?;

        let mut config = storage::get_config(&env)?;
        let old = config.vote_threshold;
        config.vote_threshold = vote_threshold;
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        events::emit_vote_threshold_changed(&env, old, vote_threshold);
        Ok(())
    }

    /// Grant ownership to `owner`
    ///
    /// A no-op for existing owners. A previously removed owner keeps its
    /// sequence counter, so its next proposal continues the old numbering.
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `Unauthorized` - Caller is not the administrator
    pub fn add_owner(env: Env, caller: Address, owner: Address) -> Result<(), WalletError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        storage::require_administrator(&env, &caller)?;

        if storage::set_membership(&env, &owner, true) {
            events::emit_owner_added(&env, &owner);
        }
        Ok(())
    }

    /// Revoke ownership from `owner`
    ///
    /// Proposals created by `owner` stay in the store and can still be voted
    /// on and executed.
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `Unauthorized` - Caller is not the administrator
    pub fn remove_owner(env: Env, caller: Address, owner: Address) -> Result<(), WalletError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        storage::require_administrator(&env, &caller)?;

        if storage::set_membership(&env, &owner, false) {
            events::emit_owner_removed(&env, &owner);
        }
        Ok(())
    }

    // ========================================================================
    // Funding
    // ========================================================================

    /// Move `amount` of the wallet token from `from` into the wallet
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `InvalidAmount` - Amount is zero or negative
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), WalletError> {
        storage::require_initialized(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }

        let config = storage::get_config(&env)?;
        ledger::receive(&env, &config.token, &from, amount);

        events::emit_deposited(&env, &from, amount);
        Ok(())
    }

    // ========================================================================
    // Proposal Lifecycle
    // ========================================================================

    /// Propose sending `amount` to `recipient`
    ///
    /// Returns the sequence number allocated to the proposal. Together with
    /// `creator` it identifies the proposal in later calls.
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `Unauthorized` - Creator is not a current owner
    /// * `InvalidAmount` - Amount is negative
    /// * `ArithmeticOverflow` - Creator exhausted its sequence numbers
    pub fn create_proposal(
        env: Env,
        creator: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<u64, WalletError> {
        storage::require_initialized(&env)?;
        creator.require_auth();

        storage::require_owner(&env, &creator)?;
        if amount < 0 {
            return Err(WalletError::InvalidAmount);
        }

        let sequence = storage::allocate_sequence(&env, &creator)?;
        let proposal = Proposal {
            creator,
            sequence,
            recipient,
            amount,
            vote_count: 0,
            status: ProposalStatus::Initiated,
            created_at: env.ledger().timestamp(),
            executed_at: None,
        };
        storage::set_proposal(&env, &proposal);
        storage::extend_instance_ttl(&env);

        events::emit_proposal_updated(&env, &proposal);

        Ok(sequence)
    }

    /// Cast `voter`'s vote on the proposal `(creator, sequence)`
    ///
    /// The proposal passes once its vote count reaches the threshold in
    /// effect at the time of this vote.
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `Unauthorized` - Voter is not a current owner
    /// * `ProposalNotFound` - No proposal at this key, or it is not `Initiated`
    /// * `SelfVoteForbidden` - Voter created the proposal
    /// * `DataMismatch` - Recipient or amount differ from the stored proposal
    /// * `AlreadyVoted` - Voter already voted on this proposal
    pub fn vote_proposal(
        env: Env,
        creator: Address,
        sequence: u64,
        recipient: Address,
        amount: i128,
        voter: Address,
    ) -> Result<ProposalStatus, WalletError> {
        storage::require_initialized(&env)?;
        voter.require_auth();

        storage::require_owner(&env, &voter)?;

        let mut proposal = storage::get_proposal(&env, &creator, sequence)
            .filter(|p| p.status == ProposalStatus::Initiated)
            .ok_or(WalletError::ProposalNotFound)?;

        if voter == creator {
            return Err(WalletError::SelfVoteForbidden);
        }
        if !proposal.matches(&recipient, amount) {
            return Err(WalletError::DataMismatch);
        }

        let mut voters = storage::get_voters(&env, &creator, sequence);
        if voters.contains(&voter) {
            return Err(WalletError::AlreadyVoted);
        }
        voters.push_back(voter);
        storage::set_voters(&env, &creator, sequence, &voters);

        proposal.vote_count = proposal
            .vote_count
            .checked_add(1)
            .ok_or(WalletError::ArithmeticOverflow)?;

        let config = storage::get_config(&env)?;
        if proposal.vote_count >= config.vote_threshold {
            proposal.status = ProposalStatus::Passed;
        }

        storage::set_proposal(&env, &proposal);
        storage::extend_instance_ttl(&env);

        events::emit_proposal_updated(&env, &proposal);

        Ok(proposal.status)
    }

    /// Release the funds of a passed proposal
    ///
    /// Only the creator may execute. The proposal is recorded as `Executed`
    /// before the token transfer is issued.
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `Unauthorized` - Caller did not create the proposal
    /// * `NotPassed` - No proposal at this key, or it is not `Passed`
    /// * `DataMismatch` - Recipient or amount differ from the stored proposal
    /// * `InsufficientFunds` - Wallet balance is below the amount
    /// * `TransferFailed` - Token contract rejected the transfer
    pub fn execute_proposal(
        env: Env,
        creator: Address,
        sequence: u64,
        recipient: Address,
        amount: i128,
        caller: Address,
    ) -> Result<(), WalletError> {
        storage::require_initialized(&env)?;
        caller.require_auth();

        if caller != creator {
            return Err(WalletError::Unauthorized);
        }

        let mut proposal = storage::get_proposal(&env, &creator, sequence)
            .filter(|p| p.status == ProposalStatus::Passed)
            .ok_or(WalletError::NotPassed)?;

        if !proposal.matches(&recipient, amount) {
            return Err(WalletError::DataMismatch);
        }

        let config = storage::get_config(&env)?;
        if ledger::available_balance(&env, &config.token) < amount {
            return Err(WalletError::InsufficientFunds);
        }

        // Commit before the external call
        proposal.status = ProposalStatus::Executed;
        proposal.executed_at = Some(env.ledger().timestamp());
        storage::set_proposal(&env, &proposal);
        storage::extend_instance_ttl(&env);

        log!(&env, "releasing proposal funds", creator, sequence, amount);
        ledger::release(&env, &config.token, &recipient, amount)?;

        events::emit_proposal_updated(&env, &proposal);

        Ok(())
    }

    // ========================================================================
    // Query Functions
    // ========================================================================

    /// Get the proposal stored at `(creator, sequence)`
    pub fn get_proposal(
        env: Env,
        creator: Address,
        sequence: u64,
    ) -> Result<Proposal, WalletError> {
        storage::require_initialized(&env)?;
        storage::get_proposal(&env, &creator, sequence).ok_or(WalletError::ProposalNotFound)
    }

    /// Get the status of `(creator, sequence)`; `NonExistent` when absent
    pub fn get_proposal_status(env: Env, creator: Address, sequence: u64) -> ProposalStatus {
        storage::get_proposal(&env, &creator, sequence)
            .map(|p| p.status)
            .unwrap_or(ProposalStatus::NonExistent)
    }

    /// Get the addresses that voted on a proposal, in voting order
    pub fn get_voters(
        env: Env,
        creator: Address,
        sequence: u64,
    ) -> Result<Vec<Address>, WalletError> {
        storage::require_initialized(&env)?;
        if storage::get_proposal(&env, &creator, sequence).is_none() {
            return Err(WalletError::ProposalNotFound);
        }
        Ok(storage::get_voters(&env, &creator, sequence))
    }

    /// Check whether `voter` has voted on a proposal
    pub fn has_voted(env: Env, creator: Address, sequence: u64, voter: Address) -> bool {
        storage::has_voted(&env, &creator, sequence, &voter)
    }

    /// Check if an address is a current owner
    pub fn is_owner(env: Env, address: Address) -> bool {
        if !storage::is_initialized(&env) {
            return false;
        }
        storage::is_owner(&env, &address)
    }

    /// Highest sequence number `address` has allocated (0 if none)
    pub fn get_owner_sequence(env: Env, address: Address) -> u64 {
        storage::get_owner(&env, &address).sequence
    }

    /// Get the current administrator
    pub fn get_administrator(env: Env) -> Result<Address, WalletError> {
        storage::get_administrator(&env)
    }

    /// Get the number of votes a proposal needs to pass
    pub fn get_vote_threshold(env: Env) -> Result<u32, WalletError> {
        Ok(storage::get_config(&env)?.vote_threshold)
    }

    /// Get the full wallet configuration
    pub fn get_config(env: Env) -> Result<WalletConfig, WalletError> {
        storage::get_config(&env)
    }

    /// Token balance held by the wallet
    pub fn balance(env: Env) -> Result<i128, WalletError> {
        let config = storage::get_config(&env)?;
        Ok(ledger::available_balance(&env, &config.token))
    }
}
