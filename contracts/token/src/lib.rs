//! # Crowdvault Token Ledger
//!
//! Mintable, burnable accounting token with delegated spending, time-gated
//! transfer locks and a receive-hook capability for contract recipients.
//!
//! | Concern        | Entry Point(s)                                        |
//! |----------------|-------------------------------------------------------|
//! | Bootstrap      | [`Token::init`]                                       |
//! | Supply         | `generate_tokens`, `generate_tokens_batch`, `burn_tokens` |
//! | Movement       | `transfer`, `approve`, `transfer_from`                |
//! | Administration | `set_token_generator`, `transfer_ownership`, `lock_transfer`, `register_receiver` |
//! | Queries        | `balance_of`, `allowance`, `total_supply`, `owner`, `token_generator`, `locked_until`, `name`, `symbol`, `decimals`, `lock_period`, `is_receiver` |
//!
//! ## Authority model
//!
//! Two privileged identities, both checked as explicit preconditions:
//! the `owner` administers the ledger (locks, receiver registry, generator
//! and ownership changes) and may seed balances; the `token_generator`
//! (normally the crowdsale engine) is the only identity allowed to burn and
//! shares minting rights with the owner.
//!
//! Every entry point either commits all of its effects or panics with a typed
//! [`Error`], which the host turns into a full rollback of the invocation.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, Address, Env, String, Vec,
};

mod events;
mod receiver;
mod storage;

#[cfg(test)]
mod test_lock;
#[cfg(test)]
mod test_receiver;

pub use receiver::{Recipient, ReceiverAction, TokenReceiver, TokenReceiverClient};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized          = 1,
    InsufficientBalance   = 2,
    InsufficientAllowance = 3,
    InvalidAmount         = 4,
    TransferLocked        = 5,
    NotConfigured         = 6,
    ReceiverRejected      = 8,
    AlreadyInitialized    = 9,
    LengthMismatch        = 10,
}

/// Upper bound for `decimals`, the Stellar asset convention ceiling; keeps
/// `10^decimals` well inside `i128` for price conversion arithmetic.
pub const MAX_DECIMALS: u32 = 18;

#[contract]
pub struct Token;

#[contractimpl]
impl Token {
    /// Initialise the ledger.
    ///
    /// Must be called exactly once after deployment; subsequent calls panic
    /// with `Error::AlreadyInitialized`. `decimals` is capped at
    /// [`MAX_DECIMALS`] so `10^decimals` always fits an `i128` in conversion
    /// arithmetic. The token generator is not set here, the owner wires it in
    /// with [`Token::set_token_generator`] once the crowdsale engine exists.
    pub fn init(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        decimals: u32,
        lock_period: u64,
    ) {
        owner.require_auth();
        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        if decimals > MAX_DECIMALS {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        storage::set_owner(&env, &owner);
        storage::set_metadata(&env, &name, &symbol, decimals, lock_period);
        storage::set_total_supply(&env, 0);
    }

    // ─────────────────────────────────────────────────────────
    // Supply
    // ─────────────────────────────────────────────────────────

    /// Credit `amount` freshly minted tokens to `to`.
    ///
    /// `caller` must be the owner or the configured token generator.
    pub fn generate_tokens(env: Env, caller: Address, to: Address, amount: i128) {
        caller.require_auth();
        Self::require_minter(&env, &caller);
        Self::mint(&env, &to, amount);
    }

    /// Batch mint: credits `amounts[i]` to `recipients[i]`.
    ///
    /// Fails atomically with `Error::LengthMismatch` when the two vectors
    /// differ in length; no recipient is credited partially.
    pub fn generate_tokens_batch(
        env: Env,
        caller: Address,
        recipients: Vec<Address>,
        amounts: Vec<i128>,
    ) {
        caller.require_auth();
        Self::require_minter(&env, &caller);
        if recipients.len() != amounts.len() {
            panic_with_error!(&env, Error::LengthMismatch);
        }
        for (to, amount) in recipients.iter().zip(amounts.iter()) {
            Self::mint(&env, &to, amount);
        }
    }

    /// Debit `amount` from `from` and reduce total supply.
    ///
    /// Only the token generator may burn.
    pub fn burn_tokens(env: Env, caller: Address, from: Address, amount: i128) {
        caller.require_auth();
        match storage::get_generator(&env) {
            None => panic_with_error!(&env, Error::NotConfigured),
            Some(generator) if generator != caller => {
                panic_with_error!(&env, Error::Unauthorized)
            }
            Some(_) => {}
        }
        Self::burn(&env, &from, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Movement
    // ─────────────────────────────────────────────────────────

    /// Move `amount` tokens from `from` to `to`.
    ///
    /// Rejects when `from` holds less than `amount`, when `from` is under an
    /// active transfer lock, or when `to` is a registered receiver whose hook
    /// declines the tokens.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        Self::move_tokens(&env, &from, to, amount);
    }

    /// Set the delegated spend limit from `caller` to `spender`.
    ///
    /// Rejected when `caller` holds no tokens.
    pub fn approve(env: Env, caller: Address, spender: Address, amount: i128) {
        caller.require_auth();
        if amount < 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        if storage::get_balance(&env, &caller) == 0 {
            panic_with_error!(&env, Error::InsufficientBalance);
        }
        storage::set_allowance(&env, &caller, &spender, amount);
        events::approved(&env, &caller, &spender, amount);
    }

    /// Move `amount` tokens from `from` to `to` on behalf of `spender`.
    ///
    /// Applies the same balance, lock and receive-hook checks as
    /// [`Token::transfer`] and additionally enforces and decrements the
    /// allowance granted by `from` to `spender`.
    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        let allowance = storage::get_allowance(&env, &from, &spender);
        if allowance < amount {
            panic_with_error!(&env, Error::InsufficientAllowance);
        }
        storage::set_allowance(&env, &from, &spender, allowance - amount);
        Self::move_tokens(&env, &from, to, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Administration
    // ─────────────────────────────────────────────────────────

    /// Stamp a transfer lock on `addr` lasting the configured lock period.
    ///
    /// Outgoing transfers from `addr` are rejected until the stamp expires;
    /// incoming transfers and reads are unaffected.
    pub fn lock_transfer(env: Env, caller: Address, addr: Address) {
        Self::require_owner(&env, &caller);
        let until = env.ledger().timestamp() + storage::get_lock_period(&env);
        storage::set_locked_until(&env, &addr, until);
        events::locked(&env, &addr, until);
    }

    /// Register `contract` as a receive-hook capable destination.
    pub fn register_receiver(env: Env, caller: Address, contract: Address) {
        Self::require_owner(&env, &caller);
        storage::set_receiver(&env, &contract);
    }

    /// Replace the identity authorized to mint and burn.
    pub fn set_token_generator(env: Env, caller: Address, generator: Address) {
        Self::require_owner(&env, &caller);
        storage::set_generator(&env, &generator);
        events::generator_changed(&env, &generator);
    }

    /// Hand the ledger over to `new_owner`.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) {
        Self::require_owner(&env, &caller);
        storage::set_owner(&env, &new_owner);
        events::ownership_transferred(&env, &new_owner);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn balance_of(env: Env, addr: Address) -> i128 {
        storage::get_balance(&env, &addr)
    }

    pub fn allowance(env: Env, holder: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &holder, &spender)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    pub fn token_generator(env: Env) -> Option<Address> {
        storage::get_generator(&env)
    }

    /// Timestamp until which transfers from `addr` are rejected; 0 when the
    /// address was never locked.
    pub fn locked_until(env: Env, addr: Address) -> u64 {
        storage::get_locked_until(&env, &addr)
    }

    pub fn is_receiver(env: Env, addr: Address) -> bool {
        storage::is_receiver(&env, &addr)
    }

    pub fn name(env: Env) -> String {
        storage::get_name(&env)
    }

    pub fn symbol(env: Env) -> String {
        storage::get_symbol(&env)
    }

    pub fn decimals(env: Env) -> u32 {
        storage::get_decimals(&env)
    }

    pub fn lock_period(env: Env) -> u64 {
        storage::get_lock_period(&env)
    }
}

impl Token {
    fn require_owner(env: &Env, caller: &Address) {
        caller.require_auth();
        if *caller != storage::get_owner(env) {
            panic_with_error!(env, Error::Unauthorized);
        }
    }

    /// Owner may seed balances before the generator is wired in; afterwards
    /// the generator mints on every investment.
    fn require_minter(env: &Env, caller: &Address) {
        if *caller == storage::get_owner(env) {
            return;
        }
        match storage::get_generator(env) {
            None => panic_with_error!(env, Error::NotConfigured),
            Some(generator) if generator != *caller => {
                panic_with_error!(env, Error::Unauthorized)
            }
            Some(_) => {}
        }
    }

    fn mint(env: &Env, to: &Address, amount: i128) {
        if amount <= 0 {
            panic_with_error!(env, Error::InvalidAmount);
        }
        storage::set_balance(env, to, storage::get_balance(env, to) + amount);
        storage::set_total_supply(env, storage::get_total_supply(env) + amount);
        events::minted(env, to, amount);
    }

    fn burn(env: &Env, from: &Address, amount: i128) {
        if amount <= 0 {
            panic_with_error!(env, Error::InvalidAmount);
        }
        let balance = storage::get_balance(env, from);
        if balance < amount {
            panic_with_error!(env, Error::InsufficientBalance);
        }
        storage::set_balance(env, from, balance - amount);
        storage::set_total_supply(env, storage::get_total_supply(env) - amount);
        events::burned(env, from, amount);
    }

    /// Shared debit/credit path for `transfer` and `transfer_from`.
    ///
    /// Checks, then effects, then the receive-hook interaction; a hook
    /// failure panics and the host rolls the whole operation back.
    fn move_tokens(env: &Env, from: &Address, to: Address, amount: i128) {
        if amount <= 0 {
            panic_with_error!(env, Error::InvalidAmount);
        }
        let now = env.ledger().timestamp();
        if now < storage::get_locked_until(env, from) {
            panic_with_error!(env, Error::TransferLocked);
        }
        let from_balance = storage::get_balance(env, from);
        if from_balance < amount {
            panic_with_error!(env, Error::InsufficientBalance);
        }
        storage::set_balance(env, from, from_balance - amount);
        storage::set_balance(env, &to, storage::get_balance(env, &to) + amount);

        match Recipient::resolve(env, to.clone()) {
            Recipient::Plain(_) => {}
            Recipient::Hooked(hooked) => {
                let client = TokenReceiverClient::new(env, &hooked);
                let result =
                    client.try_on_token_received(&env.current_contract_address(), from, &amount);
                match result {
                    Ok(Ok(ReceiverAction::Keep)) => {}
                    Ok(Ok(ReceiverAction::Burn)) => {
                        // Only the generator may turn a transfer into a burn.
                        if storage::get_generator(env) != Some(hooked.clone()) {
                            panic_with_error!(env, Error::Unauthorized);
                        }
                        Self::burn(env, &hooked, amount);
                    }
                    _ => panic_with_error!(env, Error::ReceiverRejected),
                }
            }
        }
        events::transferred(env, from, &to, amount);
    }
}
