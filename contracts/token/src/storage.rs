//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by the token ledger:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key           | Type      | Description                                 |
//! |---------------|-----------|---------------------------------------------|
//! | `Owner`       | `Address` | Administrative identity                     |
//! | `Generator`   | `Address` | Identity authorized to mint and burn        |
//! | `Name`        | `String`  | Human-facing token name                     |
//! | `Symbol`      | `String`  | Human-facing token symbol                   |
//! | `Decimals`    | `u32`     | Scale factor for human-facing amounts       |
//! | `LockPeriod`  | `u64`     | Seconds a transfer lock stays in force      |
//! | `TotalSupply` | `i128`    | Sum of all balances                         |
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                  | Type   | Description                              |
//! |----------------------|--------|------------------------------------------|
//! | `Balance(addr)`      | `i128` | Holder balance; absent entries read as 0 |
//! | `Allowance(o, s)`    | `i128` | Delegated spend limit from `o` to `s`    |
//! | `LockedUntil(addr)`  | `u64`  | Timestamp until which transfers from `addr` are rejected |
//! | `Receiver(addr)`     | `bool` | `addr` implements the receive-hook interface |
//!
//! High-frequency entries (balances, allowances) live in the persistent tier
//! so each holder's TTL is extended independently of the contract instance.

use soroban_sdk::{contracttype, Address, Env, String};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All ledger storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Administrative identity (Instance).
    Owner,
    /// Identity exclusively authorized to mint and burn (Instance).
    Generator,
    /// Token name (Instance).
    Name,
    /// Token symbol (Instance).
    Symbol,
    /// Decimal places (Instance).
    Decimals,
    /// Transfer lock duration in seconds (Instance).
    LockPeriod,
    /// Sum of all balances (Instance).
    TotalSupply,
    /// Holder balance (Persistent).
    Balance(Address),
    /// Delegated spend limit, keyed by (holder, spender) (Persistent).
    Allowance(Address, Address),
    /// Transfer lock expiry for an address (Persistent).
    LockedUntil(Address),
    /// Receive-hook capability flag (Persistent).
    Receiver(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

/// Panics if the ledger has not been initialized.
pub fn get_owner(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("ledger not initialized")
}

pub fn set_generator(env: &Env, generator: &Address) {
    env.storage().instance().set(&DataKey::Generator, generator);
    bump_instance(env);
}

/// The configured token generator, or `None` before `set_token_generator`.
pub fn get_generator(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Generator)
}

pub fn set_metadata(env: &Env, name: &String, symbol: &String, decimals: u32, lock_period: u64) {
    let storage = env.storage().instance();
    storage.set(&DataKey::Name, name);
    storage.set(&DataKey::Symbol, symbol);
    storage.set(&DataKey::Decimals, &decimals);
    storage.set(&DataKey::LockPeriod, &lock_period);
    bump_instance(env);
}

pub fn get_name(env: &Env) -> String {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Name)
        .expect("ledger not initialized")
}

pub fn get_symbol(env: &Env) -> String {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Symbol)
        .expect("ledger not initialized")
}

pub fn get_decimals(env: &Env) -> u32 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Decimals)
        .expect("ledger not initialized")
}

pub fn get_lock_period(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::LockPeriod)
        .expect("ledger not initialized")
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    bump_instance(env);
}

pub fn get_total_supply(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Holder balance; absent entries read as zero.
pub fn get_balance(env: &Env, addr: &Address) -> i128 {
    let key = DataKey::Balance(addr.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, addr: &Address, balance: i128) {
    let key = DataKey::Balance(addr.clone());
    env.storage().persistent().set(&key, &balance);
    bump_persistent(env, &key);
}

/// Delegated spend limit from `holder` to `spender`; absent entries read as zero.
pub fn get_allowance(env: &Env, holder: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(holder.clone(), spender.clone());
    match env.storage().persistent().get(&key) {
        Some(allowance) => {
            bump_persistent(env, &key);
            allowance
        }
        None => 0,
    }
}

pub fn set_allowance(env: &Env, holder: &Address, spender: &Address, allowance: i128) {
    let key = DataKey::Allowance(holder.clone(), spender.clone());
    env.storage().persistent().set(&key, &allowance);
    bump_persistent(env, &key);
}

/// Timestamp until which transfers from `addr` are rejected; 0 when never locked.
pub fn get_locked_until(env: &Env, addr: &Address) -> u64 {
    let key = DataKey::LockedUntil(addr.clone());
    match env.storage().persistent().get(&key) {
        Some(until) => {
            bump_persistent(env, &key);
            until
        }
        None => 0,
    }
}

pub fn set_locked_until(env: &Env, addr: &Address, until: u64) {
    let key = DataKey::LockedUntil(addr.clone());
    env.storage().persistent().set(&key, &until);
    bump_persistent(env, &key);
}

/// Whether `addr` registered the receive-hook capability.
pub fn is_receiver(env: &Env, addr: &Address) -> bool {
    let key = DataKey::Receiver(addr.clone());
    match env.storage().persistent().get(&key) {
        Some(flag) => {
            bump_persistent(env, &key);
            flag
        }
        None => false,
    }
}

pub fn set_receiver(env: &Env, addr: &Address) {
    let key = DataKey::Receiver(addr.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}
