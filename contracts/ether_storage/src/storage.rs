//! # Storage
//!
//! Typed helpers over the escrow's storage. Everything lives in the instance
//! tier: the configuration is contract-lifetime, and the mutable state is a
//! single counter plus a bounded sample window.
//!
//! | Key            | Type       | Description                              |
//! |----------------|------------|------------------------------------------|
//! | `Owner`        | `Address`  | Beneficiary and administrative identity  |
//! | `Crowdsale`    | `Address`  | Only identity allowed to withdraw        |
//! | `Asset`        | `Address`  | Funding asset contract held in custody   |
//! | `Goal`         | `i128`     | Investment goal; 0 disables the sweep    |
//! | `Sample`       | `u32`      | Size of the deposit sample window        |
//! | `Lucky`        | `u32`      | Recent-deposit count for the sampling heuristic |
//! | `AmountRaised` | `i128`     | Held, not-yet-swept deposits             |
//! | `Investments`  | `Vec<i128>`| Bounded window of recent deposit amounts |

use soroban_sdk::{contracttype, Address, Env, Vec};

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// All escrow storage keys (all Instance).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Crowdsale,
    Asset,
    Goal,
    Sample,
    Lucky,
    AmountRaised,
    Investments,
}

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

pub fn get_owner(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("escrow not initialized")
}

pub fn set_crowdsale(env: &Env, crowdsale: &Address) {
    env.storage().instance().set(&DataKey::Crowdsale, crowdsale);
    bump_instance(env);
}

pub fn get_crowdsale(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Crowdsale)
        .expect("escrow not initialized")
}

pub fn set_asset(env: &Env, asset: &Address) {
    env.storage().instance().set(&DataKey::Asset, asset);
    bump_instance(env);
}

pub fn get_asset(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Asset)
        .expect("escrow not initialized")
}

pub fn set_goal(env: &Env, goal: i128) {
    env.storage().instance().set(&DataKey::Goal, &goal);
    bump_instance(env);
}

pub fn get_goal(env: &Env) -> i128 {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Goal).unwrap_or(0)
}

pub fn set_sample(env: &Env, sample: u32) {
    env.storage().instance().set(&DataKey::Sample, &sample);
    bump_instance(env);
}

pub fn get_sample(env: &Env) -> u32 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Sample)
        .expect("escrow not initialized")
}

pub fn set_lucky(env: &Env, lucky: u32) {
    env.storage().instance().set(&DataKey::Lucky, &lucky);
    bump_instance(env);
}

pub fn get_lucky(env: &Env) -> u32 {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Lucky).unwrap_or(0)
}

pub fn set_amount_raised(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::AmountRaised, &amount);
    bump_instance(env);
}

pub fn get_amount_raised(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::AmountRaised)
        .unwrap_or(0)
}

pub fn set_investments(env: &Env, investments: &Vec<i128>) {
    env.storage()
        .instance()
        .set(&DataKey::Investments, investments);
    bump_instance(env);
}

pub fn get_investments(env: &Env) -> Vec<i128> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Investments)
        .unwrap_or_else(|| Vec::new(env))
}
