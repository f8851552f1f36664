//! # Storage
//!
//! All engine state is contract-lifetime configuration, so everything lives
//! in the instance tier.
//!
//! | Key               | Type      | Description                             |
//! |-------------------|-----------|-----------------------------------------|
//! | `Owner`           | `Address` | Administrative identity                 |
//! | `Token`           | `Address` | Token ledger minted into / burned from  |
//! | `Asset`           | `Address` | Funding asset contract                  |
//! | `InitPrice`       | `i128`    | Base price, value units per token unit  |
//! | `Rate`            | `i128`    | Conversion multiplier refining the price|
//! | `EtherStorage`    | `Address` | Escrow receiving invested value         |
//! | `WithdrawAddress` | `Address` | Destination when no escrow is wired     |

use soroban_sdk::{contracttype, Address, Env};

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// All engine storage keys (all Instance).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Token,
    Asset,
    InitPrice,
    Rate,
    EtherStorage,
    WithdrawAddress,
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
        .expect("crowdsale not initialized")
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

pub fn get_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .expect("crowdsale not initialized")
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
        .expect("crowdsale not initialized")
}

pub fn set_init_price(env: &Env, price: i128) {
    env.storage().instance().set(&DataKey::InitPrice, &price);
    bump_instance(env);
}

pub fn get_init_price(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::InitPrice)
        .expect("crowdsale not initialized")
}

pub fn set_rate(env: &Env, rate: i128) {
    env.storage().instance().set(&DataKey::Rate, &rate);
    bump_instance(env);
}

pub fn get_rate(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Rate)
        .expect("crowdsale not initialized")
}

pub fn set_ether_storage(env: &Env, escrow: &Address) {
    env.storage().instance().set(&DataKey::EtherStorage, escrow);
    bump_instance(env);
}

/// The wired escrow, or `None` while running in direct-withdrawal mode.
pub fn get_ether_storage(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::EtherStorage)
}

pub fn set_withdraw_address(env: &Env, addr: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::WithdrawAddress, addr);
    bump_instance(env);
}

pub fn get_withdraw_address(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::WithdrawAddress)
        .expect("crowdsale not initialized")
}
