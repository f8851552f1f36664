//! Typed event payloads published by the ledger.
//!
//! Topics follow the `(symbol, subject)` shape; payloads are
//! `#[contracttype]` structs so off-chain consumers can decode them without
//! positional guessing.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Minted {
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Burned {
    pub from: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transferred {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Approved {
    pub holder: Address,
    pub spender: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Locked {
    pub addr: Address,
    pub until: u64,
}

pub fn minted(env: &Env, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("mint"), to.clone()),
        Minted {
            to: to.clone(),
            amount,
        },
    );
}

pub fn burned(env: &Env, from: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("burn"), from.clone()),
        Burned {
            from: from.clone(),
            amount,
        },
    );
}

pub fn transferred(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone()),
        Transferred {
            from: from.clone(),
            to: to.clone(),
            amount,
        },
    );
}

pub fn approved(env: &Env, holder: &Address, spender: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("approve"), holder.clone()),
        Approved {
            holder: holder.clone(),
            spender: spender.clone(),
            amount,
        },
    );
}

pub fn locked(env: &Env, addr: &Address, until: u64) {
    env.events().publish(
        (symbol_short!("lock"), addr.clone()),
        Locked {
            addr: addr.clone(),
            until,
        },
    );
}

pub fn ownership_transferred(env: &Env, new_owner: &Address) {
    env.events()
        .publish((symbol_short!("owner"),), new_owner.clone());
}

pub fn generator_changed(env: &Env, generator: &Address) {
    env.events()
        .publish((symbol_short!("generator"),), generator.clone());
}
