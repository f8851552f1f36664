//! Typed event payloads published by the crowdsale engine.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invested {
    pub investor: Address,
    pub value: i128,
    pub tokens: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SoldBack {
    pub holder: Address,
    pub tokens: i128,
    pub value: i128,
}

pub fn invested(env: &Env, investor: &Address, value: i128, tokens: i128) {
    env.events().publish(
        (symbol_short!("invest"), investor.clone()),
        Invested {
            investor: investor.clone(),
            value,
            tokens,
        },
    );
}

pub fn sold_back(env: &Env, holder: &Address, tokens: i128, value: i128) {
    env.events().publish(
        (symbol_short!("sellback"), holder.clone()),
        SoldBack {
            holder: holder.clone(),
            tokens,
            value,
        },
    );
}

pub fn rate_changed(env: &Env, rate: i128) {
    env.events().publish((symbol_short!("rate"),), rate);
}
