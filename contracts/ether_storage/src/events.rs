//! Typed event payloads published by the escrow.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    pub from: Address,
    pub amount: i128,
    pub amount_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub to: Address,
    pub amount: i128,
    pub amount_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalReached {
    pub owner: Address,
    pub swept: i128,
}

pub fn deposited(env: &Env, from: &Address, amount: i128, amount_raised: i128) {
    env.events().publish(
        (symbol_short!("deposit"), from.clone()),
        Deposited {
            from: from.clone(),
            amount,
            amount_raised,
        },
    );
}

pub fn withdrawn(env: &Env, to: &Address, amount: i128, amount_raised: i128) {
    env.events().publish(
        (symbol_short!("withdraw"), to.clone()),
        Withdrawn {
            to: to.clone(),
            amount,
            amount_raised,
        },
    );
}

pub fn goal_reached(env: &Env, owner: &Address, swept: i128) {
    env.events().publish(
        (symbol_short!("goal"),),
        GoalReached {
            owner: owner.clone(),
            swept,
        },
    );
}
