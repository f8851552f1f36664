//! # Crowdvault Escrow (EtherStorage)
//!
//! Custodies the funding asset collected by the crowdsale and tracks progress
//! toward an investment goal over a bounded sample of recent deposits. Once
//! the sampled running total reaches the goal, the entire held amount is
//! swept to the owner within the same deposit invocation.
//!
//! | Concern        | Entry Point(s)                                        |
//! |----------------|-------------------------------------------------------|
//! | Bootstrap      | [`EtherStorage::init`]                                |
//! | Custody        | `deposit`, `withdraw_ether_to_user`, `withdraw_ether_to_owner` |
//! | Administration | `set_crowdsale`, `set_investment_goal`                |
//! | Queries        | `amount_raised`, `investment_goal`, `investment_sample`, `amount_lucky_investments`, `investments`, `owner`, `crowdsale`, `asset` |
//!
//! Deposits are open to anyone; withdrawals are exclusive to the configured
//! crowdsale and never exceed `amount_raised`. If the goal is never reached,
//! funds leave custody only through the two explicit withdrawal operations.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, token, Address, Env, Vec};

mod events;
mod storage;


#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized          = 1,
    InvalidAmount         = 4,
    ExceedsAvailableFunds = 7,
    AlreadyInitialized    = 9,
}

#[contract]
pub struct EtherStorage;

#[contractimpl]
impl EtherStorage {
    /// Initialise the escrow.
    ///
    /// - `crowdsale` is the only identity allowed to withdraw.
    /// - `asset` is the funding asset contract held in custody.
    /// - `investment_goal` of 0 disables the goal sweep; negative goals and a
    ///   zero `investment_sample` are rejected.
    /// - `amount_lucky_investments` is recorded for the sampling heuristic;
    ///   the baseline sweep rule is the cumulative sum of the sample window.
    pub fn init(
        env: Env,
        owner: Address,
        crowdsale: Address,
        asset: Address,
        investment_goal: i128,
        investment_sample: u32,
        amount_lucky_investments: u32,
    ) {
        owner.require_auth();
        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        if investment_goal < 0 || investment_sample == 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        storage::set_owner(&env, &owner);
        storage::set_crowdsale(&env, &crowdsale);
        storage::set_asset(&env, &asset);
        storage::set_goal(&env, investment_goal);
        storage::set_sample(&env, investment_sample);
        storage::set_lucky(&env, amount_lucky_investments);
        storage::set_amount_raised(&env, 0);
    }

    // ─────────────────────────────────────────────────────────
    // Custody
    // ─────────────────────────────────────────────────────────

    /// Take `amount` of the funding asset from `from` into custody.
    ///
    /// Open to anyone. Records the deposit in the bounded sample window,
    /// bumps `amount_raised`, then evaluates the goal rule: when the window's
    /// cumulative sum reaches the goal, the entire held amount is transferred
    /// to the owner and `amount_raised` resets to zero. The window itself is
    /// kept. Deposit bookkeeping and sweep commit together or not at all.
    pub fn deposit(env: Env, from: Address, amount: i128) {
        from.require_auth();
        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let asset = token::Client::new(&env, &storage::get_asset(&env));
        asset.transfer(&from, &env.current_contract_address(), &amount);

        let mut investments = storage::get_investments(&env);
        investments.push_back(amount);
        let sample = storage::get_sample(&env);
        while investments.len() > sample {
            let _ = investments.pop_front();
        }
        storage::set_investments(&env, &investments);

        let raised = storage::get_amount_raised(&env) + amount;
        storage::set_amount_raised(&env, raised);
        events::deposited(&env, &from, amount, raised);

        if Self::goal_reached(&env, &investments) {
            let owner = storage::get_owner(&env);
            asset.transfer(&env.current_contract_address(), &owner, &raised);
            storage::set_amount_raised(&env, 0);
            events::goal_reached(&env, &owner, raised);
        }
    }

    /// Pay `amount` of custody funds out to `to`.
    ///
    /// Crowdsale-only; used for sell-back redemptions.
    pub fn withdraw_ether_to_user(env: Env, caller: Address, to: Address, amount: i128) {
        Self::require_crowdsale(&env, &caller);
        Self::pay_out(&env, &to, amount);
    }

    /// Pay `amount` of custody funds out to the configured owner.
    ///
    /// Crowdsale-only; the destination is fixed, not caller-chosen.
    pub fn withdraw_ether_to_owner(env: Env, caller: Address, amount: i128) {
        Self::require_crowdsale(&env, &caller);
        let owner = storage::get_owner(&env);
        Self::pay_out(&env, &owner, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Administration
    // ─────────────────────────────────────────────────────────

    /// Replace the crowdsale identity.
    pub fn set_crowdsale(env: Env, caller: Address, crowdsale: Address) {
        Self::require_owner(&env, &caller);
        storage::set_crowdsale(&env, &crowdsale);
    }

    /// Replace the investment goal; rejects non-positive goals.
    pub fn set_investment_goal(env: Env, caller: Address, goal: i128) {
        Self::require_owner(&env, &caller);
        if goal <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        storage::set_goal(&env, goal);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn amount_raised(env: Env) -> i128 {
        storage::get_amount_raised(&env)
    }

    pub fn investment_goal(env: Env) -> i128 {
        storage::get_goal(&env)
    }

    pub fn investment_sample(env: Env) -> u32 {
        storage::get_sample(&env)
    }

    pub fn amount_lucky_investments(env: Env) -> u32 {
        storage::get_lucky(&env)
    }

    /// The bounded window of recent deposit amounts, oldest first.
    pub fn investments(env: Env) -> Vec<i128> {
        storage::get_investments(&env)
    }

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    pub fn crowdsale(env: Env) -> Address {
        storage::get_crowdsale(&env)
    }

    pub fn asset(env: Env) -> Address {
        storage::get_asset(&env)
    }
}

impl EtherStorage {
    fn require_owner(env: &Env, caller: &Address) {
        caller.require_auth();
        if *caller != storage::get_owner(env) {
            panic_with_error!(env, Error::Unauthorized);
        }
    }

    fn require_crowdsale(env: &Env, caller: &Address) {
        caller.require_auth();
        if *caller != storage::get_crowdsale(env) {
            panic_with_error!(env, Error::Unauthorized);
        }
    }

    /// Baseline goal rule: cumulative sum of the sample window against the
    /// goal. A goal of zero disables the sweep entirely.
    fn goal_reached(env: &Env, investments: &Vec<i128>) -> bool {
        let goal = storage::get_goal(env);
        if goal == 0 {
            return false;
        }
        let mut sum: i128 = 0;
        for investment in investments.iter() {
            sum += investment;
        }
        sum >= goal
    }

    /// Bound-checked payout shared by both withdrawal entry points.
    fn pay_out(env: &Env, to: &Address, amount: i128) {
        if amount <= 0 {
            panic_with_error!(env, Error::InvalidAmount);
        }
        let raised = storage::get_amount_raised(env);
        if amount > raised {
            panic_with_error!(env, Error::ExceedsAvailableFunds);
        }
        storage::set_amount_raised(env, raised - amount);
        let asset = token::Client::new(env, &storage::get_asset(env));
        asset.transfer(&env.current_contract_address(), to, &amount);
        events::withdrawn(env, to, amount, raised - amount);
    }
}
