//! # Crowdvault Crowdsale Engine
//!
//! Converts incoming value into freshly minted tokens at a configurable
//! price/rate, and redeems tokens back into escrowed value on sell-back.
//!
//! | Concern        | Entry Point(s)                                        |
//! |----------------|-------------------------------------------------------|
//! | Bootstrap      | [`Crowdsale::init`]                                   |
//! | Conversion     | `invest`, `on_token_received` (sell-back hook)        |
//! | Administration | `set_rate`, `set_ether_storage`, `set_withdraw_address` |
//! | Queries        | `owner`, `token`, `asset`, `init_price`, `rate`, `ether_storage`, `withdraw_address`, `convert_value_to_tokens`, `convert_tokens_to_value` |
//!
//! ## Conversion arithmetic
//!
//! `rate` refines the base price as a multiplier; all division floors toward
//! zero so minted-token value never exceeds received value:
//!
//! ```text
//! tokens = value  * rate * 10^decimals / init_price          (invest)
//! value  = tokens * init_price / (rate * 10^decimals)        (sell-back)
//! ```
//!
//! ## Sell-back
//!
//! A holder transfers tokens to this engine on the token ledger; the ledger
//! invokes [`Crowdsale::on_token_received`], which pays the equivalent value
//! out of the escrow and answers [`ReceiverAction::Burn`] so the ledger
//! destroys the returned tokens inside the same atomic transfer. The hook
//! authenticates its originator: only the configured ledger, as the direct
//! invoker, can satisfy the auth check.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, token, Address, Env};

use crowdvault_escrow::EtherStorageClient;
use crowdvault_token::{ReceiverAction, TokenClient};

mod events;
mod storage;

#[cfg(test)]
mod test_sellback;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized          = 1,
    InsufficientBalance   = 2,
    InvalidAmount         = 4,
    NotConfigured         = 6,
    ExceedsAvailableFunds = 7,
    AlreadyInitialized    = 9,
}

#[contract]
pub struct Crowdsale;

#[contractimpl]
impl Crowdsale {
    /// Initialise the engine.
    ///
    /// `token` is immutable afterwards; price and rate stay owner-mutable for
    /// the life of the contract. With no escrow wired yet, invested value
    /// goes straight to `withdraw_address`, which defaults to the owner.
    pub fn init(
        env: Env,
        owner: Address,
        token: Address,
        asset: Address,
        init_price: i128,
        rate: i128,
    ) {
        owner.require_auth();
        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        if init_price <= 0 || rate <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        storage::set_owner(&env, &owner);
        storage::set_token(&env, &token);
        storage::set_asset(&env, &asset);
        storage::set_init_price(&env, init_price);
        storage::set_rate(&env, rate);
        storage::set_withdraw_address(&env, &owner);
    }

    // ─────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────

    /// Convert `value` of the funding asset into minted tokens.
    ///
    /// Mints `floor(value * rate * 10^decimals / init_price)` tokens to the
    /// investor, then forwards the full `value` to the escrow (or to the
    /// withdraw address while no escrow is wired). Requires this engine to be
    /// the ledger's token generator; any nested failure unwinds the whole
    /// investment.
    pub fn invest(env: Env, investor: Address, value: i128) {
        investor.require_auth();
        if value <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let ledger = TokenClient::new(&env, &storage::get_token(&env));
        if ledger.token_generator() != Some(env.current_contract_address()) {
            panic_with_error!(&env, Error::NotConfigured);
        }

        let tokens = Self::value_to_tokens(&env, &ledger, value);
        if tokens <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        ledger.generate_tokens(&env.current_contract_address(), &investor, &tokens);

        match storage::get_ether_storage(&env) {
            Some(escrow) => {
                EtherStorageClient::new(&env, &escrow).deposit(&investor, &value);
            }
            None => {
                let asset = token::Client::new(&env, &storage::get_asset(&env));
                asset.transfer(&investor, &storage::get_withdraw_address(&env), &value);
            }
        }

        events::invested(&env, &investor, value, tokens);
    }

    /// Receive hook: a holder sent tokens to this engine, redeem them.
    ///
    /// Pays `floor(amount * init_price / (rate * 10^decimals))` of escrowed
    /// value to the holder and answers `Burn` so the ledger destroys the
    /// returned tokens. Rejects originators other than the configured ledger,
    /// redemptions that floor to zero value, and runs only with an escrow
    /// wired — a failure here unwinds the holder's transfer as well.
    pub fn on_token_received(
        env: Env,
        ledger: Address,
        from: Address,
        amount: i128,
    ) -> ReceiverAction {
        ledger.require_auth();
        if ledger != storage::get_token(&env) {
            panic_with_error!(&env, Error::Unauthorized);
        }
        let escrow = match storage::get_ether_storage(&env) {
            Some(escrow) => escrow,
            None => panic_with_error!(&env, Error::NotConfigured),
        };

        let token_client = TokenClient::new(&env, &ledger);
        let value = Self::tokens_to_value(&env, &token_client, amount);
        if value <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        EtherStorageClient::new(&env, &escrow).withdraw_ether_to_user(
            &env.current_contract_address(),
            &from,
            &value,
        );
        events::sold_back(&env, &from, amount, value);
        ReceiverAction::Burn
    }

    // ─────────────────────────────────────────────────────────
    // Administration
    // ─────────────────────────────────────────────────────────

    /// Replace the base price; rejects non-positive prices.
    pub fn set_init_price(env: Env, caller: Address, price: i128) {
        Self::require_owner(&env, &caller);
        if price <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        storage::set_init_price(&env, price);
    }

    /// Replace the conversion rate; rejects non-positive rates.
    pub fn set_rate(env: Env, caller: Address, rate: i128) {
        Self::require_owner(&env, &caller);
        if rate <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        storage::set_rate(&env, rate);
        events::rate_changed(&env, rate);
    }

    /// Wire in (or replace) the escrow receiving invested value.
    pub fn set_ether_storage(env: Env, caller: Address, escrow: Address) {
        Self::require_owner(&env, &caller);
        storage::set_ether_storage(&env, &escrow);
    }

    /// Replace the direct-mode destination for invested value.
    pub fn set_withdraw_address(env: Env, caller: Address, addr: Address) {
        Self::require_owner(&env, &caller);
        storage::set_withdraw_address(&env, &addr);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }

    pub fn asset(env: Env) -> Address {
        storage::get_asset(&env)
    }

    pub fn init_price(env: Env) -> i128 {
        storage::get_init_price(&env)
    }

    pub fn rate(env: Env) -> i128 {
        storage::get_rate(&env)
    }

    pub fn ether_storage(env: Env) -> Option<Address> {
        storage::get_ether_storage(&env)
    }

    pub fn withdraw_address(env: Env) -> Address {
        storage::get_withdraw_address(&env)
    }

    /// Tokens minted for `value` at the current price and rate.
    pub fn convert_value_to_tokens(env: Env, value: i128) -> i128 {
        let ledger = TokenClient::new(&env, &storage::get_token(&env));
        Self::value_to_tokens(&env, &ledger, value)
    }

    /// Value paid out for `tokens` at the current price and rate.
    pub fn convert_tokens_to_value(env: Env, tokens: i128) -> i128 {
        let ledger = TokenClient::new(&env, &storage::get_token(&env));
        Self::tokens_to_value(&env, &ledger, tokens)
    }
}

impl Crowdsale {
    fn require_owner(env: &Env, caller: &Address) {
        caller.require_auth();
        if *caller != storage::get_owner(env) {
            panic_with_error!(env, Error::Unauthorized);
        }
    }

    fn value_to_tokens(env: &Env, ledger: &TokenClient, value: i128) -> i128 {
        let scale = 10i128.pow(ledger.decimals());
        value * storage::get_rate(env) * scale / storage::get_init_price(env)
    }

    fn tokens_to_value(env: &Env, ledger: &TokenClient, tokens: i128) -> i128 {
        let scale = 10i128.pow(ledger.decimals());
        tokens * storage::get_init_price(env) / (storage::get_rate(env) * scale)
    }
}
