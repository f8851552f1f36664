extern crate std;

use soroban_sdk::{contract, contractimpl, testutils::Address as _, Address, Env, String};

use crate::{invariants, Error, ReceiverAction, Token, TokenClient};

/// Receiver that accepts every incoming transfer.
mod accepting {
    use super::*;

    #[contract]
    pub struct AcceptingReceiver;

    #[contractimpl]
    impl AcceptingReceiver {
        pub fn on_token_received(
            _env: Env,
            _ledger: Address,
            _from: Address,
            _amount: i128,
        ) -> ReceiverAction {
            ReceiverAction::Keep
        }
    }
}
use accepting::AcceptingReceiver;

/// Receiver that declines every incoming transfer.
mod rejecting {
    use super::*;

    #[contract]
    pub struct RejectingReceiver;

    #[contractimpl]
    impl RejectingReceiver {
        pub fn on_token_received(
            _env: Env,
            _ledger: Address,
            _from: Address,
            _amount: i128,
        ) -> ReceiverAction {
            panic!("tokens not accepted here");
        }
    }
}
use rejecting::RejectingReceiver;

/// Receiver that asks the ledger to burn whatever it receives, the way the
/// crowdsale engine answers on a sell-back.
mod burning {
    use super::*;

    #[contract]
    pub struct BurningReceiver;

    #[contractimpl]
    impl BurningReceiver {
        pub fn on_token_received(
            _env: Env,
            _ledger: Address,
            _from: Address,
            _amount: i128,
        ) -> ReceiverAction {
            ReceiverAction::Burn
        }
    }
}
use burning::BurningReceiver;

fn setup() -> (Env, TokenClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(Token, ());
    let client = TokenClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    client.init(
        &owner,
        &String::from_str(&env, "Crowdvault"),
        &String::from_str(&env, "CVT"),
        &0,
        &0,
    );
    (env, client, owner)
}

#[test]
fn test_transfer_to_accepting_receiver_credits_it() {
    let (env, token, owner) = setup();
    let holder = Address::generate(&env);
    let receiver = env.register(AcceptingReceiver, ());

    token.register_receiver(&owner, &receiver);
    token.generate_tokens(&owner, &holder, &300);
    token.transfer(&holder, &receiver, &100);

    assert_eq!(token.balance_of(&holder), 200);
    assert_eq!(token.balance_of(&receiver), 100);
    invariants::assert_all(&token, &[holder, receiver]);
}

#[test]
fn test_transfer_to_rejecting_receiver_unwinds() {
    let (env, token, owner) = setup();
    let holder = Address::generate(&env);
    let receiver = env.register(RejectingReceiver, ());

    token.register_receiver(&owner, &receiver);
    token.generate_tokens(&owner, &holder, &300);

    let res = token.try_transfer(&holder, &receiver, &100);
    assert_eq!(res, Err(Ok(Error::ReceiverRejected.into())));

    // The whole transfer rolled back.
    assert_eq!(token.balance_of(&holder), 300);
    assert_eq!(token.balance_of(&receiver), 0);
    invariants::assert_all(&token, &[holder, receiver]);
}

#[test]
fn test_transfer_from_to_rejecting_receiver_unwinds() {
    let (env, token, owner) = setup();
    let holder = Address::generate(&env);
    let spender = Address::generate(&env);
    let receiver = env.register(RejectingReceiver, ());

    token.register_receiver(&owner, &receiver);
    token.generate_tokens(&owner, &holder, &300);
    token.approve(&holder, &spender, &300);

    let res = token.try_transfer_from(&spender, &holder, &receiver, &100);
    assert_eq!(res, Err(Ok(Error::ReceiverRejected.into())));
    assert_eq!(token.balance_of(&holder), 300);
    assert_eq!(token.allowance(&holder, &spender), 300);
}

#[test]
fn test_unregistered_contract_is_a_plain_recipient() {
    let (env, token, owner) = setup();
    let holder = Address::generate(&env);
    // Deployed but never registered: no capability, no hook.
    let receiver = env.register(RejectingReceiver, ());

    token.generate_tokens(&owner, &holder, &300);
    token.transfer(&holder, &receiver, &100);

    assert_eq!(token.balance_of(&receiver), 100);
}

#[test]
fn test_burn_answer_from_generator_burns_in_place() {
    let (env, token, owner) = setup();
    let holder = Address::generate(&env);
    let engine = env.register(BurningReceiver, ());

    token.register_receiver(&owner, &engine);
    token.set_token_generator(&owner, &engine);
    token.generate_tokens(&owner, &holder, &300);

    token.transfer(&holder, &engine, &120);

    // Tokens left the holder and were destroyed, not parked on the engine.
    assert_eq!(token.balance_of(&holder), 180);
    assert_eq!(token.balance_of(&engine), 0);
    assert_eq!(token.total_supply(), 180);
    invariants::assert_all(&token, &[holder, engine]);
}

#[test]
fn test_burn_answer_from_non_generator_is_rejected() {
    let (env, token, owner) = setup();
    let holder = Address::generate(&env);
    let impostor = env.register(BurningReceiver, ());

    token.register_receiver(&owner, &impostor);
    token.generate_tokens(&owner, &holder, &300);

    let res = token.try_transfer(&holder, &impostor, &120);
    assert_eq!(res, Err(Ok(Error::Unauthorized.into())));
    assert_eq!(token.balance_of(&holder), 300);
    assert_eq!(token.total_supply(), 300);
}

#[test]
fn test_register_receiver_owner_only() {
    let (env, token, _owner) = setup();
    let outsider = Address::generate(&env);
    let receiver = env.register(AcceptingReceiver, ());
    let res = token.try_register_receiver(&outsider, &receiver);
    assert_eq!(res, Err(Ok(Error::Unauthorized.into())));
    assert!(!token.is_receiver(&receiver));
}
