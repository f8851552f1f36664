extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    Address, Env, String,
};

use crate::{invariants, Error, Token, TokenClient};

const LOCK_PERIOD: u64 = 86_400;

fn setup() -> (Env, TokenClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|l| l.timestamp = 1_000_000);
    let contract_id = env.register(Token, ());
    let client = TokenClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    client.init(
        &owner,
        &String::from_str(&env, "Crowdvault"),
        &String::from_str(&env, "CVT"),
        &0,
        &LOCK_PERIOD,
    );
    (env, client, owner)
}

#[test]
fn test_lock_transfer_stamps_expiry() {
    let (env, token, owner) = setup();
    let holder = Address::generate(&env);

    token.lock_transfer(&owner, &holder);

    assert_eq!(
        token.locked_until(&holder),
        env.ledger().timestamp() + LOCK_PERIOD
    );
}

#[test]
fn test_locked_sender_cannot_transfer_until_expiry() {
    let (env, token, owner) = setup();
    let holder = Address::generate(&env);
    let to = Address::generate(&env);

    token.generate_tokens(&owner, &holder, &500);
    let locked_at = env.ledger().timestamp();
    token.lock_transfer(&owner, &holder);

    // Before expiry.
    let res = token.try_transfer(&holder, &to, &100);
    assert_eq!(res, Err(Ok(Error::TransferLocked.into())));
    assert_eq!(token.balance_of(&holder), 500);

    // One second before expiry.
    env.ledger().with_mut(|l| l.timestamp = locked_at + LOCK_PERIOD - 1);
    let res = token.try_transfer(&holder, &to, &100);
    assert_eq!(res, Err(Ok(Error::TransferLocked.into())));

    // At expiry the same transfer succeeds.
    env.ledger().with_mut(|l| l.timestamp = locked_at + LOCK_PERIOD);
    token.transfer(&holder, &to, &100);
    assert_eq!(token.balance_of(&holder), 400);
    assert_eq!(token.balance_of(&to), 100);
    invariants::assert_all(&token, &[holder, to]);
}

#[test]
fn test_lock_does_not_block_incoming_transfers() {
    let (env, token, owner) = setup();
    let locked = Address::generate(&env);
    let sender = Address::generate(&env);

    token.generate_tokens(&owner, &sender, &200);
    token.lock_transfer(&owner, &locked);

    token.transfer(&sender, &locked, &150);
    assert_eq!(token.balance_of(&locked), 150);
}

#[test]
fn test_lock_does_not_block_delegated_spend_by_others() {
    let (env, token, owner) = setup();
    let holder = Address::generate(&env);
    let spender = Address::generate(&env);

    token.generate_tokens(&owner, &holder, &200);
    token.approve(&holder, &spender, &200);
    token.lock_transfer(&owner, &holder);

    // The lock gates the debited address, regardless of who triggers the move.
    let res = token.try_transfer_from(&spender, &holder, &spender, &50);
    assert_eq!(res, Err(Ok(Error::TransferLocked.into())));
}

#[test]
fn test_lock_transfer_owner_only() {
    let (env, token, _owner) = setup();
    let outsider = Address::generate(&env);
    let res = token.try_lock_transfer(&outsider, &outsider);
    assert_eq!(res, Err(Ok(Error::Unauthorized.into())));
}
