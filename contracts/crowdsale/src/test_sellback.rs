extern crate std;

use soroban_sdk::{testutils::Address as _, Address};

use crowdvault_token::Error as TokenError;

use crate::test::setup;
use crate::Error;

#[test]
fn test_sellback_round_trip() {
    let s = setup(5, 200, 2);
    let investor = Address::generate(&s.env);
    s.asset_admin.mint(&investor, &1_000);

    s.sale.invest(&investor, &1_000);
    assert_eq!(s.token.balance_of(&investor), 1_000_000);

    // Returning every token pays the full invested value back out of escrow
    // and burns the tokens.
    s.token.transfer(&investor, &s.sale.address, &1_000_000);

    assert_eq!(s.token.balance_of(&investor), 0);
    assert_eq!(s.token.balance_of(&s.sale.address), 0);
    assert_eq!(s.token.total_supply(), 0);
    assert_eq!(s.asset.balance(&investor), 1_000);
    assert_eq!(s.escrow.amount_raised(), 0);
}

#[test]
fn test_partial_sellback() {
    let s = setup(5, 200, 2);
    let investor = Address::generate(&s.env);
    s.asset_admin.mint(&investor, &1_000);

    s.sale.invest(&investor, &1_000);
    s.token.transfer(&investor, &s.sale.address, &100_000);

    assert_eq!(s.token.balance_of(&investor), 900_000);
    assert_eq!(s.token.total_supply(), 900_000);
    assert_eq!(s.asset.balance(&investor), 100);
    assert_eq!(s.escrow.amount_raised(), 900);
}

#[test]
fn test_sellback_rejected_when_value_floors_to_zero() {
    let s = setup(5, 200, 2);
    let investor = Address::generate(&s.env);
    s.asset_admin.mint(&investor, &1_000);

    s.sale.invest(&investor, &1_000);

    // One token unit is worth less than one value unit here.
    let res = s.token.try_transfer(&investor, &s.sale.address, &1);
    assert_eq!(res, Err(Ok(TokenError::ReceiverRejected.into())));

    assert_eq!(s.token.balance_of(&investor), 1_000_000);
    assert_eq!(s.escrow.amount_raised(), 1_000);
}

#[test]
fn test_sellback_rejected_without_escrow() {
    let s = setup(5, 200, 2);
    let holder = Address::generate(&s.env);

    // Fresh engine with no escrow wired, but registered as a receiver.
    let sale_id = s.env.register(crate::Crowdsale, ());
    let sale = crate::CrowdsaleClient::new(&s.env, &sale_id);
    sale.init(&s.owner, &s.token.address, &s.asset.address, &200, &2);
    s.token.register_receiver(&s.owner, &sale_id);

    s.token.generate_tokens(&s.owner, &holder, &1_000_000);

    let res = s.token.try_transfer(&holder, &sale_id, &1_000_000);
    assert_eq!(res, Err(Ok(TokenError::ReceiverRejected.into())));
    assert_eq!(s.token.balance_of(&holder), 1_000_000);
}

#[test]
fn test_sellback_bounded_by_escrowed_funds() {
    let s = setup(5, 200, 2);
    let investor = Address::generate(&s.env);
    s.asset_admin.mint(&investor, &1_000);

    s.sale.invest(&investor, &1_000);
    // Seed tokens beyond what the escrow can cover.
    s.token.generate_tokens(&s.owner, &investor, &10_000_000);

    let res = s
        .token
        .try_transfer(&investor, &s.sale.address, &11_000_000);
    assert_eq!(res, Err(Ok(TokenError::ReceiverRejected.into())));

    // The failed redemption left every component untouched.
    assert_eq!(s.token.balance_of(&investor), 11_000_000);
    assert_eq!(s.token.total_supply(), 11_000_000);
    assert_eq!(s.escrow.amount_raised(), 1_000);
    assert_eq!(s.asset.balance(&investor), 0);
}

#[test]
fn test_forged_hook_originator_rejected() {
    let s = setup(5, 200, 2);
    let holder = Address::generate(&s.env);
    let impostor = Address::generate(&s.env);

    let res = s.sale.try_on_token_received(&impostor, &holder, &1_000_000);
    assert_eq!(res, Err(Ok(Error::Unauthorized.into())));
    assert_eq!(s.escrow.amount_raised(), 0);
}
