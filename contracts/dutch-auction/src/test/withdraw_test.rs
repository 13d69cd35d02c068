use crate::test::{advance_ledger, create_default_auction, setup_test};
use crate::Error;

use soroban_sdk::{testutils::Address as _, Address};

#[test]
fn test_withdraw_requires_owner() {
    let (env, client, _, seller, buyer, _) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller);

    advance_ledger(&env, 10);
    client.buy(&auction_id, &buyer, &99_970);

    let result = client.try_withdraw_to(&seller, &seller);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
    assert_eq!(client.accumulated_fees(), 9_997);
}

#[test]
fn test_withdraw_moves_fees() {
    let (env, client, admin, seller, buyer, token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller);

    advance_ledger(&env, 10);
    client.buy(&auction_id, &buyer, &99_970);

    let recipient = Address::generate(&env);
    let amount = client.withdraw_to(&admin, &recipient);

    assert_eq!(amount, 9_997);
    assert_eq!(token.balance(&recipient), 9_997);
    assert_eq!(client.accumulated_fees(), 0);
}

#[test]
fn test_withdraw_zero_balance_succeeds() {
    let (env, client, admin, _, _, token) = setup_test();

    let recipient = Address::generate(&env);
    let amount = client.withdraw_to(&admin, &recipient);

    assert_eq!(amount, 0);
    assert_eq!(token.balance(&recipient), 0);
}

#[test]
fn test_fees_accumulate_across_settlements() {
    let (env, client, admin, seller, buyer, token) = setup_test();

    let first = create_default_auction(&env, &client, &seller);
    let second = create_default_auction(&env, &client, &seller);

    advance_ledger(&env, 10);
    client.buy(&first, &buyer, &99_970);
    client.buy(&second, &buyer, &99_970);

    assert_eq!(client.accumulated_fees(), 19_994);

    let recipient = Address::generate(&env);
    assert_eq!(client.withdraw_to(&admin, &recipient), 19_994);
    assert_eq!(token.balance(&recipient), 19_994);
    assert_eq!(client.accumulated_fees(), 0);
}
