pub mod withdraw_test;

use crate::{DutchAuction, DutchAuctionClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token, Address, Env, String,
};

pub fn setup_test() -> (
    Env,
    DutchAuctionClient<'static>,
    Address,
    Address,
    Address,
    token::TokenClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(DutchAuction, ());
    let client = DutchAuctionClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let buyer = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&buyer, &10_000_000);

    client.initialize(&admin, &token_address);

    (env, client, admin, seller, buyer, token_client)
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

/// The listing used by most tests: price 100_000 dropping 3 units/second
/// over 60 seconds.
pub fn create_default_auction(env: &Env, client: &DutchAuctionClient, seller: &Address) -> u64 {
    client.create_auction(
        seller,
        &100_000,
        &3,
        &String::from_str(env, "my leg"),
        &60,
    )
}
