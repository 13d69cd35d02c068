use soroban_sdk::{Address, Env};

use crate::types::{Auction, DataKey, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD};

// ============================================================================
// ADMIN / TOKEN
// ============================================================================

pub fn has_admin(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_token(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Token)
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
}

// ============================================================================
// AUCTION REGISTRY
// ============================================================================

/// Assign the next sequential auction id. Ids are 0-based and only consumed
/// here, after all creation checks have passed.
pub fn next_auction_id(e: &Env) -> u64 {
    let id: u64 = e
        .storage()
        .instance()
        .get(&DataKey::AuctionCounter)
        .unwrap_or(0);
    e.storage()
        .instance()
        .set(&DataKey::AuctionCounter, &(id + 1));
    id
}

pub fn get_auction(e: &Env, auction_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(auction_id);
    let auction = e.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn save_auction(e: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.id);
    e.storage().persistent().set(&key, auction);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// ACCUMULATED FEES
// ============================================================================

pub fn get_accumulated_fees(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::AccumulatedFees)
        .unwrap_or(0)
}

pub fn set_accumulated_fees(e: &Env, amount: i128) {
    e.storage().instance().set(&DataKey::AccumulatedFees, &amount);
}
