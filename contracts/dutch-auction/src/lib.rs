#![no_std]

mod errors;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

use crate::errors::Error;
use crate::events::*;
use crate::storage::*;
use crate::types::*;

// ============================================================================
// Constants
// ============================================================================

/// Number of ledgers in a day (assuming ~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Fee retained by the owner on every settlement, in percent
const FEE_PERCENT: i128 = 10;

/// Substituted when a listing is created with zero duration (2 days)
const DEFAULT_DURATION: u64 = 2 * 24 * 60 * 60;

// ============================================================================
// Contract
// ============================================================================

/// Single-seller Dutch auction engine.
///
/// A seller lists an item at a starting price that decays linearly at a
/// fixed per-second discount rate. The first buyer to pay the then-current
/// price wins and the auction settles immediately: the seller is paid the
/// final price minus a 10% fee, any overpayment is refunded to the buyer,
/// and the fee accrues to a balance only the contract owner can withdraw.
///
/// Auctions are validated at creation so the price stays strictly positive
/// for the whole listing window; a purchase after `ends_at` fails rather
/// than settling at a degenerate price.
#[contract]
pub struct DutchAuction;

#[contractimpl]
impl DutchAuction {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the auction engine.
    ///
    /// # Arguments
    /// * `admin` - Owner address, the only identity allowed to withdraw fees
    /// * `token` - Payment token shared by all auctions
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(e: &Env, admin: Address, token: Address) -> Result<(), Error> {
        admin.require_auth();

        if has_admin(e) {
            return Err(Error::AlreadyInitialized);
        }

        set_admin(e, &admin);
        set_token(e, &token);
        set_accumulated_fees(e, 0);
        Self::extend_instance_ttl(e);

        InitializedEventData { admin, token }.publish(e);

        Ok(())
    }

    // ========================================================================
    // AUCTION REGISTRY
    // ========================================================================

    /// List a new item for sale.
    ///
    /// The price starts at `starting_price` and drops by `discount_rate`
    /// token units every second until `duration_seconds` have elapsed. A
    /// zero duration is substituted by the two-day default rather than
    /// rejected.
    ///
    /// # Errors
    /// * `Error::NotInitialized` - If the contract has not been initialized
    /// * `Error::InvalidAuctionParameters` - If `starting_price` or
    ///   `discount_rate` is non-positive, or the price would hit zero before
    ///   the auction ends
    pub fn create_auction(
        e: &Env,
        seller: Address,
        starting_price: i128,
        discount_rate: i128,
        item: String,
        duration_seconds: u64,
    ) -> Result<u64, Error> {
        seller.require_auth();

        if !has_admin(e) {
            return Err(Error::NotInitialized);
        }

        if starting_price <= 0 || discount_rate <= 0 {
            return Err(Error::InvalidAuctionParameters);
        }

        let duration = if duration_seconds == 0 {
            DEFAULT_DURATION
        } else {
            duration_seconds
        };

        // Price must stay strictly positive until `ends_at`. A product too
        // large for i128 exceeds any starting price, so overflow is a
        // rejection, not a trap.
        let total_discount = discount_rate
            .checked_mul(duration as i128)
            .ok_or(Error::InvalidAuctionParameters)?;
        if starting_price <= total_discount {
            return Err(Error::InvalidAuctionParameters);
        }

        let start_at = e.ledger().timestamp();
        let ends_at = start_at
            .checked_add(duration)
            .ok_or(Error::InvalidAuctionParameters)?;
        let auction_id = next_auction_id(e);

        let auction = Auction {
            id: auction_id,
            seller: seller.clone(),
            item,
            starting_price,
            discount_rate,
            start_at,
            ends_at,
            status: AuctionStatus::Open,
            final_price: None,
        };

        save_auction(e, &auction);
        Self::extend_instance_ttl(e);

        AuctionCreatedEventData {
            auction_id,
            seller,
            starting_price,
            ends_at: auction.ends_at,
        }
        .publish(e);

        Ok(auction_id)
    }

    /// Get an auction by id
    pub fn get_auction(e: &Env, auction_id: u64) -> Result<Auction, Error> {
        get_auction(e, auction_id).ok_or(Error::AuctionNotFound)
    }

    // ========================================================================
    // PRICING & SETTLEMENT
    // ========================================================================

    /// Current price of an open auction at the current ledger time.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - If no auction has the given id
    /// * `Error::AuctionStopped` - If the auction already settled
    /// * `Error::AuctionExpired` - If the listing window has passed
    pub fn get_price(e: &Env, auction_id: u64) -> Result<i128, Error> {
        let auction = get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;
        current_price(&auction, e.ledger().timestamp())
    }

    /// Buy an open auction at its current price.
    ///
    /// `paid_value` is pulled from the buyer in full; anything above the
    /// live price is refunded in the same invocation. Overpaying is the
    /// normal case since the price keeps dropping between quote and
    /// purchase.
    ///
    /// On success the auction settles irreversibly: the seller receives the
    /// final price minus the fee, the fee accrues to the owner's balance,
    /// and the auction can never be bought again.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - If no auction has the given id
    /// * `Error::AuctionStopped` - If the auction already settled
    /// * `Error::AuctionExpired` - If the listing window has passed
    /// * `Error::InsufficientPayment` - If `paid_value` is below the current price
    /// * `Error::FeeOverflow` - If the fee on the final price overflows
    pub fn buy(
        e: &Env,
        auction_id: u64,
        buyer: Address,
        paid_value: i128,
    ) -> Result<SettlementReceipt, Error> {
        buyer.require_auth();

        let mut auction = get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;

        let final_price = current_price(&auction, e.ledger().timestamp())?;

        if paid_value < final_price {
            return Err(Error::InsufficientPayment);
        }

        // Computed before any transfer so an overflow aborts cleanly.
        let fee = final_price
            .checked_mul(FEE_PERCENT)
            .ok_or(Error::FeeOverflow)?
            / 100;

        let token_address = get_token(e).ok_or(Error::NotInitialized)?;
        let token_client = token::TokenClient::new(e, &token_address);
        let contract_address = e.current_contract_address();

        token_client.transfer(&buyer, &contract_address, &paid_value);
        token_client.transfer(&contract_address, &auction.seller, &(final_price - fee));

        let refund = paid_value - final_price;
        if refund > 0 {
            token_client.transfer(&contract_address, &buyer, &refund);
        }

        auction.status = AuctionStatus::Settled;
        auction.final_price = Some(final_price);
        save_auction(e, &auction);

        set_accumulated_fees(e, get_accumulated_fees(e) + fee);
        Self::extend_instance_ttl(e);

        AuctionEndedEventData {
            auction_id,
            final_price,
            buyer: buyer.clone(),
        }
        .publish(e);

        Ok(SettlementReceipt {
            id: auction_id,
            buyer,
            final_price,
            fee,
        })
    }

    // ========================================================================
    // FEE WITHDRAWAL
    // ========================================================================

    /// Current fee balance held for the owner
    pub fn accumulated_fees(e: &Env) -> i128 {
        get_accumulated_fees(e)
    }

    /// Withdraw the entire accumulated fee balance to `recipient`.
    ///
    /// Owner only. A zero balance is not an error; the call succeeds and
    /// returns 0.
    ///
    /// # Errors
    /// * `Error::NotInitialized` - If the contract has not been initialized
    /// * `Error::Unauthorized` - If `caller` is not the owner
    pub fn withdraw_to(e: &Env, caller: Address, recipient: Address) -> Result<i128, Error> {
        caller.require_auth();

        let admin = get_admin(e).ok_or(Error::NotInitialized)?;
        if caller != admin {
            return Err(Error::Unauthorized);
        }

        let amount = get_accumulated_fees(e);
        if amount > 0 {
            let token_address = get_token(e).ok_or(Error::NotInitialized)?;
            let token_client = token::TokenClient::new(e, &token_address);
            token_client.transfer(&e.current_contract_address(), &recipient, &amount);
        }
        set_accumulated_fees(e, 0);
        Self::extend_instance_ttl(e);

        FeesWithdrawnEventData {
            recipient,
            amount,
        }
        .publish(e);

        Ok(amount)
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}

/// Price of `auction` at ledger time `now`.
///
/// Linear decay, recomputed at every call and never cached:
/// `starting_price - discount_rate * elapsed`. Monotonically non-increasing
/// in `now`. The creation-time floor check guarantees the result is
/// strictly positive anywhere inside the listing window, so a non-positive
/// price is only reachable past `ends_at` and reports as expiry.
fn current_price(auction: &Auction, now: u64) -> Result<i128, Error> {
    if auction.status == AuctionStatus::Settled {
        return Err(Error::AuctionStopped);
    }
    if now > auction.ends_at {
        return Err(Error::AuctionExpired);
    }

    let elapsed = now.saturating_sub(auction.start_at);
    let price = auction.starting_price - auction.discount_rate * elapsed as i128;
    if price <= 0 {
        return Err(Error::AuctionExpired);
    }
    Ok(price)
}
