use soroban_sdk::{contracttype, Address, String};

/// Lifecycle of a single listing. An auction is `Open` from creation until
/// the first successful purchase and `Settled` forever after; expiry is
/// implicit in `ends_at` and never recorded as a separate state.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    Open = 0,
    Settled = 1,
}

/// One Dutch auction listing. Every field except `status` and `final_price`
/// is fixed at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    /// Sequential 0-based identifier, never reused.
    pub id: u64,
    /// Party entitled to the proceeds.
    pub seller: Address,
    /// Opaque descriptive label for what is being sold.
    pub item: String,
    /// Price at `start_at`, in the smallest token unit.
    pub starting_price: i128,
    /// Token units subtracted from the price per elapsed second.
    pub discount_rate: i128,
    /// Ledger timestamp of creation.
    pub start_at: u64,
    /// `start_at` plus the effective duration; purchases past this fail.
    pub ends_at: u64,
    pub status: AuctionStatus,
    /// Price actually paid; `None` until settlement, then immutable.
    pub final_price: Option<i128>,
}

/// Returned by `buy` so callers can record the exact split.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettlementReceipt {
    pub id: u64,
    pub buyer: Address,
    pub final_price: i128,
    pub fee: i128,
}

/// Storage keys for the dutch-auction contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Owner address, sole identity allowed to withdraw fees
    Admin,
    /// Payment token shared by all auctions
    Token,
    /// Next auction id to assign
    AuctionCounter,
    /// Running fee balance credited on every settlement
    AccumulatedFees,
    /// Auction data by id
    Auction(u64),
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
