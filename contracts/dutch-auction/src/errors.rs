use soroban_sdk::contracterror;

/// Error codes for the dutch-auction contract.
///
/// Every failure aborts the invocation with no state mutation; of these only
/// `InsufficientPayment` is worth retrying, and only against a freshly
/// recomputed price.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller is not the contract owner
    Unauthorized = 3,
    /// Creation parameters violate the price-floor invariant
    InvalidAuctionParameters = 4,
    /// No auction with the given id
    AuctionNotFound = 5,
    /// Auction already settled; terminal, do not retry
    AuctionStopped = 6,
    /// Auction ran past `ends_at` without a buyer
    AuctionExpired = 7,
    /// Payment below the current price
    InsufficientPayment = 8,
    /// Fee calculation overflow
    FeeOverflow = 9,
}
