use soroban_sdk::{contractevent, Address};

/// Event emitted when the contract is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub token: Address,
}

/// Event emitted when a new auction is listed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub auction_id: u64,
    pub seller: Address,
    pub starting_price: i128,
    pub ends_at: u64,
}

/// Event emitted when an auction settles to a buyer
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEventData {
    #[topic]
    pub auction_id: u64,
    pub final_price: i128,
    pub buyer: Address,
}

/// Event emitted when the owner withdraws accumulated fees
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawnEventData {
    #[topic]
    pub recipient: Address,
    pub amount: i128,
}
