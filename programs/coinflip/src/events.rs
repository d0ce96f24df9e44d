use anchor_lang::prelude::*;

#[event]
pub struct TreasuryInitialized {
    pub owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct FundsAdded {
    pub owner: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
}

#[event]
pub struct FundsWithdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
}

/// One record per settled wager. Sides are booleans; `true` is heads.
#[event]
pub struct GameResult {
    pub player: Pubkey,
    pub bet_amount: u64,
    pub player_choice: bool,
    pub actual_result: bool,
    pub won: bool,
    pub payout: u64,
}
