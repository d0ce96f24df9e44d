use anchor_lang::prelude::*;

#[error_code]
pub enum CoinFlipError {
    #[msg("Bet amount must be greater than zero.")]
    ZeroBet,
    #[msg("Treasury cannot cover the payout for this bet.")]
    InsufficientTreasury,
    #[msg("Only the treasury owner can perform this action.")]
    Unauthorized,
    #[msg("Withdrawal amount exceeds the spendable treasury balance.")]
    InsufficientFunds,
    #[msg("Deposit amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
