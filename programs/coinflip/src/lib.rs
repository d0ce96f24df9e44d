use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod settlement;
pub mod state;

use instructions::*;

declare_id!("BXTjdCrzrue5wZdLSoMy5WpDk66CGRsuKa7PPvzgme4e");

#[program]
pub mod coinflip {
    use super::*;

    /// One-time treasury initialization. The signer becomes the owner.
    pub fn initialize_treasury(ctx: Context<InitializeTreasury>) -> Result<()> {
        instructions::initialize_treasury::handler(ctx)
    }

    /// Owner tops up the payout pool.
    pub fn add_funds(ctx: Context<AddFunds>, amount: u64) -> Result<()> {
        instructions::add_funds::handler(ctx, amount)
    }

    /// Owner withdraws from the payout pool.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Player wagers `amount` lamports on a side (`true` = heads); the bet
    /// is settled and paid within this call.
    pub fn flip_coin(ctx: Context<FlipCoin>, predicted_side: bool, amount: u64) -> Result<()> {
        instructions::flip_coin::handler(ctx, predicted_side, amount)
    }

    /// Spendable treasury balance, returned via instruction return data.
    pub fn get_balance(ctx: Context<GetBalance>) -> Result<u64> {
        instructions::get_balance::handler(ctx)
    }
}
