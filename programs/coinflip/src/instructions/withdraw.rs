use anchor_lang::prelude::*;

use crate::errors::CoinFlipError;
use crate::events::FundsWithdrawn;
use crate::state::Treasury;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        has_one = owner @ CoinFlipError::Unauthorized,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let treasury = &mut ctx.accounts.treasury;
    require!(amount <= treasury.balance, CoinFlipError::InsufficientFunds);

    treasury.balance = treasury
        .balance
        .checked_sub(amount)
        .ok_or(CoinFlipError::MathOverflow)?;

    // The PDA carries account data, so lamports move by direct adjustment
    // rather than a system-program transfer. `balance` excludes the
    // rent-exempt reserve, which therefore stays untouched.
    **treasury.to_account_info().try_borrow_mut_lamports()? -= amount;
    **ctx.accounts.owner.to_account_info().try_borrow_mut_lamports()? += amount;

    emit!(FundsWithdrawn {
        owner: ctx.accounts.owner.key(),
        amount,
        new_balance: treasury.balance,
    });

    Ok(())
}
