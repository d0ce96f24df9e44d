use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::CoinFlipError;
use crate::events::FundsAdded;
use crate::state::Treasury;

#[derive(Accounts)]
pub struct AddFunds<'info> {
    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        has_one = owner @ CoinFlipError::Unauthorized,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AddFunds>, amount: u64) -> Result<()> {
    require!(amount > 0, CoinFlipError::InvalidAmount);

    // Transfer lamports from the owner into the treasury PDA.
    let transfer_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        system_program::Transfer {
            from: ctx.accounts.owner.to_account_info(),
            to: ctx.accounts.treasury.to_account_info(),
        },
    );
    system_program::transfer(transfer_ctx, amount)?;

    let treasury = &mut ctx.accounts.treasury;
    treasury.balance = treasury
        .balance
        .checked_add(amount)
        .ok_or(CoinFlipError::MathOverflow)?;

    emit!(FundsAdded {
        owner: ctx.accounts.owner.key(),
        amount,
        new_balance: treasury.balance,
    });

    Ok(())
}
