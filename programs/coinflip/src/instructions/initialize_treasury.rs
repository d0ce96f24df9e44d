use anchor_lang::prelude::*;

use crate::events::TreasuryInitialized;
use crate::state::Treasury;

#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + Treasury::INIT_SPACE,
        seeds = [Treasury::SEED],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeTreasury>) -> Result<()> {
    let clock = Clock::get()?;
    let treasury = &mut ctx.accounts.treasury;

    treasury.owner = ctx.accounts.owner.key();
    treasury.balance = 0;
    treasury.total_flips = 0;
    treasury.total_volume = 0;
    treasury.total_payout = 0;
    treasury.bump = ctx.bumps.treasury;

    emit!(TreasuryInitialized {
        owner: treasury.owner,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
