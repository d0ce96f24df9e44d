use anchor_lang::prelude::*;

use crate::state::Treasury;

#[derive(Accounts)]
pub struct GetBalance<'info> {
    #[account(
        seeds = [Treasury::SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
}

/// Read-only; the balance comes back via instruction return data.
pub fn handler(ctx: Context<GetBalance>) -> Result<u64> {
    Ok(ctx.accounts.treasury.balance)
}
