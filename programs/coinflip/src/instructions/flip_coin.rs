use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::CoinFlipError;
use crate::events::GameResult;
use crate::settlement;
use crate::state::Treasury;

#[derive(Accounts)]
pub struct FlipCoin<'info> {
    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<FlipCoin>, predicted_side: bool, amount: u64) -> Result<()> {
    require!(amount > 0, CoinFlipError::ZeroBet);

    // The pool must already cover the best case for the player before the
    // wager is accepted.
    let worst_case = settlement::worst_case_payout(amount)?;
    require!(
        ctx.accounts.treasury.balance >= worst_case,
        CoinFlipError::InsufficientTreasury
    );

    // Stake moves in first; any failure below reverts the whole call.
    let transfer_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        system_program::Transfer {
            from: ctx.accounts.player.to_account_info(),
            to: ctx.accounts.treasury.to_account_info(),
        },
    );
    system_program::transfer(transfer_ctx, amount)?;

    let clock = Clock::get()?;
    let player_key = ctx.accounts.player.key();

    let treasury = &mut ctx.accounts.treasury;
    let actual_result = settlement::derive_outcome(
        clock.slot,
        clock.unix_timestamp,
        &player_key,
        treasury.total_flips,
    );
    let outcome = settlement::settle(predicted_side, actual_result, amount)?;

    treasury.balance = settlement::apply_to_balance(treasury.balance, amount, outcome.payout)?;

    if outcome.won {
        **treasury.to_account_info().try_borrow_mut_lamports()? -= outcome.payout;
        **ctx.accounts.player.to_account_info().try_borrow_mut_lamports()? += outcome.payout;
    }

    treasury.total_flips = treasury
        .total_flips
        .checked_add(1)
        .ok_or(CoinFlipError::MathOverflow)?;
    treasury.total_volume = treasury
        .total_volume
        .checked_add(amount)
        .ok_or(CoinFlipError::MathOverflow)?;
    treasury.total_payout = treasury
        .total_payout
        .checked_add(outcome.payout)
        .ok_or(CoinFlipError::MathOverflow)?;

    msg!(
        "Flip settled: choice={}, result={}, payout={} lamports",
        predicted_side,
        actual_result,
        outcome.payout
    );

    emit!(GameResult {
        player: player_key,
        bet_amount: amount,
        player_choice: predicted_side,
        actual_result,
        won: outcome.won,
        payout: outcome.payout,
    });

    Ok(())
}
