use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Treasury {
    /// Admin with exclusive rights to fund and withdraw.
    pub owner: Pubkey,
    /// Lamports spendable for payouts. Tracked separately from the account's
    /// lamport balance so the rent-exempt reserve never counts as spendable.
    pub balance: u64,
    /// Running count of settled wagers. Also feeds the outcome seed.
    pub total_flips: u64,
    /// Cumulative lamports wagered.
    pub total_volume: u64,
    /// Cumulative lamports paid to winners.
    pub total_payout: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Treasury {
    pub const SEED: &'static [u8] = b"treasury";
}
