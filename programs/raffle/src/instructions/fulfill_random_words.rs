use anchor_lang::prelude::*;

use crate::constants::{NUM_WORDS, RAFFLE_SEED};
use crate::events::WinnerPicked;
use crate::oracle::SwitchboardOracle;
use crate::payout::LamportVault;
use crate::state::Raffle;

/// Accounts required to settle the round once randomness is revealed.
///
/// The winner is determined by the revealed value, so the caller has to
/// pass the matching player account as `recent_winner`.
#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    /// The raffle state account holding the prize.
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// The randomness account committed by `perform_upkeep`.
    /// CHECK: Compared against the pending request before its data is read,
    /// then its seed slot must still match the committed one.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// The account receiving the prize.
    /// CHECK: Must equal the selected winner, enforced by the payout.
    #[account(mut)]
    pub recent_winner: UncheckedAccount<'info>,
}

pub fn process_fulfill_random_words(ctx: Context<FulfillRandomWords>) -> Result<()> {
    let clock = Clock::get()?;
    let rent = Rent::get()?;
    let now = clock.unix_timestamp;

    // A stray account is rejected before its data is trusted.
    let request_id = ctx
        .accounts
        .raffle
        .pending_request_for(&ctx.accounts.randomness_account_data.key())?;

    let oracle = SwitchboardOracle::new(
        ctx.accounts.randomness_account_data.to_account_info(),
        ctx.accounts.raffle.oracle_program,
        clock,
    );
    let random_words = oracle.reveal(&request_id, NUM_WORDS)?;

    let mut vault = LamportVault::new(
        ctx.accounts.raffle.to_account_info(),
        ctx.accounts.recent_winner.to_account_info(),
        rent,
    );
    let raffle = &mut ctx.accounts.raffle;
    let round = raffle.round;
    let payout = raffle.fulfill_random_words(&request_id, &random_words, now, &mut vault)?;

    msg!("Winner: {}", payout.winner);
    msg!("Prize: {}", payout.prize);

    emit!(WinnerPicked {
        round,
        winner: payout.winner,
        prize: payout.prize,
    });

    Ok(())
}
