use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::events::RequestedRaffleWinner;
use crate::oracle::SwitchboardOracle;
use crate::state::Raffle;

/// Accounts required to close the round and request randomness.
///
/// Anyone may call this once the round is eligible. The Switchboard
/// randomness account must be committed in the preceding slot.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The raffle state account.
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's owner and data are validated within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let mut oracle = SwitchboardOracle::new(
        ctx.accounts.randomness_account_data.to_account_info(),
        ctx.accounts.raffle.oracle_program,
        clock,
    );

    let raffle = &mut ctx.accounts.raffle;
    let request_id = raffle.request_winner(now, &mut oracle)?;

    msg!("Requested randomness: {}", request_id.account);
    msg!("Seed slot: {}", request_id.seed_slot);

    emit!(RequestedRaffleWinner {
        round: raffle.round,
        request_id: request_id.account,
        seed_slot: request_id.seed_slot,
    });

    Ok(())
}
