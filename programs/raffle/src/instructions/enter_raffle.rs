use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::RAFFLE_SEED;
use crate::events::RaffleEntered;
use crate::state::Raffle;

/// Accounts required to enter the current round.
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The player paying the entrance fee.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The raffle state account, which also receives the payment.
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// System program for the lamport transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the signer into the current round.
///
/// The entry is validated before any lamports move, so a rejected entry
/// costs the player nothing beyond the transaction fee.
///
/// # Arguments
/// * `ctx` - Context containing EnterRaffle accounts
/// * `amount` - Lamports paid, at least the entrance fee
pub fn process_enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.raffle.enter(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.raffle.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Player {} entered with {} lamports", player, amount);

    emit!(RaffleEntered {
        round: ctx.accounts.raffle.round,
        player,
        amount,
    });

    Ok(())
}
