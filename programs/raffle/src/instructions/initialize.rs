use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::state::Raffle;

/// Accounts required to create the raffle.
/// The raffle PDA holds both the round state and the entrance payments.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The raffle state account.
    #[account(
        init,
        payer = payer,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// Switchboard queue that randomness requests are billed against.
    /// CHECK: Only its key is stored; randomness accounts are matched against it.
    pub oracle_queue: UncheckedAccount<'info>,

    /// Switchboard on-demand program owning randomness accounts.
    /// CHECK: Must be an executable program; only its key is stored.
    #[account(constraint = oracle_program.executable)]
    pub oracle_program: UncheckedAccount<'info>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Creates the raffle with its immutable configuration and opens round zero.
///
/// # Arguments
/// * `ctx` - Context holding the Initialize accounts
/// * `entrance_fee` - Minimum lamports per entry
/// * `interval` - Seconds that must pass before a round can be resolved
/// * `callback_compute_units` - Compute budget reserved for fulfillment
pub fn process_initialize(
    ctx: Context<Initialize>,
    entrance_fee: u64,
    interval: i64,
    callback_compute_units: u32,
) -> Result<()> {
    let clock = Clock::get()?;
    let oracle_queue = ctx.accounts.oracle_queue.key();
    let oracle_program = ctx.accounts.oracle_program.key();

    let raffle = &mut ctx.accounts.raffle;
    raffle.bump = ctx.bumps.raffle;
    raffle.configure(
        entrance_fee,
        interval,
        callback_compute_units,
        oracle_queue,
        oracle_program,
        clock.unix_timestamp,
    )?;

    msg!("Raffle opened at {}", clock.unix_timestamp);
    msg!("Entrance fee: {}", entrance_fee);
    msg!("Interval: {}", interval);

    Ok(())
}
