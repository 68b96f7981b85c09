use anchor_lang::prelude::*;
use instructions::*;

/// Program-wide constants such as PDA seeds and oracle request parameters.
mod constants;

/// Custom error types returned by the raffle instructions.
mod error;

/// Events emitted for off-chain indexers.
mod events;

/// Instruction handlers: initialization, entry, upkeep and fulfillment.
mod instructions;

/// Randomness oracle seam and its Switchboard on-demand implementation.
mod oracle;

/// Prize transfer seam and the lamport-based implementation.
mod payout;

/// The `Raffle` account and its round state machine.
mod state;

pub use oracle::RequestId;
pub use state::{RaffleState, UpkeepStatus};

declare_id!("7xRfL3pWzkq9NDuY2cHs4mVbTeA6gJ8nPiKoQw5EtZ1S");

#[program]
pub mod raffle {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        entrance_fee: u64,
        interval: i64,
        callback_compute_units: u32,
    ) -> Result<()> {
        process_initialize(ctx, entrance_fee, interval, callback_compute_units)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        process_enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
        process_check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        process_perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(ctx: Context<FulfillRandomWords>) -> Result<()> {
        process_fulfill_random_words(ctx)
    }
}
