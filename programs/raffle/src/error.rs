use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    #[msg("Payment is below the entrance fee")]
    InsufficientPayment,

    #[msg("The raffle is not accepting entries")]
    RoundNotOpen,

    #[msg("The raffle has reached its player capacity")]
    RaffleFull,

    #[msg("Upkeep is not needed")]
    UpkeepNotNeeded,

    #[msg("Randomness does not belong to the pending request")]
    UnknownRequest,

    #[msg("Prize transfer to the winner failed")]
    PayoutFailed,

    #[msg("Randomness has not been revealed")]
    RandomnessNotResolved,

    #[msg("Randomness was committed outside the current slot window")]
    RandomnessAlreadyRevealed,

    #[msg("Randomness account is not owned by the configured oracle")]
    InvalidRandomnessAccount,

    #[msg("Raffle configuration is invalid")]
    InvalidConfig,

    #[msg("Arithmetic overflow")]
    MathOverflow,
}
