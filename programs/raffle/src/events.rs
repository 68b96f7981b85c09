use anchor_lang::prelude::*;

#[event]
pub struct RaffleEntered {
    pub round: u64,
    pub player: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RequestedRaffleWinner {
    pub round: u64,
    /// Randomness account the request was committed on.
    pub request_id: Pubkey,
    /// Commit slot that distinguishes requests on the same account.
    pub seed_slot: u64,
}

#[event]
pub struct WinnerPicked {
    pub round: u64,
    pub winner: Pubkey,
    pub prize: u64,
}
