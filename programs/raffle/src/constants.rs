/// Seed of the singleton raffle PDA.
pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Slots the oracle should wait before revealing a committed request.
pub const REQUEST_CONFIRMATIONS: u16 = 3;

/// Random words consumed per round. Only the first one picks the winner.
pub const NUM_WORDS: u32 = 1;

/// Capacity of the `players` vector, which also sizes the raffle account.
pub const MAX_PLAYERS: usize = 100;
