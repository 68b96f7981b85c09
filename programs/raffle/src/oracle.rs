use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::error::RaffleError;

/// Parameters of a single outbound randomness request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomnessRequest {
    pub confirmations: u16,
    pub callback_compute_units: u32,
    pub num_words: u32,
    /// Oracle queue the request is billed against.
    pub queue: Pubkey,
}

/// Correlates a randomness request with its fulfillment.
///
/// A randomness account can be committed again by its authority, so the
/// account key alone does not identify a request; the commit slot does.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub struct RequestId {
    /// Randomness account the request was committed on.
    pub account: Pubkey,
    /// Slot of the commitment accepted by `perform_upkeep`.
    pub seed_slot: u64,
}

/// Source of unpredictable values for the raffle.
///
/// `request_randomness` is called at most once per calculating phase and
/// returns the identifier the fulfillment must later present.
pub trait RandomnessOracle {
    fn request_randomness(&mut self, request: &RandomnessRequest) -> Result<RequestId>;
}

/// Switchboard on-demand randomness.
///
/// The client commits a randomness account in the same transaction as
/// `perform_upkeep`; the account key and its seed slot become the request
/// identifier. Once an oracle reveals that commitment, `reveal` yields the
/// random words.
pub struct SwitchboardOracle<'info> {
    randomness_account: AccountInfo<'info>,
    oracle_program: Pubkey,
    clock: Clock,
}

impl<'info> SwitchboardOracle<'info> {
    pub fn new(
        randomness_account: AccountInfo<'info>,
        oracle_program: Pubkey,
        clock: Clock,
    ) -> Self {
        Self {
            randomness_account,
            oracle_program,
            clock,
        }
    }

    fn ensure_owner(&self) -> Result<()> {
        if *self.randomness_account.owner != self.oracle_program {
            msg!("Randomness account owner: {}", self.randomness_account.owner);
            return Err(RaffleError::InvalidRandomnessAccount.into());
        }
        Ok(())
    }

    /// Reads the value revealed for `pending` and splits it into
    /// `num_words` words.
    ///
    /// Fails with `UnknownRequest` when the account is not the pending one
    /// or has been committed again since the request was made.
    pub fn reveal(&self, pending: &RequestId, num_words: u32) -> Result<Vec<u64>> {
        if self.randomness_account.key() != pending.account {
            msg!("Pending randomness account: {}", pending.account);
            msg!("Delivered randomness account: {}", self.randomness_account.key());
            return Err(RaffleError::UnknownRequest.into());
        }
        self.ensure_owner()?;

        let data = self.randomness_account.try_borrow_data()?;
        let randomness_data = RandomnessAccountData::parse(data)
            .map_err(|_| RaffleError::InvalidRandomnessAccount)?;

        if randomness_data.seed_slot != pending.seed_slot {
            msg!("Committed seed slot: {}", pending.seed_slot);
            msg!("Delivered seed slot: {}", randomness_data.seed_slot);
            return Err(RaffleError::UnknownRequest.into());
        }

        let revealed_random_value = randomness_data
            .get_value(&self.clock)
            .map_err(|_| RaffleError::RandomnessNotResolved)?;

        Ok(words_from_value(&revealed_random_value, num_words))
    }
}

impl<'info> RandomnessOracle for SwitchboardOracle<'info> {
    fn request_randomness(&mut self, request: &RandomnessRequest) -> Result<RequestId> {
        self.ensure_owner()?;

        let data = self.randomness_account.try_borrow_data()?;
        let randomness_data = RandomnessAccountData::parse(data)
            .map_err(|_| RaffleError::InvalidRandomnessAccount)?;

        if randomness_data.queue != request.queue {
            msg!("Randomness queue: {}", randomness_data.queue);
            msg!("Expected queue: {}", request.queue);
            return Err(RaffleError::InvalidRandomnessAccount.into());
        }

        // The commitment must come from the previous slot, before any reveal.
        let previous_slot = self
            .clock
            .slot
            .checked_sub(1)
            .ok_or(RaffleError::MathOverflow)?;
        if randomness_data.seed_slot != previous_slot {
            msg!("Seed slot: {}", randomness_data.seed_slot);
            msg!("Current slot: {}", self.clock.slot);
            return Err(RaffleError::RandomnessAlreadyRevealed.into());
        }

        msg!(
            "Requesting {} word(s), {} confirmations, {} compute units",
            request.num_words,
            request.confirmations,
            request.callback_compute_units
        );

        Ok(RequestId {
            account: self.randomness_account.key(),
            seed_slot: randomness_data.seed_slot,
        })
    }
}

/// Splits a revealed 32-byte value into little-endian `u64` words.
pub fn words_from_value(value: &[u8; 32], num_words: u32) -> Vec<u64> {
    value
        .chunks_exact(8)
        .take(num_words as usize)
        .map(|chunk| {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            u64::from_le_bytes(word)
        })
        .collect()
}
