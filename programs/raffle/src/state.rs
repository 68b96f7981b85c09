use anchor_lang::prelude::*;

use crate::constants::{MAX_PLAYERS, NUM_WORDS, REQUEST_CONFIRMATIONS};
use crate::error::RaffleError;
use crate::oracle::{RandomnessOracle, RandomnessRequest, RequestId};
use crate::payout::PrizeVault;

/// Phase of the current round.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RaffleState {
    /// Accepting entries; resolution may be triggered.
    Open,
    /// Waiting for the oracle to deliver randomness.
    Calculating,
}

impl std::fmt::Display for RaffleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RaffleState::Open => write!(f, "Open"),
            RaffleState::Calculating => write!(f, "Calculating"),
        }
    }
}

#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Raffle {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Lamports required for one entry.
    pub entrance_fee: u64,

    /// Minimum number of seconds between two round openings.
    pub interval: i64,

    /// Compute budget handed to the oracle for the fulfillment step.
    pub callback_compute_units: u32,

    /// Switchboard queue randomness accounts must be committed against.
    pub oracle_queue: Pubkey,

    /// Program that owns valid randomness accounts.
    pub oracle_program: Pubkey,

    /// Phase of the current round. Entries are only accepted while open.
    pub raffle_state: RaffleState,

    /// Entries of the current round in entry order. A player appears once
    /// per entry.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,

    /// Lamports paid into the current round.
    pub balance: u64,

    /// UNIX timestamp of the last time a round opened.
    pub last_timestamp: i64,

    /// The in-flight randomness request, default while open.
    pub pending_request: RequestId,

    /// Winner of the last completed round.
    pub recent_winner: Pubkey,

    /// Number of completed rounds.
    pub round: u64,
}

/// Result of the eligibility check along with the inputs it was computed from.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub upkeep_needed: bool,
    pub balance: u64,
    pub num_players: u64,
    pub raffle_state: RaffleState,
}

impl UpkeepStatus {
    /// Left/right values attached to an `UpkeepNotNeeded` error.
    pub fn compared_values(&self) -> (String, String) {
        (
            format!("balance={} players={}", self.balance, self.num_players),
            format!("state={}", self.raffle_state),
        )
    }
}

/// Outcome of a fulfilled round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub winner: Pubkey,
    pub prize: u64,
}

impl Raffle {
    /// Sets the immutable configuration and opens the first round at `now`.
    pub fn configure(
        &mut self,
        entrance_fee: u64,
        interval: i64,
        callback_compute_units: u32,
        oracle_queue: Pubkey,
        oracle_program: Pubkey,
        now: i64,
    ) -> Result<()> {
        require!(entrance_fee > 0, RaffleError::InvalidConfig);
        require!(interval > 0, RaffleError::InvalidConfig);
        require!(callback_compute_units > 0, RaffleError::InvalidConfig);

        self.entrance_fee = entrance_fee;
        self.interval = interval;
        self.callback_compute_units = callback_compute_units;
        self.oracle_queue = oracle_queue;
        self.oracle_program = oracle_program;
        self.raffle_state = RaffleState::Open;
        self.players = Vec::new();
        self.balance = 0;
        self.last_timestamp = now;
        self.pending_request = RequestId::default();
        self.recent_winner = Pubkey::default();
        self.round = 0;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.raffle_state == RaffleState::Open
    }

    pub fn num_players(&self) -> u64 {
        self.players.len() as u64
    }

    /// Admits `player` into the current round for `amount` lamports.
    ///
    /// Nothing is modified unless every check passes.
    pub fn enter(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(self.is_open(), RaffleError::RoundNotOpen);
        require!(amount >= self.entrance_fee, RaffleError::InsufficientPayment);
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);
        let balance = self.balance.checked_add(amount).ok_or(RaffleError::MathOverflow)?;

        self.players.push(player);
        self.balance = balance;
        Ok(())
    }

    /// Whether the round can be resolved at `now`. Never mutates.
    pub fn check_upkeep(&self, now: i64) -> UpkeepStatus {
        let is_open = self.is_open();
        let time_passed = now.saturating_sub(self.last_timestamp) >= self.interval;
        let has_players = !self.players.is_empty();
        let has_balance = self.balance > 0;

        UpkeepStatus {
            upkeep_needed: is_open && time_passed && has_players && has_balance,
            balance: self.balance,
            num_players: self.num_players(),
            raffle_state: self.raffle_state,
        }
    }

    /// Closes the round and asks `oracle` for randomness.
    ///
    /// Returns the request identifier the fulfillment has to present.
    pub fn request_winner<O: RandomnessOracle>(
        &mut self,
        now: i64,
        oracle: &mut O,
    ) -> Result<RequestId> {
        let status = self.check_upkeep(now);
        if !status.upkeep_needed {
            msg!("Balance: {}", status.balance);
            msg!("Players: {}", status.num_players);
            msg!("State: {}", status.raffle_state);
            return Err(
                error!(RaffleError::UpkeepNotNeeded).with_values(status.compared_values())
            );
        }

        let request = RandomnessRequest {
            confirmations: REQUEST_CONFIRMATIONS,
            callback_compute_units: self.callback_compute_units,
            num_words: NUM_WORDS,
            queue: self.oracle_queue,
        };
        let request_id = oracle.request_randomness(&request)?;

        self.raffle_state = RaffleState::Calculating;
        self.pending_request = request_id;
        Ok(request_id)
    }

    /// Returns the in-flight request if it was committed on `account`.
    ///
    /// Lets the caller reject a stray randomness account before reading it.
    pub fn pending_request_for(&self, account: &Pubkey) -> Result<RequestId> {
        require!(
            self.raffle_state == RaffleState::Calculating,
            RaffleError::UnknownRequest
        );
        if *account != self.pending_request.account {
            msg!("Pending randomness account: {}", self.pending_request.account);
            msg!("Delivered randomness account: {}", account);
            return Err(RaffleError::UnknownRequest.into());
        }
        Ok(self.pending_request)
    }

    /// Fails with `UnknownRequest` unless `request_id` is the in-flight request.
    pub fn ensure_pending_request(&self, request_id: &RequestId) -> Result<()> {
        let pending = self.pending_request_for(&request_id.account)?;
        if request_id.seed_slot != pending.seed_slot {
            msg!("Pending seed slot: {}", pending.seed_slot);
            msg!("Delivered seed slot: {}", request_id.seed_slot);
            return Err(RaffleError::UnknownRequest.into());
        }
        Ok(())
    }

    /// Picks the winner from the closed player list, pays the whole balance
    /// through `vault` and opens the next round at `now`.
    ///
    /// A failed payout leaves the round calculating so it can be retried.
    pub fn fulfill_random_words<V: PrizeVault>(
        &mut self,
        request_id: &RequestId,
        random_words: &[u64],
        now: i64,
        vault: &mut V,
    ) -> Result<Payout> {
        self.ensure_pending_request(request_id)?;
        let random_word = *random_words.first().ok_or(RaffleError::RandomnessNotResolved)?;
        // Calculating implies at least one player.
        require!(!self.players.is_empty(), RaffleError::UnknownRequest);

        let index_of_winner = (random_word % self.num_players()) as usize;
        let winner = self.players[index_of_winner];
        let prize = self.balance;

        msg!("Random word: {}", random_word);
        msg!("Winner index: {}", index_of_winner);

        vault
            .pay_out(&winner, prize)
            .map_err(|_| error!(RaffleError::PayoutFailed))?;

        self.recent_winner = winner;
        self.players.clear();
        self.balance = 0;
        self.last_timestamp = now;
        self.pending_request = RequestId::default();
        self.round = self.round.checked_add(1).ok_or(RaffleError::MathOverflow)?;
        self.raffle_state = RaffleState::Open;

        Ok(Payout { winner, prize })
    }
}
