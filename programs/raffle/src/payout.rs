use anchor_lang::prelude::*;
use solana_program::rent::Rent;

use crate::error::RaffleError;

/// Moves the round balance to the winner.
pub trait PrizeVault {
    fn pay_out(&mut self, winner: &Pubkey, amount: u64) -> Result<()>;
}

/// Pays the prize straight out of the raffle PDA's lamports.
///
/// The raffle account is owned by this program, so lamports can be debited
/// without a CPI. The PDA keeps its rent-exempt minimum.
pub struct LamportVault<'info> {
    raffle: AccountInfo<'info>,
    recipient: AccountInfo<'info>,
    rent: Rent,
}

impl<'info> LamportVault<'info> {
    pub fn new(raffle: AccountInfo<'info>, recipient: AccountInfo<'info>, rent: Rent) -> Self {
        Self {
            raffle,
            recipient,
            rent,
        }
    }
}

impl<'info> PrizeVault for LamportVault<'info> {
    fn pay_out(&mut self, winner: &Pubkey, amount: u64) -> Result<()> {
        if self.recipient.key() != *winner {
            msg!("Winner: {}", winner);
            msg!("Recipient: {}", self.recipient.key());
            return Err(RaffleError::PayoutFailed.into());
        }
        require!(self.recipient.is_writable, RaffleError::PayoutFailed);

        let rent_floor = self.rent.minimum_balance(self.raffle.data_len());
        let remaining = self
            .raffle
            .lamports()
            .checked_sub(amount)
            .ok_or(RaffleError::PayoutFailed)?;
        if remaining < rent_floor {
            msg!("Raffle lamports: {}", self.raffle.lamports());
            msg!("Prize: {}", amount);
            return Err(RaffleError::PayoutFailed.into());
        }
        let credited = self
            .recipient
            .lamports()
            .checked_add(amount)
            .ok_or(RaffleError::PayoutFailed)?;

        **self.raffle.try_borrow_mut_lamports()? = remaining;
        **self.recipient.try_borrow_mut_lamports()? = credited;

        msg!("Paid {} lamports to {}", amount, winner);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA_LEN: usize = 64;

    fn rent() -> Rent {
        Rent::default()
    }

    fn account<'a>(
        key: &'a Pubkey,
        is_writable: bool,
        lamports: &'a mut u64,
        data: &'a mut [u8],
        owner: &'a Pubkey,
    ) -> AccountInfo<'a> {
        AccountInfo::new(key, false, is_writable, lamports, data, owner, false, 0)
    }

    #[test]
    fn pays_winner_and_keeps_rent_floor() {
        let raffle_key = Pubkey::new_unique();
        let winner_key = Pubkey::new_unique();
        let program = Pubkey::new_unique();
        let owner = Pubkey::default();
        let floor = rent().minimum_balance(DATA_LEN);

        let mut raffle_lamports = floor + 1_000;
        let mut winner_lamports = 5;
        let mut raffle_data = vec![0u8; DATA_LEN];
        let mut winner_data = vec![0u8; 0];

        let raffle = account(&raffle_key, true, &mut raffle_lamports, &mut raffle_data, &program);
        let recipient = account(&winner_key, true, &mut winner_lamports, &mut winner_data, &owner);

        let mut vault = LamportVault::new(raffle.clone(), recipient.clone(), rent());
        vault.pay_out(&winner_key, 1_000).unwrap();

        assert_eq!(raffle.lamports(), floor);
        assert_eq!(recipient.lamports(), 1_005);
    }

    #[test]
    fn refuses_recipient_other_than_winner() {
        let raffle_key = Pubkey::new_unique();
        let other_key = Pubkey::new_unique();
        let program = Pubkey::new_unique();
        let owner = Pubkey::default();

        let mut raffle_lamports = rent().minimum_balance(DATA_LEN) + 1_000;
        let mut other_lamports = 0;
        let mut raffle_data = vec![0u8; DATA_LEN];
        let mut other_data = vec![0u8; 0];

        let raffle = account(&raffle_key, true, &mut raffle_lamports, &mut raffle_data, &program);
        let recipient = account(&other_key, true, &mut other_lamports, &mut other_data, &owner);

        let mut vault = LamportVault::new(raffle.clone(), recipient.clone(), rent());
        let err = vault.pay_out(&Pubkey::new_unique(), 1_000).unwrap_err();

        assert_eq!(err, RaffleError::PayoutFailed.into());
        assert_eq!(recipient.lamports(), 0);
    }

    #[test]
    fn refuses_read_only_recipient() {
        let raffle_key = Pubkey::new_unique();
        let winner_key = Pubkey::new_unique();
        let program = Pubkey::new_unique();
        let owner = Pubkey::default();

        let mut raffle_lamports = rent().minimum_balance(DATA_LEN) + 1_000;
        let mut winner_lamports = 0;
        let mut raffle_data = vec![0u8; DATA_LEN];
        let mut winner_data = vec![0u8; 0];

        let raffle = account(&raffle_key, true, &mut raffle_lamports, &mut raffle_data, &program);
        let recipient = account(&winner_key, false, &mut winner_lamports, &mut winner_data, &owner);

        let mut vault = LamportVault::new(raffle, recipient, rent());
        assert_eq!(
            vault.pay_out(&winner_key, 1_000).unwrap_err(),
            RaffleError::PayoutFailed.into()
        );
    }

    #[test]
    fn refuses_to_dip_below_rent_floor() {
        let raffle_key = Pubkey::new_unique();
        let winner_key = Pubkey::new_unique();
        let program = Pubkey::new_unique();
        let owner = Pubkey::default();
        let floor = rent().minimum_balance(DATA_LEN);

        let mut raffle_lamports = floor + 999;
        let mut winner_lamports = 0;
        let mut raffle_data = vec![0u8; DATA_LEN];
        let mut winner_data = vec![0u8; 0];

        let raffle = account(&raffle_key, true, &mut raffle_lamports, &mut raffle_data, &program);
        let recipient = account(&winner_key, true, &mut winner_lamports, &mut winner_data, &owner);

        let mut vault = LamportVault::new(raffle.clone(), recipient.clone(), rent());
        let err = vault.pay_out(&winner_key, 1_000).unwrap_err();

        assert_eq!(err, RaffleError::PayoutFailed.into());
        assert_eq!(raffle.lamports(), floor + 999);
        assert_eq!(recipient.lamports(), 0);
    }
}
