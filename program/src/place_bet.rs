use fairdice_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Places a bet for the signer.
///
/// Bets are only accepted against a round that is still open and whose
/// sample slot has not been reached: once the slot hash is capturable the
/// outcome is no longer unpredictable, so the book is closed.
pub fn process_place_bet(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = PlaceBet::try_from_bytes(data)?;
    let amount = u64::from_le_bytes(args.amount);

    #[cfg(feature = "debug")]
    sol_log(&format!(
        "PlaceBet: kind={}, point={}, amount={}",
        args.kind, args.point, amount
    ));

    // Load accounts.
    let [signer_info, config_info, table_info, position_info, round_info, system_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info.has_seeds(&[CONFIG], &fairdice_api::ID)?;
    table_info
        .is_writable()?
        .has_seeds(&[TABLE], &fairdice_api::ID)?;
    position_info
        .is_writable()?
        .has_seeds(&[POSITION, &signer_info.key.to_bytes()], &fairdice_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    let config = config_info.as_account::<Config>(&fairdice_api::ID)?;
    let round = round_info.as_account::<Round>(&fairdice_api::ID)?;
    let table = table_info.as_account_mut::<Table>(&fairdice_api::ID)?;

    // The book closes when the round leaves Open or its sample slot arrives.
    let clock = Clock::get()?;
    if !round.is_open() || clock.slot >= round.sample_at {
        sol_log("Betting is closed for this round");
        return Err(FairdiceError::BetsClosed.into());
    }
    if round.id <= table.applied_round {
        sol_log("Round has already been applied to the table");
        return Err(FairdiceError::StaleRound.into());
    }

    // Validate the wager itself. A bad kind or point rejects only this bet.
    let bet = Bet::try_new(args.kind, args.point, amount)?;
    if amount < config.min_bet || amount > config.max_bet {
        sol_log("Bet amount outside configured limits");
        return Err(FairdiceError::InvalidBetAmount.into());
    }

    // Worst-case payout must stay within the house bankroll.
    let max_payout = amount
        .checked_mul(MAX_PAYOUT_MULTIPLE)
        .ok_or(FairdiceError::StakeOverflow)?;
    if max_payout > table.house_bankroll {
        sol_log("Bet exceeds house bankroll capacity");
        return Err(FairdiceError::InsufficientBankroll.into());
    }

    // Load or create the position account.
    let position = if position_info.data_is_empty() {
        create_program_account::<Position>(
            position_info,
            system_program,
            signer_info,
            &fairdice_api::ID,
            &[POSITION, &signer_info.key.to_bytes()],
        )?;
        let position = position_info.as_account_mut::<Position>(&fairdice_api::ID)?;
        position.authority = *signer_info.key;
        position.epoch_id = table.epoch_id;
        position
    } else {
        let position = position_info.as_account_mut::<Position>(&fairdice_api::ID)?;
        if position.authority != *signer_info.key {
            sol_log("Signer is not the position authority");
            return Err(FairdiceError::InvalidAuthority.into());
        }
        // A position left over from an ended epoch starts fresh.
        if position.epoch_id != table.epoch_id {
            position.reset_for_epoch(table.epoch_id);
        }
        position
    };

    // Phase gating for line bets.
    match bet.kind {
        BetKind::PassLine | BetKind::DontPass => {
            if !table.is_coming_out() {
                sol_log("Line bets are only accepted on the come-out roll");
                return Err(FairdiceError::LineBetNotAllowed.into());
            }
        }
        BetKind::PassOdds => {
            if !table.has_point() || position.pass_line == 0 {
                sol_log("Pass odds require a pass line bet and a point");
                return Err(FairdiceError::OddsNotAllowed.into());
            }
        }
        BetKind::DontPassOdds => {
            if !table.has_point() || position.dont_pass == 0 {
                sol_log("Don't pass odds require a don't pass bet and a point");
                return Err(FairdiceError::OddsNotAllowed.into());
            }
        }
        BetKind::ComeOdds => {
            let backing = bet
                .point
                .and_then(point_to_index)
                .map(|i| position.come_bets[i])
                .unwrap_or(0);
            if backing == 0 {
                sol_log("Come odds require a come bet on that number");
                return Err(FairdiceError::OddsNotAllowed.into());
            }
        }
        BetKind::DontComeOdds => {
            let backing = bet
                .point
                .and_then(point_to_index)
                .map(|i| position.dont_come_bets[i])
                .unwrap_or(0);
            if backing == 0 {
                sol_log("Don't come odds require a don't come bet on that number");
                return Err(FairdiceError::OddsNotAllowed.into());
            }
        }
        _ => {}
    }

    // Add the stake to its slot.
    let slot = position
        .stake_mut(bet.kind, bet.point)
        .ok_or(FairdiceError::InvalidPoint)?;
    *slot = slot
        .checked_add(amount)
        .ok_or(FairdiceError::StakeOverflow)?;

    position.total_wagered = position
        .total_wagered
        .checked_add(amount)
        .ok_or(FairdiceError::StakeOverflow)?;

    // Escrow the stake in the table account.
    table_info.collect(amount, signer_info)?;
    table.house_bankroll = table
        .house_bankroll
        .checked_add(amount)
        .ok_or(FairdiceError::StakeOverflow)?;

    sol_log(&format!(
        "Bet placed: kind={:?} point={:?} stake={} (round {})",
        bet.kind, bet.point, amount, round.id
    ));

    Ok(())
}
