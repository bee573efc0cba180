use fairdice_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Claims pending winnings for a position.
pub fn process_claim(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    // Load accounts.
    let [signer_info, table_info, position_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    table_info
        .is_writable()?
        .has_seeds(&[TABLE], &fairdice_api::ID)?;
    position_info
        .is_writable()?
        .has_seeds(&[POSITION, &signer_info.key.to_bytes()], &fairdice_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    let position = position_info.as_account_mut::<Position>(&fairdice_api::ID)?;

    // Check authority.
    if position.authority != *signer_info.key {
        sol_log("Not the position authority");
        return Err(FairdiceError::InvalidAuthority.into());
    }

    let amount = position.pending_winnings;
    if amount == 0 {
        sol_log("No pending winnings to claim");
        return Err(ProgramError::InvalidArgument);
    }

    // Clear pending winnings before the transfer.
    position.pending_winnings = 0;

    // Transfer lamports from the table to the bettor.
    table_info.send(amount, signer_info);

    sol_log(&format!("Claimed {} lamports", amount));

    Ok(())
}
