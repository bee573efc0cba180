use fairdice_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Funds the house bankroll. Anyone may add lamports.
pub fn process_fund_house(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = FundHouse::try_from_bytes(data)?;
    let amount = u64::from_le_bytes(args.amount);

    // Load accounts.
    let [signer_info, table_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    table_info
        .is_writable()?
        .has_seeds(&[TABLE], &fairdice_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    if amount == 0 {
        sol_log("Amount must be greater than 0");
        return Err(ProgramError::InvalidArgument);
    }

    let table = table_info.as_account_mut::<Table>(&fairdice_api::ID)?;

    // Transfer lamports from signer to the table.
    table_info.collect(amount, signer_info)?;
    table.house_bankroll = table
        .house_bankroll
        .checked_add(amount)
        .ok_or(FairdiceError::StakeOverflow)?;

    sol_log(&format!("House bankroll is now: {}", table.house_bankroll));

    Ok(())
}
