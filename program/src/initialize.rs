use fairdice_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Initialize the program accounts (Config, Table).
/// Can only be called once, by the admin.
pub fn process_initialize(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse args
    let args = Initialize::try_from_bytes(data)?;
    let min_bet = u64::from_le_bytes(args.min_bet);
    let max_bet = u64::from_le_bytes(args.max_bet);

    // Load accounts
    let [signer_info, config_info, table_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info
        .is_empty()?
        .is_writable()?
        .has_seeds(&[CONFIG], &fairdice_api::ID)?;
    table_info
        .is_empty()?
        .is_writable()?
        .has_seeds(&[TABLE], &fairdice_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    // Only the admin can initialize
    if *signer_info.key != ADMIN_ADDRESS {
        sol_log("Error: Only admin can initialize");
        return Err(ProgramError::InvalidAccountData);
    }

    // Validate limits
    if min_bet == 0 || max_bet < min_bet {
        sol_log("Error: Invalid bet limits");
        return Err(ProgramError::InvalidArgument);
    }
    if FieldRule::from_u8(args.field_double).is_none() {
        sol_log("Error: Invalid field double rule");
        return Err(ProgramError::InvalidArgument);
    }

    sol_log("Initializing fairdice program accounts...");

    // Create Config account
    create_program_account::<Config>(
        config_info,
        system_program,
        signer_info,
        &fairdice_api::ID,
        &[CONFIG],
    )?;
    let config = config_info.as_account_mut::<Config>(&fairdice_api::ID)?;
    config.admin = *signer_info.key;
    config.min_bet = min_bet;
    config.max_bet = max_bet;
    config.field_double = args.field_double as u64;
    sol_log(&format!("Config created at {}", config_info.key));

    // Create Table account
    create_program_account::<Table>(
        table_info,
        system_program,
        signer_info,
        &fairdice_api::ID,
        &[TABLE],
    )?;
    let table = table_info.as_account_mut::<Table>(&fairdice_api::ID)?;
    table.epoch_id = 1;
    table.clear_point();
    table.epoch_start_round = 0;
    table.house_bankroll = 0;
    table.total_payouts = 0;
    table.total_collected = 0;
    sol_log(&format!("Table created at {}", table_info.key));

    Ok(())
}
