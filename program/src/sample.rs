use fairdice_api::prelude::*;
use solana_program::log::sol_log;
use solana_program::sysvar;
use steel::*;

/// Captures the public slot hash for a round once its sample slot has been
/// reached. Idempotent: calling again after capture leaves the stored sample
/// untouched.
pub fn process_sample(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    // Load accounts.
    let [signer_info, round_info, slot_hashes_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    round_info.is_writable()?;
    let round = round_info.as_account_mut::<Round>(&fairdice_api::ID)?;

    if slot_hashes_info.key != &sysvar::slot_hashes::ID {
        sol_log("Invalid slot hashes sysvar");
        return Err(ProgramError::InvalidAccountData);
    }

    // A sampled round never re-samples.
    if round.is_sampled() {
        sol_log(&format!("Round {} already sampled", round.id));
        return Ok(());
    }

    let clock = Clock::get()?;

    // Localnet test validators may not advance slots fast enough; skip the
    // gate there. Mainnet/devnet always enforce it.
    #[cfg(feature = "localnet")]
    let current_slot = clock.slot.max(round.sample_at);
    #[cfg(not(feature = "localnet"))]
    let current_slot = clock.slot;

    let slot_hash = read_latest_slot_hash(slot_hashes_info)?;
    round.sample(slot_hash, current_slot)?;

    sol_log(&format!(
        "Round {} sampled at slot {}",
        round.id, current_slot
    ));

    Ok(())
}

/// SlotHashes sysvar layout: u64 entry count, then (slot: u64, hash: [u8; 32])
/// pairs ordered newest first.
fn read_latest_slot_hash(info: &AccountInfo) -> Result<[u8; 32], ProgramError> {
    let data = info.try_borrow_data()?;
    if data.len() < 48 {
        return Err(ProgramError::InvalidAccountData);
    }
    let count = u64::from_le_bytes(data[0..8].try_into().unwrap());
    if count == 0 {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(data[16..48].try_into().unwrap())
}
