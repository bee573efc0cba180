use fairdice_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Opens a new round: records the keccak commitment to the round seed and
/// the future slot at which the public slot hash will be sampled. The seed
/// itself stays with the opener until reveal.
pub fn process_open(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = Open::try_from_bytes(data)?;
    let id = u64::from_le_bytes(args.id);
    let sample_at = u64::from_le_bytes(args.sample_at);

    // Load accounts.
    let [signer_info, round_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    round_info
        .is_writable()?
        .has_seeds(&[ROUND, &id.to_le_bytes()], &fairdice_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    // A round record in any phase means this id is taken.
    if !round_info.data_is_empty() {
        sol_log(&format!("Round {} already exists", id));
        return Err(FairdiceError::RoundAlreadyExists.into());
    }

    // The sample slot must be far enough in the future that the sampled slot
    // hash cannot be known at commit time.
    let clock = Clock::get()?;
    if sample_at < clock.slot.saturating_add(MIN_SAMPLE_DELAY_SLOTS) {
        sol_log("Sample slot too close to current slot");
        return Err(ProgramError::InvalidArgument);
    }

    // Create the round record.
    create_program_account::<Round>(
        round_info,
        system_program,
        signer_info,
        &fairdice_api::ID,
        &[ROUND, &id.to_le_bytes()],
    )?;
    let round = round_info.as_account_mut::<Round>(&fairdice_api::ID)?;
    round.id = id;
    round.authority = *signer_info.key;
    round.commit = args.commit;
    round.phase = RoundPhase::Open as u64;
    round.opened_at = clock.slot;
    round.sample_at = sample_at;

    sol_log(&format!(
        "Round {} opened at slot {}, sampling at slot {}",
        id, clock.slot, sample_at
    ));

    Ok(())
}
