use fairdice_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Reveals a round's seed. The seed is checked against the stored commitment
/// and, on success, the round value and winning square become available to
/// settlement and to any outside verifier. Idempotent after success.
pub fn process_reveal(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = Reveal::try_from_bytes(data)?;

    // Load accounts.
    let [signer_info, round_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    round_info.is_writable()?;
    let round = round_info.as_account_mut::<Round>(&fairdice_api::ID)?;

    round.reveal(args.seed)?;

    match round.outcome() {
        Some(outcome) => {
            sol_log(&format!(
                "Round {} revealed: square={} dice={}+{} sum={}",
                round.id, outcome.square, outcome.die1, outcome.die2, outcome.sum
            ));
        }
        None => {
            sol_log("Round value missing after reveal");
            return Err(ProgramError::InvalidAccountData);
        }
    }

    Ok(())
}
