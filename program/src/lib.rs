mod claim;
mod fund_house;
mod initialize;
mod open;
mod place_bet;
mod reveal;
mod sample;
mod settle;

pub mod engine;

use claim::*;
use fund_house::*;
use initialize::*;
use open::*;
use place_bet::*;
use reveal::*;
use sample::*;
use settle::*;

use fairdice_api::instruction::FairdiceInstruction;
use steel::*;

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let (ix, data) = parse_instruction(&fairdice_api::ID, program_id, data)?;

    match ix {
        FairdiceInstruction::Initialize => process_initialize(accounts, data)?,

        // Round lifecycle
        FairdiceInstruction::Open => process_open(accounts, data)?,
        FairdiceInstruction::Sample => process_sample(accounts, data)?,
        FairdiceInstruction::Reveal => process_reveal(accounts, data)?,

        // Betting
        FairdiceInstruction::PlaceBet => process_place_bet(accounts, data)?,
        FairdiceInstruction::Settle => process_settle(accounts, data)?,
        FairdiceInstruction::Claim => process_claim(accounts, data)?,
        FairdiceInstruction::FundHouse => process_fund_house(accounts, data)?,
    }

    Ok(())
}

entrypoint!(process_instruction);
