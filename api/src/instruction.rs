use steel::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum FairdiceInstruction {
    Initialize = 0,

    // Round lifecycle
    Open = 1,
    Sample = 2,
    Reveal = 3,

    // Betting
    PlaceBet = 4,
    Settle = 5,
    Claim = 6,
    FundHouse = 7,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Initialize {
    pub min_bet: [u8; 8],
    pub max_bet: [u8; 8],
    pub field_double: u8,
    pub _padding: [u8; 7],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Open {
    pub id: [u8; 8],
    pub commit: [u8; 32],
    pub sample_at: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Sample {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Reveal {
    pub seed: [u8; 32],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PlaceBet {
    pub kind: u8,
    /// The number the bet rides on (0 = none).
    pub point: u8,
    pub _padding: [u8; 6],
    pub amount: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Settle {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Claim {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FundHouse {
    pub amount: [u8; 8],
}

instruction!(FairdiceInstruction, Initialize);
instruction!(FairdiceInstruction, Open);
instruction!(FairdiceInstruction, Sample);
instruction!(FairdiceInstruction, Reveal);
instruction!(FairdiceInstruction, PlaceBet);
instruction!(FairdiceInstruction, Settle);
instruction!(FairdiceInstruction, Claim);
instruction!(FairdiceInstruction, FundHouse);
