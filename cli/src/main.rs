//! Operator and auditor tool for the fairdice program.
//!
//! Drives the round lifecycle (open/sample/reveal), places and settles bets,
//! and recomputes round results from the public audit record so any observer
//! can check a roll without trusting the operator.

use anyhow::{anyhow, bail, Context, Result};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
    signer::Signer,
    transaction::Transaction,
};

use fairdice_api::bets::BetKind;
use fairdice_api::sdk;
use fairdice_api::state::{
    commitment, derive_value, round_pda, select_square, table_pda, Round, Table,
};

const USAGE: &str = "\
fairdice <command> [options]

Commands:
  init        --min-bet <lamports> --max-bet <lamports> [--field-rule 0|1|2]
  open        --id <round> --seed <base58 32 bytes> [--delay <slots>]
  sample      --id <round>
  reveal      --id <round> --seed <base58 32 bytes>
  bet         --id <round> --kind <name> [--point <n>] --amount <lamports>
  settle      --id <round> [--authority <pubkey>]
  claim
  fund        --amount <lamports>
  show-table
  show-round  --id <round>
  verify      --seed <base58> --slot-hash <base58> [--commit <base58>]

Options:
  --rpc <url>        RPC endpoint (default http://127.0.0.1:8899)
  --keypair <path>   Signer keypair (default ~/.config/solana/id.json)
";

struct Args {
    command: String,
    flags: Vec<(String, String)>,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut argv = std::env::args().skip(1);
        let command = argv.next().context(USAGE)?;
        let mut flags = Vec::new();
        while let Some(flag) = argv.next() {
            let key = flag
                .strip_prefix("--")
                .with_context(|| format!("unexpected argument: {}", flag))?;
            let value = argv
                .next()
                .with_context(|| format!("missing value for --{}", key))?;
            flags.push((key.to_string(), value));
        }
        Ok(Self { command, flags })
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.flags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .with_context(|| format!("missing required --{}", key))
    }

    fn u64(&self, key: &str) -> Result<u64> {
        self.require(key)?
            .parse()
            .with_context(|| format!("--{} must be an integer", key))
    }
}

fn parse_bytes32(value: &str) -> Result<[u8; 32]> {
    let bytes = solana_sdk::bs58::decode(value)
        .into_vec()
        .map_err(|e| anyhow!("invalid base58: {}", e))?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| anyhow!("expected 32 bytes, got {}", bytes.len()))
}

fn parse_kind(name: &str) -> Result<BetKind> {
    Ok(match name {
        "pass" => BetKind::PassLine,
        "dont-pass" => BetKind::DontPass,
        "pass-odds" => BetKind::PassOdds,
        "dont-pass-odds" => BetKind::DontPassOdds,
        "come" => BetKind::Come,
        "dont-come" => BetKind::DontCome,
        "come-odds" => BetKind::ComeOdds,
        "dont-come-odds" => BetKind::DontComeOdds,
        "place" => BetKind::Place,
        "hardway" => BetKind::Hardway,
        "field" => BetKind::Field,
        "any-seven" => BetKind::AnySeven,
        "any-craps" => BetKind::AnyCraps,
        "yo" => BetKind::YoEleven,
        "aces" => BetKind::Aces,
        "twelve" => BetKind::Twelve,
        _ => bail!("unknown bet kind: {}", name),
    })
}

fn load_keypair(args: &Args) -> Result<Keypair> {
    let path = match args.get("keypair") {
        Some(path) => path.to_string(),
        None => {
            let home = std::env::var("HOME").context("HOME is not set")?;
            format!("{}/.config/solana/id.json", home)
        }
    };
    read_keypair_file(&path).map_err(|e| anyhow!("failed to read keypair {}: {}", path, e))
}

fn client(args: &Args) -> RpcClient {
    let url = args
        .get("rpc")
        .unwrap_or("http://127.0.0.1:8899")
        .to_string();
    RpcClient::new(url)
}

async fn send(client: &RpcClient, payer: &Keypair, ix: Instruction) -> Result<()> {
    let blockhash = client.get_latest_blockhash().await?;
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[payer],
        blockhash,
    );
    let signature = client.send_and_confirm_transaction(&tx).await?;
    println!("confirmed: {}", signature);
    Ok(())
}

async fn fetch_account<T: bytemuck::Pod>(client: &RpcClient, address: &Pubkey) -> Result<T> {
    let data = client.get_account_data(address).await?;
    // Steel accounts carry an 8-byte discriminator before the Pod payload.
    let payload = data
        .get(8..8 + std::mem::size_of::<T>())
        .context("account data too short")?;
    bytemuck::try_pod_read_unaligned(payload).map_err(|e| anyhow!("bad account data: {}", e))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse()?;
    match args.command.as_str() {
        "init" => {
            let payer = load_keypair(&args)?;
            let field_rule: u8 = args
                .get("field-rule")
                .unwrap_or("0")
                .parse()
                .context("--field-rule must be 0, 1 or 2")?;
            let ix = sdk::initialize(
                payer.pubkey(),
                args.u64("min-bet")?,
                args.u64("max-bet")?,
                field_rule,
            );
            send(&client(&args), &payer, ix).await
        }
        "open" => {
            let payer = load_keypair(&args)?;
            let client = client(&args);
            let id = args.u64("id")?;
            let seed = parse_bytes32(args.require("seed")?)?;
            let delay: u64 = args.get("delay").unwrap_or("150").parse()?;
            let sample_at = client.get_slot().await? + delay;
            let commit = commitment(&seed);
            println!(
                "round {}: commit {} sample_at {}",
                id,
                solana_sdk::bs58::encode(commit).into_string(),
                sample_at
            );
            let ix = sdk::open(payer.pubkey(), id, commit, sample_at);
            send(&client, &payer, ix).await
        }
        "sample" => {
            let payer = load_keypair(&args)?;
            let ix = sdk::sample(payer.pubkey(), args.u64("id")?);
            send(&client(&args), &payer, ix).await
        }
        "reveal" => {
            let payer = load_keypair(&args)?;
            let seed = parse_bytes32(args.require("seed")?)?;
            let ix = sdk::reveal(payer.pubkey(), args.u64("id")?, seed);
            send(&client(&args), &payer, ix).await
        }
        "bet" => {
            let payer = load_keypair(&args)?;
            let kind = parse_kind(args.require("kind")?)?;
            let point: u8 = args.get("point").unwrap_or("0").parse()?;
            let ix = sdk::place_bet(
                payer.pubkey(),
                args.u64("id")?,
                kind.into(),
                point,
                args.u64("amount")?,
            );
            send(&client(&args), &payer, ix).await
        }
        "settle" => {
            let payer = load_keypair(&args)?;
            let authority = match args.get("authority") {
                Some(address) => address.parse().map_err(|e| anyhow!("bad pubkey: {}", e))?,
                None => payer.pubkey(),
            };
            let ix = sdk::settle(payer.pubkey(), authority, args.u64("id")?);
            send(&client(&args), &payer, ix).await
        }
        "claim" => {
            let payer = load_keypair(&args)?;
            let ix = sdk::claim(payer.pubkey());
            send(&client(&args), &payer, ix).await
        }
        "fund" => {
            let payer = load_keypair(&args)?;
            let ix = sdk::fund_house(payer.pubkey(), args.u64("amount")?);
            send(&client(&args), &payer, ix).await
        }
        "show-table" => {
            let table: Table = fetch_account(&client(&args), &table_pda().0).await?;
            println!("{}", serde_json::to_string_pretty(&table)?);
            Ok(())
        }
        "show-round" => {
            let round: Round =
                fetch_account(&client(&args), &round_pda(args.u64("id")?).0).await?;
            println!("{}", serde_json::to_string_pretty(&round)?);
            Ok(())
        }
        "verify" => verify(&args),
        _ => bail!("unknown command: {}\n\n{}", args.command, USAGE),
    }
}

/// Recompute a round result offline from the public (commit, slot_hash, seed)
/// triple, using the same derivation the program runs.
fn verify(args: &Args) -> Result<()> {
    let seed = parse_bytes32(args.require("seed")?)?;
    let slot_hash = parse_bytes32(args.require("slot-hash")?)?;
    let computed_commit = commitment(&seed);
    if let Some(expected) = args.get("commit") {
        if parse_bytes32(expected)? != computed_commit {
            bail!("commitment mismatch: seed does not match the recorded commit");
        }
    }
    let value = derive_value(&seed, &slot_hash);
    let square = select_square(&value);
    let outcome = fairdice_api::dice::DiceOutcome::from_square(square)
        .context("square out of range")?;
    println!(
        "{}",
        serde_json::json!({
            "commit": solana_sdk::bs58::encode(computed_commit).into_string(),
            "value": solana_sdk::bs58::encode(value).into_string(),
            "square": square,
            "die1": outcome.die1,
            "die2": outcome.die2,
            "sum": outcome.sum,
        })
    );
    Ok(())
}
