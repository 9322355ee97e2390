//! Console blackjack against a scripted dealer.

use std::io;
use std::process::ExitCode;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use blackjack_table::{AceRule, GameOptions, Session, SessionError, TieRule};
use clap::Parser;
use log::{debug, error};

/// Play blackjack against the house at the console.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for the shuffle (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,
    /// Chips the player starts with.
    #[arg(long, default_value_t = 100)]
    chips: usize,
    /// Name of the dealer.
    #[arg(long, default_value = "Morgan")]
    dealer: String,
    /// Ace rule: `greedy` or `soft`.
    #[arg(long, default_value_t = AceRule::Greedy)]
    ace_rule: AceRule,
    /// Tie rule: `dealer` or `push`.
    #[arg(long, default_value_t = TieRule::DealerWins)]
    tie_rule: TieRule,
    /// Pause between phases of a round, in milliseconds.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
}

fn run(args: Args) -> Result<(), SessionError> {
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    debug!("starting session with seed {seed}");

    let options = GameOptions::default()
        .with_starting_chips(args.chips)
        .with_dealer_name(args.dealer)
        .with_ace_rule(args.ace_rule)
        .with_tie_rule(args.tie_rule);

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout())
        .with_delay(Duration::from_millis(args.delay_ms));

    let mut game = session.seat(options, seed)?;
    session.play(&mut game)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
