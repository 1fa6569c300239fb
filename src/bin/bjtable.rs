//! Console blackjack against the house.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::console::Console;
use bjtable::{
    Decision, DecisionPolicy, PlayError, PlayerId, RoundPhase, RoundResult, Table, TableOptions,
};
use clap::Parser;

type BoxErr = Box<dyn core::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "bjtable", about = "Play blackjack against the house")]
struct Args {
    /// Number of players (1-4); asked interactively when omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    players: Option<u8>,

    /// Minimum bet
    #[arg(long, default_value_t = 25)]
    min_bet: usize,

    /// Starting bankroll for every player
    #[arg(long, default_value_t = 500)]
    bankroll: usize,

    /// Total the dealer stands on
    #[arg(long, default_value_t = 17)]
    dealer_stands_at: u8,

    /// Shuffle seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match run(&args, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write>(args: &Args, console: &mut Console<R, W>) -> Result<(), BoxErr> {
    let options = TableOptions::default()
        .with_minimum_bet(args.min_bet)
        .with_starting_bankroll(args.bankroll)
        .with_dealer_stands_at(args.dealer_stands_at);

    console.say("Game Started!")?;

    let count = match args.players {
        Some(count) => usize::from(count),
        None => match console.ask_player_count(options.max_players)? {
            Some(count) => count,
            None => return Ok(()),
        },
    };

    let mut names = Vec::with_capacity(count);
    for seat in 1..=count {
        names.push(console.ask_name(seat)?.unwrap_or_default());
    }

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("shuffling with seed {seed}");

    let mut table = Table::new(options, names, seed)?;

    loop {
        table.start_round()?;
        console.report(table.take_events())?;

        let seated: Vec<PlayerId> = table.players().iter().map(|p| p.id()).collect();
        for player_id in seated {
            if console.ask_bet(&mut table, player_id)?.is_none() {
                table.abort_round();
                console.say("Thanks for playing!")?;
                return Ok(());
            }
        }
        console.report(table.take_events())?;

        match play_hand(&mut table, console)? {
            Ok(result) => {
                for player in &result.players {
                    console.say(format_args!(
                        "{}: net {:+}, bankroll ${}.",
                        player.name,
                        player.net(),
                        player.bankroll
                    ))?;
                }
            }
            Err(err) => {
                console.report(table.take_events())?;
                console.say(format_args!("Round abandoned: {err}."))?;
                table.abort_round();
            }
        }

        if table.is_over() {
            console.say("No players left at the table. Thanks for playing!")?;
            break;
        }
        if !console.ask_restart()? {
            console.say("Thanks for playing!")?;
            break;
        }
    }

    log::info!(
        "session over after {} rounds, house kept ${}",
        table.rounds_played(),
        table.house_take()
    );
    Ok(())
}

/// Plays one dealt round, printing every step as it happens.
fn play_hand<R: BufRead, W: Write>(
    table: &mut Table,
    console: &mut Console<R, W>,
) -> io::Result<Result<RoundResult, PlayError>> {
    if let Err(err) = table.deal() {
        return Ok(Err(err.into()));
    }
    console.report(table.take_events())?;

    while let Some(view) = table.turn_view() {
        let player_id = view.participant.id();
        let decision = console.decide(&view);

        let acted = match decision {
            Decision::Hit => table.hit(player_id).map(|_| ()),
            Decision::Stand => table.stand(player_id),
        };
        console.report(table.take_events())?;
        if let Err(err) = acted {
            return Ok(Err(err.into()));
        }
    }

    if table.phase() == RoundPhase::DealerTurn {
        let played = table.dealer_play();
        console.report(table.take_events())?;
        if let Err(err) = played {
            return Ok(Err(err.into()));
        }
    }

    let settled = table.settle();
    console.report(table.take_events())?;
    Ok(settled.map_err(Into::into))
}
