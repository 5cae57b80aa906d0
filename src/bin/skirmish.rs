//! Skirmish - run an AI-vs-AI battle over the core set and report the result.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{info, LevelFilter};

use space_card_game::{
    AiConfig, Battle, BattleConfig, BattleSession, ContentRegistry, Controller, Deck, PlayerId, PlayerMap,
};

/// Skirmish - watch two AI players fight with the starter decks
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Shuffle seed
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Game seconds per tick
    #[arg(long, default_value = "0.25")]
    tick: f32,

    /// Stop after this many turns (default: 200)
    #[arg(short, long, default_value = "200")]
    turns: u32,

    /// Deck list both players use
    #[arg(short, long, default_value = "Starter")]
    deck: String,

    /// Log every action, not just turns and results
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    simple_logging::log_to_stderr(level);

    let registry = match ContentRegistry::core_set() {
        Ok(registry) => Arc::new(registry),
        Err(e) => {
            eprintln!("Error loading content: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(deck_list) = registry.deck_list(&args.deck) else {
        eprintln!(
            "Unknown deck '{}', available: {}",
            args.deck,
            registry.deck_names().join(", ")
        );
        return ExitCode::FAILURE;
    };

    let mut decks = PlayerMap::new(|_| Deck::new(args.deck.clone()));
    for (_, deck) in decks.iter_mut() {
        if let Err(e) = deck.create_from_keys(&registry, deck_list) {
            eprintln!("Error building deck: {e}");
            return ExitCode::FAILURE;
        }
    }

    let config = BattleConfig::default().with_seed(args.seed);
    let battle = match Battle::new(Arc::clone(&registry), config, decks) {
        Ok(battle) => battle,
        Err(e) => {
            eprintln!("Error setting up battle: {e}");
            return ExitCode::FAILURE;
        }
    };

    let ai = Controller::Ai(AiConfig::default());
    let mut session = BattleSession::new(battle, PlayerMap::from_pair(ai.clone(), ai));

    while !session.is_over() && session.battle().turn() <= args.turns {
        session.tick(args.tick);
    }

    let battle = session.battle();
    match battle.outcome() {
        Some(outcome) => {
            info!("{} wins on turn {}", outcome.winner, outcome.turn);
            println!("{} wins on turn {}", outcome.winner, outcome.turn);
        }
        None => {
            info!("No winner after {} turns", args.turns);
            println!("Draw after {} turns", args.turns);
        }
    }
    for player in PlayerId::both() {
        println!(
            "{player}: {} ships, {} cards in hand, {} left in deck",
            battle.player(player).ships_placed(),
            battle.player(player).hand().len(),
            battle.player(player).deck().len()
        );
    }

    ExitCode::SUCCESS
}
