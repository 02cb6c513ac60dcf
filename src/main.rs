//! Astro Grid entry point
//!
//! Headless demo loop: runs a seeded game with a simple autopilot, drains
//! events into stats and achievements, and prints textual frames.
//!
//! Usage: `astro-grid [--seed N] [--config path.json] [--ticks N]`

use std::path::PathBuf;
use std::process::ExitCode;

use astro_grid::achievements::AchievementBook;
use astro_grid::sim::{
    Command, Direction, EntityKind, GamePhase, GameState, TickInput, tick,
};
use astro_grid::{GameConfig, GameError, PlayerStats};

struct Args {
    seed: u64,
    config: Option<PathBuf>,
    max_ticks: u64,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: 1,
        config: None,
        max_ticks: 2000,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .ok_or_else(|| format!("{} requires a value", name))
        };
        match flag.as_str() {
            "--seed" => args.seed = value("--seed")?.parse().map_err(|e| format!("{}", e))?,
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            "--ticks" => {
                args.max_ticks = value("--ticks")?.parse().map_err(|e| format!("{}", e))?
            }
            other => return Err(format!("unknown flag {:?}", other)),
        }
    }
    Ok(args)
}

/// Pick this tick's commands for the demo pilot
///
/// Chases the column of the lowest descending threat, sidesteps when the
/// threat is about to reach the ship's row, and fires on every other tick.
fn autopilot(state: &GameState) -> TickInput {
    let mut commands = Vec::new();

    let threat = state
        .entities
        .iter()
        .filter(|e| matches!(e.kind, EntityKind::Asteroid | EntityKind::Enemy))
        .max_by_key(|e| e.pos.y);

    if let Some(threat) = threat {
        let ship = state.ship.pos;
        let imminent = threat.pos.x == ship.x && threat.pos.y >= ship.y - 2;
        if imminent {
            let dodge = if ship.x + 1 < state.config.width {
                Direction::Right
            } else {
                Direction::Left
            };
            commands.push(Command::Move(dodge));
        } else if threat.pos.x < ship.x {
            commands.push(Command::Move(Direction::Left));
        } else if threat.pos.x > ship.x {
            commands.push(Command::Move(Direction::Right));
        }
    }

    if state.time_ticks % 2 == 0 {
        commands.push(Command::Fire);
    }

    TickInput { commands }
}

fn run(args: Args) -> Result<(), GameError> {
    let config = match &args.config {
        Some(path) => GameConfig::load_from(path)?,
        None => GameConfig::default(),
    };
    let mut game = GameState::new(config, args.seed)?;
    let mut stats = PlayerStats::new();
    let mut book = AchievementBook::new();

    log::info!("Starting run with seed {}", args.seed);

    while game.time_ticks < args.max_ticks {
        let input = autopilot(&game);
        tick(&mut game, &input);

        let events = game.drain_events();
        for event in &events {
            log::info!("{}", event);
        }
        stats.apply_all(&events, game.time_ticks);
        book.refresh(&stats);

        if game.time_ticks % 10 == 0 {
            println!("{}", game.frame());
        }
        if game.phase == GamePhase::GameOver {
            break;
        }
    }

    println!("{}", game.frame());
    println!("Shots Fired: {}", stats.shots_fired);
    println!("Shots Hit: {}", stats.shots_hit);
    println!("Accuracy: {:.0}%", stats.accuracy() * 100.0);
    println!("Ticks Survived: {}", stats.ticks_survived);
    for achievement in book.all() {
        println!("{}", achievement);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: astro-grid [--seed N] [--config path.json] [--ticks N]");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
