#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use naval_battle::{
    coord_to_string, init_logging, parse_coord, render_side_by_side, BoardError, FleetPlacer,
    Game, GameError, Phase, ShotOutcome, Side, Visibility,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Naval battle: you against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

#[cfg(feature = "std")]
fn outcome_text(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Hit => "Hit!",
        ShotOutcome::Miss => "Miss...",
    }
}

#[cfg(feature = "std")]
fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> anyhow::Result<String> {
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(anyhow::anyhow!("input closed")),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (placer_rng, ai_rng) = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            (SmallRng::seed_from_u64(s), SmallRng::seed_from_u64(s.wrapping_add(1)))
        }
        None => {
            let mut seed_rng = rand::rng();
            (SmallRng::from_rng(&mut seed_rng), SmallRng::from_rng(&mut seed_rng))
        }
    };

    let mut placer = FleetPlacer::new(placer_rng);
    let mut game = Game::new(ai_rng);
    game.setup(&mut placer)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        clear_screen();
        println!("===== ROUND {} =====\n", game.round());
        println!(
            "{}",
            render_side_by_side(
                game.player_board(),
                game.opponent_board(),
                "Your board",
                "Computer (hidden)",
                Visibility::Concealed,
            )
        );

        let turn = loop {
            print!("\nYour shot (A5, 5A...): ");
            let input = read_line(&mut lines)?;
            let Some(pos) = parse_coord(&input) else {
                println!("Invalid input.");
                continue;
            };
            match game.submit_player_shot(pos) {
                Ok(turn) => break turn,
                Err(GameError::Board(BoardError::AlreadyShot(_))) => {
                    println!("You already fired there.");
                }
                Err(e) => return Err(e.into()),
            }
        };
        println!("{}", outcome_text(turn.outcome));

        if turn.phase == Phase::GameOver(Side::Player) {
            println!("\nYou won!");
            println!(
                "{}",
                render_side_by_side(
                    game.player_board(),
                    game.opponent_board(),
                    "Your board",
                    "Computer (revealed)",
                    Visibility::Revealed,
                )
            );
            break;
        }

        let reply = game.play_opponent_turn()?;
        println!(
            "\nThe computer fires at {}: {}",
            coord_to_string(reply.target),
            outcome_text(reply.outcome)
        );
        print!("\nPress ENTER to continue...");
        read_line(&mut lines)?;

        if reply.phase == Phase::GameOver(Side::Opponent) {
            clear_screen();
            println!("\nThe computer sank your whole fleet.");
            println!(
                "{}",
                render_side_by_side(
                    game.player_board(),
                    game.opponent_board(),
                    "Your board (final)",
                    "Computer (revealed)",
                    Visibility::Revealed,
                )
            );
            break;
        }
    }
    Ok(())
}
