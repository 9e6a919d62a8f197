#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use naval_battle::{FleetPlacer, Game, OpponentAi, Phase, ShotOutcome, Side, Turn};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde::Serialize;

/// Play a full game with a random autopilot in the player's seat and print
/// the result as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Args {
    /// Seeds board placement and the player's autopilot.
    seed1: u64,
    /// Seeds the computer opponent.
    seed2: u64,
}

#[cfg(feature = "std")]
#[derive(Default, Serialize)]
struct Tally {
    shots: usize,
    hits: usize,
}

#[cfg(feature = "std")]
impl Tally {
    fn record(&mut self, turn: &Turn) {
        self.shots += 1;
        if turn.outcome == ShotOutcome::Hit {
            self.hits += 1;
        }
    }
}

#[cfg(feature = "std")]
#[derive(Serialize)]
struct SimResult {
    winner: Side,
    rounds: u32,
    player: Tally,
    opponent: Tally,
    final_turn: Turn,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    naval_battle::init_logging();
    let args = Args::parse();

    let mut placer = FleetPlacer::new(SmallRng::seed_from_u64(args.seed1));
    let mut game = Game::new(SmallRng::seed_from_u64(args.seed2));
    game.setup(&mut placer)?;
    let mut autopilot = OpponentAi::new(placer.into_rng());

    let mut player = Tally::default();
    let mut opponent = Tally::default();
    let mut last = None;
    let winner = loop {
        match game.phase() {
            Phase::PlayerTurn => {
                let target = autopilot.select_target()?;
                let turn = game.submit_player_shot(target)?;
                player.record(&turn);
                last = Some(turn);
            }
            Phase::OpponentTurn => {
                let turn = game.play_opponent_turn()?;
                opponent.record(&turn);
                last = Some(turn);
            }
            Phase::GameOver(side) => break side,
            Phase::Setup => return Err(anyhow::anyhow!("game was not set up")),
        }
    };
    let final_turn = last.ok_or_else(|| anyhow::anyhow!("game ended without a shot"))?;

    let result = SimResult {
        winner,
        rounds: game.round(),
        player,
        opponent,
        final_turn,
    };
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
