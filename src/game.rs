//! Turn-based state machine for one player-versus-computer session.

use core::fmt;

use log::{info, warn};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    ai::OpponentAi,
    board::Board,
    common::{BoardError, Position, ShotOutcome},
    config::BOARD_GENERATION_ATTEMPTS,
    placer::FleetPlacer,
    shot,
};

/// The two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Player,
    Opponent,
}

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Phase {
    Setup,
    PlayerTurn,
    OpponentTurn,
    GameOver(Side),
}

/// What a completed shot did, and where the game stands afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Turn {
    pub target: Position,
    pub outcome: ShotOutcome,
    pub phase: Phase,
}

/// Errors returned by `Game` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board-level failure: already shot, placement, targeting.
    Board(BoardError),
    /// Operation not valid in the current phase.
    WrongPhase(Phase),
    /// The game has finished; no further shots are accepted.
    GameOver(Side),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::WrongPhase(phase) => write!(f, "Not allowed during {:?}", phase),
            GameError::GameOver(winner) => write!(f, "Game is over, {:?} won", winner),
        }
    }
}

impl core::error::Error for GameError {}

/// Both boards, the opponent's targeting state and the turn bookkeeping.
pub struct Game<R> {
    phase: Phase,
    player: Board,
    opponent: Board,
    ai: OpponentAi<R>,
    round: u32,
}

impl Game<SmallRng> {
    /// Set up a game whose placement and opponent shots all derive from `seed`.
    pub fn seeded(seed: u64) -> Result<Self, GameError> {
        let mut placer = FleetPlacer::new(SmallRng::seed_from_u64(seed));
        let mut game = Game::new(SmallRng::seed_from_u64(seed.wrapping_add(1)));
        game.setup(&mut placer)?;
        Ok(game)
    }
}

impl<R: Rng> Game<R> {
    /// Empty game in `Setup`; the opponent will shoot using `ai_rng`.
    pub fn new(ai_rng: R) -> Self {
        Self {
            phase: Phase::Setup,
            player: Board::new(),
            opponent: Board::new(),
            ai: OpponentAi::new(ai_rng),
            round: 1,
        }
    }

    /// Start directly at `PlayerTurn` with pre-built boards.
    pub fn from_boards(player: Board, opponent: Board, ai: OpponentAi<R>) -> Self {
        Self {
            phase: Phase::PlayerTurn,
            player,
            opponent,
            ai,
            round: 1,
        }
    }

    /// Place both fleets and move to `PlayerTurn`.
    ///
    /// A board whose placement runs dry is thrown away and generated again,
    /// up to `BOARD_GENERATION_ATTEMPTS` times per side.
    pub fn setup<P: Rng>(&mut self, placer: &mut FleetPlacer<P>) -> Result<Phase, GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::WrongPhase(self.phase));
        }
        self.player = deploy(placer)?;
        self.opponent = deploy(placer)?;
        self.phase = Phase::PlayerTurn;
        info!("fleets deployed, player to move");
        Ok(self.phase)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rounds started so far, counting from 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::GameOver(side) => Some(side),
            _ => None,
        }
    }

    pub fn player_board(&self) -> &Board {
        &self.player
    }

    pub fn opponent_board(&self) -> &Board {
        &self.opponent
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        match self.phase {
            p if p == expected => Ok(()),
            Phase::GameOver(winner) => Err(GameError::GameOver(winner)),
            p => Err(GameError::WrongPhase(p)),
        }
    }

    /// Fire the player's shot at the opponent board.
    ///
    /// `AlreadyShot` leaves the phase untouched so the caller can ask again.
    pub fn submit_player_shot(&mut self, target: Position) -> Result<Turn, GameError> {
        self.expect_phase(Phase::PlayerTurn)?;
        let outcome = shot::fire(&mut self.opponent, target)?;
        self.phase = if self.opponent.has_ships_remaining() {
            Phase::OpponentTurn
        } else {
            info!("opponent fleet sunk in round {}", self.round);
            Phase::GameOver(Side::Player)
        };
        Ok(Turn {
            target,
            outcome,
            phase: self.phase,
        })
    }

    /// Let the scripted opponent fire at the player board.
    pub fn play_opponent_turn(&mut self) -> Result<Turn, GameError> {
        self.expect_phase(Phase::OpponentTurn)?;
        let target = self.ai.select_target()?;
        let outcome = shot::fire(&mut self.player, target)?;
        self.phase = if self.player.has_ships_remaining() {
            self.round += 1;
            Phase::PlayerTurn
        } else {
            info!("player fleet sunk in round {}", self.round);
            Phase::GameOver(Side::Opponent)
        };
        Ok(Turn {
            target,
            outcome,
            phase: self.phase,
        })
    }
}

fn deploy<P: Rng>(placer: &mut FleetPlacer<P>) -> Result<Board, GameError> {
    regenerate(BOARD_GENERATION_ATTEMPTS, || placer.generate())
}

/// Call `generate` until it yields a board, at most `attempts` times.
/// Only `PlacementExhausted` is retried.
fn regenerate(
    attempts: usize,
    mut generate: impl FnMut() -> Result<Board, BoardError>,
) -> Result<Board, GameError> {
    let mut last = BoardError::PlacementExhausted { length: 0 };
    for attempt in 1..=attempts {
        match generate() {
            Ok(board) => return Ok(board),
            Err(e @ BoardError::PlacementExhausted { .. }) => {
                warn!("board generation attempt {} failed: {}", attempt, e);
                last = e;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Err(last.into())
}
