use naval_battle::{
    Board, BoardError, Cell, Direction, FleetPlacer, Game, GameError, OpponentAi, Phase,
    Position, Ship, ShotOutcome, Side,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

fn single_cell_board(at: Position) -> Board {
    let mut board = Board::new();
    board.place(Ship::new(at, Direction::East, 1).unwrap()).unwrap();
    board
}

fn full_board(seed: u64) -> Board {
    FleetPlacer::new(SmallRng::seed_from_u64(seed)).generate().unwrap()
}

/// Fire at random untried cells for the player until the game ends,
/// checking the end condition after every shot.
fn play_out(game: &mut Game<SmallRng>, inputs: &mut SmallRng) -> Vec<Position> {
    let mut shots = Vec::new();
    loop {
        match game.phase() {
            Phase::PlayerTurn => {
                let target = pos(inputs.random_range(0..10), inputs.random_range(0..10));
                match game.submit_player_shot(target) {
                    Ok(turn) => {
                        shots.push(target);
                        assert_eq!(
                            matches!(turn.phase, Phase::GameOver(Side::Player)),
                            !game.opponent_board().has_ships_remaining()
                        );
                    }
                    Err(GameError::Board(BoardError::AlreadyShot(_))) => {
                        assert_eq!(game.phase(), Phase::PlayerTurn);
                    }
                    Err(e) => panic!("unexpected error {e}"),
                }
            }
            Phase::OpponentTurn => {
                let turn = game.play_opponent_turn().unwrap();
                assert_eq!(
                    matches!(turn.phase, Phase::GameOver(Side::Opponent)),
                    !game.player_board().has_ships_remaining()
                );
            }
            Phase::GameOver(_) => return shots,
            Phase::Setup => unreachable!(),
        }
    }
}

#[test]
fn test_setup_moves_to_player_turn() {
    let mut game = Game::new(SmallRng::seed_from_u64(2));
    assert_eq!(game.phase(), Phase::Setup);
    assert_eq!(
        game.submit_player_shot(pos(0, 0)).unwrap_err(),
        GameError::WrongPhase(Phase::Setup)
    );
    let mut placer = FleetPlacer::new(SmallRng::seed_from_u64(1));
    assert_eq!(game.setup(&mut placer).unwrap(), Phase::PlayerTurn);
    assert_eq!(game.player_board().ships().len(), 5);
    assert_eq!(game.opponent_board().ships().len(), 5);
    assert_ne!(game.player_board(), game.opponent_board());
    assert_eq!(
        game.setup(&mut placer).unwrap_err(),
        GameError::WrongPhase(Phase::PlayerTurn)
    );
}

#[test]
fn test_setup_fails_when_placement_budget_is_empty() {
    let mut game = Game::new(SmallRng::seed_from_u64(2));
    let mut placer = FleetPlacer::new(SmallRng::seed_from_u64(1)).with_limits(0, 0);
    assert_eq!(
        game.setup(&mut placer).unwrap_err(),
        GameError::Board(BoardError::PlacementExhausted { length: 5 })
    );
    assert_eq!(game.phase(), Phase::Setup);
}

#[test]
fn test_turns_alternate_and_rounds_count() {
    let mut game = Game::seeded(5).unwrap();
    assert_eq!(game.round(), 1);
    assert_eq!(
        game.play_opponent_turn().unwrap_err(),
        GameError::WrongPhase(Phase::PlayerTurn)
    );

    let first = game.submit_player_shot(pos(0, 0)).unwrap();
    assert_eq!(first.phase, Phase::OpponentTurn);
    assert_eq!(
        game.submit_player_shot(pos(0, 1)).unwrap_err(),
        GameError::WrongPhase(Phase::OpponentTurn)
    );

    let reply = game.play_opponent_turn().unwrap();
    assert_eq!(reply.phase, Phase::PlayerTurn);
    assert!(game.player_board().get(reply.target).is_fired());
    assert_eq!(game.round(), 2);
}

#[test]
fn test_repeat_shot_keeps_player_turn() {
    let mut game = Game::seeded(11).unwrap();
    game.submit_player_shot(pos(4, 4)).unwrap();
    game.play_opponent_turn().unwrap();
    let round = game.round();
    let snapshot = game.opponent_board().clone();

    assert_eq!(
        game.submit_player_shot(pos(4, 4)).unwrap_err(),
        GameError::Board(BoardError::AlreadyShot(pos(4, 4)))
    );
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.round(), round);
    assert_eq!(game.opponent_board(), &snapshot);
}

#[test]
fn test_sinking_last_cell_ends_game() {
    let target = pos(6, 2);
    let ai = OpponentAi::new(SmallRng::seed_from_u64(3));
    let mut game = Game::from_boards(full_board(8), single_cell_board(target), ai);

    let miss = game.submit_player_shot(pos(0, 9)).unwrap();
    assert_eq!(miss.outcome, ShotOutcome::Miss);
    assert_eq!(miss.phase, Phase::OpponentTurn);
    game.play_opponent_turn().unwrap();

    let turn = game.submit_player_shot(target).unwrap();
    assert_eq!(turn.outcome, ShotOutcome::Hit);
    assert_eq!(turn.phase, Phase::GameOver(Side::Player));
    assert_eq!(game.winner(), Some(Side::Player));
    assert_eq!(game.opponent_board().get(target), Cell::ShipHit);

    assert_eq!(
        game.submit_player_shot(pos(1, 1)).unwrap_err(),
        GameError::GameOver(Side::Player)
    );
    assert_eq!(
        game.play_opponent_turn().unwrap_err(),
        GameError::GameOver(Side::Player)
    );
}

#[test]
fn test_opponent_wins_exactly_when_fleet_gone() {
    // Same seed, same target sequence: hide the player's only ship under
    // the opponent's fifth shot.
    let mut predictor = OpponentAi::new(SmallRng::seed_from_u64(21));
    let targets: Vec<Position> = (0..5).map(|_| predictor.select_target().unwrap()).collect();
    let ship_cell = targets[4];

    let ai = OpponentAi::new(SmallRng::seed_from_u64(21));
    let mut game = Game::from_boards(single_cell_board(ship_cell), full_board(4), ai);
    let water: Vec<Position> = Position::all()
        .filter(|&p| game.opponent_board().get(p) == Cell::Water)
        .collect();

    for (i, &expected) in targets.iter().enumerate() {
        game.submit_player_shot(water[i]).unwrap();
        let reply = game.play_opponent_turn().unwrap();
        assert_eq!(reply.target, expected);
        if i < 4 {
            assert_eq!(reply.outcome, ShotOutcome::Miss);
            assert_eq!(reply.phase, Phase::PlayerTurn);
            assert!(game.player_board().has_ships_remaining());
        } else {
            assert_eq!(reply.outcome, ShotOutcome::Hit);
            assert_eq!(reply.phase, Phase::GameOver(Side::Opponent));
            assert!(!game.player_board().has_ships_remaining());
        }
    }
    assert_eq!(game.winner(), Some(Side::Opponent));
    assert_eq!(game.round(), 5);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn game_over_iff_fleet_sunk(seed in any::<u64>()) {
        let mut game = Game::seeded(seed).unwrap();
        let mut inputs = SmallRng::seed_from_u64(seed ^ 0xA5A5);
        play_out(&mut game, &mut inputs);
        match game.winner() {
            Some(Side::Player) => {
                prop_assert!(!game.opponent_board().has_ships_remaining());
                prop_assert!(game.player_board().has_ships_remaining());
            }
            Some(Side::Opponent) => {
                prop_assert!(!game.player_board().has_ships_remaining());
                prop_assert!(game.opponent_board().has_ships_remaining());
            }
            None => prop_assert!(false, "game did not finish"),
        }
    }

    #[test]
    fn seeded_games_replay_identically(seed in any::<u64>()) {
        let mut a = Game::seeded(seed).unwrap();
        let mut b = Game::seeded(seed).unwrap();
        let shots_a = play_out(&mut a, &mut SmallRng::seed_from_u64(seed));
        let shots_b = play_out(&mut b, &mut SmallRng::seed_from_u64(seed));
        prop_assert_eq!(shots_a, shots_b);
        prop_assert_eq!(a.player_board(), b.player_board());
        prop_assert_eq!(a.opponent_board(), b.opponent_board());
        prop_assert_eq!(a.winner(), b.winner());
        prop_assert_eq!(a.round(), b.round());
    }
}
