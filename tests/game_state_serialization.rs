#![cfg(feature = "std")]

use naval_battle::{Cell, Direction, Game, Phase, Position, ShotOutcome, Side, Turn};
use serde_json::{json, to_value};

#[test]
fn turn_serializes_with_phase_and_position() {
    let turn = Turn {
        target: Position::new(3, 7).unwrap(),
        outcome: ShotOutcome::Hit,
        phase: Phase::GameOver(Side::Player),
    };
    assert_eq!(
        to_value(turn).unwrap(),
        json!({
            "target": {"row": 3, "col": 7},
            "outcome": "Hit",
            "phase": {"GameOver": "Player"},
        })
    );
}

#[test]
fn enums_serialize_as_variant_names() {
    assert_eq!(to_value(Cell::WaterHit).unwrap(), json!("WaterHit"));
    assert_eq!(to_value(Direction::West).unwrap(), json!("West"));
    assert_eq!(to_value(Phase::OpponentTurn).unwrap(), json!("OpponentTurn"));
}

#[test]
fn played_turn_serializes() {
    let mut game = Game::seeded(3).unwrap();
    let turn = game.submit_player_shot(Position::new(0, 0).unwrap()).unwrap();
    let value = to_value(turn).unwrap();
    assert_eq!(value["target"], json!({"row": 0, "col": 0}));
    assert_eq!(value["phase"], json!("OpponentTurn"));
}
