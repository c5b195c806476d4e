//! Tests for the turn coordinator: alternation, latching, reset.

use tictactoe_engine::{Game, Mark, Square, Verdict};

/// Two cells outside `line`, used to keep O busy while X completes it.
fn filler_cells(line: [usize; 3]) -> [usize; 2] {
    let mut free = (0..9).filter(|i| !line.contains(i));
    [free.next().unwrap(), free.next().unwrap()]
}

#[test]
fn test_default_game_uses_stock_names() {
    let game = Game::default();
    assert_eq!(game.players()[0].name(), "Player 1");
    assert_eq!(game.players()[1].name(), "Player 2");
    assert_eq!(game.players()[0].mark(), &Mark::X);
    assert_eq!(game.players()[1].mark(), &Mark::O);
}

#[test]
fn test_first_player_moves_first() {
    let game = Game::new("Ada", "Grace");
    assert_eq!(game.current_player().name(), "Ada");
    assert_eq!(game.current_player().mark(), &Mark::X);
    assert!(!game.is_over());
    assert_eq!(game.verdict(), None);
}

#[test]
fn test_turn_alternates_on_success() {
    let mut game = Game::new("Ada", "Grace");

    assert_eq!(game.attempt_move(0), Ok(None));
    assert_eq!(game.current_player().name(), "Grace");

    assert_eq!(game.attempt_move(4), Ok(None));
    assert_eq!(game.current_player().name(), "Ada");
}

#[test]
fn test_turn_holds_on_occupied_square() {
    let mut game = Game::new("Ada", "Grace");
    game.attempt_move(0).unwrap();

    // Grace tries Ada's square: rejected, still Grace's turn.
    let board_before = game.board().clone();
    assert_eq!(game.attempt_move(0), Ok(None));
    assert_eq!(game.current_player().name(), "Grace");
    assert_eq!(game.board(), &board_before);
}

#[test]
fn test_turn_holds_on_invalid_index() {
    let mut game = Game::new("Ada", "Grace");
    let board_before = game.board().clone();

    let err = game.attempt_move(9).unwrap_err();
    assert_eq!(err.index, 9);
    assert_eq!(game.current_player().name(), "Ada");
    assert_eq!(game.board(), &board_before);
}

#[test]
fn test_win_end_to_end() {
    // X: 0, 1, 2 (top row); O: 4, 5.
    let mut game = Game::new("Ada", "Grace");
    assert_eq!(game.attempt_move(0), Ok(None));
    assert_eq!(game.attempt_move(4), Ok(None));
    assert_eq!(game.attempt_move(1), Ok(None));
    assert_eq!(game.attempt_move(5), Ok(None));

    let verdict = game.attempt_move(2).unwrap().expect("round should end");
    assert_eq!(verdict.winner().map(|p| p.name().as_str()), Some("Ada"));
    assert_eq!(verdict.to_string(), "Ada wins!");

    // The winner stays the current player for attribution.
    assert_eq!(game.current_player().name(), "Ada");
    assert!(game.is_over());
    assert_eq!(game.verdict(), Some(&verdict));

    let x = Square::Taken(Mark::X);
    let o = Square::Taken(Mark::O);
    let e = Square::Empty;
    assert_eq!(game.board().squares(), &[x, x, x, e, o, o, e, e, e]);
}

#[test]
fn test_every_line_wins_for_x() {
    const LINES: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    for line in LINES {
        let mut game = Game::new("Ada", "Grace");
        let fillers = filler_cells(line);

        game.attempt_move(line[0]).unwrap();
        game.attempt_move(fillers[0]).unwrap();
        game.attempt_move(line[1]).unwrap();
        game.attempt_move(fillers[1]).unwrap();
        let verdict = game.attempt_move(line[2]).unwrap();

        match verdict {
            Some(Verdict::Won(player)) => assert_eq!(player.mark(), &Mark::X),
            other => panic!("line {line:?} should win for X, got {other:?}"),
        }
    }
}

#[test]
fn test_second_player_can_win() {
    // X: 0, 1, 8; O: 3, 4, 5 (middle row).
    let mut game = Game::new("Ada", "Grace");
    for index in [0, 3, 1, 4, 8] {
        assert_eq!(game.attempt_move(index), Ok(None));
    }

    let verdict = game.attempt_move(5).unwrap().expect("round should end");
    assert_eq!(verdict.winner().map(|p| p.name().as_str()), Some("Grace"));
    assert_eq!(game.current_player().name(), "Grace");
}

#[test]
fn test_tie_game() {
    // Ends at X O X / X O O / O X X with no line completed.
    let mut game = Game::new("Ada", "Grace");
    for index in [0, 1, 2, 4, 3, 5, 7, 6] {
        assert_eq!(game.attempt_move(index), Ok(None));
    }

    let verdict = game.attempt_move(8).unwrap().expect("round should end");
    assert_eq!(verdict, Verdict::Tie);
    assert!(verdict.is_tie());
    assert_eq!(verdict.to_string(), "It's a tie!");
    assert_eq!(verdict.winner(), None);
    assert!(game.is_over());
}

#[test]
fn test_finished_round_ignores_moves() {
    let mut game = Game::new("Ada", "Grace");
    for index in [0, 4, 1, 5] {
        game.attempt_move(index).unwrap();
    }
    game.attempt_move(2).unwrap().expect("round should end");

    let board_before = game.board().clone();
    assert_eq!(game.attempt_move(3), Ok(None));
    assert_eq!(game.attempt_move(8), Ok(None));
    assert_eq!(game.board(), &board_before);
    assert!(game.is_over());
}

#[test]
fn test_reset_mid_round() {
    let mut game = Game::new("Ada", "Grace");
    game.attempt_move(0).unwrap();
    game.attempt_move(4).unwrap();

    game.reset();
    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(game.current_player().name(), "Ada");
    assert_eq!(game.verdict(), None);
}

#[test]
fn test_reset_after_finish_starts_fresh_round() {
    let mut game = Game::new("Ada", "Grace");
    for index in [0, 4, 1, 5, 2] {
        game.attempt_move(index).unwrap();
    }
    assert!(game.is_over());

    game.reset();
    assert!(!game.is_over());
    assert_eq!(game.current_player().name(), "Ada");

    // Squares from the previous round are claimable again.
    assert_eq!(game.attempt_move(0), Ok(None));
    assert_eq!(game.current_player().name(), "Grace");
}

#[test]
fn test_turn_banner() {
    let mut game = Game::new("Ada", "Grace");
    assert_eq!(game.turn_banner(), "Ada's turn");
    game.attempt_move(0).unwrap();
    assert_eq!(game.turn_banner(), "Grace's turn");
}

#[test]
fn test_game_state_serializes() {
    let mut game = Game::new("Ada", "Grace");
    game.attempt_move(4).unwrap();

    let value = serde_json::to_value(&game).unwrap();
    assert_eq!(value["players"][0]["mark"], "X");
    assert_eq!(value["players"][1]["name"], "Grace");
    assert_eq!(value["board"]["squares"][4]["Taken"], "X");
    assert_eq!(value["verdict"], serde_json::Value::Null);

    let restored: Game = serde_json::from_value(value).unwrap();
    assert_eq!(restored, game);
}
