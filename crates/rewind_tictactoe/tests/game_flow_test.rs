//! End-to-end tests of the game state machine.

use rewind_tictactoe::{
    Board, DrawPolicy, GameEvent, GameState, GameView, MoveOrder, Player, Position, Rejection,
    Status, apply, evaluate, is_draw, rules::LINES,
};

fn click(position: Position) -> GameEvent {
    GameEvent::CellClicked { position }
}

fn play(indices: &[usize]) -> GameState {
    let positions: Vec<Position> = indices
        .iter()
        .map(|&i| Position::from_index(i).expect("index 0-8"))
        .collect();
    GameState::replay(&positions).expect("legal sequence")
}

#[test]
fn test_empty_board_has_no_winner() {
    assert_eq!(evaluate(&Board::new()), None);
}

#[test]
fn test_top_row_win() {
    let state = play(&[0, 3, 1, 4, 2]);
    let won = evaluate(state.board()).expect("X completes the top row");
    assert_eq!(won.player, Player::X);
    assert_eq!(won.line.map(Position::to_index), [0, 1, 2]);

    let view = GameView::derive(&state, DrawPolicy::Announce);
    assert_eq!(view.status, Status::Winner(Player::X));
}

#[test]
fn test_click_on_occupied_cell_is_ignored() {
    let mut state = play(&[4]);
    let before = state.clone();

    assert_eq!(
        state.dispatch(click(Position::Center)),
        Err(Rejection::SquareOccupied(Position::Center))
    );
    assert_eq!(state.history().len(), before.history().len());
    assert_eq!(state.current_step(), before.current_step());
    assert_eq!(state.to_move(), before.to_move());
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut state = play(&[0, 3, 1, 4, 2]);
    let before = state.clone();
    assert_eq!(
        state.dispatch(click(Position::BottomRight)),
        Err(Rejection::GameDecided(Player::X))
    );
    assert_eq!(state, before);
}

#[test]
fn test_branching_discards_future() {
    let state = play(&[4, 0]);
    assert_eq!(state.current_step(), 2);
    assert_eq!(state.history().len(), 3);

    let state = apply(&state, GameEvent::JumpTo { step: 0 }).expect("in range");
    assert_eq!(state.history().len(), 3);

    let state = apply(&state, click(Position::BottomLeft)).expect("legal move");
    assert_eq!(state.history().len(), 2);
    assert_eq!(state.current_step(), 1);
    assert_eq!(state.to_move(), Player::O);
    assert_eq!(
        state.current().last_move(),
        Some(Position::BottomLeft.coordinate())
    );
    // The old step 1 (X at center) is gone.
    assert!(state.board().is_empty(Position::Center));
    assert_eq!(
        apply(&state, GameEvent::JumpTo { step: 2 }),
        Err(Rejection::StepOutOfRange { step: 2, len: 2 })
    );
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    // X O X / X O O / O X X
    let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(state.board().occupied(), 9);
    assert_eq!(evaluate(state.board()), None);
    assert!(is_draw(state.board()));

    let announced = GameView::derive(&state, DrawPolicy::Announce);
    assert_eq!(announced.status.to_string(), "Draw");
    assert_eq!(announced.winner(), None);

    let classic = GameView::derive(&state, DrawPolicy::FallThrough);
    assert_eq!(classic.status.to_string(), "Next player: O");
}

#[test]
fn test_toggle_twice_restores_order() {
    let state = play(&[4, 0, 8]);
    let original = GameView::derive(&state, DrawPolicy::Announce).moves;

    let once = apply(&state, GameEvent::ToggleOrder).expect("toggle");
    assert_eq!(once.order(), MoveOrder::Descending);
    let reversed = GameView::derive(&once, DrawPolicy::Announce).moves;
    assert_eq!(
        reversed.iter().map(|m| m.step).collect::<Vec<_>>(),
        vec![3, 2, 1, 0]
    );

    let twice = apply(&once, GameEvent::ToggleOrder).expect("toggle");
    assert_eq!(GameView::derive(&twice, DrawPolicy::Announce).moves, original);
    assert_eq!(twice.history(), state.history());
    assert_eq!(twice.current_step(), state.current_step());
}

#[test]
fn test_jump_is_idempotent() {
    let state = play(&[4, 0, 8, 2]);
    let once = apply(&state, GameEvent::JumpTo { step: 1 }).expect("in range");
    let twice = apply(&once, GameEvent::JumpTo { step: 1 }).expect("in range");
    assert_eq!(once, twice);
    assert_eq!(once.history(), state.history());
}

#[test]
fn test_history_shrinks_only_when_branching() {
    let events = [
        click(Position::Center),
        click(Position::TopLeft),
        GameEvent::JumpTo { step: 1 },
        GameEvent::ToggleOrder,
        click(Position::Center),
        GameEvent::JumpTo { step: 0 },
        click(Position::BottomRight),
        click(Position::BottomRight),
        GameEvent::JumpTo { step: 9 },
    ];

    let mut state = GameState::new();
    for event in events {
        let len_before = state.history().len();
        let was_behind = state.current_step() < len_before - 1;
        let _ = state.dispatch(event);
        let len_after = state.history().len();
        if len_after < len_before {
            assert!(was_behind, "history shrank on {event} from the latest step");
            assert!(matches!(event, GameEvent::CellClicked { .. }));
        }
    }
}

#[test]
fn test_winner_iff_uniform_triple() {
    // Walk every reachable position of every legal game and compare the
    // evaluator against a direct scan of the table.
    fn walk(state: &GameState, seen: &mut usize) {
        *seen += 1;
        let board = state.board();
        let uniform = LINES.iter().any(|line| {
            let first = board.get(line[0]);
            first.player().is_some() && line.iter().all(|&p| board.get(p) == first)
        });
        assert_eq!(evaluate(board).is_some(), uniform);
        for position in Position::ALL {
            if let Ok(next) = apply(state, GameEvent::CellClicked { position }) {
                walk(&next, seen);
            }
        }
    }

    let mut seen = 0;
    walk(&GameState::new(), &mut seen);
    // Number of nodes in the full tic-tac-toe game tree.
    assert_eq!(seen, 549_946);
}

#[test]
fn test_state_round_trips_through_json() {
    let state = apply(&play(&[4, 0, 8]), GameEvent::JumpTo { step: 1 }).expect("in range");
    let json = serde_json::to_string(&state).expect("serialize");
    let back: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, state);
}

#[test]
fn test_events_serialize_as_tagged_values() {
    let json = serde_json::to_value(GameEvent::JumpTo { step: 3 }).expect("serialize");
    assert_eq!(json, serde_json::json!({ "kind": "jump_to", "step": 3 }));
    let json = serde_json::to_value(GameEvent::ToggleOrder).expect("serialize");
    assert_eq!(json, serde_json::json!({ "kind": "toggle_order" }));
}

#[test]
fn test_inconsistent_json_is_rejected() {
    let valid = serde_json::to_value(play(&[4, 0])).expect("serialize");

    let mut past_end = valid.clone();
    past_end["current_step"] = serde_json::json!(5);
    let err = serde_json::from_value::<GameState>(past_end).unwrap_err();
    assert!(err.to_string().contains("valid index into history"));

    let mut wrong_turn = valid.clone();
    wrong_turn["to_move"] = serde_json::to_value(Player::O).expect("serialize");
    assert!(serde_json::from_value::<GameState>(wrong_turn).is_err());

    let mut no_snapshots = valid.clone();
    no_snapshots["history"]["snapshots"] = serde_json::json!([]);
    no_snapshots["current_step"] = serde_json::json!(0);
    no_snapshots["to_move"] = serde_json::to_value(Player::X).expect("serialize");
    assert!(serde_json::from_value::<GameState>(no_snapshots).is_err());

    let mut rewritten = valid.clone();
    rewritten["history"]["snapshots"][1]["last_move"] =
        serde_json::to_value(Position::TopLeft.coordinate()).expect("serialize");
    assert!(serde_json::from_value::<GameState>(rewritten).is_err());

    assert!(serde_json::from_value::<GameState>(valid).is_ok());
}
