//! Property tests for history and persistence: random play sequences must
//! keep the structural invariants, and a snapshot must always rebuild the
//! exact session it captured.

use proptest::prelude::*;

use loopline::{
    generate, ClueMap, Difficulty, Dims, GamePhase, GameSession, Opponent, FilterStrategy,
    PlayerId, Snapshot,
};

/// Drive a session with moves picked pseudo-randomly from the legal set.
fn play_random(session: &mut GameSession, picks: &[u8]) {
    for &pick in picks {
        if session.phase() != GamePhase::InProgress {
            break;
        }
        let legal = session.all_legal_moves();
        if legal.is_empty() {
            break;
        }
        let edge = legal[pick as usize % legal.len()];
        // stay solvent: bankrupting the mover would end the game instead of
        // placing the edge
        if session.edge_cost(edge) > session.budget(session.turn()) {
            break;
        }
        let (u, v) = edge.endpoints();
        session.apply_move(u, v, session.turn()).unwrap();
    }
}

proptest! {
    /// No vertex ever exceeds degree 2, whatever gets played.
    #[test]
    fn prop_degree_never_exceeds_two(picks in prop::collection::vec(any::<u8>(), 1..30)) {
        let mut session = GameSession::new(Dims::new(3, 3), ClueMap::default());
        play_random(&mut session, &picks);
        for vertex in session.dims().vertices() {
            prop_assert!(session.board().degree(vertex) <= 2);
        }
    }

    /// Replaying the log from scratch reproduces the live board.
    #[test]
    fn prop_log_replay_matches_board(picks in prop::collection::vec(any::<u8>(), 1..30)) {
        let mut session = GameSession::new(Dims::new(3, 3), ClueMap::default());
        play_random(&mut session, &picks);
        let replayed = session.log().replay(session.dims());
        prop_assert_eq!(&replayed, session.board());
    }

    /// Undoing everything empties the board; redoing everything restores it.
    #[test]
    fn prop_undo_redo_inverse(picks in prop::collection::vec(any::<u8>(), 1..20)) {
        let mut session = GameSession::new(Dims::new(3, 3), ClueMap::default());
        play_random(&mut session, &picks);
        // stop short of terminal positions, where history is frozen
        prop_assume!(session.phase() == GamePhase::InProgress);

        let board_before = session.board().clone();
        let turn_before = session.turn();

        let mut undone = 0;
        while session.undo() {
            undone += 1;
        }
        prop_assert!(session.board().is_empty());

        for _ in 0..undone {
            prop_assert!(session.redo());
        }
        prop_assert_eq!(session.board(), &board_before);
        prop_assert_eq!(session.turn(), turn_before);
    }

    /// Snapshot round-trips through bytes and rebuilds an equivalent session.
    #[test]
    fn prop_snapshot_round_trip(
        picks in prop::collection::vec(any::<u8>(), 0..25),
        seed in any::<u64>(),
    ) {
        let puzzle = generate(Dims::new(3, 3), Difficulty::Medium, seed);
        let mut session = puzzle.budgeted_session();
        play_random(&mut session, &picks);

        let snapshot = Snapshot::capture(&session);
        let decoded = Snapshot::from_bytes(&snapshot.to_bytes()).unwrap();
        prop_assert_eq!(&decoded, &snapshot);

        let restored = decoded.restore();
        prop_assert_eq!(restored.board(), session.board());
        prop_assert_eq!(restored.turn(), session.turn());
        prop_assert_eq!(restored.phase(), session.phase());
        prop_assert_eq!(restored.budget(PlayerId::ONE), session.budget(PlayerId::ONE));
        prop_assert_eq!(restored.budget(PlayerId::TWO), session.budget(PlayerId::TWO));
    }

    /// The opponent's choice depends only on the position, not on how the
    /// session object got there.
    #[test]
    fn prop_decision_survives_snapshot(picks in prop::collection::vec(any::<u8>(), 0..15)) {
        let mut session = GameSession::new(Dims::new(3, 3), ClueMap::default());
        play_random(&mut session, &picks);
        let restored = Snapshot::capture(&session).restore();

        let opponent = Opponent::new(FilterStrategy::Deadline);
        let a = opponent.decide(&session);
        let b = opponent.decide(&restored);
        match (a, b) {
            (Some(a), Some(b)) => {
                prop_assert_eq!(a.edge, b.edge);
                prop_assert_eq!(a.ranked, b.ranked);
            }
            (None, None) => {}
            _ => prop_assert!(false, "one session decided, the other did not"),
        }
    }
}
