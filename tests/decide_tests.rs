//! Opponent decision tests: determinism, legality, and heuristic shape
//! across both filter strategies.

use loopline::{
    Cell, ClueMap, Dims, FilterStrategy, GamePhase, GameSession, Opponent, PlayerId, Vertex,
};

fn v(r: u16, c: u16) -> Vertex {
    Vertex::new(r, c)
}

fn strategies() -> [FilterStrategy; 2] {
    [FilterStrategy::default(), FilterStrategy::Deadline]
}

/// The same position always produces the same decision, whichever filter
/// is configured.
#[test]
fn test_decisions_are_deterministic() {
    let mut clues = ClueMap::default();
    clues.insert(Cell::new(1, 1), 3);
    clues.insert(Cell::new(0, 2), 1);
    let mut session = GameSession::new(Dims::new(3, 3), clues);
    session.apply_move(v(0, 0), v(0, 1), PlayerId::ONE).unwrap();
    session.apply_move(v(2, 1), v(2, 2), PlayerId::TWO).unwrap();

    for strategy in strategies() {
        let opponent = Opponent::new(strategy);
        let first = opponent.decide(&session).unwrap();
        for _ in 0..10 {
            let again = opponent.decide(&session).unwrap();
            assert_eq!(again.edge, first.edge);
            assert_eq!(again.ranked, first.ranked);
        }
    }
}

/// Every move the opponent proposes must pass the validator, move after
/// move, until the game ends.
#[test]
fn test_opponent_only_plays_legal_moves() {
    let mut clues = ClueMap::default();
    clues.insert(Cell::new(0, 0), 2);
    clues.insert(Cell::new(2, 2), 0);
    let mut session = GameSession::new(Dims::new(3, 3), clues);
    let opponent = Opponent::new(FilterStrategy::default());

    for _ in 0..40 {
        if session.phase() != GamePhase::InProgress {
            break;
        }
        let Some(decision) = opponent.decide(&session) else {
            break;
        };
        let (u, w) = decision.edge.endpoints();
        session.apply_move(u, w, session.turn()).unwrap();
    }
}

/// Two opponents with different strategies can play each other to a
/// conclusion without ever producing an illegal move.
#[test]
fn test_self_play_terminates_cleanly() {
    let mut clues = ClueMap::default();
    clues.insert(Cell::new(1, 0), 1);
    let mut session = GameSession::new(Dims::new(2, 3), clues);
    let players = [
        Opponent::new(FilterStrategy::default()),
        Opponent::new(FilterStrategy::Deadline),
    ];

    for turn in 0..60 {
        if session.phase() != GamePhase::InProgress {
            break;
        }
        let Some(decision) = players[turn % 2].decide(&session) else {
            break;
        };
        let (u, w) = decision.edge.endpoints();
        session.apply_move(u, w, session.turn()).unwrap();
    }
}

/// After a removal the freed edge is a candidate again, but the opponent
/// never re-toggles the edge the previous move just touched.
#[test]
fn test_no_oscillation() {
    let mut session = GameSession::new(Dims::new(3, 3), ClueMap::default());
    session.apply_move(v(1, 1), v(1, 2), PlayerId::ONE).unwrap();
    session.apply_move(v(1, 1), v(1, 2), PlayerId::TWO).unwrap();

    for strategy in strategies() {
        let opponent = Opponent::new(strategy);
        let decision = opponent.decide(&session).unwrap();
        assert_ne!(decision.edge, loopline::Edge::new(v(1, 1), v(1, 2)));
    }
}

/// A cell one edge short of its clue target attracts the opponent.
#[test]
fn test_completion_attracts() {
    let mut clues = ClueMap::default();
    clues.insert(Cell::new(0, 0), 2);
    let mut session = GameSession::new(Dims::new(3, 3), clues);
    session.apply_move(v(0, 0), v(0, 1), PlayerId::ONE).unwrap();

    for strategy in strategies() {
        let opponent = Opponent::new(strategy);
        let decision = opponent.decide(&session).unwrap();
        assert!(Cell::new(0, 0).bounding_edges().contains(&decision.edge));
    }
}

/// The ranked list the decision exposes is sorted by descending score.
#[test]
fn test_ranked_list_is_sorted() {
    let mut clues = ClueMap::default();
    clues.insert(Cell::new(1, 1), 3);
    let session = GameSession::new(Dims::new(3, 3), clues);

    for strategy in strategies() {
        let opponent = Opponent::new(strategy);
        let decision = opponent.decide(&session).unwrap();
        for pair in decision.ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(decision.edge, decision.ranked[0].edge);
    }
}

/// No legal additions means no decision, never a panic.
#[test]
fn test_no_decision_when_stuck() {
    let mut clues = ClueMap::default();
    clues.insert(Cell::new(0, 0), 2);
    let mut session = GameSession::new(Dims::new(1, 1), clues);
    session.apply_move(v(0, 0), v(0, 1), PlayerId::ONE).unwrap();
    session.apply_move(v(1, 0), v(1, 1), PlayerId::TWO).unwrap();

    for strategy in strategies() {
        assert!(Opponent::new(strategy).decide(&session).is_none());
    }
}
