use nacbrac::{DfsSolver, Error, Gameboard, SearchLimits, SlotRef, Solver};

const SCENARIO_A: &str = "_|8H,0C,0S,0S|0H,8D,0S,0D|10H,6H,10D,7H|0H,0S,9D,9H|7D,0H,0C,0H|9S,7C,8C,8S|0D,0D,0C,6D|6S,10S,0D,9C|7S,10C,6C,0C";
const SOLVED: &str = "_|10D,9C,8D,7C,6D|10H,9S,8H,7S,6H|10S,9D,8C,7D,6C|10C,9H,8S,7H,6S|0H,0H,0H,0H|0S,0S,0S,0S|0D,0D,0D,0D|0C,0C,0C,0C|";
// Solved layout with the 6D displaced to the empty slot.
const ONE_MOVE: &str = "_|10D,9C,8D,7C|10H,9S,8H,7S,6H|10S,9D,8C,7D,6C|10C,9H,8S,7H,6S|0H,0H,0H,0H|0S,0S,0S,0S|0D,0D,0D,0D|0C,0C,0C,0C|6D";
// Additionally the 6H parked on the wildcard slot.
const TWO_MOVE: &str = "6H|10D,9C,8D,7C|10H,9S,8H,7S|10S,9D,8C,7D,6C|10C,9H,8S,7H,6S|0H,0H,0H,0H|0S,0S,0S,0S|0D,0D,0D,0D|0C,0C,0C,0C|6D";

fn parse(s: &str) -> Gameboard {
    s.parse().expect("board parses")
}

fn solver() -> DfsSolver {
    DfsSolver::new(SearchLimits::default())
}

#[test]
fn already_solved_board_yields_no_moves() {
    let mut board = parse(SOLVED);
    assert!(board.solved());
    let solution = solver().solve(&mut board).expect("solve");
    assert!(solution.moves.is_empty());
}

#[test]
fn single_displacement_is_solved_in_one_move() {
    let mut board = parse(ONE_MOVE);
    let solution = solver().solve(&mut board).expect("solve");
    assert_eq!(solution.moves.len(), 1);
    assert_eq!(solution.moves[0].before, SlotRef::Field(8));
    assert_eq!(solution.moves[0].after, SlotRef::Field(0));
    assert!(board.solved(), "board is left in its solved state");
}

#[test]
fn wildcard_park_is_solved_in_two_moves() {
    let mut board = parse(TWO_MOVE);
    let solution = solver().solve(&mut board).expect("solve");
    let shape: Vec<(SlotRef, SlotRef)> = solution
        .moves
        .iter()
        .map(|m| (m.before, m.after))
        .collect();
    assert_eq!(
        shape,
        vec![
            (SlotRef::Field(8), SlotRef::Field(0)),
            (SlotRef::Wildcard, SlotRef::Field(1)),
        ]
    );
    assert!(board.solved());
    assert!(solution.stats.nodes >= 2);
}

#[test]
fn solution_replays_to_a_solved_board() {
    let mut board = parse(TWO_MOVE);
    let solution = solver().solve(&mut board).expect("solve");
    assert!(!solution.moves.is_empty());

    let mut replay = parse(TWO_MOVE);
    for mv in &solution.moves {
        replay.execute(mv);
    }
    assert!(replay.solved(), "replayed solution must reach a solved board");
}

#[test]
fn depth_bound_cuts_off_deep_solutions() {
    let mut board = parse(TWO_MOVE);
    let solution = DfsSolver::new(SearchLimits { max_depth: 0 })
        .solve(&mut board)
        .expect("solve");
    assert!(
        solution.moves.is_empty(),
        "a two-move solution cannot fit under depth bound 0"
    );
    // every executed move was undone on the way out
    assert_eq!(board.signature(), TWO_MOVE);
}

#[test]
fn solver_refuses_malcomposed_boards() {
    let mut board = parse(&SCENARIO_A.replace("8H", "9H"));
    let err = solver().solve(&mut board).expect_err("invalid composition");
    assert!(matches!(err, Error::Composition(_)), "got {err:?}");
}

#[test]
fn solver_is_deterministic() {
    let mut first = parse(TWO_MOVE);
    let mut second = parse(TWO_MOVE);
    let a = solver().solve(&mut first).expect("solve");
    let b = solver().solve(&mut second).expect("solve");
    assert_eq!(a.moves, b.moves);
    assert_eq!(a.stats.nodes, b.stats.nodes);
}
