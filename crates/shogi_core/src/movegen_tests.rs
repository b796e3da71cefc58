use super::*;
use crate::types::sq;

fn held(board: &Board, owner: Color, kind: PieceKind) -> PieceId {
    board
        .hand_pieces(owner)
        .find(|&id| board.piece(id).kind == kind)
        .unwrap()
}

#[test]
fn test_startpos_actions() {
    let mut board = Board::new();
    assert_eq!(legal_actions(&mut board, Color::Black).len(), 30);
    assert_eq!(legal_actions(&mut board, Color::White).len(), 30);
}

#[test]
fn test_moves_empty_when_not_your_turn() {
    let board = Board::new();
    let white_pawn = board.at(sq(2, 4)).unwrap();
    assert!(legal_moves(&board, white_pawn, TurnPolicy::Enforce).is_empty());

    let moves: Vec<_> = legal_moves(&board, white_pawn, TurnPolicy::Ignore).collect();
    assert_eq!(moves, vec![sq(3, 4)]);
}

#[test]
fn test_moves_exclude_own_pieces_include_captures() {
    let board = Board::from_sfen("4k4/9/9/9/4p4/4P4/9/9/4K4 b - 1").unwrap();
    let pawn = board.at(sq(5, 4)).unwrap();
    let moves: Vec<_> = legal_moves(&board, pawn, TurnPolicy::Enforce).collect();
    assert_eq!(moves, vec![sq(4, 4)]);

    let king = board.at(sq(8, 4)).unwrap();
    assert_eq!(legal_moves(&board, king, TurnPolicy::Enforce).len(), 5);
}

#[test]
fn test_hand_piece_has_no_board_moves() {
    let board = Board::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b G 1").unwrap();
    let gold = held(&board, Color::Black, PieceKind::Gold);
    assert!(legal_moves(&board, gold, TurnPolicy::Ignore).is_empty());
}

#[test]
fn test_drops_fill_empty_squares() {
    let board = Board::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b G 1").unwrap();
    let gold = held(&board, Color::Black, PieceKind::Gold);
    assert_eq!(legal_drops(&board, gold, TurnPolicy::Enforce).len(), 79);
    // The side not to move gets nothing.
    let board = Board::from_sfen("4k4/9/9/9/9/9/9/9/4K4 w G 1").unwrap();
    let gold = held(&board, Color::Black, PieceKind::Gold);
    assert!(legal_drops(&board, gold, TurnPolicy::Enforce).is_empty());
    assert_eq!(legal_drops(&board, gold, TurnPolicy::Ignore).len(), 79);
}

#[test]
fn test_drop_rank_restrictions() {
    let board = Board::from_sfen("k8/9/9/9/9/9/9/9/8K b LNlnp 1").unwrap();

    let lance = held(&board, Color::Black, PieceKind::Lance);
    let drops = legal_drops(&board, lance, TurnPolicy::Ignore);
    assert!(drops.iter().all(|s| s.row() != 0));
    assert!(drops.contains(sq(1, 3)));

    let knight = held(&board, Color::Black, PieceKind::Knight);
    let drops = legal_drops(&board, knight, TurnPolicy::Ignore);
    assert!(drops.iter().all(|s| s.row() >= 2));

    let lance = held(&board, Color::White, PieceKind::Lance);
    let drops = legal_drops(&board, lance, TurnPolicy::Ignore);
    assert!(drops.iter().all(|s| s.row() != 8));

    let knight = held(&board, Color::White, PieceKind::Knight);
    let drops = legal_drops(&board, knight, TurnPolicy::Ignore);
    assert!(drops.iter().all(|s| s.row() <= 6));
    assert!(drops.contains(sq(6, 0)));
}

#[test]
fn test_nifu_blocks_pawn_file() {
    let board = Board::from_sfen("4k4/9/9/9/9/9/2P6/9/4K4 b P 1").unwrap();
    let pawn = held(&board, Color::Black, PieceKind::Pawn);
    let drops = legal_drops(&board, pawn, TurnPolicy::Enforce);
    assert!(drops.iter().all(|s| s.col() != 2));
    assert!(drops.contains(sq(4, 3)));
}

#[test]
fn test_promoted_pawn_does_not_count_for_nifu() {
    let board = Board::from_sfen("4k4/9/9/9/9/9/2+P6/9/4K4 b P 1").unwrap();
    let pawn = held(&board, Color::Black, PieceKind::Pawn);
    assert!(legal_drops(&board, pawn, TurnPolicy::Enforce).contains(sq(4, 2)));
}

#[test]
fn test_enemy_pawn_does_not_count_for_nifu() {
    let board = Board::from_sfen("4k4/9/2p6/9/9/9/9/9/4K4 b P 1").unwrap();
    let pawn = held(&board, Color::Black, PieceKind::Pawn);
    assert!(legal_drops(&board, pawn, TurnPolicy::Enforce).contains(sq(5, 2)));
}

#[test]
fn test_pawn_may_not_drop_in_front_of_enemy_king() {
    let board = Board::from_sfen("9/9/9/4k4/9/9/9/9/4K4 b P 1").unwrap();
    let pawn = held(&board, Color::Black, PieceKind::Pawn);
    let drops = legal_drops(&board, pawn, TurnPolicy::Enforce);
    // Black pawns attack toward row 0, so (4, 4) would give check.
    assert!(!drops.contains(sq(4, 4)));
    assert!(drops.contains(sq(4, 3)));
    assert!(drops.contains(sq(2, 4)));

    let board = Board::from_sfen("9/9/9/4k4/9/9/9/9/4K4 b G 1").unwrap();
    let gold = held(&board, Color::Black, PieceKind::Gold);
    assert!(legal_drops(&board, gold, TurnPolicy::Enforce).contains(sq(4, 4)));
}

#[test]
fn test_promotion_zone_rows() {
    assert_eq!(promotion_zone(Color::Black), SquareSet::rows(0, 2));
    assert_eq!(promotion_zone(Color::White), SquareSet::rows(6, 8));
}

#[test]
fn test_forced_and_optional_promotion() {
    let mut board = Board::from_sfen("4k4/P8/9/9/9/9/9/9/4K4 b - 1").unwrap();
    let pawn = board.at(sq(1, 0)).unwrap();
    let pawn_actions: Vec<_> = legal_actions(&mut board, Color::Black)
        .into_iter()
        .filter(|a| a.piece() == pawn)
        .collect();
    // Last rank: promotion only.
    assert_eq!(
        pawn_actions,
        vec![Action::Move {
            piece: pawn,
            to: sq(0, 0),
            promote: true
        }]
    );

    let mut board = Board::from_sfen("4k4/9/9/S8/9/9/9/9/4K4 b - 1").unwrap();
    let silver = board.at(sq(3, 0)).unwrap();
    let entering: Vec<_> = legal_actions(&mut board, Color::Black)
        .into_iter()
        .filter(|a| a.piece() == silver && a.to() == sq(2, 0))
        .collect();
    assert_eq!(entering.len(), 2);
    assert!(entering[0].is_promotion());
    assert!(!entering[1].is_promotion());
}

#[test]
fn test_safe_moves_filter_pinned_piece() {
    // Black gold on (7, 4) is pinned against its king by a White rook.
    let mut board = Board::from_sfen("4r4/9/9/9/9/9/9/4G4/4K4 b - 1").unwrap();
    let gold = board.at(sq(7, 4)).unwrap();
    let raw = legal_moves(&board, gold, TurnPolicy::Enforce);
    let safe: Vec<_> = safe_moves(&mut board, gold, TurnPolicy::Enforce).collect();
    assert!(raw.len() as usize > safe.len());
    assert_eq!(safe, vec![sq(6, 4)]);
}

#[test]
fn test_safe_drops_must_answer_check() {
    let mut board = Board::from_sfen("k3r4/9/9/9/9/9/9/9/4K4 b G 1").unwrap();
    let gold = held(&board, Color::Black, PieceKind::Gold);
    let safe = safe_drops(&mut board, gold, TurnPolicy::Enforce);
    let expected: SquareSet = (1..8).map(|r| sq(r, 4)).collect();
    assert_eq!(safe, expected);
}

#[test]
fn test_drops_deduplicated_by_kind() {
    let mut board = Board::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 2G 1").unwrap();
    let drops = legal_actions(&mut board, Color::Black)
        .into_iter()
        .filter(|a| a.is_drop())
        .count();
    assert_eq!(drops, 79);
}

#[test]
fn test_king_is_never_dropped() {
    let mut board = Board::empty(Color::Black);
    board.place(PieceKind::King, Color::Black, sq(8, 4));
    let king = board.place_in_hand(PieceKind::King, Color::Black);
    assert!(legal_drops(&board, king, TurnPolicy::Enforce).is_empty());
}
