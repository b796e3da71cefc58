use super::*;
use crate::catalog::PieceKind;
use crate::types::sq;

fn lone(kind: PieceKind, color: Color, at: Square) -> (Board, PieceId) {
    let mut board = Board::empty(color);
    let id = board.place(kind, color, at);
    (board, id)
}

#[test]
fn test_path_between_row_and_diagonal() {
    let row: Vec<_> = path_between(sq(4, 1), sq(4, 5)).collect();
    assert_eq!(row, vec![sq(4, 2), sq(4, 3), sq(4, 4)]);

    let diag: Vec<_> = path_between(sq(7, 1), sq(4, 4)).collect();
    assert_eq!(diag, vec![sq(5, 3), sq(6, 2)]);

    // Order of the endpoints does not matter.
    assert_eq!(path_between(sq(4, 4), sq(7, 1)), path_between(sq(7, 1), sq(4, 4)));
}

#[test]
fn test_path_between_empty_when_unaligned_or_adjacent() {
    assert!(path_between(sq(0, 0), sq(2, 1)).is_empty());
    assert!(path_between(sq(3, 3), sq(3, 4)).is_empty());
    assert!(path_between(sq(3, 3), sq(4, 4)).is_empty());
    assert!(path_between(sq(3, 3), sq(3, 3)).is_empty());
}

#[test]
fn test_rook_attacks_empty_board() {
    let (board, id) = lone(PieceKind::Rook, Color::Black, sq(4, 4));
    assert_eq!(attack_set(&board, id).len(), 16);
}

#[test]
fn test_bishop_attacks_corner() {
    let (board, id) = lone(PieceKind::Bishop, Color::White, sq(0, 0));
    let set = attack_set(&board, id);
    assert_eq!(set.len(), 8);
    assert!(set.contains(sq(8, 8)));
}

#[test]
fn test_slider_stops_at_first_blocker() {
    let mut board = Board::empty(Color::Black);
    let rook = board.place(PieceKind::Rook, Color::Black, sq(8, 0));
    board.place(PieceKind::Pawn, Color::White, sq(5, 0));

    let set = attack_set(&board, rook);
    assert!(set.contains(sq(6, 0)));
    assert!(set.contains(sq(5, 0)));
    assert!(!set.contains(sq(4, 0)));

    assert!(attacks_square(&board, rook, sq(5, 0)));
    assert!(!attacks_square(&board, rook, sq(4, 0)));
}

#[test]
fn test_own_king_blocks_line() {
    let mut board = Board::empty(Color::Black);
    let rook = board.place(PieceKind::Rook, Color::White, sq(0, 4));
    board.place(PieceKind::King, Color::White, sq(2, 4));
    board.place(PieceKind::King, Color::Black, sq(8, 4));

    assert!(is_blocked(&board, sq(0, 4), sq(8, 4)));
    assert!(!attacks_square(&board, rook, sq(8, 4)));
    assert!(attacked(&board, sq(8, 4), Color::White).is_empty());
}

#[test]
fn test_pawn_direction_depends_on_color() {
    let (black, id) = lone(PieceKind::Pawn, Color::Black, sq(6, 4));
    assert!(attacks_square(&black, id, sq(5, 4)));
    assert!(!attacks_square(&black, id, sq(7, 4)));

    let (white, id) = lone(PieceKind::Pawn, Color::White, sq(2, 4));
    assert!(attacks_square(&white, id, sq(3, 4)));
    assert!(!attacks_square(&white, id, sq(1, 4)));
}

#[test]
fn test_knight_jumps_forward_only() {
    let (board, id) = lone(PieceKind::Knight, Color::Black, sq(8, 1));
    let set: Vec<_> = attack_set(&board, id).collect();
    assert_eq!(set, vec![sq(6, 0), sq(6, 2)]);

    let (board, id) = lone(PieceKind::Knight, Color::White, sq(0, 1));
    let set: Vec<_> = attack_set(&board, id).collect();
    assert_eq!(set, vec![sq(2, 0), sq(2, 2)]);
}

#[test]
fn test_lance_is_a_forward_ray() {
    let (board, id) = lone(PieceKind::Lance, Color::White, sq(0, 8));
    let set = attack_set(&board, id);
    assert_eq!(set.len(), 8);
    assert_eq!(set, SquareSet::col(8) & !SquareSet::from_square(sq(0, 8)));
}

#[test]
fn test_gold_and_silver_shapes() {
    let (board, id) = lone(PieceKind::Gold, Color::Black, sq(4, 4));
    let gold = attack_set(&board, id);
    assert_eq!(gold.len(), 6);
    assert!(gold.contains(sq(3, 3)));
    assert!(!gold.contains(sq(5, 3)));

    let (board, id) = lone(PieceKind::Silver, Color::Black, sq(4, 4));
    let silver = attack_set(&board, id);
    assert_eq!(silver.len(), 5);
    assert!(silver.contains(sq(5, 3)));
    assert!(!silver.contains(sq(4, 3)));
}

#[test]
fn test_dragon_adds_diagonal_steps() {
    let mut board = Board::empty(Color::Black);
    let id = board.place(PieceKind::Rook, Color::Black, sq(4, 4));
    board.pieces[id.index()].promoted = true;
    let set = attack_set(&board, id);
    assert_eq!(set.len(), 20);
    assert!(set.contains(sq(3, 3)));
    assert!(!set.contains(sq(2, 2)));
}

#[test]
fn test_attacked_lists_every_attacker() {
    let mut board = Board::empty(Color::Black);
    let king = sq(4, 4);
    board.place(PieceKind::King, Color::Black, king);
    let rook = board.place(PieceKind::Rook, Color::White, sq(0, 4));
    let knight = board.place(PieceKind::Knight, Color::White, sq(2, 3));
    board.place(PieceKind::Gold, Color::White, sq(0, 0));

    assert_eq!(attacked(&board, king, Color::White), vec![rook, knight]);
    assert!(is_attacked(&board, king, Color::White));
    assert!(!is_attacked(&board, king, Color::Black));
}

#[test]
fn test_hand_pieces_attack_nothing() {
    let mut board = Board::empty(Color::Black);
    let id = board.place_in_hand(PieceKind::Rook, Color::Black);
    assert!(attack_set(&board, id).is_empty());
    assert!(!attacks_square(&board, id, sq(4, 4)));
}
