//! End-to-end scenarios through the public API.

use shogi_core::{
    Board, Capture, Color, PieceKind, TurnPolicy, is_check, is_checkmate, legal_drops, sq,
};

#[test]
fn fresh_setup() {
    let board = Board::new();
    for color in Color::ALL {
        let king = board.king(color).unwrap();
        assert!(board.is_active(king, color));
        assert_eq!(board.king_square(color), Some(sq(color.home_row(), 4)));
        assert_eq!(
            board
                .active_pieces(color)
                .filter(|&id| board.piece(id).kind == PieceKind::King)
                .count(),
            1
        );
        assert_eq!(board.hand_pieces(color).count(), 0);
    }
    assert_eq!(board.at(sq(0, 4)), board.king(Color::White));
    assert_eq!(board.at(sq(8, 4)), board.king(Color::Black));
}

#[test]
fn white_pawn_capture_moves_piece_to_white_hand() {
    // Rows are fixed to the scenario; the move goes through the unchecked
    // mutation layer since a White pawn normally advances toward row 8.
    let mut board = Board::empty(Color::White);
    board.place(PieceKind::King, Color::White, sq(0, 4));
    board.place(PieceKind::King, Color::Black, sq(8, 4));
    let pawn = board.place(PieceKind::Pawn, Color::White, sq(6, 4));
    let bishop = board.place(PieceKind::Bishop, Color::Black, sq(5, 4));
    board.promote(bishop);

    let undo = board.move_piece(pawn, sq(5, 4));

    assert_eq!(
        undo.captured,
        Some(Capture {
            piece: bishop,
            was_promoted: true
        })
    );
    assert!(!board.piece(bishop).promoted);
    assert!(board.in_hand(bishop, Color::White));
    assert_eq!(board.hand_owner(bishop), Some(Color::White));
    assert!(!board.is_active(bishop, Color::Black));
    assert_eq!(board.at(sq(6, 4)), None);
    assert_eq!(board.at(sq(5, 4)), Some(pawn));
}

#[test]
fn black_pawn_drop_at_center() {
    let mut board = Board::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b P 1").unwrap();
    let pawn = board.hand_pieces(Color::Black).next().unwrap();
    assert!(legal_drops(&board, pawn, TurnPolicy::Enforce).contains(sq(4, 4)));

    board.drop_piece(pawn, sq(4, 4));

    assert_eq!(board.piece(pawn).color, Color::Black);
    assert!(board.is_active(pawn, Color::Black));
    assert!(!board.in_hand(pawn, Color::Black));
    assert_eq!(board.at(sq(4, 4)), Some(pawn));
}

#[test]
fn unblockable_rook_on_king_file_mates() {
    // White king on (0, 4) walled in by its own unhelpful pieces; Black
    // rook checks down the file and nothing can interpose or capture.
    let mut board = Board::from_sfen("3lkl3/3p1p3/9/9/9/9/4R4/9/K8 w - 1").unwrap();
    assert!(is_check(&board, Color::White));
    assert!(is_checkmate(&mut board, Color::White));
}

#[test]
fn nifu_holds_for_every_file() {
    let mut board = Board::new();
    // March the file-0 pawn up to take White's pawn, leaving every Black
    // pawn in place.
    let white_pawn = board.at(sq(2, 0)).unwrap();
    let black_pawn = board.at(sq(6, 0)).unwrap();
    for row in (2..6).rev() {
        board.move_piece(black_pawn, sq(row, 0));
    }
    assert!(board.in_hand(white_pawn, Color::Black));

    let drops = legal_drops(&board, white_pawn, TurnPolicy::Enforce);
    assert!(drops.is_empty(), "offered {:?}", drops.collect::<Vec<_>>());

    // A promoted pawn no longer closes its file.
    board.promote(black_pawn);
    let drops = legal_drops(&board, white_pawn, TurnPolicy::Enforce);
    assert!(!drops.is_empty());
    assert!(drops.iter().all(|s| s.col() == 0));
}
