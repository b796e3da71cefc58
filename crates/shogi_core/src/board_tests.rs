use super::*;

const START_SFEN: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

fn kinds_of(board: &Board, color: Color) -> Vec<PieceKind> {
    let mut kinds: Vec<PieceKind> = board
        .active_pieces(color)
        .map(|id| board.piece(id).kind)
        .collect();
    kinds.sort();
    kinds
}

#[test]
fn test_setup_places_full_armies() {
    let board = Board::new();
    for color in Color::ALL {
        let kinds = kinds_of(&board, color);
        assert_eq!(kinds.len(), 20);
        assert_eq!(kinds.iter().filter(|&&k| k == PieceKind::Pawn).count(), 9);
        assert_eq!(kinds.iter().filter(|&&k| k == PieceKind::King).count(), 1);
        assert_eq!(board.hand_pieces(color).count(), 0);
    }
    assert_eq!(board.piece_count(), 40);
    assert_eq!(board.side_to_move(), Color::Black);
    assert_eq!(board.ply(), 0);
}

#[test]
fn test_kings_on_center_of_home_rank() {
    let board = Board::new();
    let white_king = board.piece_at(sq(0, 4)).unwrap();
    let black_king = board.piece_at(sq(8, 4)).unwrap();
    assert_eq!((white_king.kind, white_king.color), (PieceKind::King, Color::White));
    assert_eq!((black_king.kind, black_king.color), (PieceKind::King, Color::Black));
    assert_eq!(board.king_square(Color::White), Some(sq(0, 4)));
    assert_eq!(board.king_square(Color::Black), Some(sq(8, 4)));
    assert!(!board.king_captured(Color::Black));
}

#[test]
fn test_rook_and_bishop_placement() {
    let board = Board::new();
    let at = |r, c| board.piece_at(sq(r, c)).map(|p| (p.kind, p.color));
    assert_eq!(at(7, 1), Some((PieceKind::Bishop, Color::Black)));
    assert_eq!(at(7, 7), Some((PieceKind::Rook, Color::Black)));
    assert_eq!(at(1, 1), Some((PieceKind::Rook, Color::White)));
    assert_eq!(at(1, 7), Some((PieceKind::Bishop, Color::White)));
}

#[test]
fn test_setup_is_idempotent() {
    let mut board = Board::new();
    board.setup();
    assert_eq!(board, Board::new());
}

#[test]
fn test_grid_and_pieces_agree() {
    let board = Board::new();
    for color in Color::ALL {
        for id in board.active_pieces(color) {
            let square = board.piece(id).square().unwrap();
            assert_eq!(board.at(square), Some(id));
            assert_eq!(board.piece(id).color, color);
        }
    }
    let occupied = Square::all().filter(|&s| board.at(s).is_some()).count();
    assert_eq!(occupied, 40);
}

#[test]
fn test_from_sfen_start_matches_setup() {
    let parsed = Board::from_sfen(START_SFEN).unwrap();
    let fresh = Board::new();
    for s in Square::all() {
        let a = parsed.piece_at(s).map(|p| (p.kind, p.color, p.promoted));
        let b = fresh.piece_at(s).map(|p| (p.kind, p.color, p.promoted));
        assert_eq!(a, b, "mismatch on {s}");
    }
    assert_eq!(parsed.side_to_move(), Color::Black);
    assert_eq!(parsed.ply(), 0);
}

#[test]
fn test_from_sfen_hands_and_promotion() {
    let board = Board::from_sfen("4k4/9/9/9/4+P4/9/9/9/4K4 w 2Pr 12").unwrap();
    let tokin = board.piece_at(sq(4, 4)).unwrap();
    assert!(tokin.promoted);
    assert_eq!(tokin.piece_type(), PieceType::Gold);

    let black_hand: Vec<_> = board.hand_pieces(Color::Black).collect();
    assert_eq!(black_hand.len(), 2);
    for id in black_hand {
        // Held as though captured from White.
        assert_eq!(board.piece(id).color, Color::White);
        assert_eq!(board.hand_owner(id), Some(Color::Black));
    }
    let white_hand: Vec<_> = board.hand_pieces(Color::White).collect();
    assert_eq!(white_hand.len(), 1);
    assert_eq!(board.piece(white_hand[0]).kind, PieceKind::Rook);

    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.ply(), 11);
}

#[test]
fn test_from_sfen_rejects_garbage() {
    for bad in [
        "",
        "9/9/9 b -",
        "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL x - 1",
        "lnsgkgsnx/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1",
        "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSN b - 1",
        "4k4/9/9/9/4+G4/9/9/9/4K4 b - 1",
        "4k4/9/9/9/9/9/9/9/4K4 b K 1",
        "99999999999999999999999999999999999999/9/9/9/9/9/9/9/9 b - 1",
        "4k4/9/9/9/9/9/9/9/4K4 b 65540P 1",
        "4k4/9/9/9/9/9/9/9/4K4 b 99999999999P 1",
        "4k4/9/9/9/9/9/9/9/4K4 b 19P 1",
        "4k4/9/9/9/9/9/9/9/4K4 b 3R 1",
        "4k4/9/9/9/9/9/9/9/4K4 b 2 1",
    ] {
        assert!(
            matches!(Board::from_sfen(bad), Err(ShogiError::InvalidSfen { .. })),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn test_place_in_hand_tags_opposite_color() {
    let mut board = Board::empty(Color::Black);
    let id = board.place_in_hand(PieceKind::Silver, Color::Black);
    assert!(board.in_hand(id, Color::Black));
    assert_eq!(board.piece(id).color, Color::White);
    assert_eq!(board.piece(id).square(), None);
    assert!(!board.is_active(id, Color::White));
}

#[test]
fn test_from_sfen_accepts_full_hand_counts() {
    let board = Board::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 18P2R 1").unwrap();
    assert_eq!(board.hand_pieces(Color::Black).count(), 20);
    assert!(!board.king_captured(Color::White));
}
