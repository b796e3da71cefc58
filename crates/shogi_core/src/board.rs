use std::collections::BTreeSet;

use crate::catalog::{PieceKind, PieceType, Step};
use crate::error::{Result, ShogiError};
use crate::types::*;

/// A single piece instance.
///
/// `color` is the color the piece currently plays for. A captured piece
/// keeps its old color until it is dropped by the side holding it, so while
/// it sits in a hand `color` and the hand owner differ.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub promoted: bool,
    pub(crate) square: Option<Square>,
}

impl Piece {
    /// Current square, or `None` while the piece is held in a hand.
    pub fn square(&self) -> Option<Square> {
        self.square
    }

    pub fn piece_type(&self) -> PieceType {
        self.kind.piece_type(self.promoted)
    }

    pub fn steps(&self) -> &'static [Step] {
        self.piece_type().steps()
    }

    pub fn value(&self) -> f32 {
        self.kind.value(self.promoted)
    }
}

/// Ground truth of a game: the grid, both hands and whose turn it is.
///
/// Pieces live in an arena indexed by [`PieceId`]; the grid, the active sets
/// and the hands only hold ids. Every piece is in exactly one place: on the
/// grid (and in its color's active set) or in one hand.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    pub(crate) pieces: Vec<Piece>,
    pub(crate) grid: [[Option<PieceId>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    pub(crate) active: [BTreeSet<PieceId>; 2],
    pub(crate) hands: [BTreeSet<PieceId>; 2],
    pub(crate) kings: [Option<PieceId>; 2],
    pub(crate) side_to_move: Color,
    pub(crate) ply: u32,
}

const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Lance,
    PieceKind::Knight,
    PieceKind::Silver,
    PieceKind::Gold,
    PieceKind::King,
    PieceKind::Gold,
    PieceKind::Silver,
    PieceKind::Knight,
    PieceKind::Lance,
];

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position, Black to move.
    pub fn new() -> Self {
        let mut board = Board::empty(Color::Black);
        board.setup();
        board
    }

    /// A board with no pieces at all.
    pub fn empty(side_to_move: Color) -> Self {
        Board {
            pieces: Vec::new(),
            grid: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            active: [BTreeSet::new(), BTreeSet::new()],
            hands: [BTreeSet::new(), BTreeSet::new()],
            kings: [None, None],
            side_to_move,
            ply: 0,
        }
    }

    /// Place both full armies. Any previous content is discarded, so calling
    /// this twice yields the same board as calling it once.
    pub fn setup(&mut self) {
        let side = self.side_to_move;
        *self = Board::empty(side);

        for color in Color::ALL {
            let home = color.home_row();
            let pawn_row = (home as i8 + 2 * color.forward()) as u8;
            let second_row = (home as i8 + color.forward()) as u8;

            for (col, &kind) in BACK_RANK.iter().enumerate() {
                self.place(kind, color, sq(home, col as u8));
            }
            // Bishop sits on the player's left, rook on the right.
            let (bishop_col, rook_col) = match color {
                Color::Black => (1, 7),
                Color::White => (7, 1),
            };
            self.place(PieceKind::Bishop, color, sq(second_row, bishop_col));
            self.place(PieceKind::Rook, color, sq(second_row, rook_col));
            for col in 0..BOARD_SIZE {
                self.place(PieceKind::Pawn, color, sq(pawn_row, col));
            }
        }
    }

    /// Put a new unpromoted piece on an empty square. Position setup only.
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) -> PieceId {
        assert!(
            self.at(square).is_none(),
            "place: square {square} is already occupied"
        );
        let id = self.alloc(Piece {
            kind,
            color,
            promoted: false,
            square: Some(square),
        });
        self.grid[square.row() as usize][square.col() as usize] = Some(id);
        self.active[color.idx()].insert(id);
        if kind == PieceKind::King && self.kings[color.idx()].is_none() {
            self.kings[color.idx()] = Some(id);
        }
        id
    }

    /// Put a new piece into `owner`'s hand, tagged with the opposite color
    /// as though `owner` had captured it. Position setup only.
    pub fn place_in_hand(&mut self, kind: PieceKind, owner: Color) -> PieceId {
        let id = self.alloc(Piece {
            kind,
            color: owner.opposite(),
            promoted: false,
            square: None,
        });
        self.hands[owner.idx()].insert(id);
        id
    }

    /// Override whose turn it is. Position setup only.
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    fn alloc(&mut self, piece: Piece) -> PieceId {
        let Ok(raw) = u16::try_from(self.pieces.len()) else {
            panic!("piece arena is full");
        };
        let id = PieceId(raw);
        self.pieces.push(piece);
        id
    }

    /// Parse an SFEN position: `<board> <side> <hands> [<move number>]`.
    ///
    /// The first rank of the string is row 0 (White's home rank); uppercase
    /// letters are Black. Hand pieces are tagged with the opposite color of
    /// the hand that holds them.
    pub fn from_sfen(sfen: &str) -> Result<Self> {
        let invalid = |message: String| ShogiError::InvalidSfen { message };
        let parts: Vec<&str> = sfen.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(invalid(format!(
                "expected at least 3 fields, got {}",
                parts.len()
            )));
        }

        let side = match parts[1] {
            "b" => Color::Black,
            "w" => Color::White,
            other => return Err(invalid(format!("bad side to move '{other}'"))),
        };
        let mut board = Board::empty(side);

        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(invalid(format!("expected 9 ranks, got {}", rows.len())));
        }
        for (row, rank) in rows.iter().enumerate() {
            let mut col: u8 = 0;
            let mut promote_next = false;
            for ch in rank.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col = col
                        .checked_add(d as u8)
                        .filter(|&c| c <= BOARD_SIZE)
                        .ok_or_else(|| invalid(format!("rank {} overflows", row + 1)))?;
                    continue;
                }
                if ch == '+' {
                    promote_next = true;
                    continue;
                }
                let kind = PieceKind::from_symbol(ch)
                    .ok_or_else(|| invalid(format!("bad piece letter '{ch}'")))?;
                let square = Square::new(row as u8, col)
                    .ok_or_else(|| invalid(format!("rank {} overflows", row + 1)))?;
                let color = if ch.is_ascii_uppercase() {
                    Color::Black
                } else {
                    Color::White
                };
                let id = board.place(kind, color, square);
                if promote_next {
                    if !kind.can_promote() {
                        return Err(invalid(format!("'{ch}' cannot be promoted")));
                    }
                    board.pieces[id.index()].promoted = true;
                    promote_next = false;
                }
                col += 1;
            }
            if col != BOARD_SIZE {
                return Err(invalid(format!("rank {} has {col} files", row + 1)));
            }
        }

        if parts[2] != "-" {
            let mut count: u32 = 0;
            for ch in parts[2].chars() {
                if let Some(d) = ch.to_digit(10) {
                    count = count
                        .checked_mul(10)
                        .and_then(|c| c.checked_add(d))
                        .ok_or_else(|| invalid(format!("hand count too large in '{}'", parts[2])))?;
                    continue;
                }
                let kind = PieceKind::from_symbol(ch)
                    .filter(|&k| k != PieceKind::King)
                    .ok_or_else(|| invalid(format!("bad hand piece '{ch}'")))?;
                if count > kind.total_count() {
                    return Err(invalid(format!(
                        "{count} {kind:?} in hand, only {} exist",
                        kind.total_count()
                    )));
                }
                let owner = if ch.is_ascii_uppercase() {
                    Color::Black
                } else {
                    Color::White
                };
                for _ in 0..count.max(1) {
                    board.place_in_hand(kind, owner);
                }
                count = 0;
            }
            if count != 0 {
                return Err(invalid(format!("hand count {count} without a piece")));
            }
        }

        if let Some(n) = parts.get(3) {
            let n: u32 = n
                .parse()
                .map_err(|_| invalid(format!("bad move number '{n}'")))?;
            board.ply = n.saturating_sub(1);
        }

        Ok(board)
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// Id of the piece on `square`, if any.
    #[inline]
    pub fn at(&self, square: Square) -> Option<PieceId> {
        self.grid[square.row() as usize][square.col() as usize]
    }

    /// Piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.at(square).map(|id| &self.pieces[id.index()])
    }

    /// Panics if `id` was not issued by this board.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Pieces of `color` on the board, in creation order.
    pub fn active_pieces(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.active[color.idx()].iter().copied()
    }

    /// Pieces held in `color`'s hand, in creation order.
    pub fn hand_pieces(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.hands[color.idx()].iter().copied()
    }

    pub fn is_active(&self, id: PieceId, color: Color) -> bool {
        self.active[color.idx()].contains(&id)
    }

    pub fn in_hand(&self, id: PieceId, owner: Color) -> bool {
        self.hands[owner.idx()].contains(&id)
    }

    /// Which hand holds `id`, if any.
    pub fn hand_owner(&self, id: PieceId) -> Option<Color> {
        Color::ALL.into_iter().find(|&c| self.in_hand(id, c))
    }

    /// The king that started the game for `color`.
    pub fn king(&self, color: Color) -> Option<PieceId> {
        self.kings[color.idx()]
    }

    /// Square of `color`'s king, or `None` once it has been captured.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king(color).and_then(|id| self.piece(id).square)
    }

    /// True once `color`'s king has been taken into the opponent's hand.
    pub fn king_captured(&self, color: Color) -> bool {
        self.king(color)
            .is_some_and(|id| self.in_hand(id, color.opposite()))
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Number of completed turns.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Number of pieces in the arena.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
