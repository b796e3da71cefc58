//! The only code that changes a [`Board`].
//!
//! Every mutation returns an undo record, and each revert takes exactly
//! that record back. Search walks the tree in place with these pairs
//! instead of cloning the board. Reverting anything other than the last
//! applied mutation is a bug in the caller and panics.

use std::ops::{Deref, DerefMut};

use crate::board::Board;
use crate::movegen::Action;
use crate::types::{Color, PieceId, Square};

/// A piece taken off the board by a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture {
    pub piece: PieceId,
    /// Promotion state before it was degraded.
    pub was_promoted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveUndo {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Capture>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropUndo {
    pub piece: PieceId,
    pub to: Square,
    /// Hand the piece came from.
    pub owner: Color,
    /// Color tag the piece carried while held.
    pub prior_color: Color,
}

/// Undo record for a full [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Undo {
    Move { mv: MoveUndo, promoted: bool },
    Drop(DropUndo),
}

impl Board {
    /// Move the board piece `id` to `to`, capturing whatever stands there.
    ///
    /// Legality is not checked. A captured piece is degraded, loses its
    /// square and goes into the mover's hand; its color tag is untouched
    /// until it is dropped.
    pub fn move_piece(&mut self, id: PieceId, to: Square) -> MoveUndo {
        let mover = self.piece(id).color;
        let Some(from) = self.piece(id).square else {
            panic!("move_piece: piece {id} is not on the board");
        };
        assert!(from != to, "move_piece: piece {id} is already on {to}");

        let captured = self.at(to).map(|victim| {
            let was_promoted = self.pieces[victim.index()].promoted;
            let victim_color = self.pieces[victim.index()].color;
            self.active[victim_color.idx()].remove(&victim);
            self.hands[mover.idx()].insert(victim);
            let p = &mut self.pieces[victim.index()];
            p.promoted = false;
            p.square = None;
            Capture {
                piece: victim,
                was_promoted,
            }
        });

        self.set_cell(from, None);
        self.set_cell(to, Some(id));
        self.pieces[id.index()].square = Some(to);

        MoveUndo {
            piece: id,
            from,
            to,
            captured,
        }
    }

    /// Exact inverse of [`Board::move_piece`].
    pub fn revert_move(&mut self, undo: MoveUndo) {
        assert_eq!(
            self.at(undo.to),
            Some(undo.piece),
            "revert_move: {} is not on {}",
            undo.piece,
            undo.to
        );
        assert!(
            self.at(undo.from).is_none(),
            "revert_move: origin {} is occupied",
            undo.from
        );
        let mover = self.piece(undo.piece).color;

        self.set_cell(undo.to, None);
        self.set_cell(undo.from, Some(undo.piece));
        self.pieces[undo.piece.index()].square = Some(undo.from);

        if let Some(cap) = undo.captured {
            let removed = self.hands[mover.idx()].remove(&cap.piece);
            assert!(removed, "revert_move: {} is not in {mover}'s hand", cap.piece);
            let p = &mut self.pieces[cap.piece.index()];
            p.promoted = cap.was_promoted;
            p.square = Some(undo.to);
            let color = p.color;
            self.active[color.idx()].insert(cap.piece);
            self.set_cell(undo.to, Some(cap.piece));
        }
    }

    /// Drop the held piece `id` onto the empty square `to`. The piece takes
    /// the color of the hand that held it.
    pub fn drop_piece(&mut self, id: PieceId, to: Square) -> DropUndo {
        let Some(owner) = self.hand_owner(id) else {
            panic!("drop_piece: piece {id} is not in any hand");
        };
        assert!(
            self.at(to).is_none(),
            "drop_piece: square {to} is occupied"
        );

        self.hands[owner.idx()].remove(&id);
        let p = &mut self.pieces[id.index()];
        let prior_color = p.color;
        p.color = owner;
        p.square = Some(to);
        self.active[owner.idx()].insert(id);
        self.set_cell(to, Some(id));

        DropUndo {
            piece: id,
            to,
            owner,
            prior_color,
        }
    }

    /// Exact inverse of [`Board::drop_piece`].
    pub fn revert_drop(&mut self, undo: DropUndo) {
        assert_eq!(
            self.at(undo.to),
            Some(undo.piece),
            "revert_drop: {} is not on {}",
            undo.piece,
            undo.to
        );
        self.set_cell(undo.to, None);
        self.active[undo.owner.idx()].remove(&undo.piece);
        let p = &mut self.pieces[undo.piece.index()];
        p.color = undo.prior_color;
        p.square = None;
        self.hands[undo.owner.idx()].insert(undo.piece);
    }

    /// Promote `id`. Returns false (and changes nothing) if the kind has no
    /// promoted form or the piece is already promoted.
    pub fn promote(&mut self, id: PieceId) -> bool {
        let p = &mut self.pieces[id.index()];
        if p.promoted || !p.kind.can_promote() {
            return false;
        }
        p.promoted = true;
        true
    }

    /// Undo a successful [`Board::promote`].
    pub fn revert_promotion(&mut self, id: PieceId) {
        let p = &mut self.pieces[id.index()];
        assert!(p.promoted, "revert_promotion: {id} is not promoted");
        p.promoted = false;
    }

    /// Apply a move or drop. Turn order and legality are the caller's job.
    pub fn apply(&mut self, action: Action) -> Undo {
        match action {
            Action::Move { piece, to, promote } => {
                let mv = self.move_piece(piece, to);
                let promoted = promote && self.promote(piece);
                Undo::Move { mv, promoted }
            }
            Action::Drop { piece, to } => Undo::Drop(self.drop_piece(piece, to)),
        }
    }

    pub fn revert(&mut self, undo: Undo) {
        match undo {
            Undo::Move { mv, promoted } => {
                if promoted {
                    self.revert_promotion(mv.piece);
                }
                self.revert_move(mv);
            }
            Undo::Drop(d) => self.revert_drop(d),
        }
    }

    /// Hand the turn to the other side.
    pub fn end_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.ply += 1;
    }

    /// Apply `action` and revert it when the returned guard is dropped,
    /// whichever way the caller leaves the scope.
    pub fn trial(&mut self, action: Action) -> Trial<'_> {
        let undo = self.apply(action);
        Trial {
            board: self,
            undo: Some(undo),
        }
    }

    fn set_cell(&mut self, square: Square, id: Option<PieceId>) {
        self.grid[square.row() as usize][square.col() as usize] = id;
    }
}

/// Scoped hypothetical action. Derefs to the mutated board.
pub struct Trial<'a> {
    board: &'a mut Board,
    undo: Option<Undo>,
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.board.revert(undo);
        }
    }
}

#[cfg(test)]
#[path = "mutation_tests.rs"]
mod mutation_tests;
