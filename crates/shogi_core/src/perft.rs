use crate::{board::Board, movegen::legal_actions, types::Color};

/// Pure perft node count.
/// Counts leaf positions reachable from the current one in `depth` plies,
/// starting with the side to move. Promotion variants count separately.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    fn inner(board: &mut Board, color: Color, depth: u8) -> u64 {
        if depth == 0 {
            return 1;
        }
        let actions = legal_actions(board, color);
        if depth == 1 {
            return actions.len() as u64;
        }

        let mut nodes = 0u64;
        for action in actions {
            let mut trial = board.trial(action);
            nodes += inner(&mut trial, color.opposite(), depth - 1);
        }
        nodes
    }

    let color = board.side_to_move();
    inner(board, color, depth)
}
