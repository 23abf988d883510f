//! Recovers one optimal line of play from a completed score table.

use crate::action::Move;
use crate::table::ScoreTable;
use crate::types::Player;
use tracing::{debug, instrument};

/// Walks the table from the full range inward, producing `n` moves.
///
/// At each step the left coin is taken when removing it from the mover's
/// best score leaves exactly what the mover collects as opponent on the
/// remainder; otherwise the right coin is taken. With one coin left the
/// current player simply takes it.
///
/// `first` is the player who moves on the full range, and therefore the
/// player credited with [`ScoreTable::whole`]'s mover score.
#[instrument(skip(table), fields(n = table.len()))]
pub fn reconstruct(table: &ScoreTable, first: Player) -> Vec<Move> {
    let coins = table.coins();
    let mut moves = Vec::with_capacity(table.len());
    let mut start = 0;
    let mut end = table.len() - 1;
    let mut player = first;

    loop {
        let index = if start == end {
            start
        } else if table.cell(start, end).mover - coins.coin(start)
            == table.cell(start + 1, end).opponent
        {
            start
        } else {
            end
        };

        let mv = Move::new(player, index, coins.coin(index), moves.len());
        debug!(%mv, start, end, "Reconstructed move");
        moves.push(mv);

        if start == end {
            break;
        }
        if index == start {
            start += 1;
        } else {
            end -= 1;
        }
        player = player.opponent();
    }

    moves
}
