//! Text rendering for tables, boards, move lists and results.

use strictly_coins::{GameResult, Move, Outcome, Player, ScoreTable, TurnGate};

/// Display names for both seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    first: String,
    second: String,
}

impl Names {
    /// Creates a name pair.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Name shown for `player`.
    pub fn of(&self, player: Player) -> &str {
        match player {
            Player::First => &self.first,
            Player::Second => &self.second,
        }
    }
}

/// Whether a line of `n` coins is too large to draw.
pub fn exceeds_display_limit(n: usize, limit: usize) -> bool {
    n > limit
}

/// Warning printed instead of the board and table for oversized games.
pub fn display_limit_warning(n: usize, limit: usize) -> String {
    format!(
        "Warning: {} coins exceeds the display limit of {}; the board and table are not drawn.",
        n, limit
    )
}

/// Renders the score table as a grid of `(mover, opponent)` cells.
///
/// Rows are start indices, columns end indices; cells below the diagonal
/// are blank.
pub fn render_table(table: &ScoreTable) -> String {
    let n = table.len();
    let width = table
        .rows()
        .flat_map(|(_, row)| row.iter().map(|pair| pair.to_string().len()))
        .chain(std::iter::once(n.to_string().len()))
        .max()
        .unwrap_or(1);
    let label = n.to_string().len();

    let mut out = String::new();
    out.push_str(&" ".repeat(label));
    for j in 0..n {
        out.push_str(&format!(" {:>width$}", j));
    }
    out.push('\n');

    for (i, row) in table.rows() {
        out.push_str(&format!("{:>label$}", i));
        for _ in 0..i {
            out.push_str(&" ".repeat(width + 1));
        }
        for pair in row {
            out.push_str(&format!(" {:>width$}", pair.to_string()));
        }
        let trimmed = out.trim_end().len();
        out.truncate(trimmed);
        out.push('\n');
    }
    out
}

/// Renders the remaining line with the two selectable ends marked.
pub fn render_board(gate: &TurnGate) -> String {
    let Some((start, end)) = gate.bounds() else {
        return "(no coins left)".to_string();
    };
    gate.coins().values()[start..=end]
        .iter()
        .enumerate()
        .map(|(offset, value)| {
            let index = start + offset;
            if index == start || index == end {
                format!("[{}:{}]", index, value)
            } else {
                format!(" {}:{} ", index, value)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per move.
pub fn render_moves(moves: &[Move], names: &Names) -> String {
    moves
        .iter()
        .map(|mv| {
            format!(
                "{}. {} takes coin {} (value {})\n",
                mv.ordinal + 1,
                names.of(mv.player),
                mv.index,
                mv.value
            )
        })
        .collect()
}

/// Final totals and the winner.
pub fn render_result(result: &GameResult, names: &Names) -> String {
    let verdict = match result.outcome() {
        Outcome::Winner(player) => format!("Winner: {}!", names.of(player)),
        Outcome::Tie => "It's a tie!".to_string(),
    };
    format!(
        "{}: {}\n{}: {}\n{}\n",
        names.of(Player::First),
        result.first_total(),
        names.of(Player::Second),
        result.second_total(),
        verdict
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_coins::{CoinSequence, Parity};

    #[test]
    fn test_table_layout() {
        let coins = CoinSequence::new(&[5, 5], Parity::Even).unwrap();
        let rendered = render_table(&ScoreTable::build(&coins));
        let expected = "       0      1\n0 (5, 0) (5, 5)\n1        (5, 0)\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_board_marks_ends() {
        let coins = CoinSequence::new(&[4, 15, 7, 3], Parity::Even).unwrap();
        let gate = TurnGate::new(coins, Player::First);
        assert_eq!(render_board(&gate), "[0:4]  1:15   2:7  [3:3]");
    }

    #[test]
    fn test_result_names_winner() {
        let names = Names::new("Ada", "Grace");
        let rendered = render_result(&GameResult::new(19, 27), &names);
        assert!(rendered.ends_with("Winner: Grace!\n"));
    }

    #[test]
    fn test_display_limit() {
        assert!(!exceeds_display_limit(10, 10));
        assert!(exceeds_display_limit(12, 10));
    }
}
