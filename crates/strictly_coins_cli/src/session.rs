//! Terminal game sessions.
//!
//! Each session reads commands from a [`BufRead`] and writes to a [`Write`],
//! so the binary hands it stdin/stdout and tests hand it byte buffers.

use crate::config::CoinsConfig;
use crate::display::{
    Names, display_limit_warning, exceeds_display_limit, render_board, render_moves,
    render_result, render_table,
};
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use std::time::Duration;
use strictly_coins::{
    CoinSequence, MoveError, Player, ScoreTable, Side, Solution, Transition, TurnGate,
};
use tracing::{debug, info, instrument, warn};

/// Name shown for the engine seat in versus games.
pub const ENGINE_NAME: &str = "Engine";

/// A parsed pick typed by a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// Take from one end.
    Side(Side),
    /// Take the coin at this index.
    Index(usize),
}

/// Parses `l`/`left`, `r`/`right` or a coin index.
pub fn parse_pick(text: &str) -> Option<Pick> {
    let text = text.trim().to_ascii_lowercase();
    match text.as_str() {
        "l" | "left" => Some(Pick::Side(Side::Left)),
        "r" | "right" => Some(Pick::Side(Side::Right)),
        other => other.parse().ok().map(Pick::Index),
    }
}

/// Prints the table, an optimal line, and the result.
#[instrument(skip_all, fields(n = coins.len(), ?opener))]
pub fn run_solve<W: Write>(
    coins: &CoinSequence,
    opener: Player,
    config: &CoinsConfig,
    out: &mut W,
) -> Result<()> {
    let solution = Solution::solve(coins, opener);
    let names = Names::new(config.first_name().as_str(), config.second_name().as_str());

    if exceeds_display_limit(coins.len(), *config.display_limit()) {
        warn!(n = coins.len(), "Table too large to draw");
        writeln!(out, "{}", display_limit_warning(coins.len(), *config.display_limit()))?;
    } else {
        writeln!(out, "Coins: {}", coins)?;
        writeln!(out)?;
        write!(out, "{}", render_table(solution.table()))?;
    }

    writeln!(out)?;
    write!(out, "{}", render_moves(solution.moves(), &names))?;
    writeln!(out)?;
    write!(out, "{}", render_result(&solution.result(), &names))?;
    Ok(())
}

/// Drives a turn gate through the optimal line, one move at a time.
#[instrument(skip_all, fields(n = coins.len(), ?opener))]
pub fn run_replay<W: Write>(
    coins: &CoinSequence,
    opener: Player,
    config: &CoinsConfig,
    out: &mut W,
) -> Result<()> {
    let solution = Solution::solve(coins, opener);
    let names = Names::new(config.first_name().as_str(), config.second_name().as_str());
    let show_board = !exceeds_display_limit(coins.len(), *config.display_limit());
    if !show_board {
        writeln!(out, "{}", display_limit_warning(coins.len(), *config.display_limit()))?;
    }

    let mut gate = TurnGate::new(coins.clone(), opener);
    for mv in solution.moves() {
        if show_board {
            writeln!(out, "{}", render_board(&gate))?;
        }
        let transition = gate.select_coin(mv.index)?;
        write!(out, "{}", render_moves(&[transition.taken()], &names))?;
        pause(*config.replay_delay_ms());
    }

    finish(&gate, &names, out)
}

/// Two humans alternate picks until the line is empty.
///
/// Illegal picks are reported and the same player is asked again.
#[instrument(skip_all, fields(n = coins.len(), ?opener))]
pub fn run_two_player<R: BufRead, W: Write>(
    coins: &CoinSequence,
    opener: Player,
    names: &Names,
    config: &CoinsConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let show_board = !exceeds_display_limit(coins.len(), *config.display_limit());
    if !show_board {
        writeln!(out, "{}", display_limit_warning(coins.len(), *config.display_limit()))?;
    }

    let mut gate = TurnGate::new(coins.clone(), opener);
    while let Some(player) = gate.current_player() {
        let transition = human_turn(&mut gate, player, names, show_board, input, out)?;
        write!(out, "{}", render_moves(&[transition.taken()], names))?;
    }

    finish(&gate, names, out)
}

/// A human plays the first seat against the optimal engine.
///
/// The engine follows the score table and breaks ties toward the right end.
#[instrument(skip_all, fields(n = coins.len(), engine_opens = engine_opens))]
pub fn run_versus<R: BufRead, W: Write>(
    coins: &CoinSequence,
    human_name: &str,
    engine_opens: bool,
    config: &CoinsConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let names = Names::new(human_name, ENGINE_NAME);
    let opener = if engine_opens {
        Player::Second
    } else {
        Player::First
    };
    let show_board = !exceeds_display_limit(coins.len(), *config.display_limit());
    if !show_board {
        writeln!(out, "{}", display_limit_warning(coins.len(), *config.display_limit()))?;
    }

    let table = ScoreTable::build(coins);
    let mut gate = TurnGate::new(coins.clone(), opener);
    while let Some(player) = gate.current_player() {
        let transition = match player {
            Player::First => human_turn(&mut gate, player, &names, show_board, input, out)?,
            Player::Second => engine_turn(&mut gate, &table)?,
        };
        write!(out, "{}", render_moves(&[transition.taken()], &names))?;
    }

    finish(&gate, &names, out)
}

/// Prompts until `player` makes a legal pick.
fn human_turn<R: BufRead, W: Write>(
    gate: &mut TurnGate,
    player: Player,
    names: &Names,
    show_board: bool,
    input: &mut R,
    out: &mut W,
) -> Result<Transition> {
    loop {
        if show_board {
            writeln!(out, "{}", render_board(gate))?;
        }
        write!(
            out,
            "{}, take left (l), right (r) or a coin index: ",
            names.of(player)
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("Input ended before the game finished");
        }

        let attempt = match parse_pick(&line) {
            Some(Pick::Side(side)) => gate.select_side(side),
            Some(Pick::Index(index)) => gate.select_coin(index),
            None => {
                writeln!(out, "Please enter l, r or a coin index")?;
                continue;
            }
        };

        match attempt {
            Ok(transition) => return Ok(transition),
            Err(e @ MoveError::NotAnEnd { .. }) => {
                debug!(error = %e, "Pick rejected, asking again");
                writeln!(out, "Illegal move: {}", e)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Takes the end the score table prefers.
fn engine_turn(gate: &mut TurnGate, table: &ScoreTable) -> Result<Transition> {
    let Some((start, end)) = gate.bounds() else {
        bail!("Engine asked to move after the game ended");
    };
    let Some(side) = table.preferred_side(start, end) else {
        bail!("No table entry for [{}, {}]", start, end);
    };
    debug!(start, end, %side, "Engine picks");
    Ok(gate.select_side(side)?)
}

fn finish<W: Write>(gate: &TurnGate, names: &Names, out: &mut W) -> Result<()> {
    let Some(result) = gate.result() else {
        bail!("Game ended with coins still on the table");
    };
    info!(%result, "Game finished");
    writeln!(out)?;
    write!(out, "{}", render_result(&result, names))?;
    Ok(())
}

fn pause(delay_ms: u64) {
    if delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(delay_ms));
    }
}
