//! Text rendering of a [`BoardView`].

use crossterm::style::{Color, Stylize};
use gridtoe::{BoardView, CellView};
use std::fmt::Write;

/// Parses a `#RRGGBB` string into a terminal colour.
fn hex_colour(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

fn cell(cell: &CellView, colour: bool) -> String {
    let mark = match cell.player {
        Some(player) => player.to_string(),
        None => ".".to_string(),
    };
    if !colour {
        return if cell.winning {
            format!("[{mark}]")
        } else {
            format!(" {mark} ")
        };
    }
    let mut styled = format!(" {mark} ").stylize();
    if let Some(fg) = cell.colour.and_then(hex_colour) {
        styled = styled.with(fg);
    }
    if cell.winning {
        styled = styled.on(Color::DarkYellow).bold();
    }
    styled.to_string()
}

/// Draws the board with row and column indices, followed by the status
/// line.
pub fn render(view: &BoardView, colour: bool) -> String {
    let mut out = String::from("   ");
    for col in 0..view.size {
        let _ = write!(out, " {col} ");
    }
    out.push('\n');
    for (row, cells) in view.rows.iter().enumerate() {
        let _ = write!(out, "{row:>2} ");
        for c in cells {
            out.push_str(&cell(c, colour));
        }
        out.push('\n');
    }
    out.push_str(&view.status_text);
    out.push('\n');
    out
}
