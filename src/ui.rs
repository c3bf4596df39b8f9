use std::io::{self, Write};

use crate::board::Grid;

/// Print the banner and the input format help.
pub fn print_greeting<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "-------------------")?;
    writeln!(out, "      SEA  BATTLE  ")?;
    writeln!(out, "-------------------")?;
    writeln!(out, " Input format: x y ")?;
    writeln!(out, " x - row number    ")?;
    writeln!(out, " y - column number ")?;
    Ok(())
}

/// Display the player's board (top) and the opponent's board (bottom).
pub fn print_boards<W: Write>(out: &mut W, own: &Grid, enemy: &Grid) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(20))?;
    writeln!(out, "Your board:")?;
    writeln!(out, "{}", own)?;
    writeln!(out, "{}", "-".repeat(20))?;
    writeln!(out, "Computer's board:")?;
    writeln!(out, "{}", enemy)?;
    Ok(())
}
