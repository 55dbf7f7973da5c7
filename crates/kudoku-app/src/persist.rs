//! Text-file persistence in the legacy board format.
//!
//! The on-disk format is fixed for compatibility with existing files:
//!
//! - **Saving** writes the cells row-major, each right-aligned in a
//!   2-character field with `0` for empty, `" | "` between 3-column groups
//!   (not after the last) and a 25-dash separator line after each 3-row
//!   group (not after the last).
//! - **Loading** scans the input byte by byte: every ASCII digit is placed
//!   into the board in row-major order (`0` clears the cell), everything
//!   else is skipped, and the scan stops after 81 digits or at end of input.
//!
//! Loading mutates an existing board on purpose: a short file leaves the
//! trailing cells at their prior values, exactly like the format's original
//! consumer. Since the loader skips non-digit bytes, saving and loading
//! round-trips any board.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use kudoku_core::{BLOCK_SIZE, Board, Digit, GRID_SIZE, Position};

/// Error reading or writing a board file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PersistError {
    /// The underlying file could not be opened, read, or written.
    #[display("i/o error: {_0}")]
    Io(io::Error),
}

/// Reads board cells from `reader` into `board`, row-major.
///
/// See the module documentation for the scan rules. Cells beyond the last
/// digit found keep their prior values.
///
/// # Errors
///
/// Returns an error only when reading from `reader` fails.
pub fn load_board_into<R>(board: &mut Board, reader: R) -> Result<(), PersistError>
where
    R: Read,
{
    let mut cursor = 0;
    for byte in reader.bytes() {
        let byte = byte?;
        if byte.is_ascii_digit() {
            board.set(Position::ALL[cursor], Digit::try_from_value(byte - b'0'));
            cursor += 1;
            if cursor == Position::ALL.len() {
                break;
            }
        }
    }
    Ok(())
}

/// Reads the file at `path` into `board`.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or read.
pub fn load_board_from_path(board: &mut Board, path: &Path) -> Result<(), PersistError> {
    let file = File::open(path)?;
    load_board_into(board, BufReader::new(file))
}

/// Writes `board` to `writer` in the legacy layout.
///
/// # Errors
///
/// Returns an error when writing fails.
pub fn save_board<W>(board: &Board, mut writer: W) -> Result<(), PersistError>
where
    W: Write,
{
    for pos in Position::ALL {
        let value = board.get(pos).map_or(0, Digit::value);
        write!(writer, "{value:2}")?;

        let col = usize::from(pos.col());
        let row = usize::from(pos.row());
        if col == GRID_SIZE - 1 {
            writeln!(writer)?;
            if row % BLOCK_SIZE == BLOCK_SIZE - 1 && row < GRID_SIZE - 1 {
                writeln!(writer, "{}", "-".repeat(GRID_SIZE * 3 - 2))?;
            }
        } else if col % BLOCK_SIZE == BLOCK_SIZE - 1 {
            write!(writer, " | ")?;
        }
    }
    Ok(())
}

/// Writes `board` to the file at `path`, creating or truncating it.
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub fn save_board_to_path(board: &Board, path: &Path) -> Result<(), PersistError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    save_board(board, &mut writer)?;
    writer.flush()?;
    Ok(())
}
