//! Line-oriented persistence for the board.
//!
//! A record with no leading `>` is a category header, `<loc> <name>`. A
//! record starting with `>` is an item of the most recent category,
//! `><loc> <text>`, the `>` glued to the location. One space separates the
//! location token from the free-text remainder. Order is significant and
//! preserved on save.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::rc::Rc;

use crate::diag::{DiagEvent, DiagSink, StderrDiag};
use crate::Board;

impl Board {
    /// Build a board from a record stream. Records with no separator are
    /// skipped; a read failure stops early and keeps whatever was already
    /// registered. The board always comes back at the root.
    pub fn read_from(reader: impl BufRead, diag: Rc<dyn DiagSink>) -> Board {
        let mut board = Board::with_diag(diag);
        for (idx, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    board.diag().report(DiagEvent::Io {
                        action: "load",
                        message: err.to_string(),
                    });
                    break;
                }
            };
            let Some((loc, rest)) = line.split_once(' ') else {
                board.diag().report(DiagEvent::MalformedLine { line: idx + 1 });
                continue;
            };
            if let Some(item_loc) = loc.strip_prefix('>') {
                board.add_item(Some(item_loc), rest);
            } else {
                board.reset();
                board.add_item(Some(loc), rest);
                // Registered just above, so this navigation cannot miss.
                board.select(loc).ok();
            }
        }
        board.reset();
        board
    }

    /// Serialize every category header followed by its items, in insertion
    /// order throughout.
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        for (loc, category) in self.categories().iter() {
            writeln!(writer, "{loc} {}", category.name())?;
            for (item_loc, text) in category.items() {
                writeln!(writer, ">{item_loc} {text}")?;
            }
        }
        Ok(())
    }

    /// Load a board from a file, reporting failures to the default sink.
    /// A file that cannot be opened yields an empty board.
    pub fn load(path: impl AsRef<Path>) -> Board {
        Self::load_with(path, Rc::new(StderrDiag))
    }

    pub fn load_with(path: impl AsRef<Path>, diag: Rc<dyn DiagSink>) -> Board {
        match File::open(path) {
            Ok(file) => Self::read_from(BufReader::new(file), diag),
            Err(err) => {
                diag.report(DiagEvent::Io {
                    action: "load",
                    message: err.to_string(),
                });
                Board::with_diag(diag)
            }
        }
    }

    /// Write the board to a file. I/O failure is absorbed and reported;
    /// saving is best-effort by policy.
    pub fn save(&self, path: impl AsRef<Path>) {
        let result = File::create(path).and_then(|file| self.write_to(file));
        if let Err(err) = result {
            self.diag().report(DiagEvent::Io {
                action: "save",
                message: err.to_string(),
            });
        }
    }
}
