//! Comment skipping.
//!
//! Both comment kinds are modes of their own. A `--` comment runs to the
//! end of the line; `(* ... *)` comments nest, and the depth is carried in
//! [`ScanMode::InBlockComment`].

use crate::error::LexError;
use crate::mode::{ScanMode, ScanStep};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips the rest of a `--` comment, including its newline.
    ///
    /// Reaching end of input here is not an error.
    pub(crate) fn scan_line_comment(&mut self) -> ScanStep {
        self.cursor.eat_while(|b| b != b'\n');
        self.cursor.advance();
        self.set_mode(ScanMode::Default);
        ScanStep::Skipped
    }

    /// Runs one block-comment rule at nesting `depth`.
    pub(crate) fn scan_block_comment(&mut self, depth: u32) -> ScanStep {
        if self.cursor.is_at_end() {
            let step = self.report_error(LexError::UnterminatedComment);
            self.set_mode(ScanMode::Default);
            return step;
        }

        if self.cursor.starts_with(b"(*") {
            self.cursor.advance_n(2);
            self.set_mode(ScanMode::InBlockComment {
                depth: depth.saturating_add(1),
            });
        } else if self.cursor.starts_with(b"*)") {
            self.cursor.advance_n(2);
            if depth <= 1 {
                self.set_mode(ScanMode::Default);
            } else {
                self.set_mode(ScanMode::InBlockComment { depth: depth - 1 });
            }
        } else {
            self.cursor.advance();
            self.cursor.eat_while(|b| b != b'(' && b != b'*');
        }
        ScanStep::Skipped
    }
}
