use crate::error::ParsingResult;
use crate::position::Position;

/// Returns true for the symbols skipped between tokens
pub fn is_whitespace(symbol: char) -> bool {
    matches!(symbol, ' ' | '\t' | '\r' | '\n')
}

/// A read position over an immutable input string
///
/// The cursor keeps a stack of saved positions so parsers can speculate:
/// `commit` saves the current position, `finish` drops the saved position and
/// keeps whatever was consumed since, `rollback` restores it. Every `commit`
/// must be paired with exactly one `finish` or `rollback`, innermost first.
///
/// A cursor is created for a single parse and must not be shared.
#[derive(Debug)]
pub struct Cursor<'input> {
    input: &'input str,
    position: Position,
    history: Vec<Position>,
    verbatim: usize,
}

impl<'input> Cursor<'input> {
    pub fn new(input: &'input str) -> Self {
        Cursor {
            input,
            position: Position::start(),
            history: Vec::new(),
            verbatim: 0,
        }
    }

    /// The whole input, independent of the current position
    pub fn source(&self) -> &'input str {
        self.input
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// Number of checkpoints that have not been finished or rolled back yet
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn is_at_end(&self) -> bool {
        self.position.offset >= self.input.len()
    }

    /// The unconsumed remainder of the input
    pub fn tail(&self) -> &'input str {
        self.input.get(self.position.offset..).unwrap_or_default()
    }

    /// The next symbol, without consuming it
    pub fn peek(&self) -> Option<char> {
        self.tail().chars().next()
    }

    /// Consume and return the next symbol, or `None` at end of input
    pub fn advance(&mut self) -> Option<char> {
        let symbol = self.peek()?;
        self.position.offset += symbol.len_utf8();
        if symbol == '\n' {
            self.position.row += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(symbol)
    }

    /// Advance symbol by symbol until `len` more bytes have been consumed
    pub fn consume(&mut self, len: usize) {
        let target = self.position.offset + len;
        while self.position.offset < target {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// The symbol `n` positions behind the current one; `lookbehind(1)` is the
    /// last consumed symbol
    pub fn lookbehind(&self, n: usize) -> Option<char> {
        if n == 0 {
            return None;
        }
        let consumed = self.input.get(..self.position.offset)?;
        consumed.chars().rev().nth(n - 1)
    }

    /// Save the current position
    pub fn commit(&mut self) {
        self.history.push(self.position);
    }

    /// Drop the most recent checkpoint, keeping everything consumed since
    pub fn finish(&mut self) {
        let popped = self.history.pop();
        debug_assert!(popped.is_some(), "finish without a matching commit");
    }

    /// Restore the most recent checkpoint
    pub fn rollback(&mut self) {
        match self.history.pop() {
            Some(position) => self.position = position,
            None => debug_assert!(false, "rollback without a matching commit"),
        }
    }

    /// Run `attempt` under a checkpoint that is finished on success and rolled
    /// back on failure
    pub fn speculate<T, F>(&mut self, attempt: F) -> ParsingResult<T>
    where
        F: FnOnce(&mut Self) -> ParsingResult<T>,
    {
        self.commit();
        let result = attempt(self);
        if result.is_ok() {
            self.finish();
        } else {
            self.rollback();
        }
        result
    }

    /// Consume contiguous whitespace, unless the cursor is in verbatim mode
    pub fn skip_whitespace(&mut self) {
        if self.is_verbatim() {
            return;
        }
        while self.peek().is_some_and(is_whitespace) {
            self.advance();
        }
    }

    pub fn is_verbatim(&self) -> bool {
        self.verbatim > 0
    }

    /// Disable whitespace skipping until the matching `exit_verbatim`
    pub fn enter_verbatim(&mut self) {
        self.verbatim += 1;
    }

    pub fn exit_verbatim(&mut self) {
        self.verbatim = self.verbatim.saturating_sub(1);
    }
}
