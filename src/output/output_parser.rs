use crate::output::{ParsedOutput, RawBlock};
use log::{debug, trace};

/// The text that starts every line terminating an attractor block.
pub const SEPARATOR_PREFIX: &str = "Attractor";

/// Incremental parser of the `bns` standard output.
///
/// The parser is fed one line at a time (see [`OutputParser::push_line`]) and groups
/// data lines into [`RawBlock`]s:
///  - A *data line* starts with `0` or `1`. Its trailing whitespace is stripped and it is
///    appended to the current block.
///  - A *separator line* starts with `Attractor`. It closes the current block (which can be
///    empty).
///  - Every other line is ignored.
///
/// While parsing, the parser tracks the length of the longest closed block. The variable
/// count of the whole output is the width of the first row of the *first* block that
/// reached this length. This single count is later applied to every block, which is only
/// sound because the solver prints all states of one network with the same width. Blocks
/// of a different width are therefore not detected here, but only once they are decoded.
pub struct OutputParser {
    state: ParserState,
    blocks: Vec<RawBlock>,
    max_block_length: usize,
    variable_count: usize,
}

enum ParserState {
    /// Waiting for the first data line of the next block.
    Idle,
    /// Collecting rows of an unfinished block.
    AccumulatingBlock(Vec<String>),
}

impl Default for OutputParser {
    fn default() -> Self {
        OutputParser::new()
    }
}

impl OutputParser {
    pub fn new() -> OutputParser {
        OutputParser {
            state: ParserState::Idle,
            blocks: Vec::new(),
            max_block_length: 0,
            variable_count: 0,
        }
    }

    /// Process one line of solver output. The line can still contain its line terminator.
    pub fn push_line(&mut self, line: &str) {
        if line.starts_with('0') || line.starts_with('1') {
            let row = line.trim_end().to_string();
            match &mut self.state {
                ParserState::Idle => self.state = ParserState::AccumulatingBlock(vec![row]),
                ParserState::AccumulatingBlock(rows) => rows.push(row),
            }
        } else if line.starts_with(SEPARATOR_PREFIX) {
            self.close_block();
        } else {
            trace!("Ignoring solver output line `{}`.", line.trim_end());
        }
    }

    /// Length of the longest block closed so far.
    pub fn max_block_length(&self) -> usize {
        self.max_block_length
    }

    /// Variable count inferred from the blocks closed so far.
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Number of blocks closed so far.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Finish parsing.
    ///
    /// Returns `None` if no closed block contained any data line (the solver found no
    /// attractor). A trailing block without a separator is discarded.
    pub fn finish(self) -> Option<ParsedOutput> {
        if let ParserState::AccumulatingBlock(rows) = &self.state {
            debug!("Dropping {} rows of an unterminated block.", rows.len());
        }

        if self.max_block_length == 0 {
            return None;
        }

        Some(ParsedOutput {
            blocks: self.blocks,
            max_block_length: self.max_block_length,
            variable_count: self.variable_count,
        })
    }

    fn close_block(&mut self) {
        let rows = match std::mem::replace(&mut self.state, ParserState::Idle) {
            ParserState::Idle => Vec::new(),
            ParserState::AccumulatingBlock(rows) => rows,
        };

        if rows.len() > self.max_block_length {
            self.max_block_length = rows.len();
            self.variable_count = rows[0].chars().count();
        }

        let block = RawBlock::new(self.blocks.len(), rows);
        debug!(
            "Closed block #{} with {} rows (longest={}; variables={}).",
            block.index(),
            block.len(),
            self.max_block_length,
            self.variable_count
        );
        self.blocks.push(block);
    }
}
