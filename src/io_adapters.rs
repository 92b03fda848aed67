use log::warn;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, Write};

/// Longest accepted input line, in bytes, not counting the line terminator.
pub const MAX_LINE_LEN: usize = 255;

/// Where the interactive loop gets its lines from.
pub trait LineSource {
    /// Show `prompt` and read one line, as raw bytes, without its terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<Vec<u8>>>;
}

/// Line source over any buffered reader, typically a piped standard input.
///
/// The prompt is written to `out` before each read.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Public constructor.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<Vec<u8>>> {
        out.write_all(prompt.as_bytes())?;
        out.flush()?;

        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }
        Ok(Some(truncate_line(raw)))
    }
}

/// Interactive line source with editing and history, for terminals.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    /// Line editor with an empty in-memory history.
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str, _out: &mut dyn Write) -> io::Result<Option<Vec<u8>>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim_matches(' ').is_empty() {
                    // A line that cannot be added to history is still run.
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(truncate_line(line.into_bytes())))
            }
            // Ctrl-C abandons the current line and shows a fresh prompt.
            Err(ReadlineError::Interrupted) => Ok(Some(Vec::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::other(e.to_string())),
        }
    }
}

/// Cuts `line` down to [`MAX_LINE_LEN`] bytes.
pub fn truncate_line(mut line: Vec<u8>) -> Vec<u8> {
    if line.len() > MAX_LINE_LEN {
        warn!("input line of {} bytes truncated to {MAX_LINE_LEN}", line.len());
        line.truncate(MAX_LINE_LEN);
    }
    line
}
