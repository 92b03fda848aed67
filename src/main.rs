use anyhow::Result;
use log::warn;
use minish::Interpreter;
use minish::io_adapters::{EditorSource, LineSource, ReaderSource};
use std::io::{self, IsTerminal};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut source: Box<dyn LineSource> = if io::stdin().is_terminal() {
        match EditorSource::new() {
            Ok(editor) => Box::new(editor),
            Err(e) => {
                warn!("line editor unavailable, reading plain stdin: {e}");
                Box::new(ReaderSource::new(io::stdin().lock()))
            }
        }
    } else {
        Box::new(ReaderSource::new(io::stdin().lock()))
    };

    Interpreter::default().repl(source.as_mut(), &mut io::stdout(), &mut io::stderr())
}
