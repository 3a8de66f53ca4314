use std::io::{self, Write};

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line based conversation with the player.
#[async_trait]
pub trait Console: Send {
    fn say(&mut self, text: &str);

    /// Shows `prompt` and waits for one line, returned without its line ending.
    async fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

pub struct Terminal {
    lines: Lines<BufReader<Stdin>>,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for Terminal {
    fn say(&mut self, text: &str) {
        println!("{text}");
    }

    async fn ask(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        match self.lines.next_line().await? {
            Some(line) => Ok(line),
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            )),
        }
    }
}
