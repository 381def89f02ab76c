use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::debug;

use crate::config::{ChatConfig, EXIT_KEYWORD};
use crate::progress::Spinner;
use crate::providers::OllamaClient;
use crate::transcript::Transcript;

/// The interactive prompt loop: one line in, one reply out, one transcript
/// entry per successful turn.
pub struct ChatSession {
    client: OllamaClient,
    transcript: Transcript,
    show_progress: bool,
}

impl ChatSession {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            client: OllamaClient::with_options(config.endpoint, config.model, config.options),
            transcript: Transcript::new(config.transcript_path),
            show_progress: config.show_progress,
        }
    }

    pub fn client(&self) -> &OllamaClient {
        &self.client
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Runs until the exit keyword is entered. A failed read, end of input
    /// included, is reported and the prompt repeats.
    ///
    /// `input` is read with blocking calls on the current runtime worker;
    /// nothing else needs that worker while we wait for a line. The spinner
    /// draws on stdout directly, so `output` must not be a held `StdoutLock`.
    pub async fn run<R, W>(&self, mut input: R, mut output: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "Chat with Ollama AI (type '{}' to quit)", EXIT_KEYWORD)?;

        loop {
            write!(output, "\nEnter your message: ")?;
            output.flush()?;

            let line = match read_prompt_line(&mut input) {
                Ok(line) => line,
                Err(e) => {
                    debug!("input read failed: {:?}", e.kind());
                    writeln!(output, "Error reading input: {}", e)?;
                    continue;
                }
            };

            let text = line.trim();
            if text == EXIT_KEYWORD {
                self.farewell(&mut output)?;
                break;
            }

            self.turn(text, &mut output).await?;
        }

        Ok(())
    }

    async fn turn<W: Write>(&self, text: &str, output: &mut W) -> io::Result<()> {
        writeln!(output, "Processing request...")?;
        output.flush()?;

        let spinner = self.show_progress.then(Spinner::start);
        let start = Instant::now();
        let result = self.client.chat(text).await;
        let elapsed = start.elapsed();
        if let Some(spinner) = spinner {
            spinner.stop().await;
        }
        writeln!(output)?;

        match result {
            Ok(response) => {
                writeln!(output, "Response: {}", response.content())?;
                writeln!(output, "Completed in {:?}", elapsed)?;
                debug!("turn finished in {:?} with model {}", elapsed, self.client.model);

                if let Err(e) = self.transcript.append(text, response.content()) {
                    eprintln!("Failed to save conversation: {}", e);
                }
            }
            Err(e) => {
                writeln!(output, "Error: {}", e)?;
            }
        }

        Ok(())
    }

    fn farewell<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(
            output,
            "Exiting chat. Conversation saved in {}",
            self.transcript.path().display()
        )
    }
}

/// Reads one newline-terminated line. Running out of input, even partway
/// through a line, is an error and the partial line is discarded.
fn read_prompt_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    if !line.ends_with('\n') {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "EOF"));
    }
    Ok(line)
}
