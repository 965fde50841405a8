//! The interactive shell loop.

use std::io::{self, Write};
use std::sync::Arc;

use tradepost_foundation::Result;

use crate::dispatcher::CommandRegistry;
use crate::editor::{LineEditor, ReadResult};
use crate::session::Session;

/// The interactive shell: reads lines, dispatches them, prints errors.
pub struct Repl {
    editor: LineEditor,
    session: Session,
    registry: Arc<CommandRegistry>,
    show_banner: bool,
    prompt: String,
}

impl Repl {
    /// Creates a shell for the given session and command set.
    ///
    /// # Errors
    ///
    /// Returns an error if the line editor fails to initialize.
    pub fn new(session: Session, registry: CommandRegistry) -> Result<Self> {
        let registry = Arc::new(registry);
        let editor = LineEditor::new(Arc::clone(&registry), session.clone())?;
        Ok(Self {
            editor,
            session,
            registry,
            show_banner: true,
            prompt: "tradepost> ".to_string(),
        })
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the shell loop until EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally. Command errors are
    /// printed and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history(trimmed);

                    let input = self.session.command_input();
                    if let Err(e) = self.registry.dispatch(&input, trimmed) {
                        eprintln!("\x1b[31mError: {e}\x1b[0m");
                    }
                }
                ReadResult::Interrupted => {
                    println!();
                }
                ReadResult::Eof => break,
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    fn print_banner(&self) {
        println!("\x1b[1;36mTradepost\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "Signed in as {}. Type 'help' for commands, Tab to complete, Ctrl+D to exit.\n",
            self.session.sender()
        );
        let _ = io::stdout().flush();
    }
}
