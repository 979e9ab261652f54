use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use log::debug;
use nudge_present::{
    DialogRequest, FullScreenRequest, HostError, MandatoryScreen, PresentationHost, PromptButton,
    perform_action,
};

const RULE: &str = "────────────────────────────────────────";

type Opener = fn(&str) -> io::Result<()>;

/// The terminal window the prompt is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal;

enum Pending {
    Blocking(PromptButton),
    Dialog {
        primary: PromptButton,
        secondary: PromptButton,
    },
}

/// Presents update prompts as text and reads the user's choice from `input`.
///
/// Presenting only draws the prompt; [`TerminalHost::interact`] waits for the
/// user afterwards.
pub struct TerminalHost<R, W> {
    input: R,
    output: W,
    attached: bool,
    opener: Opener,
    pending: Option<Pending>,
}

impl TerminalHost<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout(), |uri| open::that(uri))
    }
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    pub fn new(input: R, output: W, opener: Opener) -> Self {
        Self {
            input,
            output,
            attached: true,
            opener,
            pending: None,
        }
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.output
    }

    /// Wait for the user to act on the presented prompt, if any.
    ///
    /// A dialog resolves after one answer. A blocking screen stays up after
    /// its action runs and only returns once `input` is closed.
    pub fn interact(&mut self) -> Result<(), HostError> {
        match self.pending.take() {
            None => Ok(()),
            Some(Pending::Dialog { primary, secondary }) => {
                writeln!(
                    self.output,
                    "[1] {}  [2] {}",
                    primary.label, secondary.label
                )?;
                self.output.flush()?;
                let answer = self.read_answer()?;
                let chosen = if answer.as_deref() == Some("1") {
                    &primary
                } else {
                    &secondary
                };
                perform_action(self, &chosen.action)
            }
            Some(Pending::Blocking(primary)) => {
                loop {
                    write!(self.output, "Press Enter to {}: ", primary.label)?;
                    self.output.flush()?;
                    if self.read_answer()?.is_none() {
                        debug!("Input closed while update is required");
                        return Ok(());
                    }
                    if let Err(e) = perform_action(self, &primary.action) {
                        writeln!(self.output, "{e}")?;
                    }
                }
            }
        }
    }

    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn draw(&mut self, title: &str, message: &str) -> io::Result<()> {
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "{title}")?;
        writeln!(self.output)?;
        writeln!(self.output, "{message}")?;
        writeln!(self.output, "{RULE}")
    }
}

impl<R: BufRead, W: Write> PresentationHost for TerminalHost<R, W> {
    type Surface = Terminal;
    type View = MandatoryScreen;

    fn topmost_surface(&self) -> Option<Terminal> {
        self.attached.then_some(Terminal)
    }

    fn present_full_screen(
        &mut self,
        _surface: &Terminal,
        request: FullScreenRequest<MandatoryScreen>,
    ) -> Result<(), HostError> {
        if request.options.is_dismissible() {
            debug!("Terminal screens cannot be dismissed by gesture; ignoring options");
        }
        self.draw(&request.view.title, &request.view.message)
            .map_err(|e| HostError::present_failed("full screen", e.to_string()))?;
        self.pending = Some(Pending::Blocking(request.primary));
        Ok(())
    }

    fn present_dialog(
        &mut self,
        _surface: &Terminal,
        request: DialogRequest,
    ) -> Result<(), HostError> {
        self.draw(&request.title, &request.message)
            .map_err(|e| HostError::present_failed("dialog", e.to_string()))?;
        self.pending = Some(Pending::Dialog {
            primary: request.primary,
            secondary: request.secondary,
        });
        Ok(())
    }

    fn open_uri(&mut self, uri: &str) -> Result<(), HostError> {
        (self.opener)(uri).map_err(|e| HostError::open_failed_from(uri, e))
    }
}
