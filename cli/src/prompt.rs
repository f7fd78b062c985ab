//! Reading missing inputs from the terminal or from piped stdin.

use std::io::{BufRead, Lines, StdinLock};

use reedline::{
    DefaultPrompt, DefaultPromptSegment, EditCommand, Emacs, KeyCode, KeyModifiers, Keybindings,
    Reedline, ReedlineEvent, Signal, default_emacs_keybindings,
};

use crate::error::CliError;
use crate::highlighter::Highlighter;

pub const RULE: &str = "======================================================================";
pub const THIN_RULE: &str =
    "----------------------------------------------------------------------";

/// Where answers to the four questions come from.
pub enum Prompter {
    Interactive(Box<Reedline>),
    Piped(Lines<StdinLock<'static>>),
}

fn add_keybindings(keybindings: &mut Keybindings) {
    // Ctrl+U clears the line, leaving it empty to skip the exact value.
    keybindings.add_binding(
        KeyModifiers::CONTROL,
        KeyCode::Char('u'),
        ReedlineEvent::Edit(vec![EditCommand::Clear]),
    );
}

fn setup_reedline() -> Reedline {
    let mut keybindings = default_emacs_keybindings();
    add_keybindings(&mut keybindings);

    Reedline::create()
        .with_highlighter(Box::new(Highlighter::new()))
        .with_edit_mode(Box::new(Emacs::new(keybindings)))
}

impl Prompter {
    /// Use a line editor when stdin is a terminal, otherwise read lines.
    pub fn detect() -> Self {
        if atty::is(atty::Stream::Stdin) {
            Prompter::Interactive(Box::new(setup_reedline()))
        } else {
            Prompter::Piped(std::io::stdin().lock().lines())
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Prompter::Interactive(_))
    }

    /// Print usage hints before the first question.
    pub fn print_banner(&self) {
        if !self.is_interactive() {
            return;
        }
        println!("{RULE}");
        println!("TRAPEZOIDAL RULE INTEGRAL CALCULATOR");
        println!("{RULE}");
        println!("\nWriting functions:");
        println!("  - Use 'x' as the variable");
        println!("  - Powers: x**2 or x^2");
        println!("  - Trigonometry: sin(x), cos(x), tan(x)");
        println!("  - Exponential: exp(x)");
        println!("  - Natural logarithm: log(x)");
        println!("  - Square root: sqrt(x)");
        println!("  - Constants: pi, e");
        println!("\nExamples:");
        println!("  - x**2 + 3*x + 1");
        println!("  - sin(x) + cos(x)");
        println!("  - exp(-x**2)");
        println!("  - 1/x");
        println!("  - sqrt(x)");
        println!("{RULE}");
    }

    /// Print a numbered section heading before a group of questions.
    pub fn section(&self, number: usize, title: &str) {
        if self.is_interactive() {
            println!("\n[{number}] {title}");
            println!("{THIN_RULE}");
        }
    }

    /// Ask one question. `Ok(None)` means the input ended.
    pub fn ask(&mut self, label: &str) -> Result<Option<String>, CliError> {
        match self {
            Prompter::Interactive(editor) => {
                let prompt = DefaultPrompt::new(
                    DefaultPromptSegment::Basic(label.to_string()),
                    DefaultPromptSegment::Empty,
                );
                match editor.read_line(&prompt).map_err(CliError::Editor)? {
                    Signal::Success(buffer) => Ok(Some(buffer)),
                    Signal::CtrlD | Signal::CtrlC => Ok(None),
                }
            }
            Prompter::Piped(lines) => lines.next().transpose().map_err(CliError::Editor),
        }
    }

    /// Ask a question that must be answered.
    pub fn ask_required(&mut self, label: &str, name: &'static str) -> Result<String, CliError> {
        self.ask(label)?.ok_or(CliError::MissingInput { name })
    }
}
