use nu_ansi_term::{Color, Style};
use reedline::StyledText;
use trapezoid_core::stdlib::{Constant, Function};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Plain,
    Number,
    Constant,
    Function,
    Variable,
    Operator,
    Unknown,
}

impl Token {
    fn color(self) -> Color {
        match self {
            Token::Plain => Color::White,
            Token::Number | Token::Constant => Color::Cyan,
            Token::Function => Color::Blue,
            Token::Variable => Color::Red,
            Token::Operator => Color::Magenta,
            Token::Unknown => Color::LightRed,
        }
    }
}

/// Colors integrand text while it is typed. Names outside the whitelist are
/// flagged before the line is submitted.
pub struct Highlighter;

impl Highlighter {
    pub fn new() -> Self {
        Self
    }
}

fn classify_word(word: &str) -> Token {
    if word == "x" {
        Token::Variable
    } else if Constant::lookup(word).is_some() {
        Token::Constant
    } else if Function::lookup(word).is_some() {
        Token::Function
    } else {
        Token::Unknown
    }
}

/// Split `line` into highlighted runs.
fn tokenize(line: &str) -> Vec<(Token, &str)> {
    let mut runs = Vec::new();
    let bytes = line.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        let c = bytes[start];
        let (token, len) = if c.is_ascii_alphabetic() || c == b'_' {
            let len = line[start..]
                .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
                .unwrap_or(line.len() - start);
            (classify_word(&line[start..start + len]), len)
        } else if c.is_ascii_digit() || c == b'.' {
            let len = line[start..]
                .find(|ch: char| !(ch.is_ascii_digit() || ch == '.'))
                .unwrap_or(line.len() - start);
            (Token::Number, len)
        } else if b"+-*/^".contains(&c) {
            (Token::Operator, 1)
        } else {
            let len = line[start..].chars().next().map_or(1, char::len_utf8);
            (Token::Plain, len)
        };
        runs.push((token, &line[start..start + len]));
        start += len;
    }

    runs
}

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        for (token, text) in tokenize(line) {
            output.push((Style::new().fg(token.color()), text.to_string()));
        }
        output
    }
}
