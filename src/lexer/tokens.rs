use std::fmt::Display;

/// Every category a rule in the catalogue can carry.
///
/// `Skip`, `Newline` and `Mismatch` only ever steer the scanner; they are
/// never part of a returned token sequence.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Lang, // Lang.

    // Types
    Num,
    Deci,
    Alpha,
    Flag,

    // Control flow
    Is,  // if
    Es,  // else
    Tab, // for
    Jab, // while

    GreaterEquals, // >=
    LessEquals,    // <=
    Equals,        // ==
    NotEquals,     // !=
    Greater,
    Less,

    Plus,
    Minus,
    Mult,
    Div,

    OpenCurly,
    CloseCurly,

    Char,
    Identifier,
    Number,
    Assignment,
    End, // ;

    Skip,
    Newline,
    Mismatch,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Lang => "LANG",
            TokenKind::Num => "NUM",
            TokenKind::Deci => "DECI",
            TokenKind::Alpha => "ALPHA",
            TokenKind::Flag => "FLAG",
            TokenKind::Is => "IS",
            TokenKind::Es => "ES",
            TokenKind::Tab => "TAB",
            TokenKind::Jab => "JAB",
            TokenKind::GreaterEquals => "GE",
            TokenKind::LessEquals => "LE",
            TokenKind::Equals => "EQ",
            TokenKind::NotEquals => "NE",
            TokenKind::Greater => "GT",
            TokenKind::Less => "LT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Div => "DIV",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::Char => "CHAR",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::End => "END",
            TokenKind::Skip => "SKIP",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Mismatch => "MISMATCH",
        }
    }

    /// Whether a match of this kind ends up in the token sequence.
    pub fn is_emitted(&self) -> bool {
        !matches!(
            self,
            TokenKind::Skip | TokenKind::Newline | TokenKind::Mismatch
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// 1-based line the lexeme starts on.
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {:?}, {})", self.kind, self.value, self.line)
    }
}

impl Token {
    pub fn debug(&self) {
        println!("{}", self);
    }
}
