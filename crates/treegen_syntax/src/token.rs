//! Token kinds referenced by syntax tree nodes.

/// The kind of a lexical token carried by a node (operators, string quote
/// style, accessor keywords).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenType {
    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equal,
    PlusEqual,
    MinusEqual,
    EqualEqual,
    BangEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Bang,
    PlusPlus,
    MinusMinus,
    And,
    Or,

    // String quote styles
    SingleQuote,
    DoubleQuote,
    Backtick,

    // Accessor keywords
    Public,
    Private,
    Protected,
    Static,
    Abstract,
    Get,
    Set,
}

impl TokenType {
    /// Source text of the token.
    pub fn text(self) -> &'static str {
        match self {
            TokenType::Plus => "+",
            TokenType::Minus => "-",
            TokenType::Star => "*",
            TokenType::Slash => "/",
            TokenType::Percent => "%",
            TokenType::Equal => "=",
            TokenType::PlusEqual => "+=",
            TokenType::MinusEqual => "-=",
            TokenType::EqualEqual => "==",
            TokenType::BangEqual => "!=",
            TokenType::Less => "<",
            TokenType::LessEqual => "<=",
            TokenType::Greater => ">",
            TokenType::GreaterEqual => ">=",
            TokenType::Bang => "!",
            TokenType::PlusPlus => "++",
            TokenType::MinusMinus => "--",
            TokenType::And => "&&",
            TokenType::Or => "||",
            TokenType::SingleQuote => "'",
            TokenType::DoubleQuote => "\"",
            TokenType::Backtick => "`",
            TokenType::Public => "public",
            TokenType::Private => "private",
            TokenType::Protected => "protected",
            TokenType::Static => "static",
            TokenType::Abstract => "abstract",
            TokenType::Get => "get",
            TokenType::Set => "set",
        }
    }

    pub fn is_accessor_keyword(self) -> bool {
        matches!(
            self,
            TokenType::Public
                | TokenType::Private
                | TokenType::Protected
                | TokenType::Static
                | TokenType::Abstract
                | TokenType::Get
                | TokenType::Set
        )
    }

    pub fn is_assignment(self) -> bool {
        matches!(self, TokenType::Equal | TokenType::PlusEqual | TokenType::MinusEqual)
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
