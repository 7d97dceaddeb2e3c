use logos::Logos;

use crate::error::ParseError;

/// A position in the source text, as a 1-based line and column pair.
///
/// Positions are carried by every token and every AST node and are used only
/// for diagnostics; they never affect evaluation semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// The source line (1-based).
    pub line: usize,
    /// The source column (1-based).
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The lexical category of a token.
///
/// This is the closed set of categories the downstream stages dispatch on.
/// The textual value of the token disambiguates within a category (e.g. which
/// keyword, which operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A numeric literal such as `42` or `3.14`.
    NumberLiteral,
    /// A string literal; the token value holds the text without quotes.
    StringLiteral,
    /// A boolean literal, `true` or `false`.
    Boolean,
    /// A variable name.
    Identifier,
    /// A keyword: `let`, `const`, `if` or `else`.
    Keyword,
    /// A declared data type: `number`, `string` or `boolean`.
    DataType,
    /// An operator character such as `+` or `>`.
    Operator,
    /// The assignment sign `=`.
    Assignation,
    /// A built-in function name from the print family.
    Function,
    /// Punctuation: parentheses, braces, `;`, `:` or `,`.
    Punctuation,
}

/// A single lexical unit of a quill program.
///
/// Tokens are immutable once created. They carry their category, their exact
/// source text (for string literals, the text without the quotes) and the
/// span they were read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The lexical category.
    pub kind: TokenKind,
    /// The textual value.
    pub value: String,
    /// Where the token starts in the source.
    pub start: Position,
    /// Where the token ends in the source (exclusive column).
    pub end: Position,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, value: impl Into<String>, start: Position, end: Position) -> Self {
        Self {
            kind,
            value: value.into(),
            start,
            end,
        }
    }

    /// The position used for diagnostics about this token.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.start
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset of its first character
/// so token columns can be computed from byte spans.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
    /// The byte offset at which the current line starts.
    pub line_start: usize,
}

/// The raw lexeme patterns recognized by the scanner.
///
/// `RawToken` exists only inside the lexer; [`tokenize`] maps every matched
/// lexeme to a [`Token`] with its [`TokenKind`] and source span.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// String literal tokens, single- or double-quoted, on one line.
    #[regex(r#""[^"\n]*""#)]
    #[regex(r"'[^'\n]*'")]
    Str,
    /// `true` or `false`
    #[token("true")]
    #[token("false")]
    Bool,
    /// `let`
    #[token("let")]
    Let,
    /// `const`
    #[token("const")]
    Const,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `number`
    #[token("number")]
    TypeNumber,
    /// `string`
    #[token("string")]
    TypeString,
    /// `boolean`
    #[token("boolean")]
    TypeBoolean,
    /// `println`
    #[token("println")]
    Println,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x` or `greeting`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// `=`
    #[token("=")]
    Equals,
    /// A single operator character.
    #[regex(r"[+\-*/><^]")]
    Operator,
    /// A single punctuation character.
    #[regex(r"[(){};:,]")]
    Punctuation,
    /// Line breaks; skipped, but they advance the position tracking.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Converts source text into a flat sequence of tokens.
///
/// This is the input boundary of the pipeline: everything downstream (parser,
/// interpreter, formatter, linter) consumes the token sequence produced here
/// and never looks at the source text again.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The tokens in source order, with whitespace and comments removed.
///
/// # Errors
/// Returns `ParseError::UnrecognizedCharacter` when the scanner hits text
/// that matches no lexeme.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras { line: 1, line_start: 0 });

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        let line = lexer.extras.line;
        let column = span.start - lexer.extras.line_start + 1;
        let start = Position { line, column };
        let end = Position {
            line,
            column: column + span.len(),
        };
        let slice = lexer.slice();

        let token = match raw {
            Ok(RawToken::Number) => Token::new(TokenKind::NumberLiteral, slice, start, end),
            Ok(RawToken::Str) => {
                // The quotes delimit the literal; the value is the inner text.
                Token::new(
                    TokenKind::StringLiteral,
                    &slice[1..slice.len() - 1],
                    start,
                    end,
                )
            }
            Ok(RawToken::Bool) => Token::new(TokenKind::Boolean, slice, start, end),
            Ok(RawToken::Let | RawToken::Const | RawToken::If | RawToken::Else) => {
                Token::new(TokenKind::Keyword, slice, start, end)
            }
            Ok(RawToken::TypeNumber | RawToken::TypeString | RawToken::TypeBoolean) => {
                Token::new(TokenKind::DataType, slice, start, end)
            }
            Ok(RawToken::Println | RawToken::Print) => {
                Token::new(TokenKind::Function, slice, start, end)
            }
            Ok(RawToken::Identifier) => Token::new(TokenKind::Identifier, slice, start, end),
            Ok(RawToken::Equals) => Token::new(TokenKind::Assignation, slice, start, end),
            Ok(RawToken::Operator) => Token::new(TokenKind::Operator, slice, start, end),
            Ok(RawToken::Punctuation) => Token::new(TokenKind::Punctuation, slice, start, end),
            // Skipped lexemes are never yielded by the iterator.
            Ok(RawToken::Comment | RawToken::NewLine | RawToken::Ignored) => continue,
            Err(()) => {
                return Err(ParseError::UnrecognizedCharacter {
                    found: slice.to_string(),
                    line,
                })
            }
        };

        tokens.push(token);
    }

    Ok(tokens)
}

/// Groups a token stream by source row.
///
/// This is the shape the linter consumes: one `Vec<Token>` per line that
/// contains at least one token. Empty lines produce no group.
#[must_use]
pub fn group_by_line(tokens: &[Token]) -> Vec<Vec<Token>> {
    let mut rows: Vec<Vec<Token>> = Vec::new();
    let mut current_line = 0;

    for token in tokens {
        if token.start.line != current_line {
            current_line = token.start.line;
            rows.push(Vec::new());
        }
        if let Some(row) = rows.last_mut() {
            row.push(token.clone());
        }
    }

    rows
}
