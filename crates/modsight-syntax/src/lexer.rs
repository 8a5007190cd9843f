//! Line tokenizer for module files.
//!
//! Tokens are whitespace separated words, double-quoted strings, and the
//! block delimiters `(` and `)`. A `//` outside a quoted string begins a
//! comment running to the end of the line, even when it directly follows a
//! word. All offsets are absolute byte
//! offsets into the original text.

/// Classification of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// A bare word such as a keyword, path, or version.
    Word,
    /// A double-quoted string; the value holds the unescaped contents.
    Quoted,
    /// Block opener `(`.
    OpenParen,
    /// Block closer `)`.
    CloseParen,
}

/// A token with its absolute byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) value: String,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Token {
    /// Returns true for words and quoted strings.
    pub(crate) const fn is_argument(&self) -> bool {
        matches!(self.kind, TokenKind::Word | TokenKind::Quoted)
    }

    /// Returns true when this is the bare word `word`.
    pub(crate) fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Word && self.value == word
    }
}

/// The tokens of one line plus its trailing comment.
#[derive(Debug, Default)]
pub(crate) struct LexedLine<'a> {
    pub(crate) tokens: Vec<Token>,
    /// Comment text following `//`, untrimmed.
    pub(crate) comment: Option<&'a str>,
    /// Absolute offset of a quote that was never closed.
    pub(crate) unterminated_quote: Option<usize>,
}

/// Splits a single line (without its line terminator) into tokens.
pub(crate) fn lex_line(line: &str, line_start: usize) -> LexedLine<'_> {
    let mut lexed = LexedLine::default();
    let mut chars = line.char_indices().peekable();

    while let Some(&(index, character)) = chars.peek() {
        if character.is_whitespace() {
            chars.next();
            continue;
        }
        if line.get(index..).is_some_and(|rest| rest.starts_with("//")) {
            lexed.comment = line.get(index + 2..);
            break;
        }

        match character {
            '(' | ')' => {
                chars.next();
                let kind = if character == '(' {
                    TokenKind::OpenParen
                } else {
                    TokenKind::CloseParen
                };
                lexed.tokens.push(Token {
                    kind,
                    value: character.to_string(),
                    start: line_start + index,
                    end: line_start + index + 1,
                });
            }
            '"' => {
                chars.next();
                let mut value = String::new();
                let mut closed_at = None;
                while let Some((inner_index, inner)) = chars.next() {
                    match inner {
                        '"' => {
                            closed_at = Some(inner_index + 1);
                            break;
                        }
                        '\\' => {
                            if let Some((_, escaped)) = chars.next() {
                                value.push(escaped);
                            }
                        }
                        other => value.push(other),
                    }
                }
                let Some(end) = closed_at else {
                    lexed.unterminated_quote = Some(line_start + index);
                    break;
                };
                lexed.tokens.push(Token {
                    kind: TokenKind::Quoted,
                    value,
                    start: line_start + index,
                    end: line_start + end,
                });
            }
            _ => {
                let mut end = line.len();
                while let Some(&(word_index, word_char)) = chars.peek() {
                    let comment_follows = line
                        .get(word_index..)
                        .is_some_and(|rest| rest.starts_with("//"));
                    if word_char.is_whitespace()
                        || word_char == '('
                        || word_char == ')'
                        || comment_follows
                    {
                        end = word_index;
                        break;
                    }
                    chars.next();
                }
                let value = line.get(index..end).unwrap_or_default().to_owned();
                lexed.tokens.push(Token {
                    kind: TokenKind::Word,
                    value,
                    start: line_start + index,
                    end: line_start + end,
                });
            }
        }
    }

    lexed
}

/// Reports whether a trailing comment marks a requirement as indirect.
///
/// The marker is the comment text `indirect`, optionally followed by `;` and
/// further notes.
pub(crate) fn is_indirect_marker(comment: &str) -> bool {
    let text = comment.trim();
    text == "indirect" || text.starts_with("indirect;")
}
