//! Error-tolerant directive parser.
//!
//! The parser walks the text line by line. Each malformed line produces a
//! [`SyntaxFinding`] and is otherwise skipped, so a single bad line never
//! hides problems further down the file.

use lsp_types::Uri;

use crate::lexer::{Token, TokenKind, is_indirect_marker, lex_line};
use crate::model::{
    Directive, DirectiveKind, Exclusion, GoVersion, ModuleDecl, ModuleFile, Replacement,
    Requirement, is_local_path,
};
use crate::span::{LineCol, Span};
use crate::version::{is_valid_go_version, is_valid_module_version};

const MODULE_USAGE: &str = "usage: module module/path";
const GO_USAGE: &str = "usage: go 1.23";
const REQUIRE_USAGE: &str = "usage: require module/path v1.2.3";
const EXCLUDE_USAGE: &str = "usage: exclude module/path v1.2.3";
const REPLACE_USAGE: &str = "usage: replace module/path [v1.2.3] => other/module v1.4\n\t or replace module/path [v1.2.3] => ../local/directory";

/// A malformed construct found while parsing.
///
/// Syntax findings are always errors; the diagnostics layer decides how they
/// are presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxFinding {
    message: String,
    span: Span,
}

impl SyntaxFinding {
    /// Creates a finding.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Location of the problem in the original text.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }
}

/// Result of parsing: a best-effort model plus every finding collected.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    module: ModuleFile,
    findings: Vec<SyntaxFinding>,
}

impl ParseOutcome {
    /// The parsed module file, containing every well-formed directive.
    #[must_use]
    pub const fn module(&self) -> &ModuleFile {
        &self.module
    }

    /// Findings in source order.
    #[must_use]
    pub fn findings(&self) -> &[SyntaxFinding] {
        &self.findings
    }

    /// Returns true when at least one finding was collected.
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Splits the outcome into its model and findings.
    #[must_use]
    pub fn into_parts(self) -> (ModuleFile, Vec<SyntaxFinding>) {
        (self.module, self.findings)
    }
}

/// Parses module file text.
///
/// Never fails: malformed lines are reported as findings and parsing
/// continues with the next line.
#[must_use]
pub fn parse(uri: Uri, text: &str) -> ParseOutcome {
    let mut parser = ModParser::default();
    let mut line_start = 0_usize;
    for (raw, number) in text.split_inclusive('\n').zip(0_u32..) {
        let without_newline = raw.strip_suffix('\n').unwrap_or(raw);
        let content = without_newline
            .strip_suffix('\r')
            .unwrap_or(without_newline);
        parser.line(number, line_start, content);
        line_start += raw.len();
    }
    parser.finish(uri, text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Require,
    Replace,
    Exclude,
}

impl Verb {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "require" => Some(Self::Require),
            "replace" => Some(Self::Replace),
            "exclude" => Some(Self::Exclude),
            _ => None,
        }
    }
}

/// A `keyword (` block awaiting its closing `)`.
///
/// `verb` is `None` for a block whose keyword has no block form; its body is
/// consumed without further findings.
#[derive(Debug, Clone, Copy)]
struct OpenBlock {
    verb: Option<Verb>,
    span: Span,
}

/// Tokens of one line together with the context needed to build spans.
struct Line<'a> {
    number: u32,
    start: usize,
    tokens: Vec<Token>,
    comment: Option<&'a str>,
}

impl Line<'_> {
    fn span(&self, start: usize, end: usize) -> Span {
        Span::on_line(self.number, self.start, start, end)
    }

    fn token_span(&self, token: &Token) -> Span {
        self.span(token.start, token.end)
    }

    fn tokens_span(&self, tokens: &[Token]) -> Option<Span> {
        let first = tokens.first()?;
        let last = tokens.last()?;
        Some(self.span(first.start, last.end))
    }

    fn is_indirect(&self) -> bool {
        self.comment.is_some_and(is_indirect_marker)
    }
}

#[derive(Default)]
struct ModParser {
    directives: Vec<Directive>,
    findings: Vec<SyntaxFinding>,
    block: Option<OpenBlock>,
    module_seen: bool,
    module_attempted: bool,
    go_seen: bool,
}

impl ModParser {
    fn report(&mut self, message: impl Into<String>, span: Span) {
        self.findings.push(SyntaxFinding::new(message, span));
    }

    fn push(&mut self, kind: DirectiveKind, span: Span) {
        self.directives.push(Directive::new(kind, span));
    }

    fn line(&mut self, number: u32, start: usize, content: &str) {
        let lexed = lex_line(content, start);
        if let Some(quote) = lexed.unterminated_quote {
            let end = start + content.trim_end().len();
            self.report(
                "invalid quoted string",
                Span::on_line(number, start, quote, end),
            );
            return;
        }

        let line = Line {
            number,
            start,
            tokens: lexed.tokens,
            comment: lexed.comment,
        };
        let Some(span) = line.tokens_span(&line.tokens) else {
            return;
        };

        if let Some(block) = self.block {
            if line
                .tokens
                .first()
                .is_some_and(|token| token.kind == TokenKind::CloseParen)
            {
                self.block = None;
            } else if let Some(verb) = block.verb {
                self.entry(verb, &line, &line.tokens, span);
            }
            return;
        }

        self.statement(&line, span);
    }

    fn statement(&mut self, line: &Line<'_>, span: Span) {
        let Some((first, args)) = line.tokens.split_first() else {
            return;
        };
        match first.kind {
            TokenKind::CloseParen => {
                self.report("unexpected )", line.token_span(first));
                return;
            }
            TokenKind::OpenParen => {
                self.report("unexpected (", line.token_span(first));
                return;
            }
            TokenKind::Word | TokenKind::Quoted => {}
        }

        let keyword = first.value.as_str();
        if let [open] = args
            && open.kind == TokenKind::OpenParen
        {
            self.open_block(first, span);
            return;
        }

        if let Some(verb) = Verb::from_keyword(keyword) {
            self.entry(verb, line, args, span);
            return;
        }
        match keyword {
            "module" => self.module(args, span),
            "go" => self.go(args, span),
            _ => self.unknown(line, first, span),
        }
    }

    fn open_block(&mut self, keyword: &Token, span: Span) {
        let verb = Verb::from_keyword(&keyword.value);
        if verb.is_none() {
            self.module_attempted |= keyword.value == "module";
            self.report(format!("unknown block type: {}", keyword.value), span);
        }
        self.block = Some(OpenBlock { verb, span });
    }

    fn unknown(&mut self, line: &Line<'_>, keyword: &Token, span: Span) {
        self.report(
            format!("unknown directive: {}", keyword.value),
            line.token_span(keyword),
        );
        self.push(
            DirectiveKind::Unknown {
                keyword: keyword.value.clone(),
            },
            span,
        );
    }

    fn module(&mut self, args: &[Token], span: Span) {
        self.module_attempted = true;
        if self.module_seen {
            self.report("repeated module statement", span);
            return;
        }
        match args {
            [path] if path.is_argument() => {
                self.module_seen = true;
                self.push(
                    DirectiveKind::Module(ModuleDecl {
                        path: path.value.clone(),
                    }),
                    span,
                );
            }
            _ => self.report(MODULE_USAGE, span),
        }
    }

    fn go(&mut self, args: &[Token], span: Span) {
        if self.go_seen {
            self.report("repeated go statement", span);
            return;
        }
        match args {
            [version] if version.kind == TokenKind::Word && is_valid_go_version(&version.value) => {
                self.go_seen = true;
                self.push(
                    DirectiveKind::Go(GoVersion {
                        version: version.value.clone(),
                    }),
                    span,
                );
            }
            _ => self.report(GO_USAGE, span),
        }
    }

    fn entry(&mut self, verb: Verb, line: &Line<'_>, args: &[Token], span: Span) {
        match verb {
            Verb::Require => {
                let Some((path, version)) = path_and_version(args) else {
                    self.report(REQUIRE_USAGE, span);
                    return;
                };
                if !self.check_version(line, version) {
                    return;
                }
                let requirement = Requirement {
                    path: path.value.clone(),
                    version: version.value.clone(),
                    indirect: line.is_indirect(),
                    span,
                };
                self.push(DirectiveKind::Require(requirement), span);
            }
            Verb::Exclude => {
                let Some((path, version)) = path_and_version(args) else {
                    self.report(EXCLUDE_USAGE, span);
                    return;
                };
                if !self.check_version(line, version) {
                    return;
                }
                let exclusion = Exclusion {
                    path: path.value.clone(),
                    version: version.value.clone(),
                };
                self.push(DirectiveKind::Exclude(exclusion), span);
            }
            Verb::Replace => self.replace(line, args, span),
        }
    }

    fn replace(&mut self, line: &Line<'_>, args: &[Token], span: Span) {
        let Some(arrow) = args.iter().position(|token| token.is_word("=>")) else {
            self.report(REPLACE_USAGE, span);
            return;
        };
        let (left, rest) = args.split_at(arrow);
        let right = rest.get(1..).unwrap_or_default();
        let (Some((old_path, old_version)), Some((new_path, new_version))) =
            (path_and_optional_version(left), path_and_optional_version(right))
        else {
            self.report(REPLACE_USAGE, span);
            return;
        };

        if let Some(version) = old_version
            && !self.check_version(line, version)
        {
            return;
        }

        match (is_local_path(&new_path.value), new_version) {
            (true, Some(version)) => {
                self.report(
                    "replacement directory must not be followed by a version",
                    line.token_span(version),
                );
                return;
            }
            (false, None) => {
                self.report(
                    "replacement module without version must be directory path (rooted or starting with ./ or ../)",
                    line.token_span(new_path),
                );
                return;
            }
            (false, Some(version)) => {
                if !self.check_version(line, version) {
                    return;
                }
            }
            (true, None) => {}
        }

        let replacement = Replacement {
            old_path: old_path.value.clone(),
            old_version: old_version.map(|token| token.value.clone()),
            new_path: new_path.value.clone(),
            new_version: new_version.map(|token| token.value.clone()),
        };
        self.push(DirectiveKind::Replace(replacement), span);
    }

    fn check_version(&mut self, line: &Line<'_>, version: &Token) -> bool {
        if is_valid_module_version(&version.value) {
            return true;
        }
        self.report(
            format!(
                "version {:?} invalid: must be of the form v1.2.3",
                version.value
            ),
            line.token_span(version),
        );
        false
    }

    fn finish(mut self, uri: Uri, text: &str) -> ParseOutcome {
        if let Some(block) = self.block.take() {
            self.report("unterminated block", block.span);
        }
        if !self.module_attempted {
            self.report(
                "no module declaration in go.mod",
                Span::empty_at(0, LineCol::new(0, 0)),
            );
        }
        ParseOutcome {
            module: ModuleFile::new(uri, text.to_owned(), self.directives),
            findings: self.findings,
        }
    }
}

fn path_and_version(args: &[Token]) -> Option<(&Token, &Token)> {
    match args {
        [path, version] if path.is_argument() && version.is_argument() => Some((path, version)),
        _ => None,
    }
}

fn path_and_optional_version(args: &[Token]) -> Option<(&Token, Option<&Token>)> {
    match args {
        [path] if path.is_argument() => Some((path, None)),
        [path, version] if path.is_argument() && version.is_argument() => {
            Some((path, Some(version)))
        }
        _ => None,
    }
}
