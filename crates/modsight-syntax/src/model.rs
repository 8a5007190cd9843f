//! In-memory model of a parsed module file.

use lsp_types::Uri;

use crate::span::Span;

/// The `module` directive: the module's own path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDecl {
    /// Declared module path.
    pub path: String,
}

/// The `go` directive: the minimum language version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoVersion {
    /// Declared version, e.g. `1.21`.
    pub version: String,
}

/// A declared dependency.
///
/// The span covers the requirement from its leading `require` keyword (or
/// from the path when it sits inside a `require ( … )` block) to the end of
/// the version token. A trailing comment such as `// indirect` is not part
/// of the span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Dependency module path.
    pub path: String,
    /// Declared version.
    pub version: String,
    /// True when the line carries an `// indirect` marker.
    pub indirect: bool,
    /// Source span of the requirement.
    pub span: Span,
}

/// A `replace` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Module path being replaced.
    pub old_path: String,
    /// Version being replaced; `None` replaces every version.
    pub old_version: Option<String>,
    /// Replacement module path or local directory.
    pub new_path: String,
    /// Replacement version; `None` for local directories.
    pub new_version: Option<String>,
}

impl Replacement {
    /// Returns true when the replacement points at a local directory.
    #[must_use]
    pub fn is_local(&self) -> bool {
        is_local_path(&self.new_path)
    }
}

/// An `exclude` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    /// Excluded module path.
    pub path: String,
    /// Excluded version.
    pub version: String,
}

/// Kind-specific payload of a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `module <path>`.
    Module(ModuleDecl),
    /// `go <version>`.
    Go(GoVersion),
    /// `require <path> <version>`.
    Require(Requirement),
    /// `replace <old> [version] => <new> [version]`.
    Replace(Replacement),
    /// `exclude <path> <version>`.
    Exclude(Exclusion),
    /// A line starting with an unrecognised keyword.
    Unknown {
        /// The unrecognised keyword.
        keyword: String,
    },
}

/// A single parsed directive and its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    kind: DirectiveKind,
    span: Span,
}

impl Directive {
    /// Creates a directive.
    #[must_use]
    pub const fn new(kind: DirectiveKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Kind-specific payload.
    #[must_use]
    pub const fn kind(&self) -> &DirectiveKind {
        &self.kind
    }

    /// Span from the first token to the last token, comments excluded.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Keyword that introduced the directive.
    #[must_use]
    pub fn keyword(&self) -> &str {
        match &self.kind {
            DirectiveKind::Module(_) => "module",
            DirectiveKind::Go(_) => "go",
            DirectiveKind::Require(_) => "require",
            DirectiveKind::Replace(_) => "replace",
            DirectiveKind::Exclude(_) => "exclude",
            DirectiveKind::Unknown { keyword } => keyword,
        }
    }
}

/// A parsed module file.
///
/// Immutable once built; a new value is parsed for every snapshot version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFile {
    uri: Uri,
    text: String,
    directives: Vec<Directive>,
}

impl ModuleFile {
    /// Builds a module file from its identity, text, and directives.
    #[must_use]
    pub const fn new(uri: Uri, text: String, directives: Vec<Directive>) -> Self {
        Self {
            uri,
            text,
            directives,
        }
    }

    /// Identity of the file.
    #[must_use]
    pub const fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Raw text the model was parsed from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Directives in source order.
    #[must_use]
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Requirements in source order, duplicates included.
    pub fn requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.directives.iter().filter_map(|directive| match directive.kind() {
            DirectiveKind::Require(requirement) => Some(requirement),
            _ => None,
        })
    }

    /// Replacements in source order.
    pub fn replacements(&self) -> impl Iterator<Item = &Replacement> {
        self.directives.iter().filter_map(|directive| match directive.kind() {
            DirectiveKind::Replace(replacement) => Some(replacement),
            _ => None,
        })
    }

    /// Exclusions in source order.
    pub fn exclusions(&self) -> impl Iterator<Item = &Exclusion> {
        self.directives.iter().filter_map(|directive| match directive.kind() {
            DirectiveKind::Exclude(exclusion) => Some(exclusion),
            _ => None,
        })
    }

    /// Declared module path, if any.
    #[must_use]
    pub fn module_path(&self) -> Option<&str> {
        self.directives
            .iter()
            .find_map(|directive| match directive.kind() {
                DirectiveKind::Module(decl) => Some(decl.path.as_str()),
                _ => None,
            })
    }

    /// Declared language version, if any.
    #[must_use]
    pub fn go_version(&self) -> Option<&str> {
        self.directives
            .iter()
            .find_map(|directive| match directive.kind() {
                DirectiveKind::Go(go) => Some(go.version.as_str()),
                _ => None,
            })
    }

    /// Source text of a directive belonging to this file.
    #[must_use]
    pub fn directive_text(&self, directive: &Directive) -> Option<&str> {
        directive.span().text(&self.text)
    }
}

/// Reports whether a replacement target names a filesystem directory.
pub(crate) fn is_local_path(path: &str) -> bool {
    ["./", "../", "/", ".\\", "..\\"]
        .iter()
        .any(|prefix| path.starts_with(prefix))
        || path == "."
        || path == ".."
}
