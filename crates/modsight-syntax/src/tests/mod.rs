//! Tests for the modsight-syntax crate.

use std::str::FromStr;

use lsp_types::Uri;

use crate::{ParseOutcome, parse};

mod behaviour;

pub(super) const INDIRECT: &str = "module indirect

go 1.12

require golang.org/x/tools v0.0.0-20191219192050-56b0b28a00f7 // indirect
";

pub(super) const INVALID_REQUIRE: &str = "module invalidrequire

go 1.12

require golang.or
";

pub(super) const INVALID_GO: &str = "module invalidgo

go 1

require golang.org/x/tools v0.0.0-20191219192050-56b0b28a00f7
";

pub(super) const UNKNOWN_DIRECTIVE: &str = "module unknowndirective

go 1.12

require golang.org/x/tools v0.0.0-20191219192050-56b0b28a00f7

yo
";

pub(super) const WELL_FORMED: &str = "module example.com/app

go 1.21

require (
\tgithub.com/pkg/errors v0.9.1
\tgolang.org/x/tools v0.1.0 // indirect
)

require example.com/single v1.2.3 // indirect; kept for tests

replace example.com/old v1.0.0 => example.com/new v1.1.0

replace example.com/local => ../local

exclude example.com/bad v0.0.1
";

pub(super) fn fixture(name: &str) -> Option<&'static str> {
    match name {
        "indirect" => Some(INDIRECT),
        "invalid_require" => Some(INVALID_REQUIRE),
        "invalid_go" => Some(INVALID_GO),
        "unknown_directive" => Some(UNKNOWN_DIRECTIVE),
        "well_formed" => Some(WELL_FORMED),
        _ => None,
    }
}

pub(super) fn test_uri() -> Uri {
    Uri::from_str("file:///work/go.mod").expect("valid URI")
}

pub(super) fn parse_text(text: &str) -> ParseOutcome {
    parse(test_uri(), text)
}
