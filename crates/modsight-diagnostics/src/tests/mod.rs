//! Tests for the modsight-diagnostics crate.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use modsight_graph::BuildGraphProvider;
use tempfile::TempDir;

use crate::{EngineOptions, FsSnapshot};

mod behaviour;

pub(super) const INDIRECT: &str = "module indirect

go 1.12

require golang.org/x/tools v0.0.0-20191219192050-56b0b28a00f7 // indirect
";

pub(super) const UNUSED: &str = "module unused

go 1.12

require golang.org/x/tools v0.0.0-20191219192050-56b0b28a00f7
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

pub(super) const CLEAN: &str = "module clean

go 1.12

require golang.org/x/tools v0.0.0-20191219192050-56b0b28a00f7
";

pub(super) fn fixture(name: &str) -> Option<&'static str> {
    match name {
        "indirect" => Some(INDIRECT),
        "unused" => Some(UNUSED),
        "invalid_require" => Some(INVALID_REQUIRE),
        "invalid_go" => Some(INVALID_GO),
        "unknown_directive" => Some(UNKNOWN_DIRECTIVE),
        "clean" => Some(CLEAN),
        _ => None,
    }
}

/// A project directory holding a real `go.mod`, plus a separate scratch
/// directory for shadows.
pub(super) struct Workspace {
    project: TempDir,
    scratch: TempDir,
}

impl Workspace {
    pub(super) fn with_module(content: &str) -> Self {
        let project = tempfile::tempdir().expect("project dir");
        fs::write(project.path().join("go.mod"), content).expect("write go.mod");
        Self {
            project,
            scratch: tempfile::tempdir().expect("scratch dir"),
        }
    }

    pub(super) fn module_path(&self) -> Utf8PathBuf {
        utf8(self.project.path()).join("go.mod")
    }

    pub(super) fn project_dir(&self) -> Utf8PathBuf {
        utf8(self.project.path())
    }

    pub(super) fn read_module(&self) -> Vec<u8> {
        fs::read(self.module_path()).expect("read go.mod")
    }

    pub(super) fn options(&self) -> EngineOptions {
        EngineOptions {
            scratch_dir: Some(utf8(self.scratch.path())),
            ..EngineOptions::default()
        }
    }

    pub(super) fn snapshot<P: BuildGraphProvider>(&self, provider: P) -> FsSnapshot<P> {
        FsSnapshot::new(self.module_path(), provider).expect("absolute module path")
    }

    pub(super) fn leftover_shadows(&self) -> usize {
        fs::read_dir(self.scratch.path())
            .expect("read scratch dir")
            .count()
    }
}

fn utf8(path: &std::path::Path) -> Utf8PathBuf {
    Utf8Path::from_path(path).expect("UTF-8 temp path").to_path_buf()
}
