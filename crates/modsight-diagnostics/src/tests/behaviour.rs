//! Behaviour-driven tests for the diagnostics pass.

use std::cell::RefCell;
use std::str::FromStr;

use lsp_types::{Diagnostic, DiagnosticSeverity};
use modsight_graph::{BuildGraphFacts, DependencyUse, FixedBuildGraph};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio_util::sync::CancellationToken;

use super::{Workspace, fixture as module_fixture};
use crate::{DiagnosticsReport, ModuleSnapshot, PassContext, SemanticStatus, compute_diagnostics};

#[derive(Default)]
struct TestWorld {
    workspace: Option<Workspace>,
    original: Vec<u8>,
    facts: BuildGraphFacts,
    unavailable: bool,
    reports: Vec<DiagnosticsReport>,
}

impl TestWorld {
    fn workspace(&self) -> &Workspace {
        self.workspace.as_ref().expect("workspace configured")
    }

    fn report(&self) -> &DiagnosticsReport {
        self.reports.first().expect("diagnostics computed")
    }

    fn first_diagnostic(&self) -> &Diagnostic {
        self.report()
            .diagnostics()
            .values()
            .next()
            .and_then(|diagnostics| diagnostics.first())
            .expect("a diagnostic")
    }
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches('"')
}

#[given("a workspace whose module file is the {name} fixture")]
fn given_workspace(world: &RefCell<TestWorld>, name: String) {
    let text = module_fixture(strip_quotes(&name)).expect("known fixture");
    let workspace = Workspace::with_module(text);
    let mut state = world.borrow_mut();
    state.original = workspace.read_module();
    state.workspace = Some(workspace);
}

#[given("the build graph reports {path} as {usage}")]
fn given_fact(world: &RefCell<TestWorld>, path: String, usage: String) {
    let parsed = DependencyUse::from_str(strip_quotes(&usage)).expect("known usage");
    world.borrow_mut().facts.insert(strip_quotes(&path), parsed);
}

#[given("the build graph is unavailable")]
fn given_unavailable(world: &RefCell<TestWorld>) {
    world.borrow_mut().unavailable = true;
}

fn compute(world: &RefCell<TestWorld>, passes: usize) {
    let mut state = world.borrow_mut();
    let provider = if state.unavailable {
        FixedBuildGraph::failing("toolchain not installed")
    } else {
        FixedBuildGraph::with_facts(state.facts.clone())
    };
    let workspace = state.workspace();
    let snapshot = workspace.snapshot(provider);
    let context = PassContext::new(CancellationToken::new(), workspace.options());
    let reports: Vec<_> = (0..passes)
        .map(|_| compute_diagnostics(&context, &snapshot as &dyn ModuleSnapshot))
        .collect::<Result<_, _>>()
        .expect("pass completes");
    state.reports = reports;
}

#[when("diagnostics are computed")]
fn when_computed(world: &RefCell<TestWorld>) {
    compute(world, 1);
}

#[when("diagnostics are computed twice")]
fn when_computed_twice(world: &RefCell<TestWorld>) {
    compute(world, 2);
}

#[then("the module file has {count} diagnostics")]
fn then_count(world: &RefCell<TestWorld>, count: usize) {
    let state = world.borrow();
    let diagnostics = state.report().diagnostics();
    assert_eq!(diagnostics.len(), 1, "exactly one file entry");
    let total: usize = diagnostics.values().map(Vec::len).sum();
    assert_eq!(total, count);
}

#[then("no diagnostics are reported")]
fn then_none(world: &RefCell<TestWorld>) {
    assert!(world.borrow().report().diagnostics().is_empty());
}

#[then("the first diagnostic reads {message}")]
fn then_message(world: &RefCell<TestWorld>, message: String) {
    let state = world.borrow();
    assert_eq!(state.first_diagnostic().message, strip_quotes(&message));
}

#[then("the first diagnostic comes from {source} with severity {severity}")]
fn then_source_and_severity(world: &RefCell<TestWorld>, source: String, severity: String) {
    let state = world.borrow();
    let diagnostic = state.first_diagnostic();
    assert_eq!(diagnostic.source.as_deref(), Some(strip_quotes(&source)));
    let expected = match strip_quotes(&severity) {
        "error" => DiagnosticSeverity::ERROR,
        "warning" => DiagnosticSeverity::WARNING,
        other => panic!("unknown severity: {other}"),
    };
    assert_eq!(diagnostic.severity, Some(expected));
}

#[then("the first diagnostic spans line {line} from character {start} to character {end}")]
fn then_range(world: &RefCell<TestWorld>, line: u32, start: u32, end: u32) {
    let state = world.borrow();
    let range = state.first_diagnostic().range;
    assert_eq!((range.start.line, range.start.character), (line, start));
    assert_eq!((range.end.line, range.end.character), (line, end));
}

#[then("semantic analysis was skipped because {reason}")]
fn then_skipped(world: &RefCell<TestWorld>, reason: String) {
    let state = world.borrow();
    let SemanticStatus::Skipped(actual) = state.report().semantic_status() else {
        panic!("semantic analysis ran");
    };
    assert_eq!(actual.to_string(), strip_quotes(&reason));
}

#[then("both passes report the same diagnostics")]
fn then_identical(world: &RefCell<TestWorld>) {
    let state = world.borrow();
    let [first, second] = state.reports.as_slice() else {
        panic!("expected two passes");
    };
    assert_eq!(first, second);
}

#[then("the real module file is unchanged")]
fn then_unchanged(world: &RefCell<TestWorld>) {
    let state = world.borrow();
    assert_eq!(state.workspace().read_module(), state.original);
}

#[scenario(
    path = "tests/features/module_diagnostics.feature",
    name = "Directly used dependency marked indirect"
)]
fn indirect_dependency(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/module_diagnostics.feature",
    name = "Unused dependency"
)]
fn unused_dependency(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/module_diagnostics.feature",
    name = "Malformed require directive"
)]
fn malformed_require(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/module_diagnostics.feature",
    name = "Malformed go directive"
)]
fn malformed_go(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/module_diagnostics.feature",
    name = "Unknown directive"
)]
fn unknown_directive(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/module_diagnostics.feature",
    name = "Clean module file"
)]
fn clean_module(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/module_diagnostics.feature",
    name = "Repeated passes agree"
)]
fn repeated_passes(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/module_diagnostics.feature",
    name = "Build graph unavailable"
)]
fn graph_unavailable(world: RefCell<TestWorld>) {
    let _ = world;
}
