//! Behaviour-driven tests for module file parsing.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use super::{fixture as module_fixture, parse_text};
use crate::ParseOutcome;

#[derive(Default)]
struct TestWorld {
    text: Option<&'static str>,
    outcome: Option<ParseOutcome>,
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches('"')
}

#[given("the module file fixture {name}")]
fn given_fixture(world: &RefCell<TestWorld>, name: String) {
    let fixture_name = strip_quotes(&name);
    let text = module_fixture(fixture_name).expect("known fixture");
    world.borrow_mut().text = Some(text);
}

#[when("the module file is parsed")]
fn when_parsed(world: &RefCell<TestWorld>) {
    let mut state = world.borrow_mut();
    let text = state.text.expect("fixture selected");
    state.outcome = Some(parse_text(text));
}

#[then("the finding count is {count}")]
fn then_finding_count(world: &RefCell<TestWorld>, count: usize) {
    let state = world.borrow();
    let outcome = state.outcome.as_ref().expect("parsed");
    assert_eq!(outcome.findings().len(), count, "{:?}", outcome.findings());
}

#[then("the first finding reads {message}")]
fn then_first_message(world: &RefCell<TestWorld>, message: String) {
    let state = world.borrow();
    let outcome = state.outcome.as_ref().expect("parsed");
    let finding = outcome.findings().first().expect("a finding");
    assert_eq!(finding.message(), strip_quotes(&message));
}

#[then("the first finding spans line {line} from column {start} to column {end}")]
fn then_first_span(world: &RefCell<TestWorld>, line: u32, start: u32, end: u32) {
    let state = world.borrow();
    let outcome = state.outcome.as_ref().expect("parsed");
    let span = outcome.findings().first().expect("a finding").span();
    assert_eq!((span.start.line, span.start.column), (line, start));
    assert_eq!((span.end.line, span.end.column), (line, end));
}

#[then("the module declares {count} requirements")]
fn then_requirement_count(world: &RefCell<TestWorld>, count: usize) {
    let state = world.borrow();
    let outcome = state.outcome.as_ref().expect("parsed");
    assert_eq!(outcome.module().requirements().count(), count);
}

#[then("requirement {path} is marked indirect")]
fn then_marked_indirect(world: &RefCell<TestWorld>, path: String) {
    let state = world.borrow();
    let outcome = state.outcome.as_ref().expect("parsed");
    let wanted = strip_quotes(&path);
    let requirement = outcome
        .module()
        .requirements()
        .find(|requirement| requirement.path == wanted)
        .expect("requirement present");
    assert!(requirement.indirect);
}

#[scenario(
    path = "tests/features/module_syntax.feature",
    name = "Malformed require line"
)]
fn malformed_require(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/module_syntax.feature",
    name = "Go directive without a minor version"
)]
fn malformed_go(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/module_syntax.feature",
    name = "Unknown directive keyword"
)]
fn unknown_keyword(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/module_syntax.feature",
    name = "Indirect marker is recorded on a clean file"
)]
fn indirect_marker(world: RefCell<TestWorld>) {
    let _ = world;
}
