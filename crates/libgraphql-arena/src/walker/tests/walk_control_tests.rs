//! Traversal order and the enter/leave instruction protocol, without a
//! schema.

use crate::InternalError;
use crate::Report;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::tests::utils::parse;
use crate::walker::EnterArgumentVisitor;
use crate::walker::EnterDocumentVisitor;
use crate::walker::EnterFieldVisitor;
use crate::walker::Instruction;
use crate::walker::LeaveDocumentVisitor;
use crate::walker::VisitContext;
use crate::walker::Walker;
use crate::walker::WalkerState;
use crate::walker::tests::recorder::Recorder;
use crate::walker::tests::recorder::enters;
use crate::walker::tests::recorder::register_all;
use std::cell::RefCell;
use std::rc::Rc;

const OPERATION: &str = "query Q($v: Int @d) { a(x: 1) { b } ... on T { c } ...F } \
                         fragment F on T { d }";

fn walk_recorded(source: &str, recorder: &Rc<RefCell<Recorder>>) -> (WalkerState, Report) {
    let document = parse(source);
    let mut walker = Walker::new();
    register_all(&mut walker, recorder);
    let mut report = Report::new();
    walker.walk(&document, None, &mut report);
    (walker.state(), report)
}

#[test]
fn walks_depth_first_in_source_order() {
    let recorder = Recorder::new();
    let (state, report) = walk_recorded(OPERATION, &recorder);
    assert_eq!(state, WalkerState::Completed);
    assert!(!report.has_errors());
    assert_eq!(
        recorder.borrow().events,
        vec![
            "enter OperationDefinition Q",
            "enter VariableDefinition v",
            "enter Directive d",
            "leave Directive d",
            "leave VariableDefinition v",
            "enter SelectionSet",
            "enter Field a",
            "enter Argument x",
            "leave Argument x",
            "enter SelectionSet",
            "enter Field b",
            "leave Field b",
            "leave SelectionSet",
            "leave Field a",
            "enter InlineFragment",
            "enter SelectionSet",
            "enter Field c",
            "leave Field c",
            "leave SelectionSet",
            "leave InlineFragment",
            "enter FragmentSpread F",
            "leave FragmentSpread F",
            "leave SelectionSet",
            "leave OperationDefinition Q",
            "enter FragmentDefinition F",
            "enter SelectionSet",
            "enter Field d",
            "leave Field d",
            "leave SelectionSet",
            "leave FragmentDefinition F",
        ],
    );
}

/// Without a schema nothing has an enclosing type.
#[test]
fn field_enter_and_leave_nest() {
    let recorder = Recorder::new();
    walk_recorded("query { posts(first: 100) { id description } }", &recorder);
    let field_events: Vec<String> = recorder
        .borrow()
        .events
        .iter()
        .filter(|event| event.contains(" Field "))
        .cloned()
        .collect();
    assert_eq!(
        field_events,
        vec![
            "enter Field posts",
            "enter Field id",
            "leave Field id",
            "enter Field description",
            "leave Field description",
            "leave Field posts",
        ],
    );
}

#[test]
fn no_enclosing_types_without_a_schema() {
    let recorder = Recorder::new();
    walk_recorded(OPERATION, &recorder);
    assert!(recorder.borrow().enclosing_types.iter().all(|(_, enclosing)| enclosing.is_none()));
}

/// A skipped node's children are not walked, but it is still left.
#[test]
fn skip_node_skips_children() {
    let recorder = Recorder::new();
    recorder.borrow_mut().skip.push("enter Field a".to_string());
    let (state, _) = walk_recorded(OPERATION, &recorder);
    assert_eq!(state, WalkerState::Completed);

    let events = recorder.borrow().events.clone();
    let a = events.iter().position(|event| event == "enter Field a");
    assert_eq!(a.map(|a| events[a + 1].as_str()), Some("leave Field a"));
    assert!(!events.contains(&"enter Argument x".to_string()));
    assert!(!events.contains(&"enter Field b".to_string()));
    assert!(events.contains(&"enter Field c".to_string()));
}

/// Nothing runs after a stop, not even pending leave callbacks.
#[test]
fn stop_ends_the_walk() {
    let recorder = Recorder::new();
    recorder.borrow_mut().stop = Some("enter Field b".to_string());
    let (state, report) = walk_recorded(OPERATION, &recorder);
    assert_eq!(state, WalkerState::Aborted);
    assert!(!report.has_errors());
    assert_eq!(recorder.borrow().events.last().map(String::as_str), Some("enter Field b"));
}

#[test]
fn stop_from_leave_ends_the_walk() {
    let recorder = Recorder::new();
    recorder.borrow_mut().stop = Some("leave OperationDefinition Q".to_string());
    let (state, _) = walk_recorded(OPERATION, &recorder);
    assert_eq!(state, WalkerState::Aborted);
    assert!(!enters(&recorder).contains(&"enter FragmentDefinition F".to_string()));
}

#[test]
fn stop_with_error_reports() {
    let recorder = Recorder::new();
    recorder.borrow_mut().fail = Some("enter FragmentSpread F".to_string());
    let (state, report) = walk_recorded(OPERATION, &recorder);
    assert_eq!(state, WalkerState::Aborted);
    assert_eq!(report.external_errors.len(), 1);
    assert_eq!(report.external_errors[0].message, "failed at enter FragmentSpread F");
}

struct Counter {
    entered: usize,
    left: usize,
    skip: bool,
}

impl EnterDocumentVisitor for Counter {
    fn enter_document(&mut self, _context: &mut VisitContext<'_>) -> Instruction {
        self.entered += 1;
        if self.skip {
            Instruction::SkipNode
        } else {
            Instruction::Continue
        }
    }
}

impl LeaveDocumentVisitor for Counter {
    fn leave_document(&mut self, _context: &mut VisitContext<'_>) -> Instruction {
        self.left += 1;
        Instruction::Continue
    }
}

#[test]
fn document_callbacks_run_once() {
    let document = parse(OPERATION);
    for skip in [false, true] {
        let counter = Rc::new(RefCell::new(Counter {
            entered: 0,
            left: 0,
            skip,
        }));
        let recorder = Recorder::new();
        let mut walker = Walker::new();
        walker.register_document_visitor(Rc::clone(&counter));
        register_all(&mut walker, &recorder);
        walker.walk(&document, None, &mut Report::new());

        assert_eq!((counter.borrow().entered, counter.borrow().left), (1, 1));
        assert_eq!(recorder.borrow().events.is_empty(), skip);
    }
}

/// Several visitors on one node: any skip skips, the first stop wins and
/// later visitors for that node don't run.
struct Scripted {
    instruction: fn() -> Instruction,
    calls: usize,
}

impl EnterFieldVisitor for Scripted {
    fn enter_field(&mut self, _field: Ref, _context: &mut VisitContext<'_>) -> Instruction {
        self.calls += 1;
        (self.instruction)()
    }
}

#[test]
fn instructions_of_several_visitors_combine() {
    let document = parse("{ a { b } }");

    let skipper = Rc::new(RefCell::new(Scripted {
        instruction: || Instruction::SkipNode,
        calls: 0,
    }));
    let continuer = Rc::new(RefCell::new(Scripted {
        instruction: || Instruction::Continue,
        calls: 0,
    }));
    let mut walker = Walker::new();
    walker.register_enter_field_visitor(Box::new(Rc::clone(&skipper)));
    walker.register_enter_field_visitor(Box::new(Rc::clone(&continuer)));
    walker.walk(&document, None, &mut Report::new());
    assert_eq!(walker.state(), WalkerState::Completed);
    assert_eq!(continuer.borrow().calls, 1);

    let stopper = Rc::new(RefCell::new(Scripted {
        instruction: || Instruction::Stop,
        calls: 0,
    }));
    let after = Rc::new(RefCell::new(Scripted {
        instruction: || Instruction::Continue,
        calls: 0,
    }));
    let mut walker = Walker::new();
    walker.register_enter_field_visitor(Box::new(Rc::clone(&stopper)));
    walker.register_enter_field_visitor(Box::new(Rc::clone(&after)));
    walker.walk(&document, None, &mut Report::new());
    assert_eq!(walker.state(), WalkerState::Aborted);
    assert_eq!((stopper.borrow().calls, after.borrow().calls), (1, 0));
}

struct InternalFailure;

impl EnterArgumentVisitor for InternalFailure {
    fn enter_argument(&mut self, argument: Ref, context: &mut VisitContext<'_>) -> Instruction {
        assert_eq!(context.parent().map(|parent| parent.kind), Some(NodeKind::Field));
        assert_eq!(context.depth(), 5);
        Instruction::stop_with_error(InternalError::InvalidRef {
            kind: NodeKind::Argument,
            node_ref: argument,
        })
    }
}

/// Ancestors are operation, selection set, field, ...; internal errors land
/// in the internal list.
#[test]
fn internal_errors_from_visitors() {
    let document = parse("{ a { b(x: 1) } }");
    let mut walker = Walker::new();
    walker.register_enter_argument_visitor(Box::new(InternalFailure));
    let mut report = Report::new();
    walker.walk(&document, None, &mut report);
    assert_eq!(walker.state(), WalkerState::Aborted);
    assert_eq!(report.internal_errors.len(), 1);
    assert!(report.external_errors.is_empty());
}

#[test]
fn walker_state_and_reuse() {
    let recorder = Recorder::new();
    let mut walker = Walker::new();
    assert_eq!(walker.state(), WalkerState::NotStarted);
    register_all(&mut walker, &recorder);

    let document = parse("{ a }");
    walker.walk(&document, None, &mut Report::new());
    assert_eq!(walker.state(), WalkerState::Completed);
    let first = recorder.borrow().events.clone();

    recorder.borrow_mut().events.clear();
    walker.walk(&document, None, &mut Report::new());
    assert_eq!(walker.state(), WalkerState::Completed);
    assert_eq!(recorder.borrow().events, first);
}
