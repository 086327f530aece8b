//! Diagnostics rendered for builtin and driver failures.

mod common;

use common::{boolean, call, int};
use graphrts::cli::literal::parse_literal;
use graphrts::runtime::registry::default_registry;
use graphrts::runtime::{Machine, RuntimeConfig};
use graphrts::{ErrorType, Value};
use miette::Report;

#[test]
fn type_error_report_names_builtin_and_position() {
    let err = call("leq_integer", [int(1), boolean(false)]).unwrap_err();
    assert_eq!(
        err.message(),
        "leq_integer expects Integer as argument 2, found Boolean"
    );
    let output = format!("{:?}", Report::new(err));
    assert!(output.contains("graphrts::type_error"));
}

#[test]
fn diverge_report_names_the_sort() {
    let err = call("un_list_data", [Value::constr_data(2, int(0)).into_ref()]).unwrap_err();
    assert_eq!(
        err.message(),
        "un_list_data: expected List-sort data, found Constructor-sort data"
    );
    let output = format!("{:?}", Report::new(err));
    assert!(output.contains("graphrts::diverge"));
}

#[test]
fn parse_error_report_labels_the_literal() {
    let err = parse_literal("list:12x").unwrap_err();
    assert_eq!(err.error_type(), ErrorType::Parse);
    let output = format!("{:?}", Report::new(err));
    assert!(output.contains("graphrts::parse"));
    assert!(output.contains("invalid literal '12x'"));
    assert!(output.contains("expected a decimal integer"));
}

#[test]
fn budget_exhaustion_carries_help() {
    let mut machine = Machine::new(RuntimeConfig::default().with_max_steps(0));
    let err = machine
        .call(default_registry(), "list_data", [int(1)])
        .unwrap_err();
    assert_eq!(err.error_type(), ErrorType::Eval);
    let output = format!("{:?}", Report::new(err));
    assert!(output.contains("max_steps"));
}
