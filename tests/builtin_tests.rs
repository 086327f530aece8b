//! Calling-convention and builtin contract tests.

mod common;

use std::sync::Arc;

use common::{boolean, builtin, call, call1, int};
use graphrts::{Data, ErrorType, Value};

#[cfg(test)]
mod currying {
    use super::*;

    #[test]
    fn comparison_follows_application_order() {
        assert_eq!(call("leq_integer", [int(3), int(5)]).unwrap().as_bool(), Some(true));
        assert_eq!(call("leq_integer", [int(5), int(3)]).unwrap().as_bool(), Some(false));
        assert_eq!(call("less_integer", [int(3), int(5)]).unwrap().as_bool(), Some(true));
        assert_eq!(call("less_integer", [int(5), int(3)]).unwrap().as_bool(), Some(false));
    }

    #[test]
    fn zero_arguments_is_the_head_closure() {
        let head = call("leq_integer", [] as [graphrts::ValueRef; 0]).unwrap();
        let closure = head.as_closure().expect("head is a function value");
        assert_eq!(closure.remaining(), 2);
        assert!(closure.env().is_empty());
    }

    #[test]
    fn partial_application_is_reusable() {
        let at_most_ten = call("leq_integer", [int(10)]).unwrap();
        let before = at_most_ten.as_closure().unwrap().env().clone();

        let small = call1(&at_most_ten, int(20)).unwrap();
        let large = call1(&at_most_ten, int(-20)).unwrap();
        assert_eq!(small.as_bool(), Some(true));
        assert_eq!(large.as_bool(), Some(false));

        // The shared partial still holds exactly its one argument.
        let after = at_most_ten.as_closure().unwrap().env();
        assert!(graphrts::runtime::Env::ptr_eq(&before, after));
        assert_eq!(after.len(), 1);
        assert_eq!(after.first().unwrap().to_string(), "10");
    }

    #[test]
    fn partial_captures_the_supplied_argument() {
        let arg = int(7);
        let partial = call1(&builtin("equals_integer"), arg.clone()).unwrap();
        let captured = partial.as_closure().unwrap().env().first().unwrap();
        assert!(Arc::ptr_eq(captured, &arg));
    }

    #[test]
    fn big_integers_compare_exactly() {
        let huge: num_bigint::BigInt = "340282366920938463463374607431768211456".parse().unwrap();
        let huger = &huge + 1u32;
        let out = call(
            "leq_integer",
            [Value::Integer(huger).into_ref(), Value::Integer(huge).into_ref()],
        )
        .unwrap();
        assert_eq!(out.as_bool(), Some(false));
    }
}

#[cfg(test)]
mod type_checks {
    use super::*;

    #[test]
    fn ill_typed_first_argument_fails_at_first_application() {
        let err = call1(&builtin("leq_integer"), boolean(true)).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::TypeError);
        assert_eq!(err.ctx().position, Some(1));
        assert_eq!(err.ctx().builtin.as_deref(), Some("leq_integer"));
    }

    #[test]
    fn data_operand_is_a_type_error_for_comparisons() {
        let data = Value::list_data(int(1)).into_ref();
        let err = call("leq_integer", [int(1), data]).unwrap_err();
        assert!(err.is_type_error());
        assert_eq!(err.ctx().position, Some(2));
    }

    #[test]
    fn failure_stops_the_chain() {
        // The first application fails, so no partial closure is ever produced.
        let result = call("equals_integer", [boolean(false), int(1)]);
        assert!(matches!(result, Err(e) if e.ctx().position == Some(1)));
    }
}

#[cfg(test)]
mod destructuring {
    use super::*;

    #[test]
    fn round_trip_returns_the_same_value() {
        let inner = int(99);
        let wrapped = Value::list_data(inner.clone()).into_ref();
        let out = call("un_list_data", [wrapped]).unwrap();
        assert!(Arc::ptr_eq(&out, &inner));
        assert_eq!(*out, Value::integer(99));
    }

    #[test]
    fn round_trip_through_list_data() {
        let inner = boolean(true);
        let wrapped = call("list_data", [inner.clone()]).unwrap();
        let out = call("un_list_data", [wrapped]).unwrap();
        assert!(Arc::ptr_eq(&out, &inner));
    }

    #[test]
    fn unwrapped_value_can_be_applied_further() {
        let partial = call("leq_integer", [int(1)]).unwrap();
        let wrapped = Value::list_data(partial.clone()).into_ref();
        let out = call("un_list_data", [wrapped]).unwrap();
        assert_eq!(call1(&out, int(2)).unwrap().as_bool(), Some(true));
    }

    #[test]
    fn other_sorts_diverge() {
        let sorts = [
            Value::constr_data(0, int(1)),
            Value::Data(Data::Map(int(1))),
            Value::Data(Data::Integer(5.into())),
            Value::Data(Data::Bytes(vec![1, 2])),
        ];
        for data in sorts {
            let err = call("un_list_data", [data.into_ref()]).unwrap_err();
            assert_eq!(err.error_type(), ErrorType::Diverge);
        }
    }
}

#[test]
fn diverge_and_type_error_are_distinguishable() {
    let diverge = call("un_list_data", [Value::constr_data(1, int(0)).into_ref()]).unwrap_err();
    let type_error = call("leq_integer", [boolean(true)]).unwrap_err();
    assert_eq!(diverge.error_type(), ErrorType::Diverge);
    assert_eq!(type_error.error_type(), ErrorType::TypeError);
    assert_ne!(diverge.error_type(), type_error.error_type());
    assert_ne!(
        diverge.error_type().exit_code(),
        type_error.error_type().exit_code()
    );
}

#[test]
fn values_are_shareable_across_threads() {
    let partial = call("leq_integer", [int(0)]).unwrap();
    let handles: Vec<_> = (-2..=2)
        .map(|n| {
            let partial = partial.clone();
            std::thread::spawn(move || call1(&partial, int(n)).map(|v| v.as_bool()))
        })
        .collect();
    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(
        results,
        vec![Some(false), Some(false), Some(true), Some(true), Some(true)]
    );
}
