use std::cell::Cell;
use std::collections::HashMap;
use std::panic;

use returns::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum LookupError {
    UnknownUser(u32),
    BadAge(String),
}

fn users() -> HashMap<u32, (&'static str, &'static str)> {
    HashMap::from([(1, ("ada", "36")), (2, ("bob", "not a number"))])
}

#[test]
fn test_boundary_short_circuits_on_first_failure() {
    let after_halt = Cell::new(false);
    let function = pipeline(|_: ()| {
        let one: i32 = Outcome::<i32, &str>::Success(1).unwrap();
        let _: i32 = Outcome::<i32, &str>::Failure("boom").unwrap();
        after_halt.set(true);
        Outcome::<i32, &str>::Success(99 + one)
    });

    assert_eq!(function(()), Outcome::Failure("boom"));
    assert!(!after_halt.get());
}

#[test]
fn test_boundary_returns_normal_value_without_halt() {
    let function = pipeline(|x: i32| {
        let doubled = Outcome::<i32, &str>::Success(x * 2).unwrap();
        Outcome::<i32, &str>::Success(doubled + 1)
    });
    assert_eq!(function(4), Outcome::Success(9));
}

#[test]
fn test_halt_inside_nested_call_reaches_boundary() {
    fn age_of(id: u32) -> u32 {
        let lookup = absence_to_presence(|id: u32| users().get(&id).copied());
        let (_, age) = lookup(id).unwrap();
        age.parse().unwrap_or(0)
    }

    let function = pipeline(|id: u32| Maybe::Some(age_of(id) + 1));
    assert_eq!(function(1), Maybe::Some(37));
    assert_eq!(function(9), Maybe::Nothing);
}

#[test]
fn test_each_call_starts_running_again() {
    let function = pipeline(|x: Maybe<i32>| Maybe::Some(x.unwrap() * 3));
    assert_eq!(function(Maybe::Nothing), Maybe::Nothing);
    assert_eq!(function(Maybe::Some(2)), Maybe::Some(6));
    assert_eq!(function(Maybe::Nothing), Maybe::Nothing);
}

#[test]
fn test_inner_boundary_catches_before_outer() {
    let outer_continued = Cell::new(false);
    let inner = pipeline(|x: Maybe<i32>| Maybe::Some(x.unwrap() + 1));
    let outer = pipeline(|x: Maybe<i32>| {
        let value = inner(x).value_or(-1);
        outer_continued.set(true);
        Maybe::Some(value)
    });

    assert_eq!(outer(Maybe::Nothing), Maybe::Some(-1));
    assert!(outer_continued.get());
    assert_eq!(outer(Maybe::Some(1)), Maybe::Some(2));
}

#[test]
#[should_panic(expected = "unwrap called on Nothing was not caught by any pipeline")]
fn test_halt_of_other_family_escaping_boundary_is_unhandled() {
    let function = pipeline(|x: Maybe<i32>| Outcome::<i32, String>::Success(x.unwrap()));
    let _ = function(Maybe::Nothing);
}

#[test]
fn test_adapters_compose_in_a_pipeline() {
    let find = |id: u32| {
        Outcome::from(
            users()
                .get(&id)
                .copied()
                .ok_or(LookupError::UnknownUser(id)),
        )
    };
    let parse_age = fault_to_outcome(|raw: &str| {
        raw.parse::<u32>()
            .map_err(|err| LookupError::BadAge(err.to_string()))
    });

    let describe = pipeline(|id: u32| {
        let (name, raw_age) = find(id).unwrap();
        let age = parse_age(raw_age).unwrap();
        Outcome::<String, LookupError>::Success(format!("{name} is {age}"))
    });

    assert_eq!(describe(1), Outcome::Success("ada is 36".to_string()));
    assert_eq!(describe(7), Outcome::Failure(LookupError::UnknownUser(7)));
    assert!(matches!(describe(2), Outcome::Failure(LookupError::BadAge(_))));
}

#[test]
fn test_fault_to_outcome_with_anyhow() {
    let read_port = fault_to_outcome(|raw: &str| -> anyhow::Result<u16> {
        let port: u16 = raw.parse()?;
        anyhow::ensure!(port >= 1024, "port {port} is privileged");
        Ok(port)
    });

    assert_eq!(read_port("8080").unwrap(), 8080);
    let error = read_port("80").failure();
    assert_eq!(error.to_string(), "port 80 is privileged");
    assert!(read_port("http").is_failure());
}

#[test]
fn test_absence_to_presence_inverse() {
    let inverse = absence_to_presence(|arg: i32| if arg == 0 { None } else { Some(1.0 / arg as f64) });
    assert_eq!(inverse(0), Maybe::Nothing);
    assert_eq!(inverse(1), Maybe::Some(1.0));
}

#[test]
fn test_is_successful_table() {
    assert!(is_successful(&Outcome::<i32, &str>::Success(1)));
    assert!(!is_successful(&Outcome::<i32, &str>::Failure("e")));
    assert!(is_successful(&Maybe::Some(0)));
    assert!(!is_successful(&Maybe::<i32>::Nothing));
}

#[test]
fn test_signal_escapes_without_boundary() {
    let escaped = panic::catch_unwind(|| Outcome::<i32, String>::Failure("boom".into()).unwrap());
    assert!(escaped.is_err());
}

#[test]
#[should_panic(expected = "unwrap called on Nothing outside a pipeline")]
fn test_unwrap_nothing_at_top_level_is_unhandled() {
    let _ = Maybe::<u8>::Nothing.unwrap();
}

#[test]
fn test_generic_unwrap_through_trait() {
    fn successful_values<C>(containers: Vec<C>) -> Vec<C::Value>
    where
        C: Unwrappable,
    {
        containers
            .into_iter()
            .filter(|container| is_successful(container))
            .map(Unwrappable::unwrap)
            .collect()
    }

    let values = successful_values(vec![Maybe::Some(1), Maybe::Nothing, Maybe::Some(3)]);
    assert_eq!(values, vec![1, 3]);
}
