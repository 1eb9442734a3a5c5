use serde::Serialize;
use serde_json::{Value, json};
use std::fmt::Display;

/// Machine-readable CLI output: `{"result": ..}` or `{"error": ".."}`.
#[derive(Debug)]
pub struct JsonOutcome<T, E>(Result<T, E>);

impl<T, E> JsonOutcome<T, E> {
    pub fn ok(value: T) -> Self {
        Self(Ok(value))
    }
}

impl<T, E> From<Result<T, E>> for JsonOutcome<T, E> {
    fn from(res: Result<T, E>) -> Self {
        Self(res)
    }
}

impl<T, E> From<JsonOutcome<T, E>> for Value
where
    T: Serialize,
    E: Display,
{
    fn from(outcome: JsonOutcome<T, E>) -> Self {
        match outcome.0 {
            Ok(v) => match serde_json::to_value(v) {
                Ok(v) => json!({ "result": v }),
                Err(e) => json!({ "error": e.to_string() }),
            },
            Err(e) => json!({ "error": e.to_string() }),
        }
    }
}
