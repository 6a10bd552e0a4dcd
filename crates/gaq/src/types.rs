//! Command arguments and recorded invocations.

use crate::command::Command;
use serde::Serialize;

/// A positional argument to a `_gaq` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Bool(bool),
    /// A JavaScript number. Integers beyond 2^53 lose precision, exactly
    /// as they would in the browser.
    Number(f64),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! number_from {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )+
    };
}

number_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f64);

impl From<f32> for Value {
    /// Keeps the shortest decimal form of `n`, so `11.99f32` stays `11.99`
    /// instead of widening to `11.989999771118164`.
    fn from(n: f32) -> Self {
        Value::Number(n.to_string().parse().unwrap_or(n as f64))
    }
}

/// One accepted command call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invocation {
    pub command: Command,
    pub args: Vec<Value>,
}

impl Invocation {
    pub fn new(command: Command, args: Vec<Value>) -> Self {
        Self { command, args }
    }
}
