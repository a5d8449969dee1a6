//! 可由設定檔描述的整數運算：map 用的 transform、filter 用的 predicate、
//! reduce 用的 combine。所有算術皆為 checked，失敗以 `ChainError` 回報。

use crate::utils::error::{ChainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Transform {
    Multiply { value: i64 },
    Add { value: i64 },
    Subtract { value: i64 },
    Divide { value: i64 },
    Negate,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Predicate {
    GreaterThan { value: i64 },
    LessThan { value: i64 },
    Equal { value: i64 },
    NotEqual { value: i64 },
    Even,
    Odd,
    DivisibleBy { value: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combine {
    Sum,
    Product,
    Min,
    Max,
}

fn overflow(operation: &str, lhs: i64, rhs: i64) -> ChainError {
    ChainError::ArithmeticOverflow {
        operation: operation.to_string(),
        lhs,
        rhs,
    }
}

impl Transform {
    pub fn apply(&self, input: i64) -> Result<i64> {
        match *self {
            Transform::Multiply { value } => input
                .checked_mul(value)
                .ok_or_else(|| overflow("multiply", input, value)),
            Transform::Add { value } => input
                .checked_add(value)
                .ok_or_else(|| overflow("add", input, value)),
            Transform::Subtract { value } => input
                .checked_sub(value)
                .ok_or_else(|| overflow("subtract", input, value)),
            Transform::Divide { value } => {
                if value == 0 {
                    return Err(ChainError::DivisionByZero {
                        operation: "divide".to_string(),
                    });
                }
                input
                    .checked_div(value)
                    .ok_or_else(|| overflow("divide", input, value))
            }
            Transform::Negate => input.checked_neg().ok_or_else(|| overflow("negate", input, 0)),
            Transform::Square => input
                .checked_mul(input)
                .ok_or_else(|| overflow("square", input, input)),
        }
    }
}

impl Predicate {
    pub fn test(&self, input: i64) -> Result<bool> {
        Ok(match *self {
            Predicate::GreaterThan { value } => input > value,
            Predicate::LessThan { value } => input < value,
            Predicate::Equal { value } => input == value,
            Predicate::NotEqual { value } => input != value,
            Predicate::Even => input % 2 == 0,
            Predicate::Odd => input % 2 != 0,
            Predicate::DivisibleBy { value } => {
                if value == 0 {
                    return Err(ChainError::DivisionByZero {
                        operation: "divisible_by".to_string(),
                    });
                }
                // i64::MIN % -1 會溢位
                input.checked_rem(value).map(|r| r == 0).unwrap_or(true)
            }
        })
    }
}

impl Combine {
    pub fn apply(&self, acc: i64, item: i64) -> Result<i64> {
        match self {
            Combine::Sum => acc.checked_add(item).ok_or_else(|| overflow("sum", acc, item)),
            Combine::Product => acc
                .checked_mul(item)
                .ok_or_else(|| overflow("product", acc, item)),
            Combine::Min => Ok(acc.min(item)),
            Combine::Max => Ok(acc.max(item)),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Multiply { value } => write!(f, "×{}", value),
            Transform::Add { value } => write!(f, "+{}", value),
            Transform::Subtract { value } => write!(f, "-{}", value),
            Transform::Divide { value } => write!(f, "÷{}", value),
            Transform::Negate => write!(f, "negate"),
            Transform::Square => write!(f, "square"),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::GreaterThan { value } => write!(f, "> {}", value),
            Predicate::LessThan { value } => write!(f, "< {}", value),
            Predicate::Equal { value } => write!(f, "== {}", value),
            Predicate::NotEqual { value } => write!(f, "!= {}", value),
            Predicate::Even => write!(f, "even"),
            Predicate::Odd => write!(f, "odd"),
            Predicate::DivisibleBy { value } => write!(f, "divisible by {}", value),
        }
    }
}
