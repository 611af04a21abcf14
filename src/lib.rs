#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod field;
mod rule;
mod rules;

pub use crate::{
    field::Defaulted,
    rule::DefaultRule,
    rules::{Empty, EmptyMap, Enumerated, False, FirstCase, Numeric, One, True, Zero},
};
