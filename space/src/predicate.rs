// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::fmt::{Display, Formatter};

use common::DONT_CARE;

use crate::Space;

/// A typed test on the value bound to one parameter.
///
/// The same four tests serve as the condition and the action of a
/// [Constraint]; only the textual rendering differs between the two
/// positions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    /// The bound value text equals the literal.
    Equals(String),
    /// The bound value text differs from the literal.
    NotEquals(String),
    /// The bound value text is empty (the `nil` of the constraint grammar).
    IsEmpty,
    /// The bound value text is non-empty.
    IsNotEmpty,
}

impl Predicate {
    /// Checks the predicate against the text of a bound value.
    pub fn holds(&self, text: &str) -> bool {
        match self {
            Predicate::Equals(value) => text == value,
            Predicate::NotEquals(value) => text != value,
            Predicate::IsEmpty => text.is_empty(),
            Predicate::IsNotEmpty => !text.is_empty(),
        }
    }

    fn fmt_condition(&self, parameter: &str, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::Equals(value) => {
                write!(f, "{} = ", parameter)?;
                write_quoted(f, value)
            }
            Predicate::NotEquals(value) => {
                write!(f, "{} != ", parameter)?;
                write_quoted(f, value)
            }
            Predicate::IsEmpty => write!(f, "{} is nil", parameter),
            Predicate::IsNotEmpty => write!(f, "{} is not nil", parameter),
        }
    }

    fn fmt_action(&self, parameter: &str, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::Equals(value) => {
                write!(f, "{} must be ", parameter)?;
                write_quoted(f, value)
            }
            Predicate::NotEquals(value) => {
                write!(f, "{} must not be ", parameter)?;
                write_quoted(f, value)
            }
            Predicate::IsEmpty => write!(f, "{} must be nil", parameter),
            Predicate::IsNotEmpty => write!(f, "{} must not be nil", parameter),
        }
    }
}

fn write_quoted(f: &mut Formatter<'_>, value: &str) -> std::fmt::Result {
    // Fall back to double quotes for values containing a single quote.
    if value.contains('\'') {
        write!(f, "\"{}\"", value)
    } else {
        write!(f, "'{}'", value)
    }
}

/// One conditional rule: when the condition holds, the action must too.
///
/// Both halves name their parameter by text; the ids are resolved against a
/// [Space] at evaluation time, which keeps a constraint valid across
/// parameter removals elsewhere in the space.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint {
    /// The parameter tested by the condition.
    pub condition_parameter: String,
    /// The condition predicate.
    pub condition: Predicate,
    /// The parameter restricted by the action.
    pub action_parameter: String,
    /// The action predicate.
    pub action: Predicate,
    /// Optional free-text note carried along for reports.
    pub description: Option<String>,
}

impl Constraint {
    /// Returns true if either half of the constraint names the parameter.
    pub fn references(&self, name: &str) -> bool {
        self.condition_parameter == name || self.action_parameter == name
    }

    /// Resolves both parameters, returning their ids when the whole
    /// constraint is decidable within the given space.
    pub fn scope(&self, space: &Space) -> Option<(usize, usize)> {
        let condition = space.parameter_id(&self.condition_parameter)?;
        let action = space.parameter_id(&self.action_parameter)?;
        Some((condition, action))
    }

    /// Evaluates the constraint against a row of value ids.
    ///
    /// Cells holding [DONT_CARE] are unknown: an unknown condition leaves the
    /// constraint vacuously satisfied, and an unknown action cannot yet be
    /// violated. A parameter missing from the space entirely counts as
    /// unknown as well.
    pub fn satisfied_by(&self, space: &Space, row: &[usize]) -> bool {
        match check(space, &self.condition_parameter, &self.condition, row) {
            Some(true) => check(space, &self.action_parameter, &self.action, row).unwrap_or(true),
            _ => true,
        }
    }
}

fn check(space: &Space, parameter: &str, predicate: &Predicate, row: &[usize]) -> Option<bool> {
    let parameter_id = space.parameter_id(parameter)?;
    let value_id = *row.get(parameter_id)?;
    if value_id == DONT_CARE {
        return None;
    }
    Some(predicate.holds(space.value_text(parameter_id, value_id)))
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("IF ")?;
        self.condition.fmt_condition(&self.condition_parameter, f)?;
        f.write_str(" THEN ")?;
        self.action.fmt_action(&self.action_parameter, f)?;
        Ok(())
    }
}
