// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use crate::Predicate;

/// The condition half of a form-style constraint.
///
/// Together with an [Action] it canonicalizes to the same textual form the
/// parser accepts, so form input and text input yield identical constraints.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Condition {
    /// Fires when the parameter is bound to the value: `<parameter> = '<value>'`.
    Equals {
        /// The parameter tested by the condition.
        parameter: String,
        /// The literal to compare against.
        value: String,
    },
    /// Fires when the parameter is bound to anything else: `<parameter> != '<value>'`.
    NotEquals {
        /// The parameter tested by the condition.
        parameter: String,
        /// The literal to compare against.
        value: String,
    },
    /// Fires when the parameter holds an empty value: `<parameter> is nil`.
    IsNil {
        /// The parameter tested by the condition.
        parameter: String,
    },
    /// Fires when the parameter holds a non-empty value: `<parameter> is not nil`.
    IsNotNil {
        /// The parameter tested by the condition.
        parameter: String,
    },
}

impl Condition {
    pub(crate) fn into_parts(self) -> (String, Predicate) {
        match self {
            Condition::Equals { parameter, value } => (parameter, Predicate::Equals(value)),
            Condition::NotEquals { parameter, value } => (parameter, Predicate::NotEquals(value)),
            Condition::IsNil { parameter } => (parameter, Predicate::IsEmpty),
            Condition::IsNotNil { parameter } => (parameter, Predicate::IsNotEmpty),
        }
    }
}

/// The action half of a form-style constraint.
///
/// See [Condition] for how the two halves combine.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Requires the parameter to be bound to the value: `<parameter> must be '<value>'`.
    MustBe {
        /// The parameter restricted by the action.
        parameter: String,
        /// The literal the parameter must hold.
        value: String,
    },
    /// Forbids the value: `<parameter> must not be '<value>'`.
    MustNotBe {
        /// The parameter restricted by the action.
        parameter: String,
        /// The literal the parameter may not hold.
        value: String,
    },
    /// Requires an empty value: `<parameter> must be nil`.
    MustBeNil {
        /// The parameter restricted by the action.
        parameter: String,
    },
    /// Requires a non-empty value: `<parameter> must not be nil`.
    MustNotBeNil {
        /// The parameter restricted by the action.
        parameter: String,
    },
}

impl Action {
    pub(crate) fn into_parts(self) -> (String, Predicate) {
        match self {
            Action::MustBe { parameter, value } => (parameter, Predicate::Equals(value)),
            Action::MustNotBe { parameter, value } => (parameter, Predicate::NotEquals(value)),
            Action::MustBeNil { parameter } => (parameter, Predicate::IsEmpty),
            Action::MustNotBeNil { parameter } => (parameter, Predicate::IsNotEmpty),
        }
    }
}
