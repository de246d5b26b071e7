// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides the parameter model and the constraint language used by
//! the pairwise suite generators.
//!
//! # Parameter spaces
//! There are two structures describing the input, namely the [Space] and the [ConstrainedSpace].
//! [Space] is an unconstrained collection of parameters, each with an ordered domain of values.
//! The [ConstrainedSpace] has an unconstrained variant as one of its fields and adds the constraints.
//!
//! # Constraints
//! A constraint is a single line of the form `IF <condition> THEN <action>`:
//!
//! ```text
//! IF Format = 'DesktopStandAlone' THEN DAW must be nil
//! IF Format = 'VST3' THEN DAW must not be nil
//! IF DAW is nil THEN Format must be 'DesktopStandAlone'
//! ```
//!
//! Keywords are case-insensitive and quotes around values are optional.
//! The bare word `nil` stands for the empty value; quote it to mean the literal text `nil`.
//! Constraints can also be assembled without text from a [Condition] and an [Action] pair,
//! which render to the same canonical form the parser accepts.
//!
//! # Example
//! ```
//! let mut space = space::parse_constrained("
//!     Browser: Chrome, Firefox, Safari;
//!     OS: Windows, Mac, Linux;
//!     ScreenSize: 1920x1080, 1366x768;
//!
//!     IF Browser = 'Safari' THEN OS must be 'Mac'
//! ").expect("Parsing error occurred");
//! println!("Number of parameters: {}", space.sub_space.parameter_names.len());
//!
//! assert!(space.check_row(&[2, 1, 0]));
//! assert!(!space.check_row(&[2, 0, 0]));
//! assert_eq!("Chrome", space.sub_space.values[0][0]);
//! ```

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use std::collections::HashMap;
use std::fmt::{Debug, Display, Error, Formatter};

use common::UVec;

pub use builder::{Action, Condition};
pub use predicate::{Constraint, Predicate};

mod builder;
mod parser;
mod predicate;

#[cfg_attr(test, derive(Debug, PartialEq))]
struct TemporaryParameter {
    name: String,
    values: UVec<String>,
}

/// Error returned when registering or removing a parameter fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SpaceError {
    /// A parameter with this name is already present.
    DuplicateParameter(String),

    /// The parameter name is empty after trimming.
    EmptyName,

    /// The named parameter has no values left after trimming and deduplication.
    EmptyDomain(String),

    /// No parameter with this name is present.
    UnknownParameter(String),
}

impl Display for SpaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            SpaceError::DuplicateParameter(name) => write!(f, "parameter '{}' is already defined", name),
            SpaceError::EmptyName => f.write_str("parameter name is empty"),
            SpaceError::EmptyDomain(name) => write!(f, "parameter '{}' has no values left after trimming and deduplication", name),
            SpaceError::UnknownParameter(name) => write!(f, "unknown parameter '{}'", name),
        }
    }
}

/// Error returned when parsing or registering a constraint fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConstraintError {
    /// The text does not match the constraint grammar; carries the part that failed to parse.
    Syntax {
        /// The offending part of the input.
        offending: String,
    },

    /// The constraint names a parameter the space does not contain.
    UnknownParameter(String),

    /// The condition and the action test the same parameter.
    SameParameter(String),
}

impl Display for ConstraintError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            ConstraintError::Syntax { offending } => write!(f, "constraint syntax error near '{}'", offending),
            ConstraintError::UnknownParameter(name) => write!(f, "constraint references unknown parameter '{}'", name),
            ConstraintError::SameParameter(name) => write!(f, "constraint condition and action both test parameter '{}'", name),
        }
    }
}

/// This struct represents the space of parameters for which to generate a suite.
///
/// Parameters keep their insertion order, and each value keeps its position
/// within its domain. All ids handed out are indexes into these vectors.
pub struct Space {
    /// The domain sizes (levels) of the parameters.
    pub levels: UVec<usize>,

    /// The names of the parameters, in insertion order.
    pub parameter_names: UVec<String>,

    /// The texts of the values.
    ///
    /// The outer vector is indexed by the parameter ID, and the inner vector is indexed by the value ID.
    /// So `space.values[parameter_id][value_id]`.
    pub values: UVec<UVec<String>>,

    /// A [HashMap] that allows for the reverse lookup of the parameter ids.
    pub parameter_to_id: HashMap<String, usize>,

    /// A [HashMap] per parameter that allows for the reverse lookup of the value ids.
    pub value_to_id: UVec<HashMap<String, usize>>,
}

impl Space {
    /// Create an empty space.
    pub fn new() -> Self {
        Space {
            levels: UVec::new(),
            parameter_names: UVec::new(),
            values: UVec::new(),
            parameter_to_id: HashMap::new(),
            value_to_id: UVec::new(),
        }
    }

    fn assemble(parameters: Vec<TemporaryParameter>) -> Result<Self, SpaceError> {
        let mut result = Space::new();
        for parameter in parameters.into_iter() {
            result.add_parameter(parameter.name.as_str(), parameter.values)?;
        }
        Ok(result)
    }

    /// Register a parameter and return its id.
    ///
    /// The name and the values are trimmed of surrounding whitespace and the
    /// values are deduplicated, keeping the first occurrence. Values that trim
    /// to nothing are dropped, as the empty value is reserved for `nil`.
    pub fn add_parameter<S: AsRef<str>>(&mut self, name: &str, values: impl IntoIterator<Item = S>) -> Result<usize, SpaceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SpaceError::EmptyName);
        }
        if self.parameter_to_id.contains_key(name) {
            return Err(SpaceError::DuplicateParameter(name.into()));
        }

        let mut domain = UVec::new();
        let mut value_to_id = HashMap::new();
        for value in values {
            let value = value.as_ref().trim();
            if value.is_empty() || value_to_id.contains_key(value) {
                continue;
            }
            value_to_id.insert(value.to_string(), domain.len());
            domain.push(value.to_string());
        }
        if domain.is_empty() {
            return Err(SpaceError::EmptyDomain(name.into()));
        }

        let parameter_id = self.parameter_names.len();
        self.parameter_to_id.insert(name.to_string(), parameter_id);
        self.levels.push(domain.len());
        self.parameter_names.push(name.to_string());
        self.values.push(domain);
        self.value_to_id.push(value_to_id);
        Ok(parameter_id)
    }

    /// Remove a parameter and return the id it held.
    ///
    /// The parameters after it shift down one id, exactly as if they had been
    /// registered without it.
    pub fn remove_parameter(&mut self, name: &str) -> Result<usize, SpaceError> {
        let name = name.trim();
        match self.parameter_to_id.remove(name) {
            None => Err(SpaceError::UnknownParameter(name.into())),
            Some(parameter_id) => {
                self.levels.remove(parameter_id);
                self.parameter_names.remove(parameter_id);
                self.values.remove(parameter_id);
                self.value_to_id.remove(parameter_id);
                self.parameter_to_id = get_parameter_to_id(&self.parameter_names);
                Ok(parameter_id)
            }
        }
    }

    /// Look up the id of a parameter by name.
    pub fn parameter_id(&self, name: &str) -> Option<usize> {
        self.parameter_to_id.get(name).copied()
    }

    /// Look up the id of a value within the domain of a parameter.
    pub fn value_id(&self, parameter_id: usize, text: &str) -> Option<usize> {
        self.value_to_id.get(parameter_id)?.get(text).copied()
    }

    /// Get the text of a value.
    pub fn value_text(&self, parameter_id: usize, value_id: usize) -> &str {
        self.values[parameter_id][value_id].as_str()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.parameter_names.len()
    }

    /// Returns true if the space has no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameter_names.is_empty()
    }

    /// The number of complete rows, the product of all levels.
    pub fn combination_count(&self) -> usize {
        self.levels.iter().product()
    }
}

/// Represents a [Space] with constraints.
///
/// The constraints name their parameters by text, so the space can keep
/// changing after constraints have been added. Removing a parameter through
/// [ConstrainedSpace::remove_parameter] expels the constraints that mention it.
pub struct ConstrainedSpace {
    /// The underlying [Space].
    ///
    /// Removing parameters from the `sub_space` directly leaves dangling
    /// constraints behind; use [ConstrainedSpace::remove_parameter] instead.
    pub sub_space: Space,
    constraints: Vec<Constraint>,
}

impl ConstrainedSpace {
    /// Wrap a [Space] in a [ConstrainedSpace] without constraints.
    pub fn wrap_space(sub_space: Space) -> Self {
        Self { sub_space, constraints: vec![] }
    }

    fn validate(&self, constraint: &Constraint) -> Result<(), ConstraintError> {
        for parameter in [&constraint.condition_parameter, &constraint.action_parameter] {
            if self.sub_space.parameter_id(parameter).is_none() {
                return Err(ConstraintError::UnknownParameter(parameter.clone()));
            }
        }
        if constraint.condition_parameter == constraint.action_parameter {
            return Err(ConstraintError::SameParameter(constraint.condition_parameter.clone()));
        }
        Ok(())
    }

    /// Parse a constraint line and add it.
    ///
    /// Returns the stored constraint so a description can be attached:
    ///
    /// ```
    /// # let mut space = space::parse_constrained("a: 0, 1;\nb: 0, 1;").unwrap();
    /// space.add_constraint("IF a = '0' THEN b must be '1'").unwrap().description = Some("flip".to_string());
    /// ```
    pub fn add_constraint(&mut self, text: &str) -> Result<&mut Constraint, ConstraintError> {
        self.adopt_constraint(parser::constraints::parse_one(text)?)
    }

    /// Add an already-built constraint.
    pub fn adopt_constraint(&mut self, constraint: Constraint) -> Result<&mut Constraint, ConstraintError> {
        self.validate(&constraint)?;
        self.constraints.push(constraint);
        Ok(self.constraints.last_mut().unwrap())
    }

    /// Build a constraint from its form halves and add it.
    ///
    /// The result is indistinguishable from parsing the canonical text of the
    /// two halves.
    pub fn build_constraint(&mut self, condition: Condition, action: Action) -> Result<&mut Constraint, ConstraintError> {
        let (condition_parameter, condition) = condition.into_parts();
        let (action_parameter, action) = action.into_parts();
        self.adopt_constraint(Constraint { condition_parameter, condition, action_parameter, action, description: None })
    }

    /// Remove the constraint at the given position, if there is one.
    pub fn remove_constraint(&mut self, index: usize) -> Option<Constraint> {
        if index < self.constraints.len() {
            Some(self.constraints.remove(index))
        } else {
            None
        }
    }

    /// Remove a parameter and return the constraints that mentioned it.
    ///
    /// The expelled constraints are no longer decidable within this space;
    /// returning them lets the caller report which rules were lost.
    pub fn remove_parameter(&mut self, name: &str) -> Result<Vec<Constraint>, SpaceError> {
        self.sub_space.remove_parameter(name)?;
        let name = name.trim();
        let (expelled, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.constraints).into_iter().partition(|c| c.references(name));
        self.constraints = kept;
        Ok(expelled)
    }

    /// The constraints in registration order.
    pub fn constraints(&self) -> &[Constraint] {
        self.constraints.as_slice()
    }

    /// Returns true if the space has constraints, otherwise returns false.
    pub fn has_constraints(&self) -> bool {
        !self.constraints.is_empty()
    }

    /// Returns the number of constraints listed in the space.
    pub fn count_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if the row satisfies every constraint.
    ///
    /// Cells holding [common::DONT_CARE] are unbound and leave the constraints
    /// touching them vacuously satisfied, so partial rows can be checked too.
    pub fn check_row(&self, row: &[usize]) -> bool {
        self.constraints.iter().all(|constraint| constraint.satisfied_by(&self.sub_space, row))
    }
}

impl Debug for ConstrainedSpace {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for (parameter_name, values) in self.sub_space.parameter_names.iter().zip(self.sub_space.values.iter()) {
            f.write_str(parameter_name)?;
            f.write_str(": ")?;
            let mut values_iter = values.iter();
            f.write_str(values_iter.next().unwrap())?;
            for value_name in values_iter {
                f.write_str(", ")?;
                f.write_str(value_name)?;
            }
            f.write_str(";\n")?;
        }
        f.write_str("\n")?;
        for constraint in self.constraints.iter() {
            writeln!(f, "{}", constraint)?;
        }
        Ok(())
    }
}

fn get_parameter_to_id(parameter_names: &UVec<String>) -> HashMap<String, usize> {
    let mut result = HashMap::with_capacity(parameter_names.len());
    for p in parameter_names.iter().enumerate() {
        result.insert(p.1.clone(), p.0);
    }
    result
}

/// Parse a single constraint line without binding it to a space.
///
/// Parameter validation happens when the constraint is added to a
/// [ConstrainedSpace].
pub fn parse_constraint(text: &str) -> Result<Constraint, ConstraintError> {
    parser::constraints::parse_one(text)
}

/// Parse the given `str` and return the unconstrained [Space].
///
/// Any constraint lines after the parameter section are ignored.
pub fn parse_unconstrained(text: &str) -> Result<Space, String> {
    Space::assemble(parser::parameters::parse(text)?.1).map_err(|e| e.to_string())
}

/// Parse the given `str` and return the [ConstrainedSpace].
pub fn parse_constrained(text: &str) -> Result<ConstrainedSpace, String> {
    let (rest, parameters) = parser::parameters::parse(text)?;
    let mut result = ConstrainedSpace::wrap_space(Space::assemble(parameters).map_err(|e| e.to_string())?);
    for constraint in parser::constraints::parse(rest)? {
        result.adopt_constraint(constraint).map_err(|e| e.to_string())?;
    }
    Ok(result)
}
