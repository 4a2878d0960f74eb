//! Ordered parameter collections.

use core::ops::Index;
use std::collections::BTreeMap;

use crate::distribution::Dispersion;
use crate::error::{Error, Result};
use crate::parameter::Parameter;
use crate::settings::{self, DispersionSettings};
use crate::types::WeightPoint;

/// The parameters of one model, in declaration order.
///
/// Names are unique. Models address their own parameters by position through
/// [`Index`]; the host addresses them by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterSet {
    params: Vec<Parameter>,
}

impl ParameterSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter, replacing any existing one with the same name.
    #[must_use]
    pub fn with(mut self, param: Parameter) -> Self {
        match self.position(param.name()) {
            Some(i) => self.params[i] = param,
            None => self.params.push(param),
        }
        self
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterates over the parameters in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter()
    }

    /// Names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(Parameter::name)
    }

    /// Parameters that accept a dispersion.
    pub fn dispersible(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter().filter(|p| p.is_dispersible())
    }

    /// Orientation parameters.
    pub fn orientation(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter().filter(|p| p.is_orientation())
    }

    /// Looks up a parameter by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`] if there is none.
    pub fn get(&self, name: &str) -> Result<&Parameter> {
        self.position(name)
            .map(|i| &self.params[i])
            .ok_or_else(|| Error::UnknownParameter(name.to_string()))
    }

    /// Mutable lookup by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`] if there is none.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Parameter> {
        match self.position(name) {
            Some(i) => Ok(&mut self.params[i]),
            None => Err(Error::UnknownParameter(name.to_string())),
        }
    }

    /// The current value of a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`] if there is none.
    pub fn value(&self, name: &str) -> Result<f64> {
        self.get(name).map(Parameter::value)
    }

    /// Sets the value of a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`] or [`Error::OutOfBounds`].
    pub fn set_value(&mut self, name: &str, value: f64) -> Result<()> {
        self.get_mut(name)?.set_value(value)
    }

    /// Replaces the dispersion of a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`] or [`Error::NotDispersible`].
    pub fn set_dispersion(&mut self, name: &str, dispersion: Dispersion) -> Result<()> {
        self.get_mut(name)?.set_dispersion(dispersion)
    }

    /// The weight points of a parameter at its current value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`] if there is none.
    pub fn weights(&self, name: &str) -> Result<Vec<WeightPoint>> {
        self.get(name).map(Parameter::weights)
    }

    /// All current values keyed by name.
    #[must_use]
    pub fn values(&self) -> BTreeMap<String, f64> {
        self.params
            .iter()
            .map(|p| (p.name().to_string(), p.value()))
            .collect()
    }

    /// Exported dispersion settings of every dispersible parameter.
    #[must_use]
    pub fn dispersion_settings(&self) -> BTreeMap<String, DispersionSettings> {
        self.dispersible()
            .map(|p| (p.name().to_string(), settings::export(p.dispersion())))
            .collect()
    }

    /// Imports dispersion settings into one parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`], [`Error::NotDispersible`], or
    /// [`Error::InvalidDispersionSpec`]; the parameter is unchanged on error.
    pub fn apply_dispersion_settings(
        &mut self,
        name: &str,
        settings: &DispersionSettings,
    ) -> Result<()> {
        let dispersion = settings::from_settings(settings)?;
        self.set_dispersion(name, dispersion)
    }

    /// Applies values and dispersion settings together.
    ///
    /// Either every entry is applied or, on the first error, none is.
    ///
    /// # Errors
    ///
    /// Any error from [`set_value`](Self::set_value) or
    /// [`apply_dispersion_settings`](Self::apply_dispersion_settings).
    pub fn apply_all(
        &mut self,
        values: &BTreeMap<String, f64>,
        dispersion: &BTreeMap<String, DispersionSettings>,
    ) -> Result<()> {
        let mut next = self.clone();
        for (name, &value) in values {
            next.set_value(name, value)?;
        }
        for (name, settings) in dispersion {
            next.apply_dispersion_settings(name, settings)?;
        }
        *self = next;
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name() == name)
    }
}

impl Index<usize> for ParameterSet {
    type Output = Parameter;

    fn index(&self, index: usize) -> &Parameter {
        &self.params[index]
    }
}

impl FromIterator<Parameter> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}
