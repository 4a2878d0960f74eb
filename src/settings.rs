//! Export and import of dispersion settings as a generic key/value map.
//!
//! This is the interchange format with the host: a discriminant under the
//! `"type"` key plus the variant's numeric settings.
//!
//! | type          | keys                          |
//! |---------------|-------------------------------|
//! | `delta`       | —                             |
//! | `gaussian`    | `width`, `npts`, `nsigmas`    |
//! | `rectangular` | `width`, `npts`               |
//! | `array`       | `values`, `weights`           |
//!
//! # Example
//!
//! ```
//! use sasmodel::Dispersion;
//! use sasmodel::settings::{self, SettingValue};
//!
//! let gaussian = Dispersion::gaussian(2.0, 15, 3.0);
//! let exported = settings::export(&gaussian);
//! assert_eq!(exported["type"], SettingValue::from("gaussian"));
//!
//! let mut target = Dispersion::Delta;
//! settings::import(&mut target, &exported).unwrap();
//! assert_eq!(target, gaussian);
//! ```

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{ArrayDispersion, Dispersion, GaussianDispersion, RectangularDispersion};
use crate::error::{Error, Result};

/// Key holding the discriminant.
pub const TYPE_KEY: &str = "type";

pub use crate::distribution::MAX_NPTS;

/// A single value in a settings map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SettingValue {
    /// A number.
    Number(f64),
    /// A string, used for the discriminant.
    Text(String),
    /// A list of numbers.
    List(Vec<f64>),
}

impl From<f64> for SettingValue {
    fn from(v: f64) -> Self {
        SettingValue::Number(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::Text(v.to_string())
    }
}

impl From<Vec<f64>> for SettingValue {
    fn from(v: Vec<f64>) -> Self {
        SettingValue::List(v)
    }
}

/// Settings of one dispersion, keyed by field name.
pub type DispersionSettings = BTreeMap<String, SettingValue>;

/// Exports the discriminant and settings of a dispersion.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn export(dispersion: &Dispersion) -> DispersionSettings {
    let mut map = DispersionSettings::new();
    map.insert(TYPE_KEY.to_string(), dispersion.type_name().into());
    match dispersion {
        Dispersion::Delta => {}
        Dispersion::Gaussian(g) => {
            map.insert("width".to_string(), g.width.into());
            map.insert("npts".to_string(), (g.npts as f64).into());
            map.insert("nsigmas".to_string(), g.nsigmas.into());
        }
        Dispersion::Rectangular(r) => {
            map.insert("width".to_string(), r.width.into());
            map.insert("npts".to_string(), (r.npts as f64).into());
        }
        Dispersion::Array(a) => {
            map.insert("values".to_string(), a.values().to_vec().into());
            map.insert("weights".to_string(), a.weights().to_vec().into());
        }
    }
    map
}

/// Builds a dispersion from a settings map.
///
/// # Errors
///
/// Returns [`Error::InvalidDispersionSpec`] if the discriminant is missing or
/// unrecognized, a required field is missing or malformed, or the result
/// fails [`Dispersion::validate`].
pub fn from_settings(settings: &DispersionSettings) -> Result<Dispersion> {
    let dispersion = parse(settings)?;
    dispersion.validate()?;
    Ok(dispersion)
}

fn parse(settings: &DispersionSettings) -> Result<Dispersion> {
    let type_name = match settings.get(TYPE_KEY) {
        Some(SettingValue::Text(name)) => name.as_str(),
        Some(other) => {
            return Err(Error::spec(format!(
                "'{TYPE_KEY}' must be a string, got {other:?}"
            )));
        }
        None => return Err(Error::spec(format!("missing '{TYPE_KEY}'"))),
    };

    match type_name {
        "delta" => Ok(Dispersion::Delta),
        "gaussian" => Ok(Dispersion::Gaussian(GaussianDispersion {
            width: number(settings, "width")?,
            npts: count(settings, "npts")?,
            nsigmas: number(settings, "nsigmas")?,
        })),
        "rectangular" => Ok(Dispersion::Rectangular(RectangularDispersion {
            width: number(settings, "width")?,
            npts: count(settings, "npts")?,
        })),
        "array" => {
            let values = list(settings, "values")?;
            let weights = list(settings, "weights")?;
            ArrayDispersion::new(values, weights).map(Dispersion::Array)
        }
        other => Err(Error::spec(format!("unknown dispersion type '{other}'"))),
    }
}

/// Replaces `dispersion` with the one described by `settings`.
///
/// The variant may change. On error `dispersion` is left untouched.
///
/// # Errors
///
/// See [`from_settings`].
pub fn import(dispersion: &mut Dispersion, settings: &DispersionSettings) -> Result<()> {
    *dispersion = from_settings(settings)?;
    Ok(())
}

impl Dispersion {
    /// Shorthand for [`export`].
    #[must_use]
    pub fn to_settings(&self) -> DispersionSettings {
        export(self)
    }

    /// Shorthand for [`import`].
    ///
    /// # Errors
    ///
    /// See [`from_settings`].
    pub fn apply_settings(&mut self, settings: &DispersionSettings) -> Result<()> {
        import(self, settings)
    }
}

fn number(settings: &DispersionSettings, key: &str) -> Result<f64> {
    match settings.get(key) {
        Some(SettingValue::Number(v)) => Ok(*v),
        Some(other) => Err(Error::spec(format!("'{key}' must be a number, got {other:?}"))),
        None => Err(Error::spec(format!("missing '{key}'"))),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn count(settings: &DispersionSettings, key: &str) -> Result<usize> {
    let v = number(settings, key)?;
    if !(v >= 0.0 && v.fract() == 0.0 && v <= MAX_NPTS as f64) {
        return Err(Error::spec(format!(
            "'{key}' must be an integer in [0, {MAX_NPTS}], got {v}"
        )));
    }
    Ok(v as usize)
}

fn list(settings: &DispersionSettings, key: &str) -> Result<Vec<f64>> {
    match settings.get(key) {
        Some(SettingValue::List(values)) => Ok(values.clone()),
        Some(other) => Err(Error::spec(format!(
            "'{key}' must be a list of numbers, got {other:?}"
        ))),
        None => Err(Error::spec(format!("missing '{key}'"))),
    }
}
