//! Flight condition and operating-mode selectors.

use crate::error::{CycleError, CycleResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tf_components::Freestream;
use tf_core::units::constants::{P_SEA_LEVEL_PA, T_REFERENCE_K};
use tf_core::units::{k, pa};

/// Static ambient state the engine flies through and exhausts into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ambient {
    pub pressure_pa: f64,
    pub temperature_k: f64,
}

impl Default for Ambient {
    fn default() -> Self {
        Self::sea_level()
    }
}

impl Ambient {
    /// 101 325 Pa, 293 K.
    pub fn sea_level() -> Self {
        Self {
            pressure_pa: P_SEA_LEVEL_PA,
            temperature_k: T_REFERENCE_K,
        }
    }
}

/// One point of the flight envelope.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightCondition {
    pub mach: f64,
    pub ambient: Ambient,
}

impl FlightCondition {
    pub fn new(mach: f64, ambient: Ambient) -> Self {
        Self { mach, ambient }
    }

    pub fn sea_level(mach: f64) -> Self {
        Self::new(mach, Ambient::sea_level())
    }

    /// Validated freestream for the inlet.
    ///
    /// # Errors
    /// Negative or non-finite Mach, non-positive ambient pressure or
    /// temperature.
    pub fn freestream(&self) -> CycleResult<Freestream> {
        Ok(Freestream::new(
            self.mach,
            pa(self.ambient.pressure_pa),
            k(self.ambient.temperature_k),
        )?)
    }
}

/// Afterburner selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Afterburner off
    Dry,
    /// Afterburner lit
    Wet,
}

impl Mode {
    pub fn is_wet(self) -> bool {
        matches!(self, Mode::Wet)
    }
}

impl FromStr for Mode {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dry" => Ok(Mode::Dry),
            "wet" => Ok(Mode::Wet),
            _ => Err(CycleError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dry => write!(f, "dry"),
            Self::Wet => write!(f, "wet"),
        }
    }
}

/// How the bypass stream leaves the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrangement {
    /// Bypass and core mix ahead of the afterburner and share one nozzle
    #[default]
    Mixed,
    /// No mixer; the bypass stream has its own nozzle and the afterburner
    /// heats the core stream only
    Separate,
}

impl FromStr for Arrangement {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mixed" => Ok(Arrangement::Mixed),
            "separate" => Ok(Arrangement::Separate),
            _ => Err(CycleError::UnknownArrangement(s.to_string())),
        }
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mixed => write!(f, "mixed"),
            Self::Separate => write!(f, "separate"),
        }
    }
}
