//! Bypass splitter.

use crate::common::require_non_negative;
use crate::error::ComponentResult;
use crate::station::StationState;
use crate::traits::StreamComponent;
use serde::{Deserialize, Serialize};
use tf_core::units::kgps;

/// Splitter constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// β = ṁ_bypass / ṁ_core
    pub bypass_ratio: f64,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self { bypass_ratio: 0.45 }
    }
}

impl SplitterConfig {
    pub fn validate(&self) -> ComponentResult<()> {
        require_non_negative(self.bypass_ratio, "bypass ratio")?;
        Ok(())
    }
}

/// The two streams leaving the splitter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitStreams {
    pub core: StationState,
    pub bypass: StationState,
}

/// Adiabatic, lossless flow divider behind the fan.
///
/// ```text
/// ṁ_core   = ṁ / (1 + β)
/// ṁ_bypass = ṁ - ṁ_core
/// ```
///
/// Both branches keep the fan-exit stagnation temperature and pressure.
#[derive(Clone, Debug)]
pub struct Splitter {
    pub name: String,
    pub config: SplitterConfig,
}

impl Splitter {
    pub fn new(name: impl Into<String>, config: SplitterConfig) -> ComponentResult<Self> {
        config.validate()?;
        Ok(Self {
            name: name.into(),
            config,
        })
    }
}

impl StreamComponent for Splitter {
    type Output = SplitStreams;

    fn name(&self) -> &str {
        &self.name
    }

    fn compute(&self, inlet: &StationState) -> ComponentResult<SplitStreams> {
        inlet.require_flow()?;

        let total = inlet.mdot_kgps();
        let core = total / (1.0 + self.config.bypass_ratio);
        let bypass = total - core;

        Ok(SplitStreams {
            core: StationState::new(inlet.tt(), inlet.pt(), kgps(core))?,
            bypass: StationState::new(inlet.tt(), inlet.pt(), kgps(bypass))?,
        })
    }
}
