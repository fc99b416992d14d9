//! Engine configuration: every fixed component constant of the cycle.

use crate::engine::Engine;
use crate::error::CycleResult;
use crate::flight::Arrangement;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tf_components::{
    BurnerConfig, CompressorConfig, InletConfig, MixerConfig, NozzleConfig, SplitterConfig,
    TurbineConfig,
};
use tf_core::GasModel;

/// Design-point constants for the whole engine.
///
/// `Default` is the F119 estimate. Sections missing from a YAML or JSON file
/// keep their default value; a section that is present must be complete
/// unless the component has its own default (gas, inlet, splitter, mixer).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub gas: GasModel,
    pub arrangement: Arrangement,
    pub inlet: InletConfig,
    pub fan: CompressorConfig,
    pub splitter: SplitterConfig,
    pub hpc: CompressorConfig,
    pub combustor: BurnerConfig,
    pub hpt: TurbineConfig,
    pub lpt: TurbineConfig,
    pub mixer: MixerConfig,
    pub afterburner: BurnerConfig,
    pub nozzle: NozzleConfig,
    /// Only used by the separate-flow arrangement
    pub bypass_nozzle: NozzleConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::f119()
    }
}

impl EngineConfig {
    pub fn f119() -> Self {
        Self {
            gas: GasModel::air(),
            arrangement: Arrangement::Mixed,
            inlet: InletConfig::default(),
            fan: CompressorConfig::f119_fan(),
            splitter: SplitterConfig::default(),
            hpc: CompressorConfig::f119_hpc(),
            combustor: BurnerConfig::f119_combustor(),
            hpt: TurbineConfig::f119_hpt(),
            lpt: TurbineConfig::f119_lpt(),
            mixer: MixerConfig::default(),
            afterburner: BurnerConfig::f119_afterburner(),
            nozzle: NozzleConfig::f119_core(),
            bypass_nozzle: NozzleConfig::f119_bypass(),
        }
    }

    /// Check every constant by building the engine once.
    pub fn validate(&self) -> CycleResult<()> {
        Engine::new(self).map(|_| ())
    }

    pub fn from_yaml_str(content: &str) -> CycleResult<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> CycleResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json` file, or YAML for any other extension.
    pub fn load(path: &Path) -> CycleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    pub fn to_yaml_string(&self) -> CycleResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
