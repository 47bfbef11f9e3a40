//! Tracker configuration, loaded from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    types::ReferenceFrame,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub orientation: OrientationConfig,
    pub binding: BindingConfig,
    pub frame: FrameConfig,
    pub report: ReportConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationConfig {
    /// Angle increment, in degrees, that decoded angles snap to.
    pub quantization_step: f64,
    /// Allowed deviation of the quaternion norm from 1.
    pub unit_tolerance: f64,
}

/// When `release_after_missing_frames` is unset the binding is sticky.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    pub release_after_missing_frames: Option<u32>,
}

/// Overrides the reference frame reported by the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub joints: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub body_count: usize,
    pub fps: u32,
    pub frames: Option<u64>,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            quantization_step: 5.0,
            unit_tolerance: 1e-3,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            body_count: 6,
            fps: 30,
            frames: None,
        }
    }
}

impl FrameConfig {
    /// Applies any configured override on top of the frame the source reported.
    pub fn resolve(&self, reported: ReferenceFrame) -> ReferenceFrame {
        ReferenceFrame {
            width: self.width.unwrap_or(reported.width),
            height: self.height.unwrap_or(reported.height),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let step = self.orientation.quantization_step;
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::Config(format!(
                "quantization step must be a positive number of degrees, got {step}"
            )));
        }
        let tolerance = self.orientation.unit_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(Error::Config(format!(
                "unit tolerance must be non-negative, got {tolerance}"
            )));
        }

        if self.binding.release_after_missing_frames == Some(0) {
            return Err(Error::Config(
                "release_after_missing_frames must be at least 1".to_string(),
            ));
        }

        if self.frame.width == Some(0) || self.frame.height == Some(0) {
            return Err(Error::Config(
                "reference frame dimensions must be greater than 0".to_string(),
            ));
        }

        if self.simulation.fps == 0 {
            return Err(Error::Config("simulation fps must be greater than 0".to_string()));
        }
        if self.simulation.body_count == 0 {
            return Err(Error::Config(
                "simulation body_count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

pub const EXAMPLE_CONFIG: &str = r#"# Face tracker configuration

orientation:
  quantization_step: 5.0
  unit_tolerance: 0.001

# Leave unset to keep a body bound until the face stream loses it.
binding:
  release_after_missing_frames: 30

report:
  joints: false

simulation:
  body_count: 6
  fps: 30
  frames: 300
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.orientation.quantization_step, 5.0);
        assert_eq!(config.binding.release_after_missing_frames, None);
    }

    #[test]
    fn example_config_parses() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.binding.release_after_missing_frames, Some(30));
        assert_eq!(config.simulation.frames, Some(300));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let yaml = "orientation:\n  quantization_step: 10.0\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.orientation.quantization_step, 10.0);
        assert_eq!(config.orientation.unit_tolerance, 1e-3);
        assert_eq!(config.simulation.fps, 30);
    }

    #[test]
    fn rejects_bad_step() {
        for step in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let mut config = Config::default();
            config.orientation.quantization_step = step;
            assert!(matches!(config.validate(), Err(Error::Config(_))), "step {step}");
        }
    }

    #[test]
    fn rejects_zero_release_window() {
        let mut config = Config::default();
        config.binding.release_after_missing_frames = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn frame_override_applies_per_axis() {
        let frame = FrameConfig {
            width: Some(640),
            height: None,
        };
        assert_eq!(
            frame.resolve(ReferenceFrame::new(1920, 1080)),
            ReferenceFrame::new(640, 1080)
        );
    }
}
