use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::arcflash::{CircuitType, EarthingSystem, EquipmentType};
use crate::units::{EnergyUnit, LengthUnit};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 결과 표시 단위 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub energy: EnergyUnit,
    pub distance: LengthUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            energy: EnergyUnit::CalPerCm2,
            distance: LengthUnit::Millimeter,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 입력을 생략했을 때 사용할 설비 종류
    pub default_equipment: EquipmentType,
    pub circuit_type: CircuitType,
    pub earthing_system: EarthingSystem,
    /// RUST_LOG가 없을 때 사용할 로그 필터
    pub log_level: String,
    pub output: OutputFormat,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_equipment: EquipmentType::Panelboard,
            circuit_type: CircuitType::default(),
            earthing_system: EarthingSystem::default(),
            log_level: "warn".to_string(),
            output: OutputFormat::Text,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정이 어디서 왔는지. 로그 구독자 설치 후 [`ConfigOrigin::log`]로 기록한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    Loaded,
    Created,
}

impl ConfigOrigin {
    pub fn log(self, path: &Path) {
        match self {
            ConfigOrigin::Loaded => tracing::debug!(path = %path.display(), "config loaded"),
            ConfigOrigin::Created => {
                tracing::info!(path = %path.display(), "default config created")
            }
        }
    }
}

impl Config {
    /// 지정 경로에서 설정을 읽는다. 파일이 없으면 기본값을 저장한 뒤 반환한다.
    pub fn load_or_default_from(
        path: impl AsRef<Path>,
    ) -> Result<(Config, ConfigOrigin), ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let cfg: Config = toml::from_str(&content)?;
            Ok((cfg, ConfigOrigin::Loaded))
        } else {
            let cfg = Config::default();
            cfg.save_to(path)?;
            Ok((cfg, ConfigOrigin::Created))
        }
    }

    /// 설정을 지정 경로에 저장한다.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_creates_defaults() {
        let path = std::env::temp_dir().join(format!("afc-config-{}.toml", std::process::id()));
        let _ = fs::remove_file(&path);
        let (cfg, origin) = Config::load_or_default_from(&path).expect("create default");
        assert_eq!(cfg, Config::default());
        assert_eq!(origin, ConfigOrigin::Created);
        assert!(path.exists());

        let (reloaded, origin) = Config::load_or_default_from(&path).expect("reload");
        assert_eq!(reloaded, cfg);
        assert_eq!(origin, ConfigOrigin::Loaded);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("default_equipment = \"mcc\"\noutput = \"json\"\n")
            .expect("parse partial");
        assert_eq!(cfg.default_equipment, EquipmentType::Mcc);
        assert_eq!(cfg.output, OutputFormat::Json);
        assert_eq!(cfg.earthing_system, EarthingSystem::TnCS);
    }
}
