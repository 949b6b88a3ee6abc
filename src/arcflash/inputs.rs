use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 라벨 문자열을 enum으로 해석하지 못했을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}' (expected one of: {expected})")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl ParseLabelError {
    fn new(kind: &'static str, value: &str, keys: impl Iterator<Item = &'static str>) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: keys.collect::<Vec<_>>().join(", "),
        }
    }
}

fn normalize_key(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

/// 작업 대상 설비 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    Panelboard,
    SwitchgearLv,
    SwitchgearMv,
    Mcc,
    CableJunction,
    OpenAir,
}

impl EquipmentType {
    pub const ALL: [EquipmentType; 6] = [
        EquipmentType::Panelboard,
        EquipmentType::SwitchgearLv,
        EquipmentType::SwitchgearMv,
        EquipmentType::Mcc,
        EquipmentType::CableJunction,
        EquipmentType::OpenAir,
    ];

    /// 설정 파일/CLI에서 사용하는 키.
    pub fn key(self) -> &'static str {
        match self {
            EquipmentType::Panelboard => "panelboard",
            EquipmentType::SwitchgearLv => "switchgear_lv",
            EquipmentType::SwitchgearMv => "switchgear_mv",
            EquipmentType::Mcc => "mcc",
            EquipmentType::CableJunction => "cable_junction",
            EquipmentType::OpenAir => "open_air",
        }
    }

    /// 화면 표시용 라벨.
    pub fn label(self) -> &'static str {
        match self {
            EquipmentType::Panelboard => "Panelboard / Distribution Board",
            EquipmentType::SwitchgearLv => "Low Voltage Switchgear",
            EquipmentType::SwitchgearMv => "Medium Voltage Switchgear",
            EquipmentType::Mcc => "Motor Control Centre",
            EquipmentType::CableJunction => "Cable Junction Box",
            EquipmentType::OpenAir => "Open Air (Overhead / Busbar)",
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EquipmentType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        let alias = match key.as_str() {
            "panel" | "distribution_board" | "db" => Some(EquipmentType::Panelboard),
            "switchgear" | "lv_switchgear" => Some(EquipmentType::SwitchgearLv),
            "mv_switchgear" => Some(EquipmentType::SwitchgearMv),
            "cable" => Some(EquipmentType::CableJunction),
            "open" => Some(EquipmentType::OpenAir),
            _ => None,
        };
        alias
            .or_else(|| Self::ALL.into_iter().find(|e| e.key() == key))
            .ok_or_else(|| {
                ParseLabelError::new("equipment type", s, Self::ALL.iter().map(|e| e.key()))
            })
    }
}

/// 전극(도체) 배치. V/H = 수직/수평, CB = 박스 내부, BB = 절연 barrier 종단, OA = 개방 공기.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ElectrodeConfig {
    Vcb,
    Vcbb,
    Hcb,
    Voa,
    Hoa,
}

impl ElectrodeConfig {
    pub const ALL: [ElectrodeConfig; 5] = [
        ElectrodeConfig::Vcb,
        ElectrodeConfig::Vcbb,
        ElectrodeConfig::Hcb,
        ElectrodeConfig::Voa,
        ElectrodeConfig::Hoa,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ElectrodeConfig::Vcb => "VCB",
            ElectrodeConfig::Vcbb => "VCBB",
            ElectrodeConfig::Hcb => "HCB",
            ElectrodeConfig::Voa => "VOA",
            ElectrodeConfig::Hoa => "HOA",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ElectrodeConfig::Vcb => "Vertical conductors in a box",
            ElectrodeConfig::Vcbb => "Vertical conductors in a box, terminated in a barrier",
            ElectrodeConfig::Hcb => "Horizontal conductors in a box",
            ElectrodeConfig::Voa => "Vertical conductors in open air",
            ElectrodeConfig::Hoa => "Horizontal conductors in open air",
        }
    }

    /// 개방 공기 배치 여부.
    pub fn is_open_air(self) -> bool {
        matches!(self, ElectrodeConfig::Voa | ElectrodeConfig::Hoa)
    }
}

impl fmt::Display for ElectrodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ElectrodeConfig {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| {
                ParseLabelError::new("electrode configuration", s, Self::ALL.iter().map(|c| c.key()))
            })
    }
}

/// 외함 형태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnclosureType {
    Box,
    Open,
    Shallow,
}

impl EnclosureType {
    pub const ALL: [EnclosureType; 3] = [EnclosureType::Box, EnclosureType::Open, EnclosureType::Shallow];

    pub fn key(self) -> &'static str {
        match self {
            EnclosureType::Box => "box",
            EnclosureType::Open => "open",
            EnclosureType::Shallow => "shallow",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EnclosureType::Box => "Enclosed (box)",
            EnclosureType::Open => "Open air",
            EnclosureType::Shallow => "Shallow enclosure (depth under 203mm)",
        }
    }
}

impl fmt::Display for EnclosureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EnclosureType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|e| e.key() == key)
            .ok_or_else(|| ParseLabelError::new("enclosure type", s, Self::ALL.iter().map(|e| e.key())))
    }
}

/// 계통 접지 방식. 정규화 에너지 회귀식의 접지 항을 결정한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grounding {
    #[default]
    Solid,
    Ungrounded,
}

impl Grounding {
    pub const ALL: [Grounding; 2] = [Grounding::Solid, Grounding::Ungrounded];

    pub fn key(self) -> &'static str {
        match self {
            Grounding::Solid => "solid",
            Grounding::Ungrounded => "ungrounded",
        }
    }
}

impl FromStr for Grounding {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        match key.as_str() {
            "solid" | "grounded" | "earthed" => Ok(Grounding::Solid),
            "ungrounded" | "unearthed" | "high_resistance" | "hrg" => Ok(Grounding::Ungrounded),
            _ => Err(ParseLabelError::new("grounding", s, Self::ALL.iter().map(|g| g.key()))),
        }
    }
}

/// BS 7671 차단시간 판정에 쓰이는 회로 구분.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitType {
    /// 32A 이하 최종회로 (Table 41.1 적용)
    #[default]
    FinalUpTo32A,
    /// 32A 초과 최종회로
    FinalOver32A,
    /// 배전(간선) 회로
    Distribution,
}

impl CircuitType {
    pub const ALL: [CircuitType; 3] = [
        CircuitType::FinalUpTo32A,
        CircuitType::FinalOver32A,
        CircuitType::Distribution,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CircuitType::FinalUpTo32A => "final_up_to_32a",
            CircuitType::FinalOver32A => "final_over_32a",
            CircuitType::Distribution => "distribution",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CircuitType::FinalUpTo32A => "final circuit up to 32A",
            CircuitType::FinalOver32A => "final circuit over 32A",
            CircuitType::Distribution => "distribution circuit",
        }
    }
}

impl FromStr for CircuitType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        match key.as_str() {
            "final" => Ok(CircuitType::FinalUpTo32A),
            "sub_main" | "submain" => Ok(CircuitType::Distribution),
            _ => Self::ALL
                .into_iter()
                .find(|c| c.key() == key)
                .ok_or_else(|| ParseLabelError::new("circuit type", s, Self::ALL.iter().map(|c| c.key()))),
        }
    }
}

/// BS 7671 접지 계통.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarthingSystem {
    TnS,
    #[default]
    TnCS,
    Tt,
}

impl EarthingSystem {
    pub const ALL: [EarthingSystem; 3] = [EarthingSystem::TnS, EarthingSystem::TnCS, EarthingSystem::Tt];

    pub fn key(self) -> &'static str {
        match self {
            EarthingSystem::TnS => "tn_s",
            EarthingSystem::TnCS => "tn_c_s",
            EarthingSystem::Tt => "tt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EarthingSystem::TnS => "TN-S",
            EarthingSystem::TnCS => "TN-C-S",
            EarthingSystem::Tt => "TT",
        }
    }

    pub fn is_tn(self) -> bool {
        !matches!(self, EarthingSystem::Tt)
    }
}

impl FromStr for EarthingSystem {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        match key.as_str() {
            "tns" => Ok(EarthingSystem::TnS),
            "tncs" | "pme" => Ok(EarthingSystem::TnCS),
            _ => Self::ALL
                .into_iter()
                .find(|e| e.key() == key)
                .ok_or_else(|| ParseLabelError::new("earthing system", s, Self::ALL.iter().map(|e| e.key()))),
        }
    }
}

/// 아크플래시 계산 입력값. 계산 시점의 불변 스냅샷으로 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcFlashInputs {
    /// 계통 전압 [V]
    pub voltage: f64,
    /// 3상 단락(볼티드) 고장전류 [A]
    pub bolted_fault_current: f64,
    /// 보호장치 동작(아크 지속) 시간 [s]
    pub clearing_time: f64,
    /// 작업 거리 [mm]
    pub working_distance: f64,
    pub equipment_type: EquipmentType,
    pub electrode_config: ElectrodeConfig,
    pub enclosure_type: EnclosureType,
    /// 도체 간격 [mm]. `None`이면 설비/전압 등급 기본값을 사용한다.
    pub conductor_gap: Option<f64>,
    #[serde(default)]
    pub grounding: Grounding,
    #[serde(default)]
    pub circuit_type: CircuitType,
    #[serde(default)]
    pub earthing_system: EarthingSystem,
}

impl ArcFlashInputs {
    /// 설비 종류의 기본값(작업거리, 외함, 전극 배치)을 채운 입력을 만든다.
    pub fn for_equipment(
        equipment_type: EquipmentType,
        voltage: f64,
        bolted_fault_current: f64,
        clearing_time: f64,
    ) -> Self {
        let defaults = super::equipment::equipment_defaults(equipment_type);
        Self {
            voltage,
            bolted_fault_current,
            clearing_time,
            working_distance: defaults.working_distance,
            equipment_type,
            electrode_config: defaults.default_config,
            enclosure_type: defaults.enclosure_type,
            conductor_gap: None,
            grounding: Grounding::default(),
            circuit_type: CircuitType::default(),
            earthing_system: EarthingSystem::default(),
        }
    }
}
