//! 명령행 인자 정의.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::arcflash::{
    ArcFlashInputs, CircuitType, EarthingSystem, ElectrodeConfig, EnclosureType, EquipmentType,
    Grounding,
};
use crate::config::{Config, DEFAULT_CONFIG_PATH};

#[derive(Debug, Parser)]
#[command(
    name = "arc_flash_toolbox_cli",
    version,
    about = "Arc flash incident energy, PPE category and BS 7671 disconnection checks"
)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate incident energy for one set of inputs
    Calculate(CalculateArgs),
    /// Show the default working distance, enclosure and electrode configuration of an equipment type
    Defaults {
        /// Equipment type key (e.g. panelboard, switchgear_lv, mcc)
        equipment: EquipmentType,
    },
    /// List equipment types, electrode configurations and enclosure types
    Labels,
    /// Prompt-driven menu
    Interactive,
}

#[derive(Debug, Clone, Args)]
pub struct CalculateArgs {
    /// System voltage [V]
    #[arg(long)]
    pub voltage: f64,
    /// Bolted fault current [A]
    #[arg(long = "fault-current")]
    pub bolted_fault_current: f64,
    /// Protective device clearing time [s]
    #[arg(long = "clearing-time")]
    pub clearing_time: f64,
    /// Working distance [mm]; defaults to the equipment type's typical distance
    #[arg(long)]
    pub distance: Option<f64>,
    /// Equipment type; defaults to the config file's default_equipment
    #[arg(long)]
    pub equipment: Option<EquipmentType>,
    /// Electrode configuration (VCB, VCBB, HCB, VOA, HOA)
    #[arg(long)]
    pub electrode: Option<ElectrodeConfig>,
    /// Enclosure type (box, open, shallow)
    #[arg(long)]
    pub enclosure: Option<EnclosureType>,
    /// Conductor gap [mm]; derived from the equipment type when omitted
    #[arg(long)]
    pub gap: Option<f64>,
    /// System grounding (solid, ungrounded)
    #[arg(long, default_value = "solid")]
    pub grounding: Grounding,
    /// BS 7671 circuit type (final_up_to_32a, final_over_32a, distribution)
    #[arg(long)]
    pub circuit: Option<CircuitType>,
    /// BS 7671 earthing system (tn_s, tn_c_s, tt)
    #[arg(long)]
    pub earthing: Option<EarthingSystem>,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl CalculateArgs {
    /// 인자와 설정 기본값으로 계산 입력을 만든다. 생략된 항목은 설비 기본값을 따른다.
    pub fn to_inputs(&self, cfg: &Config) -> ArcFlashInputs {
        let equipment = self.equipment.unwrap_or(cfg.default_equipment);
        let base = ArcFlashInputs::for_equipment(
            equipment,
            self.voltage,
            self.bolted_fault_current,
            self.clearing_time,
        );
        ArcFlashInputs {
            working_distance: self.distance.unwrap_or(base.working_distance),
            electrode_config: self.electrode.unwrap_or(base.electrode_config),
            enclosure_type: self.enclosure.unwrap_or(base.enclosure_type),
            conductor_gap: self.gap,
            grounding: self.grounding,
            circuit_type: self.circuit.unwrap_or(cfg.circuit_type),
            earthing_system: self.earthing.unwrap_or(cfg.earthing_system),
            ..base
        }
    }
}
