use std::io::{self, Write};

use crate::app::AppError;
use crate::arcflash::{
    self, ArcFlashInputs, ElectrodeConfig, EnclosureType, EquipmentType, RawInputs,
};
use crate::config::{Config, OutputFormat};
use crate::report;
use crate::units::{EnergyUnit, LengthUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ArcFlash,
    EquipmentDefaults,
    Labels,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Arc Flash Toolbox ===");
    println!("1) Arc flash calculation");
    println!("2) Equipment defaults");
    println!("3) Equipment / electrode labels");
    println!("4) Settings");
    println!("0) Exit");
    loop {
        let sel = read_line("Select: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::ArcFlash),
            "2" => return Ok(MenuChoice::EquipmentDefaults),
            "3" => return Ok(MenuChoice::Labels),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("Invalid selection, try again."),
        }
    }
}

/// 아크플래시 계산 메뉴를 처리한다. 빈 입력은 설비 기본값을 사용한다.
pub fn handle_arc_flash(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- Arc Flash Calculation --");
    let equipment = read_equipment(cfg.default_equipment)?;
    let defaults = arcflash::equipment_defaults(equipment);
    println!("{}", report::render_defaults(equipment, &defaults, &cfg.default_units));

    let mut raw = RawInputs {
        voltage: read_line("System voltage [V] (e.g. 415): ")?,
        bolted_fault_current: read_line("Bolted fault current [A] (e.g. 25000): ")?,
        clearing_time: read_line("Clearing time [s] (e.g. 0.1): ")?,
        working_distance: read_line(&format!(
            "Working distance [mm] (enter = {:.0}): ",
            defaults.working_distance
        ))?,
        conductor_gap: read_line("Conductor gap [mm] (enter = auto): ")?,
    };
    if raw.working_distance.trim().is_empty() {
        raw.working_distance = defaults.working_distance.to_string();
    }
    let electrode = read_electrode(defaults.default_config)?;

    let base = ArcFlashInputs {
        electrode_config: electrode,
        enclosure_type: if electrode.is_open_air() {
            EnclosureType::Open
        } else {
            defaults.enclosure_type
        },
        circuit_type: cfg.circuit_type,
        earthing_system: cfg.earthing_system,
        ..ArcFlashInputs::for_equipment(equipment, 0.0, 0.0, 0.0)
    };

    let inputs = match arcflash::parse_raw_inputs(&raw, base) {
        Ok(inputs) => inputs,
        Err(errors) => {
            print_field_errors(&errors);
            return Ok(());
        }
    };
    match arcflash::calculate_arc_flash(&inputs) {
        Ok(result) => match cfg.output {
            OutputFormat::Text => println!("{}", report::render_text(&inputs, &result, &cfg.default_units)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        },
        Err(errors) => print_field_errors(&errors),
    }
    Ok(())
}

/// 설비 기본값 메뉴를 처리한다.
pub fn handle_equipment_defaults(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- Equipment Defaults --");
    for equipment in EquipmentType::ALL {
        let defaults = arcflash::equipment_defaults(equipment);
        println!("{}", report::render_defaults(equipment, &defaults, &cfg.default_units));
    }
    Ok(())
}

/// 라벨 목록을 출력한다.
pub fn handle_labels() -> Result<(), AppError> {
    print_labels();
    Ok(())
}

pub fn print_labels() {
    println!("Equipment types:");
    for e in EquipmentType::ALL {
        println!("  {:<16} {}", e.key(), e.label());
    }
    println!("Electrode configurations:");
    for c in ElectrodeConfig::ALL {
        println!("  {:<16} {}", c.key(), c.label());
    }
    println!("Enclosure types:");
    for e in EnclosureType::ALL {
        println!("  {:<16} {}", e.key(), e.label());
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- Settings --");
    println!(
        "Default equipment: {} | energy unit: {} | distance unit: {} | output: {:?}",
        cfg.default_equipment.key(),
        cfg.default_units.energy.symbol(),
        cfg.default_units.distance.symbol(),
        cfg.output
    );
    println!("1) Default equipment  2) Energy unit  3) Distance unit  4) Output format");
    let sel = read_line("Change which (enter to cancel): ")?;
    match sel.trim() {
        "" => {}
        "1" => cfg.default_equipment = read_equipment(cfg.default_equipment)?,
        "2" => {
            println!("Energy unit: 1=cal/cm² 2=J/cm² 3=kJ/m²");
            cfg.default_units.energy = match read_line("Select: ")?.trim() {
                "1" => EnergyUnit::CalPerCm2,
                "2" => EnergyUnit::JoulePerCm2,
                "3" => EnergyUnit::KilojoulePerM2,
                _ => {
                    println!("Invalid input, unchanged.");
                    cfg.default_units.energy
                }
            };
        }
        "3" => {
            println!("Distance unit: 1=mm 2=cm 3=m 4=in 5=ft");
            cfg.default_units.distance = match read_line("Select: ")?.trim() {
                "1" => LengthUnit::Millimeter,
                "2" => LengthUnit::Centimeter,
                "3" => LengthUnit::Meter,
                "4" => LengthUnit::Inch,
                "5" => LengthUnit::Foot,
                _ => {
                    println!("Invalid input, unchanged.");
                    cfg.default_units.distance
                }
            };
        }
        "4" => {
            println!("Output: 1=text 2=json");
            cfg.output = match read_line("Select: ")?.trim() {
                "1" => OutputFormat::Text,
                "2" => OutputFormat::Json,
                _ => {
                    println!("Invalid input, unchanged.");
                    cfg.output
                }
            };
        }
        _ => println!("Invalid input, unchanged."),
    }
    Ok(())
}

fn print_field_errors(errors: &arcflash::ValidationErrors) {
    println!("Input errors:");
    for (field, msg) in errors.iter() {
        println!("  {field}: {msg}");
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_equipment(current: EquipmentType) -> Result<EquipmentType, AppError> {
    for (i, e) in EquipmentType::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, e.label());
    }
    loop {
        let sel = read_line(&format!("Equipment (enter = {}): ", current.key()))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(current);
        }
        if let Some(e) = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| EquipmentType::ALL.get(i).copied())
        {
            return Ok(e);
        }
        match sel.parse::<EquipmentType>() {
            Ok(e) => return Ok(e),
            Err(err) => println!("{err}"),
        }
    }
}

fn read_electrode(current: ElectrodeConfig) -> Result<ElectrodeConfig, AppError> {
    loop {
        let sel = read_line(&format!(
            "Electrode configuration VCB/VCBB/HCB/VOA/HOA (enter = {}): ",
            current.key()
        ))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(current);
        }
        match sel.parse::<ElectrodeConfig>() {
            Ok(c) => return Ok(c),
            Err(err) => println!("{err}"),
        }
    }
}
