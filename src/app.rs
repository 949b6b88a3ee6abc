use crate::arcflash::{self, ValidationErrors};
use crate::cli::{CalculateArgs, Cli, Command};
use crate::config::{Config, ConfigError, OutputFormat};
use crate::report;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 입력값 검증 실패
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// JSON 출력 오류
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 명령행 인자에 따라 하위 명령을 실행한다. 하위 명령이 없으면 대화형 메뉴를 띄운다.
pub fn run(cli: Cli, config: &mut Config) -> Result<(), AppError> {
    match cli.command {
        Some(Command::Calculate(args)) => run_calculate(&args, config),
        Some(Command::Defaults { equipment }) => {
            let defaults = arcflash::equipment_defaults(equipment);
            if config.output == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&defaults)?);
            } else {
                println!("{}", report::render_defaults(equipment, &defaults, &config.default_units));
            }
            Ok(())
        }
        Some(Command::Labels) => ui_cli::handle_labels(),
        Some(Command::Interactive) | None => run_interactive(config, &cli.config),
    }
}

fn run_calculate(args: &CalculateArgs, config: &Config) -> Result<(), AppError> {
    let inputs = args.to_inputs(config);
    tracing::info!(
        equipment = inputs.equipment_type.key(),
        voltage = inputs.voltage,
        bolted_fault_current = inputs.bolted_fault_current,
        "calculate"
    );
    let result = arcflash::calculate_arc_flash(&inputs)?;
    if args.json || config.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render_text(&inputs, &result, &config.default_units));
    }
    Ok(())
}

/// 대화형 메인 루프를 실행한다. 종료하거나 설정을 바꾸면 설정 파일에 저장한다.
fn run_interactive(config: &mut Config, config_path: &std::path::Path) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::ArcFlash => ui_cli::handle_arc_flash(config)?,
            MenuChoice::EquipmentDefaults => ui_cli::handle_equipment_defaults(config)?,
            MenuChoice::Labels => ui_cli::handle_labels()?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save_to(config_path)?;
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("Bye.");
                break;
            }
        }
    }
    Ok(())
}
