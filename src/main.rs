use std::process::ExitCode;

use clap::Parser;

use arc_flash_toolbox::{app, cli::Cli, config::Config, telemetry};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    match try_run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run() -> Result<(), app::AppError> {
    let cli = Cli::parse();
    let (mut cfg, origin) = Config::load_or_default_from(&cli.config)?;
    telemetry::init_tracing(&cfg.log_level);
    origin.log(&cli.config);
    app::run(cli, &mut cfg)
}
