use log::info;
use menu_render::{convert_menu, MenuConfig, MenuError};
use std::process::ExitCode;

async fn run() -> Result<(), MenuError> {
    let config = MenuConfig::load()?;
    info!(
        "Rendering {} into {} and {}",
        config.input.display(),
        config.html_output.display(),
        config.text_output.display()
    );

    let report = convert_menu(&config).await?;
    if !report.skipped_rows.is_empty() {
        info!("Skipped malformed rows at lines {:?}", report.skipped_rows);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
