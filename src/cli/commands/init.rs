use crate::cli::parser::Cli;
use crate::config::Config;
use crate::config_path;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the configuration file with the values
/// currently in effect (defaults when no file exists yet).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = config_path(cli);

    info("Initializing rVolunteer…");
    info(format!("Config file : {}", path.display()));
    info(format!("CSV source  : {}", cfg.csv_source));

    if cli.test {
        info("Test mode: configuration file not written.");
        return Ok(());
    }

    cfg.save_to(&path)?;
    success(format!("Configuration written to {}", path.display()));
    Ok(())
}
