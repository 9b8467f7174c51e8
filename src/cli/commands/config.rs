use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            info(format!("Configuration file: {}", ctx.config_path.display()));
            let yaml = serde_yaml::to_string(&ctx.cfg)
                .map_err(|e| AppError::Config(e.to_string()))?;
            println!("{yaml}");
        }

        if *check {
            // Re-read from disk: `ctx.cfg` may carry command-line overrides.
            let on_disk = Config::load_from(&ctx.config_path)?;
            on_disk.validate()?;
            success(format!("Configuration OK ({})", ctx.config_path.display()));
        }
    }

    Ok(())
}
