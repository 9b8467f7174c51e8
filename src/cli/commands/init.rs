use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Writes a default configuration file at the resolved path and creates the
/// export directory. An existing file is kept unless `--force` is given.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        let path = &ctx.config_path;

        if path.exists() && !*force {
            warning(format!(
                "Configuration already exists at {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(());
        }

        let cfg = Config::default();
        cfg.save_to(path)?;
        std::fs::create_dir_all(cfg.export_path())?;

        info(format!("Config file : {}", path.display()));
        info(format!("Exports     : {}", cfg.export_path().display()));
        success("rStaffDesk initialization completed!");
    }
    Ok(())
}
