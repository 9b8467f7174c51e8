use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::core::session::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::models::Session;
use crate::ui::messages::success;

/// Handle `login` and `logout`
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    match cmd {
        Commands::Login {
            token,
            organization,
            email,
            role,
        } => {
            if token.trim().is_empty() || organization.trim().is_empty() {
                return Err(AppError::Config(
                    "token and organization cannot be empty".into(),
                ));
            }

            ctx.session.set(Session {
                token: token.trim().to_string(),
                organization: organization.trim().to_string(),
                email: email.clone(),
                role: role.clone(),
            })?;
            success(format!("Logged in for organization {}", organization.trim()));
        }
        Commands::Logout => {
            ctx.session.clear()?;
            success("Session cleared");
        }
        _ => {}
    }
    Ok(())
}
