use crate::api::ReminderSource;
use crate::cli::AppContext;
use crate::cli::parser::{Commands, ReminderAction};
use crate::core::calendar::active_on;
use crate::core::reminders::{
    ExpirySweeper, ReminderStore, SystemClock, create_reminder, edit_reminder,
};
use crate::errors::AppResult;
use crate::models::{Reminder, ReminderDraft, ReminderPatch};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date::parse_date;
use crate::utils::formatting::MISSING;
use crate::utils::table::Table;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Handle the `reminders` subcommands
pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Reminders { action } = cmd else {
        return Ok(());
    };

    ctx.require_session()?;
    let client = Arc::new(ctx.api_client()?);

    match action {
        ReminderAction::List { on } => {
            let mut reminders = client.list_reminders().await?;
            if let Some(day) = on {
                reminders = active_on(&reminders, parse_date(day)?);
            }
            print_reminders(&reminders);
        }
        ReminderAction::Add {
            title,
            start,
            end,
            profile,
            remarks,
        } => {
            let draft = ReminderDraft {
                profile: *profile,
                title: title.trim().to_string(),
                start_date: start.clone(),
                end_date: end.clone(),
                remarks: remarks.clone(),
            };
            let store = ReminderStore::default();
            let created = create_reminder(&*client, &store, &draft).await?;
            success(format!(
                "Reminder {} created: {}",
                created.id,
                created.display_title()
            ));
        }
        ReminderAction::Edit {
            id,
            title,
            start,
            end,
            profile,
            remarks,
        } => {
            let patch = ReminderPatch {
                profile: *profile,
                title: title.as_ref().map(|t| t.trim().to_string()),
                start_date: start.clone(),
                end_date: end.clone(),
                remarks: remarks.clone(),
            };
            if patch.is_empty() {
                warning("Nothing to change");
                return Ok(());
            }

            let store = ReminderStore::new(client.list_reminders().await?);
            let updated = edit_reminder(&*client, &store, *id, &patch).await?;
            success(format!(
                "Reminder {} updated: {}",
                updated.id,
                updated.display_title()
            ));
        }
        ReminderAction::Delete { id } => {
            client.delete_reminder(*id).await?;
            success(format!("Reminder {id} deleted"));
        }
        ReminderAction::Sweep { watch } => {
            let store = Arc::new(ReminderStore::default());
            let sweeper = ExpirySweeper::new(
                client,
                store,
                Arc::new(SystemClock),
                ctx.cfg.sweep_interval(),
            );

            sweeper.refresh().await?;
            let removed = sweeper.sweep_once().await;
            info(format!("Removed {} expired reminder(s)", removed.len()));

            if *watch {
                let shutdown = CancellationToken::new();
                let trigger = shutdown.clone();
                tokio::spawn(async move {
                    if tokio::signal::ctrl_c().await.is_ok() {
                        trigger.cancel();
                    }
                });

                info(format!(
                    "Sweeping every {}s, press Ctrl-C to stop",
                    ctx.cfg.sweep_interval().as_secs()
                ));
                sweeper.run(shutdown).await;
            }
        }
    }

    Ok(())
}

fn print_reminders(reminders: &[Reminder]) {
    header("Reminders");

    if reminders.is_empty() {
        info("No reminders");
        return;
    }

    let mut table = Table::new(["ID", "Title", "Start", "End", "Remarks"]);
    for r in reminders {
        table.add_row(vec![
            r.id.to_string(),
            r.display_title().to_string(),
            match r.start_date.as_str() {
                "" => MISSING.to_string(),
                s => s.to_string(),
            },
            r.end_date.clone().unwrap_or_else(|| MISSING.to_string()),
            r.remarks.clone().unwrap_or_else(|| MISSING.to_string()),
        ]);
    }
    print!("{}", table.render());
}
