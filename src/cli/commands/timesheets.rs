use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::core::loader::PageLoader;
use crate::core::pagination::TablePager;
use crate::errors::{AppError, AppResult};
use crate::export::model::{display_headers, record_to_row};
use crate::export::{ExportFormat, ExportLogic, ExportRequest};
use crate::models::AttendanceRecord;
use crate::ui::messages::{error, header, info, warning};
use crate::utils::date::parse_optional_date;
use crate::utils::table::Table;
use std::path::PathBuf;
use std::sync::Arc;

/// Handle the `timesheets` command
pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Timesheets {
        from,
        to,
        page,
        size,
        export,
        out_dir,
        force,
        no_open,
    } = cmd
    {
        ctx.require_session()?;

        let mut pager = TablePager::new(size.unwrap_or(ctx.cfg.page_size))?;
        pager.set_start_date(parse_optional_date(from.as_deref())?);
        pager.set_end_date(parse_optional_date(to.as_deref())?);

        let client = Arc::new(ctx.api_client()?);
        let loader = PageLoader::new(client, ctx.cfg.fetch_timeout())
            .keep_previous(ctx.cfg.keep_previous_data);

        loader.load(pager.query()).await?;
        pager.record_total(loader.view().result.total);

        // The page count is only known after the first response.
        let wanted = page.saturating_sub(1);
        if wanted > 0 {
            pager.go_to(wanted);
            if pager.page_index() != wanted {
                warning(format!(
                    "Page {} does not exist, showing page {}",
                    page,
                    pager.page_index() + 1
                ));
            }
            if pager.page_index() > 0 {
                loader.load(pager.query()).await?;
                pager.record_total(loader.view().result.total);
            }
        }

        let rows = loader.view().result.rows;
        print_page(&rows, &pager);

        if let Some(format) = export {
            let dir = out_dir
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(|| ctx.cfg.export_path());

            let req = ExportRequest {
                format: *format,
                dir: &dir,
                now: chrono::Local::now().naive_local(),
                force: *force,
                launch_viewer: !*no_open,
                context: export_context(&pager),
            };

            run_export(&rows, &req);
        }
    }
    Ok(())
}

fn print_page(rows: &[AttendanceRecord], pager: &TablePager) {
    header("Timesheets");

    if rows.is_empty() {
        info("No timesheet data found. Try adjusting your filter criteria.");
        return;
    }

    let mut table = Table::new(display_headers());
    for r in rows {
        table.add_row(record_to_row(r));
    }
    print!("{}", table.render());

    println!();
    println!("{}", pager.summary());

    let mut hints = Vec::new();
    if pager.can_previous() {
        hints.push(format!("previous: --page {}", pager.page_index()));
    }
    if pager.can_next() {
        hints.push(format!("next: --page {}", pager.page_index() + 2));
    }
    if !hints.is_empty() {
        println!("{}", hints.join(" | "));
    }
}

fn export_context(pager: &TablePager) -> String {
    let q = pager.query();
    let range = match (q.start_date, q.end_date) {
        (None, None) => "all dates".to_string(),
        (Some(s), None) => format!("from {s}"),
        (None, Some(e)) => format!("until {e}"),
        (Some(s), Some(e)) => format!("{s} to {e}"),
    };
    format!("Page {} of {} | {}", q.page_index + 1, pager.total_pages(), range)
}

/// Export problems are reported, never fatal.
fn run_export(rows: &[AttendanceRecord], req: &ExportRequest<'_>) {
    match ExportLogic::export(rows, req) {
        Ok(path) if req.format == ExportFormat::Print => {
            info(format!("Print document ready: {}", path.display()));
        }
        Ok(_) => {}
        Err(AppError::NothingToExport) => warning("No data available to export"),
        Err(e) => error(e),
    }
}
