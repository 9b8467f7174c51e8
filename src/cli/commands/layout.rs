use crate::api::ReminderSource;
use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::core::calendar::{bucket_by_day, day_layout};
use crate::core::lanes::lane_span;
use crate::errors::AppResult;
use crate::models::{PlacedEvent, Reminder};
use crate::ui::messages::{header, info};
use crate::utils::date::{parse_date, today};
use crate::utils::table::Table;
use crate::utils::time::format_hour;
use chrono::{Datelike, NaiveDate};

/// Width of the lane bar drawn next to each event.
const BAR_WIDTH: usize = 24;

/// Handle the `layout` command
pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Layout { date } = cmd {
        ctx.require_session()?;

        let day = match date {
            Some(d) => parse_date(d)?,
            None => today(),
        };

        let client = ctx.api_client()?;
        let reminders = client.list_reminders().await?;

        print_month_overview(&reminders, day);
        print_layout(day, &day_layout(&reminders, day));
    }
    Ok(())
}

/// Days of `day`'s month that have at least one reminder.
fn print_month_overview(reminders: &[Reminder], day: NaiveDate) {
    let busy: Vec<String> = bucket_by_day(reminders)
        .keys()
        .filter(|d| d.year() == day.year() && d.month() == day.month())
        .map(|d| d.day().to_string())
        .collect();

    if !busy.is_empty() {
        info(format!(
            "Days with events in {}: {}",
            day.format("%B %Y"),
            busy.join(", ")
        ));
    }
}

fn print_layout(day: NaiveDate, placed: &[PlacedEvent<Reminder>]) {
    header(format!("Layout for {day}"));

    let Some(first) = placed.first() else {
        info("No events on this day");
        return;
    };
    info(format!("Lanes: {}", first.assignment.total_lanes));

    let mut table = Table::new(["Lane", "Time", "Title", "Column"]);
    for p in placed {
        table.add_row(vec![
            (p.assignment.lane + 1).to_string(),
            format!(
                "{}-{}",
                format_hour(p.event.start_hour),
                format_hour(p.event.end_hour)
            ),
            p.event.payload.display_title().to_string(),
            lane_bar(p),
        ]);
    }
    print!("{}", table.render());
}

fn lane_bar(p: &PlacedEvent<Reminder>) -> String {
    let (offset, width) = lane_span(p.assignment);
    let start = (offset * BAR_WIDTH as f64).round() as usize;
    let len = ((width * BAR_WIDTH as f64).round() as usize).max(1);
    let end = (start + len).min(BAR_WIDTH);

    (0..BAR_WIDTH)
        .map(|i| if i >= start && i < end { '#' } else { '.' })
        .collect()
}
