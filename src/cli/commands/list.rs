use crate::auth::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::AppResult;
use crate::locale::{self, labels};
use crate::utils::date::period_bounds;
use crate::utils::formatting::{pad_left, pad_right, two_decimals};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let lang = cfg.active_language();
        let l = labels(lang);

        let mut pool = DbPool::new(&cfg.database)?;
        let user = session::current_user(&mut pool)?;

        let bounds = match period {
            Some(p) => Some(period_bounds(p)?),
            None => None,
        };

        let entries = load_entries(&mut pool, user.id, bounds)?;

        if entries.is_empty() {
            println!("No work entries found.");
            return Ok(());
        }

        // Header
        println!(
            "{} {} {} {} {} {} {}",
            pad_right(l.form.date, 12),
            pad_right(l.form.event_name, 24),
            pad_right(l.form.event_location, 18),
            pad_right(&format!("{}-{}", l.form.start_time, l.form.end_time), 13),
            pad_left(l.form.break_duration, 18),
            pad_left(l.form.total_hours, 14),
            pad_left(l.form.total_amount, 16),
        );

        for e in &entries {
            let span = format!(
                "{}-{}",
                e.start_time.format("%H:%M"),
                e.end_time.format("%H:%M")
            );
            println!(
                "{} {} {} {} {} {} {}",
                pad_right(&locale::format_date(e.date, lang), 12),
                pad_right(&e.event_name, 24),
                pad_right(&e.event_location, 18),
                pad_right(&span, 13),
                pad_left(&e.break_minutes.to_string(), 18),
                pad_left(&two_decimals(e.total_hours), 14),
                pad_left(&two_decimals(e.total_amount), 16),
            );
        }
    }

    Ok(())
}
