use crate::auth::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::summarize;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::AppResult;
use crate::locale::{self, labels};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date::period_bounds;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { period } = cmd {
        let lang = cfg.active_language();
        let l = labels(lang);

        let mut pool = DbPool::new(&cfg.database)?;
        let user = session::current_user(&mut pool)?;

        let bounds = match period {
            Some(p) => Some(period_bounds(p)?),
            None => None,
        };

        let entries = load_entries(&mut pool, user.id, bounds)?;
        let summary = summarize(&entries);

        println!();
        println!("{}", bold(l.stats.title));
        println!(
            "{}• {}:{} {} h",
            CYAN,
            l.stats.total_hours,
            RESET,
            locale::format_decimal(summary.total_hours, lang)
        );
        println!(
            "{}• {}:{} {} {}",
            CYAN,
            l.stats.total_amount,
            RESET,
            locale::format_decimal(summary.total_amount, lang),
            cfg.currency
        );

        if !summary.days.is_empty() {
            println!();
            println!("{}", bold(l.stats.by_day));
            for day in &summary.days {
                println!(
                    "  {}  {:>8} h  {:>12} {}",
                    locale::format_date(day.date, lang),
                    locale::format_decimal(day.hours, lang),
                    locale::format_decimal(day.amount, lang),
                    cfg.currency
                );
            }
        }
        println!();
    }

    Ok(())
}
