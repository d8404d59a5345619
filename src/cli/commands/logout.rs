use crate::auth::session;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::locale::labels;
use crate::ui::messages::success;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    session::logout(&mut pool)?;

    let l = labels(cfg.active_language());
    success(l.auth.logout);
    Ok(())
}
