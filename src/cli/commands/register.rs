use crate::auth::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::locale::labels;
use crate::ui::messages::success;

/// Create an account and open a session for it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register {
        email,
        name,
        password,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let user = session::register(&mut pool, email, password, name)?;

        let l = labels(cfg.active_language());
        success(format!("{}: {} <{}>", l.auth.register, user.name, user.email));
    }

    Ok(())
}
