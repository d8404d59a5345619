use crate::auth::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::locale::labels;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let user = session::login(&mut pool, email, password)?;

        let l = labels(cfg.active_language());
        success(format!("{}: {} <{}>", l.auth.login, user.name, user.email));
    }

    Ok(())
}
