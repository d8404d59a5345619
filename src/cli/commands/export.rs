use crate::auth::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let user = session::current_user(&mut pool)?;

        ExportLogic::export(
            &mut pool,
            user.id,
            cfg.active_language(),
            &cfg.currency,
            format.clone(),
            file.as_deref(),
            period,
        )?;
    }

    Ok(())
}
