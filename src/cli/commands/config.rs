use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::locale::Language;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config, is_test: bool) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        set_lang,
    } = cmd
    {
        if let Some(code) = set_lang {
            let lang = Language::from_code(code)
                .ok_or_else(|| AppError::InvalidLanguage(code.to_string()))?;

            // Switching the language only changes how stored values are
            // displayed; nothing in the database is rewritten.
            let updated = Config {
                database: cfg.database.clone(),
                language: lang.as_code().to_string(),
                currency: cfg.currency.clone(),
            };
            if !is_test {
                updated.save()?;
            }
            success(format!("Display language set to '{}'", lang.as_code()));
        }

        if *print_config {
            info(format!("Config file: {:?}", Config::config_file()));
            println!("database: {}", cfg.database);
            println!("language: {}", cfg.language);
            println!("currency: {}", cfg.currency);
        }
    }

    Ok(())
}
