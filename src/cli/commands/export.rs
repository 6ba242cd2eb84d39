use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::export::{ExportKind, ExportLogic};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        blocks,
        mode,
        force,
    } = cmd
    {
        let kind = if *blocks {
            ExportKind::Blocks(mode.unwrap_or(cfg.default_mode))
        } else {
            ExportKind::Hours
        };

        let store = SqliteStore::open(&cfg.database)?;
        let n = ExportLogic::export(&store, &cfg.user, *format, kind, file, range, *force)?;

        if n > 0 {
            store.audit(
                "export",
                format.as_str(),
                &format!("{} rows to {}", n, file),
            );
        }
    }
    Ok(())
}
