mod food;
mod migrate;
mod sessions;
mod source;
mod weights;

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

use crate::models::PeriodWindow;

pub use source::LocalStore;

pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            if !path.exists() {
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .mode(0o600)
                    .open(&path)?;
            } else {
                let mut perms = fs::metadata(&path)?.permissions();
                if perms.mode() & 0o777 != 0o600 {
                    perms.set_mode(0o600);
                    fs::set_permissions(&path, perms)?;
                }
            }
        }

        let conn = Connection::open(path)?;
        let db = Self { conn };
        migrate::run(&db.conn)?;
        Ok(db)
    }
}

/// Half-open text bounds `[from, to)` matching every stored date or timestamp in `window`.
pub(crate) fn window_bounds(window: &PeriodWindow) -> (String, String) {
    match window {
        PeriodWindow::Range { start, end } => {
            // '~' sorts after every time suffix of the last day
            let to = end
                .succ_opt()
                .map_or_else(|| format!("{}~", end), |next| next.to_string());
            (start.to_string(), to)
        }
        PeriodWindow::All => ("0000".to_string(), "9999".to_string()),
    }
}
