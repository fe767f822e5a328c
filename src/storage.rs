use crate::errors::AppError;
use crate::ledger::Ledger;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/transactions.json"))
}

pub async fn load_ledger(path: &Path) -> Ledger {
    match fs::read(path).await {
        Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ledger::default(),
        Ok(bytes) => match serde_json::from_slice::<Ledger>(&bytes) {
            Ok(ledger) => {
                info!(
                    "loaded {} transactions from {}",
                    ledger.transactions().len(),
                    path.display()
                );
                ledger
            }
            Err(err) => {
                error!("failed to parse data file: {err}");
                Ledger::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ledger::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            Ledger::default()
        }
    }
}

pub async fn persist_ledger(path: &Path, ledger: &Ledger) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(ledger).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
