use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::expense_repository::JsonExpenseRepository;
use crate::storage::traits::Connection;

/// JsonConnection knows where the expense file lives and makes sure its
/// directory exists
#[derive(Debug, Clone)]
pub struct JsonConnection {
    data_file: PathBuf,
}

impl JsonConnection {
    /// Create a connection for the given data file.
    ///
    /// The containing directory is created if missing. A failure to create it
    /// is logged and otherwise ignored; the first save will report it again.
    pub fn new<P: AsRef<Path>>(data_file: P) -> Self {
        let data_file = data_file.as_ref().to_path_buf();

        if let Some(parent) = data_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                match fs::create_dir_all(parent) {
                    Ok(()) => info!("Created data directory {}", parent.display()),
                    Err(e) => error!("Error creating data directory {}: {}", parent.display(), e),
                }
            }
        }

        Self { data_file }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Connection for JsonConnection {
    type ExpenseRepository = JsonExpenseRepository;

    fn create_expense_repository(&self) -> Self::ExpenseRepository {
        JsonExpenseRepository::new(self.clone())
    }
}
