/// Test utilities for storage and service tests.
///
/// Each `TestEnvironment` owns a temporary directory that is removed when the
/// environment is dropped, even if the test panics.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

use super::connection::JsonConnection;

pub struct TestEnvironment {
    /// Kept alive so the directory is not removed before the test ends
    _temp_dir: TempDir,
    pub connection: JsonConnection,
    data_file: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let data_file = temp_dir.path().join("data").join("expenses.json");
        let connection = JsonConnection::new(&data_file);

        Ok(Self {
            _temp_dir: temp_dir,
            connection,
            data_file,
        })
    }

    pub fn base_directory(&self) -> &Path {
        self._temp_dir.path()
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn write_data_file(&self, content: &str) {
        std::fs::write(&self.data_file, content).expect("Failed to write test data file");
    }

    pub fn read_data_file(&self) -> String {
        std::fs::read_to_string(&self.data_file).expect("Failed to read test data file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleans_up_on_drop() {
        let base = {
            let env = TestEnvironment::new().unwrap();
            env.write_data_file("[]");
            assert!(env.data_file().starts_with(env.base_directory()));
            env.base_directory().to_path_buf()
        };
        assert!(!base.exists());
    }
}
