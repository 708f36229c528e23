use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq)]
pub struct CryptopowerDirectory(PathBuf);

impl CryptopowerDirectory {
    pub fn new(p: PathBuf) -> Self {
        CryptopowerDirectory(p)
    }

    pub fn new_default() -> Result<Self, DirectoryError> {
        default_datadir().map(CryptopowerDirectory::new)
    }

    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }

    pub fn init(&self) -> Result<(), DirectoryError> {
        create_directory(self.0.as_path())
    }

    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Failed to get default data directory")]
    NoDefault,
    #[error("Failed to create {0}: {1}")]
    Create(PathBuf, std::io::Error),
}

/// Get the absolute path to the cryptopower data folder.
///
/// This a "Cryptopower" directory in the XDG standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.cryptopower`.
fn default_datadir() -> Result<PathBuf, DirectoryError> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".cryptopower");

        #[cfg(not(target_os = "linux"))]
        path.push("Cryptopower");

        return Ok(path);
    }

    Err(DirectoryError::NoDefault)
}

fn create_directory(datadir_path: &Path) -> Result<(), DirectoryError> {
    #[cfg(unix)]
    let res = {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        DirBuilder::new()
            .mode(0o700)
            .recursive(true)
            .create(datadir_path)
    };

    #[cfg(not(unix))]
    let res = std::fs::create_dir_all(datadir_path);

    res.map_err(|e| DirectoryError::Create(datadir_path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = CryptopowerDirectory::new(tmp.path().join("nested").join("datadir"));
        assert!(!dir.exists());
        dir.init().unwrap();
        assert!(dir.exists());
        // Already existing directories are fine.
        dir.init().unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(dir.path()).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o700);
        }
    }

    #[test]
    fn default_directory_name() {
        let dir = CryptopowerDirectory::new_default().unwrap();
        let name = dir.path().file_name().unwrap();
        #[cfg(target_os = "linux")]
        assert_eq!(name, ".cryptopower");
        #[cfg(not(target_os = "linux"))]
        assert_eq!(name, "Cryptopower");
    }
}
