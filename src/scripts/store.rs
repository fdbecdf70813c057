use std::path::{Path, PathBuf};

use super::{ScriptError, SCRIPT_EXTENSION};

/// Directory holding generated scripts. Membership is whatever `*.sh` files
/// the directory contains when it is listed.
#[derive(Debug, Clone)]
pub struct ScriptStore {
    dir: PathBuf,
}

impl ScriptStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn script_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Create the store directory (and parents) if absent.
    pub fn ensure_dir(&self) -> Result<(), ScriptError> {
        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }

        builder.create(&self.dir).map_err(|source| ScriptError::Store {
            path: self.dir.clone(),
            source,
        })?;
        tracing::debug!("Script folder ready: {:?}", self.dir);
        Ok(())
    }

    /// Write a script, truncating any existing file with the same name.
    pub fn write_script(&self, file_name: &str, content: &str) -> Result<PathBuf, ScriptError> {
        let path = self.script_path(file_name);
        std::fs::write(&path, content).map_err(|source| ScriptError::Store {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Wrote script {:?} ({} bytes)", path, content.len());
        Ok(path)
    }

    /// Add the execute bits (`chmod +x`) to an existing file.
    pub fn make_executable(&self, path: &Path) -> Result<(), ScriptError> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let to_error = |source: std::io::Error| ScriptError::Permission {
                path: path.to_path_buf(),
                source,
            };
            let mut perms = std::fs::metadata(path).map_err(to_error)?.permissions();
            perms.set_mode(perms.mode() | 0o111);
            std::fs::set_permissions(path, perms).map_err(to_error)?;
        }
        #[cfg(not(unix))]
        let _ = path;

        Ok(())
    }

    /// File names ending in `.sh`, sorted by name.
    pub fn list(&self) -> Result<Vec<String>, ScriptError> {
        let to_error = |source: std::io::Error| ScriptError::NotFound {
            path: self.dir.clone(),
            source,
        };

        let mut scripts = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(to_error)? {
            let entry = entry.map_err(to_error)?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SCRIPT_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                scripts.push(name.to_string());
            }
        }

        scripts.sort();
        tracing::debug!("Found {} scripts in {:?}", scripts.len(), self.dir);
        Ok(scripts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let tmp = TempDir::new().unwrap();
        let store = ScriptStore::new(tmp.path().join("a").join("docker-scripts"));

        store.ensure_dir().unwrap();

        assert!(
            store.dir().is_dir(),
            "ensure_dir: should create the store and its parents"
        );
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let store = ScriptStore::new(tmp.path().join("docker-scripts"));

        store.ensure_dir().unwrap();
        assert!(
            store.ensure_dir().is_ok(),
            "ensure_dir: second call should succeed on an existing directory"
        );
    }

    #[cfg(unix)]
    #[test]
    fn ensure_dir_uses_0755() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let store = ScriptStore::new(tmp.path().join("docker-scripts"));
        store.ensure_dir().unwrap();

        let mode = std::fs::metadata(store.dir()).unwrap().permissions().mode();
        // umask may clear group/other write but never adds bits
        assert_eq!(mode & 0o700, 0o700);
        assert_eq!(mode & 0o022, 0);
    }

    #[test]
    fn ensure_dir_fails_when_path_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("docker-scripts");
        std::fs::write(&blocker, "not a dir").unwrap();

        let err = ScriptStore::new(blocker).ensure_dir().unwrap_err();
        assert!(matches!(err, ScriptError::Store { .. }));
    }

    #[test]
    fn write_script_overwrites_existing() {
        let tmp = TempDir::new().unwrap();
        let store = ScriptStore::new(tmp.path().to_path_buf());

        store.write_script("start_a.sh", "first").unwrap();
        let path = store.write_script("start_a.sh", "second").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "second",
            "write_script: last write should win"
        );
    }

    #[test]
    fn write_script_fails_without_directory() {
        let tmp = TempDir::new().unwrap();
        let store = ScriptStore::new(tmp.path().join("missing"));

        let err = store.write_script("start_a.sh", "x").unwrap_err();
        assert!(matches!(err, ScriptError::Store { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn make_executable_sets_execute_bits() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let store = ScriptStore::new(tmp.path().to_path_buf());
        let path = store.write_script("start_a.sh", "#!/bin/sh\n").unwrap();

        store.make_executable(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111, "make_executable: should set +x");
    }

    #[cfg(unix)]
    #[test]
    fn make_executable_fails_for_missing_file() {
        let tmp = TempDir::new().unwrap();
        let store = ScriptStore::new(tmp.path().to_path_buf());

        let err = store
            .make_executable(&tmp.path().join("nope.sh"))
            .unwrap_err();
        assert!(matches!(err, ScriptError::Permission { .. }));
    }

    #[test]
    fn list_filters_by_extension() {
        let tmp = TempDir::new().unwrap();
        let store = ScriptStore::new(tmp.path().to_path_buf());
        store.write_script("start_a.sh", "").unwrap();
        store.write_script("stop_a.sh", "").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "#!/bin/sh\n").unwrap();
        std::fs::write(tmp.path().join("sh"), "").unwrap();
        std::fs::write(tmp.path().join("backup.sh.bak"), "").unwrap();

        let scripts = store.list().unwrap();

        assert_eq!(scripts, vec!["start_a.sh", "stop_a.sh"]);
    }

    #[test]
    fn list_fails_when_directory_missing() {
        let tmp = TempDir::new().unwrap();
        let store = ScriptStore::new(tmp.path().join("never-created"));

        let err = store.list().unwrap_err();
        assert!(
            matches!(err, ScriptError::NotFound { .. }),
            "list: missing store should be NotFound"
        );
    }

    #[test]
    fn list_is_recomputed_each_call() {
        let tmp = TempDir::new().unwrap();
        let store = ScriptStore::new(tmp.path().to_path_buf());
        assert!(store.list().unwrap().is_empty());

        store.write_script("x.sh", "").unwrap();

        assert_eq!(store.list().unwrap(), vec!["x.sh"]);
    }
}
