use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs};

pub const CONFIG_FILE: &str = ".gene2goa.toml";

/// A config file that was found and read
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub content: String,
}

/// Load config file content
///
/// Searches for the config in:
/// 1. `explicit` path, if given (no fallback when it is missing)
/// 2. Current working directory as .gene2goa.toml
/// 3. Home directory as .gene2goa.toml
/// 4. Platform config directory as gene2goa/config.toml
///
/// A missing file is `Ok(None)`. A file that exists but cannot be read is
/// an error, and discovery stops there.
pub fn load_config_file(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    if let Some(path) = explicit {
        return read(path);
    }

    for path in candidates() {
        if let Some(file) = read(&path)? {
            return Ok(Some(file));
        }
    }
    Ok(None)
}

fn candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    if let Ok(path) = crate::paths::app_config_path() {
        paths.push(path);
    }
    paths
}

fn read(path: &Path) -> Result<Option<ConfigFile>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(ConfigFile {
            path: path.to_path_buf(),
            content,
        })),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read config file {}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_missing_path_does_not_fall_back() {
        let missing = env::temp_dir().join("gene2goa-does-not-exist.toml");
        assert!(load_config_file(Some(&missing)).unwrap().is_none());
    }

    #[test]
    fn test_explicit_path_is_read() {
        let path = env::temp_dir().join(format!("gene2goa-test-{}.toml", std::process::id()));
        fs::write(&path, "annotation_limit = 5\n").unwrap();

        let file = load_config_file(Some(&path));
        fs::remove_file(&path).ok();

        let file = file.unwrap().unwrap();
        assert_eq!(file.path, path);
        assert_eq!(file.content, "annotation_limit = 5\n");
    }

    #[test]
    fn test_unreadable_path_is_error() {
        // a directory exists but cannot be read as a file
        let dir = env::temp_dir().join(format!("gene2goa-dir-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let result = load_config_file(Some(&dir));
        fs::remove_dir(&dir).ok();

        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config file"));
    }
}
