//! Writing fetched template files into the project

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// One file of a fetched template
#[derive(Debug, Clone)]
pub struct TemplateFile {
    /// Path relative to the template root
    pub path: PathBuf,
    pub contents: Vec<u8>,
    /// Unix permission bits, when the source recorded them
    pub mode: Option<u32>,
}

/// Write template files under `target_dir`, creating directories as needed.
/// Existing files are overwritten.
pub async fn write_template(files: &[TemplateFile], target_dir: &Path) -> Result<Vec<String>> {
    fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

    let mut written = Vec::new();

    for file in files {
        let target_path = target_dir.join(&file.path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&target_path, &file.contents)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
        apply_mode(&target_path, file.mode).await?;

        written.push(file.path.display().to_string());
    }

    Ok(written)
}

#[cfg(unix)]
async fn apply_mode(path: &Path, mode: Option<u32>) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    // Only the permission bits; archives may carry file-type bits too
    if let Some(mode) = mode.map(|m| m & 0o777).filter(|m| *m != 0) {
        fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
            .await
            .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
    }
    Ok(())
}

#[cfg(not(unix))]
async fn apply_mode(_path: &Path, _mode: Option<u32>) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, contents: &str, mode: Option<u32>) -> TemplateFile {
        TemplateFile {
            path: PathBuf::from(path),
            contents: contents.as_bytes().to_vec(),
            mode,
        }
    }

    #[tokio::test]
    async fn test_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("frontend_sample");
        let written = write_template(
            &[file("package.json", "{}", None), file("src/App.tsx", "app", None)],
            &target,
        )
        .await
        .unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(std::fs::read_to_string(target.join("src/App.tsx")).unwrap(), "app");
    }

    #[tokio::test]
    async fn test_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "old").unwrap();

        write_template(&[file("README.md", "new", None)], dir.path())
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(dir.path().join("README.md")).unwrap(), "new");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_preserves_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        write_template(&[file("run.sh", "#!/bin/sh", Some(0o100755))], dir.path())
            .await
            .unwrap();

        let mode = std::fs::metadata(dir.path().join("run.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
