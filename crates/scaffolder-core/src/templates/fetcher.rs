//! Template fetching from GitHub archives or a local directory
//!
//! Remote templates are downloaded as the zip archive GitHub serves for a
//! ref, then filtered in memory to the requested subdirectory. Only the
//! files are copied; no git history comes along.

use super::copier::{self, TemplateFile};
use super::reference::{TemplateError, TemplateRef};
use crate::config::ScaffoldConfig;
use anyhow::{Context, Result};
use std::io::{Cursor, Read};
use std::path::{Component, Path, PathBuf};
use url::Url;
use walkdir::WalkDir;
use zip::ZipArchive;

/// Template source - either a remote archive host or a local directory
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Host serving `<owner>/<repo>/archive/<ref>.zip`
    Remote(Url),
    /// Directory laid out as `<repo>/<subdir>/...`
    Local(PathBuf),
}

impl TemplateSource {
    /// Local directory when configured, otherwise the remote host
    pub fn from_config(config: &ScaffoldConfig) -> Self {
        match &config.template_dir {
            Some(dir) => Self::Local(dir.clone()),
            None => Self::Remote(config.template_host.clone()),
        }
    }
}

/// Template fetcher - handles retrieving templates from remote or local sources
pub struct TemplateFetcher {
    source: TemplateSource,
    client: reqwest::Client,
}

impl TemplateFetcher {
    /// Create a new fetcher with a custom user agent
    pub fn new(source: TemplateSource, user_agent: &str) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a fetcher from the scaffolder config
    pub fn from_config(config: &ScaffoldConfig) -> Self {
        Self::new(TemplateSource::from_config(config), &config.user_agent)
    }

    /// Get the template source
    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Build `<base>/<owner>/<repo>/archive/<ref>.zip`, preserving any base path
    fn archive_url(base: &Url, template: &TemplateRef) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("URL cannot have path segments: {}", base))?
            .pop_if_empty()
            .push(&template.owner)
            .push(&template.repo)
            .push("archive")
            .push(&format!("{}.zip", template.git_ref));
        Ok(url)
    }

    /// Retrieve a template's files without writing them anywhere
    pub async fn fetch(&self, template: &TemplateRef) -> Result<Vec<TemplateFile>> {
        match &self.source {
            TemplateSource::Remote(base_url) => {
                let bytes = self.download(base_url, template).await?;
                Ok(extract_archive(&bytes, template)?)
            }
            TemplateSource::Local(root) => read_local(root, template),
        }
    }

    /// Fetch a template and write it into `target_dir`, overwriting existing files
    pub async fn fetch_into(&self, template: &TemplateRef, target_dir: &Path) -> Result<Vec<String>> {
        let files = self.fetch(template).await?;
        copier::write_template(&files, target_dir).await
    }

    async fn download(&self, base_url: &Url, template: &TemplateRef) -> Result<Vec<u8>> {
        let url = Self::archive_url(base_url, template)?;
        tracing::debug!(%url, %template, "downloading template archive");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch template '{}' from {}", template, url))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Failed to fetch template '{}' from {}: HTTP {}",
                template,
                url,
                response.status()
            );
        }

        let bytes = response.bytes().await?;
        tracing::debug!(size = bytes.len(), "template archive downloaded");
        Ok(bytes.to_vec())
    }
}

/// Select the template's files from a GitHub archive.
///
/// GitHub archives wrap everything in one `<repo>-<ref>/` directory; that
/// level is stripped, then everything outside `subdir` is dropped.
pub fn extract_archive(zip_bytes: &[u8], template: &TemplateRef) -> Result<Vec<TemplateFile>, TemplateError> {
    let mut archive = ZipArchive::new(Cursor::new(zip_bytes))?;
    let prefix = template.subdir.as_ref().map(|s| format!("{}/", s));
    let mut files = Vec::new();

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        if file.is_dir() {
            continue;
        }

        let full_path = file.name().to_string();
        let Some((_, in_repo)) = full_path.split_once('/') else {
            continue;
        };

        let relative = match &prefix {
            Some(prefix) => match in_repo.strip_prefix(prefix.as_str()) {
                Some(rest) => rest,
                None => continue,
            },
            None => in_repo,
        };
        if relative.is_empty() {
            continue;
        }

        let path = safe_relative_path(relative)?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;

        files.push(TemplateFile {
            path,
            contents,
            mode: file.unix_mode(),
        });
    }

    if files.is_empty() {
        return Err(TemplateError::Empty(template.to_string()));
    }
    Ok(files)
}

fn safe_relative_path(path: &str) -> Result<PathBuf, TemplateError> {
    let candidate = Path::new(path);
    if candidate
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        Ok(candidate.to_path_buf())
    } else {
        Err(TemplateError::UnsafePath(path.to_string()))
    }
}

/// Read a template from `<root>/<repo>/<subdir>`
fn read_local(root: &Path, template: &TemplateRef) -> Result<Vec<TemplateFile>> {
    let mut dir = root.join(&template.repo);
    if let Some(subdir) = &template.subdir {
        dir = dir.join(subdir);
    }
    if !dir.is_dir() {
        anyhow::bail!("Template directory not found: {}", dir.display());
    }
    tracing::debug!(dir = %dir.display(), %template, "reading local template");

    let mut files = Vec::new();
    for entry in WalkDir::new(&dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(&dir)
            .with_context(|| format!("Unexpected path {}", entry.path().display()))?
            .to_path_buf();
        let contents = std::fs::read(entry.path())
            .with_context(|| format!("Failed to read {}", entry.path().display()))?;
        files.push(TemplateFile {
            path: relative,
            contents,
            mode: file_mode(entry.path()),
        });
    }

    if files.is_empty() {
        return Err(TemplateError::Empty(template.to_string()).into());
    }
    Ok(files)
}

#[cfg(unix)]
fn file_mode(path: &Path) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).ok().map(|m| m.permissions().mode())
}

#[cfg(not(unix))]
fn file_mode(_path: &Path) -> Option<u32> {
    None
}
