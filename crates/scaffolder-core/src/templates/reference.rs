//! degit-style template references: `[github:]owner/repo[/sub/dir][#ref]`

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid template reference '{0}': expected [github:]owner/repo[/subdir][#ref]")]
    InvalidReference(String),

    #[error("Template archive contains an unsafe path: {0}")]
    UnsafePath(String),

    #[error("No files found in template '{0}'")]
    Empty(String),

    #[error("Failed to read template archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A subdirectory of a GitHub repository at a git ref
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub owner: String,
    pub repo: String,
    pub subdir: Option<String>,
    /// Branch, tag or commit; `HEAD` means the default branch
    pub git_ref: String,
}

impl TemplateRef {
    pub fn parse(input: &str) -> Result<Self, TemplateError> {
        let invalid = || TemplateError::InvalidReference(input.to_string());

        let body = input.strip_prefix("github:").unwrap_or(input);
        if body.contains(':') {
            return Err(invalid());
        }

        let (path, git_ref) = match body.split_once('#') {
            Some((path, git_ref)) if !git_ref.is_empty() => (path, git_ref),
            Some(_) => return Err(invalid()),
            None => (body, "HEAD"),
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() < 2 || segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(invalid());
        }

        let subdir = if segments.len() > 2 {
            Some(segments[2..].join("/"))
        } else {
            None
        };

        Ok(Self {
            owner: segments[0].to_string(),
            repo: segments[1].to_string(),
            subdir,
            git_ref: git_ref.to_string(),
        })
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)?;
        if let Some(subdir) = &self.subdir {
            write!(f, "/{}", subdir)?;
        }
        if self.git_ref != "HEAD" {
            write!(f, "#{}", self.git_ref)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_prefix_with_subdir() {
        let t = TemplateRef::parse("github:sui-foundation/sui-move-intro-course/unit-two").unwrap();
        assert_eq!(t.owner, "sui-foundation");
        assert_eq!(t.repo, "sui-move-intro-course");
        assert_eq!(t.subdir.as_deref(), Some("unit-two"));
        assert_eq!(t.git_ref, "HEAD");
    }

    #[test]
    fn test_parse_bare_repo() {
        let t = TemplateRef::parse("dantheman8300/enoki-example-app").unwrap();
        assert_eq!(t.owner, "dantheman8300");
        assert_eq!(t.repo, "enoki-example-app");
        assert_eq!(t.subdir, None);
        assert_eq!(t.to_string(), "dantheman8300/enoki-example-app");
    }

    #[test]
    fn test_parse_nested_subdir_and_ref() {
        let t = TemplateRef::parse("owner/repo/a/b/#v1.2").unwrap();
        assert_eq!(t.subdir.as_deref(), Some("a/b"));
        assert_eq!(t.git_ref, "v1.2");
        assert_eq!(t.to_string(), "owner/repo/a/b#v1.2");
    }

    #[test]
    fn test_parse_rejects_bad_references() {
        for input in ["", "owner", "gitlab:owner/repo", "owner/repo#", "owner/../repo"] {
            assert!(
                matches!(TemplateRef::parse(input), Err(TemplateError::InvalidReference(_))),
                "accepted {:?}",
                input
            );
        }
    }
}
