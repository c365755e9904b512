//! Project creation: materialize the tree, then initialize the repository

pub mod materializer;
pub mod repository;

pub use materializer::{materialize, MaterializedProject, ProjectPlan};
pub use repository::{init_repository, GITIGNORE};

use crate::runtime::exec::CommandRunner;
use crate::templates::TemplateFetcher;
use anyhow::Result;
use std::path::Path;

/// Materialize `plan` and initialize its repository
pub async fn create_project(
    runner: &dyn CommandRunner,
    fetcher: &TemplateFetcher,
    plan: &ProjectPlan,
) -> Result<MaterializedProject> {
    let project = materialize(runner, fetcher, plan).await?;
    init_repository(runner, &project.root, &plan.name).await?;
    Ok(project)
}

/// Commands to run after creation, relative to `cwd` when possible
pub fn next_steps(plan: &ProjectPlan, project: &MaterializedProject, cwd: &Path) -> Vec<String> {
    let shown = |path: &Path| {
        path.strip_prefix(cwd)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| path.display().to_string())
    };

    let mut steps = vec![
        format!("cd {}", shown(&project.package_dir)),
        "sui move build".to_string(),
    ];

    if let (Some(app), Some(app_dir)) = (&plan.layout().app, &project.app_dir) {
        steps.push(format!("cd {}", shown(app_dir)));
        steps.push(app.start_command.to_string());
    }

    steps.push(format!(
        "Browse the sample code in {}",
        shown(&project.sample_dir)
    ));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{ProjectName, ProjectType};
    use crate::runtime::exec::fake::FakeRunner;
    use crate::templates::TemplateSource;
    use std::collections::BTreeSet;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Local template tree mirroring the remote repositories
    fn template_fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let course = dir.path().join("sui-move-intro-course").join("unit-two");
        std::fs::create_dir_all(course.join("sources")).unwrap();
        std::fs::write(course.join("Move.toml"), "[package]\nname = \"unit_two\"\n").unwrap();
        std::fs::write(course.join("sources").join("transcript.move"), "module 0x0::t {}").unwrap();

        let enoki = dir.path().join("enoki-example-app");
        std::fs::create_dir_all(enoki.join("src")).unwrap();
        std::fs::write(enoki.join("package.json"), "{}").unwrap();
        std::fs::write(enoki.join("src").join("App.tsx"), "export {}").unwrap();
        dir
    }

    fn fetcher(templates: &TempDir) -> TemplateFetcher {
        TemplateFetcher::new(TemplateSource::Local(templates.path().to_path_buf()), "test")
    }

    fn generator_runner() -> FakeRunner {
        FakeRunner::new().creates_dir("sui").creates_dir("npx")
    }

    fn child_dirs(path: &Path) -> BTreeSet<String> {
        std::fs::read_dir(path)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect()
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn assert_boilerplate(root: &Path, name: &str) {
        assert_eq!(
            std::fs::read_to_string(root.join("README.md")).unwrap(),
            format!("# {}\n\nGenerated by create-sui-app.", name)
        );
        assert_eq!(
            std::fs::read_to_string(root.join(".gitignore")).unwrap(),
            "node_modules\nbuild\n"
        );
    }

    #[tokio::test]
    async fn test_smart_contract_tree() {
        let templates = template_fixture();
        let work = tempfile::tempdir().unwrap();
        let runner = generator_runner();
        let plan = ProjectPlan::new(
            ProjectName::new("counter").unwrap(),
            ProjectType::SmartContract,
            work.path(),
        );

        let project = create_project(&runner, &fetcher(&templates), &plan).await.unwrap();

        let root = work.path().join("counter");
        assert_eq!(project.root, root);
        assert_eq!(
            child_dirs(&root),
            set(&["counter", "examples"])
        );
        assert!(root.join("examples").join("Move.toml").exists());
        assert!(root.join("examples").join("sources").join("transcript.move").exists());
        assert_eq!(project.package_dir, root.join("counter"));
        assert!(project.app_dir.is_none());
        assert_boilerplate(&root, "counter");

        assert_eq!(runner.rendered(), vec!["sui move new counter", "git init"]);
        let calls = runner.calls();
        assert_eq!(calls[0].cwd.as_deref(), Some(root.as_path()));
        assert_eq!(calls[1].cwd.as_deref(), Some(root.as_path()));
    }

    #[tokio::test]
    async fn test_fullstack_web_tree() {
        let templates = template_fixture();
        let work = tempfile::tempdir().unwrap();
        let runner = generator_runner();
        let plan = ProjectPlan::new(
            ProjectName::new("shop").unwrap(),
            ProjectType::FullstackWeb,
            work.path(),
        );

        let project = create_project(&runner, &fetcher(&templates), &plan).await.unwrap();

        let root = work.path().join("shop");
        assert_eq!(
            child_dirs(&root),
            set(&["frontend_sample", "shop_frontend", "shop_smart_contracts"])
        );
        assert!(root.join("shop_smart_contracts").join("shop").is_dir());
        assert!(root.join("frontend_sample").join("src").join("App.tsx").exists());
        assert_eq!(project.app_dir, Some(root.join("shop_frontend")));
        assert_boilerplate(&root, "shop");

        assert_eq!(
            runner.rendered(),
            vec![
                "git init",
                "sui move new shop",
                "npx create-react-app shop_frontend",
                "git init",
            ]
        );
        let calls = runner.calls();
        assert_eq!(
            calls[1].cwd,
            Some(root.join("shop_smart_contracts"))
        );
        assert_eq!(calls[2].cwd.as_deref(), Some(root.as_path()));
    }

    #[tokio::test]
    async fn test_fullstack_mobile_tree() {
        let templates = template_fixture();
        let work = tempfile::tempdir().unwrap();
        let runner = generator_runner();
        let plan = ProjectPlan::new(
            ProjectName::new("wallet").unwrap(),
            ProjectType::FullstackMobile,
            work.path(),
        );

        create_project(&runner, &fetcher(&templates), &plan).await.unwrap();

        let root = work.path().join("wallet");
        assert_eq!(
            child_dirs(&root),
            set(&["mobile_sample", "wallet_mobile", "wallet_smart_contracts"])
        );
        assert!(!root.join("wallet_frontend").exists());
        assert!(runner
            .rendered()
            .contains(&"npx react-native init wallet_mobile".to_string()));
        assert_boilerplate(&root, "wallet");
    }

    #[tokio::test]
    async fn test_generator_failure_leaves_partial_tree() {
        let templates = template_fixture();
        let work = tempfile::tempdir().unwrap();
        let runner = generator_runner().failing("npx create-react-app");
        let plan = ProjectPlan::new(
            ProjectName::new("broken").unwrap(),
            ProjectType::FullstackWeb,
            work.path(),
        );

        let err = create_project(&runner, &fetcher(&templates), &plan)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to generate broken_frontend"));
        let root = work.path().join("broken");
        assert!(root.join("broken_smart_contracts").is_dir());
        assert!(!root.join("frontend_sample").exists());
        assert!(!root.join("README.md").exists());
    }

    #[tokio::test]
    async fn test_existing_root_is_fatal_before_any_command() {
        let templates = template_fixture();
        let work = tempfile::tempdir().unwrap();
        std::fs::create_dir(work.path().join("taken")).unwrap();
        let runner = generator_runner();
        let plan = ProjectPlan::new(
            ProjectName::new("taken").unwrap(),
            ProjectType::SmartContract,
            work.path(),
        );

        let err = create_project(&runner, &fetcher(&templates), &plan)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Directory already exists"));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_next_steps_relative_to_cwd() {
        let plan = ProjectPlan::new(
            ProjectName::new("shop").unwrap(),
            ProjectType::FullstackWeb,
            "/work",
        );
        let root = PathBuf::from("/work/shop");
        let project = MaterializedProject {
            contracts_dir: root.join("shop_smart_contracts"),
            package_dir: root.join("shop_smart_contracts").join("shop"),
            app_dir: Some(root.join("shop_frontend")),
            sample_dir: root.join("frontend_sample"),
            sample_files: Vec::new(),
            root,
        };

        let steps = next_steps(&plan, &project, Path::new("/work"));
        let sep = std::path::MAIN_SEPARATOR;
        assert_eq!(
            steps,
            vec![
                format!("cd shop{sep}shop_smart_contracts{sep}shop"),
                "sui move build".to_string(),
                format!("cd shop{sep}shop_frontend"),
                "npm start".to_string(),
                format!("Browse the sample code in shop{sep}frontend_sample"),
            ]
        );
    }
}
