use std::path::{Path, PathBuf};

/// Page created alongside every new project.
pub const DEFAULT_PAGE: &str = "index";

pub const MANIFEST_FILE: &str = "package.json";
pub const BUILD_CONFIG_FILE: &str = "rollup.config.js";
pub const STYLE_CONFIG_FILE: &str = "tailwind.config.js";
pub const BACKEND_DIR: &str = "app";
pub const BACKEND_ENTRY_FILE: &str = "__init__.py";
pub const GLOBAL_STYLESHEET: &str = "global.css";

/// Paths of a generated project, derived from an explicit root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn build_config(&self) -> PathBuf {
        self.root.join(BUILD_CONFIG_FILE)
    }

    pub fn style_config(&self) -> PathBuf {
        self.root.join(STYLE_CONFIG_FILE)
    }

    /// `app/`, the Flask package.
    pub fn backend_dir(&self) -> PathBuf {
        self.root.join(BACKEND_DIR)
    }

    pub fn backend_entry(&self) -> PathBuf {
        self.backend_dir().join(BACKEND_ENTRY_FILE)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.backend_dir().join("templates")
    }

    /// `app/static/svelte/`, where the build writes compiled bundles.
    pub fn static_frontend_dir(&self) -> PathBuf {
        self.backend_dir().join("static").join("svelte")
    }

    /// `app/svelte/`, one source directory per page.
    pub fn frontend_sources_dir(&self) -> PathBuf {
        self.backend_dir().join("svelte")
    }

    pub fn global_stylesheet(&self) -> PathBuf {
        self.static_frontend_dir().join(GLOBAL_STYLESHEET)
    }

    /// Directories every project starts with, parents first.
    pub fn skeleton_dirs(&self) -> [PathBuf; 5] {
        [
            self.root.clone(),
            self.backend_dir(),
            self.templates_dir(),
            self.static_frontend_dir(),
            self.frontend_sources_dir(),
        ]
    }

    pub fn page_html(&self, page: &str) -> PathBuf {
        self.templates_dir().join(format!("{}.html", page))
    }

    pub fn page_sources(&self, page: &str) -> PathBuf {
        self.frontend_sources_dir().join(page)
    }

    pub fn page_static_dir(&self, page: &str) -> PathBuf {
        self.static_frontend_dir().join(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_paths_live_under_backend() {
        let layout = ProjectLayout::new("/tmp/demo");
        assert_eq!(layout.page_html("about"), PathBuf::from("/tmp/demo/app/templates/about.html"));
        assert_eq!(layout.page_sources("about"), PathBuf::from("/tmp/demo/app/svelte/about"));
        assert_eq!(
            layout.page_static_dir("about"),
            PathBuf::from("/tmp/demo/app/static/svelte/about")
        );
    }

    #[test]
    fn top_level_files_sit_at_root() {
        let layout = ProjectLayout::new("/tmp/demo");
        assert_eq!(layout.manifest(), PathBuf::from("/tmp/demo/package.json"));
        assert_eq!(layout.build_config(), PathBuf::from("/tmp/demo/rollup.config.js"));
        assert_eq!(layout.backend_entry(), PathBuf::from("/tmp/demo/app/__init__.py"));
        assert_eq!(
            layout.global_stylesheet(),
            PathBuf::from("/tmp/demo/app/static/svelte/global.css")
        );
    }
}
