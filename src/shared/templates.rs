//! HTML template engine backed by minijinja.
//!
//! Every `.html` file under the template directory is registered under its
//! path relative to that directory (e.g. `index.html`). In reload mode the
//! directory is read again on each render so edits show up without a restart.
//! Templates compiled into the binary fill in any name the directory lacks.

use minijinja::Environment;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::shared::constants::INDEX_TEMPLATE;

/// Built-in copies of the shipped templates
const BUILTIN_TEMPLATES: &[(&str, &str)] =
    &[(INDEX_TEMPLATE, include_str!("../../templates/index.html"))];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

pub struct TemplateEngine {
    dir: PathBuf,
    reload: bool,
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new(dir: impl Into<PathBuf>, reload: bool) -> Self {
        let dir = dir.into();
        let env = load_environment(&dir);
        tracing::info!(
            "Loaded {} template(s) from {} (reload: {})",
            env.templates().count(),
            dir.display(),
            reload
        );

        Self { dir, reload, env }
    }

    /// Render a template with the given context.
    pub fn render<S: Serialize>(&self, template_name: &str, ctx: S) -> Result<String, TemplateError> {
        if self.reload {
            let env = load_environment(&self.dir);
            return render_with(&env, template_name, ctx);
        }
        render_with(&self.env, template_name, ctx)
    }

    /// Check if a template exists
    #[cfg(test)]
    pub fn template_exists(&self, template_name: &str) -> bool {
        self.env.get_template(template_name).is_ok()
    }
}

fn render_with<S: Serialize>(
    env: &Environment<'static>,
    template_name: &str,
    ctx: S,
) -> Result<String, TemplateError> {
    let template = env
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

fn load_environment(dir: &Path) -> Environment<'static> {
    let mut env = Environment::new();

    if dir.exists() {
        load_templates_recursive(&mut env, dir, dir);
    } else {
        tracing::warn!("Template directory {} does not exist", dir.display());
    }

    for &(name, source) in BUILTIN_TEMPLATES {
        if env.get_template(name).is_ok() {
            continue;
        }
        match env.add_template(name, source) {
            Ok(()) => tracing::debug!("Using built-in template: {}", name),
            Err(e) => tracing::warn!("Failed to load built-in template {}: {}", name, e),
        }
    }

    env
}

/// Recursively load all .html templates from a directory
fn load_templates_recursive(env: &mut Environment<'static>, base_path: &Path, current_path: &Path) {
    let Ok(entries) = std::fs::read_dir(current_path) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            load_templates_recursive(env, base_path, &path);
        } else if path.extension().is_some_and(|ext| ext == "html") {
            let Ok(relative) = path.strip_prefix(base_path) else {
                continue;
            };
            // Template names always use forward slashes
            let template_name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    if let Err(e) = env.add_template_owned(template_name.clone(), content) {
                        tracing::warn!("Failed to load template {}: {}", template_name, e);
                    } else {
                        tracing::debug!("Loaded template: {}", template_name);
                    }
                }
                Err(e) => tracing::warn!("Failed to read template {}: {}", path.display(), e),
            }
        }
    }
}
