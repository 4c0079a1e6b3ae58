//! Registry of available renderers.

use std::sync::{OnceLock, RwLock};

use crate::traits::Renderer;

/// Global registry of renderers.
static RENDERERS: RwLock<Vec<&'static dyn Renderer>> = RwLock::new(Vec::new());
static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Register a custom renderer.
///
/// Call this before any generation operations to add custom renderers.
/// Built-in renderers are registered automatically on first use.
pub fn register_renderer(renderer: &'static dyn Renderer) {
    RENDERERS.write().unwrap().push(renderer);
}

/// Initialize built-in renderers (called automatically on first use).
fn init_builtin() {
    INITIALIZED.get_or_init(|| {
        let mut renderers = RENDERERS.write().unwrap();

        #[cfg(feature = "lang-python")]
        {
            renderers.push(&crate::output::python::PYTHON_RENDERER);
        }

        #[cfg(feature = "lang-cplusplus")]
        {
            renderers.push(&crate::output::cplusplus::CPLUSPLUS_RENDERER);
        }

        #[cfg(feature = "lang-csharp")]
        {
            renderers.push(&crate::output::csharp::CSHARP_RENDERER);
        }

        #[cfg(feature = "lang-javascript")]
        {
            renderers.push(&crate::output::javascript::JAVASCRIPT_RENDERER);
        }
    });
}

/// Get a renderer by name.
pub fn get_renderer(name: &str) -> Option<&'static dyn Renderer> {
    init_builtin();
    RENDERERS
        .read()
        .unwrap()
        .iter()
        .find(|r| r.name() == name)
        .copied()
}

/// List all registered renderers.
pub fn renderers() -> Vec<&'static dyn Renderer> {
    init_builtin();
    RENDERERS.read().unwrap().clone()
}

/// List all registered renderer names.
pub fn renderer_names() -> Vec<&'static str> {
    init_builtin();
    RENDERERS.read().unwrap().iter().map(|r| r.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_renderers_are_registered() {
        let names = renderer_names();
        #[cfg(feature = "lang-python")]
        assert!(names.contains(&"python"));
        #[cfg(feature = "lang-cplusplus")]
        assert!(names.contains(&"cplusplus"));
        #[cfg(feature = "lang-csharp")]
        assert!(names.contains(&"csharp"));
        #[cfg(feature = "lang-javascript")]
        assert!(names.contains(&"javascript"));
    }

    #[test]
    fn lookup_by_name() {
        #[cfg(feature = "lang-python")]
        {
            let renderer = get_renderer("python").unwrap();
            assert_eq!(renderer.extension(), "py");
        }
        assert!(get_renderer("cobol").is_none());
    }
}
