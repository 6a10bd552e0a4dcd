//! Hand-off of rendered scripts to the host page.

use serde::Serialize;

/// Key the snippet is registered under.
pub const SCRIPT_ID: &str = "GoogleAnalytics";

/// Where in the page a registered script should be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptPosition {
    /// Inside `<head>`; where the analytics snippet goes.
    Head,
    /// Just before `</body>`, for registrars that also place other scripts.
    BodyEnd,
}

/// Host-side collector of page scripts.
///
/// Implement this for whatever assembles the page (a template context,
/// a response extension) to let the component place its own snippet.
pub trait ScriptRegistrar {
    /// Register `script` under `id`. Registering the same `id` again
    /// replaces the earlier script.
    fn register_script(&mut self, id: &str, script: String, position: ScriptPosition);
}

/// A registered script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredScript {
    pub id: String,
    pub script: String,
    pub position: ScriptPosition,
}

/// In-memory [`ScriptRegistrar`] that keeps scripts in registration order.
#[derive(Debug, Clone, Default)]
pub struct ScriptBuffer {
    scripts: Vec<RegisteredScript>,
}

impl ScriptBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a script by id.
    pub fn get(&self, id: &str) -> Option<&RegisteredScript> {
        self.scripts.iter().find(|s| s.id == id)
    }

    /// Scripts registered for `position`, in registration order.
    pub fn at(&self, position: ScriptPosition) -> impl Iterator<Item = &RegisteredScript> {
        self.scripts.iter().filter(move |s| s.position == position)
    }

    /// Get the number of registered scripts.
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Check if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

impl ScriptRegistrar for ScriptBuffer {
    fn register_script(&mut self, id: &str, script: String, position: ScriptPosition) {
        let entry = RegisteredScript {
            id: id.to_string(),
            script,
            position,
        };
        match self.scripts.iter_mut().find(|s| s.id == id) {
            Some(existing) => *existing = entry,
            None => self.scripts.push(entry),
        }
    }
}
