// Key bindings and remapping

use super::action::{default_bindings, global_bindings, Action, InputSource};
use std::collections::HashMap;

/// Which key or button triggers which action.
///
/// Each source maps to at most one action; an action may have several sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// No bindings at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Player bindings plus the global shell bindings
    pub fn with_defaults() -> Self {
        default_bindings().into_iter().chain(global_bindings()).collect()
    }

    /// Bind a source, returning the action it triggered before
    pub fn bind(&mut self, source: InputSource, action: Action) -> Option<Action> {
        self.bindings.insert(source, action)
    }

    /// Remove a source's binding
    pub fn unbind(&mut self, source: InputSource) -> Option<Action> {
        self.bindings.remove(&source)
    }

    /// Make `source` the only trigger for `action`
    pub fn rebind(&mut self, action: Action, source: InputSource) {
        self.bindings.retain(|_, bound| *bound != action);
        self.bindings.insert(source, action);
    }

    pub fn action_for(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Every source that triggers `action`
    pub fn sources_for(&self, action: Action) -> impl Iterator<Item = InputSource> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, bound)| **bound == action)
            .map(|(source, _)| *source)
    }

    pub fn is_bound(&self, action: Action) -> bool {
        self.bindings.values().any(|bound| *bound == action)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Self::with_defaults();
        log::info!("Input bindings reset to defaults");
    }
}

impl FromIterator<(InputSource, Action)> for InputConfig {
    fn from_iter<I: IntoIterator<Item = (InputSource, Action)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bind_returns_previous() {
        let mut config = InputConfig::new();
        let key = InputSource::key(KeyCode::KeyJ);

        assert_eq!(config.bind(key, Action::Attack), None);
        assert_eq!(config.bind(key, Action::Dash), Some(Action::Attack));
        assert_eq!(config.action_for(key), Some(Action::Dash));
        assert!(!config.is_bound(Action::Attack));
    }

    #[test]
    fn test_unbind() {
        let mut config = InputConfig::with_defaults();
        let key = InputSource::key(KeyCode::KeyA);
        assert_eq!(config.unbind(key), Some(Action::MoveLeft));
        assert_eq!(config.action_for(key), None);
        // The arrow key still works
        assert!(config.is_bound(Action::MoveLeft));
    }

    #[test]
    fn test_rebind_replaces_all_sources() {
        let mut config = InputConfig::with_defaults();
        assert!(config.sources_for(Action::Attack).count() >= 2);

        let middle = InputSource::mouse(MouseButton::Middle);
        config.rebind(Action::Attack, middle);

        let sources: Vec<_> = config.sources_for(Action::Attack).collect();
        assert_eq!(sources, vec![middle]);
    }

    #[test]
    fn test_defaults_include_global_bindings() {
        let config = InputConfig::with_defaults();
        assert_eq!(
            config.action_for(InputSource::key(KeyCode::Escape)),
            Some(Action::Menu)
        );
        assert_eq!(
            config.action_for(InputSource::key(KeyCode::KeyR)),
            Some(Action::Restart)
        );
        assert_eq!(
            config.action_for(InputSource::key(KeyCode::Space)),
            Some(Action::Dash)
        );
        assert_eq!(config.sources_for(Action::MoveLeft).count(), 2);
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::with_defaults();
        config.clear();
        assert!(config.is_empty());

        config.reset_to_defaults();
        assert_eq!(config, InputConfig::with_defaults());
    }
}
