//! Keyboard focus inside a mounted dialog.

use tracing::trace;

/// What moved the focus; decides whether the focus ring is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOrigin {
    Keyboard,
    Pointer,
    Programmatic,
}

/// One-shot listener that strips the forced focus ring when its element
/// loses focus, then detaches.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BlurListener {
    target: String,
}

#[derive(Debug, Default)]
pub struct FocusState {
    active: Option<String>,
    visible: bool,
    forced: Option<String>,
    blur_listener: Option<BlurListener>,
}

impl FocusState {
    /// Key of the focused element.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active() == Some(key)
    }

    /// Whether the focused element shows a focus ring without help.
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether `key` carries the forced focus-ring class.
    pub fn is_forced(&self, key: &str) -> bool {
        self.forced.as_deref() == Some(key)
    }

    pub fn focus(&mut self, key: &str, origin: FocusOrigin) {
        self.visible = origin == FocusOrigin::Keyboard;
        if self.is_active(key) {
            return;
        }
        if let Some(previous) = self.active.take() {
            self.blur(&previous);
        }
        trace!(key, ?origin, "Focus moved");
        self.active = Some(key.to_string());
    }

    /// Programmatic initial focus. With `force_ring`, the element keeps a
    /// visible focus ring until it first loses focus.
    pub fn place_initial(&mut self, key: &str, force_ring: bool) {
        self.focus(key, FocusOrigin::Programmatic);
        if force_ring {
            self.forced = Some(key.to_string());
            self.blur_listener = Some(BlurListener {
                target: key.to_string(),
            });
        }
    }

    /// Move focus one step through `targets`, wrapping at both ends.
    ///
    /// With nothing focused (or focus outside `targets`) forward focuses the
    /// first target and backward the last. Returns false when there is
    /// nothing to focus.
    pub fn cycle(&mut self, targets: &[String], backward: bool) -> bool {
        let (Some(first), Some(last)) = (targets.first(), targets.last()) else {
            return false;
        };
        let current = self
            .active
            .as_ref()
            .and_then(|active| targets.iter().position(|key| key == active));

        let next = match (current, backward) {
            (None, false) => first,
            (None, true) => last,
            (Some(0), true) => last,
            (Some(index), true) => &targets[index - 1],
            (Some(index), false) if index + 1 == targets.len() => first,
            (Some(index), false) => &targets[index + 1],
        };
        let next = next.clone();
        self.focus(&next, FocusOrigin::Keyboard);
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn blur(&mut self, key: &str) {
        if self
            .blur_listener
            .as_ref()
            .is_some_and(|listener| listener.target == key)
        {
            self.blur_listener = None;
            if self.is_forced(key) {
                self.forced = None;
            }
            trace!(key, "Blur listener removed forced focus ring");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_cycle_wraps_forward_and_backward() {
        let targets = keys(&["cancel", "confirm"]);
        let mut focus = FocusState::default();
        focus.place_initial("confirm", false);

        assert!(focus.cycle(&targets, false));
        assert_eq!(focus.active(), Some("cancel"));

        assert!(focus.cycle(&targets, true));
        assert_eq!(focus.active(), Some("confirm"));
    }

    #[test]
    fn test_cycle_moves_to_neighbours() {
        let targets = keys(&["close", "cancel", "confirm"]);
        let mut focus = FocusState::default();
        focus.focus("close", FocusOrigin::Pointer);

        focus.cycle(&targets, false);
        assert_eq!(focus.active(), Some("cancel"));
        focus.cycle(&targets, false);
        assert_eq!(focus.active(), Some("confirm"));
        focus.cycle(&targets, true);
        assert_eq!(focus.active(), Some("cancel"));
    }

    #[test]
    fn test_cycle_without_focus_enters_at_an_end() {
        let targets = keys(&["a", "b", "c"]);
        let mut focus = FocusState::default();
        focus.cycle(&targets, false);
        assert_eq!(focus.active(), Some("a"));

        let mut focus = FocusState::default();
        focus.cycle(&targets, true);
        assert_eq!(focus.active(), Some("c"));
    }

    #[test]
    fn test_cycle_with_no_targets_is_a_noop() {
        let mut focus = FocusState::default();
        focus.place_initial("gone", false);
        assert!(!focus.cycle(&[], false));
        assert!(!focus.cycle(&[], true));
        assert_eq!(focus.active(), Some("gone"));
    }

    #[test]
    fn test_forced_ring_removed_on_first_blur_only() {
        let mut focus = FocusState::default();
        focus.place_initial("confirm", true);
        assert!(focus.is_forced("confirm"));
        assert!(!focus.is_visible());

        // Re-focusing the same element is not a blur
        focus.focus("confirm", FocusOrigin::Pointer);
        assert!(focus.is_forced("confirm"));

        focus.focus("cancel", FocusOrigin::Keyboard);
        assert!(!focus.is_forced("confirm"));
        assert!(focus.is_visible());

        // The listener detached itself; coming back does not re-add the ring
        focus.focus("confirm", FocusOrigin::Keyboard);
        focus.focus("cancel", FocusOrigin::Keyboard);
        assert!(!focus.is_forced("confirm"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut focus = FocusState::default();
        focus.place_initial("confirm", true);
        focus.clear();
        assert_eq!(focus.active(), None);
        assert!(!focus.is_forced("confirm"));
    }
}
