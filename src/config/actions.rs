/// Keys a mounted dialog listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// Always closes the dialog.
    Close,
    /// Closes a dialog without footer, otherwise activates the focused element.
    Submit,
    /// Activates the focused element.
    Activate,
    FocusNext,
    FocusPrev,
}

/// Keys handled by the demo page while no dialog is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Quit,
    Up,
    Down,
    PageUp,
    PageDown,
    Next,
    Prev,
    Press,
    OpenDefault,
    OpenVariant,
    OpenCustom,
}
