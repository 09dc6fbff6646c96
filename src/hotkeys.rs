//! Keyboard shortcuts: Space toggles the visible timer, R resets it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hotkey {
    ToggleRun,
    Reset,
}

/// A hotkey press tagged with a sequence number so a panel can tell a new
/// press from one it has already handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeySignal {
    pub seq: u32,
    pub hotkey: Hotkey,
}

/// Map a `keydown` event to a hotkey.
///
/// `code` and `key` are the event's `code`/`key` fields and `target_tag` the
/// tag name of the focused element. Typing into a text field never triggers a
/// shortcut.
pub fn hotkey_for(code: &str, key: &str, target_tag: Option<&str>) -> Option<Hotkey> {
    if let Some(tag) = target_tag {
        if tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea") {
            return None;
        }
    }
    if code == "Space" {
        Some(Hotkey::ToggleRun)
    } else if key.eq_ignore_ascii_case("r") {
        Some(Hotkey::Reset)
    } else {
        None
    }
}
