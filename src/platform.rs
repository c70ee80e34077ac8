//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Save shortcut display for help text
/// Ctrl+S works on all platforms
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Clear shortcut display
/// - macOS: "Cmd+K"
/// - Linux/Windows: "Ctrl+K"
#[cfg(target_os = "macos")]
pub const CLEAR_SHORTCUT: &str = "Cmd+K";

#[cfg(not(target_os = "macos"))]
pub const CLEAR_SHORTCUT: &str = "Ctrl+K";
