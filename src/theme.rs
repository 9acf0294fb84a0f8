//! Theme module for glare-survey
//!
//! Centralized palette and style helpers. Kept calm and high-contrast so the
//! colors around the case images do not bias the comparison.

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::border;

/// Rounded border set shared by all panels
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Backgrounds
// ============================================================================

/// Screen background - near black, neutral (#101214)
pub const BG_PRIMARY: Color = Color::Rgb(16, 18, 20);

/// Panel background (#1a1d21)
pub const BG_SECONDARY: Color = Color::Rgb(26, 29, 33);

/// Background of the focused form row (#24303a)
pub const BG_FOCUS: Color = Color::Rgb(36, 48, 58);

/// Subtle border color (#2c3238)
pub const BORDER_SUBTLE: Color = Color::Rgb(44, 50, 56);

// ============================================================================
// Accents and status
// ============================================================================

/// Primary accent - clinical teal (#2dd4bf)
pub const ACCENT: Color = Color::Rgb(45, 212, 191);

/// Dimmed accent for secondary elements (#178f80)
pub const ACCENT_DIM: Color = Color::Rgb(23, 143, 128);

/// Green success color (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Amber warning color (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text
// ============================================================================

/// Primary text color (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Style for a form row, highlighted when focused
pub fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(TEXT_PRIMARY).bg(BG_FOCUS)
    } else {
        Style::default().fg(TEXT_SECONDARY)
    }
}

/// Style for the selected option inside a choice group
pub fn selected_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}
