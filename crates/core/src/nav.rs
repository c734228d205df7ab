//! In-app navigation catalog.
//!
//! Two ordered groups: the primary production tools and the secondary
//! settings/help links. Both are fixed for the lifetime of the process.

use core::fmt;

use serde::Serialize;

/// Symbolic icon identifier for a navigation item.
///
/// Rendered as an icon name; templates map it to the icon set in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    FileText,
    Camera,
    Image,
    Download,
    Settings,
    HelpCircle,
}

impl NavIcon {
    /// Icon name as used by the icon set (kebab-case).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileText => "file-text",
            Self::Camera => "camera",
            Self::Image => "image",
            Self::Download => "download",
            Self::Settings => "settings",
            Self::HelpCircle => "help-circle",
        }
    }
}

impl fmt::Display for NavIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Route the link targets.
    pub path: &'static str,
    /// Visible label.
    pub label: &'static str,
    /// Icon shown next to the label.
    pub icon: NavIcon,
}

impl NavItem {
    const fn new(path: &'static str, label: &'static str, icon: NavIcon) -> Self {
        Self { path, label, icon }
    }

    /// Whether this item is the current route (exact match, no prefixes).
    #[must_use]
    pub fn is_active(&self, current_path: Option<&str>) -> bool {
        current_path == Some(self.path)
    }
}

/// The landing route. Navigation is hidden here.
pub const ROOT_PATH: &str = "/";

/// Production tools, in display order.
pub const PRIMARY_NAV: &[NavItem] = &[
    NavItem::new("/story", "Story", NavIcon::FileText),
    NavItem::new("/shots", "Shot List", NavIcon::Camera),
    NavItem::new("/photoboard", "Photoboard", NavIcon::Image),
    NavItem::new("/export", "Export", NavIcon::Download),
];

/// Settings and help, in display order.
pub const SECONDARY_NAV: &[NavItem] = &[
    NavItem::new("/settings", "Settings", NavIcon::Settings),
    NavItem::new("/help", "Help", NavIcon::HelpCircle),
];

/// Iterate every navigation item, primary group first.
pub fn all_items() -> impl Iterator<Item = &'static NavItem> {
    PRIMARY_NAV.iter().chain(SECONDARY_NAV.iter())
}
