//! Navigation sidebar.
//!
//! A pure function of the current route: hidden on the landing page,
//! otherwise both link groups with the exactly-matching item marked active.

use askama::Template;
use askama_web::WebTemplate;
use framecraft_core::{NavItem, PRIMARY_NAV, ROOT_PATH, SECONDARY_NAV};

/// A rendered navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

impl NavLink {
    fn from_item(item: &NavItem, current_path: Option<&str>) -> Self {
        Self {
            path: item.path,
            label: item.label,
            icon: item.icon.as_str(),
            active: item.is_active(current_path),
        }
    }
}

/// One group of links (primary tools, secondary settings/help).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub name: &'static str,
    pub links: Vec<NavLink>,
}

impl NavGroup {
    fn build(name: &'static str, items: &[NavItem], current_path: Option<&str>) -> Self {
        Self {
            name,
            links: items
                .iter()
                .map(|item| NavLink::from_item(item, current_path))
                .collect(),
        }
    }
}

/// Sidebar panel template.
#[derive(Debug, Template, WebTemplate)]
#[template(path = "components/sidebar.html")]
pub struct SidebarTemplate {
    pub groups: Vec<NavGroup>,
}

impl SidebarTemplate {
    /// All links across groups, in display order.
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        self.groups.iter().flat_map(|group| group.links.iter())
    }

    /// The active link, if any.
    #[must_use]
    pub fn active(&self) -> Option<&NavLink> {
        self.links().find(|link| link.active)
    }
}

/// Build the sidebar for `current_path`.
///
/// Returns `None` on the landing page. `None` for `current_path` means no
/// routing context is available; the panel renders with nothing active.
#[must_use]
pub fn sidebar(current_path: Option<&str>) -> Option<SidebarTemplate> {
    if current_path == Some(ROOT_PATH) {
        return None;
    }

    Some(SidebarTemplate {
        groups: vec![
            NavGroup::build("primary", PRIMARY_NAV, current_path),
            NavGroup::build("secondary", SECONDARY_NAV, current_path),
        ],
    })
}
