//! Server-rendered UI components.

pub mod sidebar;

pub use sidebar::{NavGroup, NavLink, SidebarTemplate, sidebar};
