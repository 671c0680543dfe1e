//! Navigation menu state.
//!
//! The menu is driven by a single [`NavState`] value updated through
//! [`NavState::reduce`]; callers own the state and pass it to whatever
//! renders the menu.

use serde::{Deserialize, Serialize};

/// Viewport class; the breakpoint between the two is 781px
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    #[default]
    Mobile,
    Desktop,
}

/// Narrowest viewport, in CSS pixels, laid out as desktop
pub const DESKTOP_MIN_WIDTH: u32 = 781;

impl Layout {
    pub fn for_width(width: u32) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            Layout::Desktop
        } else {
            Layout::Mobile
        }
    }
}

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavLink {
    Shop,
    Account,
    LatestProducts,
    BridalHenna,
    Articles,
    Videos,
    About,
    Contact,
}

impl NavLink {
    pub const ALL: [NavLink; 8] = [
        NavLink::Shop,
        NavLink::Account,
        NavLink::LatestProducts,
        NavLink::BridalHenna,
        NavLink::Articles,
        NavLink::Videos,
        NavLink::About,
        NavLink::Contact,
    ];

    pub fn href(self) -> &'static str {
        match self {
            NavLink::Shop => "/shop",
            NavLink::Account => "/account",
            NavLink::LatestProducts => "/latest-products",
            NavLink::BridalHenna => "/bridal-henna",
            NavLink::Articles => "/articles",
            NavLink::Videos => "/videos",
            NavLink::About => "/about",
            NavLink::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavLink::Shop => "Shop",
            NavLink::Account => "Account",
            NavLink::LatestProducts => "Latest Products",
            NavLink::BridalHenna => "Bridal Henna",
            NavLink::Articles => "Articles",
            NavLink::Videos => "Videos",
            NavLink::About => "About",
            NavLink::Contact => "Contact",
        }
    }
}

/// Everything that can happen to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavAction {
    MenuOn,
    MenuOff,
    ToggleMenu,
    /// The viewport crossed the breakpoint
    LayoutChanged(Layout),
    LinkActivated(NavLink),
    /// The backdrop behind the mobile menu was tapped
    BackdropClicked,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    pub menu_open: bool,
    pub layout: Layout,
}

impl NavState {
    /// Initial state for a viewport; the desktop menu is always shown
    pub fn for_layout(layout: Layout) -> Self {
        Self {
            menu_open: layout == Layout::Desktop,
            layout,
        }
    }

    /// Apply `action`, returning the next state
    #[must_use]
    pub fn reduce(self, action: NavAction) -> Self {
        match action {
            NavAction::MenuOn => Self {
                menu_open: true,
                ..self
            },
            NavAction::MenuOff => Self {
                menu_open: false,
                ..self
            },
            NavAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            NavAction::LayoutChanged(layout) => Self::for_layout(layout),
            // Links and backdrop only dismiss the menu on mobile
            NavAction::LinkActivated(_) | NavAction::BackdropClicked => match self.layout {
                Layout::Desktop => self,
                Layout::Mobile => self.reduce(NavAction::ToggleMenu),
            },
        }
    }

    /// The backdrop is only drawn behind an open mobile menu
    pub fn shows_backdrop(&self) -> bool {
        self.menu_open && self.layout == Layout::Mobile
    }
}
