//! Navigation targets

use std::fmt;

/// Every screen reachable from the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Dashboard,
    Products,
    Canteens,
    Admins,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Dashboard,
        Screen::Products,
        Screen::Canteens,
        Screen::Admins,
        Screen::Settings,
    ];

    /// Stable identifier, used for configuration.
    pub fn tag(self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::Products => "products",
            Screen::Canteens => "kantins",
            Screen::Admins => "admins",
            Screen::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Products => "Produk",
            Screen::Canteens => "Kantin",
            Screen::Admins => "Admin",
            Screen::Settings => "Pengaturan",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Screen> {
        Screen::ALL.into_iter().find(|screen| screen.tag() == tag)
    }
}

/// Where the main area points: a known screen, or a tag nothing handles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Screen(Screen),
    Unmatched(String),
}

impl Default for Route {
    fn default() -> Self {
        Route::Screen(Screen::default())
    }
}

impl Route {
    pub fn parse(tag: &str) -> Route {
        let tag = tag.trim();
        match Screen::from_tag(tag) {
            Some(screen) => Route::Screen(screen),
            None => Route::Unmatched(tag.to_string()),
        }
    }

    pub fn screen(&self) -> Option<Screen> {
        match self {
            Route::Screen(screen) => Some(*screen),
            Route::Unmatched(_) => None,
        }
    }
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        Route::Screen(screen)
    }
}

/// Sections of the settings screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    General,
    System,
    Notifications,
    Security,
    Backup,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [
        SettingsTab::General,
        SettingsTab::System,
        SettingsTab::Notifications,
        SettingsTab::Security,
        SettingsTab::Backup,
    ];
}

impl fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SettingsTab::General => "Umum",
            SettingsTab::System => "Sistem",
            SettingsTab::Notifications => "Notifikasi",
            SettingsTab::Security => "Keamanan",
            SettingsTab::Backup => "Backup",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(Route::parse(screen.tag()), Route::Screen(screen));
        }
    }

    #[test]
    fn unknown_tag_falls_back() {
        assert_eq!(
            Route::parse("reports"),
            Route::Unmatched("reports".to_string())
        );
        assert_eq!(Route::parse("reports").screen(), None);
    }

    #[test]
    fn default_route_is_dashboard() {
        assert_eq!(Route::default().screen(), Some(Screen::Dashboard));
    }
}
