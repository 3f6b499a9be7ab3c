//! Where on disk a store lives

use std::fmt;
use std::path::PathBuf;

/// Reverse-domain identity of the program owning the store
///
/// ```
/// use kantin_store::AppName;
///
/// let owner = AppName::new("id.sch", "smktelkom", "kantin");
/// assert_eq!(owner.to_string(), "id.sch.smktelkom.kantin");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppName {
    pub qualifier: String,
    pub organization: String,
    pub application: String,
}

impl AppName {
    pub fn new(
        qualifier: impl Into<String>,
        organization: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        Self {
            qualifier: qualifier.into(),
            organization: organization.into(),
            application: application.into(),
        }
    }

    /// Platform-local configuration directory, if the platform has one.
    pub fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from(&self.qualifier, &self.organization, &self.application)
            .map(|dirs| dirs.config_local_dir().to_path_buf())
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.qualifier, self.organization, self.application)
    }
}
