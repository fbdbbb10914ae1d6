//! Host project collaborators.
//!
//! The settings store reads contextual defaults from the project it builds
//! (suggested output path, app bundle flag, keystore name) and file naming
//! needs the project's identity (name, package, version, bundle code).
//! Both are supplied by the caller rather than read from global state.

mod context;

pub use context::BuildContext;

/// Read-only source of contextual defaults, consulted only while loading.
///
/// Values are read on every load and never cached, so a change in the host
/// project shows up as a changed default on the next load.
pub trait HostDefaults {
    /// Suggested output location for builds.
    fn build_location(&self) -> String;

    /// Whether the project builds an app bundle (.aab) by default.
    fn build_app_bundle(&self) -> bool;

    /// Whether the project splits the application binary by default.
    fn split_application_binary(&self) -> bool;

    /// Default keystore file name.
    fn keystore_name(&self) -> String;
}

impl<T: HostDefaults + ?Sized> HostDefaults for &T {
    fn build_location(&self) -> String {
        (**self).build_location()
    }

    fn build_app_bundle(&self) -> bool {
        (**self).build_app_bundle()
    }

    fn split_application_binary(&self) -> bool {
        (**self).split_application_binary()
    }

    fn keystore_name(&self) -> String {
        (**self).keystore_name()
    }
}

impl<T: HostDefaults + ?Sized> HostDefaults for Box<T> {
    fn build_location(&self) -> String {
        (**self).build_location()
    }

    fn build_app_bundle(&self) -> bool {
        (**self).build_app_bundle()
    }

    fn split_application_binary(&self) -> bool {
        (**self).split_application_binary()
    }

    fn keystore_name(&self) -> String {
        (**self).keystore_name()
    }
}

/// Fixed host defaults.
///
/// `Default` gives empty strings and `false` flags, which is what the store
/// falls back to when no project is available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHostDefaults {
    /// Suggested output location.
    pub build_location: String,
    /// App bundle flag.
    pub build_app_bundle: bool,
    /// Split binary flag.
    pub split_application_binary: bool,
    /// Default keystore name.
    pub keystore_name: String,
}

impl HostDefaults for StaticHostDefaults {
    fn build_location(&self) -> String {
        self.build_location.clone()
    }

    fn build_app_bundle(&self) -> bool {
        self.build_app_bundle
    }

    fn split_application_binary(&self) -> bool {
        self.split_application_binary
    }

    fn keystore_name(&self) -> String {
        self.keystore_name.clone()
    }
}
