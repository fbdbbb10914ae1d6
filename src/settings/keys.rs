//! Preference key names.
//!
//! Every key is the store namespace followed by one of these suffixes.

/// Namespace used when none is configured
pub const DEFAULT_NAMESPACE: &str = "buildpipeline.android.";

/// Output directory for builds
pub const BUILD_PATH: &str = "buildpath";
/// File name template with `{name}`-style placeholders
pub const NAME_FORMAT: &str = "nameformat";
/// Pattern used to render `{date}`
pub const DATE_TIME_FORMAT: &str = "datetimeformat";
/// Stored as the string "True" or "False"
pub const INCREMENT_BUNDLE: &str = "incrementbundle";
/// Build option flags as an integer bitmask
pub const BUILD_OPTIONS: &str = "buildOptions";
/// Integer flag: sign with a custom keystore
pub const USE_KEYSTORE: &str = "usekeystore";
/// Integer flag: produce an `.aab` instead of an `.apk`
pub const IS_BUILD_APP_BUNDLE: &str = "isBuildAppBundle";
/// Integer flag: split the application binary
pub const IS_SPLIT_APP_BINARY: &str = "isSplitAppBinary";
/// Keystore file path
pub const KEYSTORE_NAME: &str = "keystorename";
/// Keystore password, base64-encoded
pub const KEYSTORE_PASS: &str = "keystorepass";
/// Key alias within the keystore
pub const KEYALIAS_NAME: &str = "keyaliasname";
/// Key alias password, base64-encoded
pub const KEYALIAS_PASS: &str = "keyaliaspass";

/// All suffixes, in save order
pub const ALL: [&str; 12] = [
    BUILD_PATH,
    NAME_FORMAT,
    DATE_TIME_FORMAT,
    INCREMENT_BUNDLE,
    BUILD_OPTIONS,
    USE_KEYSTORE,
    IS_BUILD_APP_BUNDLE,
    IS_SPLIT_APP_BINARY,
    KEYSTORE_NAME,
    KEYALIAS_NAME,
    KEYSTORE_PASS,
    KEYALIAS_PASS,
];

/// Text stored for a true string-typed flag
pub(crate) const TRUE_STRING: &str = "True";
/// Counterpart of [`TRUE_STRING`]
pub(crate) const FALSE_STRING: &str = "False";
