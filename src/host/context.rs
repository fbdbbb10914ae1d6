//! Build-name context.

/// Project identity substituted into output file names.
///
/// Values are used as-is; nothing is validated or sanitized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildContext {
    /// Product name, substituted for `{name}`.
    pub product_name: String,

    /// Application identifier (e.g. "com.example.app"), substituted for `{package}`.
    pub package_identifier: String,

    /// Version string (e.g. "1.2.0"), substituted for `{version}`.
    pub version: String,

    /// Bundle version code, substituted for `{bundle}`.
    pub bundle_version_code: i32,
}

impl BuildContext {
    /// Creates a context from its four parts.
    pub fn new(
        product_name: impl Into<String>,
        package_identifier: impl Into<String>,
        version: impl Into<String>,
        bundle_version_code: i32,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            package_identifier: package_identifier.into(),
            version: version.into(),
            bundle_version_code,
        }
    }
}
