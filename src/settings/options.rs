//! Build option flags.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Bitset of build options, persisted as a single integer.
///
/// Bits without a named constant are preserved as-is so values written by
/// other tools survive a load/save cycle.
///
/// # Examples
///
/// ```
/// use android_build_pipeline::settings::BuildOptions;
///
/// let opts: BuildOptions = "Development|AllowDebugging".parse().unwrap();
/// assert!(opts.contains(BuildOptions::DEVELOPMENT));
/// assert_eq!(opts.bits(), 513);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BuildOptions(i32);

impl BuildOptions {
    /// Development build.
    pub const DEVELOPMENT: Self = Self(1);
    /// Run the build on the device after it completes.
    pub const AUTO_RUN_PLAYER: Self = Self(4);
    /// Reveal the output in the file browser.
    pub const SHOW_BUILT_PLAYER: Self = Self(8);
    /// Build additional streamed scenes.
    pub const BUILD_ADDITIONAL_STREAMED_SCENES: Self = Self(16);
    /// Export a project that accepts external modifications.
    pub const ACCEPT_EXTERNAL_MODIFICATIONS: Self = Self(32);
    /// Connect the profiler on start.
    pub const CONNECT_WITH_PROFILER: Self = Self(256);
    /// Allow script debugging.
    pub const ALLOW_DEBUGGING: Self = Self(512);
    /// Symlink sources instead of copying.
    pub const SYMLINK_SOURCES: Self = Self(1024);
    /// Skip asset bundle compression.
    pub const UNCOMPRESSED_ASSET_BUNDLE: Self = Self(2048);
    /// Connect to the host editor.
    pub const CONNECT_TO_HOST: Self = Self(4096);
    /// Rebuild scripts only.
    pub const BUILD_SCRIPTS_ONLY: Self = Self(32768);
    /// Compress with LZ4.
    pub const COMPRESS_WITH_LZ4: Self = Self(262_144);
    /// Compress with LZ4 high compression.
    pub const COMPRESS_WITH_LZ4_HC: Self = Self(524_288);
    /// Fail the build on any error.
    pub const STRICT_MODE: Self = Self(2_097_152);

    const NAMED: &'static [(&'static str, BuildOptions)] = &[
        ("Development", Self::DEVELOPMENT),
        ("AutoRunPlayer", Self::AUTO_RUN_PLAYER),
        ("ShowBuiltPlayer", Self::SHOW_BUILT_PLAYER),
        (
            "BuildAdditionalStreamedScenes",
            Self::BUILD_ADDITIONAL_STREAMED_SCENES,
        ),
        (
            "AcceptExternalModificationsToPlayer",
            Self::ACCEPT_EXTERNAL_MODIFICATIONS,
        ),
        ("ConnectWithProfiler", Self::CONNECT_WITH_PROFILER),
        ("AllowDebugging", Self::ALLOW_DEBUGGING),
        ("SymlinkSources", Self::SYMLINK_SOURCES),
        ("UncompressedAssetBundle", Self::UNCOMPRESSED_ASSET_BUNDLE),
        ("ConnectToHost", Self::CONNECT_TO_HOST),
        ("BuildScriptsOnly", Self::BUILD_SCRIPTS_ONLY),
        ("CompressWithLz4", Self::COMPRESS_WITH_LZ4),
        ("CompressWithLz4HC", Self::COMPRESS_WITH_LZ4_HC),
        ("StrictMode", Self::STRICT_MODE),
    ];

    /// No options set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wraps a raw bit pattern, keeping unknown bits.
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// Raw bit pattern.
    pub const fn bits(self) -> i32 {
        self.0
    }

    /// Returns true when no bit is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true when every bit of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Sets the bits of `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clears the bits of `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for BuildOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for BuildOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Formats as `|`-separated flag names, `None` when empty, and a trailing
/// raw integer for bits without a name.
impl fmt::Display for BuildOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }

        let mut remaining = self.0;
        let mut first = true;
        for (name, flag) in Self::NAMED {
            if self.contains(*flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                remaining &= !flag.0;
                first = false;
            }
        }

        if remaining != 0 {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{}", remaining)?;
        }

        Ok(())
    }
}

/// Parses a raw integer (`"513"`), `"None"`, or `|`-separated flag names
/// and integers (`"Development|AllowDebugging"`). Names are case-insensitive.
impl FromStr for BuildOptions {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = Self::empty();

        for part in s.split('|').map(str::trim) {
            if part.is_empty() || part.eq_ignore_ascii_case("none") {
                continue;
            }

            if let Ok(bits) = part.parse::<i32>() {
                options |= Self(bits);
                continue;
            }

            let flag = Self::NAMED
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(part))
                .map(|(_, flag)| *flag)
                .ok_or_else(|| {
                    let valid: Vec<&str> = Self::NAMED.iter().map(|(name, _)| *name).collect();
                    format!(
                        "Invalid build option: {}. Valid options: {}",
                        part,
                        valid.join(", ")
                    )
                })?;
            options |= flag;
        }

        Ok(options)
    }
}
