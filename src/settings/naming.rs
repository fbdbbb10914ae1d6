//! Output file naming from the name template.

use super::BuildSettings;
use super::timestamp::format_timestamp;
use crate::host::BuildContext;
use chrono::{Local, NaiveDateTime};

/// Placeholder tokens recognized in name templates.
pub const PLACEHOLDERS: [&str; 5] = ["{name}", "{package}", "{version}", "{bundle}", "{date}"];

impl BuildSettings {
    /// Renders the output file name using the local wall clock for `{date}`.
    ///
    /// See [`file_name_at`](Self::file_name_at).
    pub fn file_name(&self, context: &BuildContext) -> String {
        self.file_name_at(context, Local::now().naive_local())
    }

    /// Renders the output file name for a given timestamp.
    ///
    /// Substitutes `{name}`, `{package}`, `{version}`, `{bundle}` and
    /// `{date}` in `name_format`, then appends `.aab` or `.apk`.
    /// Unrecognized `{...}` tokens are kept verbatim. The result is not
    /// sanitized for any filesystem.
    pub fn file_name_at(&self, context: &BuildContext, now: NaiveDateTime) -> String {
        let date = format_timestamp(&self.date_time_format, &now);
        let bundle = context.bundle_version_code.to_string();

        let mut name = render_template(&self.name_format, |token| match token {
            "{name}" => Some(context.product_name.as_str()),
            "{package}" => Some(context.package_identifier.as_str()),
            "{version}" => Some(context.version.as_str()),
            "{bundle}" => Some(bundle.as_str()),
            "{date}" => Some(date.as_str()),
            _ => None,
        });

        name.push('.');
        name.push_str(self.extension());
        name
    }
}

/// Replaces placeholder tokens in one left-to-right pass.
///
/// Substituted values are never rescanned, so a value that itself looks like
/// a placeholder is emitted literally and the order of placeholders in
/// [`PLACEHOLDERS`] does not matter.
pub fn render_template<'a, F>(template: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let matched = PLACEHOLDERS
            .iter()
            .find(|token| tail.starts_with(**token))
            .and_then(|token| lookup(*token).map(|value| (token.len(), value)));

        match matched {
            Some((len, value)) => {
                out.push_str(value);
                rest = &tail[len..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
