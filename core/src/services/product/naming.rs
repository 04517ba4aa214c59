//! Image file naming

use chrono::Utc;
use uuid::Uuid;

const FALLBACK_NAME: &str = "image";

/// Final path component of a client-supplied file name
///
/// Both `/` and `\` count as separators so that neither Unix nor Windows
/// clients can place files outside the image directory.
pub fn base_name(original: &str) -> &str {
    let name = original
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim();

    match name {
        "" | "." | ".." => FALLBACK_NAME,
        name => name,
    }
}

/// Unique file name: `{millis}_{8 hex}_{base name}`
pub fn image_file_name(original: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}_{}",
        Utc::now().timestamp_millis(),
        &suffix[..8],
        base_name(original)
    )
}
