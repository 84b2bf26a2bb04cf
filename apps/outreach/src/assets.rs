//! Static assets referenced by rendered pages. They are served from the
//! configured assets directory at the site root.

use std::path::Path;

pub const LOGO_URL: &str = "/Natera logo.svg";
pub const HERO_IMAGE_URL: &str = "/Natera%20Email%20image.png";
pub const AI_LOADER_URL: &str = "/AI%20Loader.gif";

/// File names on disk, matching the URLs above once percent-decoded.
pub const BUNDLE_FILES: [&str; 4] = [
    "Natera logo.svg",
    "Natera Email image.png",
    "Natera Blog.webp",
    "AI Loader.gif",
];

/// Returns the bundle files that are missing from `dir`.
pub fn missing_assets(dir: &Path) -> Vec<&'static str> {
    BUNDLE_FILES
        .into_iter()
        .filter(|name| !dir.join(name).is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_decode_to_bundle_files() {
        let pairs = [
            (LOGO_URL, BUNDLE_FILES[0]),
            (HERO_IMAGE_URL, BUNDLE_FILES[1]),
            (AI_LOADER_URL, BUNDLE_FILES[3]),
        ];
        for (url, file) in pairs {
            assert_eq!(url.trim_start_matches('/').replace("%20", " "), file);
        }
    }

    #[test]
    fn test_missing_assets_reports_absent_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Natera logo.svg"), "<svg/>").unwrap();
        std::fs::write(dir.path().join("AI Loader.gif"), [0u8; 4]).unwrap();

        assert_eq!(
            missing_assets(dir.path()),
            vec!["Natera Email image.png", "Natera Blog.webp"]
        );
    }
}
