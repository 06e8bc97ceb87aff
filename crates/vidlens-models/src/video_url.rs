//! Direct video URL policy.
//!
//! The provider fetches the video itself, so the relay only accepts URLs
//! that point straight at a video file. Pages on video-hosting platforms are
//! rejected up front because the provider cannot fetch them as files.

use url::Url;

/// Recognized video file extensions (matched case-insensitively).
pub const SUPPORTED_EXTENSIONS: [&str; 4] = [".mp4", ".mov", ".avi", ".webm"];

/// Video-hosting platforms and their display names.
///
/// Subdomains match too (`m.youtube.com`, `player.vimeo.com`).
const HOSTING_PLATFORMS: &[(&str, &str)] = &[
    ("youtube.com", "YouTube"),
    ("youtu.be", "YouTube"),
    ("youtube-nocookie.com", "YouTube"),
    ("vimeo.com", "Vimeo"),
    ("dailymotion.com", "Dailymotion"),
    ("tiktok.com", "TikTok"),
];

/// Outcome of checking a video URL against the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoUrlCheck {
    /// URL points at a video file the provider can fetch.
    Direct(Url),
    /// URL belongs to a video-hosting platform (display name).
    HostingPlatform(&'static str),
    /// URL is malformed, not http(s), or lacks a video extension.
    UnsupportedFormat,
}

/// Check a raw video URL.
///
/// The hosting-platform check runs first and also recognizes URLs typed
/// without a scheme (`youtu.be/abc`), so users get the more specific
/// guidance.
pub fn check_video_url(raw: &str) -> VideoUrlCheck {
    let raw = raw.trim();
    let parsed = Url::parse(raw);

    let host = match &parsed {
        Ok(url) => url.host_str().map(str::to_ascii_lowercase),
        Err(_) => Url::parse(&format!("https://{}", raw))
            .ok()
            .and_then(|url| url.host_str().map(str::to_ascii_lowercase)),
    };

    if let Some(platform) = host.as_deref().and_then(hosting_platform) {
        return VideoUrlCheck::HostingPlatform(platform);
    }

    let url = match parsed {
        Ok(url) => url,
        Err(_) => return VideoUrlCheck::UnsupportedFormat,
    };

    if !matches!(url.scheme(), "http" | "https") {
        return VideoUrlCheck::UnsupportedFormat;
    }

    if !has_video_extension(url.path()) {
        return VideoUrlCheck::UnsupportedFormat;
    }

    VideoUrlCheck::Direct(url)
}

/// Match a host against the known hosting platforms.
fn hosting_platform(host: &str) -> Option<&'static str> {
    let host = host.trim_end_matches('.');
    HOSTING_PLATFORMS
        .iter()
        .find(|(domain, _)| {
            host == *domain
                || host
                    .strip_suffix(domain)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
        .map(|(_, name)| *name)
}

/// Check whether a URL path ends in a recognized video extension.
fn has_video_extension(path: &str) -> bool {
    let path = path.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
