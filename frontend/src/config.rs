pub const DEFAULT_API_ROOT: &str = "/api/search";
pub const DEFAULT_SEARCH_TIMEOUT_MS: u32 = 15_000;
/// Delay between forcing the confirmation popup closed and reopening it.
pub const REVEAL_DELAY_MS: u32 = 150;
pub const PLACEHOLDER_PHOTO: &str = "/static/no-img.png";

pub fn api_root() -> String {
    resolve_api_root(option_env!("RESTAURANT_API_ROOT"))
}

pub fn search_timeout_ms() -> u32 {
    resolve_timeout(option_env!("RESTAURANT_SEARCH_TIMEOUT_MS"))
}

fn resolve_api_root(raw: Option<&str>) -> String {
    match raw.map(|url| url.trim().trim_end_matches('/')) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_API_ROOT.to_string(),
    }
}

fn resolve_timeout(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_SEARCH_TIMEOUT_MS)
}
