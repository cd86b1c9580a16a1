use shared::constants::DEFAULT_API_BASE_URL;

/// Backend base URL, fixed at build time through `ACRONYMIZE_API_URL`.
pub fn get_api_base_url() -> String {
    option_env!("ACRONYMIZE_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub fn get_api_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", get_api_base_url(), path)
    }
}
