//! Browser utilities

/// Command line that opens `url` with the platform's default handler
fn opener(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        (
            "cmd",
            vec!["/C".to_string(), "start".to_string(), url.to_string()],
        )
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// Open a URL in the system's default browser
///
/// Only http(s) URLs are handed to the opener.
pub async fn open_url(url: String) {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        log::warn!("Refusing to open non-web URL: {}", url);
        return;
    }

    let (program, args) = opener(&url);
    match tokio::process::Command::new(program).args(&args).spawn() {
        Ok(_) => log::debug!("Opened {} with {}", url, program),
        Err(e) => log::error!("Failed to open URL in browser: {}", e),
    }
}
