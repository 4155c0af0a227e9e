//! Logger setup backed by `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Without it, the crate matching the binary
/// name and `tower_http` log at `default_level`.
///
/// # Arguments
///
/// * `bin_name` - Binary name (hyphens are converted to the crate target form)
/// * `default_level` - Level used when `RUST_LOG` is not set
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(true)
        .with_target(true)
        .try_init();

    if let Err(e) = result {
        tracing::warn!("Logger already initialized: {}", e);
    }
}

/// Build the default filter directives for a binary.
fn default_directives(bin_name: &str, default_level: &str) -> String {
    let target = bin_name.replace('-', "_");
    format!("{target}={default_level},tower_http={default_level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        // テスト項目: バイナリ名からフィルタ指定が組み立てられる
        // given (前提条件):
        let bin_name = "todolist-server";

        // when (操作):
        let directives = default_directives(bin_name, "debug");

        // then (期待する結果):
        assert!(directives.starts_with("todolist_server=debug"));
        assert!(directives.ends_with("tower_http=debug"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
