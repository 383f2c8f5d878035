use crate::domain::models::ConfigReport;
use std::path::Path;

/// Presence check only: the file's content is never read or parsed, so an
/// empty file, garbage bytes, or a directory at the path all count as
/// present. Downstream tooling depends on this existence-only semantic.
pub fn validate_config(root: &Path, config: &str) -> ConfigReport {
    ConfigReport {
        config: config.to_string(),
        present: root.join(config).exists(),
    }
}
