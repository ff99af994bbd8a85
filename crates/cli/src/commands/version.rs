use tracing::instrument;

#[instrument]
pub fn get_version_info() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");
    let description = env!("CARGO_PKG_DESCRIPTION");

    tracing::debug!(
        package_name = name,
        package_version = version,
        "Gathering package information"
    );

    format!(
        "{name} {version} - {description}\n\
        Correlation ID: {}\n",
        crate::logging::correlation_id()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info_contains_package() {
        let info = get_version_info();
        assert!(info.starts_with(&format!("wfgraph-cli {}", env!("CARGO_PKG_VERSION"))));
        assert!(info.contains("Correlation ID:"));
    }
}
