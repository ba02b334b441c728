use crate::error::{CatalogError, Result};
use std::io;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Output goes to stderr so it never mixes
/// with the menu on stdout. Call once, from the binary.
pub fn init(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| CatalogError::Config(format!("Invalid log level '{}': {}", directive, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| CatalogError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage_directive() {
        assert!(matches!(
            init("bookcat=notalevel"),
            Err(CatalogError::Config(_))
        ));
    }
}
