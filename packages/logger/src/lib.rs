//! Tracing setup.
//!
//! Installs a global subscriber that prints to the terminal on native targets and to the browser
//! console on `wasm32`.
#![deny(missing_docs)]

pub use tracing::Level;

/// Errors raised while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A global subscriber was installed before.
    #[error("a global tracing subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Install the global subscriber, showing events up to `level`.
///
/// Can only succeed once per process.
pub fn init(level: Level) -> Result<(), LoggerError> {
    #[cfg(not(target_arch = "wasm32"))]
    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();

    #[cfg(target_arch = "wasm32")]
    let result = {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let config = tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build();
        tracing_subscriber::registry()
            .with(tracing_wasm::WASMLayer::new(config))
            .try_init()
    };

    result.map_err(|err| LoggerError::AlreadyInitialized(err.to_string()))?;
    tracing::debug!(%level, "logger initialized");
    Ok(())
}
