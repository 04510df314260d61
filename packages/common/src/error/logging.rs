//! Structured logging bootstrap
//!
//! Library code emits `tracing` events; with the `log` feature of `tracing`
//! those reach the `log` facade, which `env_logger` prints.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (call once at application startup)
    ///
    /// Configure levels via `RUST_LOG`:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Info and above
    /// - `RUST_LOG=trinkets_token=debug,trinkets_util=warn` - Per-crate levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            let installed = env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .try_init()
                .is_ok();

            if installed {
                info!("Structured logging initialized");
            }
        });
    }

    /// Initialize logging for test environments
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a failed hashing or signing operation
    ///
    /// Only the error type is logged, never the input.
    pub fn log_crypto_error<E: std::error::Error + ?Sized>(operation: &str, _error: &E) {
        error!(
            "Cryptographic operation failed: {} (error_type: {})",
            operation,
            std::any::type_name::<E>()
        );
    }

    /// Log an operation that used a secret key
    ///
    /// The key is hashed before it reaches the log line.
    pub fn log_keyed_operation(operation: &str, key: &[u8], success: bool) {
        let key_hash = Self::secure_hash_key(key);
        if success {
            debug!("Keyed operation succeeded: {operation} (key_hash: {key_hash})");
        } else {
            warn!("Keyed operation rejected: {operation} (key_hash: {key_hash})");
        }
    }

    /// Log timing information for an operation
    pub fn log_performance_metric(operation: &str, elapsed: Duration, success: bool) {
        let duration_ms = elapsed.as_millis();
        if success {
            debug!("Performance: {operation} completed in {duration_ms}ms");
        } else {
            warn!("Performance: {operation} failed after {duration_ms}ms");
        }
    }

    /// Log network operations with request details
    pub fn log_network_operation(operation: &str, url: &str, status: Option<u16>) {
        match status {
            Some(status) => debug!("Network: {operation} {url} -> {status}"),
            None => debug!("Network: {operation} {url}"),
        }
    }

    /// SHA-256 of the key, first 12 hex chars, prefixed with `#`
    pub(crate) fn secure_hash_key(key: &[u8]) -> String {
        let hash = Sha256::digest(key);
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
