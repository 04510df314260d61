//! Hash builder shared by every algorithm

use crate::{AsyncHashResult, HashAlgorithm, HashResult, Result, hash_functions};
use tokio::sync::oneshot;
use zeroize::Zeroizing;

/// Hash builder; becomes an HMAC builder once a key is set
#[derive(Clone)]
pub struct HashBuilder {
    algorithm: HashAlgorithm,
    key: Option<Zeroizing<Vec<u8>>>,
}

/// Hash builder with a result handler
pub struct HashBuilderWithHandler<F> {
    builder: HashBuilder,
    result_handler: F,
}

impl HashBuilder {
    /// Create a builder for `algorithm`
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            key: None,
        }
    }

    /// Algorithm this builder will use
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Switch to HMAC with `key`
    #[must_use]
    pub fn with_key<K: Into<Vec<u8>>>(mut self, key: K) -> Self {
        self.key = Some(Zeroizing::new(key.into()));
        self
    }

    /// Add an `on_result` handler
    pub fn on_result<F, T>(self, handler: F) -> HashBuilderWithHandler<F>
    where
        F: FnOnce(Result<HashResult>) -> T + Send + 'static,
        T: Send + 'static,
    {
        HashBuilderWithHandler {
            builder: self,
            result_handler: handler,
        }
    }

    /// Compute the digest (or HMAC) of `data` on a spawned task
    pub fn compute<D: Into<Vec<u8>>>(self, data: D) -> AsyncHashResult {
        let data = data.into();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            tokio::task::yield_now().await;
            let _ = tx.send(self.run(&data));
        });

        AsyncHashResult::new(rx)
    }

    fn run(&self, data: &[u8]) -> Result<HashResult> {
        match &self.key {
            Some(key) => hash_functions::hmac(data, key, self.algorithm),
            None => Ok(hash_functions::digest(data, self.algorithm)),
        }
    }
}

impl<F, T> HashBuilderWithHandler<F>
where
    F: FnOnce(Result<HashResult>) -> T + Send + 'static,
    T: Send + 'static,
{
    /// Compute and hand the outcome to the handler
    pub async fn compute<D: Into<Vec<u8>>>(self, data: D) -> T {
        let data = data.into();
        let result = self.builder.run(&data);
        tokio::task::yield_now().await;
        (self.result_handler)(result)
    }
}
