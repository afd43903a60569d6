//! Fixed pool of RPC endpoints with modular rotation.

use url::Url;

use crate::chain::types::ChainError;

/// Ordered, read-only pool of endpoint URLs with a cycling cursor.
///
/// The cursor only moves forward via [`EndpointPool::advance`] and always
/// stays in `[0, len)`.
#[derive(Debug)]
pub struct EndpointPool {
    urls: Vec<Url>,
    index: usize,
}

impl EndpointPool {
    /// Build a pool from an ordered list of URLs. The list must be non-empty.
    pub fn new(urls: Vec<Url>) -> Result<Self, ChainError> {
        if urls.is_empty() {
            return Err(ChainError::Config(
                "endpoint pool must contain at least one URL".to_string(),
            ));
        }
        Ok(Self { urls, index: 0 })
    }

    /// Parse and collect a list of URL strings into a pool.
    pub fn from_strings(urls: &[String]) -> Result<Self, ChainError> {
        let parsed = urls
            .iter()
            .map(|u| {
                u.parse::<Url>()
                    .map_err(|e| ChainError::Config(format!("invalid endpoint URL '{}': {}", u, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    /// The endpoint the cursor currently points at.
    pub fn current(&self) -> &Url {
        &self.urls[self.index]
    }

    /// Move the cursor to the next endpoint, wrapping at the end.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.urls.len();
    }

    /// Current cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of endpoints in the pool.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether the pool is empty (never true for a constructed pool).
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_of(n: usize) -> EndpointPool {
        let urls = (0..n)
            .map(|i| format!("http://rpc{}.example.com/", i))
            .collect::<Vec<_>>();
        EndpointPool::from_strings(&urls).unwrap()
    }

    #[test]
    fn test_empty_pool_rejected() {
        assert!(EndpointPool::new(Vec::new()).is_err());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = EndpointPool::from_strings(&["not a url".to_string()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rotation_wraps_modulo_pool_size() {
        let mut pool = pool_of(3);
        assert_eq!(pool.index(), 0);

        // m rotations land on m mod len
        for m in 1..=7 {
            pool.advance();
            assert_eq!(pool.index(), m % 3);
        }
    }

    #[test]
    fn test_current_tracks_index() {
        let mut pool = pool_of(2);
        assert_eq!(pool.current().as_str(), "http://rpc0.example.com/");
        pool.advance();
        assert_eq!(pool.current().as_str(), "http://rpc1.example.com/");
        pool.advance();
        assert_eq!(pool.current().as_str(), "http://rpc0.example.com/");
    }

    #[test]
    fn test_single_endpoint_pool_rotates_in_place() {
        let mut pool = pool_of(1);
        pool.advance();
        assert_eq!(pool.index(), 0);
    }
}
