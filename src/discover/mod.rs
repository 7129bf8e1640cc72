pub mod crtsh;

use async_trait::async_trait;

use crate::error::SubhunterError;

/// A lookup source the enumerator can query.
///
/// `query` is either a plain domain or a wildcard domain (`*.sub.domain`);
/// the returned strings are raw name records, possibly multi-line, exactly
/// as the source produced them.
#[async_trait]
pub trait SubdomainSource {
    fn name(&self) -> &'static str;

    async fn fetch(&self, query: &str) -> Result<Vec<String>, SubhunterError>;
}
