//! Portfolio records (POST /process-portfolio)

use serde::{Deserialize, Deserializer, Serialize};

/// A list of asset identifiers. A missing or `null` list is empty and a
/// `null` element is an empty identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PortfolioRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub holdings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortfolioResponse {
    pub size: usize,
}

impl PortfolioRequest {
    pub fn size(&self) -> PortfolioResponse {
        PortfolioResponse {
            size: self.holdings.len(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let holdings = Option::<Vec<Option<String>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(holdings.into_iter().map(Option::unwrap_or_default).collect())
}
