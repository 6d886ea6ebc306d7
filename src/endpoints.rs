//! The three Coinranking endpoints, expressed as request descriptors.

use std::collections::BTreeMap;

use crate::config::{self, ApiConfig};
use crate::models::TimePeriod;
use crate::queries::CoinListParams;
use crate::request::{HttpMethod, RequestDescriptor};

/// A logical call against the Coinranking API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoinRequest {
    /// One page of the ranked list.
    CoinList(CoinListParams),
    CoinDetail {
        uuid: String,
        time_period: TimePeriod,
    },
    PriceHistory {
        uuid: String,
        time_period: TimePeriod,
    },
}

impl CoinRequest {
    pub fn path(&self) -> String {
        match self {
            CoinRequest::CoinList(_) => "/coins".to_string(),
            CoinRequest::CoinDetail { uuid, .. } => format!("/coin/{uuid}"),
            CoinRequest::PriceHistory { uuid, .. } => format!("/coin/{uuid}/history"),
        }
    }

    pub fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    /// Query parameters; sort fields are omitted when unset so the API
    /// applies its default ordering.
    pub fn query_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        match self {
            CoinRequest::CoinList(list) => {
                params.insert("offset".to_string(), list.offset.to_string());
                params.insert("limit".to_string(), list.limit.to_string());
                params.insert("timePeriod".to_string(), list.time_period.as_str().to_string());
                if let Some(key) = list.order_by {
                    params.insert("orderBy".to_string(), key.as_str().to_string());
                }
                if let Some(direction) = list.order_direction {
                    params.insert("orderDirection".to_string(), direction.as_str().to_string());
                }
            }
            CoinRequest::CoinDetail { time_period, .. }
            | CoinRequest::PriceHistory { time_period, .. } => {
                params.insert("timePeriod".to_string(), time_period.as_str().to_string());
            }
        }
        params
    }

    /// Describe this call against the configured endpoint, attaching the
    /// access token header when one is configured.
    pub fn descriptor(&self, api: &ApiConfig) -> RequestDescriptor {
        let mut descriptor = RequestDescriptor::new(&api.base_url, &self.path(), self.method())
            .with_query_params(self.query_params());
        if let Some(token) = &api.access_token {
            descriptor = descriptor.with_header(config::ACCESS_TOKEN_HEADER, token);
        }
        descriptor
    }
}
