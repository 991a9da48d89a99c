use reqwest::Client;

use crate::binance::types::{DepthSnapshot, OrderBook};
use crate::config::Config;
use crate::error::DepthError;

/// REST depth fetcher. Built once and reused across polling ticks.
pub struct DepthClient {
    http: Client,
    base_url: String,
}

impl DepthClient {
    /// TLS certificate verification is disabled on this client.
    pub fn new(config: &Config) -> Result<Self, DepthError> {
        let http = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| DepthError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
        })
    }

    pub async fn fetch(&self, symbol: &str, limit: &str) -> Result<OrderBook, DepthError> {
        let url = depth_url(&self.base_url, symbol, limit);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DepthError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| DepthError::Transport(e.to_string()))?;

        decode_depth(&body)
    }
}

fn depth_url(base_url: &str, symbol: &str, limit: &str) -> String {
    format!("{base_url}/depth?symbol={symbol}&limit={limit}")
}

/// Binance reports request failures in-band as a `{code, msg}` JSON body;
/// that shape is surfaced as an exchange error rather than a decode error.
pub(crate) fn decode_depth(body: &str) -> Result<OrderBook, DepthError> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    if value.get("code").is_some() {
        let msg = value
            .get("msg")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown error");
        return Err(DepthError::Exchange(msg.to_string()));
    }

    let snapshot: DepthSnapshot = serde_json::from_value(value)?;
    Ok(snapshot.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_depth_url_with_query_parameters() {
        assert_eq!(
            depth_url("https://x.test", "LTCBTC", "100"),
            "https://x.test/depth?symbol=LTCBTC&limit=100"
        );
    }

    #[test]
    fn decodes_raw_payload_into_normalized_book() {
        let body = r#"{"lastUpdateId":1,"bids":[["0.1","2.0"]],"asks":[["0.2","3.0"]]}"#;

        let book = decode_depth(body).unwrap();

        assert_eq!(book.last_update_id, 1);
        assert_eq!(book.bids.len(), 1);
        assert_eq!(book.bids[0].price, "0.1");
        assert_eq!(book.bids[0].amount, "2.0");
        assert_eq!(book.asks[0].price, "0.2");
        assert_eq!(book.asks[0].amount, "3.0");
    }

    #[test]
    fn surfaces_exchange_error_bodies() {
        let body = r#"{"code":-1121,"msg":"Invalid symbol."}"#;

        let err = decode_depth(body).unwrap_err();

        assert!(matches!(err, DepthError::Exchange(msg) if msg == "Invalid symbol."));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_depth("not json").unwrap_err();
        assert!(matches!(err, DepthError::Decode(_)));

        let err = decode_depth(r#"{"lastUpdateId":"nope"}"#).unwrap_err();
        assert!(matches!(err, DepthError::Decode(_)));
    }
}
