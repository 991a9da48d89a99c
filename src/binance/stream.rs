use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::binance::types::{DepthSnapshot, OrderBook};
use crate::config::Config;
use crate::error::DepthError;

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub async fn connect_depth_stream(
    config: &Config,
    symbol: &str,
    limit: &str,
) -> Result<WsStream, DepthError> {
    let url = depth_stream_url(&config.ws_url, symbol, limit);
    tracing::debug!("connecting to {url}");

    let (ws_stream, _) = connect_async(url.as_str())
        .await
        .map_err(|e| DepthError::Transport(e.to_string()))?;

    Ok(ws_stream)
}

fn depth_stream_url(ws_url: &str, symbol: &str, limit: &str) -> String {
    format!("{}/ws/{}@depth{}@100ms", ws_url, symbol.to_lowercase(), limit)
}

/// Every stream message carries the same shape as the REST body, so it
/// normalizes the same way.
pub(crate) fn decode_depth_message(text: &str) -> Result<OrderBook, DepthError> {
    let snapshot: DepthSnapshot = serde_json::from_str(text)?;
    Ok(snapshot.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_stream_url_with_lowercased_symbol() {
        assert_eq!(
            depth_stream_url("wss://x.test", "LTCBTC", "10"),
            "wss://x.test/ws/ltcbtc@depth10@100ms"
        );
    }

    #[test]
    fn decodes_stream_message_into_normalized_book() {
        let text = r#"{"lastUpdateId":42,"bids":[["0.1","2.0"]],"asks":[["0.2","3.0"]]}"#;

        let book = decode_depth_message(text).unwrap();

        assert_eq!(book.last_update_id, 42);
        assert_eq!(book.bids[0].price, "0.1");
        assert_eq!(book.asks[0].amount, "3.0");
    }

    #[test]
    fn malformed_message_is_a_decode_error() {
        let err = decode_depth_message("{").unwrap_err();
        assert!(matches!(err, DepthError::Decode(_)));
    }
}
