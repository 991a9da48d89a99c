use std::time::Duration;

use anyhow::Result;
use futures_util::stream::SplitStream;
use futures_util::{SinkExt, StreamExt};
use tokio::time::MissedTickBehavior;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::protocol::{CloseFrame, frame::coding::CloseCode};

use crate::binance::rest::DepthClient;
use crate::binance::stream::{self, WsStream};
use crate::config::Config;

const POLL_INTERVAL: Duration = Duration::from_secs(5);
const CLOSE_GRACE: Duration = Duration::from_secs(1);

/// Polls the REST depth endpoint until interrupted. Any fetch failure ends
/// the loop and propagates out.
pub async fn run_rest(config: &Config, symbol: &str, limit: &str) -> Result<()> {
    let client = DepthClient::new(config)?;

    // first fetch lands one full period after startup
    let start = tokio::time::Instant::now() + POLL_INTERVAL;
    let mut ticker = tokio::time::interval_at(start, POLL_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::info!("polling depth for {symbol} every {}s", POLL_INTERVAL.as_secs());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupt");
                return Ok(());
            }
            _ = ticker.tick() => {
                let book = client.fetch(symbol, limit).await?;
                tracing::info!("{book}");
            }
        }
    }
}

/// Runs the websocket subscription until the stream ends or Ctrl+C arrives.
/// On interrupt a Normal close frame is sent, then the read task gets a
/// bounded grace period to observe the peer's close.
pub async fn run_stream(config: &Config, symbol: &str, limit: &str) -> Result<()> {
    let ws_stream = stream::connect_depth_stream(config, symbol, limit).await?;
    let (mut write, read) = ws_stream.split();

    tracing::info!("subscribed to depth stream for {symbol}");

    let mut reader = tokio::spawn(read_loop(read));

    tokio::select! {
        _ = &mut reader => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupt");

            let close = Message::Close(Some(CloseFrame {
                code: CloseCode::Normal,
                reason: "".into(),
            }));
            if let Err(e) = write.send(close).await {
                tracing::warn!("write close: {e}");
                return Ok(());
            }

            let _ = tokio::time::timeout(CLOSE_GRACE, &mut reader).await;
        }
    }

    Ok(())
}

/// Logs every decodable depth message. A malformed message is skipped; a
/// read error or peer close ends the loop.
async fn read_loop(mut read: SplitStream<WsStream>) {
    while let Some(message) = read.next().await {
        match message {
            Ok(Message::Text(text)) => match stream::decode_depth_message(text.as_str()) {
                Ok(book) => tracing::info!("{book}"),
                Err(e) => tracing::warn!("skipping malformed depth message: {e}"),
            },
            Ok(Message::Close(frame)) => {
                tracing::info!("stream closed by peer: {frame:?}");
                return;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!("read: {e}");
                return;
            }
        }
    }
}
