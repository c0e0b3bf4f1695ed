// Chunked JSON streaming utilities
use crate::application::streaming_service::StreamMessage;
use crate::infrastructure::http_response::brotli_compress;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use tokio::sync::mpsc;

pub const CONTENT_TYPE_CHUNKED: &str = "application/x-dashboard-chunks";

/// Drain the channel into a chunked body, one length-prefixed chunk per message.
pub fn chunked_response(mut rx: mpsc::Receiver<StreamMessage>, compress: bool) -> Response<Body> {
    let chunks = async_stream::stream! {
        while let Some(msg) = rx.recv().await {
            yield serialize_chunk(msg, compress).await;
        }
    };

    // No Content-Encoding header: chunks are compressed individually, not the HTTP body.
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, CONTENT_TYPE_CHUNKED)
        .body(Body::from_stream(chunks))
        .unwrap_or_else(|e| {
            tracing::error!("Chunked response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
}

/// Serialize a single message to a length-prefixed chunk
pub async fn serialize_chunk(msg: StreamMessage, compress: bool) -> Result<Bytes, std::io::Error> {
    let json = serde_json::to_vec(&msg).map_err(std::io::Error::other)?;

    let payload = if compress {
        brotli_compress(&json).await?
    } else {
        json
    };

    // 4-byte big-endian length, then payload
    let mut chunk = BytesMut::with_capacity(4 + payload.len());
    chunk.put_u32(payload.len() as u32);
    chunk.put_slice(&payload);

    Ok(chunk.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::Directive;
    use bytes::Buf;

    /// Split a body into its length-prefixed payloads
    pub fn split_chunks(mut body: Bytes) -> Vec<Bytes> {
        let mut chunks = Vec::new();
        while body.remaining() >= 4 {
            let len = body.get_u32() as usize;
            chunks.push(body.split_to(len));
        }
        chunks
    }

    #[tokio::test]
    async fn test_serialize_chunk_prefixes_length() {
        let msg = StreamMessage::Directive {
            sequence: 0,
            directive: Directive::Divider,
        };
        let chunk = serialize_chunk(msg, false).await.unwrap();
        let chunks = split_chunks(chunk);
        assert_eq!(chunks.len(), 1);

        let value: serde_json::Value = serde_json::from_slice(&chunks[0]).unwrap();
        assert_eq!(value["kind"], "directive");
        assert_eq!(value["directive"]["type"], "divider");
    }

    #[tokio::test]
    async fn test_chunked_response_drains_channel() {
        let (tx, rx) = mpsc::channel(4);
        tx.send(StreamMessage::Directive {
            sequence: 0,
            directive: Directive::Divider,
        })
        .await
        .unwrap();
        tx.send(StreamMessage::Complete {
            directives: 1,
            duration_ms: 0,
        })
        .await
        .unwrap();
        drop(tx);

        let response = chunked_response(rx, false);
        assert_eq!(response.headers()[header::CONTENT_TYPE], CONTENT_TYPE_CHUNKED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let chunks = split_chunks(body);
        assert_eq!(chunks.len(), 2);
        let last: serde_json::Value = serde_json::from_slice(&chunks[1]).unwrap();
        assert_eq!(last["kind"], "complete");
        assert_eq!(last["directives"], 1);
    }
}
