//! Duplicate a response stream so it can be observed without consuming it.

use bytes::Bytes;
use futures::channel::mpsc;
use futures::StreamExt;

use super::error::TransportError;
use super::http::ChunkedStream;

type Item = Result<Bytes, TransportError>;

/// Split `source` into two streams that both yield every item of `source`,
/// in order.
///
/// A background task pulls from `source` and forwards to both halves through
/// unbounded channels, so a slow or dropped half never stalls the other. Must
/// be called from within a Tokio runtime.
pub fn tee_stream(source: ChunkedStream) -> (ChunkedStream, ChunkedStream) {
    let (primary_tx, primary_rx) = mpsc::unbounded();
    let (copy_tx, copy_rx) = mpsc::unbounded();

    tokio::spawn(pump(source, primary_tx, copy_tx));

    (Box::pin(primary_rx), Box::pin(copy_rx))
}

async fn pump(
    mut source: ChunkedStream,
    primary: mpsc::UnboundedSender<Item>,
    copy: mpsc::UnboundedSender<Item>,
) {
    while let Some(item) = source.next().await {
        let primary_open = primary.unbounded_send(item.clone()).is_ok();
        let copy_open = copy.unbounded_send(item).is_ok();

        if !primary_open && !copy_open {
            tracing::trace!("Both tee halves dropped, abandoning source stream");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn source(items: Vec<Item>) -> ChunkedStream {
        Box::pin(stream::iter(items))
    }

    #[tokio::test]
    async fn test_both_halves_see_all_chunks() {
        let (primary, copy) = tee_stream(source(vec![
            Ok(Bytes::from("a")),
            Ok(Bytes::from("b")),
            Ok(Bytes::from("c")),
        ]));

        let primary: Vec<Item> = primary.collect().await;
        let copy: Vec<Item> = copy.collect().await;

        assert_eq!(primary, copy);
        assert_eq!(primary.len(), 3);
        assert_eq!(primary[2], Ok(Bytes::from("c")));
    }

    #[tokio::test]
    async fn test_errors_are_forwarded_to_both_halves() {
        let (primary, copy) = tee_stream(source(vec![
            Ok(Bytes::from("a")),
            Err(TransportError::Connection("reset".into())),
        ]));

        let primary: Vec<Item> = primary.collect().await;
        let copy: Vec<Item> = copy.collect().await;

        assert_eq!(primary[1], Err(TransportError::Connection("reset".into())));
        assert_eq!(copy[1], Err(TransportError::Connection("reset".into())));
    }

    #[tokio::test]
    async fn test_dropped_copy_does_not_block_primary() {
        let (primary, copy) = tee_stream(source(vec![
            Ok(Bytes::from("a")),
            Ok(Bytes::from("b")),
        ]));
        drop(copy);

        let primary: Vec<Item> = primary.collect().await;
        assert_eq!(primary.len(), 2);
    }
}
