//! Streams the static page through the rewriter.
//!
//! `lol_html` handlers are not `Send`, so the rewriter lives on a blocking
//! worker between two bounded channels: one async task feeds it upstream
//! chunks and another forwards rewritten chunks into the response body.
//! Once the client disconnects both channels close and the worker stops.

use std::sync::Arc;

use axum::body::Body;
use bytes::Bytes;
use tokio::{
    sync::mpsc::{self, Receiver, Sender},
    task::JoinHandle,
};

use crate::{helper::PageError, rewrite::RewriteRules, static_page::StaticPage};

const CHUNK_BUFFER: usize = 16;

type Chunk = Result<Bytes, PageError>;

pub fn transform(rules: Arc<RewriteRules>, page: StaticPage) -> Body {
    spawn_pipeline(rules, page).0
}

/// Returns the response body and the handle of the rewriter worker.
fn spawn_pipeline(rules: Arc<RewriteRules>, page: StaticPage) -> (Body, JoinHandle<()>) {
    let (input_tx, input_rx) = mpsc::channel(CHUNK_BUFFER);
    let (output_tx, output_rx) = mpsc::channel(CHUNK_BUFFER);
    let (sender, body) = Body::channel();

    tokio::spawn(feed(page, input_tx));
    let worker = tokio::task::spawn_blocking(move || {
        if let Err(err) = run_rewriter(&rules, input_rx, output_tx.clone()) {
            let _ = output_tx.blocking_send(Err(err));
        }
    });
    tokio::spawn(drain(output_rx, sender));

    (body, worker)
}

async fn feed(mut page: StaticPage, input: Sender<Chunk>) {
    loop {
        let chunk = match page.next_chunk().await {
            Ok(Some(chunk)) => Ok(chunk),
            Ok(None) => return,
            Err(err) => Err(err),
        };

        let failed = chunk.is_err();

        if input.send(chunk).await.is_err() || failed {
            return;
        }
    }
}

fn run_rewriter(
    rules: &RewriteRules,
    mut input: Receiver<Chunk>,
    output: Sender<Chunk>,
) -> Result<(), PageError> {
    let sink = output.clone();
    let mut rewriter = rules.rewriter(move |chunk: &[u8]| {
        let _ = sink.blocking_send(Ok(Bytes::copy_from_slice(chunk)));
    })?;

    while let Some(chunk) = input.blocking_recv() {
        rewriter.write(&chunk?)?;

        if output.is_closed() {
            tracing::debug!("Client went away, stopping rewrite.");
            return Ok(());
        }
    }

    rewriter.end()?;

    Ok(())
}

async fn drain(mut output: Receiver<Chunk>, mut sender: hyper::body::Sender) {
    while let Some(chunk) = output.recv().await {
        match chunk {
            Ok(bytes) => {
                if sender.send_data(bytes).await.is_err() {
                    return;
                }
            }
            Err(err) => {
                tracing::error!("Aborting static page stream: {}", err);
                sender.abort();
                return;
            }
        }
    }
}
