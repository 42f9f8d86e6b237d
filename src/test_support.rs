use std::{net::SocketAddr, time::Duration};

use axum::Router;
use http::{header::CONTENT_TYPE, HeaderMap};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};
use url::Url;

async fn serve(app: Router) -> Url {
    let addr: SocketAddr = ([127, 0, 0, 1], 0).into();
    let server = axum::Server::bind(&addr).serve(app.into_make_service());
    let addr = server.local_addr();

    tokio::spawn(server);

    Url::parse(&format!("http://{addr}/")).unwrap()
}

/// Serves `body` with the given content type on every path.
pub async fn serve_page(content_type: &'static str, body: &'static str) -> Url {
    serve(Router::new().fallback(move || async move { ([(CONTENT_TYPE, content_type)], body) }))
        .await
}

/// Answers with the content type the client sent.
pub async fn serve_echo_content_type() -> Url {
    serve(Router::new().fallback(|headers: HeaderMap| async move {
        headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned()
    }))
    .await
}

async fn read_request(socket: &mut TcpStream) {
    let mut request = Vec::new();
    let mut buffer = [0; 1024];

    while !request.windows(4).any(|window| window == b"\r\n\r\n") {
        match socket.read(&mut buffer).await {
            Ok(0) | Err(_) => return,
            Ok(read) => request.extend_from_slice(&buffer[..read]),
        }
    }
}

/// Serves raw HTTP/1.1 bytes to the first connection, then closes it.
async fn serve_raw<F, Fut>(respond: F) -> Url
where
    F: FnOnce(TcpStream) -> Fut + Send + 'static,
    Fut: std::future::Future<Output = ()> + Send,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request(&mut socket).await;
        respond(socket).await;
    });

    Url::parse(&format!("http://{addr}/")).unwrap()
}

/// Promises a longer body than it sends, then hangs up.
pub async fn serve_truncated_page(partial: &'static str) -> Url {
    serve_raw(move |mut socket| async move {
        let head = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: text/html\r\ncontent-length: {}\r\n\r\n",
            partial.len() + 1024
        );

        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(partial.as_bytes()).await;
        let _ = socket.flush().await;
    })
    .await
}

/// Streams chunked paragraphs until the client goes away.
pub async fn serve_endless_page() -> Url {
    serve_raw(|mut socket| async move {
        let head = concat!(
            "HTTP/1.1 200 OK\r\n",
            "content-type: text/html\r\n",
            "transfer-encoding: chunked\r\n\r\n"
        );

        if socket.write_all(head.as_bytes()).await.is_err() {
            return;
        }

        while socket.write_all(b"8\r\n<p>a</p>\r\n").await.is_ok() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
}
