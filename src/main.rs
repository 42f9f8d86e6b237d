use std::{error::Error, net::SocketAddr, sync::Arc};

use linkpage::{config::Config, router, state::PageState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::fmt().with_file(true).init();

    let config = Config::from_env()?;
    let addr: SocketAddr = format!("[::]:{}", config.port).parse()?;

    tracing::info!("Serving /links for {}", config.links_url());
    tracing::info!("Rewriting static page from {}", config.static_page_url);

    let app = router(Arc::new(PageState::new(config)?));

    tracing::info!("Listening on: {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
