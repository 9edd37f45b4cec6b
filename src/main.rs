use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use chatline::application::ports::{Clock, ConversationRepository};
use chatline::application::services::{BotReplyWorker, ConversationService, ResponseGenerator};
use chatline::infrastructure::observability::{TracingConfig, init_tracing};
use chatline::infrastructure::persistence::InMemoryConversationRepository;
use chatline::infrastructure::time::SystemClock;
use chatline::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (environment, settings) = Settings::load()?;

    init_tracing(
        &TracingConfig::new(environment, &settings.logging),
        settings.server.port,
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let repository: Arc<dyn ConversationRepository> =
        Arc::new(InMemoryConversationRepository::new());
    let response_generator = Arc::new(ResponseGenerator::new());

    let (reply_sender, reply_receiver) = mpsc::unbounded_channel();
    let worker = BotReplyWorker::new(
        reply_receiver,
        Arc::clone(&repository),
        Arc::clone(&response_generator),
        Arc::clone(&clock),
        settings.bot.display_name.clone(),
    );
    tokio::spawn(worker.run());

    let conversation_service = Arc::new(ConversationService::new(
        Arc::clone(&repository),
        Arc::clone(&clock),
        reply_sender,
        settings.bot.reply_delay(),
    ));

    let state = AppState {
        conversation_service,
        response_generator,
        clock,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(
        %addr,
        reply_delay_ms = settings.bot.reply_delay_ms,
        bot_name = %settings.bot.display_name,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
