/// Postframe - social post composer service
use postframe::{config::ServerConfig, context::AppContext, error::StudioResult, server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> StudioResult<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postframe=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    print_banner();

    // Load configuration
    let config = ServerConfig::from_env()?;

    // Create application context
    let ctx = AppContext::new(config)?;

    // Start server
    server::serve(ctx).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
    ____             __  ____
   / __ \____  _____/ /_/ __/________ _____ ___  ___
  / /_/ / __ \/ ___/ __/ /_/ ___/ __ `/ __ `__ \/ _ \
 / ____/ /_/ (__  ) /_/ __/ /  / /_/ / / / / / /  __/
/_/    \____/____/\__/_/ /_/   \__,_/_/ /_/ /_/\___/

        Social post composer v{}
        "#,
        env!("CARGO_PKG_VERSION")
    );
}
