use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging on stderr; stdout carries only the generated table.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "fp16_qdefs=info,fp16_qdefs_cli=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
