use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Inicializa o tracing escrevendo no stderr.
///
/// O stdout é reservado pro documento JSON de resposta, então nenhum log pode ir pra lá.
/// O filtro padrão é `warn` e pode ser trocado com `RUST_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: se já houver um subscriber global (testes), apenas ignora
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init();
}
