use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use toto_lookup::cache::VehicleResultCache;
use toto_lookup::config::EnvironmentConfig;
use toto_lookup::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🛺 Toto Zone Lookup");
    info!("==================");

    let config = EnvironmentConfig::from_env().map_err(|e| {
        error!("❌ Configuración inválida: {}", e);
        anyhow::anyhow!("Configuración inválida: {}", e)
    })?;

    info!("🌍 Entorno: {}", config.environment);
    info!("🔗 Backend: {}", config.api_base_url);

    let addr: SocketAddr = config.server_addr().parse()?;
    let app_state = AppState::new(config)?;

    spawn_cache_cleanup(app_state.vehicle_cache.clone());

    let app = create_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Redirige a la zona por defecto");
    info!("   GET  /route-:id - Página de zona");
    info!("   POST /route-:id/search - Buscar vehículo");
    info!("   GET  /vehicle?ref=:ref - Detalle de vehículo");
    info!("   GET  /health - Estado del servicio");
    info!("   GET  /api/zones - Directorio de zonas");
    info!("   GET  /api/route/:id - Zona en JSON");
    info!("   GET  /api/search?query=&zone_id= - Búsqueda en JSON");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Limpiar periódicamente los resultados expirados
fn spawn_cache_cleanup(cache: Arc<VehicleResultCache>) {
    let period = Duration::from_secs(cache.config().cleanup_interval_seconds);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await;
        loop {
            interval.tick().await;
            cache.cleanup_expired().await;
        }
    });
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
