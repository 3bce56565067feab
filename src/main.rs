use tutor_gateway::{app_state_from_config, build_app, config::AppConfig, logging, run_server};

#[tokio::main]
async fn main() {
    logging::init_logging();

    let config = AppConfig::from_env();
    let state = app_state_from_config(&config);
    let app = build_app(state);

    if let Err(err) = run_server(app, config.port).await {
        tracing::error!(error = %err, port = config.port, "server failed");
        std::process::exit(1);
    }
}
