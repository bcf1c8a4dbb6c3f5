#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let config = calendar_server::config::Config::from_env()?;
    calendar_server::web::start_web_server(config).await
}
