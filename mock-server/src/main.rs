use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3333".to_string());
    let seed = match std::env::var("MENU_SEED_FILE") {
        Ok(path) => menu_mock_server::load_seed(&std::fs::read_to_string(&path)?)?,
        Err(_) => Vec::new(),
    };

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    menu_mock_server::run_with(listener, seed).await?;
    Ok(())
}
