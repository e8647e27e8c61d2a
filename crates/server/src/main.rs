#[tokio::main]
async fn main() -> anyhow::Result<()> {
    relaxgo_server::start().await
}
