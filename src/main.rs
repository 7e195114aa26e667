use anyhow::Result;
use riverwood::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
