#[tokio::main]
async fn main() -> std::io::Result<()> {
    sim_hardware::run_with_config().await
}
