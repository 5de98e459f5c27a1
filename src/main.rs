#[tokio::main]
async fn main() {
    healthguard::run().await
}
