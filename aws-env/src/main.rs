#[tokio::main]
async fn main() {
    aws_env::cli::start().await;
}
