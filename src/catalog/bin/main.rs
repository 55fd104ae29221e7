use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    bookshop::server::run().await
}
