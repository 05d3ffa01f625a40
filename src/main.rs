#[actix_web::main]
async fn main() -> std::io::Result<()> {
    folhita_catalog_server::run().await
}
