use dotenvy::dotenv;
use sales_order_service::config::Settings;
use sales_order_service::infrastructure::in_memory::InMemorySalesOrderRepository;
use sales_order_service::infrastructure::sales_order_repo::DieselSalesOrderRepository;
use sales_order_service::{build_server, create_pool, run_migrations, SalesOrderService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(std::io::Error::other)?;

    let service = match &settings.database_url {
        Some(database_url) => {
            let pool = create_pool(database_url).map_err(std::io::Error::other)?;
            run_migrations(&pool).map_err(std::io::Error::other)?;
            log::info!("Storing sales orders in PostgreSQL");
            SalesOrderService::new(DieselSalesOrderRepository::new(pool))
        }
        None => {
            log::warn!("DATABASE_URL not set, sales orders are kept in memory");
            SalesOrderService::new(InMemorySalesOrderRepository::new())
        }
    };

    log::info!(
        "Starting server at http://{}:{}",
        settings.host,
        settings.port
    );

    build_server(service, &settings.host, settings.port)?.await
}
