use c3lingo_core::PAGE_TITLE;
use c3lingo_core::registry::EntityKind;
use c3lingo_db::{admin, config::DbConfig, create_pool, schema::initialize_database};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = DbConfig::from_env()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Optional entity to list, by singular or table name
    let kind = std::env::args()
        .nth(1)
        .map(|name| name.parse::<EntityKind>())
        .transpose()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url, config.max_connections).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    info!("{}", PAGE_TITLE);

    match kind {
        Some(kind) => {
            let entries = admin::list_entries(&db_pool, kind).await?;
            info!("{} ({})", kind.plural_name(), entries.len());
            for entry in entries {
                info!("  {} {}", entry.id, entry.label);
            }
        }
        None => {
            for (kind, count) in admin::overview(&db_pool).await? {
                info!("{:<20} {}", kind.plural_name(), count);
            }
        }
    }

    Ok(())
}
