use merchandise_api::{
    config::{AppConfig, DataSource},
    db::create_pool,
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let DataSource::Postgres { database_url } = &config.data_source else {
        anyhow::bail!("seeding requires DATA_SOURCE=postgres");
    };

    let pool = create_pool(database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    seed_products(&pool).await?;

    println!("Seed completed.");
    Ok(())
}

async fn seed_products(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let products = vec![
        ("Wristbands 2-pack", "Sweat-absorbing wristbands", "Accessories", 599, 40),
        ("Overgrip Tape 3-pack", "Tacky replacement grips", "Accessories", 899, 60),
        ("Tour Racket Bag", "Holds six rackets plus kit", "Bags", 8999, 12),
        ("Championship Balls (4)", "Pressurised match balls", "Balls", 1099, 120),
        ("Practice Balls Bucket", "72 pressureless trainers", "Balls", 4599, 30),
        ("Performance Polo", "Breathable court polo", "Clothing", 3499, 25),
        ("Graphite Pro Racket", "Tour-weight graphite frame", "Rackets", 15999, 8),
    ];

    for (name, desc, category, price, stock_count) in products {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, category, price, stock_count)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(desc)
        .bind(category)
        .bind(i64::from(price))
        .bind(stock_count)
        .execute(pool)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}
