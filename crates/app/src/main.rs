//! Foodio Application CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use foodio::discounts::DiscountPercent;
use foodio_app::{
    database,
    domain::foods::{
        FoodsService, PgFoodsService,
        models::{FoodUuid, NewFood},
    },
};
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "foodio-app", about = "Foodio CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Food(FoodCommand),
    Db(DbCommand),
}

#[derive(Debug, Args)]
struct FoodCommand {
    #[command(subcommand)]
    command: FoodSubcommand,
}

#[derive(Debug, Subcommand)]
enum FoodSubcommand {
    /// Add a single food to the catalog
    Create(CreateFoodArgs),

    /// Print the catalog
    List(DatabaseArgs),

    /// Load the bundled sample menu into the catalog
    Seed(DatabaseArgs),
}

#[derive(Debug, Args)]
struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending migrations
    Migrate(DatabaseArgs),
}

#[derive(Debug, Args)]
struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Args)]
struct CreateFoodArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Menu category
    #[arg(long)]
    category: String,

    /// Unit price, e.g. 250.00
    #[arg(long)]
    price: Decimal,

    /// Discount percentage in [0, 100]
    #[arg(long, default_value_t = 0)]
    discount: u8,

    /// Display description
    #[arg(long, default_value = "")]
    description: String,

    /// Image reference
    #[arg(long, default_value = "")]
    image: String,

    /// Display rating in [0, 5]
    #[arg(long, default_value_t = 0.0)]
    rating: f32,

    /// Optional food UUID; generated when omitted
    #[arg(long)]
    food_uuid: Option<Uuid>,

    #[command(flatten)]
    database: DatabaseArgs,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Food(FoodCommand {
            command: FoodSubcommand::Create(args),
        }) => create_food(args).await,
        Commands::Food(FoodCommand {
            command: FoodSubcommand::List(args),
        }) => list_foods(args).await,
        Commands::Food(FoodCommand {
            command: FoodSubcommand::Seed(args),
        }) => seed_foods(args).await,
        Commands::Db(DbCommand {
            command: DbSubcommand::Migrate(args),
        }) => migrate(args).await,
    }
}

async fn foods_service(database_url: &str) -> Result<PgFoodsService, String> {
    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    Ok(PgFoodsService::new(database::Db::new(pool)))
}

async fn create_food(args: CreateFoodArgs) -> Result<(), String> {
    let service = foods_service(&args.database.database_url).await?;

    let discount = DiscountPercent::new(args.discount)
        .map_err(|error| format!("invalid discount: {error}"))?;

    let uuid = args
        .food_uuid
        .map_or_else(FoodUuid::new, FoodUuid::from_uuid);

    let food = service
        .create_food(NewFood {
            uuid,
            name: args.name,
            description: args.description,
            category: args.category,
            image: args.image,
            rating: args.rating,
            price: args.price,
            discount_percent: discount,
        })
        .await
        .map_err(|error| format!("failed to create food: {error}"))?;

    println!("{} {} ({})", food.uuid, food.name, food.category);

    Ok(())
}

async fn list_foods(args: DatabaseArgs) -> Result<(), String> {
    let service = foods_service(&args.database_url).await?;

    let foods = service
        .list_foods()
        .await
        .map_err(|error| format!("failed to list foods: {error}"))?;

    for food in foods {
        println!(
            "{} {} ({}) {} {}",
            food.uuid, food.name, food.category, food.price, food.discount_percent
        );
    }

    Ok(())
}

async fn seed_foods(args: DatabaseArgs) -> Result<(), String> {
    let service = foods_service(&args.database_url).await?;

    let menu = foodio::fixtures::sample_menu()
        .map_err(|error| format!("failed to load sample menu: {error}"))?;

    for (key, fixture) in &menu.foods {
        let price = fixture
            .price()
            .map_err(|error| format!("invalid price for '{key}': {error}"))?;
        let discount = fixture
            .discount()
            .map_err(|error| format!("invalid discount for '{key}': {error}"))?;

        let food = service
            .create_food(NewFood {
                uuid: FoodUuid::new(),
                name: fixture.name.clone(),
                description: fixture.description.clone().unwrap_or_default(),
                category: fixture.category.clone(),
                image: fixture.image.clone().unwrap_or_default(),
                rating: fixture.rating.unwrap_or_default(),
                price,
                discount_percent: discount,
            })
            .await
            .map_err(|error| format!("failed to seed '{key}': {error}"))?;

        println!("seeded {} {}", food.uuid, food.name);
    }

    Ok(())
}

async fn migrate(args: DatabaseArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to run migrations: {error}"))?;

    println!("migrations applied");

    Ok(())
}
