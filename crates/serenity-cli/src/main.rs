use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use serenity_cli::commands::{self, Verification};
use serenity_config::{DatabaseConfig, JwtConfig};
use serenity_db::{PgPool, PgUserStore, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "serenity-cli")]
#[command(about = "Serenity CLI - Administrative tools for the Serenity auth gate", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the embedded database migrations
    Migrate,
    /// Create a user
    CreateUser {
        #[arg(long)]
        id: String,

        #[arg(short = 'e', long)]
        email: String,

        #[arg(short = 'n', long)]
        name: Option<String>,

        /// user, admin or super_admin
        #[arg(short = 'r', long, default_value = "user")]
        role: String,
    },
    /// Change a user's role
    SetRole {
        #[arg(long)]
        id: String,

        /// user, admin or super_admin
        #[arg(short = 'r', long)]
        role: String,
    },
    /// Print a signed token for a user
    IssueToken {
        #[arg(short = 'u', long)]
        user_id: String,

        /// Issue a refresh token instead of an access token
        #[arg(long)]
        refresh: bool,

        /// Lifetime in seconds, overriding JWT_ACCESS_EXPIRY / JWT_REFRESH_EXPIRY
        #[arg(long, allow_negative_numbers = true)]
        ttl: Option<i64>,
    },
    /// Check a token the way the gate would, without looking up the user
    VerifyToken { token: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let jwt_config = JwtConfig::from_env();

    match cli.command {
        Commands::Migrate => {
            let pool = connect().await?;
            run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;
            println!("✅ Migrations applied");
        }
        Commands::CreateUser {
            id,
            email,
            name,
            role,
        } => {
            let store = PgUserStore::new(connect().await?);
            let user = commands::create_user(&store, &id, &email, name.as_deref(), &role).await?;
            println!("✅ User created");
            println!("   ID: {}", user.id);
            println!("   Email: {}", user.email);
            println!("   Role: {}", user.role);
        }
        Commands::SetRole { id, role } => {
            let store = PgUserStore::new(connect().await?);
            let user = commands::set_role(&store, &id, &role).await?;
            println!("✅ {} is now {}", user.id, user.role);
        }
        Commands::IssueToken {
            user_id,
            refresh,
            ttl,
        } => {
            println!(
                "{}",
                commands::issue_token(&user_id, refresh, ttl, &jwt_config)?
            );
        }
        Commands::VerifyToken { token } => {
            let now = chrono::Utc::now().timestamp();
            match commands::verify_token(&token, &jwt_config, now)? {
                Verification::Valid(payload) => {
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                }
                Verification::Rejected(code) => {
                    eprintln!("❌ Token rejected: {code}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

async fn connect() -> anyhow::Result<PgPool> {
    init_db_pool(&DatabaseConfig::from_env())
        .await
        .context("Failed to connect to database (is DATABASE_URL set?)")
}
