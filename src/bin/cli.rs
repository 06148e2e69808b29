use dialoguer::Input;
use dotenvy::dotenv;
use nt::cli::{create_user, list_users, render_users};
use nt_config::DatabaseConfig;
use nt_db::init_db_pool;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nt-cli")]
#[command(about = "nt CLI - user administration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user account
    CreateUser {
        /// Display name (prompted if not provided)
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address (prompted if not provided)
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// List all users, oldest first
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let pool = init_db_pool(&DatabaseConfig::from_env()).await?;

    match cli.command {
        Commands::CreateUser { name, email } => {
            let name = match name {
                Some(name) => name,
                None => Input::<String>::new().with_prompt("Name").interact_text()?,
            };
            let email = match email {
                Some(email) => email,
                None => Input::<String>::new().with_prompt("Email address").interact_text()?,
            };

            match create_user(&pool, &name, &email).await {
                Ok(user) => {
                    println!("\n✅ User created successfully!");
                    println!("   ID: {}", user.id);
                    println!("   Email: {}", user.email);
                    println!("   Name: {}", user.name);
                }
                Err(e) => {
                    eprintln!("\n❌ Error creating user: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::ListUsers => {
            let users = list_users(&pool).await?;
            if users.is_empty() {
                println!("No users yet.");
            } else {
                print!("{}", render_users(&users));
            }
        }
    }

    Ok(())
}
