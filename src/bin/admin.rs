//! CLI administration tool for student-registry.
//!
//! Talks to MongoDB directly through the same repository and service the HTTP
//! server uses.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create the unique rollNumber index
//! cargo run --bin admin -- db init
//!
//! # Show one student
//! cargo run --bin admin -- student show 65f0c0ffee0000000000abcd
//!
//! # Create a student
//! cargo run --bin admin -- student create --roll-number R1 --name Ann --age 10 --class 5A
//! ```
//!
//! # Environment Variables
//!
//! - `MONGODB_URI` (optional): MongoDB connection string
//! - `MONGODB_CONNECT_TIMEOUT` (optional): timeout in seconds

use student_registry::config;
use student_registry::domain::repositories::StudentRepository;
use student_registry::infrastructure::persistence::{
    MongoStudentRepository, STUDENTS_COLLECTION, connect,
};
use student_registry::prelude::{NewStudent, Student, StudentService};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing student-registry.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Student records
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the unique rollNumber index
    Init,
}

/// Student subcommands.
#[derive(Subcommand)]
enum StudentAction {
    /// Show a student by identifier
    Show {
        /// MongoDB identifier (24 hex characters)
        id: String,
    },

    /// Create a student
    Create {
        #[arg(long)]
        roll_number: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        age: i32,

        #[arg(long)]
        class: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    let database = connect(&config.mongodb_uri, config.mongodb_connect_timeout())
        .await
        .with_context(|| {
            format!(
                "Failed to connect to {}",
                config::mask_connection_string(&config.mongodb_uri)
            )
        })?;

    let repository = MongoStudentRepository::new(database);

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &repository).await?,
        Commands::Student { action } => handle_student_action(action, repository).await?,
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, repo: &MongoStudentRepository) -> Result<()> {
    match action {
        DbAction::Check => {
            repo.ping()
                .await
                .map_err(|e| anyhow::anyhow!("Ping failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Database:   {}", repo.database_name().cyan());
            println!("  Collection: {}", STUDENTS_COLLECTION.cyan());
        }
        DbAction::Init => {
            repo.ensure_indexes()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create indexes: {}", e))?;

            println!("{}", "✅ Indexes ready".green().bold());
            println!("  {} (unique)", "rollNumber_1".cyan());
        }
    }

    Ok(())
}

/// Dispatches student commands.
async fn handle_student_action(action: StudentAction, repo: MongoStudentRepository) -> Result<()> {
    let service = StudentService::new(Arc::new(repo));

    match action {
        StudentAction::Show { id } => {
            let student = service
                .get_student(&id)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            match student {
                Some(student) => print_student(&student),
                None => println!("{}", format!("No student with id {id}").yellow()),
            }
        }
        StudentAction::Create {
            roll_number,
            name,
            age,
            class,
        } => {
            let student = service
                .create_student(NewStudent {
                    roll_number,
                    name,
                    age,
                    class,
                })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create student: {}", e))?;

            println!("{}", "✅ Student created".green().bold());
            print_student(&student);
        }
    }

    Ok(())
}

fn print_student(student: &Student) {
    println!("  ID:          {}", student.id.bright_black());
    println!("  Roll number: {}", student.roll_number.cyan());
    println!("  Name:        {}", student.name);
    println!("  Age:         {}", student.age);
    println!("  Class:       {}", student.class);
}
