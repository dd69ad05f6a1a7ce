//! Pocketfin CLI - personal finance in your terminal

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod output;

use commands::{add, dark, list, login, logout, register, remove, status, summary};

/// Pocketfin - personal finance in your terminal
#[derive(Parser)]
#[command(name = "pf", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Transaction kind as a CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and log in
    Register {
        /// Display name (prompted if omitted)
        #[arg(long)]
        name: Option<String>,
        /// Email address (prompted if omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Log in to an existing account
    Login {
        /// Email address (prompted if omitted)
        email: Option<String>,
        /// Keep the session across shells
        #[arg(long)]
        remember: bool,
    },

    /// Log out and clear the stored session
    Logout,

    /// Show the active session and dashboard overview
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record a transaction
    Add {
        /// Short description
        title: String,
        /// Amount (sign is ignored; the kind carries it)
        amount: String,
        /// Calendar date, defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Category label
        #[arg(long, default_value = "Other")]
        category: String,
        /// income or expense
        #[arg(long, value_enum, default_value = "expense")]
        kind: KindArg,
    },

    /// Delete a transaction by id
    Remove {
        /// Transaction id
        id: String,
    },

    /// List transactions, newest first
    List {
        /// Restrict to a month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
        /// Restrict to a category
        #[arg(long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show totals, progress meters, and the chart breakdown
    Summary {
        /// Restrict to a month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
        /// Restrict to a category
        #[arg(long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle dark mode
    Dark {
        /// on or off
        #[arg(value_parser = ["on", "off"])]
        state: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    output::init_colors();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Register { name, email } => register::run(name, email).await,
        Commands::Login { email, remember } => login::run(email, remember).await,
        Commands::Logout => logout::run(),
        Commands::Status { json } => status::run(json),
        Commands::Add {
            title,
            amount,
            date,
            category,
            kind,
        } => add::run(&title, &amount, date.as_deref(), &category, kind),
        Commands::Remove { id } => remove::run(&id),
        Commands::List {
            month,
            category,
            json,
        } => list::run(month, category, json),
        Commands::Summary {
            month,
            category,
            json,
        } => summary::run(month, category, json),
        Commands::Dark { state } => dark::run(&state),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
