mod commands;
mod i18n;

use clap::{Parser, Subcommand};
use tarefa_core::config;
use tarefa_core::lang::LanguageCode;
use tarefa_store::{LanguagePrefs, TaskStore};

#[derive(Parser)]
#[command(
    name = "tarefa",
    version,
    about = "Tarefa — localized task-tracking bot core"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch one slash-command line as a given user.
    Exec {
        /// Platform user id of the caller.
        #[arg(short, long)]
        user: String,
        /// Channel the command arrives on.
        #[arg(long, default_value = "")]
        channel: String,
        /// Treat the caller as an administrator.
        #[arg(long)]
        admin: bool,
        /// The command text (e.g. "/mark 2 completed").
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Show configuration and data-file status.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = config::load(&cli.config)?;

    match cli.command {
        Commands::Exec {
            user,
            channel,
            admin,
            text,
        } => {
            if text.is_empty() {
                anyhow::bail!("no command provided. Usage: tarefa exec --user <id> <text>");
            }
            let text = text.join(" ");

            let store = TaskStore::new(cfg.tasks_path());
            let prefs = LanguagePrefs::new(cfg.language_data_path());
            let translator = i18n::Translator::new(
                config::shellexpand(&cfg.language.locales_dir),
                cfg.language.default,
                prefs,
            );

            let ctx = commands::CommandContext {
                store: &store,
                translator: &translator,
                config: &cfg,
                channel: &channel,
                sender_id: &user,
                text: &text,
                is_admin: admin,
            };

            match commands::Command::parse(&text) {
                Some(cmd) => println!("{}", commands::handle(cmd, &ctx).await),
                None => anyhow::bail!("unknown command: {text}"),
            }
        }
        Commands::Status => {
            println!("Tarefa — Status\n");
            println!("Config: {}", cli.config);
            println!("Default language: {}", cfg.language.default);
            println!("Tracked users: {}", cfg.users.len());

            let tasks_path = cfg.tasks_path();
            println!(
                "Task document: {} ({})",
                tasks_path.display(),
                if tasks_path.exists() {
                    "present"
                } else {
                    "not created yet"
                }
            );
            println!();

            let locales_dir = config::shellexpand(&cfg.language.locales_dir);
            for code in LanguageCode::ALL {
                let path = std::path::Path::new(&locales_dir).join(format!("{code}.json"));
                println!(
                    "  locale {code}: {}",
                    if path.exists() { "found" } else { "missing" }
                );
            }
        }
    }

    Ok(())
}
