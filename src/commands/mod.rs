//! Built-in bot commands.
//!
//! Handlers are platform-free: they take a [`CommandContext`] and return
//! the reply text. Permission flags and the originating channel come from
//! the collaborator that feeds the dispatcher (a platform gateway, or the
//! CLI's `exec` subcommand).

mod report;
mod settings;
mod tasks;


use crate::i18n::Translator;
use tarefa_core::config::Config;
use tarefa_store::TaskStore;

/// Grouped context for command execution.
pub struct CommandContext<'a> {
    pub store: &'a TaskStore,
    pub translator: &'a Translator,
    pub config: &'a Config,
    pub channel: &'a str,
    pub sender_id: &'a str,
    pub text: &'a str,
    pub is_admin: bool,
}

/// Known bot commands.
pub enum Command {
    Mark,
    AdmTask,
    ResetAllTasks,
    Report,
    SetLanguage,
    Help,
}

impl Command {
    /// Parse a command from message text. Returns `None` for unknown `/`
    /// prefixes (which pass through to the host platform).
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        // Strip @botname suffix (e.g. "/mark@tarefa_bot" → "/mark").
        let cmd = first.split('@').next().unwrap_or(first);
        match cmd {
            "/mark" => Some(Self::Mark),
            "/admtask" => Some(Self::AdmTask),
            "/resetalltasks" => Some(Self::ResetAllTasks),
            "/report" | "/info" => Some(Self::Report),
            "/setlanguage" | "/language" => Some(Self::SetLanguage),
            "/help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Handle a command and return the response text.
pub async fn handle(cmd: Command, ctx: &CommandContext<'_>) -> String {
    match cmd {
        Command::Mark => tasks::handle_mark(ctx).await,
        Command::AdmTask => tasks::handle_admtask(ctx).await,
        Command::ResetAllTasks => tasks::handle_reset_all(ctx).await,
        Command::Report => report::handle_report(ctx).await,
        Command::SetLanguage => settings::handle_set_language(ctx).await,
        Command::Help => report::handle_help(ctx),
    }
}

/// Whether the command arrived on an allowed channel. An empty allowlist
/// means unrestricted.
fn channel_allowed(ctx: &CommandContext<'_>) -> bool {
    let allowed = &ctx.config.channels.allowed;
    allowed.is_empty() || allowed.iter().any(|c| c == ctx.channel)
}

/// Arguments after the command word.
fn args(text: &str) -> Vec<&str> {
    text.split_whitespace().skip(1).collect()
}
