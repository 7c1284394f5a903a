//! Task status command handlers: /mark, /admtask, /resetalltasks.

use super::{args, channel_allowed, CommandContext};
use tarefa_core::task::TaskIndex;

/// Parse the trailing status words: `completed` (the default when absent)
/// or `not completed`.
fn parse_status(words: &[&str]) -> Option<bool> {
    match words {
        [] | ["completed"] => Some(true),
        ["not", "completed"] => Some(false),
        _ => None,
    }
}

/// Localized label for a completion flag, in the viewer's language.
fn status_label(ctx: &CommandContext<'_>, completed: bool) -> String {
    let key = if completed {
        "labels.completed"
    } else {
        "labels.not_completed"
    };
    ctx.translator.translate(key, ctx.sender_id, &[])
}

pub(super) async fn handle_mark(ctx: &CommandContext<'_>) -> String {
    let t = |key| ctx.translator.translate(key, ctx.sender_id, &[]);

    if !channel_allowed(ctx) {
        return t("mark.wrong_channel");
    }

    let argv = args(ctx.text);
    let Some(index) = argv.first().and_then(|a| TaskIndex::parse(a)) else {
        return t("mark.invalid_task_number");
    };
    let Some(completed) = parse_status(&argv[1..]) else {
        return t("mark.invalid_status");
    };

    if !ctx.config.users.contains_key(ctx.sender_id) {
        return t("mark.user_not_found");
    }

    match ctx.store.set_task(ctx.sender_id, index, completed).await {
        Ok(()) => {
            let task = index.to_string();
            let status = status_label(ctx, completed);
            ctx.translator.translate(
                "mark.task_updated",
                ctx.sender_id,
                &[("task", task.as_str()), ("status", status.as_str())],
            )
        }
        Err(e) => {
            tracing::error!("failed to persist task status: {e}");
            t("mark.error_saving")
        }
    }
}

pub(super) async fn handle_admtask(ctx: &CommandContext<'_>) -> String {
    let t = |key| ctx.translator.translate(key, ctx.sender_id, &[]);

    if !ctx.is_admin {
        return t("errors.no_permission");
    }
    if !channel_allowed(ctx) {
        return t("mark.wrong_channel");
    }

    let argv = args(ctx.text);
    let Some(target) = argv.first().and_then(|a| resolve_user(ctx, a)) else {
        return t("admtask.unknown_user");
    };
    let Some(index) = argv.get(1).and_then(|a| TaskIndex::parse(a)) else {
        return t("errors.invalid_task");
    };
    let completed = match argv.get(2) {
        None => true,
        Some(&"cancel") => false,
        Some(_) => return t("admtask.usage"),
    };

    match ctx.store.set_task(&target, index, completed).await {
        Ok(()) => {
            let name = ctx
                .config
                .users
                .get(&target)
                .cloned()
                .unwrap_or_else(|| target.clone());
            let key = if completed {
                "admtask.task_completed"
            } else {
                "admtask.task_cancelled"
            };
            let task = index.to_string();
            ctx.translator.translate(
                key,
                ctx.sender_id,
                &[("task", task.as_str()), ("user", name.as_str())],
            )
        }
        Err(e) => {
            tracing::error!("failed to persist task status: {e}");
            t("errors.update_task")
        }
    }
}

pub(super) async fn handle_reset_all(ctx: &CommandContext<'_>) -> String {
    let t = |key| ctx.translator.translate(key, ctx.sender_id, &[]);

    if !ctx.is_admin {
        return t("errors.no_permission");
    }
    if !channel_allowed(ctx) {
        return t("mark.wrong_channel");
    }

    match ctx
        .store
        .reset_all(ctx.config.users.keys().map(String::as_str))
        .await
    {
        Ok(()) => t("reset.done"),
        Err(e) => {
            tracing::error!("failed to reset tasks: {e}");
            t("errors.update_task")
        }
    }
}

/// Resolve a target argument against the user directory: exact id first,
/// then exact display name.
fn resolve_user(ctx: &CommandContext<'_>, arg: &str) -> Option<String> {
    if ctx.config.users.contains_key(arg) {
        return Some(arg.to_string());
    }
    ctx.config
        .users
        .iter()
        .find(|(_, name)| name.as_str() == arg)
        .map(|(id, _)| id.clone())
}
