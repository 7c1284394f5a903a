//! Aggregate report and help handlers: /report, /help.

use super::{channel_allowed, CommandContext};

pub(super) async fn handle_report(ctx: &CommandContext<'_>) -> String {
    let t = |key| ctx.translator.translate(key, ctx.sender_id, &[]);

    if !channel_allowed(ctx) {
        return t("mark.wrong_channel");
    }

    let statuses = match ctx.store.all_statuses().await {
        Ok(statuses) => statuses,
        Err(e) => {
            tracing::error!("failed to read task status: {e}");
            return t("errors.read_file");
        }
    };

    let mut completed = Vec::new();
    let mut missing = Vec::new();
    for (id, name) in &ctx.config.users {
        let record = statuses.get(id).copied().unwrap_or_default();
        if record.all_completed() {
            completed.push(name.as_str());
        } else {
            missing.push(name.as_str());
        }
    }

    let none = t("report.none");
    let completed_text = if completed.is_empty() {
        none.clone()
    } else {
        completed.join(", ")
    };
    let missing_text = if missing.is_empty() {
        none
    } else {
        missing.join(", ")
    };

    format!(
        "{}\n\n{}\n{completed_text}\n\n{}\n{missing_text}",
        t("report.title"),
        t("report.completed_all"),
        t("report.missing_some"),
    )
}

pub(super) fn handle_help(ctx: &CommandContext<'_>) -> String {
    let t = |key| ctx.translator.translate(key, ctx.sender_id, &[]);

    let mut out = format!(
        "{}\n{}\n\n{}\n/mark: {}\n/report: {}\n/setlanguage: {}\n/help: {}",
        t("help.title"),
        t("help.description"),
        t("help.section_user"),
        t("help.mark"),
        t("help.report"),
        t("help.setlanguage"),
        t("help.help"),
    );

    if ctx.is_admin {
        out.push_str(&format!(
            "\n\n{}\n/admtask: {}\n/resetalltasks: {}",
            t("help.section_admin"),
            t("help.admtask"),
            t("help.resetalltasks"),
        ));
    }

    out.push_str(&format!("\n\n{}", t("help.footer")));
    out
}
