//! Preference command handlers: /setlanguage.

use super::{args, CommandContext};
use tarefa_core::lang::LanguageCode;

pub(super) async fn handle_set_language(ctx: &CommandContext<'_>) -> String {
    let argv = args(ctx.text);
    let Some(code) = argv.first().and_then(|a| LanguageCode::parse(a)) else {
        return ctx
            .translator
            .translate("setlanguage.invalid_language", ctx.sender_id, &[]);
    };

    let current = ctx.translator.resolve_language(ctx.sender_id);
    if code == current {
        return ctx.translator.translate(
            "setlanguage.already_selected",
            ctx.sender_id,
            &[("lang", code.as_str())],
        );
    }

    match ctx.translator.set_language(ctx.sender_id, code).await {
        // Confirm in the language just selected.
        Ok(()) => ctx.translator.translate(
            "setlanguage.changed",
            ctx.sender_id,
            &[("lang", code.as_str())],
        ),
        Err(e) => {
            tracing::error!("failed to persist language preference: {e}");
            ctx.translator
                .translate("setlanguage.error_saving", ctx.sender_id, &[])
        }
    }
}
