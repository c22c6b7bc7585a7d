use atlas_core::drafts::LanguageDraft;
use atlas_editor::DeleteOutcome;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, output_snapshot};

#[derive(Serialize)]
struct DeleteResponse<'a> {
    code: &'a str,
    language: &'a str,
    deleted: bool,
}

pub async fn add(
    code: &str,
    name: &str,
    percentage: &str,
    official: bool,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session.select_country(code).await?;
    ctx.session.begin_add_language()?;
    let snapshot = ctx
        .session
        .accept_language(LanguageDraft::new(name, official, percentage))
        .await?;
    output_snapshot(snapshot, flags.format)
}

pub async fn delete(
    code: &str,
    language: &str,
    yes: bool,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session.select_country(code).await?;
    ctx.confirm_with(yes);

    let deleted = matches!(
        ctx.session.delete_language(code, language).await?,
        DeleteOutcome::Deleted(())
    );
    output(
        &DeleteResponse {
            code,
            language,
            deleted,
        },
        flags.format,
    )
}
