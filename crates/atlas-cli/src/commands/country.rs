use atlas_core::drafts::CountryDraft;
use atlas_editor::DeleteOutcome;
use serde::Serialize;

use crate::cli::{CountryFields, GlobalFlags};
use crate::context::AppContext;
use crate::output::{output, output_snapshot};

#[derive(Serialize)]
struct DeleteResponse<'a> {
    code: &'a str,
    deleted: bool,
    languages_removed: u64,
}

pub async fn add(
    code: &str,
    fields: &CountryFields,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut draft = ctx.session.begin_add_country()?.clone();
    draft.code = code.to_string();
    fields.apply(&mut draft);
    save(draft, ctx, flags).await
}

pub async fn edit(
    code: &str,
    fields: &CountryFields,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session.select_country(code).await?;
    let mut draft = ctx.session.begin_edit_country()?.clone();
    fields.apply(&mut draft);
    save(draft, ctx, flags).await
}

async fn save(draft: CountryDraft, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.session.save_country(draft).await?;
    output_snapshot(snapshot, flags.format)
}

pub async fn delete(
    code: &str,
    yes: bool,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session.select_country(code).await?;
    ctx.confirm_with(yes);

    let response = match ctx.session.delete_country(code).await? {
        DeleteOutcome::Deleted(report) => DeleteResponse {
            code,
            deleted: true,
            languages_removed: report.languages_removed,
        },
        DeleteOutcome::Declined => DeleteResponse {
            code,
            deleted: false,
            languages_removed: 0,
        },
    };
    output(&response, flags.format)
}
