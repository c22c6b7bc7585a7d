use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, output_snapshot};

pub async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.session.summaries(), flags.format)
}

pub async fn show(code: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.session.select_country(code).await?;
    output_snapshot(snapshot, flags.format)
}

pub async fn languages(code: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // Surface an unknown code as not found rather than an empty list.
    ctx.session.load_country_detail(code).await?;
    let languages = ctx.session.list_languages(code).await?;
    output(&languages, flags.format)
}

pub async fn continents(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let continents = ctx.session.list_categories().await?;
    output(&continents, flags.format)
}
