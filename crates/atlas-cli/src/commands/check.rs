use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CheckResponse<'a> {
    status: &'static str,
    database: &'a str,
    foreign_keys: bool,
    countries: usize,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.check_connection().await?;
    let response = CheckResponse {
        status: "ok",
        database: &ctx.config.database.path,
        foreign_keys: ctx.config.database.foreign_keys,
        countries: ctx.session.summaries().len(),
    };
    output(&response, flags.format)
}
