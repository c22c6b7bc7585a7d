use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

pub mod browse;
pub mod check;
pub mod country;
pub mod language;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Check => check::run(ctx, flags).await,
        Commands::List => browse::list(ctx, flags).await,
        Commands::Show { code } => browse::show(&code, ctx, flags).await,
        Commands::Languages { code } => browse::languages(&code, ctx, flags).await,
        Commands::Continents => browse::continents(ctx, flags).await,
        Commands::Add { code, fields } => country::add(&code, &fields, ctx, flags).await,
        Commands::Edit { code, fields } => country::edit(&code, &fields, ctx, flags).await,
        Commands::Delete { code, yes } => country::delete(&code, yes, ctx, flags).await,
        Commands::AddLanguage {
            code,
            name,
            percentage,
            official,
        } => language::add(&code, &name, &percentage, official, ctx, flags).await,
        Commands::DeleteLanguage {
            code,
            language,
            yes,
        } => language::delete(&code, &language, yes, ctx, flags).await,
    }
}
