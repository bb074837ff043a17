use crate::commands::CmdResult;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::query::FilterSpec;
use crate::url_state;

/// Builds the shareable link for `spec` on the configured page.
pub fn run(spec: &FilterSpec, config: &CatalogConfig) -> Result<CmdResult> {
    let base = config.share_base()?;
    let url = url_state::shareable_url(&base, spec);
    Ok(CmdResult::default()
        .with_spec(spec.clone())
        .with_share_url(url))
}
