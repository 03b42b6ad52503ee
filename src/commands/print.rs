use std::path::PathBuf;

use anyhow::{Context, Result};
use cupom_core::coupon::CouponKind;
use owo_colors::OwoColorize;
use tracing::info;

use crate::session::Session;

pub fn run(
    session: &Session,
    kind: CouponKind,
    unify: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let unify = session.unify(unify);
    let text = session
        .layout(kind, unify)
        .render_text(session.config.paper_width);

    match output {
        Some(path) => {
            std::fs::write(&path, &text)
                .with_context(|| format!("Could not write {}", path.display()))?;
            info!(path = %path.display(), ?kind, "receipt written");
            eprintln!("{}", format!("  Written to {}", path.display()).green());
        }
        None => print!("{text}"),
    }

    Ok(())
}
