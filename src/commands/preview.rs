use anyhow::Result;
use cupom_core::coupon::CouponKind;
use cupom_core::validate::validate;
use owo_colors::OwoColorize;

use crate::render::{framed, short_id, Render};
use crate::session::Session;

pub fn run(session: &Session, kind: CouponKind, unify: bool) -> Result<()> {
    let unify = session.unify(unify);
    let width = session.config.paper_width;

    let receipt = session.layout(kind, unify);
    println!("{}", framed(&receipt.render_text(width), width));

    if kind != CouponKind::Events {
        return Ok(());
    }

    // Invalid values are printed as entered; point them out here.
    for event in session.state.events.records().iter().filter(|e| e.is_active) {
        let errors = validate(event);
        if errors.is_empty() {
            continue;
        }
        println!("{}", format!("  {} {}", "!".yellow(), short_id(&event.id)).bold());
        for error in errors {
            println!("     {}", error.render());
        }
    }

    Ok(())
}
