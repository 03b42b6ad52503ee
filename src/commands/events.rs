use anyhow::Result;
use cupom_core::derive_display_list;
use cupom_core::policy::FieldPolicy;
use cupom_core::validate::validate;
use cupom_core::MAX_EVENTS;
use owo_colors::OwoColorize;

use crate::render::{short_id, Render};
use crate::session::Session;

pub fn run(session: &Session, json: bool, unify: bool) -> Result<()> {
    let unify = session.unify(unify);
    let events = &session.state.events;

    if json {
        let display = derive_display_list(events.records(), unify);
        println!("{}", serde_json::to_string_pretty(&display)?);
        return Ok(());
    }

    for (i, event) in events.records().iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {} {}",
            format!("{}.", i + 1).bold(),
            event.render(),
            short_id(&event.id).dimmed()
        );

        let policy = FieldPolicy::for_record(event.category, unify);
        println!("   {}", policy.render());
        for error in validate(event) {
            println!("   {}", error.render());
        }
    }

    println!();
    if events.has_themed() {
        let state = if unify { "on" } else { "off" };
        println!(
            "{}",
            format!("Same theme for every Saturday of the month: {state} (--unify)").dimmed()
        );
    }
    if events.is_full() {
        println!(
            "{}",
            format!("{MAX_EVENTS} of {MAX_EVENTS} events, remove one to add another").dimmed()
        );
    }

    Ok(())
}
