use anyhow::Result;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(
    session: &mut Session,
    name: Option<String>,
    whatsapp: Option<String>,
    instagram: Option<String>,
) -> Result<()> {
    let changed = name.is_some() || whatsapp.is_some() || instagram.is_some();

    let state = &mut session.state;
    if let Some(name) = name {
        state.store_name = name;
    }
    if let Some(whatsapp) = whatsapp {
        state.whatsapp = whatsapp;
    }
    if let Some(instagram) = instagram {
        state.instagram = instagram;
    }

    if changed {
        session.save();
        println!("{}", "  Store details saved".green());
    }

    let state = &session.state;
    println!("  {}  {}", "Loja:".dimmed(), state.store_name);
    println!("  {}  {}", "WhatsApp:".dimmed(), or_none(&state.whatsapp));
    println!("  {}  {}", "Instagram:".dimmed(), or_none(&state.instagram));

    Ok(())
}

fn or_none(value: &str) -> &str {
    if value.is_empty() { "(none)" } else { value }
}
