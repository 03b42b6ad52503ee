use anyhow::Result;
use cupom_core::policy::FieldPolicy;
use cupom_core::preset::Preset;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::session::Session;

pub fn run(session: &Session) -> Result<()> {
    for preset in Preset::all() {
        let date = preset.default_date(session.today);
        println!("{}", preset.render());
        println!(
            "   {} {}",
            format!("next date: {}", date.format("%Y-%m-%d")).dimmed(),
            FieldPolicy::for_category(preset.category).render()
        );
    }
    Ok(())
}
