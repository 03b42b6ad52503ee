use anyhow::{bail, Result};
use cupom_core::config::CupomConfig;
use owo_colors::OwoColorize;

/// Narrower than this and a date line no longer fits.
const MIN_PAPER_WIDTH: usize = 24;

pub fn run(paper_width: Option<usize>, brand: Option<String>, unify: Option<bool>) -> Result<()> {
    let mut config = CupomConfig::load()?;
    let changed = paper_width.is_some() || brand.is_some() || unify.is_some();

    if let Some(width) = paper_width {
        if width < MIN_PAPER_WIDTH {
            bail!("Paper width must be at least {MIN_PAPER_WIDTH} characters");
        }
        config.paper_width = width;
    }
    if let Some(brand) = brand {
        config.brand = brand;
    }
    if let Some(unify) = unify {
        config.unify_themed_saturdays = unify;
    }

    if changed {
        config.save()?;
        println!("{}", "  Configuration saved".green());
    }

    println!("  {}  {}", "config:".dimmed(), CupomConfig::config_path()?.display());
    println!("  {}  {}", "state file:".dimmed(), config.state_path().display());
    println!("  {}  {}", "paper width:".dimmed(), config.paper_width);
    println!("  {}  {}", "brand:".dimmed(), config.brand);
    println!("  {}  {}", "unify themed saturdays:".dimmed(), config.unify_themed_saturdays);

    Ok(())
}
