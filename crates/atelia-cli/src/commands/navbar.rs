use anyhow::{Context, Result};
use serde::Serialize;

use atelia_core::AppConfig;
use atelia_ui::{NavbarController, Visibility};

#[derive(Serialize)]
struct Step {
    y: f64,
    hidden: bool,
    changed: bool,
}

fn parse_samples(input: &str) -> Result<Vec<f64>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("Invalid scroll offset: {}", s))
        })
        .collect()
}

/// Run each sample through its own scroll event and frame
pub fn run(config: &AppConfig, samples: &str, menu_open: bool, json: bool) -> Result<()> {
    let samples = parse_samples(samples)?;
    let mut navbar = NavbarController::new(&config.navbar, 0.0);

    let steps: Vec<Step> = samples
        .iter()
        .map(|&y| {
            let changed = navbar.sample(y, menu_open).is_some();
            Step {
                y,
                hidden: navbar.visibility() == Visibility::Hidden,
                changed,
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    for step in &steps {
        let marker = if step.changed { " *" } else { "" };
        let state = if step.hidden { "hidden" } else { "visible" };
        println!("  y = {:>8.1}  {}{}", step.y, state, marker);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_samples() {
        assert_eq!(parse_samples("0, 50,65,10").unwrap(), vec![0.0, 50.0, 65.0, 10.0]);
        assert_eq!(parse_samples("").unwrap(), Vec::<f64>::new());
        assert!(parse_samples("12,abc").is_err());
    }
}
