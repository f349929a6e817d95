use std::env;
use std::fs;

use log::debug;

use recipe_forge::{assemble_recipe, paginate_lines, LimitPolicy, RecipeDraft};

const LIST_HEADER: &str = "Id  Title";
const LIST_EMPTY: &str = "No recipes saved yet.";
const USAGE: &str = "Usage: recipe-forge <draft.json> | recipe-forge --list <rows-file>";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("--list") => {
            let path = args.get(2).ok_or(USAGE)?;
            let limits = LimitPolicy::load()?;

            let rows: Vec<String> = fs::read_to_string(path)?
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect();
            debug!("paginating {} rows", rows.len());

            let pages = paginate_lines(LIST_HEADER, LIST_EMPTY, &rows, &limits)?;
            for (index, page) in pages.iter().enumerate() {
                if index > 0 {
                    // Form feed so downstream tooling can split the pages.
                    println!("\u{c}");
                }
                println!("{page}");
            }
        }
        Some(path) => {
            let limits = LimitPolicy::load()?;
            let draft: RecipeDraft = serde_json::from_str(&fs::read_to_string(path)?)?;

            let recipe = assemble_recipe(&draft, &limits)?;
            debug!("recipe total length: {} chars", recipe.total_length());
            println!("{}", serde_json::to_string_pretty(&recipe)?);
        }
        None => return Err(USAGE.into()),
    }

    Ok(())
}
