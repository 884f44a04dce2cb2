use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shelfchef_core::{generate_with_rng, Recipe, DEFAULT_MAX_RECIPES};

#[derive(Parser)]
#[command(name = "shelfchef")]
#[command(about = "ShelfChef CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest recipes for the ingredients you have on hand
    Suggest {
        /// Comma-separated ingredient list, e.g. "eggs, cheese, onion"
        ingredients: String,
        /// Maximum number of recipes to show
        #[arg(long, default_value_t = DEFAULT_MAX_RECIPES)]
        limit: usize,
        /// Seed for the match-percentage variation, for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest {
            ingredients,
            limit,
            seed,
        } => suggest(&ingredients, limit, seed),
    }
}

fn suggest(ingredients: &str, limit: usize, seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let recipes = generate_with_rng(ingredients, limit, &mut rng);

    if recipes.is_empty() {
        println!("No recipes found for those ingredients.");
        return;
    }

    let rendered: Vec<String> = recipes.iter().map(render_recipe).collect();
    println!("{}", rendered.join("\n\n"));
}

fn render_recipe(recipe: &Recipe) -> String {
    let mut lines = vec![
        format!("{} ({}% match)", recipe.name, recipe.match_percentage),
        format!("  {}", recipe.description),
        format!(
            "  {} | {} | {}",
            recipe.cook_time, recipe.servings, recipe.difficulty
        ),
        format!("  You have: {}", recipe.available_ingredients.join(", ")),
    ];
    if !recipe.missing_ingredients.is_empty() {
        lines.push(format!(
            "  You need: {}",
            recipe.missing_ingredients.join(", ")
        ));
    }
    lines.push("  Steps:".to_string());
    for (step, line) in recipe.instructions.iter().enumerate() {
        lines.push(format!("    {}. {}", step + 1, line));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_recipe() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let recipes = generate_with_rng("eggs, cheese", 1, &mut rng);
        let rendered = render_recipe(&recipes[0]);

        assert!(rendered.starts_with("Classic Omelet ("));
        assert!(rendered.contains("% match)"));
        assert!(rendered.contains("You have: "));
        assert!(rendered.contains("  Steps:"));
        assert!(rendered.contains("1. "));
    }
}
