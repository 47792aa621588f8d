//! Catalog listing commands.

use crate::catalog::{furniture_in_category, FurnitureArchetype, FURNITURE_CATEGORIES, ROOM_ARCHETYPES};
use crate::cli::common::{to_json, CliError, CliResult};
use clap::{Args, Subcommand};

/// Browse the room and furniture catalogs
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Catalog subcommand
    #[command(subcommand)]
    pub command: CatalogCommand,
}

/// Catalog subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum CatalogCommand {
    /// List room archetypes
    Rooms(ListRoomsArgs),
    /// List furniture archetypes
    Furniture(ListFurnitureArgs),
}

/// List room archetypes
#[derive(Debug, Clone, Args)]
pub struct ListRoomsArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// List furniture archetypes
#[derive(Debug, Clone, Args)]
pub struct ListFurnitureArgs {
    /// Only this catalog category (living-room, bedroom, kitchen, bathroom)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl CatalogArgs {
    /// Execute the catalog command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            CatalogCommand::Rooms(args) => args.execute(),
            CatalogCommand::Furniture(args) => args.execute(),
        }
    }
}

impl ListRoomsArgs {
    fn execute(&self) -> CliResult<()> {
        if self.json {
            println!("{}", to_json(&ROOM_ARCHETYPES, true)?);
            return Ok(());
        }

        println!(
            "{:<10} {:>8} {:>7} {:>7} {:>7} {:>9} {:>9}",
            "CATEGORY", "MIN m²", "WIDTH", "DEPTH", "HEIGHT", "WALL", "FLOOR"
        );
        for archetype in &ROOM_ARCHETYPES {
            println!(
                "{:<10} {:>8.1} {:>7} {:>7} {:>7} {:>9} {:>9}",
                archetype.category.as_str(),
                archetype.min_area_m2,
                archetype.width,
                archetype.depth,
                archetype.height,
                archetype.color.to_hex(),
                archetype.floor_color.to_hex()
            );
        }
        Ok(())
    }
}

impl ListFurnitureArgs {
    fn execute(&self) -> CliResult<()> {
        let categories: Vec<&str> = match &self.category {
            Some(category) => {
                if !FURNITURE_CATEGORIES.contains(&category.as_str()) {
                    return Err(CliError::validation(format!(
                        "Unknown furniture category '{category}'. Expected one of: {}",
                        FURNITURE_CATEGORIES.join(", ")
                    )));
                }
                vec![category.as_str()]
            }
            None => FURNITURE_CATEGORIES.to_vec(),
        };

        if self.json {
            let items: Vec<&FurnitureArchetype> = categories
                .iter()
                .flat_map(|category| furniture_in_category(category))
                .collect();
            println!("{}", to_json(&items, true)?);
            return Ok(());
        }

        for category in categories {
            println!("{category}:");
            for item in furniture_in_category(category) {
                println!(
                    "  {:<16} {:<18} {:<10} {}x{}x{} mm",
                    item.id, item.name, item.kind, item.width, item.depth, item.height
                );
            }
        }
        Ok(())
    }
}
