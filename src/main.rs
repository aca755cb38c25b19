use kinship::{RelationshipEngine, Result};
use log::{info, warn};
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((snapshot_path, queries)) = args.split_first() else {
        warn!("Usage: kinship <snapshot.json> <name> [<other name>]");
        return Ok(());
    };

    let start = Instant::now();
    let engine = RelationshipEngine::from_path(Path::new(snapshot_path))?;
    info!("Loaded family tree in {:?}", start.elapsed());

    match queries {
        [first, second] => println!("{}", engine.resolve_relationship(first, second)),
        [name] => match kinship::find_by_name(engine.tree(), name) {
            Some(individual) => {
                let lineage = engine.get_relatives(&individual.id);
                println!("{}", serde_json::to_string_pretty(&lineage)?);
            }
            None => println!("{}", kinship::ResolveError::NotFound),
        },
        _ => warn!("Expected one name for a relative listing or two names for a relationship"),
    }
    Ok(())
}
