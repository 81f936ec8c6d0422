use crate::cache::CacheManager;
use crate::cli::{CacheArgs, CacheCommands};
use crate::error::Result;

pub async fn run(args: CacheArgs) -> Result<()> {
    let manager = CacheManager::new()?;
    match args.command {
        CacheCommands::Path => {
            println!("{}", manager.get_cache_path().display());
        }
        CacheCommands::Clear => {
            if manager.clear()? {
                println!("✓ Cleared cache at {}", manager.get_cache_path().display());
            } else {
                println!("Cache at {} is already empty.", manager.get_cache_path().display());
            }
        }
    }
    Ok(())
}
