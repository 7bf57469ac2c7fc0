#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use anyhow::{Context, Result};
use clap::Parser;

use gridmean::cli::CliArgs;
use gridmean::GridConfig;

fn main() -> Result<()> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    let args = CliArgs::parse();
    gridmean::tracing::init(args.verbose);

    let config = args.into_config(&GridConfig::load());
    let stdout = std::io::stdout();
    let mut console = stdout.lock();

    gridmean::run(&config, &mut console)
        .with_context(|| format!("processing {}", config.input.display()))?;

    Ok(())
}
