use bodygraph::utils::{logger, validation::Validate};
use bodygraph::{
    adapters, BoundedChartCache, ChartEngine, CliConfig, ConfigProvider, LocalStorage, Storage,
    TomlConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting bodygraph");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // Engine settings come either from a TOML file or from the flags.
    let (sources, cache_capacity, output_path) = if let Some(path) = &cli.config {
        let file = TomlConfig::from_file(path)?;
        if let Err(e) = file.validate() {
            tracing::error!("❌ Config file validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
        (
            adapters::default_sources(&file)?,
            file.cache_capacity(),
            file.output_path().to_string(),
        )
    } else {
        if let Err(e) = cli.validate() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
        (
            adapters::default_sources(&cli)?,
            cli.cache_capacity(),
            cli.output_path().to_string(),
        )
    };

    let birth = cli.birth_data();
    let engine = ChartEngine::new(sources, BoundedChartCache::new(cache_capacity));

    match engine.compute(&birth).await {
        Ok(chart) => {
            let json = serde_json::to_string_pretty(&chart)?;
            let storage = LocalStorage::new(output_path.clone());
            storage.write_file("chart.json", json.as_bytes()).await?;

            tracing::info!("✅ Chart computed successfully!");
            println!("✅ Chart computed successfully!");
            println!("   Type:       {}", chart.energy_type.label());
            println!("   Strategy:   {}", chart.strategy);
            println!("   Profile:    {}", chart.profile);
            println!("   Definition: {}", chart.definition.label());
            println!("   Cross:      {}", chart.incarnation_cross.name);
            if chart.approximate {
                println!("   (positions approximated; remote service unavailable)");
            }
            println!("📁 Output saved to: {}/chart.json", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Chart computation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    }

    Ok(())
}
