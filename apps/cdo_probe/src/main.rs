use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use urania::{BodyPosition, CdoBuilder, ChartSnapshot, KnowledgeBase};
use urania_config::EngineSettings;

#[derive(Parser, Debug)]
#[command(author, version, about = "Build a Cosmic Data Object from a chart snapshot")]
struct Args {
    #[arg(help = "Path to a chart snapshot JSON file")]
    chart: PathBuf,

    #[arg(long, help = "Birth date (YYYY-MM-DD)")]
    birth_date: NaiveDate,

    #[arg(long, help = "Reference instant (RFC 3339), defaults to now")]
    reference: Option<DateTime<Utc>>,

    #[arg(long, help = "Path to a JSON array of transiting bodies")]
    transits: Option<PathBuf>,

    #[arg(long, help = "Override the knowledge directory from the config")]
    knowledge_dir: Option<PathBuf>,

    #[arg(long, help = "Print only the summary")]
    summary_only: bool,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (settings, config_error) = match urania_config::load_engine_settings() {
        Ok(settings) => (settings, None),
        Err(e) => (EngineSettings::default(), Some(e)),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(settings.log_level.as_str()))
        .init();
    if let Some(e) = config_error {
        log::warn!("{:#}; using default engine settings", e);
    }

    let knowledge_dir = args.knowledge_dir.as_deref().unwrap_or(settings.knowledge_dir.as_path());
    let knowledge = KnowledgeBase::load_or_default(knowledge_dir);

    let chart: ChartSnapshot = read_json(&args.chart)?;
    let transits = args
        .transits
        .as_deref()
        .map(read_json::<Vec<BodyPosition>>)
        .transpose()?;
    let reference = args.reference.unwrap_or_else(Utc::now);

    let builder = CdoBuilder::with_options(&knowledge, settings.to_build_options());
    let cdo = builder
        .build(&chart, args.birth_date, reference, transits.as_deref())
        .with_context(|| format!("Invalid chart snapshot {}", args.chart.display()))?;
    let summary = builder.summarize(&cdo);

    let output = if args.summary_only {
        serde_json::to_value(&summary)?
    } else {
        let remedies: serde_json::Map<String, serde_json::Value> = builder
            .remedies_for_afflictions(&cdo)
            .into_iter()
            .map(|(planet, remedy)| Ok((planet.to_string(), serde_json::to_value(remedy)?)))
            .collect::<Result<_, serde_json::Error>>()?;
        serde_json::json!({
            "cdo": cdo,
            "summary": summary,
            "remedies": remedies,
        })
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
