use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use dn_core::{DatasetStore, Result};
use dn_inference::phrases::DEFAULT_PHRASE_COUNT;
use dn_inference::{create_model, Config, PhraseGenerator, Summarizer};
use dn_scraper::{ArticleSource, NewsFetcher, NewsPipeline};
use dn_storage::{FileStore, MemoryStore};
use dn_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Storage backend to use. Available backends: file (default), memory
    #[arg(long, default_value = "file")]
    storage: String,

    /// Path of the JSON document when using file storage
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Model to use for inference. Available models: openai (default), dummy
    #[arg(long, default_value = "openai")]
    model: String,

    /// Base URL of an OpenAI-compatible API
    #[arg(long)]
    model_url: Option<String>,

    /// Listing page to scrape for daily news
    #[arg(long)]
    news_url: Option<String>,

    /// Number of phrases to generate per article
    #[arg(long, default_value_t = DEFAULT_PHRASE_COUNT)]
    phrases: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, default_value = "0.0.0.0:3000")]
        listen: SocketAddr,
    },
    /// Run one fetch-summarize-persist cycle and exit
    Run,
    /// Print the stored dataset
    Show,
}

fn create_store(cli: &Cli) -> Result<Arc<dyn DatasetStore>> {
    match cli.storage.as_str() {
        "file" => Ok(Arc::new(match &cli.data_file {
            Some(path) => FileStore::new(path.clone()),
            None => FileStore::default(),
        })),
        "memory" => Ok(Arc::new(MemoryStore::new())),
        other => Err(dn_core::Error::Storage(format!(
            "Unknown storage backend: {}",
            other
        ))),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let store = create_store(&cli)?;
    info!("💾 Storage initialized (using {})", cli.storage);

    let config = Config {
        api_key: std::env::var("OPENAI_API_KEY").ok(),
        model_name: None,
        base_url: cli.model_url.clone(),
    };
    let model = create_model(&cli.model, config)?;
    info!("🧠 Inference model initialized (using {})", model.name());

    let fetcher: Arc<dyn ArticleSource> = Arc::new(match &cli.news_url {
        Some(url) => NewsFetcher::with_base_url(url.clone()),
        None => NewsFetcher::new(),
    });

    let summarizer = Summarizer::new(model.clone());
    let generator = PhraseGenerator::new(model);
    let pipeline = NewsPipeline::new(fetcher, summarizer.clone(), generator.clone(), store.clone())
        .with_phrase_count(cli.phrases);

    match cli.command {
        Commands::Serve { listen } => {
            let state = AppState {
                pipeline,
                store,
                summarizer,
                generator,
            };
            let app = dn_web::create_app(state).await;
            info!("🌐 Listening on {}", listen);
            let listener = tokio::net::TcpListener::bind(listen).await?;
            axum::serve(listener, app).await?;
        }
        Commands::Run => {
            let dataset = pipeline.run().await?;
            info!("✅ Processed and saved {} articles", dataset.news.len());
        }
        Commands::Show => {
            let dataset = store.load().await?;
            println!("{}", serde_json::to_string_pretty(&dataset)?);
        }
    }

    Ok(())
}
