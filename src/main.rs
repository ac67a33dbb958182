use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cinematime::application::{
    CachingMovieLoader, DispatchingLoader, FallbackMovieLoader, LocalMovieLoader,
};
use cinematime::domain::Movie;
use cinematime::domain::ports::{
    CacheWriteCompletion, HttpClient, ImageLoadResult, MovieCache, MovieImageDataLoader,
    MovieStore, SystemClock, load_movies,
};
use cinematime::infrastructure::{
    AppConfig, AuthenticatedHttpClient, CliArgs, Command, ConfigLoader, FileMovieStore,
    InMemoryMovieStore, MainQueue, RemoteMovieImageDataLoader, RemoteMovieLoader,
    ReqwestHttpClient,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let loader = ConfigLoader::new()?;
    let mut config = loader.load(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn make_store(config: &AppConfig) -> Arc<dyn MovieStore> {
    match config.effective_cache_path() {
        Some(path) => Arc::new(FileMovieStore::new(path)),
        None => {
            warn!("No cache directory available, cache lives in memory only");
            Arc::new(InMemoryMovieStore::new())
        }
    }
}

/// Forwards saves and lets `main` wait for them before the runtime shuts down.
struct FlushingCache {
    cache: Arc<dyn MovieCache>,
    pending: Mutex<Vec<oneshot::Receiver<()>>>,
}

impl FlushingCache {
    fn new(cache: Arc<dyn MovieCache>) -> Self {
        Self {
            cache,
            pending: Mutex::new(Vec::new()),
        }
    }

    async fn flush(&self) {
        let pending = std::mem::take(&mut *self.pending.lock());
        for done in pending {
            let _ = done.await;
        }
    }
}

impl MovieCache for FlushingCache {
    fn save(&self, movies: Vec<Movie>, completion: CacheWriteCompletion) {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().push(rx);
        self.cache.save(
            movies,
            Box::new(move |result| {
                completion(result);
                let _ = tx.send(());
            }),
        );
    }
}

async fn now_playing(config: &AppConfig, page: u32) -> Result<()> {
    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| eyre!("missing API key, set TMDB_API_KEY or pass --api-key"))?;

    let http: Arc<dyn HttpClient> =
        Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout())?);
    let authenticated = Arc::new(AuthenticatedHttpClient::new(http, api_key));
    let remote = Arc::new(RemoteMovieLoader::new(
        config.now_playing_url(page)?,
        authenticated,
    ));

    let local = Arc::new(LocalMovieLoader::new(
        make_store(config),
        Arc::new(SystemClock),
    ));
    let cache = Arc::new(FlushingCache::new(local.clone()));
    let caching = Arc::new(CachingMovieLoader::new(remote, cache.clone()));
    let fallback = Arc::new(FallbackMovieLoader::new(caching, local));

    let (queue, mut receiver) = MainQueue::new();
    let loader = DispatchingLoader::new(fallback, Arc::new(queue));

    let result = receiver
        .run_until(load_movies(&loader))
        .await
        .ok_or_else(|| eyre!("movie loader was released before completing"))?;
    cache.flush().await;

    let movies = result.wrap_err("failed to load now playing movies")?;
    if movies.is_empty() {
        println!("No movies available.");
    }
    for movie in &movies {
        match movie.rating() {
            Some(rating) => println!("{movie}  [{rating:.1}]"),
            None => println!("{movie}"),
        }
        if let Some(path) = movie.image_path() {
            println!("    poster: {path}");
        }
    }

    info!(count = movies.len(), "Listed now playing movies");
    Ok(())
}

async fn poster(config: &AppConfig, path: &str, output: &Path) -> Result<()> {
    let http: Arc<dyn HttpClient> =
        Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout())?);
    let loader = RemoteMovieImageDataLoader::new(config.image_base()?, http);

    let (tx, rx) = oneshot::channel::<ImageLoadResult>();
    let task = loader.load(
        path,
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    );

    let bytes = tokio::select! {
        result = rx => result.wrap_err("image load was abandoned")??,
        _ = tokio::signal::ctrl_c() => {
            task.cancel();
            return Err(eyre!("poster download cancelled"));
        }
    };

    tokio::fs::write(output, &bytes)
        .await
        .wrap_err_with(|| format!("failed to write {}", output.display()))?;

    println!("Saved {} bytes to {}", bytes.len(), output.display());
    Ok(())
}

async fn validate_cache(config: &AppConfig) -> Result<()> {
    let local = LocalMovieLoader::new(make_store(config), Arc::new(SystemClock));

    let (tx, rx) = oneshot::channel();
    local.validate_cache(Box::new(move |result| {
        let _ = tx.send(result);
    }));
    rx.await
        .wrap_err("cache validation was abandoned")?
        .wrap_err("failed to validate cache")?;

    println!("Cache validated.");
    Ok(())
}

async fn clear_cache(config: &AppConfig) -> Result<()> {
    make_store(config)
        .delete_cached_movies()
        .await
        .wrap_err("failed to clear cache")?;

    println!("Cache cleared.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = cinematime::VERSION, "Starting {}", cinematime::NAME);

    match &args.command {
        Command::NowPlaying { page } => now_playing(&config, *page).await,
        Command::Poster { path, output } => poster(&config, path, output).await,
        Command::ValidateCache => validate_cache(&config).await,
        Command::ClearCache => clear_cache(&config).await,
    }
}
