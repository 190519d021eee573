use homestretch::core::clock;
use homestretch::core::config::CountdownConfig;
use homestretch::runtime::Runtime;
use homestretch::state::AppState;
use homestretch::store::{CHECK_COUNT_KEY, StatsStore};
use homestretch::terminal::Terminal;
use std::io;
use std::path::PathBuf;
use std::{env, fs};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let config = load_config().map_err(io::Error::other)?;

    let store = StatsStore::new(stats_path());
    // The counter is a statistic; a read-only disk never stops the show.
    let check_count = match store.increment(CHECK_COUNT_KEY) {
        Ok(count) => count,
        Err(e) => {
            eprintln!("warning: could not update {}: {e}", store.path().display());
            store.counter(CHECK_COUNT_KEY)
        }
    };

    let state = AppState::new(config, check_count, clock::system_now_millis());
    let terminal = Terminal::new()?;
    Runtime::new(state, terminal).run()
}

fn load_config() -> Result<CountdownConfig, String> {
    let Some(path) = env::args().nth(1) else {
        return Ok(CountdownConfig::default());
    };
    let source = fs::read_to_string(&path).map_err(|e| format!("cannot read {path}: {e}"))?;
    CountdownConfig::load_from_yaml(&source)
}

fn stats_path() -> PathBuf {
    if let Ok(path) = env::var("HOMESTRETCH_STATS") {
        return PathBuf::from(path);
    }
    let mut path = env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push(".homestretch-stats.json");
    path
}
