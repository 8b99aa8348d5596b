use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// Third-party crates that are chatty at info
const NOISY: &[(&str, &str)] = &[("hyper", "warn"), ("hyper_util", "warn"), ("reqwest", "warn"), ("h2", "warn")];

pub fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    let mut directives = vec![level.to_string()];
    for (target, lvl) in NOISY {
        directives.push(format!("{}={}", target, lvl));
    }

    let filter_str = directives.join(",");
    EnvFilter::try_new(&filter_str)
        .map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", filter_str, e))
}

pub fn init_logging(level: &str) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(build_env_filter(level)?)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
