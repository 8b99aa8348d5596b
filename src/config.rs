use clap::Parser;
use std::time::Duration;

// CLI argument structure, every flag can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "peptidehub-gateway")]
#[command(about = "Throttling gateway for PeptideHub password resets")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    // Base URL of the hosted auth backend
    #[arg(short, long, env = "PEPTIDEHUB_AUTH_URL", default_value = "http://localhost:54321")]
    pub auth_url: String,

    // Public (anon) API key sent to the auth backend
    #[arg(long, env = "PEPTIDEHUB_ANON_KEY", default_value = "", hide_env_values = true)]
    pub anon_key: String,

    // Where the reset email link sends the user
    #[arg(
        long,
        env = "PEPTIDEHUB_RESET_REDIRECT",
        default_value = "http://localhost:5173/auth/reset-password"
    )]
    pub redirect_url: String,

    // Timeout for calls to the auth backend, in seconds
    #[arg(long, env = "PEPTIDEHUB_UPSTREAM_TIMEOUT", default_value_t = 10)]
    pub upstream_timeout: u64,

    // Log filter, e.g. "info" or "peptidehub_gateway=debug"
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }

    // Auth URL without trailing slash, "http://" added when missing
    pub fn auth_base_url(&self) -> String {
        let url = self.auth_url.trim().trim_end_matches('/');
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("http://{}", url)
        }
    }
}
