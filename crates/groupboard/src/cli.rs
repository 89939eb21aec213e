//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::Parser;

use groupboard_client::DEFAULT_API_BASE;

/// Groupboard - render your group memberships and notification status
#[derive(Parser, Debug)]
#[command(name = "groupboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the group-messaging API
    #[arg(long, env = "GROUPBOARD_API_URL", default_value = DEFAULT_API_BASE)]
    pub base_url: String,

    /// Raw cookie header from the surrounding page (the bearer token is
    /// read from the groupme_token cookie)
    #[arg(long, env = "GROUPBOARD_COOKIE")]
    pub cookie: Option<String>,

    /// Bearer token, bypassing cookie parsing
    #[arg(long, env = "GROUPBOARD_TOKEN", conflicts_with = "cookie")]
    pub token: Option<String>,

    /// Write the rendered HTML to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level derived from the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Resolves the bearer token: an explicit token wins, otherwise the
    /// cookie jar is consulted. Absence is a usable (unauthenticated)
    /// state.
    pub fn resolve_token(&self) -> Option<String> {
        if let Some(token) = &self.token {
            return Some(token.clone());
        }
        self.cookie
            .as_deref()
            .and_then(groupboard_client::credentials::token_from_cookies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn explicit_token_wins_over_absent_cookie() {
        let cli = parse(&["groupboard", "--token", "tok"]);
        assert_eq!(cli.resolve_token(), Some("tok".to_string()));
    }

    #[test]
    fn token_is_read_from_cookie_jar() {
        let cli = parse(&["groupboard", "--cookie", "a=b; groupme_token=tok2"]);
        assert_eq!(cli.resolve_token(), Some("tok2".to_string()));
    }

    #[test]
    fn no_credential_resolves_to_none() {
        let cli = parse(&["groupboard"]);
        assert_eq!(cli.resolve_token(), None);
    }
}
