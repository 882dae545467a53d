use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Render the users and posts lists in the terminal
#[derive(Parser, Debug)]
#[command(name = "postboard")]
#[command(version)]
#[command(
    about = "Render the users and posts lists in the terminal",
    long_about = "Navigates to each PATH in order and renders the resulting page. \
                  `/` redirects to `/users`; `/users` and `/posts` mount the list views."
)]
pub struct Args {
    /// Paths to navigate to, in order
    #[arg(value_name = "PATH", default_value = "/")]
    pub paths: Vec<String>,

    /// Output format: text, html or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to postboard.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the users API
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,

    /// URL of the posts collection
    #[arg(long, value_name = "URL")]
    pub posts_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Maximum number of posts shown
    #[arg(long, value_name = "N", value_parser = parse_post_limit)]
    pub post_limit: Option<usize>,

    /// Brand text of the navigation bar
    #[arg(long, value_name = "TEXT")]
    pub brand: Option<String>,

    /// Present every re-render instead of only the final page
    #[arg(long)]
    pub live: bool,

    /// Navigate through all paths without waiting for each view to load
    #[arg(long)]
    pub no_settle: bool,

    /// Read paths from stdin, one per line (`quit` to stop); implies --live
    #[arg(short, long)]
    pub interactive: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_post_limit(value: &str) -> Result<usize, String> {
    let limit: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", value))?;
    if limit == 0 {
        return Err("post limit must be at least 1".to_string());
    }
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("postboard").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.paths, vec!["/".to_string()]);
        assert!(args.format.is_none());
        assert!(args.output.is_none());
        assert!(args.timeout.is_none());
        assert!(!args.live);
        assert!(!args.no_settle);
        assert!(!args.interactive);
    }

    #[test]
    fn test_paths_in_order() {
        let args = parse(&["/posts", "/users", "/about"]).unwrap();
        assert_eq!(args.paths, vec!["/posts", "/users", "/about"]);
    }

    #[test]
    fn test_all_options() {
        let args = parse(&[
            "-f",
            "html",
            "-o",
            "page.html",
            "-c",
            "custom.yml",
            "--api-base-url",
            "http://api.local",
            "--posts-url",
            "http://api.local/posts",
            "--timeout",
            "5",
            "--post-limit",
            "3",
            "--brand",
            "Board",
            "--live",
            "--no-settle",
            "-i",
            "-v",
            "/posts",
        ])
        .unwrap();

        assert_eq!(args.format, Some(OutputFormat::Html));
        assert_eq!(args.output, Some(PathBuf::from("page.html")));
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert_eq!(args.api_base_url.as_deref(), Some("http://api.local"));
        assert_eq!(args.posts_url.as_deref(), Some("http://api.local/posts"));
        assert_eq!(args.timeout, Some(5));
        assert_eq!(args.post_limit, Some(3));
        assert_eq!(args.brand.as_deref(), Some("Board"));
        assert!(args.live && args.no_settle && args.interactive && args.verbose);
        assert_eq!(args.paths, vec!["/posts"]);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let err = parse(&["--format", "markdown"]).unwrap_err();
        assert!(err.to_string().contains("Invalid format"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(parse(&["--timeout", "0"]).is_err());
    }

    #[test]
    fn test_post_limit_validation() {
        assert_eq!(parse_post_limit("15"), Ok(15));
        assert!(parse_post_limit("0").unwrap_err().contains("at least 1"));
        assert!(parse_post_limit("-2").is_err());
        assert!(parse(&["--post-limit", "0"]).is_err());
    }
}
