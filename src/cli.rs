//! Command-line arguments for MarkPad.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "MarkPad",
    version,
    about = "Markdown editor with a live, sanitized preview"
)]
pub struct Cli {
    /// Markdown file to open in the editor.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print the sanitized HTML preview of FILE and exit.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["stats", "file"])]
    pub render: Option<PathBuf>,

    /// Print the document statistics of FILE as JSON and exit.
    #[arg(long, value_name = "FILE", conflicts_with = "file")]
    pub stats: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("MarkPad").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_args_opens_empty_editor() {
        let cli = parse(&[]).unwrap();
        assert!(cli.file.is_none() && cli.render.is_none() && cli.stats.is_none());
    }

    #[test]
    fn test_positional_file() {
        let cli = parse(&["notes.md"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("notes.md")));
    }

    #[test]
    fn test_render_and_stats_flags() {
        assert_eq!(parse(&["--render", "a.md"]).unwrap().render, Some(PathBuf::from("a.md")));
        assert_eq!(parse(&["--stats", "b.md"]).unwrap().stats, Some(PathBuf::from("b.md")));
    }

    #[test]
    fn test_flag_without_file() {
        assert!(parse(&["--render"]).is_err());
    }

    #[test]
    fn test_render_conflicts_with_stats() {
        assert!(parse(&["--render", "a.md", "--stats", "b.md"]).is_err());
    }

    #[test]
    fn test_headless_flag_conflicts_with_editor_file() {
        assert!(parse(&["notes.md", "--render", "a.md"]).is_err());
        assert!(parse(&["notes.md", "--stats", "a.md"]).is_err());
    }

    #[test]
    fn test_extra_and_unknown_arguments_rejected() {
        assert!(parse(&["a.md", "b.md"]).is_err());
        assert!(parse(&["a.md", "--bogus"]).is_err());
    }
}
