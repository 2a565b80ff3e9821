//! Command line front end: regroup the CMS sliders of an HTML file and print the result.

use anyhow::{Context as _, Result};
use clap::Parser;
use cms_slider::{RebuildMode, RecordingHost, SliderConfig, SliderPage, resolve_viewport_width};
use html::Dom;
use log::info;
use std::fs::read_to_string;
use std::io::{Write as _, stdout};
use std::path::PathBuf;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "cms-slider", version, about = "Regroup CMS slider items into slides")]
struct Args {
    /// HTML document to process.
    path: PathBuf,
    /// Window inner width in px used for the initial mount.
    #[arg(long, value_name = "PX")]
    width: Option<u32>,
    /// Document client width in px, used when the window width is missing or zero.
    #[arg(long, value_name = "PX")]
    client_width: Option<u32>,
    /// Window widths to resize to after mounting, in order. Zero falls back like `--width`.
    #[arg(long = "resize", value_name = "PX")]
    resizes: Vec<u32>,
    /// Print a JSON snapshot instead of HTML.
    #[arg(long)]
    json: bool,
}

/// Mount every slider in the document and render the resulting tree.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or a rebuild fails.
fn run(args: &Args) -> Result<String> {
    let source = read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let mut dom = Dom::parse_html(&source)?;
    let config = SliderConfig::from_env();
    let fallback = config.default_viewport_width;
    let viewport = |inner: Option<u32>| resolve_viewport_width(inner, args.client_width, fallback);
    let mut host = RecordingHost::default();
    let mut page = SliderPage::mount_all(&mut dom, viewport(args.width), config, &mut host)?;
    for &width in &args.resizes {
        page.rebuild_all(&mut dom, viewport(Some(width)), RebuildMode::IfChanged, &mut host)?;
    }
    info!(
        "{}: {} slider(s), {} redraw(s)",
        args.path.display(),
        page.len(),
        host.redraws
    );
    if args.json {
        Ok(dom.to_json_string())
    } else {
        Ok(dom.to_html_string())
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let rendered = run(&args)?;
    writeln!(stdout().lock(), "{rendered}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const PAGE: &str = r#"<div data-cltd-slider="cms">
        <div data-cltd-slider-mask><div class="w-slide"></div></div>
        <div class="w-slider-nav"></div>
        <div data-cltd-items-per-slide="2">
          <div class="w-dyn-item">A</div><div class="w-dyn-item">B</div><div class="w-dyn-item">C</div>
        </div>
      </div>"#;

    fn page_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(PAGE.as_bytes()).unwrap();
        file
    }

    #[test]
    fn renders_regrouped_html() {
        let file = page_file();
        let args = Args::parse_from(["cms-slider", file.path().to_str().unwrap()]);
        assert_eq!(args.width, None);
        let html = run(&args).unwrap();
        assert_eq!(html.matches(r#"class="w-slide""#).count(), 2);
        assert!(html.contains(r#"aria-label="Slide group 2""#));
        assert!(!html.contains("data-cltd-items-per-slide"));
    }

    #[test]
    fn json_snapshot_after_resize() {
        let file = page_file();
        let args = Args::parse_from([
            "cms-slider",
            file.path().to_str().unwrap(),
            "--json",
            "--resize",
            "600",
        ]);
        let snapshot: serde_json::Value = serde_json::from_str(&run(&args).unwrap()).unwrap();
        let text = snapshot.to_string();
        assert_eq!(text.matches("\"Slide group ").count(), 3);
    }

    #[test]
    fn client_width_stands_in_for_a_zero_window_width() {
        let file = page_file();
        let path = file.path().to_str().unwrap();
        let mobile = Args::parse_from(["cms-slider", path, "--width", "0", "--client-width", "500"]);
        assert_eq!(run(&mobile).unwrap().matches(r#"class="w-slide""#).count(), 3);
        let fallback = Args::parse_from(["cms-slider", path, "--client-width", "0", "--resize", "0"]);
        assert_eq!(run(&fallback).unwrap().matches(r#"class="w-slide""#).count(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        let args = Args::parse_from(["cms-slider", "/nonexistent/page.html"]);
        assert!(run(&args).is_err());
    }
}
