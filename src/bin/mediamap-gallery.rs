use anyhow::Result;
use clap::Parser;
use mediamap::{config::Config, Lang, MediaLibrary, ServiceSlug};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mediamap-gallery")]
#[command(about = "Render a service gallery from the media artifact")]
#[command(version)]
struct Cli {
    /// Service slug to render (e.g. dry-ice, vapor, glass-bead)
    #[arg(value_name = "SERVICE")]
    service: ServiceSlug,

    /// Gallery language
    #[arg(long, default_value = "en")]
    lang: Lang,

    /// Media artifact path (overrides config)
    #[arg(long, value_name = "FILE")]
    media: Option<PathBuf>,

    /// Print only the service thumbnail path
    #[arg(long)]
    thumbnail: bool,

    /// Settings file (overrides the default search locations)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load().unwrap_or_default(),
    };

    let media_path = cli.media.unwrap_or(config.gallery.media_path);
    let library = MediaLibrary::new(media_path).with_placeholder(config.gallery.placeholder);

    if cli.thumbnail {
        println!("{}", library.thumbnail(cli.service));
    } else {
        print!("{}", library.render_gallery(cli.service, cli.lang));
    }

    Ok(())
}
