use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use mediamap::{config::Config, pipeline, scanner, MediaMap};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mediamap")]
#[command(about = "Build the services media map from an image directory")]
#[command(version)]
struct Cli {
    /// Image directory to scan (defaults to the configured images_dir)
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Artifact path to write (overrides config)
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Settings file (overrides the default search locations)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a result line for every scanned file
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load().unwrap_or_default(),
    };

    let images_dir = cli.dir.unwrap_or(config.build.images_dir);
    let output = cli.output.unwrap_or(config.build.output);

    println!("🔍 Scanning images directory: {}", images_dir.display());
    let files = scanner::list_images(&images_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{wide_bar:.cyan/blue}] {pos}/{len} files classified")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut map = MediaMap::default();
    for file in &files {
        match pipeline::classify_file(file) {
            Some(item) => {
                if cli.verbose {
                    pb.println(format!("✅ {} → {}", file, item.service));
                }
                map.items.push(item);
            }
            None => {
                if cli.verbose {
                    pb.println(format!("⚠️  {} → no service match", file));
                }
                map.unmatched.push(file.clone());
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    pipeline::write_artifact(&map.items, &output)?;

    println!("\n📊 Results:");
    println!("   • Matched images: {}", map.items.len());
    println!("   • Unmatched files: {}", map.unmatched.len());
    println!("   • Output: {}", output.display());

    if !map.unmatched.is_empty() {
        println!("\n⚠️  Unmatched files (will be ignored):");
        for file in &map.unmatched {
            println!("   • {}", file);
        }
    }

    println!("\n📋 Service breakdown:");
    for (slug, count) in map.breakdown() {
        println!("   • {}: {} images", slug, count);
    }

    Ok(())
}
