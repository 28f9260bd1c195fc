use anyhow::Result;
use clap::Parser;
use mediamap::{pipeline, scanner};

#[derive(Parser)]
#[command(name = "mediamap-match")]
#[command(about = "Classify a single image filename and preview its generated content")]
#[command(version)]
struct Cli {
    /// Image filename to classify (name only, the file does not need to exist)
    #[arg(value_name = "FILE")]
    file: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !scanner::is_image(&cli.file) {
        println!(
            "ℹ️  {} has no supported image extension, the build pipeline would skip it",
            cli.file
        );
    }

    match pipeline::classify_file(&cli.file) {
        Some(item) => {
            println!("✅ {} → {}", cli.file, item.service);
            println!("   src:        {}", item.src);
            println!("   alt_en:     {}", item.alt_en);
            println!("   alt_ar:     {}", item.alt_ar);
            println!("   caption_en: {}", item.caption_en);
            println!("   caption_ar: {}", item.caption_ar);
        }
        None => {
            println!("⚠️  {} → no service match", cli.file);
            println!("ℹ️  Keywords are matched case-insensitively as filename substrings");
        }
    }

    Ok(())
}
