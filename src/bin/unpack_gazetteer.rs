use anyhow::Context;
use clap::Parser;
use gazetteer_filter::unpack_member;
use gazetteer_filter::utils::logger;

/// Extract the gazetteer text file from a downloaded GeoNames archive,
/// e.g. http://download.geonames.org/export/dump/cities1000.zip
#[derive(Parser)]
#[command(name = "unpack-gazetteer")]
#[command(about = "Extract one member of a GeoNames zip archive")]
struct Args {
    /// Downloaded zip archive
    #[arg(default_value = "cities1000.zip")]
    archive: String,

    /// Name of the member inside the archive
    #[arg(default_value = "cities1000.txt")]
    member: String,

    /// Where to write the extracted file
    #[arg(default_value = "cities1000.txt")]
    dest: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let written = unpack_member(&args.archive, &args.member, &args.dest)
        .with_context(|| format!("Failed to unpack {} from {}", args.member, args.archive))?;

    println!("✅ Extracted {} bytes to {}", written, args.dest);
    Ok(())
}
