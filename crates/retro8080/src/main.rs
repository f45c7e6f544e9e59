use anyhow::{Context, Result};
use retro8080::RunOptions;

const USAGE: &str = "usage: retro8080 <image> [frames] [symbols]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(image_path) = args.next() else {
        eprintln!(
            "No program image provided.\n\
             {USAGE}\n\
             for example: retro8080 assets/roms/space_invaders/space-invaders.rom 600"
        );
        std::process::exit(1);
    };
    let frames = match args.next() {
        Some(frames) => frames
            .parse()
            .with_context(|| format!("invalid frame count '{frames}'"))?,
        None => retro8080::DEFAULT_FRAMES,
    };
    let symbols = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read symbol file '{path}'"))?;
            retro8080::parse_symbols(&text)
                .with_context(|| format!("failed to parse symbol file '{path}'"))?
        }
        None => Default::default(),
    };

    log::info!("Loading program image: '{image_path}'");
    let image = std::fs::read(&image_path)
        .with_context(|| format!("failed to read program image '{image_path}'"))?;

    let options = RunOptions::builder()
        .frames(frames)
        .symbols(symbols)
        .build();
    let summary = retro8080::run(&image, options)?;

    println!(
        "frames={} instructions={} interrupts={} pc=0x{:04X}",
        summary.frames, summary.instructions, summary.interrupts, summary.final_pc
    );
    if let Some(crash) = summary.crash {
        let listing = summary.crash_listing.unwrap_or_default();
        return Err(crash).with_context(|| format!("program crashed at `{listing}`"));
    }
    Ok(())
}
