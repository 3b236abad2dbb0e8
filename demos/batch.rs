//! Renders one card per headline in a markdown file.
//!
//! ```sh
//! cargo run --example batch -- <font.ttf> <asset dir> <headlines.md> [horizontal]
//! ```
//!
//! The asset directory needs a `templates/` and (optionally) an `illustrations/`
//! directory of PNG or JPEG files. Cards are written to the working directory.

use title_card::layout::{Composer, ComposerConfig};
use title_card::{parse_headlines, render_batch, DirectoryAssets, EyecatchLayout, Font};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [font, assets, headlines, rest @ ..] = &args[..] else {
        eprintln!("usage: batch <font.ttf> <asset dir> <headlines.md> [horizontal]");
        std::process::exit(2);
    };
    let layout = match rest.first().map(String::as_str) {
        Some("horizontal") => EyecatchLayout::Horizontal,
        _ => EyecatchLayout::Vertical,
    };

    let font = Font::load_from_disk(font).expect("can load font");
    let composer = Composer::new(&font, &font, ComposerConfig::default());
    let assets = DirectoryAssets::new(assets);
    let text = std::fs::read_to_string(headlines).expect("can read headlines");

    for item in render_batch(&assets, &composer, &parse_headlines(&text), layout) {
        match item.result {
            Ok(card) => {
                let mut out = std::fs::File::create(&item.file_name).expect("can create output file");
                card.write_png(&mut out).expect("can write png");
                println!("{}: {}", item.file_name, card.title_lines.join(" / "));
            }
            Err(e) => eprintln!("{}: {e}", item.file_name),
        }
    }
}
