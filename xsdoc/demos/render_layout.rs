//! Renders a layout schema to HTML and plain text.
//!
//! Run with: `cargo run --example render_layout -- [layout.xsd] [tipos.xsd] [output-dir]`
//!
//! Without arguments, renders the S-1000 fixture under `tests/fixtures`.

use std::path::{Path, PathBuf};
use xsdoc::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let layout_path = args
        .next()
        .unwrap_or_else(|| fixtures.join("evtInfoEmpregador.xsd"));
    let types_path = args.next().unwrap_or_else(|| fixtures.join("tipos.xsd"));
    let output_dir = args.next();

    let document = parse_file(&layout_path)?;
    let types = parse_type_table(&std::fs::read_to_string(&types_path)?)?;
    let layout = Layout::build(&document, &types)?;

    let config = RenderConfig::new();
    let generator = Generator::new(&layout, &config);

    println!("{}", generator.structure_tree());

    for (rule, references) in layout.rule_references() {
        println!("{rule}:");
        for reference in references {
            println!("  {} ({})", reference.trail, reference.anchor);
        }
    }

    let html = generator.generate_html();
    let text = generator.generate_text();

    match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let html_path = dir.join(format!("{}.html", layout.name()));
            let text_path = dir.join(format!("{}.txt", layout.name()));
            std::fs::write(&html_path, &html)?;
            std::fs::write(&text_path, &text)?;
            println!("Wrote {} and {}", html_path.display(), text_path.display());
        }
        None => {
            println!(
                "{} - {}: {} bytes of HTML, {} bytes of text",
                layout.code(),
                layout.description(),
                html.len(),
                text.len()
            );
        }
    }

    Ok(())
}
