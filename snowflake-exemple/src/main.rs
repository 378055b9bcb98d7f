use snowflake_core::{generate, Error, GenerationRequest, Style};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The same seed gives the same snowflake, whatever the style:
    // only the glyphs change, never which cells are filled
    for style in Style::ALL {
        println!("{} ({}):", style, style.palette().iter().collect::<String>());
        println!("{}\n", generate("my-unique-seed", 9, style)?);
    }

    // Styles can be parsed from their names (case-insensitive)
    let style: Style = "Mixed".parse()?;

    // Parsing an unknown name fails
    match "sparkly".parse::<Style>() {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    // A request bundles the three parameters
    // Even sizes have no single centre cell; 'normalized' bumps them to the next odd size
    let request = GenerationRequest::new("blizzard", 12, style).normalized();
    println!("\n{} (size {}):\n{}\n", request.seed, request.size, request.generate()?);

    // Size 1 is a single glyph
    println!("Smallest snowflake: {}", generate("tiny", 1, Style::Classic)?);

    // Size 0 is rejected
    match generate("nothing", 0, Style::Classic) {
        Ok(_) => println!("Should not happen"),
        Err(Error::InvalidSize(size)) => println!("Size {size} is invalid, must be at least 1"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
