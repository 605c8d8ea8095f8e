use clap::{arg, crate_version, Command};
use bwtzip::decompressor;

const OUTPUT_PATH: &str = "recovered.txt";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let matches = Command::new("bwtunzip")
        .about("Expand an artifact produced by bwtzip back into text")
        .version(crate_version!())
        .arg(arg!(<INPUT> "path to the encoded artifact"))
        .get_matches();
    let input_path = matches.get_one::<String>("INPUT").expect("required by clap");

    if let Err(e) = run(input_path) {
        log::error!("decompression failed: {e}");
        let _ = std::fs::remove_file(OUTPUT_PATH);
        return Err(e);
    }
    Ok(())
}

fn run(input_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(input_path)?;
    log::debug!("read {} bytes from {input_path}", bytes.len());
    let text = decompressor::decompress(&bytes)?;
    std::fs::write(OUTPUT_PATH, &text)?;
    log::debug!("wrote {OUTPUT_PATH}");
    Ok(())
}
