use clap::{arg, crate_version, Command};
use bwtzip::{compressor, textio};

const OUTPUT_PATH: &str = "bwtencoded.bin";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let matches = Command::new("bwtzip")
        .about("Compress a text file with BWT + RLE + Elias + Huffman coding")
        .version(crate_version!())
        .arg(arg!(<INPUT> "path to the input text file"))
        .get_matches();
    let input_path = matches.get_one::<String>("INPUT").expect("required by clap");

    if let Err(e) = run(input_path) {
        log::error!("compression failed: {e}");
        let _ = std::fs::remove_file(OUTPUT_PATH);
        return Err(e);
    }
    Ok(())
}

fn run(input_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let text = textio::read_text_file(input_path)?;
    log::debug!("read {} bytes from {input_path}", text.len());
    let compressed = compressor::compress(&text)?;
    std::fs::write(OUTPUT_PATH, compressed)?;
    log::debug!("wrote {OUTPUT_PATH}");
    Ok(())
}
