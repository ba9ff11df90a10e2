use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use log::info;

use flxb::{Charset, FlxbError, Metadata, Result, StreamingDecoder};

use crate::cli::{args::DecodeArgs, config, global::GlobalArgs};

pub fn handle(args: DecodeArgs, global: &GlobalArgs) -> Result<()> {
    let (input_path, output_path) = match (&args.input, &args.output) {
        (Some(input), Some(output)) => (input, output),
        _ => return Err(FlxbError::config("--input and --output are required")),
    };

    let registry = config::load_registry(global)?;
    let supplied = config::resolve_charset(
        args.charset.as_deref(),
        args.preset.as_deref(),
        args.pow2,
        &registry,
    )?;

    let input = File::open(input_path).map_err(|source| FlxbError::File {
        path: input_path.clone(),
        source,
    })?;
    let mut input = BufReader::new(input);
    let output = File::create(output_path).map_err(|source| FlxbError::File {
        path: output_path.clone(),
        source,
    })?;

    // Header-driven decode rebuilds the charset from the file itself; with
    // --no-header the caller must restate the encoder's parameters.
    let (charset, block_size) = if args.no_header {
        let charset = supplied.ok_or_else(|| {
            FlxbError::config("--charset is required for decode when --no-header is set")
        })?;
        (charset, args.block as usize)
    } else {
        let meta = Metadata::read(&mut input)?;
        let charset = Charset::build(&meta.charset, meta.pow2)?;
        meta.verify(&charset)?;
        (charset, meta.block_size as usize)
    };

    let mut writer = BufWriter::new(output);
    let mut decoder = StreamingDecoder::new(&charset, block_size, &mut writer)?;
    let written = decoder.decode(&mut input)?;
    writer.flush().map_err(FlxbError::Io)?;

    info!(
        "decoded {} into {} bytes at {}",
        input_path.display(),
        written,
        output_path.display()
    );
    Ok(())
}
