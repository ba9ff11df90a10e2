use std::fs::File;
use std::io::{BufWriter, Write};

use log::info;

use flxb::{FlxbError, Result, StreamingEncoder};

use crate::cli::{args::EncodeArgs, config, global::GlobalArgs};

pub fn handle(args: EncodeArgs, global: &GlobalArgs) -> Result<()> {
    let (input_path, output_path) = match (&args.input, &args.output) {
        (Some(input), Some(output)) => (input, output),
        _ => return Err(FlxbError::config("--input and --output are required")),
    };

    let registry = config::load_registry(global)?;
    let charset = config::resolve_charset(
        args.charset.as_deref(),
        args.preset.as_deref(),
        args.pow2,
        &registry,
    )?
    .ok_or_else(|| FlxbError::config("--charset is required in encode mode"))?;

    let mut input = File::open(input_path).map_err(|source| FlxbError::File {
        path: input_path.clone(),
        source,
    })?;
    let output = File::create(output_path).map_err(|source| FlxbError::File {
        path: output_path.clone(),
        source,
    })?;

    let mut writer = BufWriter::new(output);
    let mut encoder = StreamingEncoder::new(&charset, args.block as usize, &mut writer)?;
    if !args.no_header {
        encoder.write_header()?;
    }
    let consumed = encoder.encode(&mut input)?;
    let width = encoder.output_length();
    writer.flush().map_err(FlxbError::Io)?;

    info!(
        "encoded {} bytes from {} into {} ({} symbols per {}-byte block)",
        consumed,
        input_path.display(),
        output_path.display(),
        width,
        args.block
    );
    Ok(())
}
