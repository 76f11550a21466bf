//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::{
    error::Error,
    fs::{self, File},
    io::{self, Read, Write},
};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use lzstring::tools::cli::{lzopts_init, Channel, Format, LzOpts, Mode};
use lzstring::CodecError;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), Box<dyn Error>> {
    // Available log levels are Error, Warn, Info, Debug, Trace.
    // Stdout carries data, so log to stderr.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let options = lzopts_init();
    let input = read_input(&options.input)?;

    //----- Figure how what we need to do and go do it
    let output = match options.op_mode {
        Mode::Zip => zip(&options, &input)?,
        Mode::Unzip => unzip(&options, &input)?,
        Mode::Test => {
            round_trip(&options, &input)?;
            return Ok(());
        }
    };
    write_output(&options.output, &output)?;

    info!("Done.\n");
    Ok(())
}

fn read_input(channel: &Channel) -> io::Result<Vec<u8>> {
    match channel {
        Channel::File(name) => fs::read(name),
        Channel::Std => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(channel: &Channel, data: &[u8]) -> io::Result<()> {
    match channel {
        Channel::File(name) => File::create(name)?.write_all(data),
        Channel::Std => {
            let mut out = io::stdout().lock();
            out.write_all(data)?;
            out.flush()
        }
    }
}

fn as_text(input: &[u8]) -> io::Result<&str> {
    std::str::from_utf8(input).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Compress the input into the chosen format.
fn zip(opts: &LzOpts, input: &[u8]) -> Result<Vec<u8>, Box<dyn Error>> {
    let text = as_text(input)?;
    info!("Compressing {} bytes to {}.", input.len(), opts.format);
    let out = match opts.format {
        Format::Base64 => lzstring::compress_to_base64(text).into_bytes(),
        Format::Uri => lzstring::compress_to_encoded_uri_component(text).into_bytes(),
        Format::Utf16 => lzstring::compress_to_utf16(text).into_bytes(),
        Format::Bytes => lzstring::compress_to_bytes(text),
    };
    info!("Wrote {} bytes.", out.len());
    Ok(out)
}

/// Decode a payload in the chosen format. Text payloads lose a trailing line break first.
fn unzip(opts: &LzOpts, input: &[u8]) -> Result<Vec<u8>, Box<dyn Error>> {
    info!("Decompressing {} bytes of {}.", input.len(), opts.format);
    let result = match opts.format {
        Format::Bytes => lzstring::decompress_from_bytes(input),
        text_format => {
            let payload = as_text(input)?.trim_end_matches(['\r', '\n']);
            match text_format {
                Format::Base64 => lzstring::decompress_from_base64(payload),
                Format::Uri => lzstring::decompress_from_encoded_uri_component(payload),
                _ => lzstring::decompress_from_utf16(payload),
            }
        }
    };
    match result {
        Ok(text) => Ok(text.into_bytes()),
        Err(e) => {
            error!("Fatal error: {}", e);
            Err(e.into())
        }
    }
}

/// Round trip the input through the chosen format and report whether it survived.
fn round_trip(opts: &LzOpts, input: &[u8]) -> Result<(), Box<dyn Error>> {
    let packed = zip(opts, input)?;
    let restored = unzip(opts, &packed)?;
    if restored == input {
        println!(
            "{}: ok ({} -> {} bytes)",
            opts.input,
            input.len(),
            packed.len()
        );
        Ok(())
    } else {
        error!("Round trip through {} changed the data.", opts.format);
        Err(Box::new(CodecError::Internal("round trip changed the data")))
    }
}
