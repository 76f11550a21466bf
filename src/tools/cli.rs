use clap::Parser;
use log::{info, LevelFilter};
use std::{fmt::Display, fmt::Formatter, str::FromStr};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Text form of the compressed data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Base64,
    Uri,
    Utf16,
    Bytes,
}
impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base64" => Ok(Format::Base64),
            "uri" | "encoded-uri-component" => Ok(Format::Uri),
            "utf16" => Ok(Format::Utf16),
            "bytes" | "uint8" => Ok(Format::Bytes),
            other => Err(format!(
                "unknown format '{}' (expected base64, uri, utf16 or bytes)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where data is read from or sent to
pub enum Channel {
    File(String),
    Std,
}
impl Display for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::File(name) => write!(f, "file {}", name),
            Channel::Std => write!(f, "standard stream"),
        }
    }
}

#[derive(Debug)]
pub struct LzOpts {
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Encoding of the compressed side
    pub format: Format,
    /// Location input is read from
    pub input: Channel,
    /// Location where output is sent
    pub output: Channel,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl LzOpts {
    pub fn new() -> Self {
        Self {
            op_mode: Mode::Zip,
            format: Format::Base64,
            input: Channel::Std,
            output: Channel::Std,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for LzOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Compress text into (or recover it from) the lz-string formats",
    long_about = "
    Reads text (or a compressed payload) from FILE or standard input and writes the result
    to standard output. Payloads are interchangeable with the JavaScript lz-string encoders."
)]
pub struct Args {
    /// File to read; standard input when absent
    #[clap()]
    file: Option<String>,

    /// Compress the input (default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Decompress the input
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Check that the input survives a compress/decompress round trip
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Compressed form: base64, uri, utf16 or bytes
    #[clap(short = 'f', long = "format", default_value = "base64")]
    format: Format,

    /// Write to this file instead of standard output
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 2)]
    v: u8,
}

impl From<Args> for LzOpts {
    fn from(args: Args) -> Self {
        let mut opts = LzOpts::new();
        // Last one wins if several modes are given, test beats both
        if args.compress {
            opts.op_mode = Mode::Zip
        };
        if args.decompress {
            opts.op_mode = Mode::Unzip
        };
        if args.test {
            opts.op_mode = Mode::Test
        };
        opts.format = args.format;
        if let Some(file) = args.file {
            opts.input = Channel::File(file)
        };
        if let Some(file) = args.output {
            opts.output = Channel::File(file)
        };
        opts.verbose = Verbosity::from_level(args.v);
        opts
    }
}

/// Parse the command line, set the log level and report what we are about to do.
pub fn lzopts_init() -> LzOpts {
    let opts = LzOpts::from(Args::parse());

    log::set_max_level(opts.verbose.level_filter());

    info!("---- lzstring Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Compressed format set to {}", opts.format);
    info!("Reading from {}", opts.input);
    info!("Writing to {}", opts.output);
    info!("---- lzstring Initialization End ----\n");
    opts
}
