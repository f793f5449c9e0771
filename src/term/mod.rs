extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::error;
use crate::lang::{Dialect, Error, Machine};
use crate::mach::{read_load_address, Converter, Summary};
use ansi_term::Colour::Red;
use clap::Parser;
use linefeed::{Interface, ReadResult, Terminal};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(
    name = "bastext",
    version,
    about = "Convert tokenized Commodore BASIC programs to text"
)]
pub struct Args {
    /// Tokenized BASIC program; asks for file names when omitted
    pub input: Option<PathBuf>,

    /// Text file to write, or "-" for standard output
    pub output: Option<PathBuf>,

    /// Decode as this dialect instead of the machine's default
    #[arg(short, long, value_parser = parse_dialect)]
    pub dialect: Option<Dialect>,

    /// List the recognized load addresses and dialects
    #[arg(long)]
    pub dialects: bool,

    /// Log more (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log errors only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

fn parse_dialect(s: &str) -> Result<Dialect, String> {
    Dialect::from_name(s).ok_or_else(|| {
        let names: Vec<&str> = Dialect::all().iter().map(|d| d.name()).collect();
        format!("expected one of {}", names.join(", "))
    })
}

pub fn main() {
    let args = Args::parse();
    init_logging(&args);
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("Ctrl-C handler not installed: {}", error);
    }
    let code = match run(&args, interrupted) {
        Ok(_) => 0,
        Err(error) => {
            eprintln!("{}", Red.bold().paint(format!("?{}", error)));
            error.code() as i32
        }
    };
    std::process::exit(code);
}

fn init_logging(args: &Args) {
    let level = if args.quiet {
        Level::ERROR
    } else {
        match args.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

pub fn run(args: &Args, interrupted: Arc<AtomicBool>) -> Result<Option<Summary>, Error> {
    if args.dialects {
        list_dialects(io::stdout()).map_err(|e| error!(OutputFailed; e.to_string()))?;
        return Ok(None);
    }
    let (input, output) = match &args.input {
        Some(input) => (input.clone(), args.output.clone()),
        None => prompt_filenames()?,
    };
    let converter = Converter::new()
        .dialect(args.dialect)
        .with_interrupt(interrupted);
    convert_file(&converter, &input, output.as_deref()).map(Some)
}

/// Convert `input` into `output`, or standard output when that is `None`
/// or `-`. A partly written output file is removed if conversion fails.
pub fn convert_file(
    converter: &Converter,
    input: &Path,
    output: Option<&Path>,
) -> Result<Summary, Error> {
    let file = File::open(input).map_err(|e| {
        error!(UnableToOpenInput; format!("{}: {}", input.display(), e))
    })?;
    let mut reader = BufReader::new(file);
    let load_address = read_load_address(&mut reader)?;
    // Nothing is created for a file this tool cannot read anyway.
    converter.select(load_address)?;
    let path = match output {
        Some(path) if path != Path::new("-") => path,
        _ => {
            let stdout = io::stdout();
            let handle = stdout.lock();
            return converter.convert_program(reader, load_address, handle);
        }
    };
    let file = File::create(path).map_err(|e| {
        error!(UnableToOpenOutput; format!("{}: {}", path.display(), e))
    })?;
    info!("writing {}", path.display());
    let result = converter.convert_program(reader, load_address, BufWriter::new(file));
    if result.is_err() {
        if let Err(e) = fs::remove_file(path) {
            warn!("could not remove {}: {}", path.display(), e);
        }
    }
    result
}

/// The output name offered when none is typed in.
pub fn default_output(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".bas");
    PathBuf::from(name)
}

fn prompt_filenames() -> Result<(PathBuf, Option<PathBuf>), Error> {
    let interface =
        Interface::new("bastext").map_err(|e| error!(FilenameEntry; e.to_string()))?;
    let input = match ask(
        &interface,
        "Enter filename of BASIC program to convert to text: ",
    )? {
        Some(input) => PathBuf::from(input),
        None => return Err(error!(FilenameEntry; "no input file given")),
    };
    let default = default_output(&input);
    let prompt = format!(
        "Enter filename to save text version under [{}]: ",
        default.display()
    );
    let output = ask(&interface, &prompt)?
        .map(PathBuf::from)
        .unwrap_or(default);
    Ok((input, Some(output)))
}

fn ask<T: Terminal>(interface: &Interface<T>, prompt: &str) -> Result<Option<String>, Error> {
    interface
        .set_prompt(prompt)
        .map_err(|e| error!(FilenameEntry; e.to_string()))?;
    match interface
        .read_line()
        .map_err(|e| error!(FilenameEntry; e.to_string()))?
    {
        ReadResult::Input(string) => {
            let string = string.trim();
            if string.is_empty() {
                return Ok(None);
            }
            interface.add_history_unique(string.to_string());
            Ok(Some(string.to_string()))
        }
        ReadResult::Signal(_) | ReadResult::Eof => Err(error!(FilenameEntry; "cancelled")),
    }
}

pub fn list_dialects<W: Write>(mut out: W) -> io::Result<()> {
    for machine in Machine::all() {
        let names: Vec<String> = machine
            .dialects
            .iter()
            .map(|d| format!("{} ({})", d.name(), d))
            .collect();
        writeln!(
            out,
            "${:04X}  {:<26} {}",
            machine.load_address,
            machine.name,
            names.join(", ")
        )?;
    }
    Ok(())
}
