//! Accumulator CPU simulator CLI.
//!
//! This binary is a thin driver around `accsim-core`. It performs:
//! 1. **Image loading:** Reads a hex image file, or uses the built-in Fibonacci program.
//! 2. **Configuration:** Applies a JSON config file, then command-line overrides.
//! 3. **Execution:** Runs to `HALT` within the step budget.
//! 4. **Inspection:** Prints registers, statistics and a memory range.

use clap::{Parser, Subcommand};
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::{fs, process};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use accsim_core::common::constants::MEMORY_WORDS;
use accsim_core::config::Config;
use accsim_core::sim::loader;
use accsim_core::sim::programs::FIBONACCI;
use accsim_core::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "accsim",
    author,
    version,
    about = "16-bit accumulator CPU simulator",
    long_about = "Load a hex word image into a 256-word machine, run it to HALT, and print the result.\n\nWithout --image the built-in Fibonacci program is run and $80..$90 is dumped.\n\nExamples:\n  accsim run\n  accsim run --image fib.hex --dump 0x80..0x90\n  accsim run --image prog.hex --origin 0x10 --max-steps 500 --trace"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an image to HALT and print machine state.
    Run {
        /// Hex image file (whitespace-separated 16-bit words). Defaults to the Fibonacci program.
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Load address; overrides the config. Accepts `0x`/`$` hex or decimal.
        #[arg(long, value_parser = parse_number)]
        origin: Option<u16>,

        /// Step budget; overrides the config.
        #[arg(long)]
        max_steps: Option<u64>,

        /// Memory range to print after the run, e.g. `0x80..0x90`.
        #[arg(long, value_parser = parse_range, default_value = "0x80..0x90")]
        dump: Range<usize>,

        /// Trace every executed instruction to stderr.
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            image,
            config,
            origin,
            max_steps,
            dump,
            trace,
        }) => cmd_run(image, config, origin, max_steps, &dump, trace),
        None => {
            eprintln!("Accumulator CPU simulator: pass a subcommand");
            eprintln!();
            eprintln!("  accsim run                   Run the built-in Fibonacci program");
            eprintln!("  accsim run -i <image.hex>    Run a hex image");
            eprintln!();
            eprintln!("  accsim --help  for full options");
            process::exit(1);
        }
    }
}

/// Loads the image, runs it, and prints registers, statistics and the dump range.
///
/// Exits with code 1 on a configuration, load or execution error; the machine
/// state is still printed for execution errors.
fn cmd_run(
    image: Option<PathBuf>,
    config_path: Option<PathBuf>,
    origin: Option<u16>,
    max_steps: Option<u64>,
    dump: &Range<usize>,
    trace: bool,
) {
    let mut config = config_path.map_or_else(Config::default, |path| load_config(&path));
    if let Some(origin) = origin {
        config.image.origin = origin;
    }
    if let Some(max_steps) = max_steps {
        config.general.max_steps = max_steps;
    }
    config.general.trace_instructions |= trace;
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    init_tracing(config.general.trace_instructions);
    debug!(?config, "configuration");

    let (name, words) = match image {
        Some(path) => {
            let words = loader::load_image_file(&path).unwrap_or_else(|e| {
                eprintln!("Error loading {}: {e}", path.display());
                process::exit(1);
            });
            (path.display().to_string(), words)
        }
        None => ("built-in fibonacci".to_string(), FIBONACCI.to_vec()),
    };

    let mut sim = Simulator::new(&config);
    println!(
        "[*] Image: {name} ({} words) at ${:02X}, budget {} steps",
        words.len(),
        config.image.origin,
        config.general.max_steps
    );
    if let Err(e) = sim.load(&words) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let result = sim.run();

    println!("[*] {}", sim.machine.registers());
    print!("{}", sim.machine.stats().summary());
    match sim.machine.memory_range(dump.clone()) {
        Some(words) => print!("{}", format_dump(dump.start, words)),
        None => eprintln!(
            "[!] Dump range {:#x}..{:#x} is outside memory ({MEMORY_WORDS} words)",
            dump.start, dump.end
        ),
    }

    match result {
        Ok(summary) => println!(
            "[*] Halted at {} after {} steps",
            summary.pc, summary.steps
        ),
        Err(e) => {
            eprintln!("\n[!] {e}");
            process::exit(1);
        }
    }
}

/// Reads and parses a JSON configuration file, exiting on failure.
fn load_config(path: &Path) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {e}", path.display());
        process::exit(1);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("Error in config {}: {e}", path.display());
        process::exit(1);
    })
}

/// Installs the stderr log subscriber. `RUST_LOG` applies unless tracing is forced.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("accsim_core=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Formats memory words eight per row, prefixed by the row address.
fn format_dump(start: usize, words: &[u16]) -> String {
    let mut out = String::new();
    for (row, chunk) in words.chunks(8).enumerate() {
        out.push_str(&format!("${:02X}:", start + row * 8));
        for word in chunk {
            out.push_str(&format!(" {word:04X}"));
        }
        out.push('\n');
    }
    out
}

/// Parses `0x`/`$`-prefixed hex or plain decimal into a 16-bit value.
fn parse_number(s: &str) -> Result<u16, String> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix('$')) {
        u16::from_str_radix(hex, 16)
    } else {
        s.parse::<u16>()
    };
    parsed.map_err(|e| format!("invalid number '{s}': {e}"))
}

/// Parses `START..END` where both ends use the `parse_number` syntax.
fn parse_range(s: &str) -> Result<Range<usize>, String> {
    let (start, end) = s
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got '{s}'"))?;
    let start = usize::from(parse_number(start)?);
    let end = usize::from(parse_number(end)?);
    if start > end {
        return Err(format!("range start {start:#x} is after end {end:#x}"));
    }
    Ok(start..end)
}
