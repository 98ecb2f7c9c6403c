/// hpk – CLI tool for the huffpack codec.
///
/// Works similar to gzip:
///   hpk file.txt         → compress to file.txt.hpk (removes original)
///   hpk -d file.txt.hpk  → decompress to file.txt (removes original)
///   hpk -c file.txt      → compress to stdout
///   hpk -k file.txt      → keep original after compress
///   hpk -l file.txt.hpk  → list info about a compressed file
///   cat file | hpk -c    → compress stdin to stdout
///   cat file | hpk -dc   → decompress stdin to stdout
use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{self, ExitCode};

use huffpack::codec;
use huffpack::frequency;

fn usage() {
    eprintln!("hpk - canonical Huffman compression tool");
    eprintln!();
    eprintln!("Usage: hpk [OPTIONS] [FILE]...");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -d, --decompress   Decompress mode");
    eprintln!("  -c, --stdout       Write to stdout (don't remove original)");
    eprintln!("  -k, --keep         Keep original file");
    eprintln!("  -f, --force        Overwrite existing output files");
    eprintln!("  -l, --list         List info about compressed file");
    eprintln!("  -q, --quiet        Suppress warnings");
    eprintln!("  -v, --verbose      Verbose output");
    eprintln!("  -h, --help         Show this help");
    eprintln!();
    eprintln!("If no FILE is given, reads from stdin and writes to stdout.");
    eprintln!("Compressed files use the .hpk extension.");
}

#[derive(Debug)]
struct Opts {
    decompress: bool,
    to_stdout: bool,
    keep: bool,
    force: bool,
    list: bool,
    verbose: bool,
    quiet: bool,
    files: Vec<String>,
}

fn parse_args() -> Opts {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut opts = Opts {
        decompress: false,
        to_stdout: false,
        keep: false,
        force: false,
        list: false,
        verbose: false,
        quiet: false,
        files: Vec::new(),
    };

    for arg in &args {
        match arg.as_str() {
            "-d" | "--decompress" => opts.decompress = true,
            "-c" | "--stdout" | "--to-stdout" => opts.to_stdout = true,
            "-k" | "--keep" => opts.keep = true,
            "-f" | "--force" => opts.force = true,
            "-l" | "--list" => opts.list = true,
            "-v" | "--verbose" => opts.verbose = true,
            "-q" | "--quiet" => opts.quiet = true,
            "-h" | "--help" => {
                usage();
                process::exit(0);
            }
            // Handle combined short flags like -dc, -kv, etc.
            s if s.starts_with('-') && !s.starts_with("--") && s.len() > 2 => {
                for ch in s[1..].chars() {
                    match ch {
                        'd' => opts.decompress = true,
                        'c' => opts.to_stdout = true,
                        'k' => opts.keep = true,
                        'f' => opts.force = true,
                        'l' => opts.list = true,
                        'v' => opts.verbose = true,
                        'q' => opts.quiet = true,
                        _ => {
                            eprintln!("hpk: unknown flag '-{ch}'");
                            process::exit(1);
                        }
                    }
                }
            }
            _ => {
                opts.files.push(arg.clone());
            }
        }
    }

    opts
}

/// Determine the output filename for compression.
fn compress_output_path(input: &str) -> PathBuf {
    PathBuf::from(format!("{input}.hpk"))
}

/// Determine the output filename for decompression.
fn decompress_output_path(input: &str) -> Option<PathBuf> {
    let path = Path::new(input);
    match path.extension().and_then(|e| e.to_str()) {
        Some("hpk") => Some(path.with_extension("")),
        _ => None,
    }
}

fn list_file(path: &str, data: &[u8]) -> Result<(), String> {
    let stream = codec::info(data).map_err(|e| format!("{path}: {e}"))?;
    let decoded = codec::decode(data).map_err(|e| format!("{path}: {e}"))?;
    let ratio = if decoded.is_empty() {
        0.0
    } else {
        (data.len() as f64 / decoded.len() as f64) * 100.0
    };
    println!(
        "{:>12} {:>12} {:5.1}% {:>8} {}",
        decoded.len(),
        data.len(),
        ratio,
        stream.symbol_count,
        path,
    );
    Ok(())
}

fn write_output(opts: &Opts, out_path: &Path, data: &[u8]) -> Result<(), String> {
    let out_str = out_path.display().to_string();
    if out_path.exists() && !opts.force {
        return Err(format!("{out_str} already exists; use -f to overwrite"));
    }
    fs::write(out_path, data).map_err(|e| format!("{out_str}: {e}"))
}

fn process_compress(opts: &Opts, path: &str) -> Result<(), String> {
    if path.ends_with(".hpk") && !opts.to_stdout {
        if !opts.quiet {
            eprintln!("hpk: warning: {path} already has .hpk suffix -- unchanged");
        }
        return Ok(());
    }

    let input = fs::read(path).map_err(|e| format!("{path}: {e}"))?;
    let encoded = codec::encode(&input).map_err(|e| format!("{path}: {e}"))?;

    if opts.to_stdout {
        io::stdout()
            .write_all(&encoded)
            .map_err(|e| format!("stdout: {e}"))?;
        return Ok(());
    }

    let out_path = compress_output_path(path);
    write_output(opts, &out_path, &encoded)?;

    if opts.verbose {
        let ratio = if input.is_empty() {
            0.0
        } else {
            (encoded.len() as f64 / input.len() as f64) * 100.0
        };
        let entropy = frequency::get_frequency(&input).entropy();
        eprintln!(
            "{path}: {ratio:.1}% ({} → {} bytes, {entropy:.2} bits/byte)",
            input.len(),
            encoded.len()
        );
    }

    if !opts.keep {
        fs::remove_file(path).map_err(|e| format!("{path}: cannot remove: {e}"))?;
    }

    Ok(())
}

fn process_decompress(opts: &Opts, path: &str) -> Result<(), String> {
    let data = fs::read(path).map_err(|e| format!("{path}: {e}"))?;
    let decoded = codec::decode(&data).map_err(|e| format!("{path}: {e}"))?;

    if opts.to_stdout {
        io::stdout()
            .write_all(&decoded)
            .map_err(|e| format!("stdout: {e}"))?;
        return Ok(());
    }

    let out_path = decompress_output_path(path)
        .ok_or_else(|| format!("{path}: unknown suffix -- ignored"))?;
    write_output(opts, &out_path, &decoded)?;

    if opts.verbose {
        eprintln!("{path}: {} → {} bytes", data.len(), decoded.len());
    }

    if !opts.keep {
        fs::remove_file(path).map_err(|e| format!("{path}: cannot remove: {e}"))?;
    }

    Ok(())
}

fn process_stdin_stdout(opts: &Opts) -> Result<(), String> {
    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .map_err(|e| format!("stdin: {e}"))?;

    let output = if opts.decompress {
        codec::decode(&input).map_err(|e| format!("stdin: {e}"))?
    } else {
        codec::encode(&input).map_err(|e| format!("stdin: {e}"))?
    };

    io::stdout()
        .write_all(&output)
        .map_err(|e| format!("stdout: {e}"))
}

fn run() -> Result<(), ()> {
    let opts = parse_args();
    let mut had_error = false;

    if opts.files.is_empty() {
        if opts.list {
            eprintln!("hpk: -l requires a file argument");
            return Err(());
        }
        if let Err(e) = process_stdin_stdout(&opts) {
            eprintln!("hpk: {e}");
            return Err(());
        }
        return Ok(());
    }

    if opts.list {
        println!(
            "{:>12} {:>12} {:>6} {:>8} name",
            "original", "compressed", "ratio", "symbols"
        );
        for path in &opts.files {
            match fs::read(path) {
                Ok(data) => {
                    if let Err(e) = list_file(path, &data) {
                        eprintln!("hpk: {e}");
                        had_error = true;
                    }
                }
                Err(e) => {
                    eprintln!("hpk: {path}: {e}");
                    had_error = true;
                }
            }
        }
        return if had_error { Err(()) } else { Ok(()) };
    }

    for path in &opts.files {
        let result = if path == "-" {
            process_stdin_stdout(&opts)
        } else if opts.decompress {
            process_decompress(&opts, path)
        } else {
            process_compress(&opts, path)
        };

        if let Err(e) = result {
            eprintln!("hpk: {e}");
            had_error = true;
        }
    }

    if had_error {
        Err(())
    } else {
        Ok(())
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}
