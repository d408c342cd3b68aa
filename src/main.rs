use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use prost::Message;
use prost_types::FileDescriptorSet;
use tracing_subscriber::EnvFilter;
use twirp_typescript::{Options, plugin};

fn main() -> Result<()> {
    // stdout carries the protobuf response; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    let args: Vec<_> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => run_plugin(),
        Some("-h" | "--help") => {
            print_usage(&args[0]);
            Ok(())
        }
        Some(input) => {
            let out_dir = PathBuf::from(args.get(2).map_or(".", String::as_str));
            let parameter = args.get(3).map_or("", String::as_str);
            run_standalone(input, out_dir, parameter)
        }
    }
}

fn run_plugin() -> Result<()> {
    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .context("couldn't read CodeGeneratorRequest from stdin")?;

    let response = plugin::respond_bytes(&buf);

    io::stdout()
        .write_all(&response)
        .context("couldn't write CodeGeneratorResponse to stdout")?;
    Ok(())
}

fn run_standalone(input: &str, out_dir: PathBuf, parameter: &str) -> Result<()> {
    let descriptor_bytes = if input == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("couldn't read descriptor set from stdin")?;
        buf
    } else {
        fs::read(input).with_context(|| format!("couldn't read {input}"))?
    };
    tracing::info!(bytes = descriptor_bytes.len(), "read descriptor set");

    let set = FileDescriptorSet::decode(descriptor_bytes.as_slice())
        .context("failed to decode file descriptor set")?;
    let options: Options = parameter.parse()?;
    let files = plugin::generate_set(&set, &options)?;

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("couldn't create {}", out_dir.display()))?;
    for file in &files {
        let path = out_dir.join(file.name());
        write_file(&path, file.content())?;
        tracing::info!(path = %path.display(), "generated");
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("couldn't write {}", path.display()))
}

fn print_usage(program: &str) {
    eprintln!("Twirp TypeScript client generator");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  protoc --plugin={program} --twirp_typescript_out=version=v6:out/ my.proto");
    eprintln!("  {program} <descriptor_set.pb> [out_dir] [parameter]");
    eprintln!("  {program} - [out_dir] [parameter] < descriptor_set.pb");
    eprintln!();
    eprintln!("ARGUMENTS:");
    eprintln!("  descriptor_set.pb   FileDescriptorSet from protoc");
    eprintln!("  out_dir             Output directory (default: .)");
    eprintln!("  parameter           Plugin options, e.g. version=v6,library=pbjs");
    eprintln!();
    eprintln!("With no arguments, runs as a protoc plugin on stdin/stdout.");
}
