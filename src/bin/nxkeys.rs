extern crate nxkeys;
extern crate structopt;

use log::{Level, LevelFilter, Log, Metadata, Record};
use nxkeys::error::Error;
use nxkeys::keyfile::load_key_value_file;
use nxkeys::processor::{KeyOptions, Keys};
use nxkeys::titlekey::TitleKeyManager;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "nxkeys", about = "Derive the Switch key hierarchy from key files")]
enum Opt {
    /// Load key files, derive every key possible, and print the result.
    #[structopt(name = "derive")]
    Derive {
        /// Key file to load. May be repeated, later files win.
        #[structopt(short = "k", long = "keyset", parse(from_os_str))]
        key_files: Vec<PathBuf>,

        /// Sets the title keys file to use.
        #[structopt(short = "t", long = "titlekeys", parse(from_os_str))]
        titlekeys: Option<PathBuf>,

        /// Use development keys.
        #[structopt(long = "dev")]
        dev: bool,

        /// Print the keys as a JSON object instead of a key file.
        #[structopt(long = "json")]
        json: bool,

        /// Print informational messages too.
        #[structopt(short = "v", long = "verbose")]
        verbose: bool,
    },
    /// List the rights ids of a title keys file.
    #[structopt(name = "titlekeys")]
    Titlekeys {
        /// Sets the title keys file to use.
        #[structopt(short = "t", long = "titlekeys", parse(from_os_str))]
        titlekeys: PathBuf,
    },
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            Level::Error => "Error",
            Level::Warn => "Warning",
            Level::Info => "Info",
            Level::Debug => "Debug",
            Level::Trace => "Trace",
        };
        eprintln!("[{}]: {}", level, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logger(verbose: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });
    }
}

fn derive(options: &KeyOptions, json: bool) -> Result<(), Error> {
    let keys = Keys::load(options);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &keys.keyset)?;
        writeln!(out)?;
    } else {
        keys.keyset.write_key_file(&mut out)?;
    }
    Ok(())
}

fn list_titlekeys(path: &Path) -> Result<(), Error> {
    let mut titlekeys = TitleKeyManager::new();
    load_key_value_file(path, |k, v| titlekeys.load_title_key(k, v))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut entries: Vec<_> = titlekeys.iter().collect();
    entries.sort_by_key(|(rights_id, _)| rights_id.to_string());
    for (rights_id, access_key) in entries {
        writeln!(out, "{} = {}", rights_id, access_key)?;
    }
    Ok(())
}

fn process_args(app: &Opt) {
    let res = match app {
        Opt::Derive {
            ref key_files,
            ref titlekeys,
            dev,
            json,
            verbose,
        } => {
            init_logger(*verbose);
            let options = KeyOptions {
                key_files: key_files.clone(),
                titlekey_file: titlekeys.clone(),
                dev: *dev,
            };
            derive(&options, *json)
        }
        Opt::Titlekeys { ref titlekeys } => {
            init_logger(false);
            list_titlekeys(titlekeys)
        }
    };

    if let Err(e) = res {
        println!("Error: {}", e);
        process::exit(1)
    }
}

fn main() {
    process_args(&Opt::from_args());
}
