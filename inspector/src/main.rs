use std::process::exit;

use clap::{Parser, Subcommand};
use command::{Action, Command};
use libinspector::{list, lookup_table, parse_word, Inspection, ListFilter};
use libpvmisa::instruction::{
    load::{LoadLength, LoadType},
    operation::Operation,
    register::Register,
};
use log::{debug, warn};

mod command;

const CHEATSHEET: &str = "\
Enter an instruction word in hex, with or without a leading '0x'.
The first two digits are the destination and source registers, the next digit holds
the load length and load type, and the last digit is the ALU operation.
Example: 1023 divides an immediate 1 byte wide with src a into x.

Commands:
  <hex>                     inspect a word
  list [key=value ...]      list every valid word; keys: op, type, len, src, dst
  makelut                   print every valid word as a lookup table
  help                      show this text
  q                         exit";

#[derive(Parser, Debug)]
#[command(version, about = "Decode and validate PVM instruction words")]
pub struct Args {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Prompt for instruction words until `q` or end of input. The default.
    Interactive,

    /// Print every valid instruction word.
    List(ListArgs),

    /// Print every valid instruction word as a comma separated lookup table.
    Makelut,

    /// Inspect the given hex words and exit.
    Decode {
        #[arg(required = true)]
        words: Vec<String>,
    },
}

#[derive(clap::Args, Debug)]
struct ListArgs {
    #[arg(long)]
    operation: Option<Operation>,

    #[arg(long)]
    load_type: Option<LoadType>,

    /// Mnemonic ("4 byte") or byte count.
    #[arg(long)]
    load_length: Option<LoadLength>,

    #[arg(long)]
    source: Option<Register>,

    #[arg(long)]
    destination: Option<Register>,
}

impl From<ListArgs> for ListFilter {
    fn from(args: ListArgs) -> Self {
        Self {
            operation: args.operation,
            load_type: args.load_type,
            load_length: args.load_length,
            source: args.source,
            destination: args.destination,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let result = match args.mode.unwrap_or(Mode::Interactive) {
        Mode::Interactive => interactive(),
        Mode::List(list_args) => {
            print_listing(list_args.into());
            Ok(())
        }
        Mode::Makelut => {
            println!("{}", lookup_table());
            Ok(())
        }
        Mode::Decode { words } => decode_words(&words),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        exit(1);
    }
}

fn interactive() -> anyhow::Result<()> {
    println!("{}\n", CHEATSHEET);

    while let Some(command) = Command::prompt()? {
        debug!("Read command {:?}", command);

        match command.action() {
            Ok(Action::Quit) => {
                println!("exiting");
                return Ok(());
            }
            Ok(action) => run(action),
            Err(e) => {
                warn!("Rejected command {:?}: {}", command, e);
                eprintln!("!> {}", e);
            }
        }
    }

    Ok(())
}

fn run(action: Action) {
    match action {
        Action::Inspect(word) => println!("{}\n", Inspection::new(word)),
        Action::List(filter) => print_listing(filter),
        Action::MakeLut => println!("{}", lookup_table()),
        Action::Help => println!("{}\n", CHEATSHEET),
        Action::Quit | Action::Nothing => {}
    }
}

fn print_listing(filter: ListFilter) {
    debug!("Listing with {:?}", filter);

    let mut count = 0;
    for (word, _) in list(filter) {
        println!("{}\n", Inspection::new(word));
        count += 1;
    }

    println!("total valid instructions: {}", count);
}

fn decode_words(words: &[String]) -> anyhow::Result<()> {
    let mut malformed = 0;

    for text in words {
        match parse_word(text) {
            Ok(word) => println!("{}\n", Inspection::new(word)),
            Err(e) => {
                eprintln!("!> {}", e);
                malformed += 1;
            }
        }
    }

    if malformed != 0 {
        anyhow::bail!("{} of {} words were malformed", malformed, words.len());
    }

    Ok(())
}
