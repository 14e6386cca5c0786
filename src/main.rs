//! Terminal front end for the Haunted House adventure.
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use haunted_house::engine::{Output, OutputBlock};
use haunted_house::save::DEFAULT_SAVE_FILE;
use haunted_house::world::World;
use haunted_house::{GameState, load_world_from_file};

#[derive(Parser)]
#[command(name = "haunted_house")]
#[command(about = "A small haunted house text adventure")]
#[command(version)]
struct Cli {
    /// TOML world file to play instead of the built-in house
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// Where `save` and `load` keep the game
    #[arg(short, long, default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn flush_output(out: Output) {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                if printed_anything {
                    println!();
                }
                println!("{}", t);
            }
            OutputBlock::Text(line) => println!("{}", line),
            OutputBlock::Event(ev) => {
                if !started_events && printed_anything {
                    println!(); // visual separation before first event
                }
                started_events = true;
                println!("{}", ev);
            }
            OutputBlock::Exits(exits) => println!("{}", exits),
        }
        printed_anything = true;
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let world = match &cli.world {
        Some(path) => match load_world_from_file(path) {
            Ok(w) => {
                log::info!("using world file {}", path.display());
                w
            }
            Err(e) => {
                eprintln!("Failed to load world file '{}': {e}", path.display());
                std::process::exit(1);
            }
        },
        None => World::haunted_house(),
    };

    println!("Welcome to {}!", world.name);
    if !world.desc.trim().is_empty() {
        println!("{}", world.desc.trim());
    }
    println!();
    println!("Type 'help' for commands, 'quit' to exit.\n");

    let mut state = GameState::new(world).with_save_path(cli.save_file);
    flush_output(state.describe_current());

    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin.read_line(&mut input)?;
        if bytes_read == 0 {
            println!("\nGoodbye.");
            break;
        }

        let (out, quit) = state.step(&input);
        flush_output(out);

        if quit {
            break;
        }
    }

    Ok(())
}
