use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use fsm::{accepts, determinize, remove_unreachable, remove_useless, Automaton};
use log::{error, info};

const DEFAULT_INPUT: &str = "transitions.txt";

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_owned());

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            error!("cannot open '{path}': {err}");
            let code = err.raw_os_error().and_then(|c| u8::try_from(c).ok());
            return ExitCode::from(code.unwrap_or(1));
        }
    };

    let mut automaton = match Automaton::from_reader(BufReader::new(file)) {
        Ok(automaton) => automaton,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    println!("NFA transition table:\n{}", automaton.table());

    let removed = remove_useless(&mut automaton);
    info!("removed {removed} useless states");
    println!("after useless-state removal:\n{}", automaton.table());

    let merges = determinize(&mut automaton);
    info!("applied {merges} merges");
    println!("DFA transition table:\n{}", automaton.table());

    let removed = remove_unreachable(&mut automaton);
    info!("removed {removed} unreachable states");
    println!("after unreachable-state removal:\n{}", automaton.table());

    for word in args {
        let verdict = if accepts(&automaton, &word) {
            "accepted"
        } else {
            "rejected"
        };
        println!("'{word}': {verdict}");
    }
    ExitCode::SUCCESS
}
