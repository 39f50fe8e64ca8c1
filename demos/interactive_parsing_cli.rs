use std::fs;
use std::io;
use std::io::Write;

use clap::{App, Arg};
use serde::Serialize;
use snips_nlu_playground::sample_data::sample_training_data_json;
use snips_nlu_playground::{EngineConfig, SnipsNluPlayground};

fn print_result<T: Serialize + std::fmt::Display>(result: &T, markdown: bool) {
    if markdown {
        println!("{}", result);
    } else {
        println!("{}", serde_json::to_string_pretty(result).unwrap());
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .default_format_timestamp_nanos(true)
        .init();

    let matches = App::new("snips-nlu-playground")
        .about("Snips NLU playground CLI for parsing intents, simulating training and evaluation")
        .arg(
            Arg::with_name("ENGINE_DIR")
                .takes_value(true)
                .index(1)
                .help("path to an engine directory (built-in keyword rules are used by default)"),
        )
        .arg(
            Arg::with_name("backend")
                .short("b")
                .long("backend")
                .takes_value(true)
                .default_value("huggingface")
                .help("backend label reported along with the results"),
        )
        .arg(
            Arg::with_name("intents_alternatives")
                .short("i")
                .long("intents-alternatives")
                .takes_value(true)
                .help("number of alternative intents to return in the output"),
        )
        .arg(
            Arg::with_name("markdown")
                .short("m")
                .long("markdown")
                .help("render results as markdown instead of json"),
        )
        .arg(
            Arg::with_name("train")
                .long("train")
                .takes_value(true)
                .value_name("TRAINING_DATA_FILE")
                .conflicts_with_all(&["evaluate", "sample_data"])
                .help("simulate a training run on a json training data file"),
        )
        .arg(
            Arg::with_name("epochs")
                .long("epochs")
                .takes_value(true)
                .default_value("10")
                .help("number of epochs reported by the training run"),
        )
        .arg(
            Arg::with_name("no_delay")
                .long("no-delay")
                .help("skip the pause between training progress steps"),
        )
        .arg(
            Arg::with_name("evaluate")
                .long("evaluate")
                .conflicts_with("sample_data")
                .help("print the evaluation report of the engine"),
        )
        .arg(
            Arg::with_name("sample_data")
                .long("sample-data")
                .help("print the sample training data"),
        )
        .get_matches();

    let backend = matches.value_of("backend").unwrap();
    let markdown = matches.is_present("markdown");
    let intents_alternatives = matches
        .value_of("intents_alternatives")
        .map(|v| v.to_string().parse::<usize>().unwrap())
        .unwrap_or(0);

    if matches.is_present("sample_data") {
        println!("{}", sample_training_data_json().unwrap());
        return;
    }

    println!("\nLoading the nlu engine...");
    let engine = match matches.value_of("ENGINE_DIR") {
        Some(engine_dir) => SnipsNluPlayground::from_path(engine_dir).unwrap(),
        None => SnipsNluPlayground::with_config(EngineConfig::default()).unwrap(),
    };
    let engine = if matches.is_present("no_delay") {
        engine.without_delays()
    } else {
        engine
    };

    if let Some(training_file) = matches.value_of("train") {
        let epochs = matches
            .value_of("epochs")
            .map(|v| v.parse::<u32>().unwrap())
            .unwrap_or(10);
        // Unreadable files go through the same fallback as malformed training data
        let training_data = fs::read_to_string(training_file).unwrap_or_default();
        let report = engine.train(&training_data, backend, epochs, |step| {
            println!("[{}/{}] {}", step.index + 1, step.total, step.message)
        });
        print_result(&report, markdown);
        return;
    }

    if matches.is_present("evaluate") {
        print_result(&engine.evaluate(""), markdown);
        return;
    }

    let mut rng = rand::thread_rng();
    loop {
        print!("> ");
        io::stdout().flush().unwrap();
        let mut query = String::new();
        if io::stdin().read_line(&mut query).unwrap() == 0 {
            break;
        }
        let result = engine
            .parse_with_alternatives(query.trim(), backend, intents_alternatives, &mut rng)
            .unwrap();
        print_result(&result, markdown);
    }
}
