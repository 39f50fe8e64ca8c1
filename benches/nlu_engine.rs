use std::env;

use bencher::{benchmark_group, benchmark_main, Bencher};
use snips_nlu_playground::SnipsNluPlayground;

const ENGINE_DIR_ENV: &str = "SNIPS_NLU_PLAYGROUND_BENCH_ENGINE_DIR";
const SENTENCE_ENV: &str = "SNIPS_NLU_PLAYGROUND_BENCH_SENTENCE";

fn load_nlu_engine() -> SnipsNluPlayground {
    match env::var(ENGINE_DIR_ENV) {
        Ok(engine_dir) => SnipsNluPlayground::from_path(engine_dir).unwrap(),
        Err(_) => SnipsNluPlayground::default(),
    }
}

fn nlu_parsing(b: &mut Bencher) {
    let nlu_engine = load_nlu_engine();
    let sentence = env::var(SENTENCE_ENV)
        .unwrap_or_else(|_| "Could you book a table at a restaurant near the airport?".to_string());

    b.iter(|| {
        let _ = nlu_engine.parse(&sentence, "huggingface");
    });
}

fn nlu_evaluation(b: &mut Bencher) {
    let nlu_engine = load_nlu_engine();

    b.iter(|| {
        let _ = nlu_engine.evaluate("");
    });
}

benchmark_group!(benches, nlu_parsing, nlu_evaluation);
benchmark_main!(benches);
