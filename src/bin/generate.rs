use clap::Parser;
use errgen::{
    components::{lexicon::Lexicon, tokenizer::WordTokenizer, Component},
    generate::{GenerateOptions, Generator},
    taxonomy::Taxonomy,
};
use fs_err as fs;
use std::io::{self, BufRead, BufWriter, Write};

#[derive(Parser)]
#[clap(version = "1.0")]
/// Reads one sentence per line and writes the sentences with injected errors as JSON lines.
struct Opts {
    /// File with one sentence per line. Reads from stdin if not given.
    input: Option<String>,
    /// Tab-separated lexicon dumps (`word\tlemma\ttag`).
    #[clap(long, short)]
    dump: Vec<String>,
    /// A binary lexicon as written by `--save-lexicon`. Takes precedence over `--dump`.
    #[clap(long)]
    lexicon: Option<String>,
    /// Writes the lexicon built from the dumps to this path.
    #[clap(long)]
    save_lexicon: Option<String>,
    /// JSON file with the weight and applicability of each enabled error category.
    #[clap(long, short)]
    taxonomy: Option<String>,
    #[clap(long, short, default_value = "1")]
    errors: usize,
    #[clap(long)]
    exact: bool,
    #[clap(long, short, default_value = "0")]
    seed: u64,
    /// Process sentences in parallel. The output is the same as without.
    #[clap(long)]
    parallel: bool,
}

fn main() -> Result<(), errgen::Error> {
    env_logger::init();
    let opts = Opts::parse();

    let lexicon = match &opts.lexicon {
        Some(path) => Lexicon::new(path)?,
        None => Lexicon::from_dumps(opts.dump.as_slice())?,
    };

    if let Some(path) = &opts.save_lexicon {
        lexicon.to_writer(BufWriter::new(fs::File::create(path)?))?;
    }

    let taxonomy = match &opts.taxonomy {
        Some(path) => Taxonomy::from_json(&fs::read_to_string(path)?)?,
        None => Taxonomy::default(),
    };

    let sentences: Vec<String> = match &opts.input {
        Some(path) => fs::read_to_string(path)?
            .lines()
            .map(|x| x.to_string())
            .collect(),
        None => io::stdin().lock().lines().collect::<Result<_, _>>()?,
    };

    let options = GenerateOptions {
        errors_per_sentence: opts.errors,
        exact_count_only: opts.exact,
        seed: opts.seed,
    };
    let generator = Generator::new(&taxonomy, &lexicon, options);
    let tokenizer = WordTokenizer::default();

    let output = if opts.parallel {
        generator.generate_par(&sentences, &tokenizer, &lexicon)
    } else {
        generator.generate(&sentences, &tokenizer, &lexicon)
    };

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for sentence in output {
        serde_json::to_writer(&mut writer, &sentence)?;
        writeln!(writer)?;
    }

    Ok(())
}
