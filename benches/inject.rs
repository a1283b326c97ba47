use criterion::{black_box, criterion_group, criterion_main, Criterion};
use errgen::{
    components::{lexicon::Lexicon, tokenizer::WordTokenizer},
    generate::{sentence_rng, GenerateOptions, Generator},
    properties::Tag,
    taxonomy::Taxonomy,
};
use std::time::Duration;

const DUMP: &str = "the\tthe\tDT
dog\tdog\tNN
dogs\tdog\tNNS
she\tshe\tPRP
her\tshe\tPRP
see\tsee\tVB
sees\tsee\tVBZ
seeing\tsee\tVBG
saw\tsee\tVBD
";

const SENTENCE: &str = "She saw the dog and the dog sees her in the garden .";

fn lexicon() -> Lexicon {
    let mut lexicon = Lexicon::default();
    lexicon
        .extend_from_dump(DUMP.as_bytes())
        .expect("in-memory dump is readable");
    lexicon
}

fn inject_sentence(c: &mut Criterion) {
    let lexicon = lexicon();
    let taxonomy = Taxonomy::default();
    let options = GenerateOptions {
        errors_per_sentence: 3,
        ..GenerateOptions::default()
    };
    let generator = Generator::new(&taxonomy, &lexicon, options);
    let tagging = lexicon
        .tagging(&WordTokenizer::default(), SENTENCE)
        .expect("tokens and tags are aligned");

    let mut index = 0;
    c.bench_function("inject sentence", |b| {
        b.iter(|| {
            index += 1;
            generator.inject(black_box(&tagging), SENTENCE, &mut sentence_rng(0, index))
        })
    });
}

fn generate_batch(c: &mut Criterion) {
    let lexicon = lexicon();
    let taxonomy = Taxonomy::default();
    let generator = Generator::new(&taxonomy, &lexicon, GenerateOptions::default());
    let tokenizer = WordTokenizer::default();
    let sentences = vec![SENTENCE; 1000];

    c.bench_function("generate batch", |b| {
        b.iter(|| generator.generate(&sentences, &tokenizer, &lexicon))
    });
    c.bench_function("generate batch parallel", |b| {
        b.iter(|| generator.generate_par(&sentences, &tokenizer, &lexicon))
    });
}

fn no_warmup_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .warm_up_time(Duration::from_nanos(1))
}

criterion_group!(
name = inject;
config = no_warmup_criterion();
targets =
    inject_sentence,
    generate_batch,
);

criterion_main!(inject);
