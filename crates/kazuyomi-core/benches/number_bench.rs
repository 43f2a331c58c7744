use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kazuyomi_core::TokenCategory::{Bracket as B, Delimiter as D, Unknown as U};
use kazuyomi_core::{Elements, NumberParser, ParseContext, Token, TokenCategory, Tokens};

fn tokens(parts: &[(TokenCategory, &str, bool)]) -> Tokens {
    parts
        .iter()
        .map(|&(category, content, enclosed)| Token::new(category, content, enclosed))
        .collect()
}

fn bench_episode_search(c: &mut Criterion) {
    let parser = NumberParser::new().unwrap();

    let inputs = vec![
        // [SubsPlease] Jujutsu Kaisen - 24 (1080p)
        tokens(&[
            (B, "[", true), (U, "SubsPlease", true), (B, "]", true), (D, " ", false),
            (U, "Jujutsu", false), (D, " ", false), (U, "Kaisen", false), (D, " ", false),
            (U, "-", false), (D, " ", false), (U, "24", false), (D, " ", false),
            (B, "(", true), (U, "1080p", true), (B, ")", true),
        ]),
        // Shingeki no Kyojin S04E28v2
        tokens(&[
            (U, "Shingeki", false), (D, " ", false), (U, "no", false), (D, " ", false),
            (U, "Kyojin", false), (D, " ", false), (U, "S04E28v2", false),
        ]),
        // [Group] One Piece 1084 (1085)
        tokens(&[
            (B, "[", true), (U, "Group", true), (B, "]", true), (D, " ", false),
            (U, "One", false), (D, " ", false), (U, "Piece", false), (D, " ", false),
            (U, "1084", false), (D, " ", false), (B, "(", true), (U, "1085", true),
            (B, ")", true),
        ]),
        // Railgun OP4a
        tokens(&[(U, "Railgun", false), (D, " ", false), (U, "OP4a", false)]),
        // Ookami to Koushinryou 07
        tokens(&[
            (U, "Ookami", false), (D, " ", false), (U, "to", false), (D, " ", false),
            (U, "Koushinryou", false), (D, " ", false), (U, "07", false),
        ]),
    ];

    c.bench_function("episode_search_single", |b| {
        b.iter(|| {
            let mut tokens = inputs[0].clone();
            let mut elements = Elements::new();
            let mut context = ParseContext::new();
            parser
                .session(black_box(&mut tokens), &mut elements, &mut context)
                .search_for_episode_number()
        });
    });

    c.bench_function("episode_search_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let mut tokens = input.clone();
                let mut elements = Elements::new();
                let mut context = ParseContext::new();
                let _ = parser
                    .session(black_box(&mut tokens), &mut elements, &mut context)
                    .search_for_episode_number();
            }
        });
    });
}

criterion_group!(benches, bench_episode_search);
criterion_main!(benches);
