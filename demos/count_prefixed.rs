//! Count-prefixed words, parsed and printed by one grammar.
//!
//! Each argument is parsed as a sequence of `<count><letters>` items; the
//! recovered words are printed back through the same grammar.
//!
//! ```text
//! cargo run --example count_prefixed -- 1a2bc3def abcdef
//! RUST_LOG=isogram=trace cargo run --example count_prefixed -- 3bob4jane
//! ```

use isogram::grammar::text::{alpha, chars_to_string, integer};
use isogram::grammar::{
    Grammar, adapt, bind_checked, eof, many, print, replicate, seq_left, try_parse,
};
use isogram::optics::Iso;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn count_prefixed() -> impl Grammar<String, Value = Vec<String>> + Clone {
    seq_left(
        many(bind_checked(
            integer(),
            |count: i64| {
                adapt(
                    chars_to_string().to_prism(),
                    replicate(usize::try_from(count).unwrap_or(0), alpha()),
                )
            },
            |word: &String| i64::try_from(word.chars().count()).unwrap_or(i64::MAX),
        )),
        eof(),
    )
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,isogram=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let grammar = count_prefixed();
    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        vec!["1a2bc3def".to_string(), "abcdef".to_string()]
    } else {
        inputs
    };

    for input in inputs {
        match try_parse(&grammar, input.clone()) {
            Ok(words) => {
                tracing::info!(%input, ?words, "parsed");
                match print(&grammar, words) {
                    Ok(printed) => tracing::info!(%printed, "printed back"),
                    Err(error) => tracing::warn!(%error, "could not print"),
                }
            }
            Err(error) => tracing::warn!(%input, %error, "could not parse"),
        }
    }

    let names = ["bob", "jane", "nancy", "martha"].map(String::from).to_vec();
    match print::<String, _>(&grammar, names) {
        Ok(printed) => tracing::info!(%printed, "printed names"),
        Err(error) => tracing::warn!(%error, "could not print names"),
    }
}
