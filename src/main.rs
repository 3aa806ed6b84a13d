use rand::{rngs::StdRng, thread_rng, SeedableRng};

use booster::deck::SealedDeck;
use cards::Catalog;

mod booster;
mod cards;

pub type Res<T> = Result<T, String>;

pub fn err<T, S: ToString>(message: S) -> Res<T> {
    Err(message.to_string())
}

fn main() {
    const USAGE: &str = "Usage: fab-boosters <packs> [seed]";

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let count = std::env::args()
        .nth(1)
        .map(|s| s.parse::<usize>().expect(&format!("Invalid pack count: {s}")))
        .expect(USAGE);
    let seed = std::env::args()
        .nth(2)
        .map(|s| s.parse::<u64>().expect(&format!("Invalid seed: {s}")));

    let catalog = Catalog::monarch();
    if let Err(e) = catalog.validate() {
        panic!("Invalid card catalog: {e}");
    }
    tracing::debug!("Loaded Monarch catalog with {} cards.", catalog.size());

    let generated = match seed {
        Some(seed) => booster::make_packs(&catalog, count, &mut StdRng::seed_from_u64(seed)),
        None => booster::make_packs(&catalog, count, &mut thread_rng()),
    };
    let packs = match generated {
        Ok(packs) => packs,
        Err(e) => panic!("Failed to generate packs: {e}"),
    };
    tracing::debug!("Generated {} Monarch booster(s).", packs.len());

    let deck = SealedDeck::from_packs("mon", packs);
    tracing::debug!(
        "Assembled {} with {} cards.",
        deck.name(),
        deck.cards().len()
    );
    match serde_json::ser::to_string_pretty(&deck) {
        Ok(body) => println!("{body}"),
        Err(e) => panic!("Failed to JSON encode deck: {e}"),
    }
}
