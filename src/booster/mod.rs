pub mod deck;
mod packs;

pub use packs::{make_pack, make_packs, Pack};
