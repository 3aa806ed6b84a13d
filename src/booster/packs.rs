use rand::{seq::SliceRandom, Rng};

use crate::{
    cards::{CardId, Catalog, Pool},
    err, Res,
};

pub type Pack = Vec<CardId>;

// One in 960 boosters carries the fabled card as its foil.
const FABLED_RATE: f64 = 1.0 / 960.0;
// Each printed legendary rolls 1:480 for the foil slot.
const LEGENDARY_RATE: f64 = 1.0 / 480.0;
// Cold foil equipment and weapons roll 1:384 per printing.
const COLD_FOIL_RATE: f64 = 1.0 / 384.0;
// One booster in four upgrades the second rare to a majestic.
const RARE_UPGRADE_RATE: f64 = 1.0 / 4.0;

const COMMON_SLOTS: usize = 11;

// Fallback foil rarity split: 11 commons to 1.75 rares to 0.25 majestics.
const FOIL_COMMON_CEILING: f64 = 11.0 / 13.0;
const FOIL_RARE_CEILING: f64 = (11.0 + 1.75) / 13.0;

fn roll<R: Rng>(catalog: &Catalog, pool: Pool, rng: &mut R) -> Res<CardId> {
    match catalog.cards_of(pool).choose(rng) {
        Some(card) => Ok(card.clone()),
        None => err(format!("No {pool:?} in catalog.")),
    }
}

/// Roll the upgradeable rare slot. One booster in four promotes this slot
/// to the majestic pool, in which majestics carry double weight against
/// majestic weapons.
fn roll_rare_plus<R: Rng>(catalog: &Catalog, rng: &mut R) -> Res<CardId> {
    if !rng.gen_bool(RARE_UPGRADE_RATE) {
        return roll(catalog, Pool::Rares, rng);
    }

    let majestics = catalog.cards_of(Pool::Majestics);
    let weapons = catalog.cards_of(Pool::MajesticWeapons);
    let weighted: Vec<&CardId> = majestics
        .iter()
        .chain(majestics.iter())
        .chain(weapons.iter())
        .collect();
    match weighted.choose(rng) {
        Some(card) => Ok((*card).clone()),
        None => err("No Majestics or MajesticWeapons in catalog."),
    }
}

/// Give each card in `cards` an independent 1-in-N roll at the foil slot
/// and take the first winner, so the odds that the pool lands the slot
/// scale with the number of cards printed at that rarity.
fn lucky_entry<'a, R, I>(cards: I, rate: f64, rng: &mut R) -> Option<CardId>
where
    R: Rng,
    I: Iterator<Item = &'a CardId>,
{
    for card in cards {
        if rng.gen_bool(rate) {
            return Some(card.clone());
        }
    }
    None
}

/// Roll the foil slot. Checks run rarest first and the first one to
/// produce a candidate wins; later checks are skipped entirely.
fn roll_foil<R: Rng>(catalog: &Catalog, rng: &mut R) -> Res<CardId> {
    if rng.gen_bool(FABLED_RATE) {
        return roll(catalog, Pool::Fabled, rng);
    }

    let legendaries = catalog.cards_of(Pool::Legendaries);
    if let Some(card) = lucky_entry(legendaries.iter(), LEGENDARY_RATE, rng) {
        return Ok(card);
    }

    let cold_foils = catalog
        .cards_of(Pool::CommonEquipment)
        .iter()
        .chain(catalog.cards_of(Pool::MajesticWeapons).iter());
    if let Some(card) = lucky_entry(cold_foils, COLD_FOIL_RATE, rng) {
        return Ok(card);
    }

    let spin: f64 = rng.gen();
    if spin < FOIL_COMMON_CEILING {
        roll(catalog, Pool::Commons, rng)
    } else if spin < FOIL_RARE_CEILING {
        roll(catalog, Pool::Rares, rng)
    } else {
        roll(catalog, Pool::Majestics, rng)
    }
}

/// Generate one booster from the catalog using the supplied random source.
///
/// Draws are independent and with replacement; the catalog is never
/// mutated. Fails only if a drawn-from pool is empty, which
/// [`Catalog::validate`] rules out up front.
pub fn make_pack<R: Rng>(catalog: &Catalog, rng: &mut R) -> Res<Pack> {
    let equipment = roll(catalog, Pool::CommonEquipment, rng)?;

    let mut commons = Vec::with_capacity(COMMON_SLOTS);
    for _ in 0..COMMON_SLOTS {
        commons.push(roll(catalog, Pool::Commons, rng)?);
    }

    let rare = roll(catalog, Pool::Rares, rng)?;
    let rare_plus = roll_rare_plus(catalog, rng)?;

    let mut tokens = vec![roll(catalog, Pool::Tokens, rng)?];
    if tokens[0] != *catalog.single_token() {
        tokens.push(roll(catalog, Pool::Tokens, rng)?);
    }

    let foil = roll_foil(catalog, rng)?;

    // Slot order is part of the output contract: commons split 8/3 around
    // the rare block, tokens last.
    let mut pack = Vec::with_capacity(15 + tokens.len());
    pack.extend_from_slice(&commons[..8]);
    pack.push(equipment);
    pack.push(rare);
    pack.push(rare_plus);
    pack.push(foil);
    pack.extend_from_slice(&commons[8..]);
    pack.append(&mut tokens);
    Ok(pack)
}

/// Generate `count` independent boosters.
pub fn make_packs<R: Rng>(catalog: &Catalog, count: usize, rng: &mut R) -> Res<Vec<Pack>> {
    let mut packs = Vec::with_capacity(count);
    for _ in 0..count {
        packs.push(make_pack(catalog, rng)?);
    }
    Ok(packs)
}
