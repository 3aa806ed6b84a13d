use std::fmt::{self, Debug, Display};

use crate::{err, Res};

pub mod monarch;

/// Opaque printed-card identifier, e.g. `MON042`. Nothing beyond identity
/// is read out of it.
#[derive(Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CardId(String);

impl CardId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pool {
    Tokens,
    Legendaries,
    Majestics,
    MajesticWeapons,
    Rares,
    Commons,
    CommonEquipment,
    Fabled,
}

impl Pool {
    pub const ALL: &'static [Pool] = &[
        Pool::Tokens,
        Pool::Legendaries,
        Pool::Majestics,
        Pool::MajesticWeapons,
        Pool::Rares,
        Pool::Commons,
        Pool::CommonEquipment,
        Pool::Fabled,
    ];
}

/// The pre-classified card set the generator draws from. Built once from
/// static set data and read-only afterwards; the generator assumes every
/// pool is non-empty, which [`Catalog::validate`] checks up front.
pub struct Catalog {
    tokens: Vec<CardId>,
    legendaries: Vec<CardId>,
    majestics: Vec<CardId>,
    majestic_weapons: Vec<CardId>,
    rares: Vec<CardId>,
    commons: Vec<CardId>,
    common_equipment: Vec<CardId>,
    fabled: Vec<CardId>,
    single_token: CardId,
}

fn ids(raw: &[&str]) -> Vec<CardId> {
    raw.iter().map(|id| CardId::from(*id)).collect()
}

impl Catalog {
    /// Catalog for the Monarch expansion.
    pub fn monarch() -> Self {
        Self {
            tokens: ids(monarch::TOKENS),
            legendaries: ids(monarch::LEGENDARIES),
            majestics: ids(monarch::MAJESTICS),
            majestic_weapons: ids(monarch::MAJESTIC_WEAPONS),
            rares: ids(monarch::RARES),
            commons: ids(monarch::COMMONS),
            common_equipment: ids(monarch::COMMON_EQUIPMENT),
            fabled: ids(monarch::FABLED),
            single_token: CardId::from(monarch::SINGLE_TOKEN),
        }
    }

    pub fn cards_of(&self, pool: Pool) -> &[CardId] {
        match pool {
            Pool::Tokens => &self.tokens,
            Pool::Legendaries => &self.legendaries,
            Pool::Majestics => &self.majestics,
            Pool::MajesticWeapons => &self.majestic_weapons,
            Pool::Rares => &self.rares,
            Pool::Commons => &self.commons,
            Pool::CommonEquipment => &self.common_equipment,
            Pool::Fabled => &self.fabled,
        }
    }

    /// The token whose draw suppresses the second token draw.
    pub fn single_token(&self) -> &CardId {
        &self.single_token
    }

    /// Check the preconditions the generator relies on: every pool holds at
    /// least one card and the single-token sentinel is a member of the token
    /// pool. Run once after construction rather than per draw.
    pub fn validate(&self) -> Res<()> {
        for &pool in Pool::ALL {
            if self.cards_of(pool).is_empty() {
                return err(format!("No {pool:?} in catalog."));
            }
        }
        if !self.tokens.contains(&self.single_token) {
            return err(format!(
                "Single-token sentinel {} missing from token pool.",
                self.single_token
            ));
        }
        Ok(())
    }

    pub fn size(&self) -> usize {
        Pool::ALL.iter().map(|&pool| self.cards_of(pool).len()).sum()
    }

    /// Empty a pool, for exercising generator error paths.
    #[cfg(test)]
    pub(crate) fn drop_pool(&mut self, pool: Pool) {
        match pool {
            Pool::Tokens => self.tokens.clear(),
            Pool::Legendaries => self.legendaries.clear(),
            Pool::Majestics => self.majestics.clear(),
            Pool::MajesticWeapons => self.majestic_weapons.clear(),
            Pool::Rares => self.rares.clear(),
            Pool::Commons => self.commons.clear(),
            Pool::CommonEquipment => self.common_equipment.clear(),
            Pool::Fabled => self.fabled.clear(),
        }
    }
}

impl Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Catalog {{ tokens: {}, legendaries: {}, majestics: {}, majesticWeapons: {}, \
             rares: {}, commons: {}, commonEquipment: {}, fabled: {} }}",
            self.tokens.len(),
            self.legendaries.len(),
            self.majestics.len(),
            self.majestic_weapons.len(),
            self.rares.len(),
            self.commons.len(),
            self.common_equipment.len(),
            self.fabled.len()
        )
    }
}
