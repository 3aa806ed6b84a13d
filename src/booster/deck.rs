use uuid::Uuid;

use crate::cards::CardId;

use super::Pack;

/// Private sealed-deck document wrapping a batch of generated boosters,
/// in the shape the deck-building frontend consumes. Cards are flattened
/// in generation order; mapping ids to names and images is the frontend's
/// job.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SealedDeck {
    card_back: u32,
    format: &'static str,
    name: String,
    notes: Option<String>,
    parent_id: Option<String>,
    slug: Uuid,
    visibility: &'static str,
    cards: Vec<CardId>,
}

impl SealedDeck {
    pub fn from_packs(set: &str, packs: Vec<Pack>) -> Self {
        let count = packs.len();
        Self {
            card_back: 1,
            format: "boosters",
            name: format!("{count} Booster(s) of {}", set.to_uppercase()),
            notes: None,
            parent_id: None,
            slug: Uuid::new_v4(),
            visibility: "private",
            cards: packs.into_iter().flatten().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }
}

#[cfg(test)]
mod test {
    use crate::cards::CardId;

    use super::SealedDeck;

    #[test]
    fn test_from_packs() {
        let packs = vec![
            vec![CardId::from("MON014"), CardId::from("MON306")],
            vec![CardId::from("MON042"), CardId::from("MON001")],
        ];
        let deck = SealedDeck::from_packs("mon", packs);

        assert_eq!(deck.name(), "2 Booster(s) of MON");
        let ids: Vec<&str> = deck.cards().iter().map(|card| card.as_str()).collect();
        assert_eq!(ids, vec!["MON014", "MON306", "MON042", "MON001"]);
    }

    #[test]
    fn test_serialized_shape() {
        let deck = SealedDeck::from_packs("mon", vec![vec![CardId::from("MON014")]]);
        let value = serde_json::to_value(&deck).unwrap();

        assert_eq!(value["cardBack"], 1);
        assert_eq!(value["format"], "boosters");
        assert_eq!(value["visibility"], "private");
        assert!(value["parentId"].is_null());
        assert!(value["slug"].is_string());
        assert_eq!(value["cards"][0], "MON014");
    }
}
