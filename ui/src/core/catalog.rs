//! Static destination catalog. Seeded at build time, validated once on first
//! access, never mutated afterwards.

use std::fmt;

use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Serialize;

const IMG_MALINAO: Asset = asset!("/assets/images/malinao.svg");
const IMG_LIBERTY: Asset = asset!("/assets/images/liberty.svg");
const IMG_THOUSAND_ISLAND: Asset = asset!("/assets/images/thousand-island.svg");
const IMG_BASILICA: Asset = asset!("/assets/images/basilica.svg");

/// One bookable destination card. The catalog order is the display order and
/// the carousel index alignment.
#[derive(Debug, Clone, Serialize)]
pub struct Destination {
    /// Unique positive integer; stable identity for routing.
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    /// Pre-formatted price string, currency included.
    pub price: &'static str,
    #[serde(skip)]
    pub image: Asset,
    /// Review score in [0, 5], half-step granularity.
    pub reviews: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    NonPositiveId,
    DuplicateId(u32),
    RatingOutOfRange(u32),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NonPositiveId => write!(f, "destination id must be positive"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate destination id {id}"),
            CatalogError::RatingOutOfRange(id) => {
                write!(f, "destination {id} has a review score outside [0, 5]")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Check the catalog invariants: ids positive and unique, review scores in
/// range. Runs once against the compiled-in seed; also exercised directly by
/// tests with deliberately broken inputs.
pub fn validate(entries: &[Destination]) -> Result<(), CatalogError> {
    let mut seen = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.id == 0 {
            return Err(CatalogError::NonPositiveId);
        }
        if seen.contains(&entry.id) {
            return Err(CatalogError::DuplicateId(entry.id));
        }
        seen.push(entry.id);
        if !(0.0..=5.0).contains(&entry.reviews) {
            return Err(CatalogError::RatingOutOfRange(entry.id));
        }
    }
    Ok(())
}

static CATALOG: Lazy<Vec<Destination>> = Lazy::new(|| {
    let entries = seed();
    validate(&entries).expect("compiled-in destination catalog is well-formed");
    entries
});

/// The validated catalog, in display order.
pub fn destinations() -> &'static [Destination] {
    &CATALOG
}

/// Look a destination up by its routing id.
pub fn destination_by_id(id: u32) -> Option<&'static Destination> {
    destinations().iter().find(|dest| dest.id == id)
}

fn seed() -> Vec<Destination> {
    vec![
        Destination {
            id: 1,
            name: "Mt. Malinao",
            location: "Malinao, Philippines",
            price: "€ 340",
            image: IMG_MALINAO,
            reviews: 4.5,
        },
        Destination {
            id: 2,
            name: "Statue of Liberty",
            location: "New York, USA",
            price: "€ 340",
            image: IMG_LIBERTY,
            reviews: 5.0,
        },
        Destination {
            id: 3,
            name: "Thousand Island",
            location: "North Vietnam",
            price: "€ 340",
            image: IMG_THOUSAND_ISLAND,
            reviews: 4.0,
        },
        Destination {
            id: 4,
            name: "Basilica Sacre",
            location: "Paris, France",
            price: "€ 340",
            image: IMG_BASILICA,
            reviews: 3.5,
        },
        Destination {
            id: 5,
            name: "Mt. Malinao",
            location: "Malinao, Philippines",
            price: "€ 340",
            image: IMG_MALINAO,
            reviews: 4.5,
        },
        Destination {
            id: 6,
            name: "Statue of Liberty",
            location: "New York, USA",
            price: "€ 340",
            image: IMG_LIBERTY,
            reviews: 5.0,
        },
        Destination {
            id: 7,
            name: "Thousand Island",
            location: "North Vietnam",
            price: "€ 340",
            image: IMG_THOUSAND_ISLAND,
            reviews: 4.0,
        },
        Destination {
            id: 8,
            name: "Basilica Sacre",
            location: "Paris, France",
            price: "€ 340",
            image: IMG_BASILICA,
            reviews: 3.5,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_passes_validation() {
        let entries = seed();
        assert!(validate(&entries).is_ok());
        assert_eq!(entries.len(), 8);
    }

    #[test]
    fn catalog_ids_align_with_display_order() {
        let entries = destinations();
        for (index, dest) in entries.iter().enumerate() {
            assert_eq!(dest.id as usize, index + 1);
        }
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut entries = seed();
        entries[3].id = entries[0].id;
        assert_eq!(
            validate(&entries),
            Err(CatalogError::DuplicateId(entries[0].id))
        );
    }

    #[test]
    fn zero_id_is_rejected() {
        let mut entries = seed();
        entries[0].id = 0;
        assert_eq!(validate(&entries), Err(CatalogError::NonPositiveId));
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let mut entries = seed();
        entries[2].reviews = 5.5;
        assert_eq!(
            validate(&entries),
            Err(CatalogError::RatingOutOfRange(entries[2].id))
        );

        entries[2].reviews = -0.5;
        assert_eq!(
            validate(&entries),
            Err(CatalogError::RatingOutOfRange(entries[2].id))
        );
    }

    #[test]
    fn lookup_by_id_resolves_and_misses() {
        assert_eq!(destination_by_id(3).map(|d| d.name), Some("Thousand Island"));
        assert!(destination_by_id(99).is_none());
    }

    #[test]
    fn catalog_serializes_for_export() {
        let json = serde_json::to_string(destinations()).expect("catalog serializes");
        assert!(json.contains("Mt. Malinao"));
        assert!(json.contains("\"id\":1"));
    }
}
