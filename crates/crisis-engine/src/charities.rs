//! Charity catalog and the crisis → charity join.

use std::cmp::Ordering;

use crisis_cache::{CHARITIES_KEY, Cache};
use crisis_config::CharitiesConfig;
use crisis_core::{Charity, Crisis, CrisisCategory};
use crisis_sources::{SourceError, embedded};

#[derive(Debug, Clone)]
pub struct CharityCatalog {
    charities: Vec<Charity>,
    min_rating: u8,
    max_per_crisis: usize,
}

impl CharityCatalog {
    pub fn new(charities: Vec<Charity>, config: &CharitiesConfig) -> Self {
        Self {
            charities,
            min_rating: config.min_rating,
            max_per_crisis: config.max_per_crisis,
        }
    }

    /// Catalog from the cache when fresh, else from the embedded list, which
    /// is then written back to the cache.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Parse`] if the embedded list does not decode.
    pub fn load(cache: &Cache, config: &CharitiesConfig) -> Result<Self, SourceError> {
        if let Some(cached) = cache.get::<Vec<Charity>>(CHARITIES_KEY) {
            tracing::debug!(count = cached.len(), "charity catalog from cache");
            return Ok(Self::new(cached, config));
        }
        let charities = embedded::charities()?;
        cache.set(CHARITIES_KEY, &charities);
        Ok(Self::new(charities, config))
    }

    pub fn all(&self) -> &[Charity] {
        &self.charities
    }

    pub fn by_id(&self, id: &str) -> Option<&Charity> {
        self.charities.iter().find(|c| c.id == id)
    }

    /// Recommended charities for a crisis: its related ids that exist in the
    /// catalog, rated at least the minimum, best rating then best score first,
    /// capped at the per-crisis maximum.
    pub fn for_crisis(&self, crisis: &Crisis) -> Vec<&Charity> {
        let mut related: Vec<&Charity> = crisis
            .related_charities
            .iter()
            .filter_map(|id| self.by_id(id))
            .filter(|c| c.rating >= self.min_rating)
            .collect();
        related.sort_by(|a, b| {
            b.rating
                .cmp(&a.rating)
                .then_with(|| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
        });
        related.truncate(self.max_per_crisis);
        related
    }

    /// Charities working on a category and rated at least the minimum.
    pub fn by_category(&self, category: CrisisCategory) -> Vec<&Charity> {
        self.charities
            .iter()
            .filter(|c| c.serves(category) && c.rating >= self.min_rating)
            .collect()
    }

    /// Case-insensitive substring match on name or category label.
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Charity> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.charities
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&query) || c.category.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Catalog ids applicable to a category, in catalog order.
    pub fn ids_for_category(&self, category: CrisisCategory) -> Vec<String> {
        self.charities
            .iter()
            .filter(|c| c.serves(category))
            .map(|c| c.id.clone())
            .collect()
    }

    /// Give network-sourced records the catalog charities of their category.
    /// Embedded records keep their curated lists.
    pub fn attach_related(&self, crises: &mut [Crisis]) {
        for crisis in crises.iter_mut().filter(|c| c.source.is_network()) {
            crisis.related_charities = self.ids_for_category(crisis.category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::crisis;
    use crisis_core::{Region, SourceTag};
    use pretty_assertions::assert_eq;

    fn charity(id: &str, rating: u8, score: f64, categories: &[CrisisCategory]) -> Charity {
        Charity {
            id: id.into(),
            name: format!("Charity {id}"),
            rating,
            score,
            category: "International Relief".into(),
            crisis_categories: categories.to_vec(),
            donate_url: String::new(),
            website_url: String::new(),
            description: String::new(),
        }
    }

    fn catalog() -> CharityCatalog {
        let conflict = CrisisCategory::ArmedConflict;
        let famine = CrisisCategory::Famine;
        CharityCatalog::new(
            vec![
                charity("low", 2, 99.0, &[conflict]),
                charity("good", 3, 90.0, &[conflict, famine]),
                charity("best", 4, 80.0, &[conflict]),
                charity("better", 4, 85.0, &[famine]),
                charity("health", 4, 70.0, &[CrisisCategory::DiseaseOutbreak]),
            ],
            &CharitiesConfig {
                min_rating: 3,
                max_per_crisis: 2,
            },
        )
    }

    fn names(charities: &[&Charity]) -> Vec<String> {
        charities.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn for_crisis_filters_sorts_and_caps() {
        let crisis = Crisis {
            related_charities: vec![
                "missing".into(),
                "low".into(),
                "good".into(),
                "best".into(),
                "better".into(),
            ],
            ..crisis("x", Region::Africa, 1)
        };
        assert_eq!(names(&catalog().for_crisis(&crisis)), vec!["better", "best"]);
    }

    #[test]
    fn by_category_respects_min_rating() {
        assert_eq!(
            names(&catalog().by_category(CrisisCategory::ArmedConflict)),
            vec!["good", "best"]
        );
        assert!(catalog().by_category(CrisisCategory::RefugeeCrisis).is_empty());
    }

    #[test]
    fn search_matches_name_or_category() {
        let catalog = catalog();
        assert_eq!(names(&catalog.search("HEALTH")), vec!["health"]);
        assert_eq!(catalog.search("relief").len(), 5);
        assert!(catalog.search("   ").is_empty());
        assert!(catalog.search("nothing-like-this").is_empty());
    }

    #[test]
    fn attach_related_only_touches_network_records() {
        let mut crises = vec![
            Crisis {
                category: CrisisCategory::Famine,
                ..crisis("gdacs-1", Region::Africa, 1)
            },
            Crisis {
                source: SourceTag::Embedded,
                related_charities: vec!["curated".into()],
                ..crisis("crisis-001", Region::Africa, 1)
            },
        ];
        catalog().attach_related(&mut crises);
        assert_eq!(crises[0].related_charities, vec!["good", "better"]);
        assert_eq!(crises[1].related_charities, vec!["curated"]);
    }

    #[test]
    fn load_falls_back_to_embedded_and_caches_it() {
        let cache = Cache::in_memory(60_000);
        let loaded = CharityCatalog::load(&cache, &CharitiesConfig::default()).unwrap();
        assert_eq!(loaded.all().len(), 12);
        let cached: Vec<Charity> = cache.get(CHARITIES_KEY).unwrap();
        assert_eq!(cached.len(), 12);
    }

    #[test]
    fn load_prefers_fresh_cache() {
        let cache = Cache::in_memory(60_000);
        cache.set(CHARITIES_KEY, &vec![charity("only", 4, 1.0, &[])]);
        let loaded = CharityCatalog::load(&cache, &CharitiesConfig::default()).unwrap();
        assert_eq!(loaded.all().len(), 1);
        assert!(loaded.by_id("only").is_some());
    }
}
