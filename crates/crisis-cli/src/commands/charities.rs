use crisis_core::{Charity, CrisisCategory};
use crisis_engine::CharityCatalog;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CharitiesArgs;
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::parse::parse_value;
use crate::output::output;

fn select<'a>(args: &CharitiesArgs, catalog: &'a CharityCatalog) -> anyhow::Result<Vec<&'a Charity>> {
    if let Some(raw) = args.category.as_deref() {
        let category = parse_value::<CrisisCategory>(raw, "category")?;
        return Ok(catalog.by_category(category));
    }
    if let Some(query) = args.search.as_deref() {
        return Ok(catalog.search(query));
    }
    Ok(catalog.all().iter().collect())
}

/// Handle `crisismap charities`.
pub fn handle(
    args: &CharitiesArgs,
    catalog: &CharityCatalog,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut charities = select(args, catalog)?;
    apply_limit(&mut charities, flags.limit);
    output(&charities, flags.format)
}

#[cfg(test)]
mod tests {
    use crisis_config::CharitiesConfig;
    use crisis_core::CrisisCategory;
    use crisis_engine::CharityCatalog;
    use crisis_sources::embedded;
    use pretty_assertions::assert_eq;

    use super::select;
    use crate::cli::root_commands::CharitiesArgs;

    fn catalog() -> CharityCatalog {
        CharityCatalog::new(
            embedded::charities().expect("embedded charities"),
            &CharitiesConfig::default(),
        )
    }

    fn args(category: Option<&str>, search: Option<&str>) -> CharitiesArgs {
        CharitiesArgs {
            category: category.map(str::to_string),
            search: search.map(str::to_string),
        }
    }

    #[test]
    fn no_flags_lists_whole_catalog() {
        let catalog = catalog();
        assert_eq!(select(&args(None, None), &catalog).unwrap().len(), 12);
    }

    #[test]
    fn category_selects_serving_charities() {
        let catalog = catalog();
        let famine = select(&args(Some("famine"), None), &catalog).unwrap();
        assert!(!famine.is_empty());
        assert!(famine.iter().all(|c| c.serves(CrisisCategory::Famine)));
    }

    #[test]
    fn bad_category_is_rejected() {
        let catalog = catalog();
        assert!(select(&args(Some("weather"), None), &catalog).is_err());
    }

    #[test]
    fn blank_search_matches_nothing() {
        let catalog = catalog();
        assert!(select(&args(None, Some("  ")), &catalog).unwrap().is_empty());
    }
}
