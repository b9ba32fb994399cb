use std::str::FromStr;

/// Parse a single flag value through the type's `FromStr`.
pub fn parse_value<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse every value of a repeatable flag.
pub fn parse_values<T>(raw: &[String], field: &str) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.iter().map(|value| parse_value(value, field)).collect()
}

#[cfg(test)]
mod tests {
    use crisis_core::{CrisisCategory, Region};
    use pretty_assertions::assert_eq;

    use super::{parse_value, parse_values};

    #[test]
    fn parses_wire_ids_and_aliases() {
        let categories: Vec<CrisisCategory> = parse_values(
            &["conflict".to_string(), "natural-disaster".to_string()],
            "category",
        )
        .expect("categories should parse");
        assert_eq!(
            categories,
            vec![CrisisCategory::ArmedConflict, CrisisCategory::NaturalDisaster]
        );
    }

    #[test]
    fn parses_hyphenated_region() {
        let region: Region = parse_value("middle-east", "region").expect("region should parse");
        assert_eq!(region, Region::MiddleEast);
    }

    #[test]
    fn errors_name_the_flag() {
        let err = parse_value::<Region>("atlantis", "region").expect_err("should fail");
        assert!(err.to_string().contains("invalid region 'atlantis'"));
    }
}
