//! Filter and ordering options for lake listings.

/// Columns a listing can be ordered by. Unknown input falls back to `Name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Area,
    #[default]
    Name,
    Elevation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortKey {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("area") => SortKey::Area,
            Some("elevation") => SortKey::Elevation,
            _ => SortKey::Name,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            SortKey::Area => "area",
            SortKey::Name => "name",
            SortKey::Elevation => "elevation",
        }
    }

    /// Names read alphabetically; measurements largest first.
    pub fn direction(self) -> SortDirection {
        match self {
            SortKey::Name => SortDirection::Asc,
            SortKey::Area | SortKey::Elevation => SortDirection::Desc,
        }
    }

    /// `ORDER BY` body. Descending measurements sort their NULLs last and
    /// break ties by name so the output order is stable.
    pub fn order_clause(self) -> String {
        match self.direction() {
            SortDirection::Asc => format!("lake.{} ASC", self.column()),
            SortDirection::Desc => {
                format!("lake.{} DESC NULLS LAST, lake.name ASC", self.column())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LakeQuery {
    pub lake_type: Option<String>,
    pub sort: SortKey,
}

impl LakeQuery {
    pub fn from_params(lake_type: Option<&str>, sort: Option<&str>) -> Self {
        Self {
            // An empty filter is treated as no filter.
            lake_type: lake_type.filter(|t| !t.is_empty()).map(str::to_string),
            sort: SortKey::parse(sort),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_falls_back_to_name() {
        for raw in [None, Some(""), Some("depth"), Some("AREA"), Some("name; DROP TABLE lake")] {
            let key = SortKey::parse(raw);
            assert_eq!(key, SortKey::Name, "input {raw:?}");
            assert_eq!(key.direction(), SortDirection::Asc);
        }
    }

    #[test]
    fn measurements_sort_descending() {
        assert_eq!(SortKey::parse(Some("area")).direction(), SortDirection::Desc);
        assert_eq!(SortKey::parse(Some("elevation")).direction(), SortDirection::Desc);
        assert!(SortKey::Area.order_clause().starts_with("lake.area DESC"));
    }

    #[test]
    fn order_clause_follows_direction() {
        assert_eq!(SortKey::Name.order_clause(), "lake.name ASC");
        assert_eq!(
            SortKey::Area.order_clause(),
            "lake.area DESC NULLS LAST, lake.name ASC"
        );
        assert_eq!(
            SortKey::Elevation.order_clause(),
            "lake.elevation DESC NULLS LAST, lake.name ASC"
        );
    }

    #[test]
    fn empty_type_is_no_filter() {
        let q = LakeQuery::from_params(Some(""), Some("area"));
        assert_eq!(q.lake_type, None);
        assert_eq!(q.sort, SortKey::Area);

        let q = LakeQuery::from_params(Some("Freshwater"), None);
        assert_eq!(q.lake_type.as_deref(), Some("Freshwater"));
        assert_eq!(q.sort, SortKey::Name);
    }
}
