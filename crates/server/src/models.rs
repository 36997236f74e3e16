/// `GET /lakes` parameters. A repeated key keeps its first value and unknown
/// keys are ignored.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LakeListQuery {
    pub lake_type: Option<String>,
    pub sort: Option<String>,
}

impl LakeListQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "type" => &mut query.lake_type,
                "sort" => &mut query.sort,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}
