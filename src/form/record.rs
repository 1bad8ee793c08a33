use serde::{Deserialize, Serialize};

/// A finished form submission. Every field is trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub title: String,
    pub description: String,
    pub img_url: String,
    pub imdb_url: String,
    pub imdb_id: String,
}

#[cfg(test)]
mod tests {
    use super::MovieRecord;

    #[test]
    fn serializes_with_camel_case_keys() {
        let record = MovieRecord {
            title: "Inception".to_string(),
            description: String::new(),
            img_url: "https://img".to_string(),
            imdb_url: "https://imdb".to_string(),
            imdb_id: "tt1".to_string(),
        };
        let json = serde_json::to_value(&record).expect("json");
        assert_eq!(json["imgUrl"], "https://img");
        assert_eq!(json["imdbUrl"], "https://imdb");
        assert_eq!(json["imdbId"], "tt1");
        assert_eq!(json["description"], "");
    }
}
