use serde::{Deserialize, Serialize};

/// Nested attributes of a movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieInfo {
    pub plot: String,
    pub rating: f64,
}

/// A movie record. The document store keys it by (`year`, `title`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub year: i32,
    pub title: String,
    pub info: MovieInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_dynamo::aws_sdk_dynamodb_1::{from_item, to_item};

    #[test]
    fn movie_survives_attribute_map_conversion() {
        let movie = Movie {
            year: 2015,
            title: "The Big New Movie".to_string(),
            info: MovieInfo { plot: "Nothing happens at all.".to_string(), rating: 0.0 },
        };

        let item = to_item(&movie).unwrap();
        let restored: Movie = from_item(item).unwrap();

        assert_eq!(restored, movie);
    }
}
