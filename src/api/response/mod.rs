pub mod get_reviews;
pub mod get_stations;
pub mod message;
mod number;

#[cfg(test)]
mod test {
    use std::fs;
    use std::path::PathBuf;

    fn read_resource(filename: &str) -> String {
        let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        d.push(format!("resources/test/{}", filename));
        fs::read_to_string(d.as_path()).unwrap()
    }

    #[test]
    fn get_stations() {
        let input = read_resource("stations.json");
        let output: super::get_stations::GetStations = serde_json::from_str(&input).unwrap();
        assert_eq!(5, output.stations.len());
        assert_eq!("Koramangala Fast Hub", output.stations[0].name);
        assert_eq!(4, output.stations[0].slots_total);
        assert_eq!(18.5, output.stations[0].approx_rate);
        assert_eq!(
            Some("https://img.example.com/koramangala.jpg".to_string()),
            output.stations[0].image_url
        );
    }

    #[test]
    fn get_stations_decimal_strings() {
        let input = read_resource("stations.json");
        let output: super::get_stations::GetStations = serde_json::from_str(&input).unwrap();
        /* third entry carries its rate and slot counts as strings */
        assert_eq!(22.0, output.stations[2].approx_rate);
        assert_eq!(6, output.stations[2].slots_total);
        assert_eq!(None, output.stations[2].image_url);
    }

    #[test]
    fn get_stations_missing_list() {
        let output: super::get_stations::GetStations = serde_json::from_str("{}").unwrap();
        assert!(output.stations.is_empty());
    }

    #[test]
    fn get_reviews() {
        let input = read_resource("reviews.json");
        let output: super::get_reviews::GetReviews = serde_json::from_str(&input).unwrap();
        assert_eq!(2, output.reviews.len());
        assert_eq!(3, output.reviews[0].rating);
        assert_eq!(5, output.reviews[1].rating);
        assert_eq!("Quick charge, clean place.", output.reviews[1].text);
    }

    #[test]
    fn message_without_success() {
        let output: super::message::Message =
            serde_json::from_str(r#"{"message": "Thanks for reaching out"}"#).unwrap();
        assert!(!output.success);
        assert_eq!("Thanks for reaching out", output.message);
    }

    #[test]
    fn booking_message() {
        let input = read_resource("booking_created.json");
        let output: super::message::Message = serde_json::from_str(&input).unwrap();
        assert!(output.success);
        assert_eq!("Booking created!", output.message);
    }

    #[test]
    #[should_panic]
    fn get_stations_invalid_json() {
        let input = read_resource("invalid_json.json");
        let _output: super::get_stations::GetStations = serde_json::from_str(&input).unwrap();
    }

    #[test]
    #[should_panic]
    fn get_reviews_non_numeric_rating() {
        let _output: super::get_reviews::GetReviews =
            serde_json::from_str(r#"{"reviews": [{"name": "A", "rating": "great", "text": ""}]}"#)
                .unwrap();
    }
}
