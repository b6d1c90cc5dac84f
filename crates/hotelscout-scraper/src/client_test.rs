use super::*;

fn client_for(base_url: &str) -> TripClient {
    let config = AppConfig {
        base_url: base_url.to_string(),
        ..AppConfig::default()
    };
    TripClient::new(&config).unwrap()
}

#[test]
fn list_url_encodes_keyword() {
    let client = client_for("https://tw.trip.com");
    assert_eq!(
        client.list_url(617, "台北"),
        "https://tw.trip.com/hotels/list?city=617&searchWord=%E5%8F%B0%E5%8C%97"
    );
}

#[test]
fn list_url_form_encodes_spaces() {
    let client = client_for("https://tw.trip.com");
    assert_eq!(
        client.list_url(1, "a b"),
        "https://tw.trip.com/hotels/list?city=1&searchWord=a+b"
    );
}

#[test]
fn detail_url_carries_hotel_id() {
    let client = client_for("https://tw.trip.com");
    assert_eq!(
        client.detail_url(123_456),
        "https://tw.trip.com/hotels/detail/?hotelid=123456"
    );
}

#[test]
fn urls_respect_custom_origin() {
    let client = client_for("http://127.0.0.1:8080");
    assert_eq!(
        client.list_url(7810, "基隆"),
        "http://127.0.0.1:8080/hotels/list?city=7810&searchWord=%E5%9F%BA%E9%9A%86"
    );
}

#[test]
fn new_rejects_unparsable_base_url() {
    let config = AppConfig {
        base_url: "not a url".to_string(),
        ..AppConfig::default()
    };
    let err = TripClient::new(&config).unwrap_err();
    assert!(
        matches!(err, ScraperError::InvalidBaseUrl { .. }),
        "expected InvalidBaseUrl, got: {err:?}"
    );
}

#[test]
fn new_rejects_non_base_url() {
    let config = AppConfig {
        base_url: "mailto:ops@example.com".to_string(),
        ..AppConfig::default()
    };
    assert!(matches!(
        TripClient::new(&config),
        Err(ScraperError::InvalidBaseUrl { .. })
    ));
}
