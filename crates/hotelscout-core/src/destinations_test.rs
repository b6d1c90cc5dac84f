use std::io::Write;

use super::*;

#[test]
fn normalize_folds_traditional_tai() {
    assert_eq!(normalize_county_name("臺北市"), "台北市");
    assert_eq!(normalize_county_name("台北市"), "台北市");
    assert_eq!(normalize_county_name("新北市"), "新北市");
}

#[test]
fn search_keyword_strips_city_suffix() {
    assert_eq!(search_keyword("臺北市"), "台北");
    assert_eq!(search_keyword("高雄市"), "高雄");
}

#[test]
fn search_keyword_strips_county_suffix() {
    assert_eq!(search_keyword("臺東縣"), "台東");
    assert_eq!(search_keyword(" 花蓮縣 "), "花蓮");
}

#[test]
fn search_keyword_strips_only_one_suffix() {
    assert_eq!(search_keyword("新竹縣市"), "新竹縣");
}

#[test]
fn search_keyword_leaves_names_without_suffix() {
    assert_eq!(search_keyword("綠島"), "綠島");
}

#[test]
fn default_targets_cover_every_county_in_order() {
    let targets = default_targets();
    assert_eq!(targets.len(), TAIWAN_COUNTIES.len());
    for (target, county) in targets.iter().zip(TAIWAN_COUNTIES) {
        assert_eq!(target.county, county);
        assert!(target.city_id.is_some(), "{county} should have a city id");
    }
    assert_eq!(targets[0].city_id, Some(7810));
    assert_eq!(targets[2].county, "臺北市");
    assert_eq!(targets[2].city_id, Some(617));
}

#[test]
fn build_targets_resolves_either_spelling() {
    let mut table = HashMap::new();
    table.insert("臺中市".to_string(), 3849);
    let targets = build_targets(&["台中市", "臺中市"], &table);
    assert_eq!(targets[0].city_id, Some(3849));
    assert_eq!(targets[1].city_id, Some(3849));
}

#[test]
fn build_targets_leaves_unknown_county_unresolved() {
    let targets = build_targets(&["綠島鄉"], &default_city_ids());
    assert_eq!(
        targets,
        vec![DestinationTarget {
            county: "綠島鄉".to_string(),
            city_id: None,
        }]
    );
}

#[test]
fn validate_rejects_empty_list() {
    let file = DestinationsFile {
        destinations: vec![],
    };
    let err = validate_destinations(&file).unwrap_err();
    assert!(err.to_string().contains("at least one"));
}

#[test]
fn validate_rejects_blank_name() {
    let file = DestinationsFile {
        destinations: vec![DestinationEntry {
            name: "  ".to_string(),
            city_id: Some(1),
        }],
    };
    let err = validate_destinations(&file).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn validate_rejects_duplicate_after_normalization() {
    let file = DestinationsFile {
        destinations: vec![
            DestinationEntry {
                name: "臺南市".to_string(),
                city_id: Some(3847),
            },
            DestinationEntry {
                name: "台南市".to_string(),
                city_id: Some(3847),
            },
        ],
    };
    let err = validate_destinations(&file).unwrap_err();
    assert!(err.to_string().contains("duplicate destination"));
}

#[test]
fn load_destinations_parses_missing_city_id() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "destinations:\n  - name: 臺北市\n    city_id: 617\n  - name: 連江縣\n"
    )
    .unwrap();

    let loaded = load_destinations(file.path()).unwrap();
    let targets = loaded.into_targets();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].city_id, Some(617));
    assert_eq!(targets[1].county, "連江縣");
    assert_eq!(targets[1].city_id, None);
}

#[test]
fn load_destinations_reports_missing_file() {
    let err = load_destinations(Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::DestinationsFileIo { .. }));
}

#[test]
fn load_destinations_from_shipped_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("destinations.yaml");
    let loaded = load_destinations(&path).expect("failed to load destinations.yaml");
    let targets = loaded.into_targets();
    assert_eq!(targets, default_targets());
}
