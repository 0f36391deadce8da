// End-to-end tests for demosim: CSV in, ranked location pairs out
use demosim_core::{
    filter_by_race, get_cos_sim, get_sim_info, get_state_similarities,
    get_state_similarities_par, pair_count, Error, Race, SelectionPair,
};
use demosim_io::{CsvLoader, IoError, OutputFormat, SimilarityReport};
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "Location,White,Black,Hispanic,Asian,American_Indian_or_Alaska_Native,Native_Hawaiian_or_Other_Pacific_Islander,Two_Or_More_Races,Male,Female";

fn csv(rows: &[&str]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

fn states() -> String {
    csv(&[
        "Alpha,100,10,5,2,1,0,2,60,60",
        "Beta,200,20,10,4,2,0,4,120,120",
        "Gamma,10,80,40,5,0,1,4,70,70",
        "Delta,5,90,35,6,0,0,4,69,71",
        "Epsilon,0,0,0,0,0,0,0,0,0",
        "Zeta,30,5,,100,,,8,70,73",
    ])
}

#[test]
fn test_full_pipeline_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(states().as_bytes()).unwrap();

    let mut table = CsvLoader::new().load(file.path()).unwrap();
    table.add_sum_column("total", &["Male", "Female"]).unwrap();

    let features = filter_by_race(&table).unwrap();
    assert_eq!(features.len(), 6);
    assert_eq!(features.columns().len(), Race::ALL.len());
    assert_eq!(
        features.get("Zeta").unwrap().as_slice(),
        &[30.0, 5.0, 0.0, 100.0, 0.0, 0.0, 8.0]
    );

    let similarities = get_state_similarities(&features);
    assert_eq!(similarities.len(), pair_count(6));
    assert!(similarities.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(similarities.iter().all(|r| (0.0..=1.0 + 1e-12).contains(&r.score)));

    let (most, least) = get_sim_info(&similarities, 2);
    // Beta is Alpha doubled
    assert_eq!(most[0], SelectionPair::new("Alpha", "Beta"));
    assert_eq!(most[1], SelectionPair::new("Gamma", "Delta"));
    // Epsilon has no population; its five pairs all score 0.0 and sort last,
    // in enumeration order, so the reversed tail starts from the last of them
    assert_eq!(least[0], SelectionPair::new("Epsilon", "Zeta"));
    assert_eq!(least[1], SelectionPair::new("Delta", "Epsilon"));
}

#[test]
fn test_pairs_respect_row_order() {
    let table = CsvLoader::new().load_from_reader(states().as_bytes()).unwrap();
    let features = filter_by_race(&table).unwrap();
    let position = |id: &str| features.ids().iter().position(|x| x == id).unwrap();

    for record in get_state_similarities(&features) {
        assert!(position(record.location_a.as_str()) < position(record.location_b.as_str()));
    }
}

#[test]
fn test_parallel_pipeline_matches_sequential() {
    let table = CsvLoader::new().load_from_reader(states().as_bytes()).unwrap();
    let features = filter_by_race(&table).unwrap();
    assert_eq!(
        get_state_similarities_par(&features),
        get_state_similarities(&features)
    );
}

#[test]
fn test_scores_match_cos_sim() {
    let table = CsvLoader::new().load_from_reader(states().as_bytes()).unwrap();
    let features = filter_by_race(&table).unwrap();
    for record in get_state_similarities(&features) {
        let a = features.get(&record.location_a).unwrap().as_slice();
        let b = features.get(&record.location_b).unwrap().as_slice();
        assert_eq!(record.score, get_cos_sim(a, b));
    }
}

#[test]
fn test_missing_race_column_is_fatal() {
    let data = "Location,White,Black,Male,Female\nOhio,1,2,3,4\n";
    let table = CsvLoader::new().load_from_reader(data.as_bytes()).unwrap();
    match filter_by_race(&table) {
        Err(Error::MissingColumn(columns)) => {
            assert_eq!(columns.len(), 5);
            assert!(columns.contains(&"Hispanic".to_string()));
        }
        other => panic!("expected MissingColumn, got {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn test_non_numeric_race_value_is_rejected() {
    let data = csv(&["Ohio,1,2,3,four,5,6,7,8,9"]);
    let table = CsvLoader::new().load_from_reader(data.as_bytes()).unwrap();
    let err = filter_by_race(&table).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidVector { ref location, ref column, .. } if location == "Ohio" && column == "Asian"
    ));
}

#[test]
fn test_single_location_yields_empty_report() {
    let data = csv(&["Ohio,1,2,3,4,5,6,7,8,9"]);
    let table = CsvLoader::new().load_from_reader(data.as_bytes()).unwrap();
    let features = filter_by_race(&table).unwrap();
    let similarities = get_state_similarities(&features);
    assert!(similarities.is_empty());

    let report = SimilarityReport::from_similarities(&similarities, features.len(), 5);
    assert!(report.most_similar.is_empty());
    assert!(report.least_similar.is_empty());
}

#[test]
fn test_report_rendering() {
    let table = CsvLoader::new().load_from_reader(states().as_bytes()).unwrap();
    let features = filter_by_race(&table).unwrap();
    let similarities = get_state_similarities(&features);
    let report = SimilarityReport::from_similarities(&similarities, features.len(), 3);

    let text = report.render(OutputFormat::Text).unwrap();
    assert!(text.starts_with("These are the 3 most similar locations"));
    assert!(text.contains("(Alpha, Beta)"));

    let json: serde_json::Value =
        serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json["locations"], 6);
    assert_eq!(json["comparisons"], 15);
    assert_eq!(json["most_similar"].as_array().unwrap().len(), 3);
}

#[test]
fn test_missing_file() {
    let err = CsvLoader::new().load("does/not/exist.csv").unwrap_err();
    assert!(matches!(err, IoError::FileNotFound(_)));
}
