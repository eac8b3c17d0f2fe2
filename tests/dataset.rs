use id3split::prelude::*;
use polars::prelude::*;


fn weather_path() -> std::path::PathBuf {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/weather.csv");
    path
}


#[test]
fn read_weather_csv() {
    let dataset = DatasetReader::default()
        .file(weather_path())
        .has_header(true)
        .target_feature("play")
        .nominal_features(["outlook", "windy"])
        .read()
        .unwrap();

    assert_eq!(dataset.shape(), (14, 4));
    assert_eq!(dataset.classes().classes(), &["no", "yes"]);

    let kinds = (0..dataset.n_features())
        .map(|i| dataset.feature_kind(i).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            FeatureKind::Nominal,
            FeatureKind::Numerical,
            FeatureKind::Numerical,
            FeatureKind::Nominal,
        ]
    );

    let outlook = dataset.encoders().get(0).unwrap();
    assert_eq!(outlook.classes(), &["overcast", "rain", "sunny"]);
    assert!(dataset.encoders().get(1).is_none());
}


#[test]
fn unknown_target_column_is_reported() {
    let err = DatasetReader::default()
        .file(weather_path())
        .has_header(true)
        .target_feature("label")
        .read()
        .unwrap_err();

    assert!(matches!(err, DatasetError::UnknownColumn(name) if name == "label"));
}


#[test]
fn undeclared_nominal_column_fails_to_parse() {
    let err = DatasetReader::default()
        .file(weather_path())
        .has_header(true)
        .target_feature("play")
        .nominal_features(["windy"])
        .read()
        .unwrap_err();

    match err {
        DatasetError::Parse { line, column, value } => {
            assert_eq!(line, 2);
            assert_eq!(column, "outlook");
            assert_eq!(value, "sunny");
        },
        other => panic!("unexpected error {other}"),
    }
}


#[test]
fn dataframe_columns_keep_their_kind() {
    let data = DataFrame::new(vec![
        Series::new("size", &[1.5, 2.5, 3.5, 4.5]),
        Series::new("count", &[1i64, 1, 2, 2]),
        Series::new("shape", &["o", "x", "o", "x"]),
    ]).unwrap();
    let target = Series::new("class", &["A", "A", "B", "B"]);

    let dataset = Dataset::from_dataframe(&data, &target).unwrap();
    assert_eq!(dataset.shape(), (4, 3));
    assert_eq!(dataset.feature_kind(1), Some(FeatureKind::Numerical));
    assert_eq!(dataset.feature_kind(2), Some(FeatureKind::Nominal));

    let splitter = Splitter::new(&dataset);
    let decision = splitter.calc(&[0, 1, 2, 3], &[2, 1, 0]).unwrap();
    assert_eq!(decision.feature_name(), Some("count"));
    assert_eq!(decision.pivot(), Some(1.0));
    assert_eq!(decision.information(), 0.0);
}
