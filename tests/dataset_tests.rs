use heatmap_rs::data::{MonthlyVariance, TemperatureDataset, month_label};

fn record(year: i32, month: u32, variance: f64) -> MonthlyVariance {
    MonthlyVariance {
        year,
        month,
        variance,
    }
}

#[test]
fn parses_the_wire_document_shape() {
    let document = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            { "year": 1753, "month": 1, "variance": -1.366 },
            { "year": 1753, "month": 2, "variance": -2.223 }
        ]
    }"#;

    let dataset = TemperatureDataset::from_json_str(document).expect("valid document");
    assert_eq!(dataset.base_temperature, 8.66);
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.monthly_variance[0].year, 1753);
    assert_eq!(dataset.monthly_variance[1].variance, -2.223);
}

#[test]
fn malformed_documents_are_rejected() {
    assert!(TemperatureDataset::from_json_str("not json").is_err());
    assert!(TemperatureDataset::from_json_str(r#"{ "baseTemperature": 8.66 }"#).is_err());
    assert!(
        TemperatureDataset::from_json_str(
            r#"{ "baseTemperature": 8.66, "monthlyVariance": [] }"#
        )
        .is_err()
    );
}

#[test]
fn out_of_range_months_are_rejected() {
    for month in [0, 13] {
        let dataset = TemperatureDataset {
            base_temperature: 8.66,
            monthly_variance: vec![record(2000, month, 0.1)],
        };
        assert!(dataset.validate().is_err());
    }
}

#[test]
fn non_finite_variance_is_rejected() {
    let dataset = TemperatureDataset {
        base_temperature: 8.66,
        monthly_variance: vec![record(2000, 1, f64::NAN)],
    };
    assert!(dataset.validate().is_err());
}

#[test]
fn absolute_temperature_adds_base_and_variance() {
    let dataset = TemperatureDataset {
        base_temperature: 8.0,
        monthly_variance: vec![record(2000, 1, -0.5)],
    };
    assert_eq!(
        dataset.absolute_temperature(dataset.monthly_variance[0]),
        7.5
    );
}

#[test]
fn year_range_and_temperature_extent_cover_all_records() {
    let dataset = TemperatureDataset {
        base_temperature: 8.0,
        monthly_variance: vec![
            record(1900, 1, 0.4),
            record(1899, 2, -1.2),
            record(1950, 3, 2.0),
        ],
    };

    assert_eq!(dataset.year_range().expect("range"), (1899, 1950));
    let (min, max) = dataset.temperature_extent().expect("extent");
    assert_eq!(min, 6.8);
    assert_eq!(max, 10.0);
}

#[test]
fn month_labels_keep_first_occurrence_order() {
    let dataset = TemperatureDataset {
        base_temperature: 8.0,
        monthly_variance: vec![
            record(2000, 3, 0.0),
            record(2000, 1, 0.0),
            record(2001, 3, 0.0),
            record(2001, 12, 0.0),
        ],
    };

    assert_eq!(
        dataset.month_labels().expect("labels"),
        vec!["March", "January", "December"]
    );
}

#[test]
fn month_labels_are_full_english_names() {
    assert_eq!(month_label(1).expect("label"), "January");
    assert_eq!(month_label(6).expect("label"), "June");
    assert_eq!(month_label(12).expect("label"), "December");
    assert!(month_label(0).is_err());
    assert!(month_label(13).is_err());
}

#[test]
fn month_index_is_zero_based_for_presentation() {
    assert_eq!(record(2000, 1, 0.0).month_zero_based(), 0);
    assert_eq!(record(2000, 12, 0.0).month_zero_based(), 11);
}
