use heatmap_rs::core::{BandScale, LinearScale, ThresholdScale};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new(domain_start, domain_end).expect("valid scale");
        let px = scale.domain_to_pixel(value, 1200.0).expect("to pixel");
        let recovered = scale.pixel_to_domain(px, 1200.0).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-7);
    }

    #[test]
    fn threshold_bucket_brackets_its_value(
        extent_min in -50.0f64..50.0,
        extent_span in 0.1f64..50.0,
        value_factor in 0.0f64..1.0
    ) {
        let extent_max = extent_min + extent_span;
        let value = extent_min + value_factor * extent_span;

        let scale = ThresholdScale::from_extent(extent_min, extent_max, 11).expect("valid scale");
        let bucket = scale.bucket_index(value).expect("lookup");
        prop_assert!(bucket < scale.bucket_count());

        let (lower, upper) = scale.bucket_extent(bucket).expect("extent");
        if let Some(lower) = lower {
            prop_assert!(lower <= value);
        }
        if let Some(upper) = upper {
            prop_assert!(value < upper);
        }
    }

    #[test]
    fn threshold_breakpoints_stay_sorted(
        extent_min in -50.0f64..50.0,
        extent_span in 0.1f64..50.0,
        bucket_count in 2usize..32
    ) {
        let scale = ThresholdScale::from_extent(extent_min, extent_min + extent_span, bucket_count)
            .expect("valid scale");
        prop_assert!(scale.breakpoints().windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn band_center_inverts_to_its_own_label(
        label_count in 1usize..24,
        span_px in 10.0f64..4096.0
    ) {
        let labels: Vec<String> = (0..label_count).map(|index| format!("band-{index}")).collect();
        let scale = BandScale::new(labels.clone()).expect("valid scale");

        for label in &labels {
            let center = scale.center(label, span_px).expect("center");
            prop_assert_eq!(
                scale.label_at_pixel(center, span_px).expect("lookup"),
                Some(label.as_str())
            );
        }
    }
}
