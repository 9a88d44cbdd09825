use rentwise::config::CalculatorConfig;
use rentwise::financial::{calculate_default_rental_estimation, PropertyFeature};
use rentwise::roll::{PropertyRollImportError, PropertyRollImporter};
use rentwise::service::CalculatorService;

#[test]
fn importer_handles_sample_property_roll() {
    let data = include_bytes!("../sample_property_roll.csv");

    let entries = PropertyRollImporter::from_reader(&data[..]).expect("sample roll imports");

    assert_eq!(entries.len(), 4);
    let labels: Vec<_> = entries.iter().map(|entry| entry.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Maple Fourplex", "Riverside Lofts", "Cedar Duplex", "Harbour Tower"]
    );

    let riverside = &entries[1];
    assert_eq!(riverside.property.municipal_value, 1_200_000.0);
    assert_eq!(riverside.property.interest_rate_min, 4.5);
    assert!(riverside.features.has(PropertyFeature::IndoorParking));

    let cedar = &entries[2];
    assert!(cedar.features.has(PropertyFeature::PoorCondition));

    let harbour = &entries[3];
    assert_eq!(harbour.property.municipal_value, 2_400_000.0);
    assert_eq!(harbour.features.enabled().count(), 3);
}

#[test]
fn imported_entries_estimate_like_direct_calls() {
    let data = include_bytes!("../sample_property_roll.csv");
    let entries = PropertyRollImporter::from_reader(&data[..]).expect("sample roll imports");

    let service = CalculatorService::new(CalculatorConfig::default());
    let estimates = service.estimate_roll(&entries, None);

    assert_eq!(estimates.len(), entries.len());
    for (entry, estimate) in entries.iter().zip(&estimates) {
        assert_eq!(estimate.label, entry.label);
        assert_eq!(
            estimate.estimation.estimation,
            calculate_default_rental_estimation(&entry.property, &entry.features)
        );
    }

    let ranges: Vec<_> = estimates
        .iter()
        .map(|estimate| {
            (
                estimate.estimation.estimation.estimated_rent_min,
                estimate.estimation.estimation.estimated_rent_max,
            )
        })
        .collect();
    assert_eq!(
        ranges,
        [
            (1184.8, 1330.38),
            (1380.83, 1500.21),
            (1410.72, 1642.88),
            (1216.74, 1304.11),
        ]
    );
}

#[test]
fn importer_reports_line_of_unknown_feature() {
    let csv = "Label,Municipal Value,Total Units,Annual Taxes,Interest Rate Min,Interest Rate Max,Features\n\
Maple,500000,4,6000,4,6,appliances\n\
Loft,300000,1,3600,5,7,rooftop pool\n";

    let error = PropertyRollImporter::from_reader(csv.as_bytes()).expect_err("unknown feature");

    match error {
        PropertyRollImportError::UnknownFeature { line, key } => {
            assert_eq!(line, 3);
            assert_eq!(key, "rooftop pool");
        }
        other => panic!("expected unknown feature error, got {other:?}"),
    }
}
