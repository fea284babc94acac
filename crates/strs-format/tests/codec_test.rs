#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for batch conversion between CSV and DAT
//!
//! The fixture holds two STRS rows as a reporting system would export them,
//! including a quoted address containing a comma.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::path::Path;
use strs_format::{
    CollectingDiagnostics, Format, Record, RecordCodec, Side, StrsError, Warning,
};

const ROW: &str = "C000,123456.78,2021,0.67, ,333224444,Sample Joe A,876543.21,123 HOME ST,\
                   APT 999,,New York,NY,12345,4444,22,123456.78,joe@sample.com,5555551234,C";

fn sample_csv() -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_fixtures/sample.csv");
    std::fs::read(&path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

fn codec() -> RecordCodec {
    RecordCodec::new().expect("STRS layout should validate")
}

fn row_with(overrides: &[(usize, &str)]) -> String {
    let mut fields: Vec<&str> = ROW.split(',').collect();
    for &(index, value) in overrides {
        fields[index] = value;
    }
    fields.join(",")
}

// --- Sample batch ---

#[test]
fn sample_decodes_to_two_records() {
    let codec = codec();
    let schema = codec.schema();
    let mut diag = CollectingDiagnostics::new();

    let records = codec.read_csv(&sample_csv(), &mut diag).unwrap();
    assert_eq!(records.len(), 2);
    assert!(diag.is_empty(), "{:?}", diag.warnings());

    let first = &records[0];
    assert_eq!(first.get(schema, "TaxedMemberContribution").unwrap(), "12345678");
    assert_eq!(first.get(schema, "ServiceCredit").unwrap(), "067");
    assert_eq!(first.get(schema, "MembershipTypeCode").unwrap(), " ");
    assert_eq!(first.get(schema, "DeliveryAddressLine3").unwrap(), " ".repeat(40));
    assert_eq!(first.get(schema, "ZipCodeDeliveryPoint").unwrap(), "22");

    let second = &records[1];
    assert_eq!(
        second.logical(schema, "DeliveryAddressLine1").unwrap(),
        "1 MAIN ST, REAR"
    );
    assert_eq!(second.get(schema, "TaxDeferredMemberContribution").unwrap(), "00000000");
}

#[test]
fn sample_round_trips_through_dat() {
    let codec = codec();
    let mut diag = CollectingDiagnostics::new();
    let csv = sample_csv();

    let dat = codec.convert(Format::Csv, &csv, &mut diag).unwrap();
    assert_eq!(dat.len(), 2 * 350);

    let back = codec.convert(Format::Dat, &dat, &mut diag).unwrap();
    assert_eq!(String::from_utf8(back).unwrap(), String::from_utf8(csv).unwrap());
    assert!(diag.is_empty());
}

#[test]
fn sample_dat_layout() {
    let codec = codec();
    let mut diag = CollectingDiagnostics::new();

    let dat = codec.convert(Format::Csv, &sample_csv(), &mut diag).unwrap();
    let record = &dat[..350];

    assert_eq!(&record[0..4], b"C000");
    assert_eq!(&record[4..12], b"12345678");
    assert_eq!(&record[12..16], b"2021");
    assert_eq!(&record[16..19], b"067");
    assert_eq!(&record[19..20], b" ");
    assert_eq!(&record[20..29], b"333224444");
    assert_eq!(&record[29..41], b"Sample Joe A");
    assert!(record[41..59].iter().all(|&b| b == b' '));
    assert_eq!(&record[59..67], b"87654321");
    assert_eq!(&record[209..214], b"12345");
    assert_eq!(&record[218..220], b"22");
    assert_eq!(&record[278..288], b"5555551234");
    assert_eq!(&record[288..289], b"C");
    assert!(record[289..].iter().all(|&b| b == b' '));
}

#[test]
fn dat_round_trip_is_byte_identical() {
    let codec = codec();
    let mut diag = CollectingDiagnostics::new();

    let dat = codec.convert(Format::Csv, &sample_csv(), &mut diag).unwrap();
    let records = codec.read_dat(&dat, &mut diag).unwrap();
    assert_eq!(codec.write_dat(&records).unwrap(), dat);
}

// --- Values the layout cannot hold ---

#[test]
fn literal_service_credit_is_rejected() {
    // "067" is read as 67 whole credits, which needs five digits
    let codec = codec();
    let mut diag = CollectingDiagnostics::new();

    let err = codec
        .read_csv(row_with(&[(3, "067")]).as_bytes(), &mut diag)
        .unwrap_err();
    assert_eq!(err.field(), Some("ServiceCredit"));
    assert!(matches!(
        err.root(),
        StrsError::NonPaddingTruncation { side: Side::Left, .. }
    ));
    assert_eq!(diag.errors().len(), 1);
}

#[test]
fn fail_policy_rejects_wrong_width() {
    let codec = codec();
    let mut diag = CollectingDiagnostics::new();

    let err = codec
        .read_csv(row_with(&[(5, "3332244.44")]).as_bytes(), &mut diag)
        .unwrap_err();
    assert_eq!(err.field(), Some("SocialSecurityNumber"));
    assert!(matches!(
        err.root(),
        StrsError::LengthMismatch { expected: 9, .. }
    ));

    let err = codec
        .read_csv(row_with(&[(19, "")]).as_bytes(), &mut diag)
        .unwrap_err();
    assert_eq!(err.field(), Some("PhoneNumberType"));
}

#[test]
fn error_names_the_record() {
    let codec = codec();
    let mut diag = CollectingDiagnostics::new();
    let input = format!("{ROW}\r\n{}\r\n", row_with(&[(2, "21")]));

    let err = codec.read_csv(input.as_bytes(), &mut diag).unwrap_err();
    assert!(matches!(err, StrsError::Record { index: 1, .. }));
    assert!(err.to_string().starts_with("Record 1: Field 'ReportFiscalYear'"));
}

#[test]
fn malformed_csv_names_the_line() {
    let codec = codec();
    let mut diag = CollectingDiagnostics::new();
    let input = format!("{ROW}\n\"unterminated,x\n");

    let err = codec.read_csv(input.as_bytes(), &mut diag).unwrap_err();
    assert!(matches!(err, StrsError::Line { line: 2, .. }));
    assert!(matches!(err.root(), StrsError::UnterminatedQuote { .. }));
}

// --- Batch segmentation ---

#[test]
fn records_are_segmented_by_field_count() {
    let codec = codec();
    let mut diag = CollectingDiagnostics::new();
    let (head, tail) = ROW.split_at(ROW.find(",New York").unwrap());
    let input = format!("{head}\n{}\n", &tail[1..]);

    let split = codec.read_csv(input.as_bytes(), &mut diag).unwrap();
    let whole = codec.read_csv(ROW.as_bytes(), &mut diag).unwrap();
    assert_eq!(split, whole);
}

#[test]
fn incomplete_record_produces_nothing() {
    let codec = codec();
    let mut diag = CollectingDiagnostics::new();
    let short = ROW.rsplit_once(',').unwrap().0;
    let input = format!("{ROW}\r\n{short}\r\n");

    let err = codec.read_csv(input.as_bytes(), &mut diag).unwrap_err();
    assert!(matches!(
        err,
        StrsError::IncompleteRecord {
            expected: 20,
            available: 39
        }
    ));
}

#[test]
fn dat_length_must_be_whole_records() {
    let codec = codec();
    let mut diag = CollectingDiagnostics::new();

    let mut dat = codec.convert(Format::Csv, &sample_csv(), &mut diag).unwrap();
    dat.push(b'\n');

    let err = codec.read_dat(&dat, &mut diag).unwrap_err();
    assert!(matches!(
        err,
        StrsError::DatLength {
            length: 701,
            record_width: 350
        }
    ));
}

#[test]
fn negative_amount_round_trips() {
    let codec = codec();
    let mut diag = CollectingDiagnostics::new();
    let input = format!("{}\r\n", row_with(&[(1, "-12.50")]));

    let dat = codec.convert(Format::Csv, input.as_bytes(), &mut diag).unwrap();
    assert_eq!(&dat[4..12], b"000-1250");

    let csv = codec.convert(Format::Dat, &dat, &mut diag).unwrap();
    assert_eq!(String::from_utf8(csv).unwrap(), input);
    assert!(diag.is_empty());
}

// --- Warnings ---

#[test]
fn excess_fraction_digits_are_rounded() {
    let codec = codec();
    let mut diag = CollectingDiagnostics::new();
    let input = row_with(&[(7, "876.2150"), (16, "12.345")]);

    let dat = codec.convert(Format::Csv, input.as_bytes(), &mut diag).unwrap();
    let csv = codec.convert(Format::Dat, &dat, &mut diag).unwrap();

    let expected = format!("{}\r\n", row_with(&[(7, "876.22"), (16, "12.35")]));
    assert_eq!(String::from_utf8(csv).unwrap(), expected);

    let rounded: Vec<String> = diag.warnings().iter().map(ToString::to_string).collect();
    assert_eq!(
        rounded,
        [
            "TaxDeferredMemberContribution: value |876.2150| was rounded to |876.22|.",
            "AccruedContributionAmount: value |12.345| was rounded to |12.35|."
        ]
    );
}

#[test]
fn long_text_is_truncated_with_warning() {
    let codec = codec();
    let mut diag = CollectingDiagnostics::new();
    let input = row_with(&[(11, "Washington Court House")]);

    let records = codec.read_csv(input.as_bytes(), &mut diag).unwrap();
    assert_eq!(
        records[0].logical(codec.schema(), "CityName").unwrap(),
        "Washington Court Hou"
    );
    assert!(matches!(
        diag.warnings(),
        [Warning::Truncated { side: Side::Right, .. }]
    ));
}

#[test]
fn surplus_zero_padding_is_trimmed_with_warning() {
    let codec = codec();
    let mut diag = CollectingDiagnostics::new();
    let input = row_with(&[(13, "0012345")]);

    let records = codec.read_csv(input.as_bytes(), &mut diag).unwrap();
    assert_eq!(records[0].get(codec.schema(), "ZipCode").unwrap(), "12345");
    assert_eq!(diag.warnings().len(), 1);
    assert_eq!(diag.warnings()[0].field(), "ZipCode");
}

// --- Encoding ---

#[test]
fn latin1_text_survives_dat() {
    let codec = codec();
    let schema = codec.schema();
    let mut diag = CollectingDiagnostics::new();

    let mut record = Record::blank(schema);
    record.set(schema, "NameOfEmployee", "Zoë Müller", &mut diag).unwrap();

    let dat = codec.write_dat(std::slice::from_ref(&record)).unwrap();
    assert_eq!(&dat[29..39], b"Zo\xEB M\xFCller");
    assert_eq!(codec.read_dat(&dat, &mut diag).unwrap(), [record]);
}

#[test]
fn characters_outside_latin1_are_rejected() {
    let codec = codec();
    let schema = codec.schema();
    let mut diag = CollectingDiagnostics::new();

    let mut record = Record::blank(schema);
    record.set(schema, "EmailAddress", "joe@exämple.com", &mut diag).unwrap();
    record.set(schema, "NameOfEmployee", "Joe €", &mut diag).unwrap();

    let err = codec.write_dat(&[record]).unwrap_err();
    assert_eq!(err.field(), Some("NameOfEmployee"));
    assert!(matches!(err.root(), StrsError::Unencodable { character: '€' }));
}

proptest! {
    #[test]
    fn prop_dat_round_trip(
        dat in (0usize..4).prop_flat_map(|n| prop::collection::vec(any::<u8>(), n * 350))
    ) {
        let codec = codec();
        let mut diag = CollectingDiagnostics::new();

        let records = codec.read_dat(&dat, &mut diag).unwrap();
        prop_assert_eq!(records.len(), dat.len() / 350);
        prop_assert_eq!(codec.write_dat(&records).unwrap(), dat);
    }

    #[test]
    fn prop_amounts_round_trip(cents in 0u32..100_000_000) {
        let codec = codec();
        let schema = codec.schema();
        let mut diag = CollectingDiagnostics::new();
        let amount = format!("{}.{:02}", cents / 100, cents % 100);

        let mut record = Record::blank(schema);
        record.set_logical(schema, "AccruedContributionAmount", &amount, &mut diag).unwrap();

        let csv = codec.write_csv(&[record]).unwrap();
        let decoded = codec.read_csv(&csv, &mut diag).unwrap();
        prop_assert_eq!(decoded[0].logical(schema, "AccruedContributionAmount").unwrap(), amount);
        prop_assert!(diag.is_empty());
    }
}
