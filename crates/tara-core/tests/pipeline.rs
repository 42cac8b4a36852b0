//! End-to-end pipeline tests over full documents.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use tara_core::models::document::{OcrDocument, OcrWord};
use tara_core::{ParserConfig, ParsingPipeline};

fn pipeline() -> ParsingPipeline {
    ParsingPipeline::new(&ParserConfig::default())
}

fn word(text: &str, x: i32, y: i32) -> OcrWord {
    OcrWord {
        text: text.to_string(),
        x,
        y,
        width: 80,
        height: 20,
        confidence: Some(0.95),
    }
}

#[test]
fn complete_slip_parses_successfully() {
    let document = OcrDocument::from_lines([
        "weighing slip",
        "vehicle number: 8713",
        "gross weight: 12,480 kg",
        "tare weight: 7,470 kg",
        "net weight: 5,010 kg",
        "2026-02-02",
    ]);

    let result = pipeline().process(Some(&document));

    assert!(result.success, "errors: {:?}", result.errors);
    assert_eq!(result.errors, Vec::<String>::new());
    assert_eq!(result.confidence, 1.0);

    let slip = result.data.unwrap();
    assert_eq!(slip.vehicle_number.as_deref(), Some("8713"));
    assert_eq!(slip.date, NaiveDate::from_ymd_opt(2026, 2, 2));

    let gross = slip.gross_weight.unwrap();
    let tare = slip.tare_weight.unwrap();
    let net = slip.net_weight.unwrap();
    assert_eq!(gross.value, Some(12480.0));
    assert_eq!(tare.value, Some(7470.0));
    assert_eq!(net.value, Some(5010.0));
    assert_eq!(gross.unit, "kg");
    assert_eq!(tare.unit, "kg");
    assert_eq!(net.unit, "kg");
}

#[test]
fn slip_with_word_geometry_only_uses_spatial_extraction() {
    let document = OcrDocument {
        text: "계량표".to_string(),
        lines: Vec::new(),
        words: vec![
            word("계량일자", 10, 50),
            word("2026-02-02", 300, 55),
            word("차량번호", 10, 150),
            word("8713", 300, 152),
            word("총중량", 10, 250),
            word("12,480kg", 300, 251),
            word("차중량", 10, 350),
            word("7,470kg", 300, 353),
            word("실중량", 10, 450),
            word("5,010kg", 300, 449),
        ],
        confidence: Some(0.9),
    };

    let result = pipeline().process(Some(&document));

    assert!(result.success, "errors: {:?}", result.errors);
    let slip = result.data.unwrap();
    assert_eq!(slip.vehicle_number.as_deref(), Some("8713"));
    assert_eq!(slip.date, NaiveDate::from_ymd_opt(2026, 2, 2));
    assert_eq!(slip.gross_weight.unwrap().value, Some(12480.0));
    assert_eq!(slip.tare_weight.unwrap().value, Some(7470.0));
    assert_eq!(slip.net_weight.unwrap().value, Some(5010.0));
}

#[test]
fn measurement_time_is_combined_with_slip_date() {
    let document = OcrDocument::from_lines([
        "2026-02-02",
        "vehicle number: 8713",
        "gross weight 09:15 12,480 kg",
        "tare weight: 7,470 kg",
        "net weight: 5,010 kg",
    ]);

    let result = pipeline().process(Some(&document));

    assert!(result.success, "errors: {:?}", result.errors);
    let slip = result.data.unwrap();
    let gross = slip.gross_weight.unwrap();
    assert_eq!(gross.value, Some(12480.0));
    assert_eq!(
        gross.measured_at,
        NaiveDate::from_ymd_opt(2026, 2, 2).map(|d| d.and_hms_opt(9, 15, 0).unwrap())
    );
}

#[test]
fn missing_document_fails_without_extraction() {
    let result = pipeline().process(None);

    assert!(!result.success);
    assert!(result.data.is_none());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn contentless_document_fails_without_extraction() {
    let result = pipeline().process(Some(&OcrDocument::default()));

    assert!(!result.success);
    assert!(result.data.is_none());
    assert_eq!(result.errors.len(), 1);
}

#[test]
fn missing_fields_are_all_reported() {
    let document = OcrDocument::from_lines(["vehicle number: 8713"]);

    let result = pipeline().process(Some(&document));

    assert!(!result.success);
    assert_eq!(result.errors.len(), 4);
    assert!(result.errors.iter().any(|e| e.contains("date")));
    assert!(result.errors.iter().any(|e| e.contains("gross weight")));
    assert!(result.errors.iter().any(|e| e.contains("tare weight")));
    assert!(result.errors.iter().any(|e| e.contains("net weight")));
}

#[test]
fn inconsistent_weights_fail_validation() {
    let document = OcrDocument::from_lines([
        "vehicle number: 8713",
        "gross weight: 12,480 kg",
        "tare weight: 7,470 kg",
        "net weight: 6,000 kg",
        "2026-02-02",
    ]);

    let result = pipeline().process(Some(&document));

    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("arithmetic mismatch"));
    assert!(result.data.is_none());
}

#[test]
fn net_within_tolerance_still_succeeds() {
    let document = OcrDocument::from_lines([
        "vehicle number: 8713",
        "gross weight: 12,480 kg",
        "tare weight: 7,470 kg",
        "net weight: 5,015 kg",
        "2026-02-02",
    ]);

    let result = pipeline().process(Some(&document));

    assert!(result.success, "errors: {:?}", result.errors);
}

#[test]
fn gross_fallback_covers_unlabeled_first_weight() {
    // No gross keyword anywhere: the first kg line is taken as gross.
    let document = OcrDocument::from_lines([
        "vehicle number: 8713",
        "12,480 kg",
        "tare weight: 7,470 kg",
        "net weight: 5,010 kg",
        "2026-02-02",
    ]);

    let result = pipeline().process(Some(&document));

    assert!(result.success, "errors: {:?}", result.errors);
    let slip = result.data.unwrap();
    assert_eq!(slip.gross_weight.unwrap().value, Some(12480.0));
}

#[test]
fn concurrent_runs_share_one_pipeline() {
    let pipeline = pipeline();
    let document = OcrDocument::from_lines([
        "vehicle number: 8713",
        "gross weight: 12,480 kg",
        "tare weight: 7,470 kg",
        "net weight: 5,010 kg",
        "2026-02-02",
    ]);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let result = pipeline.process(Some(&document));
                assert!(result.success);
            });
        }
    });
}
