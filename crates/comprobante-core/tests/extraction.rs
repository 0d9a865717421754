//! End-to-end extraction over realistic receipt text.

use comprobante_core::models::config::ValidationConfig;
use comprobante_core::{
    build_parser, Comprobante, ComprobanteParser, DocumentType, ExtractionConfig,
    ExtractorVariant, MinimalParser, OcrProvider, PlainTextProvider, ReceiptParser,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const SHORT_BOLETA: &str = "BOLETA DE VENTA ELECTRÓNICA
RUC: 20486760576
FECHA: 26/07/2023
TOTAL S/. 800.00
N° B001-123456
";

const FACTURA: &str = "MICKY LIBRERIA BAZAR
RAZÓN SOCIAL: DISTRIBUIDORA ESCOLAR ANDINA S.A.C.
R.U.C. 20100070970
FACTURA ELECTRÓNICA
F001 - 000452
FECHA DE EMISIÓN: 03/03/2024
SEÑOR(ES): COLEGIO SAN JOSE RUC 20486760576
DIRECCIÓN: JR. LAMPA 450 LIMA
CANT DESCRIPCION IMPORTE
10 CUADERNO ANILLADO 85.00
5 x 3.40 RESALTADOR N2 17.00
SUBTOTAL: S/. 86.44
I.G.V. 18%: S/. 15.56
TOTAL: S/. 102.00
";

fn full(text: &str) -> comprobante_core::ComprobanteRecord {
    ReceiptParser::new().extract_record(text)
}

#[test]
fn test_short_boleta_both_variants() {
    let record = full(SHORT_BOLETA);
    assert_eq!(record.fields.tax_id, "20486760576");
    assert_eq!(record.fields.document_number, "B001-123456");
    assert_eq!(record.fields.issue_date, "26/07/2023");
    assert_eq!(record.totals.total, Some(dec!(800.00)));

    let result = MinimalParser::new().parse(SHORT_BOLETA).unwrap();
    let Comprobante::Minimal(minimal) = result.record else {
        panic!("expected a minimal record");
    };
    assert_eq!(minimal.ruc, "20486760576");
    assert_eq!(minimal.document_number, "B001-123456");
    assert_eq!(minimal.total_amount, dec!(800.00));
    assert_eq!(minimal.document_type, "BOLETA");
}

#[test]
fn test_factura() {
    let record = full(FACTURA);
    let fields = &record.fields;

    assert_eq!(fields.tax_id, "20100070970");
    assert_eq!(fields.document_type, DocumentType::Factura);
    assert_eq!(fields.document_number, "F001-000452");
    assert_eq!(fields.issue_date, "03/03/2024");
    assert_eq!(fields.issuer_name, "DISTRIBUIDORA ESCOLAR ANDINA S.A.C.");
    assert_eq!(fields.customer_name, "COLEGIO SAN JOSE");
    assert_eq!(fields.customer_address, "JR. LAMPA 450 LIMA");

    assert_eq!(record.items.len(), 2);
    assert_eq!(record.items[0].description, "CUADERNO ANILLADO");
    assert_eq!(record.items[0].quantity, 10);
    assert_eq!(record.items[0].unit_price, dec!(8.50));
    assert_eq!(record.items[1].description, "RESALTADOR N2");
    assert_eq!(record.items[1].unit_price, dec!(3.40));

    assert_eq!(record.totals.subtotal, Some(dec!(86.44)));
    assert_eq!(record.totals.tax, Some(dec!(15.56)));
    assert_eq!(record.totals.total, Some(dec!(102.00)));

    let violations = Comprobante::Full(record).validate(&ValidationConfig::default());
    assert!(violations.is_empty(), "{:?}", violations);
}

#[test]
fn test_thousands_separator() {
    let text = "FACTURA\nRUC: 20100070970\nTOTAL: S/. 1,234.56";

    assert_eq!(full(text).totals.total, Some(dec!(1234.56)));

    let minimal = MinimalParser::new().parse(text).unwrap();
    assert_eq!(minimal.record.total(), Some(dec!(1)));
}

#[test]
fn test_missing_fields_are_empty_strings() {
    let record = full("RUC: 20486760576\nTOTAL S/. 10.00");

    assert_eq!(record.fields.issue_date, "");
    assert_eq!(record.fields.issuer_name, "");
    assert_eq!(record.fields.customer_name, "");
    assert_eq!(record.fields.document_number, "");
    assert!(record.items.is_empty());
}

#[test]
fn test_no_ruc_label() {
    let record = full("BOLETA 20486760576 TOTAL 5.00");
    assert_eq!(record.fields.tax_id, "");
}

#[test]
fn test_type_and_number_can_disagree() {
    let record = full("TICKET DE VENTA B001-000123\nVer FACTURA adjunta");

    assert_eq!(record.fields.document_type, DocumentType::Factura);
    assert_eq!(record.fields.document_number, "B001-000123");
}

#[test]
fn test_huge_amounts_do_not_overflow() {
    let huge = "79228162514264337593543950335";

    let text = format!("SUB TOTAL: S/. {huge}\nI.G.V.: S/. {huge}\n");
    let result = ReceiptParser::new().parse(&text).unwrap();
    let Comprobante::Full(record) = &result.record else {
        panic!("expected a full record");
    };
    assert_eq!(record.totals.total, None);
    assert!(!result.record.validate(&ValidationConfig::default()).is_empty());

    let record = full(&format!("ITEMS\n1 A {huge}\n1 B {huge}\n"));
    assert_eq!(record.items.len(), 2);
    assert_eq!(record.totals.total, None);
}

#[test]
fn test_idempotent() {
    let first = full(FACTURA);
    let second = full(FACTURA);
    assert_eq!(first, second);
}

#[test]
fn test_json_shape() {
    let json = serde_json::to_value(full(SHORT_BOLETA)).unwrap();

    assert_eq!(json["tax_id"], "20486760576");
    assert_eq!(json["document_type"], "BOLETA DE VENTA");
    assert!(json["items"].is_array());
    assert!(json["totals"].is_object());
}

#[test]
fn test_text_provider_pipeline() {
    let ocr = PlainTextProvider::new().recognize(FACTURA.as_bytes()).unwrap();

    let config = ExtractionConfig {
        variant: ExtractorVariant::Full,
        ..Default::default()
    };
    let result = build_parser(&config).extract(&ocr).unwrap();

    assert_eq!(result.confidence, Some(100.0));
    assert_eq!(result.record.document_number(), "F001-000452");
    assert_eq!(result.record.total(), Some(dec!(102.00)));
    assert_eq!(result.raw_text, FACTURA);
}
