//! Common regex patterns for Peruvian receipt extraction.
//!
//! All patterns are case-insensitive. Amount captures use `,` as an optional
//! thousands separator and `.` as the decimal separator.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // RUC (issuer tax ID): exactly 11 digits
    pub static ref TAX_ID: Regex = Regex::new(
        r"(?i)R\.?\s*U\.?\s*C\.?\s*:?\s*(\d{11})\b"
    ).unwrap();

    // Document number anchored on the document type label
    pub static ref DOCUMENT_NUMBER_LABELED: Regex = Regex::new(
        r"(?i)(?:BOLETA|FACTURA|TICKET|B/V|F/V)(?:\s*(?:ELECTR[OÓ]NICA|DE\s*VENTA))*\s*(?:N\s*\.?\s*[°º]\.?)?\s*:?\s*([A-Z]*\d[A-Z0-9]*(?:[ \t]*-[ \t]*[A-Z0-9]+)*)"
    ).unwrap();

    // Bare "N° B001-123456"
    pub static ref DOCUMENT_NUMBER_BARE: Regex = Regex::new(
        r"(?i)N\s*\.?\s*[°º]\.?\s*:?\s*([A-Z0-9]+[ \t]*-[ \t]*\d+)"
    ).unwrap();

    // Shape accepted by validation: SERIES-DIGITS
    pub static ref DOCUMENT_NUMBER_SHAPE: Regex = Regex::new(
        r"^[A-Z0-9]+-\d+$"
    ).unwrap();

    pub static ref FACTURA_WORD: Regex = Regex::new(r"(?i)FACTURA").unwrap();

    pub static ref TICKET_WORD: Regex = Regex::new(r"(?i)TICKET").unwrap();

    // Issue date, kept as written
    pub static ref ISSUE_DATE: Regex = Regex::new(
        r"(?i)(?:FECHA|DATE|EMISI[OÓ]N)\s*:?\s*(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})"
    ).unwrap();

    pub static ref DATE_DMY: Regex = Regex::new(
        r"^(\d{1,2})[/\-](\d{1,2})[/\-](\d{4}|\d{2})$"
    ).unwrap();

    pub static ref ISSUER_NAME: Regex = Regex::new(
        r"(?i)RAZ[OÓ]N\s+SOCIAL\s*:?[ \t]*([^\n]+)"
    ).unwrap();

    // Money amounts. TOTAL also matches inside SUBTOTAL; callers reject those.
    pub static ref TOTAL: Regex = Regex::new(
        r"(?i)TOTAL\s*:?\s*(?:S/?\.|S/)?\s*(\d{1,3}(?:,\d{3})+(?:\.\d{1,2})?|\d+(?:\.\d{1,2})?)"
    ).unwrap();

    pub static ref SUBTOTAL: Regex = Regex::new(
        r"(?i)SUB\s*TOTAL\s*:?\s*(?:S/?\.|S/)?\s*(\d{1,3}(?:,\d{3})+(?:\.\d{1,2})?|\d+(?:\.\d{1,2})?)"
    ).unwrap();

    pub static ref IGV: Regex = Regex::new(
        r"(?i)I\.?\s*G\.?\s*V\.?\s*(?:\(?\s*18\s*%\s*\)?)?\s*:?\s*(?:S/?\.|S/)?\s*(\d{1,3}(?:,\d{3})+(?:\.\d{1,2})?|\d+(?:\.\d{1,2})?)"
    ).unwrap();

    // Customer
    pub static ref CUSTOMER_NAME: Regex = Regex::new(
        r"(?i)(?:SE[ÑN]OR(?:\(ES\)|ES)?|CLIENTE|CUSTOMER)\s*:?[ \t]*([^:\n]+)"
    ).unwrap();

    pub static ref CUSTOMER_NAME_STOP: Regex = Regex::new(
        r"(?i)\b(?:DNI|RUC|DIRECCI[OÓ]N)\b"
    ).unwrap();

    pub static ref CUSTOMER_ADDRESS: Regex = Regex::new(
        r"(?i)(?:DIRECCI[OÓ]N|ADDRESS)\s*:?[ \t]*([^:\n]+)"
    ).unwrap();

    pub static ref CUSTOMER_ADDRESS_STOP: Regex = Regex::new(
        r"(?i)\b(?:DNI|RUC|FECHA)\b"
    ).unwrap();

    pub static ref IDENTITY_KIND_LABELED: Regex = Regex::new(
        r"(?i)(?:TIPO\s+DOC\.?|DOCUMENTO)\s*:?\s*(DNI|RUC|CE)\b"
    ).unwrap();

    pub static ref IDENTITY_KIND_BARE: Regex = Regex::new(
        r"(?i)\b(DNI|RUC|CE)\b"
    ).unwrap();

    pub static ref IDENTITY_NUMBER_LABELED: Regex = Regex::new(
        r"(?i)(?:N\s*[°º]\s*DOC\.?|DOCUMENTO)\s*:?\s*(\d{8,11})\b"
    ).unwrap();

    pub static ref IDENTITY_NUMBER_BARE: Regex = Regex::new(
        r"(?i)\b(?:DNI|RUC|CE)\s*:?\s*(\d{8,11})\b"
    ).unwrap();

    // Items section boundaries
    pub static ref ITEMS_HEADER: Regex = Regex::new(
        r"(?i)ITEMS?|PRODUCTOS?|DESCRIPCI[OÓ]N"
    ).unwrap();

    pub static ref ITEMS_FOOTER: Regex = Regex::new(
        r"(?i)SUBTOTAL|TOTAL|IGV"
    ).unwrap();

    // Item rows, matched one line at a time
    pub static ref ROW_QUANTITY_FIRST: Regex = Regex::new(
        r"(\d+)\s+([^0-9\n]+?)\s+(\d+(?:\.\d{2})?)\s*$"
    ).unwrap();

    pub static ref ROW_DESCRIPTION_FIRST: Regex = Regex::new(
        r"([^0-9\n]+?)\s+(\d+)\s+(\d+(?:\.\d{2})?)\s*$"
    ).unwrap();

    pub static ref ROW_UNIT_PRICE: Regex = Regex::new(
        r"(\d+)\s*[xX]\s*(\d+(?:\.\d{2})?)\s+(.+?)\s+(\d+(?:\.\d{2})?)\s*$"
    ).unwrap();

    // Minimal extractor patterns
    pub static ref MINIMAL_RUC: Regex = Regex::new(
        r"(?i)R[UO]C[:\s]*(\d{11})"
    ).unwrap();

    pub static ref MINIMAL_DATE: Regex = Regex::new(
        r"(?i)FECHA[:\s]*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref MINIMAL_TOTAL: Regex = Regex::new(
        r"(?i)TOTAL[:\s]*S/\.\s*(\d+\.?\d*)"
    ).unwrap();

    pub static ref MINIMAL_DOCUMENT_TYPE: Regex = Regex::new(
        r"(?i)(BOLETA|FACTURA)"
    ).unwrap();

    pub static ref MINIMAL_DOCUMENT_NUMBER: Regex = Regex::new(
        r"(?i)N[°º]\s*([A-Z0-9]+-\d+)"
    ).unwrap();

    pub static ref MINIMAL_ISSUER_NAME: Regex = Regex::new(
        r"(?i)RAZON SOCIAL[:\s]*([^\n]+)"
    ).unwrap();
}
