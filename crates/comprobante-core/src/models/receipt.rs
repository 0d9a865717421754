//! Receipt (comprobante de pago) data models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fully extracted receipt: scalar fields, line items and reconciled totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprobanteRecord {
    /// Single-valued fields.
    #[serde(flatten)]
    pub fields: ExtractedFields,

    /// Line items in the order they were detected.
    pub items: Vec<LineItem>,

    /// Totals after reconciliation.
    pub totals: Totals,
}

/// Scalar fields recognised in the receipt text.
///
/// Text fields that could not be found are empty strings, never `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Issuer tax identifier (RUC).
    pub tax_id: String,

    /// Kind of document, decided from the whole text.
    pub document_type: DocumentType,

    /// Series and correlative number, e.g. `B001-123456`.
    pub document_number: String,

    /// Issue date exactly as written on the receipt.
    pub issue_date: String,

    /// Issuer business name (razón social).
    pub issuer_name: String,

    /// Customer name.
    pub customer_name: String,

    /// Customer address.
    pub customer_address: String,

    /// Customer identity document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_document: Option<CustomerDocument>,
}

/// Type of receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Boleta de venta (consumer receipt).
    #[default]
    #[serde(rename = "BOLETA DE VENTA")]
    Boleta,
    /// Factura (invoice).
    #[serde(rename = "FACTURA")]
    Factura,
    /// Ticket (register tape).
    #[serde(rename = "TICKET")]
    Ticket,
}

impl DocumentType {
    /// Label used on the printed document.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Boleta => "BOLETA DE VENTA",
            DocumentType::Factura => "FACTURA",
            DocumentType::Ticket => "TICKET",
        }
    }
}

/// Customer identity document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDocument {
    /// Document kind, when the text names one.
    #[serde(rename = "type")]
    pub kind: Option<IdentityKind>,

    /// Document number (8 to 11 digits).
    pub number: String,
}

/// Peruvian identity document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdentityKind {
    /// Documento Nacional de Identidad.
    Dni,
    /// Registro Único de Contribuyentes.
    Ruc,
    /// Carné de extranjería.
    Ce,
}

impl IdentityKind {
    /// Parse a document kind token, ignoring case.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "DNI" => Some(IdentityKind::Dni),
            "RUC" => Some(IdentityKind::Ruc),
            "CE" => Some(IdentityKind::Ce),
            _ => None,
        }
    }
}

/// A single line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product description.
    pub description: String,

    /// Quantity (always positive).
    pub quantity: u32,

    /// Unit price, two decimal places.
    pub unit_price: Decimal,

    /// Line amount.
    pub amount: Decimal,

    /// Row grammar that produced this item.
    pub grammar: RowGrammar,

    /// Line index within the items section.
    pub line: usize,
}

/// The row layouts recognised by the line-item extractor, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowGrammar {
    /// `quantity description amount`
    QuantityFirst,
    /// `description quantity amount`
    DescriptionFirst,
    /// `quantity x unit_price description amount`
    UnitPrice,
}

/// Receipt totals; each may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Amount before tax (op. gravada).
    pub subtotal: Option<Decimal>,

    /// Value-added tax (IGV).
    pub tax: Option<Decimal>,

    /// Amount payable.
    pub total: Option<Decimal>,
}

/// Output of the lightweight six-field extractor.
///
/// Missing text fields are empty; a missing total is zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinimalRecord {
    pub ruc: String,
    pub issue_date: String,
    pub total_amount: Decimal,
    pub document_type: String,
    pub document_number: String,
    pub issuer_name: String,
}

/// Record produced by either extractor variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Comprobante {
    /// Full record with items and reconciled totals.
    Full(ComprobanteRecord),
    /// Six scalar fields only.
    Minimal(MinimalRecord),
}

impl Comprobante {
    pub fn tax_id(&self) -> &str {
        match self {
            Comprobante::Full(r) => &r.fields.tax_id,
            Comprobante::Minimal(r) => &r.ruc,
        }
    }

    pub fn document_number(&self) -> &str {
        match self {
            Comprobante::Full(r) => &r.fields.document_number,
            Comprobante::Minimal(r) => &r.document_number,
        }
    }

    pub fn document_type(&self) -> &str {
        match self {
            Comprobante::Full(r) => r.fields.document_type.label(),
            Comprobante::Minimal(r) => &r.document_type,
        }
    }

    pub fn issue_date(&self) -> &str {
        match self {
            Comprobante::Full(r) => &r.fields.issue_date,
            Comprobante::Minimal(r) => &r.issue_date,
        }
    }

    pub fn issuer_name(&self) -> &str {
        match self {
            Comprobante::Full(r) => &r.fields.issuer_name,
            Comprobante::Minimal(r) => &r.issuer_name,
        }
    }

    /// Total amount, if known.
    pub fn total(&self) -> Option<Decimal> {
        match self {
            Comprobante::Full(r) => r.totals.total,
            Comprobante::Minimal(r) => Some(r.total_amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_kind_parsing() {
        assert_eq!(IdentityKind::from_str("dni"), Some(IdentityKind::Dni));
        assert_eq!(IdentityKind::from_str(" RUC "), Some(IdentityKind::Ruc));
        assert_eq!(IdentityKind::from_str("Ce"), Some(IdentityKind::Ce));
        assert_eq!(IdentityKind::from_str("PASAPORTE"), None);
    }

    #[test]
    fn test_document_type_serialization() {
        assert_eq!(
            serde_json::to_string(&DocumentType::Boleta).unwrap(),
            "\"BOLETA DE VENTA\""
        );
        assert_eq!(DocumentType::default(), DocumentType::Boleta);
        assert_eq!(DocumentType::Factura.label(), "FACTURA");
    }

    #[test]
    fn test_record_flattens_fields() {
        let record = ComprobanteRecord {
            fields: ExtractedFields {
                tax_id: "20486760576".to_string(),
                customer_document: Some(CustomerDocument {
                    kind: Some(IdentityKind::Dni),
                    number: "12345678".to_string(),
                }),
                ..Default::default()
            },
            items: Vec::new(),
            totals: Totals::default(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["tax_id"], "20486760576");
        assert_eq!(json["customer_document"]["type"], "DNI");
        assert!(json["totals"]["total"].is_null());
    }
}
