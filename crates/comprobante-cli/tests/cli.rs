use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BOLETA: &str = "BOLETA DE VENTA ELECTRÓNICA
RAZON SOCIAL: EMPRESA EJEMPLO SAC
RUC: 20486760576
FECHA: 26/07/2023
N° B001-123456
DESCRIPCION
2 x 15.50 NOTEBOOK A4 31.00
TOTAL S/. 31.00
";

fn comprobante() -> Command {
    Command::cargo_bin("comprobante").unwrap()
}

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_process_json() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "boleta.txt", BOLETA);

    comprobante()
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tax_id\":\"20486760576\""))
        .stdout(predicate::str::contains("\"document_number\":\"B001-123456\""))
        .stdout(predicate::str::contains("NOTEBOOK A4"));
}

#[test]
fn test_process_minimal() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "boleta.txt", BOLETA);

    comprobante()
        .args(["process", "--minimal"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ruc\":\"20486760576\""))
        .stdout(predicate::str::contains("\"items\"").not());
}

#[test]
fn test_process_csv_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "boleta.txt", BOLETA);
    let output = dir.path().join("out.csv");

    comprobante()
        .args(["process", "-f", "csv", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("document_type,document_number"));
    assert!(lines.next().unwrap().starts_with("BOLETA DE VENTA,B001-123456,26/07/2023"));
}

#[test]
fn test_process_text_summary() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "boleta.txt", BOLETA);

    comprobante()
        .args(["process", "-f", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("BOLETA DE VENTA B001-123456"))
        .stdout(predicate::str::contains("2 x NOTEBOOK A4 @ 15.50 = 31.00"));
}

#[test]
fn test_process_validate_fails_on_bad_ruc() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "bad.txt", &BOLETA.replace("20486760576", "20123456789"));

    comprobante()
        .args(["process", "--validate"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("tax_id: invalid RUC check digit"));
}

#[test]
fn test_process_rejects_images() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "scan.png", "not really a png");

    comprobante()
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No OCR provider"));
}

#[test]
fn test_process_missing_file() {
    comprobante()
        .args(["process", "/nonexistent/receipt.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_batch_with_summary() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.txt", BOLETA);
    write(&dir, "b.txt", "FACTURA\nRUC: 20100070970\nTOTAL: S/. 1,234.56");
    write(&dir, "c.txt", "   ");
    let out = dir.path().join("out");
    let pattern = format!("{}/*.txt", dir.path().display());

    comprobante()
        .args(["batch", &pattern, "--summary", "--continue-on-error", "-j", "2", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful, 1 failed"));

    assert!(out.join("a.json").exists());
    assert!(out.join("b.json").exists());
    assert!(!out.join("c.json").exists());

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("a.txt,success,BOLETA DE VENTA,B001-123456"));
    assert!(lines[2].contains("1234.56"));
    assert!(lines[3].starts_with("c.txt,error"));
}

#[test]
fn test_batch_stops_on_error() {
    let dir = TempDir::new().unwrap();
    write(&dir, "empty.txt", "");
    let pattern = format!("{}/*.txt", dir.path().display());

    comprobante()
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing failed"));
}

#[test]
fn test_config_init_set_get() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    comprobante()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    comprobante()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "extraction.variant", "minimal"])
        .assert()
        .success();

    comprobante()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "extraction.variant"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"minimal\""));

    comprobante()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "extraction.nope", "1"])
        .assert()
        .failure();
}

#[test]
fn test_config_drives_process() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"extraction": {"variant": "minimal"}}"#).unwrap();
    let input = write(&dir, "boleta.txt", BOLETA);

    comprobante()
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_amount\""));
}
