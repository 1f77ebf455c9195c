use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const FULL_HEADER: &str =
    "Nama,Rumus Kimia,Klasifikasi,Bahaya,Penyimpanan,Penanganan,Pertolongan Pertama,Kode Warna,GHS";

fn sdsview() -> Command {
    Command::cargo_bin("sdsview").unwrap()
}

#[test]
fn list_search_matches_one_record() {
    sdsview()
        .args(["list", "--search", "asam"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Asam Sulfat (H₂SO₄) (H₂SO₄)"))
        .stdout(predicate::str::contains("Primary hazard [danger]"))
        .stdout(predicate::str::contains("Natrium").not())
        .stdout(predicate::str::contains("Metanol").not());
}

#[test]
fn list_hazard_filter_keeps_catalog_order() {
    sdsview()
        .args(["list", "--hazard", "Korosif"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)Asam Sulfat.*Natrium Hidroksida").unwrap())
        .stdout(predicate::str::contains("Metanol").not());
}

#[test]
fn list_accepts_english_hazard_names() {
    sdsview()
        .args(["list", "--hazard", "flammable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metanol (CH₃OH)"))
        .stdout(predicate::str::contains("Primary hazard [warning]"));
}

#[test]
fn list_without_matches_reports_notice() {
    sdsview()
        .args(["list", "--search", "xyz123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No chemicals match the given filters."));
}

#[test]
fn unknown_hazard_is_rejected() {
    sdsview()
        .args(["list", "--hazard", "Explosive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown hazard class 'Explosive'"));
}

#[test]
fn template_to_stdout_is_header_only() {
    sdsview()
        .args(["template", "--output", "-"])
        .assert()
        .success()
        .stdout(
            "Nama,Rumus Kimia,Klasifikasi,Bahaya,Penyimpanan,Penanganan,Pertolongan Pertama\n",
        );
}

#[test]
fn template_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sds_template.csv");

    sdsview()
        .args(["template", "--output"])
        .arg(&path)
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(!text.contains("Kode Warna"));
    assert!(!text.contains("GHS"));
}

#[test]
fn filled_template_loads_as_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.csv");
    fs::write(
        &path,
        "Nama,Rumus Kimia,Klasifikasi,Bahaya,Penyimpanan,Penanganan,Pertolongan Pertama\n\
         Amonia (NH₃),NH₃,\"Korosif, Beracun\",Iritasi berat,Wadah tertutup,Masker,Udara segar\n\
         Hidrogen Peroksida (H₂O₂),H₂O₂,Oksidator,Iritasi kulit,Tempat gelap,Sarung tangan,Bilas air\n",
    )
    .unwrap();

    sdsview()
        .arg("--catalog")
        .arg(&path)
        .args(["list", "--hazard", "Oksidator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hidrogen Peroksida (H₂O₂)"))
        .stdout(predicate::str::contains("Primary hazard [safe]"))
        .stdout(predicate::str::contains("Color code: -"))
        .stdout(predicate::str::contains("Amonia").not());
}

#[test]
fn malformed_catalog_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    fs::write(
        &path,
        format!(
            "{FULL_HEADER}\n\
             Aseton,C₃H₆O,Mudah Terbakar,Iritasi,Rak,Sarung tangan,Udara segar,Biru,\n\
             Etanol,C₂H₅OH,Mudah Terbakar,Iritasi,,Sarung tangan,Udara segar,Biru,\n"
        ),
    )
    .unwrap();

    sdsview()
        .arg("--catalog")
        .arg(&path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"))
        .stderr(predicate::str::contains("Penyimpanan"));
}

#[test]
fn missing_catalog_file_fails() {
    sdsview()
        .args(["--catalog", "/nonexistent/catalog.csv", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open catalog"));
}
