use crate::tests::utils::{get, test_catalog};
use std::io::Read;

#[test]
fn export_returns_a_spreadsheet_attachment() {
    let catalog = test_catalog();
    let resp = get(&catalog, "/export").expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("properties_all.xlsx"));

    let mut buffer = Vec::new();
    resp.into_body().reader().read_to_end(&mut buffer).unwrap();
    // XLSX is a zip container; check the magic bytes rather than parsing.
    assert!(buffer.starts_with(b"PK"));
}

#[test]
fn export_filter_is_reflected_in_the_filename() {
    let catalog = test_catalog();
    let resp = get(&catalog, "/export?property_type=house").unwrap();
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("properties_house.xlsx"));
}
