use crate::domain::Property;
use crate::errors::{ResultResp, ServerError};
use crate::responses::xlsx_response;
use rust_xlsxwriter::Workbook;

/// Writes the (already filtered) catalog slice into a workbook and wraps
/// it as a download. The filename suffix reflects the active type filter.
pub fn export_properties_xlsx(properties: &[&Property], suffix: &str) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = [
        "Title",
        "City",
        "District",
        "Type",
        "Area m2",
        "Beds",
        "Baths",
        "Year Built",
        "Price",
        "Price per m2",
        "Listed",
        "Features",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    for (i, property) in properties.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &property.title)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write title: {e}")))?;

        worksheet
            .write_string(r, 1, &property.city)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write city: {e}")))?;

        worksheet
            .write_string(r, 2, &property.district)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write district: {e}")))?;

        worksheet
            .write_string(r, 3, property.property_type.label())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write type: {e}")))?;

        worksheet
            .write_number(r, 4, property.area)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write area: {e}")))?;

        worksheet
            .write_number(r, 5, property.bedrooms.unwrap_or(0) as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write bedrooms: {e}")))?;

        worksheet
            .write_number(r, 6, property.bathrooms.unwrap_or(0) as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write bathrooms: {e}")))?;

        worksheet
            .write_number(r, 7, property.year_built.unwrap_or(0) as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write year: {e}")))?;

        worksheet
            .write_number(r, 8, property.price as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {e}")))?;

        worksheet
            .write_number(r, 9, property.price_per_sqm().round())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write price/m2: {e}")))?;

        worksheet
            .write_string(r, 10, property.listed_date.to_string())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write listed date: {e}")))?;

        worksheet
            .write_string(r, 11, property.features.join(", "))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write features: {e}")))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))?;

    xlsx_response(buffer, &format!("properties_{suffix}.xlsx"))
}
