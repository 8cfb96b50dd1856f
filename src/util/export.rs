//! Spreadsheet export for the product and user tables.
//!
//! DESIGN
//! ======
//! Workbook construction is pure (rows in, `.xlsx` bytes out) so the
//! formatting rules are unit-testable on the host; only [`download`]
//! touches the browser. Headers are bold with thin borders, body cells
//! carry thin borders, and column widths are fixed per column.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use rust_xlsxwriter::{Format, FormatBorder, Workbook, XlsxError};

use crate::net::types::{Product, User};
use crate::util::format::{capitalize, capitalize_first, format_phone, plain_number};
use crate::util::image_url;

pub const PRODUCT_HEADERS: [&str; 5] = ["No", "Title", "Price", "Type", "Image"];
pub const PRODUCT_WIDTHS: [f64; 5] = [6.0, 30.0, 12.0, 15.0, 50.0];

pub const USER_HEADERS: [&str; 4] = ["No", "User's Name", "Email", "Contact"];
pub const USER_WIDTHS: [f64; 4] = [6.0, 24.0, 32.0, 18.0];

/// One spreadsheet row for a product, formatted the way the table shows it.
/// `index` is zero-based; the sheet shows it one-based.
pub fn product_row(index: usize, product: &Product) -> [String; 5] {
    let image = if image_url::has_image(&product.main_image) {
        image_url::normalize(&product.main_image)
    } else {
        "No Image".to_owned()
    };
    [
        (index + 1).to_string(),
        capitalize_first(&product.title),
        format!("${}", plain_number(product.price)),
        capitalize(&product.kind),
        image,
    ]
}

/// One spreadsheet row for a user.
pub fn user_row(index: usize, user: &User) -> [String; 4] {
    [
        (index + 1).to_string(),
        format!("{} {}", capitalize(&user.first_name), capitalize(&user.last_name)),
        user.email.clone(),
        format_phone(&user.number),
    ]
}

/// Build the products workbook as `.xlsx` bytes.
pub fn products_workbook(products: &[Product]) -> Result<Vec<u8>, XlsxError> {
    let rows: Vec<_> = products
        .iter()
        .enumerate()
        .map(|(index, product)| product_row(index, product))
        .collect();
    build_workbook("Products", &PRODUCT_HEADERS, &PRODUCT_WIDTHS, rows.iter().map(<[String; 5]>::as_slice))
}

/// Build the users workbook as `.xlsx` bytes.
pub fn users_workbook(users: &[User]) -> Result<Vec<u8>, XlsxError> {
    let rows: Vec<_> = users
        .iter()
        .enumerate()
        .map(|(index, user)| user_row(index, user))
        .collect();
    build_workbook("Users", &USER_HEADERS, &USER_WIDTHS, rows.iter().map(<[String; 4]>::as_slice))
}

fn build_workbook<'a>(
    sheet_name: &str,
    headers: &[&str],
    widths: &[f64],
    rows: impl Iterator<Item = &'a [String]>,
) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);
    let body_format = Format::new().set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        worksheet.write_string_with_format(0, col, *header, &header_format)?;
        worksheet.set_column_width(col, widths[usize::from(col)])?;
    }
    for (row, cells) in rows.enumerate() {
        let row = u32::try_from(row + 1).unwrap_or(u32::MAX);
        for (col, cell) in cells.iter().enumerate() {
            let col = u16::try_from(col).unwrap_or(u16::MAX);
            worksheet.write_string_with_format(row, col, cell, &body_format)?;
        }
    }
    workbook.save_to_buffer()
}

/// Trigger a browser download of `bytes` as `filename`.
#[cfg(feature = "hydrate")]
pub fn download(filename: &str, bytes: &[u8]) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet");
    let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };
    if let Ok(element) = document.create_element("a") {
        if let Ok(anchor) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = anchor.set_attribute("href", &url);
            let _ = anchor.set_attribute("download", filename);
            anchor.click();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}
