//! # PDF Text Extraction Tests

use anyhow::Result;
use relaxgo_pdf::{extract_pages, extract_text_from_pdf};
use relaxgo_test_utils::helpers::{generate_test_pdf, generate_test_pdf_pages};

#[test]
fn test_single_page_text_is_extracted() -> Result<()> {
    let pdf_data = generate_test_pdf("Day 1: City tour...")?;

    let text = extract_text_from_pdf(&pdf_data)?;

    assert_eq!(text, "Day 1: City tour...");
    Ok(())
}

#[test]
fn test_pages_are_joined_in_order_and_blank_pages_skipped() -> Result<()> {
    let pdf_data = generate_test_pdf_pages(&[
        "Day 1: Arrive in Tokyo",
        "",
        "Day 2: Asakusa and Ueno",
        "Day 3: Free day",
    ])?;

    let pages = extract_pages(&pdf_data)?;
    assert_eq!(pages.page_count(), 4);
    assert_eq!(pages.pages_with_text(), 3);

    let text = extract_text_from_pdf(&pdf_data)?;
    assert_eq!(
        text,
        "Day 1: Arrive in Tokyo\nDay 2: Asakusa and Ueno\nDay 3: Free day"
    );
    Ok(())
}

#[test]
fn test_pdf_without_text_extracts_to_empty_string() -> Result<()> {
    let pdf_data = generate_test_pdf_pages(&["", ""])?;

    let text = extract_text_from_pdf(&pdf_data)?;

    assert!(text.is_empty(), "Expected no text, got {text:?}");
    Ok(())
}

#[test]
fn test_win_ansi_text_is_decoded_through_the_font_encoding() -> Result<()> {
    let pdf_data = generate_test_pdf("Café – Dec 20–25, €1,899")?;

    let text = extract_text_from_pdf(&pdf_data)?;

    assert_eq!(text, "Café – Dec 20–25, €1,899");
    assert!(!text.contains('\u{FFFD}'));
    Ok(())
}
