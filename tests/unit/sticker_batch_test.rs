// Tests for barcode sticker batch generation: output counts, ordering,
// formatting, and best-effort skipping of unrenderable barcode values.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use weavepos::stickers::{LabelRequest, StickerService};

fn request(product_id: &str, copies: u32, barcode: &str, name: &str, price: Decimal) -> LabelRequest {
    LabelRequest {
        product_id: product_id.to_string(),
        copies,
        barcode: barcode.to_string(),
        name: name.to_string(),
        price,
    }
}

fn service() -> StickerService {
    StickerService::new("Weave Textiles", 18)
}

#[test]
fn test_batch_counts_and_order() {
    // {A: 3, B: 2} → exactly 5 labels, 3 for A then 2 for B
    let batch = service().generate_batch(&[
        request("A", 3, "890100000001", "Cotton Saree", dec!(1200)),
        request("B", 2, "890100000002", "Silk Scarf", dec!(450.5)),
    ]);

    assert_eq!(batch.len(), 5);
    assert!(batch[..3].iter().all(|l| l.barcode == "890100000001"));
    assert!(batch[3..].iter().all(|l| l.barcode == "890100000002"));
}

#[test]
fn test_label_fields_populated() {
    let batch = service().generate_batch(&[request(
        "A",
        1,
        "890100000001",
        "Silk Scarf",
        dec!(450.5),
    )]);

    let label = &batch[0];
    assert_eq!(label.shop_name, "Weave Textiles");
    assert_eq!(label.product_name, "Silk Scarf");
    assert_eq!(label.price, "450.50");
}

#[test]
fn test_long_names_ellipsized() {
    let batch = service().generate_batch(&[request(
        "A",
        1,
        "890100000001",
        "Handloom Cotton Saree Premium Edition",
        dec!(1200),
    )]);

    let name = &batch[0].product_name;
    assert_eq!(name.chars().count(), 18);
    assert!(name.ends_with('…'));
}

#[test]
fn test_invalid_barcode_skipped_batch_continues() {
    let batch = service().generate_batch(&[
        request("A", 2, "890100000001", "Cotton Saree", dec!(1200)),
        request("B", 3, "", "Broken", dec!(10)),
        request("C", 1, "897\u{0905}01", "Also Broken", dec!(10)),
        request("D", 2, "890100000004", "Silk Scarf", dec!(450)),
    ]);

    assert_eq!(batch.len(), 4);
    assert!(batch.iter().all(|l| l.barcode != ""));
    assert!(batch.iter().any(|l| l.barcode == "890100000004"));
}

#[test]
fn test_service_built_from_configuration() {
    let config = weavepos::config::Config::from_env().unwrap();
    config.validate().unwrap();

    let service = StickerService::from_config(&config);
    let batch = service.generate_batch(&[request(
        "A",
        1,
        "890100000001",
        "Cotton Saree",
        dec!(1200),
    )]);

    assert_eq!(batch[0].shop_name, config.shop.name);
}

#[test]
fn test_zero_copies_yields_no_labels() {
    let batch = service().generate_batch(&[request(
        "A",
        0,
        "890100000001",
        "Cotton Saree",
        dec!(1200),
    )]);
    assert!(batch.is_empty());
}

proptest! {
    #[test]
    fn test_total_count_is_sum_of_copies(
        copies in proptest::collection::vec(0u32..20, 1..8)
    ) {
        let requests: Vec<LabelRequest> = copies
            .iter()
            .enumerate()
            .map(|(i, &n)| request(
                &format!("P{i}"),
                n,
                &format!("89010000{i:04}"),
                "Product",
                dec!(99.99),
            ))
            .collect();

        let batch = service().generate_batch(&requests);
        let expected: u32 = copies.iter().sum();
        prop_assert_eq!(batch.len() as u32, expected);
    }

    #[test]
    fn test_price_always_two_decimals(whole in 0u64..1_000_000u64, cents in 0u32..100) {
        let price = Decimal::from(whole) + Decimal::new(cents as i64, 2);
        let batch = service().generate_batch(&[request("A", 1, "890100000001", "P", price)]);

        let rendered = &batch[0].price;
        let decimals = rendered.split('.').nth(1).map(str::len);
        prop_assert_eq!(decimals, Some(2), "price '{}' must carry 2 decimals", rendered);
    }
}
