//! Tests for the pricing engine against its contract:
//! determinism, single rounding after the quantity multiply, clamping of
//! malformed input, and unpriced-accessory tolerance.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use crate::catalog::{Accessory, StaticAccessoryCatalog};
    use crate::pricing::{
        ItemColor, Material, ParametricItem, PriceMode, PricingService, ProductType, Subtype,
    };

    fn catalog_with(entries: &[(&str, rust_decimal::Decimal)]) -> Arc<StaticAccessoryCatalog> {
        Arc::new(StaticAccessoryCatalog::from_entries(
            entries
                .iter()
                .map(|(id, price)| Accessory {
                    id: id.to_string(),
                    unit_price: *price,
                })
                .collect(),
        ))
    }

    fn service() -> PricingService {
        PricingService::new(catalog_with(&[("handle", dec!(20)), ("lock", dec!(45))]))
    }

    fn door_item() -> ParametricItem {
        ParametricItem {
            product_type: Some(ProductType::Door),
            subtype: Some(Subtype::Normal),
            material: Some(Material::Steel),
            color: Some(ItemColor::White),
            width: dec!(2.5),
            height: dec!(1.2),
            quantity: 3,
            accessory_ids: vec!["handle".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_reference_rounding_example() {
        // area = 3.0, subtotal = 1500, line = 1520, total = round(1520 * 3)
        let svc = service();
        assert_eq!(svc.item_total(&door_item()), 4560);
    }

    #[test]
    fn test_item_total_is_deterministic() {
        let svc = service();
        let item = door_item();
        let first = svc.item_total(&item);
        for _ in 0..10 {
            assert_eq!(svc.item_total(&item), first);
        }
    }

    #[test]
    fn test_quantity_monotonicity() {
        let svc = service();
        let mut item = door_item();
        let mut previous = 0;
        for quantity in 1..=20 {
            item.quantity = quantity;
            let total = svc.item_total(&item);
            assert!(
                total >= previous,
                "total decreased from {} to {} at quantity {}",
                previous,
                total,
                quantity
            );
            previous = total;
        }
    }

    #[test]
    fn test_rounding_happens_once_after_quantity_multiply() {
        // line total 10.4 per unit: rounding per unit would give 10 * 3 = 30;
        // the single final rounding gives round(31.2) = 31.
        let svc = PricingService::new(catalog_with(&[]));
        let item = ParametricItem {
            width: dec!(1),
            height: dec!(1),
            quantity: 3,
            price_mode: PriceMode::Manual,
            price_per_area: dec!(10.4),
            ..Default::default()
        };
        assert_eq!(svc.item_total(&item), 31);
    }

    #[test]
    fn test_negative_dimensions_clamp_to_zero_area() {
        let svc = service();
        let item = ParametricItem {
            product_type: Some(ProductType::Door),
            width: dec!(-1),
            height: dec!(2),
            quantity: 2,
            accessory_ids: vec!["handle".to_string()],
            ..Default::default()
        };
        // Area clamps to 0; only the accessories survive: 20 * 2.
        assert_eq!(svc.item_total(&item), 40);
    }

    #[test]
    fn test_zero_quantity_prices_as_one() {
        let svc = service();
        let mut item = door_item();
        item.quantity = 0;
        assert_eq!(svc.item_total(&item), 1520);
    }

    #[test]
    fn test_unknown_accessory_contributes_zero() {
        let svc = service();
        let mut item = door_item();
        item.accessory_ids = vec!["handle".to_string(), "no-such-accessory".to_string()];
        assert_eq!(svc.item_total(&item), 4560);
    }

    #[test]
    fn test_duplicate_accessories_counted_once() {
        let svc = service();
        let mut item = door_item();
        item.accessory_ids = vec![
            "handle".to_string(),
            "handle".to_string(),
            "lock".to_string(),
        ];
        // line = 1500 + 20 + 45 = 1565, total = 1565 * 3
        assert_eq!(svc.item_total(&item), 4695);
    }

    #[test]
    fn test_order_total_aggregates_items() {
        let svc = service();
        let primary = door_item();
        let additional = ParametricItem {
            width: dec!(1),
            height: dec!(1),
            quantity: 1,
            price_mode: PriceMode::Manual,
            price_per_area: dec!(800),
            ..Default::default()
        };
        // 4560 + 800
        assert_eq!(svc.order_total(&primary, &[additional]), 5360);
    }

    #[test]
    fn test_order_total_with_no_additional_items() {
        let svc = service();
        assert_eq!(svc.order_total(&door_item(), &[]), 4560);
    }

    #[test]
    fn test_incomplete_item_previews_as_zero() {
        let svc = service();
        let item = ParametricItem::default();
        assert_eq!(svc.item_total(&item), 0);
    }

    #[test]
    fn test_catalog_json_loading() {
        let catalog = StaticAccessoryCatalog::from_json_str(
            r#"[{"id":"handle","unitPrice":20},{"id":"lock","unitPrice":45.5}]"#,
        )
        .unwrap();
        let svc = PricingService::new(Arc::new(catalog));
        assert_eq!(svc.accessories_cost(&["lock".to_string()]), dec!(45.5));

        assert!(StaticAccessoryCatalog::from_json_str("not json").is_err());
    }
}
