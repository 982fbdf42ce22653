//! Tests for the parametric item model and factor tables.

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::pricing::{
        ItemColor, Material, ParametricItem, PriceMode, ProductType, Subtype,
    };

    #[test]
    fn test_base_price_table() {
        assert_eq!(ProductType::Door.base_price_per_area(), dec!(500));
        assert_eq!(ProductType::Window.base_price_per_area(), dec!(400));
        assert_eq!(ProductType::Railing.base_price_per_area(), dec!(380));
    }

    #[test]
    fn test_product_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ProductType::Door).unwrap(),
            "\"door\""
        );
        assert_eq!(
            serde_json::from_str::<ProductType>("\"railing\"").unwrap(),
            ProductType::Railing
        );
        assert_eq!(ProductType::parse("window"), Some(ProductType::Window));
        assert_eq!(ProductType::parse("fence"), None);
    }

    #[test]
    fn test_effective_price_auto_applies_factors() {
        let item = ParametricItem {
            product_type: Some(ProductType::Window),
            subtype: Some(Subtype::Center),
            color: Some(ItemColor::White),
            ..Default::default()
        };
        // 400 * 1.10 * 1.00
        assert_eq!(item.effective_price_per_area(), dec!(440));
    }

    #[test]
    fn test_effective_price_rounds_half_away_from_zero() {
        let item = ParametricItem {
            product_type: Some(ProductType::Door),
            subtype: Some(Subtype::Center),
            color: Some(ItemColor::Silver),
            ..Default::default()
        };
        // 500 * 1.10 * 1.07 = 588.50 -> 589
        assert_eq!(item.effective_price_per_area(), dec!(589));
    }

    #[test]
    fn test_effective_price_unset_fields_default_to_one() {
        let item = ParametricItem {
            product_type: Some(ProductType::Railing),
            ..Default::default()
        };
        assert_eq!(item.effective_price_per_area(), dec!(380));
    }

    #[test]
    fn test_effective_price_no_product_type_is_zero() {
        let item = ParametricItem::default();
        assert_eq!(item.effective_price_per_area(), dec!(0));
    }

    #[test]
    fn test_manual_price_used_verbatim() {
        let item = ParametricItem {
            product_type: Some(ProductType::Door),
            subtype: Some(Subtype::Double),
            color: Some(ItemColor::Bronze),
            price_mode: PriceMode::Manual,
            price_per_area: dec!(123.45),
            ..Default::default()
        };
        // No factors, no rounding in manual mode.
        assert_eq!(item.effective_price_per_area(), dec!(123.45));
    }

    #[test]
    fn test_manual_negative_price_clamped() {
        let item = ParametricItem {
            price_mode: PriceMode::Manual,
            price_per_area: dec!(-10),
            ..Default::default()
        };
        assert_eq!(item.effective_price_per_area(), dec!(0));
    }

    #[test]
    fn test_switching_back_to_auto_discards_manual_value() {
        let mut item = ParametricItem {
            product_type: Some(ProductType::Door),
            price_mode: PriceMode::Manual,
            price_per_area: dec!(999),
            ..Default::default()
        };
        assert_eq!(item.effective_price_per_area(), dec!(999));

        item.price_mode = PriceMode::Auto;
        assert_eq!(item.effective_price_per_area(), dec!(500));
    }

    #[test]
    fn test_completeness_requires_all_fields() {
        let complete = ParametricItem {
            product_type: Some(ProductType::Door),
            material: Some(Material::Steel),
            width: dec!(1.0),
            height: dec!(2.0),
            quantity: 1,
            ..Default::default()
        };
        assert!(complete.is_complete());

        let no_material = ParametricItem {
            material: None,
            ..complete.clone()
        };
        assert!(!no_material.is_complete());

        let zero_width = ParametricItem {
            width: dec!(0),
            ..complete.clone()
        };
        assert!(!zero_width.is_complete());

        let zero_quantity = ParametricItem {
            quantity: 0,
            ..complete.clone()
        };
        assert!(!zero_quantity.is_complete());

        let zero_price = ParametricItem {
            price_mode: PriceMode::Manual,
            price_per_area: dec!(0),
            ..complete
        };
        assert!(!zero_price.is_complete());
    }

    #[test]
    fn test_item_deserializes_from_partial_form() {
        let item: ParametricItem =
            serde_json::from_str(r#"{"productType":"door","width":2.5}"#).unwrap();
        assert_eq!(item.product_type, Some(ProductType::Door));
        assert_eq!(item.width, dec!(2.5));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price_mode, PriceMode::Auto);
        assert!(!item.is_complete());
    }
}
