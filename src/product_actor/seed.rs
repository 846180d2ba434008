use rust_decimal::Decimal;

use crate::domain::ProductCreate;

/// The catalog loaded into the product collection at startup, in ID order.
pub fn sample_products() -> Vec<ProductCreate> {
    vec![
        ProductCreate::new(
            "Golden Apples",
            "Sweet and juicy apples",
            Decimal::new(99_99, 2),
            "fruits",
            "https://images.unsplash.com/photo-1610444833641-0542660a4ed7",
        )
        .in_stock(100),
        ProductCreate::new(
            "Bananas",
            "Ripe bananas from Ecuador",
            Decimal::new(89_99, 2),
            "fruits",
            "https://images.unsplash.com/photo-1498579397066-22750a3cb424",
        )
        .in_stock(150),
        ProductCreate::new(
            "Tomatoes",
            "Fresh tomatoes",
            Decimal::new(199_99, 2),
            "vegetables",
            "https://images.unsplash.com/photo-1557844352-761f2565b576",
        )
        .in_stock(80),
        ProductCreate::new(
            "Cucumbers",
            "Crunchy cucumbers",
            Decimal::new(149_99, 2),
            "vegetables",
            "https://images.unsplash.com/photo-1610348725531-843dff563e2c",
        )
        .in_stock(90),
        ProductCreate::new(
            "Dried Apricots",
            "Sun-dried apricots",
            Decimal::new(399_99, 2),
            "dried",
            "https://images.unsplash.com/photo-1595412017587-b7f3117dff54",
        )
        .in_stock(50),
    ]
}
