//! Plain-text rendering of the grid and the cart drawer.

use crate::catalog::{Price, Product};
use crate::state::{CartSummary, Storefront};
use std::io::{self, Write};

pub fn format_price(symbol: &str, price: Price) -> String {
    format!("{}{}", symbol, price)
}

/// Print products in a compact table
pub fn render_products<W: Write>(
    out: &mut W,
    products: &[&Product],
    currency_symbol: &str,
    slide_index: impl Fn(&Product) -> Option<usize>,
) -> io::Result<()> {
    if products.is_empty() {
        writeln!(out, "No products found in this category.")?;
        return Ok(());
    }

    let name_width = products
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(4)
        .max(4); // "NAME"

    let category_width = products
        .iter()
        .map(|p| p.category.len())
        .max()
        .unwrap_or(8)
        .max(8); // "CATEGORY"

    writeln!(
        out,
        "{:>4} {:<name_width$} {:<category_width$} {:>10} {:<6} {:<7} LIKED",
        "ID",
        "NAME",
        "CATEGORY",
        "PRICE",
        "IMAGE",
        "BADGE",
        name_width = name_width,
        category_width = category_width
    )?;

    for product in products {
        let image = match slide_index(product) {
            Some(index) => format!("{}/{}", index + 1, product.image_count()),
            None => format!("-/{}", product.image_count()),
        };
        writeln!(
            out,
            "{:>4} {:<name_width$} {:<category_width$} {:>10} {:<6} {:<7} {}",
            product.id,
            product.name,
            product.category,
            format_price(currency_symbol, product.price),
            image,
            product.badge.as_deref().unwrap_or("-"),
            if product.liked { "yes" } else { "no" },
            name_width = name_width,
            category_width = category_width
        )?;
    }

    Ok(())
}

/// Print the visible grid of a session
pub fn render_grid<W: Write>(out: &mut W, store: &Storefront) -> io::Result<()> {
    writeln!(out, "Filter: {}", store.active_filter())?;
    let products = store.visible_products();
    render_products(
        out,
        &products,
        &store.settings().currency_symbol,
        |p| store.slide_index(p.id).ok(),
    )
}

/// Print the cart drawer contents and subtotal
pub fn render_cart<W: Write>(
    out: &mut W,
    summary: &CartSummary,
    currency_symbol: &str,
) -> io::Result<()> {
    if summary.lines.is_empty() {
        writeln!(out, "Your cart is empty.")?;
        writeln!(out, "Subtotal: {}", format_price(currency_symbol, Price::ZERO))?;
        return Ok(());
    }

    for line in &summary.lines {
        let product = line.product();
        writeln!(
            out,
            "{:>4} {} ({}) x{} {}",
            product.id,
            product.name,
            product.category,
            line.quantity(),
            format_price(currency_symbol, line.line_total())
        )?;
    }
    writeln!(out, "Items: {}", summary.item_count)?;
    writeln!(out, "Subtotal: {}", format_price(currency_symbol, summary.subtotal))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::catalog::ProductId;
    use crate::config::Settings;

    fn store() -> Storefront {
        let catalog = Catalog::new(vec![
            Product::new(1, "Tee", "Tops", Price::from_cents(2000), vec!["a".into(), "b".into()])
                .with_badge("New"),
            Product::new(2, "Skirt", "Bottoms", Price::from_cents(1550), vec!["c".into()]),
        ])
        .unwrap();
        Storefront::new(catalog, Settings::default())
    }

    #[test]
    fn test_render_grid_shows_slide_and_badge() {
        let store = store();
        let mut out = Vec::new();
        render_grid(&mut out, &store).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Filter: all\n"));
        assert!(text.contains("$20.00"));
        assert!(text.contains("1/2"));
        assert!(text.contains("New"));
    }

    #[test]
    fn test_render_cart_subtotal() {
        let mut store = store();
        store.add_to_cart(ProductId(1), 2).unwrap();
        store.add_to_cart(ProductId(2), 1).unwrap();

        let mut out = Vec::new();
        render_cart(&mut out, &store.cart_summary(), "$").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("x2 $40.00"));
        assert!(text.contains("Items: 3"));
        assert!(text.ends_with("Subtotal: $55.50\n"));
    }

    #[test]
    fn test_render_empty_cart() {
        let store = store();
        let mut out = Vec::new();
        render_cart(&mut out, &store.cart_summary(), "$").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Your cart is empty.\nSubtotal: $0.00\n"
        );
    }
}
