use std::fmt::Write;

use crate::app::api::CatalogView;

/// Render one line per visible car. Liked cars carry a heart marker.
pub fn render_text(view: &CatalogView) -> String {
    if view.cars.is_empty() {
        return "No cars match the current filters.\n".to_string();
    }

    let mut out = String::new();
    for car in &view.cars {
        let marker = if view.is_liked(&car.id) { "[♥]" } else { "[ ]" };
        let _ = writeln!(
            out,
            "{} {:<6} {:<16} {:<10} {:<8} {}",
            marker,
            car.id,
            car.make,
            car.engine,
            car.body_type,
            format_price(car.price)
        );
    }
    out
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 { format!("${:.0}", price) } else { format!("${:.2}", price) }
}
