//! SVG exporter: converts thumbnail draw instructions into a
//! standalone SVG document string.

use itinera_protocol::DrawInstruction;

/// Render draw instructions as an SVG document.
///
/// One square `<rect>` per instruction, in order, so overpainting
/// behaves like the canvas consumer. `width` and `height` define the
/// viewBox; the canvas clips anything the fit left outside.
pub fn thumbnail_svg(instructions: &[DrawInstruction], width: f64, height: f64) -> String {
    let mut svg = String::with_capacity(instructions.len() * 90 + 200);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#,
    ));
    svg.push_str(&format!(
        r##"<rect width="{width}" height="{height}" fill="#ffffff"/>"##,
    ));

    for inst in instructions {
        let x = inst.center.x - inst.radius;
        let y = inst.center.y - inst.radius;
        let side = 2.0 * inst.radius;
        svg.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="{side}" height="{side}" fill="{}" fill-opacity="{}"/>"#,
            inst.color.to_hex(),
            inst.alpha,
        ));
    }

    svg.push_str("</svg>");
    svg
}
