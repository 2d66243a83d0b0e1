//! Deterministic SVG placeholders for categories with missing media.

use base64::{Engine as _, engine::general_purpose};

/// Dominant placeholder colour for a category as a CSS `hsl()` value.
pub fn dominant_color(category: &str) -> String {
    format!("hsl({}, 80%, 65%)", category_hue(category))
}

/// Render an inline SVG placeholder for a category slot as a data URI.
///
/// The colour is a pure function of category and index, so the same slot
/// always renders the same placeholder across builds.
pub fn placeholder_image(category: &str, index: usize) -> String {
    let hue = category_hue(category);
    let saturation = 80 + (index % 3) * 10;
    let lightness = 65 - (index % 5) * 5;

    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="300" viewBox="0 0 300 300"><rect width="300" height="300" fill="hsl({hue}, {saturation}%, {lightness}%)"/><text x="50%" y="50%" font-family="Arial" font-size="24" fill="white" text-anchor="middle" dominant-baseline="middle">{category} {index}</text></svg>"#
    );

    format!(
        "data:image/svg+xml;base64,{}",
        general_purpose::STANDARD.encode(svg)
    )
}

fn category_hue(category: &str) -> u32 {
    match category {
        "cakes" => 340,
        "sweets" => 200,
        "catering" => 120,
        _ => 280,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded_svg(category: &str, index: usize) -> String {
        let uri = placeholder_image(category, index);
        let encoded = uri
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("placeholder should be a base64 SVG data URI");
        String::from_utf8(general_purpose::STANDARD.decode(encoded).unwrap()).unwrap()
    }

    #[test]
    fn maps_known_categories_to_fixed_hues() {
        assert_eq!(dominant_color("cakes"), "hsl(340, 80%, 65%)");
        assert_eq!(dominant_color("sweets"), "hsl(200, 80%, 65%)");
        assert_eq!(dominant_color("catering"), "hsl(120, 80%, 65%)");
        assert_eq!(dominant_color("seasonal"), "hsl(280, 80%, 65%)");
    }

    #[test]
    fn placeholder_is_deterministic() {
        assert_eq!(placeholder_image("cakes", 2), placeholder_image("cakes", 2));
        assert_ne!(placeholder_image("cakes", 2), placeholder_image("cakes", 3));
    }

    #[test]
    fn placeholder_embeds_category_colour_and_label() {
        let svg = decoded_svg("sweets", 4);
        assert!(svg.contains("hsl(200, 90%, 45%)"));
        assert!(svg.contains(">sweets 4<"));
    }

    #[test]
    fn index_varies_saturation_and_lightness() {
        let svg = decoded_svg("cakes", 0);
        assert!(svg.contains("hsl(340, 80%, 65%)"));
        let svg = decoded_svg("cakes", 1);
        assert!(svg.contains("hsl(340, 90%, 60%)"));
    }
}
