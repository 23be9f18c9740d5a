//! Rendering of display states into region contents.

use crate::models::{OutputFormat, Pokemon};
use serde_json::json;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a result as an HTML fragment.
///
/// Layout: heading, sprite image (alt = name), height in inches, weight
/// in pounds, types. Height and weight are bare numbers.
pub fn render_html(pokemon: &Pokemon) -> String {
    let name = escape_html(&pokemon.name);
    let img = match &pokemon.sprite_url {
        Some(url) => format!(r#"<img src="{}" alt="{name}">"#, escape_html(url)),
        None => format!(r#"<img alt="{name}">"#),
    };

    format!(
        "<h3>{name}</h3>\n{img}\n<p>{}</p>\n<p>{}</p>\n<p>Types: {}</p>",
        pokemon.height_inches(),
        pokemon.weight_pounds(),
        escape_html(&pokemon.type_list()),
    )
}

/// Render a result as plain text lines.
pub fn render_text(pokemon: &Pokemon) -> String {
    let mut lines = vec![pokemon.name.clone()];
    if let Some(url) = &pokemon.sprite_url {
        lines.push(format!("Sprite: {url}"));
    }
    lines.push(format!("Height: {} in", pokemon.height_inches()));
    lines.push(format!("Weight: {} lbs", pokemon.weight_pounds()));
    lines.push(format!("Types: {}", pokemon.type_list()));
    lines.join("\n")
}

/// Render a result as pretty JSON, including the converted units.
pub fn render_json(pokemon: &Pokemon) -> String {
    let value = json!({
        "name": pokemon.name,
        "sprite_url": pokemon.sprite_url,
        "height_decimeters": pokemon.height_decimeters,
        "height_inches": pokemon.height_inches(),
        "weight_hectograms": pokemon.weight_hectograms,
        "weight_pounds": pokemon.weight_pounds(),
        "types": pokemon.types,
    });
    format!("{value:#}")
}

/// Render a result in the requested format.
pub fn render_pokemon(pokemon: &Pokemon, format: OutputFormat) -> String {
    match format {
        OutputFormat::Html => render_html(pokemon),
        OutputFormat::Text => render_text(pokemon),
        OutputFormat::Json => render_json(pokemon),
    }
}

/// Render a failure message in the requested format.
pub fn render_error(message: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Html => escape_html(message),
        OutputFormat::Text => message.to_string(),
        OutputFormat::Json => format!("{:#}", json!({ "error": message })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::*;

    fn gengar() -> Pokemon {
        Pokemon::from_json(&gengar_json()).unwrap()
    }

    #[test]
    fn test_html_layout() {
        let html = render_html(&gengar());
        let expected = format!(
            "<h3>gengar</h3>\n<img src=\"{GENGAR_SPRITE}\" alt=\"gengar\">\n<p>59</p>\n<p>89</p>\n<p>Types: ghost, poison</p>"
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_html_without_sprite_omits_src() {
        let mut pokemon = gengar();
        pokemon.sprite_url = None;
        let html = render_html(&pokemon);
        assert!(html.contains(r#"<img alt="gengar">"#));
        assert!(!html.contains("src="));
    }

    #[test]
    fn test_html_escapes_untrusted_text() {
        let mut pokemon = gengar();
        pokemon.name = "<script>\"x\"</script>".to_string();
        let html = render_html(&pokemon);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;&quot;x&quot;&lt;/script&gt;"));
    }

    #[test]
    fn test_text_layout() {
        let text = render_text(&gengar());
        assert!(text.starts_with("gengar\n"));
        assert!(text.contains("Height: 59 in"));
        assert!(text.contains("Weight: 89 lbs"));
        assert!(text.ends_with("Types: ghost, poison"));
    }

    #[test]
    fn test_json_includes_converted_units() {
        let value: serde_json::Value = serde_json::from_str(&render_json(&gengar())).unwrap();
        assert_eq!(value["name"], "gengar");
        assert_eq!(value["height_inches"], 59);
        assert_eq!(value["weight_pounds"], 89);
        assert_eq!(value["types"][1], "poison");
    }

    #[test]
    fn test_error_rendering() {
        assert_eq!(render_error("a < b", OutputFormat::Html), "a &lt; b");
        assert_eq!(render_error("a < b", OutputFormat::Text), "a < b");
        let value: serde_json::Value =
            serde_json::from_str(&render_error("oh no", OutputFormat::Json)).unwrap();
        assert_eq!(value["error"], "oh no");
    }
}
