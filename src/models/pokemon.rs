//! Lookup result types for pokedex.
//!
//! The wire payload is decoded into private serde structs and then
//! validated into a `Pokemon`. Missing required fields never reach the
//! display as blanks; they fail the whole decode.

use super::LookupError;
use serde::{Deserialize, Serialize};

/// Centimeters per inch.
const CM_PER_INCH: f64 = 2.54;

/// Pounds per kilogram, as used by the display.
const LB_PER_KG: f64 = 2.2;

/// Largest measurement accepted from the wire (2^53, the exact-integer
/// limit of a JSON number). Keeps both conversions inside `u64`.
pub const MAX_MEASUREMENT: f64 = 9_007_199_254_740_992.0;

/// Wire shape of `GET /pokemon/{id}`. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct PokemonPayload {
    name: String,
    sprites: SpritesPayload,
    height: f64,
    weight: f64,
    types: Vec<TypeSlot>,
}

#[derive(Debug, Deserialize)]
struct SpritesPayload {
    #[serde(default)]
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

/// Decoded representation of a successful lookup.
///
/// Constructed fresh from each 200 response and never merged with a
/// previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pokemon {
    /// Creature name as returned by the service
    pub name: String,

    /// Front sprite URL (the service sends `null` for some forms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite_url: Option<String>,

    /// Height in decimeters
    pub height_decimeters: f64,

    /// Weight in hectograms
    pub weight_hectograms: f64,

    /// Type names in slot order
    pub types: Vec<String>,
}

impl Pokemon {
    /// Decode and validate a response body.
    pub fn from_json(body: &str) -> Result<Self, LookupError> {
        let payload: PokemonPayload = serde_json::from_str(body)?;
        Self::from_payload(payload)
    }

    /// Height in whole inches.
    pub fn height_inches(&self) -> u64 {
        decimeters_to_inches(self.height_decimeters)
    }

    /// Weight in whole pounds.
    pub fn weight_pounds(&self) -> u64 {
        hectograms_to_pounds(self.weight_hectograms)
    }

    /// Type names joined for display.
    pub fn type_list(&self) -> String {
        self.types.join(", ")
    }

    fn from_payload(payload: PokemonPayload) -> Result<Self, LookupError> {
        if payload.name.trim().is_empty() {
            return Err(LookupError::Validation("empty name".to_string()));
        }

        if payload.types.iter().any(|t| t.kind.name.trim().is_empty()) {
            return Err(LookupError::Validation("empty type name".to_string()));
        }

        check_measurement("height", payload.height)?;
        check_measurement("weight", payload.weight)?;

        Ok(Self {
            name: payload.name,
            sprite_url: payload.sprites.front_default,
            height_decimeters: payload.height,
            weight_hectograms: payload.weight,
            types: payload.types.into_iter().map(|t| t.kind.name).collect(),
        })
    }
}

fn check_measurement(field: &str, value: f64) -> Result<(), LookupError> {
    if !value.is_finite() || !(0.0..=MAX_MEASUREMENT).contains(&value) {
        return Err(LookupError::Validation(format!(
            "{field} out of range: {value}"
        )));
    }
    Ok(())
}

/// round(dm * 10 / 2.54), for `0 <= dm <= MAX_MEASUREMENT`
pub fn decimeters_to_inches(decimeters: f64) -> u64 {
    (decimeters * 10.0 / CM_PER_INCH).round() as u64
}

/// round(hg / 10 * 2.2), for `0 <= hg <= MAX_MEASUREMENT`
pub fn hectograms_to_pounds(hectograms: f64) -> u64 {
    (hectograms / 10.0 * LB_PER_KG).round() as u64
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub const GENGAR_SPRITE: &str =
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/94.png";

    pub fn gengar_json() -> String {
        format!(
            r#"{{
                "height": 15,
                "id": 94,
                "name": "gengar",
                "sprites": {{ "front_default": "{GENGAR_SPRITE}" }},
                "types": [
                    {{ "slot": 1, "type": {{ "name": "ghost", "url": "https://pokeapi.co/api/v2/type/8/" }} }},
                    {{ "slot": 2, "type": {{ "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" }} }}
                ],
                "weight": 405
            }}"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_decode_sample_payload() {
        let pokemon = Pokemon::from_json(&gengar_json()).unwrap();
        assert_eq!(pokemon.name, "gengar");
        assert_eq!(pokemon.sprite_url.as_deref(), Some(GENGAR_SPRITE));
        assert_eq!(pokemon.types, vec!["ghost", "poison"]);
        assert_eq!(pokemon.height_inches(), 59);
        assert_eq!(pokemon.weight_pounds(), 89);
        assert_eq!(pokemon.type_list(), "ghost, poison");
    }

    #[test]
    fn test_conversions_round_to_nearest() {
        assert_eq!(decimeters_to_inches(0.0), 0);
        assert_eq!(decimeters_to_inches(1.0), 4); // 3.937
        assert_eq!(decimeters_to_inches(7.0), 28); // 27.559
        assert_eq!(decimeters_to_inches(20.0), 79); // 78.740
        assert_eq!(hectograms_to_pounds(0.0), 0);
        assert_eq!(hectograms_to_pounds(1.0), 0); // 0.22
        assert_eq!(hectograms_to_pounds(69.0), 15); // 15.18
        assert_eq!(hectograms_to_pounds(60.0), 13); // 13.2
        assert_eq!(hectograms_to_pounds(9999.0), 2200); // 2199.78
    }

    #[test]
    fn test_conversions_past_u32_range() {
        assert_eq!(decimeters_to_inches(2_000_000_000.0), 7_874_015_748);
        assert_eq!(decimeters_to_inches(4_294_967_295.0), 16_909_320_059);
        assert_eq!(hectograms_to_pounds(4_294_967_295.0), 944_892_805);

        let body = r#"{"name":"huge","sprites":{},"height":2000000000,"weight":4294967295,"types":[]}"#;
        let pokemon = Pokemon::from_json(body).unwrap();
        assert_eq!(pokemon.height_inches(), 7_874_015_748);
        assert_eq!(pokemon.weight_pounds(), 944_892_805);
    }

    #[test]
    fn test_integral_float_measurements_accepted() {
        let body = r#"{"name":"gengar","sprites":{},"height":15.0,"weight":405.0,"types":[]}"#;
        let pokemon = Pokemon::from_json(body).unwrap();
        assert_eq!(pokemon.height_inches(), 59);
        assert_eq!(pokemon.weight_pounds(), 89);
    }

    #[test]
    fn test_out_of_range_measurements_rejected() {
        for (height, weight) in [("-1", "10"), ("10", "-0.5"), ("1e300", "10")] {
            let body = format!(
                r#"{{"name":"x","sprites":{{}},"height":{height},"weight":{weight},"types":[]}}"#
            );
            assert!(matches!(
                Pokemon::from_json(&body),
                Err(LookupError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let err = Pokemon::from_json(r#"{"name":"banana"}"#).unwrap_err();
        assert!(matches!(err, LookupError::Validation(_)));
        assert!(!err.to_string().contains("banana"));
    }

    #[test]
    fn test_malformed_json_fails_validation() {
        let err = Pokemon::from_json("<html>oops</html>").unwrap_err();
        assert!(matches!(err, LookupError::Validation(_)));
    }

    #[test]
    fn test_null_sprite_is_allowed() {
        let body = r#"{"name":"missingno","sprites":{"front_default":null},"height":10,"weight":10,"types":[]}"#;
        let pokemon = Pokemon::from_json(body).unwrap();
        assert_eq!(pokemon.sprite_url, None);
        assert!(pokemon.types.is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        let body = r#"{"name":"  ","sprites":{},"height":1,"weight":1,"types":[]}"#;
        assert!(matches!(
            Pokemon::from_json(body),
            Err(LookupError::Validation(_))
        ));
    }
}
