use serde_json::{Map, Value};

/// Rewrite a snake_case or kebab-case key to camelCase.
///
/// Every `_` or `-` directly followed by an ASCII letter is dropped and the letter is
/// uppercased. A run of separators in front of a letter is dropped as a whole, so the
/// output is a fixed point (`camel_case(&camel_case(k)) == camel_case(k)`). Separators
/// that are not followed by a letter, trailing ones included, are kept.
///
/// ```rust
/// assert_eq!(sendblue::camel_case("media_url"), "mediaUrl");
/// assert_eq!(sendblue::camel_case("no-sep"), "noSep");
/// assert_eq!(sendblue::camel_case("trailing_"), "trailing_");
/// ```
pub fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut separators = String::new();

    for ch in key.chars() {
        if is_separator(ch) {
            separators.push(ch);
            continue;
        }
        if !separators.is_empty() {
            if ch.is_ascii_alphabetic() {
                separators.clear();
                out.push(ch.to_ascii_uppercase());
                continue;
            }
            out.push_str(&separators);
            separators.clear();
        }
        out.push(ch);
    }

    out.push_str(&separators);
    out
}

fn is_separator(ch: char) -> bool {
    ch == '_' || ch == '-'
}

/// Rewrite every object key in `value` to camelCase, recursing through objects and arrays.
///
/// Arrays keep their length and order; strings, numbers, booleans and null are returned
/// untouched (string values are never rewritten, only keys). When two keys collapse to
/// the same camelCase key the later one in iteration order wins.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut normalized = Map::with_capacity(map.len());
            for (key, value) in map {
                normalized.insert(camel_case(&key), normalize_keys(value));
            }
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        scalar => scalar,
    }
}

/// [`normalize_keys`] for a value the caller keeps ownership of.
pub fn normalize_keys_in_place(value: &mut Value) {
    *value = normalize_keys(std::mem::take(value));
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// Same value with every object key blanked out, for comparing structure only.
    fn shape(value: &Value) -> Value {
        match value {
            Value::Object(map) => Value::Array(map.values().map(shape).collect()),
            Value::Array(items) => json!({ "array": items.iter().map(shape).collect::<Vec<_>>() }),
            scalar => scalar.clone(),
        }
    }

    #[test]
    fn camel_case_examples() {
        assert_eq!(camel_case("media_url"), "mediaUrl");
        assert_eq!(camel_case("error_code"), "errorCode");
        assert_eq!(camel_case("already_camel"), "alreadyCamel");
        assert_eq!(camel_case("no-sep"), "noSep");
        assert_eq!(camel_case(""), "");
        assert_eq!(camel_case("trailing_"), "trailing_");
    }

    #[test]
    fn camel_case_uppercases_regardless_of_case() {
        assert_eq!(camel_case("from_Number"), "fromNumber");
        assert_eq!(camel_case("date_sent_utc"), "dateSentUtc");
        assert_eq!(camel_case("accountEmail"), "accountEmail");
    }

    #[test]
    fn camel_case_keeps_separators_before_non_letters() {
        assert_eq!(camel_case("line_1"), "line_1");
        assert_eq!(camel_case("a_1_b"), "a_1B");
        assert_eq!(camel_case("a-_"), "a-_");
        assert_eq!(camel_case("_id"), "Id");
    }

    #[test]
    fn camel_case_drops_separator_runs_before_letters() {
        assert_eq!(camel_case("a__b"), "aB");
        assert_eq!(camel_case("a_-b"), "aB");
        for key in ["a__b", "a_-b", "x_1_y", "__proto__", "send-style_", "Ü_ber"] {
            let once = camel_case(key);
            assert_eq!(camel_case(&once), once, "not a fixed point for {key}");
        }
    }

    #[test]
    fn camel_case_leaves_non_ascii_letters_alone() {
        assert_eq!(camel_case("caf_é"), "caf_é");
    }

    #[test]
    fn normalize_nested_example() {
        let input = json!({
            "status": "SENT",
            "error_detail": {
                "error_code": "42",
                "nested_list": [{ "from_number": "x" }]
            }
        });
        let expected = json!({
            "status": "SENT",
            "errorDetail": {
                "errorCode": "42",
                "nestedList": [{ "fromNumber": "x" }]
            }
        });
        assert_eq!(normalize_keys(input), expected);
    }

    #[test]
    fn normalize_passes_scalars_through() {
        for scalar in [
            json!(null),
            json!(true),
            json!(42),
            json!(-1.5),
            json!("a_b"),
            json!(""),
        ] {
            assert_eq!(normalize_keys(scalar.clone()), scalar);
        }
    }

    #[test]
    fn normalize_never_touches_string_values() {
        let input = json!({ "send_style": "slam_effect", "tags": ["a_b", "c-d"] });
        assert_eq!(
            normalize_keys(input),
            json!({ "sendStyle": "slam_effect", "tags": ["a_b", "c-d"] })
        );
    }

    #[test]
    fn normalize_empty_containers() {
        assert_eq!(normalize_keys(json!({})), json!({}));
        assert_eq!(normalize_keys(json!([])), json!([]));
    }

    #[test]
    fn normalize_keeps_key_order() {
        let normalized = normalize_keys(json!({ "z_last": 1, "a_first": 2, "m_mid": 3 }));
        let keys = normalized
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["zLast", "aFirst", "mMid"]);
    }

    #[test]
    fn normalize_preserves_structure() {
        let input = json!([
            { "message_handle": "h1", "media_urls": ["u_1", "u_2"], "is_outbound": false },
            [[{ "deep_key": [1, 2, 3] }], []],
            null,
            { "group_info": { "participants": [{ "phone_number": "+1" }, { "phone_number": "+2" }] } }
        ]);
        let normalized = normalize_keys(input.clone());
        assert_eq!(shape(&normalized), shape(&input));
        assert_eq!(normalized[0]["mediaUrls"], json!(["u_1", "u_2"]));
        assert_eq!(normalized[3]["groupInfo"]["participants"][1]["phoneNumber"], "+2");
    }

    #[test]
    fn normalize_is_idempotent() {
        let input = json!({
            "account_email": "a@b.com",
            "already_camel": { "x__y": [{ "p-q_r": null }] },
            "trailing_": 1,
            "list": [{ "a_1_b": true }]
        });
        let once = normalize_keys(input);
        assert_eq!(normalize_keys(once.clone()), once);
    }

    #[test]
    fn normalize_collision_last_write_wins() {
        let normalized = normalize_keys(json!({ "a-b": 1, "a_b": 2 }));
        assert_eq!(normalized, json!({ "aB": 2 }));

        let normalized = normalize_keys(json!({ "a_b": 2, "a-b": 1 }));
        assert_eq!(normalized, json!({ "aB": 1 }));
    }

    #[test]
    fn normalize_recurses_without_depth_limit() {
        let mut value = json!({ "leaf_value": "bottom" });
        for _ in 0..200 {
            value = json!([{ "next_level": value }]);
        }

        let mut cursor = &normalize_keys(value);
        for _ in 0..200 {
            cursor = &cursor[0]["nextLevel"];
        }
        assert_eq!(cursor, &json!({ "leafValue": "bottom" }));
    }

    #[test]
    fn normalize_in_place_matches_owned() {
        let input = json!({ "from_number": "+1", "nested": [{ "to_number": "+2" }] });
        let mut in_place = input.clone();
        normalize_keys_in_place(&mut in_place);
        assert_eq!(in_place, normalize_keys(input));
    }
}
