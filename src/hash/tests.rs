//! Hash tests.

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    use crate::enumerable::Enumerable;
    use crate::error::ToolbeltError;
    use crate::hash::{Hash, Pair};
    use crate::value::Value;

    fn sample() -> Hash {
        [("a", 1i64), ("b", 2)].into_iter().collect()
    }

    #[test]
    fn test_construct_round_trip() {
        let mut source: IndexMap<String, Value> = IndexMap::new();
        source.insert("x".to_string(), Value::Int(1));
        source.insert("y".to_string(), Value::from("two"));

        let hash = Hash::from(&source);
        assert_eq!(hash.to_object(), source);

        // the defensive copy means mutating the hash leaves the source alone
        let mut hash = hash;
        hash.set("x", 99i64);
        assert_eq!(source.get("x"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_get_set_unset() {
        let mut hash = Hash::new();
        assert!(hash.is_empty());
        assert_eq!(hash.get("k"), None);

        let stored = hash.set("k", "v");
        assert_eq!(stored, Value::from("v"));
        assert_eq!(hash.get("k"), Some(&Value::from("v")));
        assert_eq!(hash.len(), 1);

        assert_eq!(hash.unset("k"), Some(Value::from("v")));
        assert_eq!(hash.unset("k"), None);
        assert!(hash.is_empty());
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut hash = sample();
        hash.set("a", 10i64);
        assert_eq!(hash.get("a"), Some(&Value::Int(10)));
        // overwriting keeps the original position
        assert_eq!(hash.keys(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_unset_preserves_order() {
        let mut hash: Hash = [("a", 1i64), ("b", 2), ("c", 3)].into_iter().collect();
        hash.unset("b");
        assert_eq!(hash.keys(), vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_keys_and_values_are_parallel() {
        let hash = sample();
        assert_eq!(hash.keys(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(hash.values(), vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn test_index_of() {
        let hash: Hash = [("x", 1i64), ("y", 2), ("z", 2)].into_iter().collect();
        assert_eq!(hash.index_of(&Value::Int(2)), Some("y".to_string()));
        assert_eq!(hash.index_of(&Value::Int(99)), None);
        // strict semantics: no string/number coercion, but Int and Float
        // are both numbers
        assert_eq!(hash.index_of(&Value::from("2")), None);
        assert_eq!(hash.index_of(&Value::Float(2.0)), Some("y".to_string()));
    }

    #[test]
    fn test_merge_is_non_destructive() {
        let a = sample();
        let b: Hash = [("b", 20i64), ("c", 30)].into_iter().collect();

        let merged = a.merge(&b);
        assert_eq!(merged.get("a"), Some(&Value::Int(1)));
        assert_eq!(merged.get("b"), Some(&Value::Int(20)));
        assert_eq!(merged.get("c"), Some(&Value::Int(30)));

        // receiver untouched
        assert_eq!(a.get("b"), Some(&Value::Int(2)));
        assert_eq!(a.get("c"), None);
    }

    #[test]
    fn test_update_mutates_and_chains() {
        let mut a = sample();
        let b: Hash = [("b", 20i64), ("c", 30)].into_iter().collect();

        let result_len = a.update(&b).len();
        assert_eq!(result_len, 3);
        assert_eq!(a.get("b"), Some(&Value::Int(20)));
        assert_eq!(a.get("c"), Some(&Value::Int(30)));
    }

    #[test]
    fn test_query_string_scalars_arrays_and_undefined() {
        let mut hash = Hash::new();
        hash.set("a", 1i64);
        hash.set("b", vec![Value::Int(2), Value::Int(3)]);
        hash.set("c", Value::Undefined);
        assert_eq!(hash.to_query_string(), "a=1&b=2&b=3&c");
    }

    #[test]
    fn test_query_string_percent_encodes() {
        let mut hash = Hash::new();
        hash.set("a key", "c&d=e");
        assert_eq!(hash.to_query_string(), "a%20key=c%26d%3De");
    }

    #[test]
    fn test_query_string_null_is_empty_value() {
        let mut hash = Hash::new();
        hash.set("n", Value::Null);
        assert_eq!(hash.to_query_string(), "n=");
    }

    #[test]
    fn test_query_string_undefined_array_element() {
        let mut hash = Hash::new();
        hash.set("k", vec![Value::Int(1), Value::Undefined, Value::Int(2)]);
        assert_eq!(hash.to_query_string(), "k=1&k&k=2");
    }

    #[test]
    fn test_query_string_skips_hash_values() {
        let mut hash = Hash::new();
        hash.set("a", 1i64);
        hash.set("nested", Hash::from_iter([("x", 1i64)]));
        hash.set("b", 2i64);
        assert_eq!(hash.to_query_string(), "a=1&b=2");
    }

    #[test]
    fn test_inspect() {
        let mut hash = Hash::new();
        hash.set("a", 1i64);
        hash.set("b", "two");
        assert_eq!(hash.inspect(), "#<Hash:{'a': 1, 'b': 'two'}>");
        assert_eq!(Hash::new().inspect(), "#<Hash:{}>");
    }

    #[test]
    fn test_to_json() {
        let mut hash = Hash::new();
        hash.set("a", 1i64);
        hash.set("b", vec![Value::Int(2), Value::Undefined]);
        hash.set("c", Value::Null);
        hash.set("skipped", Value::Undefined);
        let json = hash.to_json().unwrap();
        assert_eq!(json, r#"{"a":1,"b":[2,null],"c":null}"#);
    }

    #[test]
    fn test_try_from_value() {
        let hash_value = Value::from(sample());
        let hash = Hash::try_from(hash_value).unwrap();
        assert_eq!(hash.len(), 2);

        let err = Hash::try_from(Value::Int(3)).unwrap_err();
        match err {
            ToolbeltError::NotAHash { found } => assert_eq!(found, "Int"),
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(
            Hash::try_from(Value::from("x")).unwrap_err().to_string(),
            "expected a Hash, got String"
        );
    }

    #[test]
    fn test_keys_shadowing_builtin_names() {
        // a key named like an inherited JS object member is an ordinary key
        let mut hash = Hash::new();
        assert_eq!(hash.get("toString"), None);
        hash.set("toString", "visible");
        assert_eq!(hash.get("toString"), Some(&Value::from("visible")));
        assert_eq!(hash.unset("toString"), Some(Value::from("visible")));
        assert_eq!(hash.get("toString"), None);
    }

    #[test]
    fn test_clone_independence() {
        let a = sample();
        let mut b = a.clone();
        b.set("a", 99i64);
        assert_eq!(a.get("a"), Some(&Value::Int(1)));
        assert_eq!(b.get("a"), Some(&Value::Int(99)));
    }

    #[test]
    fn test_each_yields_pairs_in_order() {
        let hash = sample();
        let mut seen = Vec::new();
        hash.each(|pair| seen.push(pair.clone()));
        assert_eq!(seen, vec![Pair::new("a", 1i64), Pair::new("b", 2i64)]);

        // positional access, key first
        let (key, value) = seen.remove(0).into_tuple();
        assert_eq!(key, "a");
        assert_eq!(value, Value::Int(1));
    }

    #[test]
    fn test_enumerable_over_hash() {
        let hash: Hash = [("a", 1i64), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(hash.count(), 3);
        assert_eq!(
            hash.inject(0i64, |acc, pair| match pair.value {
                Value::Int(n) => acc + n,
                _ => acc,
            }),
            6
        );
        let big = hash.select(|pair| pair.value == Value::Int(3));
        assert_eq!(big, vec![Pair::new("c", 3i64)]);
        assert!(hash.any(|pair| pair.key == "b"));
        assert!(hash.all(|pair| !pair.value.is_undefined()));
    }

    #[test]
    fn test_to_template_replacements() {
        let hash = sample();
        let replacements = hash.to_template_replacements();
        assert_eq!(replacements.get("a"), Some(&Value::Int(1)));
        assert_eq!(replacements.len(), 2);
    }

    #[test]
    fn test_display() {
        let hash = sample();
        assert_eq!(hash.to_string(), "{a => 1, b => 2}");
    }
}
