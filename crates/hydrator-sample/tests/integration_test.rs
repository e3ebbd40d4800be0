use hydrator_sample::model::{Filter, RecaptchaResult, Search, SearchFilter, UnionTypeSearch};
use input_hydrator::{BadInputError, HydrateError, Hydrator, Request};
use serde_json::json;
use std::sync::Arc;

fn request(value: serde_json::Value) -> Request {
    serde_json::from_value(value).expect("request literal must be a JSON object")
}

fn search(value: serde_json::Value) -> Search {
    Hydrator::new()
        .hydrate(&request(value))
        .expect("Failed to hydrate search")
}

fn union_search(value: serde_json::Value) -> UnionTypeSearch {
    Hydrator::new()
        .hydrate(&request(value))
        .expect("Failed to hydrate union search")
}

fn recaptcha(value: serde_json::Value) -> RecaptchaResult {
    Hydrator::new()
        .hydrate(&request(value))
        .expect("Failed to hydrate recaptcha result")
}

fn bad_input(err: HydrateError) -> BadInputError {
    match err {
        HydrateError::BadInput(e) => e,
        other => panic!("expected bad input, got {other:?}"),
    }
}

#[test]
fn test_search_defaults_and_limits() {
    // 1. Absent limit takes the declared default
    let result = search(json!({"query": "Hello, World!"}));
    assert_eq!(result.query, "Hello, World!");
    assert_eq!(result.limit, Some(100));
    assert_eq!(result.filter, None);

    // 2. Integers pass through, zero included
    assert_eq!(search(json!({"query": "q", "limit": 25})).limit, Some(25));
    assert_eq!(search(json!({"query": "q", "limit": 0})).limit, Some(0));

    // 3. Present null and blank strings become None, not the default
    let result = search(json!({"query": "q", "limit": null, "filter": {}}));
    assert_eq!(result.limit, None);
    assert_eq!(
        result.filter,
        Some(Filter {
            maximum_price: None,
            minimum_price: None,
        })
    );
    assert_eq!(search(json!({"query": "q", "limit": ""})).limit, None);

    // 4. Numeric strings
    assert_eq!(search(json!({"query": "q", "limit": "25"})).limit, Some(25));
    assert_eq!(search(json!({"query": "q", "limit": "000"})).limit, Some(0));
}

#[test]
fn test_nested_filter_is_hydrated() {
    let result = search(json!({
        "query": "Hello, World!",
        "limit": "25",
        "filter": {
            "maximum_price": "100",
            "minimum_price": "80",
        }
    }));

    assert_eq!(result.limit, Some(25));
    let filter = result.filter.expect("filter should be hydrated");
    assert_eq!(filter.maximum_price, Some(100));
    assert_eq!(filter.minimum_price, Some(80));
}

#[test]
fn test_recaptcha_coercions() {
    let result = recaptcha(json!({"success": true, "action": "registration", "score": 0.9}));
    assert!(result.success);
    assert_eq!(result.action, "registration");
    assert_eq!(result.score, 0.9);

    let result = recaptcha(json!({"success": true, "action": "registration", "score": "0.9"}));
    assert!(result.success);
    assert_eq!(result.score, 0.9);

    let result = recaptcha(json!({"success": "0", "action": "registration", "score": "0.0"}));
    assert!(!result.success);
    assert_eq!(result.score, 0.0);

    let result = recaptcha(json!({"success": 0, "action": "registration", "score": "0"}));
    assert!(!result.success);
    assert_eq!(result.score, 0.0);

    let result = recaptcha(json!({"success": "1", "action": "registration", "score": "1"}));
    assert!(result.success);
    assert_eq!(result.score, 1.0);

    let result = recaptcha(json!({"success": 1, "action": "registration", "score": 1}));
    assert!(result.success);
    assert_eq!(result.score, 1.0);
}

#[test]
fn test_union_filter_alternatives() {
    let result = union_search(json!({"query": "Hello, World!"}));
    assert_eq!(result.limit, Some(100));
    assert_eq!(result.filter, None);

    assert_eq!(union_search(json!({"query": "q", "limit": null})).limit, None);
    assert_eq!(union_search(json!({"query": "q", "limit": ""})).limit, None);
    assert_eq!(union_search(json!({"query": "q", "limit": "000"})).limit, Some(0));

    // A map hydrates the structured alternative
    let result = union_search(json!({
        "query": "Hello, World!",
        "limit": "25",
        "filter": {"maximum_price": "100", "minimum_price": "80"}
    }));
    assert_eq!(
        result.filter,
        Some(SearchFilter::Filter(Filter {
            maximum_price: Some(100),
            minimum_price: Some(80),
        }))
    );

    // Anything else falls through to the string alternative, stored verbatim
    let result = union_search(json!({
        "query": "Hello, World!",
        "limit": "25",
        "filter": "maximum_price=100&minimum_price=80"
    }));
    assert_eq!(
        result.filter,
        Some(SearchFilter::Query(
            "maximum_price=100&minimum_price=80".to_string()
        ))
    );

    // Neither alternative takes a number
    let err = Hydrator::new()
        .hydrate::<UnionTypeSearch>(&request(json!({"query": "q", "filter": 5})))
        .unwrap_err();
    assert_eq!(
        bad_input(err).to_string(),
        "field \"filter\" has an incorrect type of \"int\", \"null|Filter|string\" was expected."
    );
}

#[test]
fn test_union_blank_filter_is_null() {
    // null is declared first, so it claims blanks before the string alternative
    assert_eq!(union_search(json!({"query": "q", "filter": ""})).filter, None);
    assert_eq!(union_search(json!({"query": "q", "filter": null})).filter, None);

    // an empty list still reads as an all-optional record
    assert_eq!(
        union_search(json!({"query": "q", "filter": []})).filter,
        Some(SearchFilter::Filter(Filter {
            maximum_price: None,
            minimum_price: None,
        }))
    );
}

#[test]
fn test_leading_zero_integers_are_rejected() {
    let err = Hydrator::new()
        .hydrate::<Search>(&request(json!({"query": "Hello, World!", "limit": "025"})))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "field \"limit\" has an incorrect type of \"string\", \"int\" was expected."
    );
    assert!(err.is_bad_input());
}

#[test]
fn test_non_map_nested_input_is_rejected() {
    let err = Hydrator::new()
        .hydrate::<Search>(&request(json!({
            "query": "Hello, World!",
            "limit": "25",
            "filter": "maximum_price=100&minimum_price=80"
        })))
        .unwrap_err();

    assert_eq!(
        bad_input(err),
        BadInputError::invalid_field_type("filter", "Filter", "string")
    );
}

#[test]
fn test_blank_nested_input_is_rejected() {
    for blank in [json!(null), json!("")] {
        let actual = if blank.is_null() { "null" } else { "string" };
        let err = Hydrator::new()
            .hydrate::<Search>(&request(json!({"query": "q", "filter": blank})))
            .unwrap_err();

        assert_eq!(
            bad_input(err),
            BadInputError::invalid_field_type("filter", "Filter", actual)
        );
    }

    // absent still falls back to the declared default
    assert_eq!(search(json!({"query": "q"})).filter, None);
}

#[test]
fn test_empty_list_hydrates_nested_input() {
    let result = search(json!({"query": "q", "filter": []}));
    assert_eq!(
        result.filter,
        Some(Filter {
            maximum_price: None,
            minimum_price: None,
        })
    );
}

#[test]
fn test_nested_errors_propagate_unchanged() {
    let err = Hydrator::new()
        .hydrate::<Search>(&request(json!({
            "query": "q",
            "filter": {"maximum_price": "1e3"}
        })))
        .unwrap_err();

    assert_eq!(
        bad_input(err),
        BadInputError::invalid_field_type("maximum_price", "int", "string")
    );
}

#[test]
fn test_missing_required_field() {
    let err = Hydrator::new().hydrate::<Search>(&Request::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "required field \"query\" is missing from the request."
    );

    let err = Hydrator::new()
        .hydrate::<RecaptchaResult>(&request(json!({"success": true, "action": "login"})))
        .unwrap_err();
    assert_eq!(bad_input(err), BadInputError::missing_field("score"));
}

#[test]
fn test_optional_only_inputs_hydrate_from_empty_request() {
    let filter: Filter = Hydrator::new().hydrate(&Request::new()).unwrap();
    assert_eq!(
        filter,
        Filter {
            maximum_price: None,
            minimum_price: None,
        }
    );
}

#[test]
fn test_sample_inputs_validate() {
    let hydrator = Hydrator::new();
    assert!(hydrator.validate::<Search>().is_ok());
    assert!(hydrator.validate::<UnionTypeSearch>().is_ok());
    assert!(hydrator.validate::<RecaptchaResult>().is_ok());
}

/// One hydrator shared by many tasks on a multi-threaded runtime.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_hydrator_across_threads() {
    let hydrator = Arc::new(Hydrator::new());

    let handles: Vec<_> = (0..32i64)
        .map(|i| {
            let hydrator = Arc::clone(&hydrator);
            tokio::task::spawn_blocking(move || {
                let request = request(json!({
                    "query": format!("query {i}"),
                    "limit": i.to_string(),
                    "filter": {"maximum_price": i * 10}
                }));
                hydrator.hydrate::<Search>(&request)
            })
        })
        .collect();

    for (i, handle) in (0..32i64).zip(handles) {
        let result = handle.await.expect("task panicked").expect("hydration failed");
        assert_eq!(result.query, format!("query {i}"));
        assert_eq!(result.limit, Some(i));
        assert_eq!(
            result.filter.and_then(|f| f.maximum_price),
            Some(i * 10)
        );
    }
}
